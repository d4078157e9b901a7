//! REST endpoint paths, relative to [`ApiConfig`](crate::ApiConfig).

use drive_model::{ids_query, FileId, FileKind};

/// `POST` credentials.
pub const LOGIN: &str = "/login";
/// `POST` a new account.
pub const REGISTER: &str = "/register";
/// `GET` or `PATCH` the current profile.
pub const ME: &str = "/users/me";
/// `POST` a multipart upload.
pub const FILES: &str = "/files";

/// `GET` the files of one kind.
pub fn list_files(kind: FileKind) -> String {
    format!("/files?type={}", kind.as_query())
}

/// `DELETE` to move files to the trash.
pub fn trash(ids: &[FileId]) -> String {
    format!("/files?ids={}", ids_query(ids))
}

/// `POST` to restore trashed files.
pub fn restore(ids: &[FileId]) -> String {
    format!("/files/restore?ids={}", ids_query(ids))
}

/// `DELETE` to remove files for good.
pub fn delete_permanently(ids: &[FileId]) -> String {
    format!("/files/permanent?ids={}", ids_query(ids))
}

/// `PATCH` to flip the favorite flag.
pub fn toggle_favorite(id: FileId) -> String {
    format!("/files/{id}/favorite")
}

/// Primary download endpoint.
pub fn download(filename: &str) -> String {
    format!("/files/download?filename={}", urlencoding::encode(filename))
}

/// Static-file fallback used when the download endpoint answers 404.
pub fn download_fallback(filename: &str) -> String {
    format!("/uploads/{}", urlencoding::encode(filename))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bulk_endpoints_carry_comma_separated_ids() {
        let ids = [FileId(1), FileId(2)];
        assert_eq!(trash(&ids), "/files?ids=1,2");
        assert_eq!(restore(&ids), "/files/restore?ids=1,2");
        assert_eq!(delete_permanently(&ids), "/files/permanent?ids=1,2");
    }

    #[test]
    fn list_and_favorite_paths() {
        assert_eq!(list_files(FileKind::Photo), "/files?type=photo");
        assert_eq!(toggle_favorite(FileId(9)), "/files/9/favorite");
    }

    #[test]
    fn download_paths_encode_the_stored_name() {
        assert_eq!(
            download("my report.pdf"),
            "/files/download?filename=my%20report.pdf"
        );
        assert_eq!(download_fallback("a&b.png"), "/uploads/a%26b.png");
    }
}
