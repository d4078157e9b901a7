//! Saving downloaded bodies to the user's disk.

use drive_model::DownloadedFile;

use crate::bridge;

/// Pause between files of a bulk download.
pub const BULK_DOWNLOAD_DELAY_MS: u32 = 100;

/// Hands `file` to the browser as a download named `file_name`.
///
/// # Errors
///
/// Returns an error when the blob or the temporary link cannot be created.
pub fn save_download(file_name: &str, file: &DownloadedFile) -> Result<(), String> {
    bridge::save_blob(&file.bytes, file.content_type_or_default(), file_name)
}

/// Resolves after `ms` milliseconds (immediately off-wasm).
pub async fn pause(ms: u32) {
    bridge::sleep_ms(ms).await;
}
