//! REST implementation of [`DriveApi`].

use drive_model::{
    ApiError, DownloadedFile, DriveApi, DriveApiFuture, FileId, FileItem, FileKind, LoginForm,
    ProfileUpdate, RegisterForm, TokenResponse, UploadPayload, User,
};
use leptos::logging;

use crate::config::ApiConfig;
use crate::endpoints;
use crate::transport::{BrowserTransport, HttpMethod, HttpRequest, HttpResponse, HttpTransport};

#[derive(Debug, Clone)]
/// [`DriveApi`] over HTTP.
///
/// Every request carries the transport's bearer token. A 401 response expires the session through
/// [`HttpTransport::session_expired`]; 5xx responses are logged as errors and other 4xx responses
/// as warnings.
pub struct HttpDriveApi<T = BrowserTransport> {
    config: ApiConfig,
    transport: T,
}

impl HttpDriveApi<BrowserTransport> {
    /// Creates the browser client.
    pub fn browser(config: ApiConfig) -> Self {
        Self::with_transport(config, BrowserTransport)
    }
}

impl<T: HttpTransport> HttpDriveApi<T> {
    /// Creates a client over a custom transport.
    pub fn with_transport(config: ApiConfig, transport: T) -> Self {
        Self { config, transport }
    }

    /// Underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn request(&self, method: HttpMethod, path: &str) -> HttpRequest {
        HttpRequest::new(method, self.config.url(path)).with_bearer(self.transport.token())
    }

    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let url = request.url.clone();
        let response = self.transport.send(request).await?;
        response.error_for_status().map_err(|err| {
            self.report(&url, &err);
            err
        })
    }

    fn report(&self, url: &str, err: &ApiError) {
        if *err == ApiError::Unauthorized {
            self.transport.session_expired();
        }
        if err.is_server_error() {
            logging::error!("server error from {url}: {err}");
        } else {
            logging::warn!("client error from {url}: {err}");
        }
    }

    async fn fetch_download(&self, filename: &str) -> Result<DownloadedFile, ApiError> {
        let primary = self.request(HttpMethod::Get, &endpoints::download(filename));
        let response = match self.execute(primary).await {
            Err(ApiError::NotFound) => {
                logging::debug_warn!("download endpoint has no {filename}; trying static uploads");
                let fallback =
                    self.request(HttpMethod::Get, &endpoints::download_fallback(filename));
                self.execute(fallback).await?
            }
            other => other?,
        };

        if response.body.is_empty() {
            return Err(ApiError::EmptyDownload);
        }
        Ok(DownloadedFile {
            bytes: response.body,
            content_type: response.content_type,
        })
    }
}

impl<T: HttpTransport> DriveApi for HttpDriveApi<T> {
    fn login<'a>(
        &'a self,
        form: &'a LoginForm,
    ) -> DriveApiFuture<'a, Result<TokenResponse, ApiError>> {
        Box::pin(async move {
            let request = self.request(HttpMethod::Post, endpoints::LOGIN).with_json(form)?;
            self.execute(request).await?.json()
        })
    }

    fn register<'a>(
        &'a self,
        form: &'a RegisterForm,
    ) -> DriveApiFuture<'a, Result<TokenResponse, ApiError>> {
        Box::pin(async move {
            let request = self
                .request(HttpMethod::Post, endpoints::REGISTER)
                .with_json(form)?;
            self.execute(request).await?.json()
        })
    }

    fn me<'a>(&'a self) -> DriveApiFuture<'a, Result<User, ApiError>> {
        Box::pin(async move {
            self.execute(self.request(HttpMethod::Get, endpoints::ME))
                .await?
                .json()
        })
    }

    fn update_profile<'a>(
        &'a self,
        update: &'a ProfileUpdate,
    ) -> DriveApiFuture<'a, Result<User, ApiError>> {
        Box::pin(async move {
            let request = self.request(HttpMethod::Patch, endpoints::ME).with_json(update)?;
            self.execute(request).await?.json()
        })
    }

    fn list_files<'a>(
        &'a self,
        kind: FileKind,
    ) -> DriveApiFuture<'a, Result<Vec<FileItem>, ApiError>> {
        Box::pin(async move {
            self.execute(self.request(HttpMethod::Get, &endpoints::list_files(kind)))
                .await?
                .json()
        })
    }

    fn trash<'a>(&'a self, ids: &'a [FileId]) -> DriveApiFuture<'a, Result<(), ApiError>> {
        Box::pin(async move {
            self.execute(self.request(HttpMethod::Delete, &endpoints::trash(ids)))
                .await
                .map(|_| ())
        })
    }

    fn restore<'a>(&'a self, ids: &'a [FileId]) -> DriveApiFuture<'a, Result<(), ApiError>> {
        Box::pin(async move {
            self.execute(self.request(HttpMethod::Post, &endpoints::restore(ids)))
                .await
                .map(|_| ())
        })
    }

    fn delete_permanently<'a>(
        &'a self,
        ids: &'a [FileId],
    ) -> DriveApiFuture<'a, Result<(), ApiError>> {
        Box::pin(async move {
            self.execute(self.request(HttpMethod::Delete, &endpoints::delete_permanently(ids)))
                .await
                .map(|_| ())
        })
    }

    fn toggle_favorite<'a>(
        &'a self,
        id: FileId,
    ) -> DriveApiFuture<'a, Result<FileItem, ApiError>> {
        Box::pin(async move {
            self.execute(self.request(HttpMethod::Patch, &endpoints::toggle_favorite(id)))
                .await?
                .json()
        })
    }

    fn upload<'a>(
        &'a self,
        payload: &'a UploadPayload,
    ) -> DriveApiFuture<'a, Result<FileItem, ApiError>> {
        Box::pin(async move {
            let request = self
                .request(HttpMethod::Post, endpoints::FILES)
                .with_upload(payload.clone());
            self.execute(request).await?.json()
        })
    }

    fn download<'a>(
        &'a self,
        filename: &'a str,
    ) -> DriveApiFuture<'a, Result<DownloadedFile, ApiError>> {
        Box::pin(self.fetch_download(filename))
    }
}

#[cfg(test)]
mod tests {
    use std::{
        cell::{Cell, RefCell},
        collections::VecDeque,
    };

    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::transport::RequestBody;

    #[derive(Default)]
    struct ScriptedTransport {
        token: Option<String>,
        replies: RefCell<VecDeque<Result<HttpResponse, ApiError>>>,
        sent: RefCell<Vec<HttpRequest>>,
        expired: Cell<usize>,
    }

    impl ScriptedTransport {
        fn reply(self, status: u16, body: &str) -> Self {
            self.replies.borrow_mut().push_back(Ok(HttpResponse {
                status,
                content_type: Some("application/json".to_string()),
                body: body.as_bytes().to_vec(),
            }));
            self
        }

        fn urls(&self) -> Vec<String> {
            self.sent.borrow().iter().map(|r| r.url.clone()).collect()
        }
    }

    impl HttpTransport for ScriptedTransport {
        fn send<'a>(
            &'a self,
            request: HttpRequest,
        ) -> DriveApiFuture<'a, Result<HttpResponse, ApiError>> {
            self.sent.borrow_mut().push(request);
            let reply = self
                .replies
                .borrow_mut()
                .pop_front()
                .unwrap_or(Err(ApiError::Network("no scripted reply".to_string())));
            Box::pin(async move { reply })
        }

        fn token(&self) -> Option<String> {
            self.token.clone()
        }

        fn session_expired(&self) {
            self.expired.set(self.expired.get() + 1);
        }
    }

    fn client(transport: ScriptedTransport) -> HttpDriveApi<ScriptedTransport> {
        HttpDriveApi::with_transport(ApiConfig::new("http://api.test"), transport)
    }

    #[test]
    fn list_files_sends_bearer_token_and_decodes_items() {
        let transport = ScriptedTransport {
            token: Some("tok".to_string()),
            ..ScriptedTransport::default()
        }
        .reply(
            200,
            r#"[{"id":1,"filename":"a.png","originalName":"a.png","size":3,"mimetype":"image/png","isFavorite":false,"deletedAt":null}]"#,
        );
        let api = client(transport);

        let files = block_on(api.list_files(FileKind::Photo)).expect("list");
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].id, FileId(1));

        let sent = api.transport().sent.borrow();
        assert_eq!(sent[0].method, HttpMethod::Get);
        assert_eq!(sent[0].url, "http://api.test/files?type=photo");
        assert_eq!(sent[0].bearer.as_deref(), Some("tok"));
    }

    #[test]
    fn unauthorized_response_expires_the_session() {
        let api = client(ScriptedTransport::default().reply(401, ""));

        assert_eq!(block_on(api.me()), Err(ApiError::Unauthorized));
        assert_eq!(api.transport().expired.get(), 1);
    }

    #[test]
    fn server_errors_keep_the_session() {
        let api = client(ScriptedTransport::default().reply(500, r#"{"message":"boom"}"#));

        let err = block_on(api.trash(&[FileId(1), FileId(2)])).expect_err("trash fails");
        assert_eq!(err.server_message(), Some("boom"));
        assert_eq!(api.transport().expired.get(), 0);
        assert_eq!(api.transport().urls(), vec!["http://api.test/files?ids=1,2"]);
    }

    #[test]
    fn download_falls_back_to_static_uploads_on_404() {
        let api = client(
            ScriptedTransport::default()
                .reply(404, "")
                .reply(200, "file-bytes"),
        );

        let file = block_on(api.download("a b.txt")).expect("download");
        assert_eq!(file.bytes, b"file-bytes".to_vec());
        assert_eq!(
            api.transport().urls(),
            vec![
                "http://api.test/files/download?filename=a%20b.txt",
                "http://api.test/uploads/a%20b.txt",
            ]
        );
    }

    #[test]
    fn download_rejects_empty_bodies_and_other_failures() {
        let api = client(ScriptedTransport::default().reply(200, ""));
        assert_eq!(block_on(api.download("a.txt")), Err(ApiError::EmptyDownload));

        let api = client(ScriptedTransport::default().reply(403, ""));
        assert_eq!(block_on(api.download("a.txt")), Err(ApiError::Forbidden));
        assert_eq!(api.transport().urls().len(), 1);
    }

    #[test]
    fn mutations_use_the_documented_verbs() {
        let api = client(
            ScriptedTransport::default()
                .reply(200, "")
                .reply(200, "")
                .reply(
                    200,
                    r#"{"id":4,"filename":"x","originalName":"x","isFavorite":true}"#,
                ),
        );

        block_on(api.restore(&[FileId(3)])).expect("restore");
        block_on(api.delete_permanently(&[FileId(3)])).expect("delete");
        let file = block_on(api.toggle_favorite(FileId(4))).expect("favorite");
        assert!(file.is_favorite);

        let sent = api.transport().sent.borrow();
        let verbs: Vec<(HttpMethod, &str)> = sent
            .iter()
            .map(|r| (r.method, r.url.as_str()))
            .collect();
        assert_eq!(
            verbs,
            vec![
                (HttpMethod::Post, "http://api.test/files/restore?ids=3"),
                (HttpMethod::Delete, "http://api.test/files/permanent?ids=3"),
                (HttpMethod::Patch, "http://api.test/files/4/favorite"),
            ]
        );
    }

    #[test]
    fn login_posts_json_credentials() {
        let api = client(ScriptedTransport::default().reply(201, r#"{"token":"abc"}"#));
        let form = LoginForm {
            email: "a@b.c".to_string(),
            password: "pw".to_string(),
        };

        let token = block_on(api.login(&form)).expect("login");
        assert_eq!(token.token, "abc");
        assert_eq!(
            api.transport().sent.borrow()[0].body,
            RequestBody::Json(r#"{"email":"a@b.c","password":"pw"}"#.to_string())
        );
    }

    #[test]
    fn upload_sends_multipart_payload() {
        let api = client(ScriptedTransport::default().reply(
            201,
            r#"{"id":9,"filename":"9.txt","originalName":"notes.txt","size":2}"#,
        ));
        let payload = UploadPayload {
            file_name: "notes.txt".to_string(),
            content_type: Some("text/plain".to_string()),
            bytes: b"hi".to_vec(),
        };

        let file = block_on(api.upload(&payload)).expect("upload");
        assert_eq!(file.original_name, "notes.txt");
        assert_eq!(
            api.transport().sent.borrow()[0].body,
            RequestBody::Upload(payload)
        );
    }
}
