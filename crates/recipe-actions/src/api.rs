//! Recipe API
//!
//! The three server endpoints the client talks to, behind a trait so the
//! actions can be driven by a fake in tests.

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::models::{AddToListRequest, FavoriteRequest, RecipeId};

pub const ADD_FAVORITE_PATH: &str = "/favorites/add";
pub const REMOVE_FAVORITE_PATH: &str = "/favorites/remove";
pub const ADD_TO_LIST_PATH: &str = "/lists/add";

/// Server acknowledgement, e.g. `{"message": "success"}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: String,
}

/// Server endpoints used by the recipe actions.
///
/// Futures are not `Send`: in the browser they run on the single UI thread.
#[async_trait(?Send)]
pub trait RecipeApi {
    async fn add_favorite(&self, recipe_id: &RecipeId) -> Result<ApiMessage, ApiError>;

    async fn remove_favorite(&self, recipe_id: &RecipeId) -> Result<ApiMessage, ApiError>;

    async fn add_to_list(&self, recipe_id: &RecipeId, list_title: &str) -> Result<ApiMessage, ApiError>;
}

/// Map a status code and body text onto the API result.
///
/// Any 2xx is success. The body is parsed as an `ApiMessage` when it is one;
/// otherwise the acknowledgement is empty.
pub fn interpret_response(status: u16, body: &str) -> Result<ApiMessage, ApiError> {
    if !(200..300).contains(&status) {
        return Err(ApiError::Status { status, body: body.to_string() });
    }
    Ok(serde_json::from_str(body).unwrap_or_default())
}

/// `reqwest`-backed implementation. Works natively and on wasm32 (fetch).
#[derive(Debug, Clone)]
pub struct HttpRecipeApi {
    client: Client,
    base: Url,
}

impl HttpRecipeApi {
    /// `base` must be absolute, e.g. the page origin. A path on the base
    /// (`https://host/tender`) is kept as a prefix for every endpoint.
    pub fn new(base: &str) -> Result<Self, ApiError> {
        let mut base = Url::parse(base).map_err(|e| ApiError::InvalidUrl(format!("{base}: {e}")))?;
        if base.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(format!("{base}: not a base url")));
        }
        if !base.path().ends_with('/') {
            let prefixed = format!("{}/", base.path());
            base.set_path(&prefixed);
        }
        Ok(Self { client: Client::new(), base })
    }

    /// Endpoint URL under the base; `path` is relative to it even when it
    /// starts with `/`.
    pub fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base
            .join(path.trim_start_matches('/'))
            .map_err(|e| ApiError::InvalidUrl(format!("{path}: {e}")))
    }

    async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<ApiMessage, ApiError> {
        let url = self.endpoint(path)?;
        log::debug!("POST {url}");

        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Network(format!("reading response body: {e}")))?;
        interpret_response(status, &text)
    }
}

#[async_trait(?Send)]
impl RecipeApi for HttpRecipeApi {
    async fn add_favorite(&self, recipe_id: &RecipeId) -> Result<ApiMessage, ApiError> {
        self.post(ADD_FAVORITE_PATH, &FavoriteRequest { recipe_id }).await
    }

    async fn remove_favorite(&self, recipe_id: &RecipeId) -> Result<ApiMessage, ApiError> {
        self.post(REMOVE_FAVORITE_PATH, &FavoriteRequest { recipe_id }).await
    }

    async fn add_to_list(&self, recipe_id: &RecipeId, list_title: &str) -> Result<ApiMessage, ApiError> {
        self.post(ADD_TO_LIST_PATH, &AddToListRequest { recipe_id, list_title }).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_with_message() {
        let msg = interpret_response(200, r#"{"message": "success"}"#).unwrap();
        assert_eq!(msg.message, "success");
    }

    #[test]
    fn test_success_with_non_json_body() {
        let msg = interpret_response(204, "").unwrap();
        assert_eq!(msg, ApiMessage::default());

        let msg = interpret_response(200, "<html>redirected</html>").unwrap();
        assert_eq!(msg.message, "");
    }

    #[test]
    fn test_error_status() {
        let err = interpret_response(401, "Access unauthorized.").unwrap_err();
        assert_eq!(err, ApiError::Status { status: 401, body: "Access unauthorized.".to_string() });
    }

    #[test]
    fn test_endpoints_join_on_origin() {
        let api = HttpRecipeApi::new("http://localhost:5000").unwrap();
        assert_eq!(api.endpoint(ADD_FAVORITE_PATH).unwrap().as_str(), "http://localhost:5000/favorites/add");
        assert_eq!(api.endpoint(REMOVE_FAVORITE_PATH).unwrap().as_str(), "http://localhost:5000/favorites/remove");
        assert_eq!(api.endpoint(ADD_TO_LIST_PATH).unwrap().as_str(), "http://localhost:5000/lists/add");
    }

    #[test]
    fn test_endpoints_keep_base_prefix() {
        let api = HttpRecipeApi::new("https://host.example/tender").unwrap();
        assert_eq!(api.endpoint(ADD_FAVORITE_PATH).unwrap().as_str(), "https://host.example/tender/favorites/add");
        assert_eq!(api.endpoint(ADD_TO_LIST_PATH).unwrap().as_str(), "https://host.example/tender/lists/add");

        let api = HttpRecipeApi::new("https://host.example/tender/").unwrap();
        assert_eq!(api.endpoint(REMOVE_FAVORITE_PATH).unwrap().as_str(), "https://host.example/tender/favorites/remove");
    }

    #[test]
    fn test_relative_base_rejected() {
        assert!(matches!(HttpRecipeApi::new("/favorites"), Err(ApiError::InvalidUrl(_))));
        assert!(matches!(HttpRecipeApi::new("mailto:cook@example.com"), Err(ApiError::InvalidUrl(_))));
    }

    /// Serve one canned HTTP response; the handle yields the raw request.
    async fn serve_once(response: String) -> (String, tokio::task::JoinHandle<String>) {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};
        use tokio::net::TcpListener;

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            // Read the full request (head plus Content-Length body) before answering
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
                let text = String::from_utf8_lossy(&request).to_string();
                if let Some(head_end) = text.find("\r\n\r\n") {
                    let content_length = text[..head_end]
                        .lines()
                        .find_map(|l| {
                            let (name, value) = l.split_once(':')?;
                            name.eq_ignore_ascii_case("content-length").then(|| value.trim().parse::<usize>().ok())?
                        })
                        .unwrap_or(0);
                    if request.len() >= head_end + 4 + content_length {
                        break;
                    }
                }
            }
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
            String::from_utf8_lossy(&request).to_string()
        });

        (base, handle)
    }

    /// Client that talks to the loopback server directly, ignoring proxy env vars
    fn local_api(base: &str) -> HttpRecipeApi {
        let mut api = HttpRecipeApi::new(base).unwrap();
        api.client = Client::builder().no_proxy().build().unwrap();
        api
    }

    #[tokio::test]
    async fn test_post_goes_under_base_prefix() {
        let body = r#"{"message": "success"}"#;
        let response = format!(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            body.len(),
            body
        );
        let (base, server) = serve_once(response).await;
        let api = local_api(&format!("{base}/tender"));

        let msg = api.add_favorite(&RecipeId::new("42")).await.unwrap();

        assert_eq!(msg.message, "success");
        let request = server.await.unwrap();
        assert!(request.starts_with("POST /tender/favorites/add "), "request was: {request}");
        assert!(request.contains(r#"{"recipeId":"42"}"#));
    }

    #[tokio::test]
    async fn test_truncated_body_is_network_error() {
        // Promises 100 bytes, sends 5, then closes
        let (base, server) = serve_once("HTTP/1.1 200 OK\r\nContent-Length: 100\r\nConnection: close\r\n\r\nshort".to_string()).await;
        let api = local_api(&base);

        let result = api.remove_favorite(&RecipeId::new("42")).await;

        assert!(matches!(result, Err(ApiError::Network(_))), "got {result:?}");
        server.await.unwrap();
    }
}
