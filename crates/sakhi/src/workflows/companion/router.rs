use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::ChatMessage;
use super::provider::CompanionProvider;
use super::service::CompanionChat;

#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub history: Vec<ChatMessage>,
}

pub fn companion_router<P>(chat: Arc<CompanionChat<P>>) -> Router
where
    P: CompanionProvider + 'static,
{
    Router::new()
        .route("/api/v1/chat", post(chat_handler::<P>))
        .with_state(chat)
}

pub(crate) async fn chat_handler<P>(
    State(chat): State<Arc<CompanionChat<P>>>,
    axum::Json(request): axum::Json<ChatRequest>,
) -> Response
where
    P: CompanionProvider + 'static,
{
    if request.message.trim().is_empty() {
        let payload = json!({ "error": "Message is required" });
        return (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response();
    }

    let reply = chat.respond(&request.message, &request.history).await;
    (StatusCode::OK, axum::Json(reply)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::companion::GeminiProvider;
    use axum::body::Body;
    use axum::http::{header, Request};
    use serde_json::Value;
    use tower::ServiceExt;

    fn router() -> Router {
        companion_router(Arc::new(CompanionChat::<GeminiProvider>::fallback_only()))
    }

    fn chat_request(body: Value) -> Request<Body> {
        Request::post("/api/v1/chat")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn blank_messages_are_rejected() {
        let response = router()
            .oneshot(chat_request(json!({ "message": "   " })))
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn replies_include_their_source() {
        let response = router()
            .oneshot(chat_request(json!({ "message": "Diet tips please" })))
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), 4096)
            .await
            .expect("read body");
        let payload: Value = serde_json::from_slice(&body).expect("json payload");
        assert_eq!(payload["source"], "fallback");
        assert!(payload["text"].as_str().unwrap().contains("low-GI"));
    }
}
