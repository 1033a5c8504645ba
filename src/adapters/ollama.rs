use crate::domain::model::ModelRequest;
use crate::domain::ports::ModelClient;
use crate::utils::error::Result;
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Client for an Ollama-style `POST /api/chat` endpoint.
///
/// Inline text context is appended to the prompt; image attachments travel
/// base64-encoded in the message `images` field. Streaming is disabled so
/// each call is one blocking round trip.
pub struct OllamaClient {
    client: Client,
    endpoint: String,
    model: String,
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    stream: bool,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    images: Option<Vec<String>>,
}

#[derive(Deserialize)]
struct ChatResponse {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: String,
}

impl OllamaClient {
    pub fn new(endpoint: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            model: model.into(),
        }
    }
}

#[async_trait]
impl ModelClient for OllamaClient {
    async fn complete(&self, request: ModelRequest) -> Result<String> {
        let content = match &request.context {
            Some(context) => format!("{}\n\n{}", request.prompt, context),
            None => request.prompt.clone(),
        };

        let images = request
            .image
            .as_ref()
            .map(|bytes| vec![STANDARD.encode(bytes)]);

        let body = ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content,
                images,
            }],
            stream: false,
        };

        tracing::debug!(
            "POST {} (model: {}, image: {})",
            self.endpoint,
            self.model,
            body.messages[0].images.is_some()
        );

        let response = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json::<ChatResponse>()
            .await?;

        Ok(response.message.content)
    }
}
