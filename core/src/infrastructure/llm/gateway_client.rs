use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::LLMConfig,
    recipe::{entities::GenerationError, ports::LLMClient},
};

/// Client for an OpenAI-compatible chat completions gateway.
#[derive(Debug, Clone)]
pub struct GatewayLLMClient {
    api_key: String,
    base_url: String,
    text_model: String,
    image_model: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    modalities: Option<[&'static str; 2]>,
}

#[derive(Debug, Serialize)]
struct Message {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    images: Vec<GeneratedImage>,
}

#[derive(Debug, Deserialize)]
struct GeneratedImage {
    image_url: ImageUrl,
}

#[derive(Debug, Deserialize)]
struct ImageUrl {
    url: String,
}

impl GatewayLLMClient {
    pub fn new(config: LLMConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(config.request_timeout).build()?;

        Ok(Self {
            api_key: config.api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            text_model: config.text_model,
            image_model: config.image_model,
            client,
        })
    }

    async fn call_gateway(
        &self,
        request: ChatCompletionRequest<'_>,
    ) -> Result<ChatCompletionResponse, GenerationError> {
        let url = format!("{}/chat/completions", self.base_url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Gateway request failed: {}", e);
                GenerationError::upstream(None, format!("LLM API error: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!(
                model = request.model,
                "Gateway error: {} - {}",
                status,
                error_text
            );
            return Err(match status {
                StatusCode::TOO_MANY_REQUESTS => GenerationError::RateLimited,
                StatusCode::PAYMENT_REQUIRED => GenerationError::QuotaExceeded,
                _ => GenerationError::upstream(Some(status.as_u16()), error_text),
            });
        }

        response.json().await.map_err(|e| {
            tracing::error!("Failed to decode gateway response: {}", e);
            GenerationError::upstream(
                Some(status.as_u16()),
                format!("Failed to decode LLM response: {}", e),
            )
        })
    }
}

impl LLMClient for GatewayLLMClient {
    async fn generate_text(
        &self,
        system_instruction: String,
        prompt: String,
    ) -> Result<String, GenerationError> {
        let request = ChatCompletionRequest {
            model: &self.text_model,
            messages: vec![
                Message {
                    role: "system",
                    content: system_instruction,
                },
                Message {
                    role: "user",
                    content: prompt,
                },
            ],
            modalities: None,
        };

        self.call_gateway(request)
            .await?
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| GenerationError::upstream(None, "No content in LLM response"))
    }

    async fn generate_image(&self, prompt: String) -> Result<Option<String>, GenerationError> {
        let request = ChatCompletionRequest {
            model: &self.image_model,
            messages: vec![Message {
                role: "user",
                content: prompt,
            }],
            modalities: Some(["image", "text"]),
        };

        Ok(self
            .call_gateway(request)
            .await?
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.images.into_iter().next())
            .map(|image| image.image_url.url))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use axum::{
        Json, Router,
        extract::State,
        http::{HeaderMap, StatusCode as AxumStatus},
        routing::post,
    };
    use serde_json::{Value, json};
    use tokio::net::TcpListener;

    use super::*;

    #[derive(Clone)]
    struct Stub {
        status: AxumStatus,
        body: Value,
        seen: Arc<Mutex<Vec<(Option<String>, Value)>>>,
    }

    async fn chat_completions(
        State(stub): State<Stub>,
        headers: HeaderMap,
        Json(request): Json<Value>,
    ) -> (AxumStatus, Json<Value>) {
        let authorization = headers
            .get("authorization")
            .and_then(|h| h.to_str().ok())
            .map(str::to_string);
        stub.seen.lock().unwrap().push((authorization, request));
        (stub.status, Json(stub.body.clone()))
    }

    async fn spawn_stub(status: AxumStatus, body: Value) -> (GatewayLLMClient, Stub) {
        let stub = Stub {
            status,
            body,
            seen: Arc::new(Mutex::new(Vec::new())),
        };
        let app = Router::new()
            .route("/v1/chat/completions", post(chat_completions))
            .with_state(stub.clone());
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, app).await });

        let mut config = LLMConfig::new("test-key");
        config.base_url = format!("http://{address}/v1/");
        config.request_timeout = Duration::from_secs(5);

        (GatewayLLMClient::new(config).unwrap(), stub)
    }

    #[tokio::test]
    async fn test_generate_text_sends_system_and_user_turns() {
        let (client, stub) = spawn_stub(
            AxumStatus::OK,
            json!({"choices": [{"message": {"role": "assistant", "content": "{\"name\":\"Soup\"}"}}]}),
        )
        .await;

        let text = client
            .generate_text("JSON only".to_string(), "Make soup".to_string())
            .await
            .unwrap();

        assert_eq!(text, "{\"name\":\"Soup\"}");
        let seen = stub.seen.lock().unwrap();
        let (authorization, request) = &seen[0];
        assert_eq!(authorization.as_deref(), Some("Bearer test-key"));
        assert_eq!(request["model"], "google/gemini-2.5-flash");
        assert_eq!(request["messages"][0]["role"], "system");
        assert_eq!(request["messages"][0]["content"], "JSON only");
        assert_eq!(request["messages"][1]["role"], "user");
        assert_eq!(request["messages"][1]["content"], "Make soup");
        assert!(request.get("modalities").is_none());
    }

    #[tokio::test]
    async fn test_status_codes_are_classified() {
        let cases = [
            (AxumStatus::TOO_MANY_REQUESTS, GenerationError::RateLimited),
            (AxumStatus::PAYMENT_REQUIRED, GenerationError::QuotaExceeded),
        ];

        for (status, expected) in cases {
            let (client, _) = spawn_stub(status, json!({"error": "nope"})).await;
            let result = client
                .generate_text("sys".to_string(), "prompt".to_string())
                .await;
            assert_eq!(result, Err(expected));
        }

        let (client, _) = spawn_stub(AxumStatus::BAD_GATEWAY, json!({"error": "down"})).await;
        let result = client
            .generate_text("sys".to_string(), "prompt".to_string())
            .await;
        assert!(matches!(
            result,
            Err(GenerationError::Upstream {
                status: Some(502),
                ..
            })
        ));
    }

    #[tokio::test]
    async fn test_missing_content_is_upstream_error() {
        let (client, _) = spawn_stub(AxumStatus::OK, json!({"choices": []})).await;

        let result = client
            .generate_text("sys".to_string(), "prompt".to_string())
            .await;

        assert!(matches!(result, Err(GenerationError::Upstream { .. })));
    }

    #[tokio::test]
    async fn test_generate_image_returns_first_inline_image() {
        let (client, stub) = spawn_stub(
            AxumStatus::OK,
            json!({"choices": [{"message": {
                "content": null,
                "images": [
                    {"type": "image_url", "image_url": {"url": "data:image/png;base64,AAA"}},
                    {"type": "image_url", "image_url": {"url": "data:image/png;base64,BBB"}}
                ]
            }}]}),
        )
        .await;

        let image = client.generate_image("A photo".to_string()).await.unwrap();

        assert_eq!(image.as_deref(), Some("data:image/png;base64,AAA"));
        let seen = stub.seen.lock().unwrap();
        let (_, request) = &seen[0];
        assert_eq!(request["model"], "google/gemini-2.5-flash-image-preview");
        assert_eq!(request["modalities"], json!(["image", "text"]));
        assert_eq!(request["messages"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_generate_image_without_images_is_none() {
        let (client, _) = spawn_stub(
            AxumStatus::OK,
            json!({"choices": [{"message": {"content": "I cannot draw that"}}]}),
        )
        .await;

        assert_eq!(client.generate_image("A photo".to_string()).await, Ok(None));
    }

    #[tokio::test]
    async fn test_unreachable_gateway_is_upstream_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        drop(listener);

        let mut config = LLMConfig::new("test-key");
        config.base_url = format!("http://{address}/v1");
        let client = GatewayLLMClient::new(config).unwrap();

        let result = client.generate_image("A photo".to_string()).await;

        assert!(matches!(
            result,
            Err(GenerationError::Upstream { status: None, .. })
        ));
    }
}
