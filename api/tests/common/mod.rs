use std::sync::{Arc, Mutex};

use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use axum_test::TestServer;
use pantry_chef_api::{
    application::http::server::http_server::{router, state},
    args::{Args, LlmArgs, LogArgs, ServerArgs},
};
use pantry_chef_core::domain::common::{DEFAULT_IMAGE_MODEL, DEFAULT_TEXT_MODEL};
use serde_json::{Value, json};
use test_context::AsyncTestContext;
use tokio::net::TcpListener;

pub const THAI_RECIPE: &str = r#"{"name":"Thai Chicken Rice","ingredients":["1 cup rice","200g chicken"],"instructions":["Cook rice","Cook chicken"],"cookingTime":"20 minutes","servings":"2","difficulty":"Easy"}"#;

pub const PHOTO: &str = "data:image/png;base64,iVBORw0KGgo=";

#[derive(Clone)]
struct Reply {
    status: StatusCode,
    body: Value,
}

/// Chat completions provider stand-in. Replies are chosen by the requested model.
#[derive(Clone)]
pub struct StubProvider {
    text: Arc<Mutex<Reply>>,
    image: Arc<Mutex<Reply>>,
    requests: Arc<Mutex<Vec<Value>>>,
}

impl StubProvider {
    fn new() -> Self {
        Self {
            text: Arc::new(Mutex::new(Reply {
                status: StatusCode::OK,
                body: chat_content(THAI_RECIPE),
            })),
            image: Arc::new(Mutex::new(Reply {
                status: StatusCode::OK,
                body: chat_image(PHOTO),
            })),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn reply_text(&self, status: StatusCode, body: Value) {
        *self.text.lock().unwrap() = Reply { status, body };
    }

    pub fn reply_image(&self, status: StatusCode, body: Value) {
        *self.image.lock().unwrap() = Reply { status, body };
    }

    pub fn requests(&self) -> Vec<Value> {
        self.requests.lock().unwrap().clone()
    }

    pub fn calls_to(&self, model: &str) -> usize {
        self.requests()
            .iter()
            .filter(|request| request["model"] == model)
            .count()
    }

    pub fn text_calls(&self) -> usize {
        self.calls_to(DEFAULT_TEXT_MODEL)
    }

    pub fn image_calls(&self) -> usize {
        self.calls_to(DEFAULT_IMAGE_MODEL)
    }
}

pub fn chat_content(content: &str) -> Value {
    json!({"choices": [{"message": {"role": "assistant", "content": content}}]})
}

pub fn chat_image(url: &str) -> Value {
    json!({"choices": [{"message": {
        "role": "assistant",
        "content": "Here is your photo",
        "images": [{"type": "image_url", "image_url": {"url": url}}]
    }}]})
}

async fn chat_completions(
    State(provider): State<StubProvider>,
    Json(request): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let reply = if request["model"] == DEFAULT_IMAGE_MODEL {
        provider.image.lock().unwrap().clone()
    } else {
        provider.text.lock().unwrap().clone()
    };
    provider.requests.lock().unwrap().push(request);

    (reply.status, Json(reply.body))
}

pub struct ApiContext {
    pub server: TestServer,
    pub provider: StubProvider,
}

impl AsyncTestContext for ApiContext {
    async fn setup() -> Self {
        let provider = StubProvider::new();
        let stub = Router::new()
            .route("/v1/chat/completions", post(chat_completions))
            .with_state(provider.clone());
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind stub provider");
        let address = listener.local_addr().expect("Stub provider has no address");
        tokio::spawn(async move { axum::serve(listener, stub).await });

        let args = Args {
            server: ServerArgs {
                host: "127.0.0.1".to_string(),
                port: 0,
                root_path: String::new(),
                allowed_origins: vec!["*".to_string()],
            },
            llm: LlmArgs {
                api_key: "test-key".to_string(),
                base_url: format!("http://{address}/v1"),
                text_model: DEFAULT_TEXT_MODEL.to_string(),
                image_model: DEFAULT_IMAGE_MODEL.to_string(),
                timeout_secs: 5,
            },
            log: LogArgs {
                filter: "info".to_string(),
                json: false,
            },
        };

        let app_state = state(Arc::new(args)).expect("Failed to build app state");
        let app = router(app_state).expect("Failed to build router");
        let server = TestServer::new(app).expect("Failed to create test server");

        Self { server, provider }
    }
}
