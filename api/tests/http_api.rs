use std::{
    net::SocketAddr,
    path::PathBuf,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
};

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::post,
};
use axum_test::TestServer;
use grocerykit_api::{
    application::http::{
        recipe::validators::RecipeEnvelope,
        server::http_server::{router, state},
    },
    args::{
        AccessArgs, Args, CatalogArgs, GenerationAccess, LlmArgs, LogArgs, ServerArgs,
        SettingsArgs,
    },
};
use serde_json::{Value, json};
use tempfile::NamedTempFile;

#[derive(Clone)]
struct Upstream {
    status: StatusCode,
    content: String,
    calls: Arc<AtomicUsize>,
    last_prompt: Arc<std::sync::Mutex<Option<String>>>,
}

async fn chat_completions(
    State(upstream): State<Upstream>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    upstream.calls.fetch_add(1, Ordering::SeqCst);
    *upstream.last_prompt.lock().unwrap() = body["messages"][0]["content"]
        .as_str()
        .map(str::to_string);

    (
        upstream.status,
        Json(json!({
            "model": "gpt-4",
            "choices": [{ "message": { "role": "assistant", "content": upstream.content } }]
        })),
    )
}

async fn spawn_upstream(status: StatusCode, content: &str) -> (SocketAddr, Upstream) {
    let upstream = Upstream {
        status,
        content: content.to_string(),
        calls: Arc::new(AtomicUsize::new(0)),
        last_prompt: Arc::new(std::sync::Mutex::new(None)),
    };
    let app = Router::new()
        .route("/v1/chat/completions", post(chat_completions))
        .with_state(upstream.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (addr, upstream)
}

fn catalog_file() -> NamedTempFile {
    let file = NamedTempFile::new().unwrap();
    std::fs::write(
        file.path(),
        r#"[
            {"id": 1, "name": "Rice"},
            {"id": 2, "name": "Black Beans"},
            {"id": 3, "name": "Mac & Cheese"}
        ]"#,
    )
    .unwrap();
    file
}

fn args(upstream: SocketAddr, api_key: Option<&str>, catalog: Option<PathBuf>) -> Args {
    Args {
        server: ServerArgs {
            host: "127.0.0.1".to_string(),
            port: 0,
            root_path: String::new(),
            allowed_origins: vec!["http://localhost:3333".to_string()],
            disable_metrics: true,
        },
        llm: LlmArgs {
            base_url: format!("http://{}/v1", upstream),
            model: "gpt-4".to_string(),
            max_tokens: 500,
            timeout_secs: 5,
            coalesce_requests: false,
        },
        settings: SettingsArgs {
            openai_api_key: api_key.map(str::to_string),
            settings_file: None,
        },
        catalog: CatalogArgs {
            ingredients_file: catalog,
        },
        access: AccessArgs {
            generation_access: GenerationAccess::Open,
            access_token: None,
            admin_token: Some("admin-secret".to_string()),
        },
        log: LogArgs {
            filter: "info".to_string(),
            json: false,
        },
    }
}

async fn test_server(args: Args) -> TestServer {
    let state = state(Arc::new(args)).await.unwrap();
    TestServer::new(router(state).unwrap()).unwrap()
}

fn generate_form(form_data: &str) -> [(&'static str, String); 2] {
    [
        ("action", "gmk_generate_ai_recipes".to_string()),
        ("form_data", form_data.to_string()),
    ]
}

#[tokio::test]
async fn test_generate_returns_success_envelope() {
    let (addr, upstream) = spawn_upstream(StatusCode::OK, "A\nB").await;
    let server = test_server(args(addr, Some("sk-test"), None)).await;

    let response = server
        .post("/recipes/generate")
        .form(&generate_form(
            "ingredients%5B%5D=Rice&ingredients%5B%5D=Black+Beans&other_ingredients%5B%5D=Kale&other_ingredients%5B%5D=",
        ))
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<RecipeEnvelope>(),
        RecipeEnvelope {
            success: true,
            data: "A<br />\nB".to_string(),
        }
    );
    assert_eq!(upstream.calls.load(Ordering::SeqCst), 1);

    let prompt = upstream.last_prompt.lock().unwrap().clone().unwrap();
    assert!(prompt.contains("Rice, Black Beans, Kale"));
}

#[tokio::test]
async fn test_generate_without_form_data() {
    let (addr, upstream) = spawn_upstream(StatusCode::OK, "unused").await;
    let server = test_server(args(addr, Some("sk-test"), None)).await;

    let response = server
        .post("/recipes/generate")
        .form(&[("action", "gmk_generate_ai_recipes")])
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<RecipeEnvelope>(),
        RecipeEnvelope {
            success: false,
            data: "No ingredients selected.".to_string(),
        }
    );
    assert_eq!(upstream.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_generate_with_repeated_keys_uses_last_form_data() {
    let (addr, upstream) = spawn_upstream(StatusCode::OK, "Kale salad").await;
    let server = test_server(args(addr, Some("sk-test"), None)).await;

    let response = server
        .post("/recipes/generate")
        .form(&[
            ("action", "gmk_generate_ai_recipes"),
            ("form_data", "ingredients%5B%5D=Rice"),
            ("action", "gmk_generate_ai_recipes"),
            ("form_data", "ingredients%5B%5D=Kale"),
        ])
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<RecipeEnvelope>(),
        RecipeEnvelope {
            success: true,
            data: "Kale salad".to_string(),
        }
    );
    assert_eq!(upstream.calls.load(Ordering::SeqCst), 1);

    let prompt = upstream.last_prompt.lock().unwrap().clone().unwrap();
    assert!(prompt.ends_with("Ingredients: Kale"));
}

#[tokio::test]
async fn test_generate_without_api_key() {
    let (addr, upstream) = spawn_upstream(StatusCode::OK, "unused").await;
    let server = test_server(args(addr, None, None)).await;

    let response = server
        .post("/recipes/generate")
        .form(&generate_form("ingredients%5B%5D=Rice"))
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<RecipeEnvelope>(),
        RecipeEnvelope {
            success: false,
            data: "API key not set. Please go to the settings page to set your OpenAI API key."
                .to_string(),
        }
    );
    assert_eq!(upstream.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_generate_reports_upstream_failure() {
    let (addr, _upstream) = spawn_upstream(StatusCode::INTERNAL_SERVER_ERROR, "unused").await;
    let server = test_server(args(addr, Some("sk-test"), None)).await;

    let response = server
        .post("/recipes/generate")
        .form(&generate_form("ingredients%5B%5D=Rice"))
        .await;

    response.assert_status_ok();
    let envelope = response.json::<RecipeEnvelope>();
    assert!(!envelope.success);
    assert_eq!(
        envelope.data,
        "Error generating AI recipes: OpenAI API returned 500 Internal Server Error"
    );
}

#[tokio::test]
async fn test_identical_submissions_each_call_upstream() {
    let (addr, upstream) = spawn_upstream(StatusCode::OK, "Fried rice").await;
    let server = test_server(args(addr, Some("sk-test"), None)).await;

    for _ in 0..2 {
        server
            .post("/recipes/generate")
            .form(&generate_form("ingredients%5B%5D=Rice"))
            .await
            .assert_status_ok();
    }

    assert_eq!(upstream.calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_gated_generation_requires_token() {
    let (addr, upstream) = spawn_upstream(StatusCode::OK, "Fried rice").await;
    let mut args = args(addr, Some("sk-test"), None);
    args.access.generation_access = GenerationAccess::Gated;
    args.access.access_token = Some("t0ken".to_string());
    let server = test_server(args).await;

    server
        .post("/recipes/generate")
        .form(&generate_form("ingredients%5B%5D=Rice"))
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(upstream.calls.load(Ordering::SeqCst), 0);

    let response = server
        .post("/recipes/generate")
        .authorization_bearer("t0ken")
        .form(&generate_form("ingredients%5B%5D=Rice"))
        .await;

    response.assert_status_ok();
    assert!(response.json::<RecipeEnvelope>().success);
    assert_eq!(upstream.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_saved_api_key_is_used_by_next_generation() {
    let (addr, upstream) = spawn_upstream(StatusCode::OK, "Fried rice").await;
    let server = test_server(args(addr, None, None)).await;

    server
        .get("/admin/settings")
        .await
        .assert_status(StatusCode::UNAUTHORIZED);

    let saved = server
        .post("/admin/settings")
        .authorization_bearer("admin-secret")
        .form(&[("gmk_openai_api_key", "sk-saved")])
        .await;
    saved.assert_status_ok();
    let page = saved.text();
    assert!(page.contains("Settings saved."));
    assert!(page.contains("value=\"sk-saved\""));

    let response = server
        .post("/recipes/generate")
        .form(&generate_form("ingredients%5B%5D=Rice"))
        .await;

    assert_eq!(
        response.json::<RecipeEnvelope>(),
        RecipeEnvelope {
            success: true,
            data: "Fried rice".to_string(),
        }
    );
    assert_eq!(upstream.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_settings_disabled_without_admin_token() {
    let (addr, _upstream) = spawn_upstream(StatusCode::OK, "unused").await;
    let mut args = args(addr, None, None);
    args.access.admin_token = None;
    let server = test_server(args).await;

    server
        .get("/admin/settings")
        .authorization_bearer("anything")
        .await
        .assert_status(StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_index_page_expands_selection_block() {
    let (addr, _upstream) = spawn_upstream(StatusCode::OK, "unused").await;
    let catalog = catalog_file();
    let server = test_server(args(addr, None, Some(catalog.path().to_path_buf()))).await;

    let response = server.get("/").await;

    response.assert_status_ok();
    let page = response.text();
    assert!(!page.contains("[gmk_ingredient_selection]"));
    assert!(page.contains("<form id=\"gmk-ingredient-form\">"));
    assert!(page.contains("value=\"Mac &amp; Cheese\""));
    assert!(page.contains("<div id=\"gmk-ai-recipes\"></div>"));
    assert!(page.contains("\"ajaxUrl\":\"/recipes/generate\""));
    assert!(page.contains("<script src=\"/assets/grocerykit.js\"></script>"));
}

#[tokio::test]
async fn test_render_content_passes_plain_content_through() {
    let (addr, _upstream) = spawn_upstream(StatusCode::OK, "unused").await;
    let server = test_server(args(addr, None, None)).await;

    let response = server.post("/content/render").text("<p>No blocks here</p>").await;

    response.assert_status_ok();
    assert_eq!(response.text(), "<p>No blocks here</p>");
}

#[tokio::test]
async fn test_ingredients_and_content_types() {
    let (addr, _upstream) = spawn_upstream(StatusCode::OK, "unused").await;
    let catalog = catalog_file();
    let server = test_server(args(addr, None, Some(catalog.path().to_path_buf()))).await;

    let ingredients = server.get("/ingredients").await.json::<Value>();
    let names: Vec<&str> = ingredients["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|tag| tag["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Black Beans", "Mac & Cheese", "Rice"]);

    let content_types = server.get("/content-types").await.json::<Value>();
    assert_eq!(content_types["post_types"][0]["name"], "ai_recipe");
    assert_eq!(content_types["taxonomies"][0]["name"], "ingredient");
    assert_eq!(content_types["taxonomies"][0]["hierarchical"], true);
}

#[tokio::test]
async fn test_client_script_is_served() {
    let (addr, _upstream) = spawn_upstream(StatusCode::OK, "unused").await;
    let server = test_server(args(addr, None, None)).await;

    let response = server.get("/assets/grocerykit.js").await;

    response.assert_status_ok();
    assert!(response.text().contains("gmk_generate_ai_recipes"));
}

#[tokio::test]
async fn test_health_reports_catalog_and_credential() {
    let (addr, _upstream) = spawn_upstream(StatusCode::OK, "unused").await;
    let catalog = catalog_file();
    let server = test_server(args(addr, Some("sk-secret"), Some(catalog.path().to_path_buf()))).await;

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["ingredient_count"], 3);
    assert_eq!(body["credential_configured"], true);
    assert!(!response.text().contains("sk-secret"));
}
