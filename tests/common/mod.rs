#![allow(dead_code)]

use actix_web::dev::Server;
use actix_web::{delete, get, post, web, App, HttpRequest, HttpResponse, HttpServer, Responder};
use lux::configuration::{get_configuration, DatabaseSettings, Settings};
use serde_json::json;
use sqlx::{Connection, Executor, PgConnection, PgPool};
use std::net::TcpListener;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const ALICE: &str = "alice-token";
pub const BOB: &str = "bob-token";
/// Guest/user messages containing this text make the completion mock break off mid-reply.
pub const FAIL_MARKER: &str = "please-fail";

pub struct TestApp {
    pub address: String,
    pub db_pool: PgPool,
    pub completion_server: MockServer,
    pub client: reqwest::Client,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    pub fn get(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.client.get(self.url(path)).bearer_auth(token)
    }

    pub fn post(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.client.post(self.url(path)).bearer_auth(token)
    }

    pub fn put(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.client.put(self.url(path)).bearer_auth(token)
    }

    pub fn delete(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.client.delete(self.url(path)).bearer_auth(token)
    }

    pub async fn create_conversation(&self, token: &str, title: &str) -> serde_json::Value {
        let body: serde_json::Value = self
            .post("/api/conversations", token)
            .json(&json!({ "title": title }))
            .send()
            .await
            .expect("Failed to execute request.")
            .json()
            .await
            .expect("Failed to parse response.");
        body
    }
}

pub fn completion_body(tokens: &[&str]) -> String {
    let mut body: String = tokens
        .iter()
        .map(|token| {
            format!(
                "data: {}\n\n",
                json!({"choices": [{"index": 0, "delta": {"content": token}}]})
            )
        })
        .collect();
    body.push_str("data: [DONE]\n\n");
    body
}

async fn mock_completion_server() -> MockServer {
    let server = MockServer::start().await;

    let failing = format!(
        "data: {}\n\ndata: {}\n\n",
        json!({"choices": [{"index": 0, "delta": {"content": "A "}}]}),
        json!({"error": {"message": "upstream overloaded"}})
    );
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_string_contains(FAIL_MARKER))
        .respond_with(ResponseTemplate::new(200).set_body_raw(failing, "text/event-stream"))
        .with_priority(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            completion_body(&["A ", "derivative ", "is..."]),
            "text/event-stream",
        ))
        .mount(&server)
        .await;

    server
}

pub async fn spawn_app() -> Option<TestApp> {
    let mut configuration = get_configuration().expect("Failed to get configuration");

    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind port for identity server");
    configuration.connectors.identity_service.base_url = format!(
        "http://127.0.0.1:{}",
        listener.local_addr().unwrap().port()
    );
    let identity_server = mock_identity_server(listener).expect("Failed to start identity server");
    let _ = tokio::spawn(identity_server);

    let completion_server = mock_completion_server().await;
    configuration.connectors.completion_service.base_url = completion_server.uri();
    configuration.connectors.completion_service.api_key = Some("sk-test".to_string());

    spawn_app_with_configuration(configuration, completion_server).await
}

pub async fn spawn_app_with_configuration(
    mut configuration: Settings,
    completion_server: MockServer,
) -> Option<TestApp> {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);
    configuration.database.database_name = uuid::Uuid::new_v4().to_string();

    let connection_pool = match configure_database(&configuration.database).await {
        Ok(pool) => pool,
        Err(err) => {
            eprintln!("Skipping tests: failed to connect to postgres: {}", err);
            return None;
        }
    };

    let server = lux::startup::run(listener, connection_pool.clone(), configuration)
        .await
        .expect("Failed to bind address.");
    let _ = tokio::spawn(server);

    Some(TestApp {
        address,
        db_pool: connection_pool,
        completion_server,
        client: reqwest::Client::new(),
    })
}

pub async fn configure_database(config: &DatabaseSettings) -> Result<PgPool, sqlx::Error> {
    let mut connection = PgConnection::connect(&config.connection_string_without_db()).await?;

    connection
        .execute(format!(r#"CREATE DATABASE "{}""#, config.database_name).as_str())
        .await?;

    let connection_pool = PgPool::connect(&config.connection_string()).await?;

    sqlx::migrate!("./migrations").run(&connection_pool).await?;

    Ok(connection_pool)
}

fn session_user(req: &HttpRequest) -> Option<serde_json::Value> {
    let header = req.headers().get("authorization")?.to_str().ok()?;
    let user_id = match header.strip_prefix("Bearer ")? {
        ALICE => "alice",
        BOB => "bob",
        _ => return None,
    };

    Some(json!({
        "id": user_id,
        "email": format!("{}@example.com", user_id),
        "google_user_data": { "name": user_id }
    }))
}

#[get("/users/me")]
async fn mock_me(req: HttpRequest) -> impl Responder {
    match session_user(&req) {
        Some(user) => HttpResponse::Ok().json(user),
        None => HttpResponse::Unauthorized().finish(),
    }
}

#[post("/sessions")]
async fn mock_create_session(body: web::Json<serde_json::Value>) -> impl Responder {
    match body["code"].as_str() {
        Some("alice-code") => HttpResponse::Ok().json(json!({ "session_token": ALICE })),
        _ => HttpResponse::Unauthorized().finish(),
    }
}

#[delete("/sessions")]
async fn mock_delete_session() -> impl Responder {
    HttpResponse::NoContent().finish()
}

#[get("/oauth/{provider}/redirect_url")]
async fn mock_redirect_url(path: web::Path<String>) -> impl Responder {
    HttpResponse::Ok().json(json!({
        "redirect_url": format!("https://accounts.example.com/{}", path.into_inner())
    }))
}

fn mock_identity_server(listener: TcpListener) -> std::io::Result<Server> {
    let server = HttpServer::new(|| {
        App::new()
            .service(mock_me)
            .service(mock_create_session)
            .service(mock_delete_session)
            .service(mock_redirect_url)
    })
    .listen(listener)?
    .run();

    Ok(server)
}
