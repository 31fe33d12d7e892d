use std::time::Duration;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use test_utils::{builder::TestBuilder, context::TestContext};
use tower::ServiceExt;

use crate::{
    model::user::UserRole,
    server::{
        router, service::auth::token::TokenStore, service::auth::AuthService, state::AppState,
    },
};


/// Full application over an in-memory database with an `admin` and a `mechanic` account.
///
/// The test context is kept alive alongside the router so the database outlives the test.
struct TestApp {
    _test: TestContext,
    app: Router,
}

impl TestApp {
    async fn new() -> Self {
        let test = TestBuilder::new()
            .with_workshop_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.clone().unwrap();
        let state = AppState::new(db, TokenStore::new(Duration::from_secs(3600)));

        let auth = AuthService::new(&state.db, &state.tokens);
        auth.register("admin", "Administrator", UserRole::Admin, "admin123")
            .await
            .unwrap();
        auth.register("mechanic", "Mechanic", UserRole::Mechanic, "mechanic123")
            .await
            .unwrap();

        Self {
            _test: test,
            app: router::app(state),
        }
    }

    /// Sends a request and returns the status and the decoded JSON body (`Null` when empty).
    async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut request = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            request = request.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let request = match body {
            Some(body) => request
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => request.body(Body::empty()).unwrap(),
        };

        self.send_request(request).await
    }

    async fn send_request(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, body)
    }

    async fn login(&self, username: &str, password: &str) -> String {
        let (status, body) = self
            .send(
                Method::POST,
                "/api/login",
                None,
                Some(serde_json::json!({ "username": username, "password": password })),
            )
            .await;
        assert_eq!(status, StatusCode::OK);

        body["token"].as_str().unwrap().to_string()
    }

    async fn admin_token(&self) -> String {
        self.login("admin", "admin123").await
    }

    async fn mechanic_token(&self) -> String {
        self.login("mechanic", "mechanic123").await
    }

    /// Creates a client through the API and returns its ID.
    async fn create_client(&self, token: &str, name: &str) -> i64 {
        let (status, body) = self
            .send(
                Method::POST,
                "/api/clients",
                Some(token),
                Some(serde_json::json!({
                    "name": name,
                    "phone": "555-0100",
                    "email": format!("{}@example.com", name.to_lowercase()),
                })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);

        body["id"].as_i64().unwrap()
    }
}
