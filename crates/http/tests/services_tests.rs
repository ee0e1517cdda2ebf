//! Integration tests for the API services

use broker_core::{Credentials, ManualClock, MemoryStore, PropertyKind, TokenStore};
use broker_http::types::RegisterRequest;
use broker_http::{AuthApi, ChatApi, ClientBuilder, ClientError, ListingApi, ProfileApi};
use serde_json::json;
use std::rc::Rc;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

type Store = TokenStore<MemoryStore, ManualClock>;

/// Route client log events to the test output
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

struct Fixture {
    server: MockServer,
    store: Rc<Store>,
    clock: ManualClock,
}

impl Fixture {
    async fn start() -> Self {
        init_tracing();
        let clock = ManualClock::new(1_700_000_000_000);
        Self {
            server: MockServer::start().await,
            store: Rc::new(TokenStore::with_clock(MemoryStore::new(), clock.clone())),
            clock,
        }
    }

    fn auth_api(&self) -> AuthApi {
        AuthApi::new(self.public(), self.store.clone())
    }

    fn public(&self) -> broker_http::PublicClient {
        ClientBuilder::new()
            .base_url(self.server.uri())
            .build_public()
            .unwrap()
    }

    fn authenticated(&self) -> broker_http::AuthenticatedClient {
        self.public().authenticate(self.store.clone())
    }
}

#[tokio::test]
async fn test_login_establishes_session() {
    let fx = Fixture::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(json!({"email": "ana@example.com", "password": "hunter2"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "abc123",
            "expires_in": 1,
            "user": {"id": 1, "name": "Ana", "email": "ana@example.com"}
        })))
        .mount(&fx.server)
        .await;

    let response = fx
        .auth_api()
        .login("ana@example.com", "hunter2")
        .await
        .unwrap();
    assert_eq!(response.user.unwrap().name, "Ana");
    assert_eq!(fx.store.token().as_deref(), Some("abc123"));

    fx.clock.advance(1100);
    assert_eq!(fx.store.token(), None);
}

#[tokio::test]
async fn test_login_without_expiry_uses_default_ttl() {
    let fx = Fixture::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "tok"})))
        .mount(&fx.server)
        .await;

    fx.auth_api().login("a@b.c", "pw").await.unwrap();
    assert_eq!(fx.store.expires_at(), Some(1_700_000_000_000 + 3_600_000));

    let short = fx.auth_api().with_default_ttl(5);
    short.login("a@b.c", "pw").await.unwrap();
    assert_eq!(fx.store.expires_at(), Some(1_700_000_000_000 + 5_000));
}

#[tokio::test]
async fn test_failed_login_leaves_session_untouched() {
    let fx = Fixture::start().await;
    fx.store.set("existing", 3600).unwrap();

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_string("bad credentials"))
        .mount(&fx.server)
        .await;

    let result = fx.auth_api().login("a@b.c", "wrong").await;
    assert!(matches!(result, Err(ClientError::AuthenticationFailed(_))));
    assert_eq!(fx.store.token().as_deref(), Some("existing"));
}

#[tokio::test]
async fn test_login_with_empty_token_is_rejected() {
    let fx = Fixture::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": ""})))
        .mount(&fx.server)
        .await;

    let result = fx.auth_api().login("a@b.c", "pw").await;
    assert!(matches!(result, Err(ClientError::Session(_))));
    assert_eq!(fx.store.token(), None);
}

#[tokio::test]
async fn test_register_then_logout() {
    let fx = Fixture::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/register"))
        .and(body_json(json!({
            "name": "Bo",
            "email": "bo@example.com",
            "password": "pw"
        })))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({"access_token": "fresh", "expires_in": 600})),
        )
        .mount(&fx.server)
        .await;

    let api = fx.auth_api();
    api.register(&RegisterRequest {
        name: "Bo".into(),
        email: "bo@example.com".into(),
        password: "pw".into(),
    })
    .await
    .unwrap();
    assert_eq!(fx.store.token().as_deref(), Some("fresh"));

    api.logout();
    assert_eq!(fx.store.token(), None);
}

#[tokio::test]
async fn test_listing_endpoints() {
    let fx = Fixture::start().await;
    fx.store.set("tok", 3600).unwrap();

    Mock::given(method("GET"))
        .and(path("/api/real-estate"))
        .and(header("authorization", "Bearer tok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": 1,
            "title": "Villa",
            "address": "2 Hill Rd",
            "city": "Faro",
            "kind": "house",
            "price": "420000.00",
            "bedrooms": 4
        }])))
        .mount(&fx.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/rentals"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": 2,
            "title": "Studio",
            "address": "3 Bay St",
            "city": "Porto",
            "monthly_rent": 750,
            "furnished": true
        }])))
        .mount(&fx.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/mortgages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&fx.server)
        .await;

    let api = ListingApi::new(fx.authenticated());

    let homes = api.real_estate().await.unwrap();
    assert_eq!(homes.len(), 1);
    assert_eq!(homes[0].kind, PropertyKind::House);

    let rentals = api.rentals().await.unwrap();
    assert!(rentals[0].furnished);

    assert!(api.mortgages().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_profile() {
    let fx = Fixture::start().await;
    fx.store.set("tok", 3600).unwrap();

    Mock::given(method("GET"))
        .and(path("/api/users/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 9,
            "name": "Admin",
            "email": "admin@example.com",
            "role": "admin"
        })))
        .mount(&fx.server)
        .await;

    let profile = ProfileApi::new(fx.authenticated()).me().await.unwrap();
    assert_eq!(profile.id, 9);
    assert_eq!(profile.role.as_deref(), Some("admin"));
}

#[tokio::test]
async fn test_chat_forwards_trimmed_message() {
    let fx = Fixture::start().await;
    fx.store.set("tok", 3600).unwrap();

    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .and(body_json(json!({"message": "best rate for 30 years?"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"reply": "3.75%"})))
        .mount(&fx.server)
        .await;

    let reply = ChatApi::new(fx.authenticated())
        .send("  best rate for 30 years?  ")
        .await
        .unwrap();
    assert_eq!(reply, "3.75%");
}

#[tokio::test]
async fn test_chat_rejects_blank_message() {
    let fx = Fixture::start().await;
    fx.store.set("tok", 3600).unwrap();

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&fx.server)
        .await;

    let result = ChatApi::new(fx.authenticated()).send("   ").await;
    assert!(matches!(result, Err(ClientError::BadRequest(_))));
}

#[tokio::test]
async fn test_expired_session_blocks_listing_calls() {
    let fx = Fixture::start().await;
    fx.store.set("tok", 1).unwrap();
    fx.clock.advance(1100);

    let result = ListingApi::new(fx.authenticated()).rentals().await;
    assert!(matches!(result, Err(ClientError::NotAuthenticated)));
}
