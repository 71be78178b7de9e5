use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use charitable_adapters::{
    config::Settings, persistence::HashMapAuthGateway, router, telemetry::init_tracing,
};
use config::{Config, File, FileFormat};
use serde_json::{Value, json};
use tower::ServiceExt;

async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    // Only the first call installs the subscriber
    let _ = init_tracing("debug");

    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn credentials(email: &str, password: &str) -> Value {
    json!({ "email": email, "password": password })
}

#[tokio::test]
async fn sign_up_then_sign_in() {
    let app = router(HashMapAuthGateway::new());

    let (status, body) = post_json(
        &app,
        "/auth/sign-up",
        credentials("helper@example.org", "password123"),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({ "email": "helper@example.org" }));

    let (status, body) = post_json(
        &app,
        "/auth/sign-in",
        credentials("helper@example.org", "password123"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "email": "helper@example.org" }));
}

#[tokio::test]
async fn duplicate_sign_up_reports_email_taken() {
    let app = router(HashMapAuthGateway::new());
    let form = credentials("helper@example.org", "password123");

    post_json(&app, "/auth/sign-up", form.clone()).await;
    let (status, body) = post_json(&app, "/auth/sign-up", form).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(
        body,
        json!({ "error": "This email is already registered", "code": "email_taken" })
    );
}

#[tokio::test]
async fn malformed_email_is_rejected() {
    let app = router(HashMapAuthGateway::new());

    for uri in ["/auth/sign-up", "/auth/sign-in"] {
        let (status, body) =
            post_json(&app, uri, credentials("not-an-email", "password123")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "invalid_email");
        assert_eq!(body["error"], "Please enter a valid email address");
    }
}

#[tokio::test]
async fn short_password_depends_on_form() {
    let app = router(HashMapAuthGateway::new());
    let form = credentials("helper@example.org", "short");

    let (status, body) = post_json(&app, "/auth/sign-up", form.clone()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "weak_password");
    assert_eq!(body["error"], "Password must be at least 8 characters long");

    let (status, body) = post_json(&app, "/auth/sign-in", form).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "invalid_credentials");
}

#[tokio::test]
async fn unknown_account_is_invalid_credentials() {
    let app = router(HashMapAuthGateway::new());

    let (status, body) = post_json(
        &app,
        "/auth/sign-in",
        credentials("nobody@example.org", "password123"),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        body,
        json!({ "error": "Invalid email or password", "code": "invalid_credentials" })
    );
}

#[tokio::test]
async fn seeded_demo_account_can_sign_in() {
    let settings = Settings::from_builder(Config::builder().add_source(File::from_str(
        r#"{ "auth": { "demo_accounts": [
            { "email": "demo@example.org", "password": "volunteer1" }
        ] } }"#,
        FileFormat::Json,
    )))
    .unwrap();
    let gateway =
        HashMapAuthGateway::with_accounts(settings.auth.demo_credentials().unwrap());
    let app = router(gateway);

    let (status, _) = post_json(
        &app,
        "/auth/sign-in",
        credentials("demo@example.org", "volunteer1"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn shift_preview_formats_hours() {
    let app = router(HashMapAuthGateway::new());

    let (status, body) = post_json(
        &app,
        "/volunteer/shifts/preview",
        json!({ "hours": 0.5, "skills": ["Tutoring"] }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "hours": 0.5,
            "display": "0.5 hours",
            "skills": ["Tutoring"],
            "summary": "0.5 hours: Tutoring",
        })
    );

    let (_, body) = post_json(&app, "/volunteer/shifts/preview", json!({ "hours": 1 })).await;
    assert_eq!(body["display"], "1 hour");
}

#[tokio::test]
async fn invalid_shift_is_unprocessable() {
    let app = router(HashMapAuthGateway::new());

    for payload in [
        json!({ "hours": 25 }),
        json!({ "hours": 0 }),
        json!({ "hours": 2, "skills": ["Cooking", ""] }),
    ] {
        let (status, body) = post_json(&app, "/volunteer/shifts/preview", payload).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["code"], Value::Null);
    }
}
