// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Router-level tests driving the full HTTP surface via `oneshot`

use std::sync::Arc;

use anyhow::Result;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use http_body_util::BodyExt;
use image::DynamicImage;
use mockall::mock;
use tower::ServiceExt;

use fabstir_image_relay::api::http_server::{router, AppState};
use fabstir_image_relay::config::Settings;
use fabstir_image_relay::inference::TextToImage;

mock! {
    pub Provider {}

    #[async_trait::async_trait]
    impl TextToImage for Provider {
        async fn text_to_image(&self, prompt: &str, model: &str) -> Result<DynamicImage>;
    }
}

fn generate_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/generate")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_root_returns_greeting() {
    let state = AppState::new(
        Settings::default().with_api_key("hf_test_key"),
        Arc::new(MockProvider::new()),
    );
    let response = router(state)
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "AI Image Generator backend running!");
}

#[tokio::test]
async fn test_root_returns_greeting_without_api_key() {
    // Health greeting is independent of configuration state
    let state = AppState::new(Settings::default(), Arc::new(MockProvider::new()));
    let response = router(state)
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "AI Image Generator backend running!");
}

#[tokio::test]
async fn test_generate_success_end_to_end() {
    let mut provider = MockProvider::new();
    provider
        .expect_text_to_image()
        .withf(|prompt, _| prompt == "a red fox")
        .times(1)
        .returning(|_, _| Ok(DynamicImage::new_rgb8(1, 1)));

    let state = AppState::new(
        Settings::default().with_api_key("hf_test_key"),
        Arc::new(provider),
    );
    let response = router(state)
        .oneshot(generate_request(r#"{"prompt": "a red fox"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let image_base64 = json["image_base64"].as_str().unwrap();
    let bytes = STANDARD.decode(image_base64).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    image::load_from_memory(&bytes).unwrap();
}

#[tokio::test]
async fn test_generate_missing_api_key_returns_500() {
    let mut provider = MockProvider::new();
    provider.expect_text_to_image().times(0);

    let state = AppState::new(Settings::default(), Arc::new(provider));
    let response = router(state)
        .oneshot(generate_request(r#"{"prompt": "a red fox"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["detail"], "HF API key missing");
}

#[tokio::test]
async fn test_generate_upstream_failure_returns_500_with_fixed_detail() {
    let mut provider = MockProvider::new();
    provider
        .expect_text_to_image()
        .times(1)
        .returning(|_, _| Err(anyhow::anyhow!("dns lookup failed")));

    let state = AppState::new(
        Settings::default().with_api_key("hf_test_key"),
        Arc::new(provider),
    );
    let response = router(state)
        .oneshot(generate_request(r#"{"prompt": "a red fox"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["detail"], "AI API error");
}

#[tokio::test]
async fn test_generate_body_without_prompt_is_client_error() {
    let mut provider = MockProvider::new();
    provider.expect_text_to_image().times(0);

    let state = AppState::new(
        Settings::default().with_api_key("hf_test_key"),
        Arc::new(provider),
    );
    let response = router(state)
        .oneshot(generate_request(r#"{}"#))
        .await
        .unwrap();

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let state = AppState::new(Settings::default(), Arc::new(MockProvider::new()));
    let response = router(state)
        .oneshot(
            Request::builder()
                .uri("/")
                .header(header::ORIGIN, "http://localhost:3000")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .map(|v| v.to_str().unwrap()),
        Some("*")
    );
}
