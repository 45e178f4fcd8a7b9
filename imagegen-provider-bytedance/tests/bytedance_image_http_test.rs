//! ByteDance image generation end-to-end over the default reqwest transport.

use base64::Engine;
use imagegen_core::error::ImageError;
use imagegen_core::types::{ImageGenerationRequest, ReferenceFile};
use imagegen_core::utils::new_cancel_handle;
use imagegen_core::ImageModel;
use imagegen_provider_bytedance::{ByteDanceProvider, models};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

fn provider(server: &MockServer) -> ByteDanceProvider {
    ByteDanceProvider::builder()
        .api_key("test-key")
        .base_url(format!("{}/api/v3", server.uri()))
        .build()
        .expect("build ok")
}

#[tokio::test]
async fn generates_image_from_reference_bytes() {
    let server = MockServer::start().await;
    let png = vec![0x89, b'P', b'N', b'G'];
    let expected_image = format!(
        "data:image/png;base64,{}",
        base64::engine::general_purpose::STANDARD.encode(&png)
    );

    Mock::given(method("POST"))
        .and(path("/api/v3/images/generations"))
        .and(header("authorization", "Bearer test-key"))
        .and(header("x-trace", "abc"))
        .and(body_partial_json(serde_json::json!({
            "model": "seedream-4-0-250828",
            "prompt": "Make it night",
            "size": "2048x2048",
            "response_format": "b64_json",
            "image": expected_image,
        })))
        .and(|req: &Request| {
            serde_json::from_slice::<serde_json::Value>(&req.body)
                .map(|v| v.get("aspect_ratio").is_none() && v.get("seed").is_none())
                .unwrap_or(false)
        })
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("x-request-id", "ark-1")
                .set_body_json(serde_json::json!({
                    "model": "seedream-4-0-250828",
                    "data": [ { "b64_json": "bmlnaHQ=" } ],
                    "usage": { "generated_images": 1, "output_tokens": 16384, "total_tokens": 16384 }
                })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let model = provider(&server).image_model(models::SEEDREAM_4_0);
    let req = ImageGenerationRequest::new("Make it night")
        .with_file(ReferenceFile::bytes(png, "image/png"))
        .with_header("X-Trace", "abc");

    let out = model.generate(req).await.expect("generate ok");
    assert_eq!(out.images, vec!["bmlnaHQ="]);
    assert_eq!(
        out.response.headers.get("x-request-id").map(String::as_str),
        Some("ark-1")
    );
    assert_eq!(out.usage.unwrap().output_tokens, Some(16384));
}

#[tokio::test]
async fn ark_error_envelope_surfaces_vendor_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v3/images/generations"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "error": {
                "code": "AuthenticationError",
                "message": "The API key in the request is missing or invalid.",
                "type": "Unauthorized"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let err = provider(&server)
        .image_model(models::SEEDREAM_4_0)
        .generate(ImageGenerationRequest::new("p"))
        .await
        .unwrap_err();

    match err {
        ImageError::AuthenticationError(msg) => {
            assert_eq!(msg, "The API key in the request is missing or invalid.")
        }
        other => panic!("unexpected error variant: {other:?}"),
    }
}

#[tokio::test]
async fn cancelled_request_returns_cancelled() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(std::time::Duration::from_secs(10))
                .set_body_json(serde_json::json!({ "data": [] })),
        )
        .mount(&server)
        .await;

    let cancel = new_cancel_handle();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;
        trigger.cancel();
    });

    let model = provider(&server).image_model(models::SEEDREAM_4_0);
    let result = tokio::time::timeout(
        std::time::Duration::from_secs(2),
        model.generate(ImageGenerationRequest::new("p").with_cancel(cancel)),
    )
    .await
    .expect("cancellation should finish before the mock delay");

    assert!(matches!(result, Err(ImageError::Cancelled)));
}
