use axum::Router;
use axum::response::IntoResponse;
use axum::routing::post;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use vidagent::application::ports::{CompletionClient, CompletionError};
use vidagent::infrastructure::llm::GroqClient;

async fn start_mock_completion_server(
    response_status: u16,
    response_body: &'static str,
) -> (String, oneshot::Sender<()>) {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let app = Router::new().route(
        "/chat/completions",
        post(move || async move {
            let status = axum::http::StatusCode::from_u16(response_status).unwrap();
            (status, response_body).into_response()
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{}", addr);

    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            })
            .await
            .ok();
    });

    (base_url, shutdown_tx)
}

fn test_client(base_url: String) -> GroqClient {
    GroqClient::new(
        "test-key".to_string(),
        "llama3-8b-8192".to_string(),
        0.5,
        Some(base_url),
    )
}

#[tokio::test]
async fn given_valid_prompt_when_completing_then_returns_first_choice_content() {
    let response_body =
        r#"{"choices": [{"message": {"role": "assistant", "content": "A tight summary."}}]}"#;
    let (base_url, shutdown_tx) = start_mock_completion_server(200, response_body).await;

    let client = test_client(base_url);
    let result = client.complete("Summarize the video").await;

    assert_eq!(result.unwrap(), "A tight summary.");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_error_status_when_completing_then_returns_status_and_body_verbatim() {
    let (base_url, shutdown_tx) = start_mock_completion_server(429, "rate limit exceeded").await;

    let client = test_client(base_url);
    let result = client.complete("Summarize the video").await;

    match result {
        Err(CompletionError::Upstream { status, body }) => {
            assert_eq!(status, 429);
            assert_eq!(body, "rate limit exceeded");
        }
        other => panic!("expected upstream error, got {:?}", other),
    }
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_empty_choices_when_completing_then_returns_invalid_response() {
    let response_body = r#"{"choices": []}"#;
    let (base_url, shutdown_tx) = start_mock_completion_server(200, response_body).await;

    let client = test_client(base_url);
    let result = client.complete("Summarize the video").await;

    assert!(matches!(result, Err(CompletionError::InvalidResponse(_))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_unparsable_payload_when_completing_then_returns_invalid_response() {
    let (base_url, shutdown_tx) = start_mock_completion_server(200, "not json").await;

    let client = test_client(base_url);
    let result = client.complete("Summarize the video").await;

    assert!(matches!(result, Err(CompletionError::InvalidResponse(_))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_unreachable_server_when_completing_then_returns_request_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let client = test_client(base_url);
    let result = client.complete("Summarize the video").await;

    assert!(matches!(result, Err(CompletionError::Request(_))));
}
