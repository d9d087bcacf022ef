//! Tests for LLM clients.

use super::*;
use crate::config::load;
use serde_json::json;

#[tokio::test]
async fn test_openai_client_reply() {
    let client = OpenAiClient::default();
    assert_eq!(client.generate("hi").await, "OpenAI response to: hi");
    assert_eq!(client.name(), "openai");
    assert_eq!(client.model(), None);
}

#[tokio::test]
async fn test_local_llama_client_reply() {
    let client = LocalLlamaClient::default();
    assert_eq!(client.generate("hi").await, "Local Llama response to: hi");
    assert_eq!(client.name(), "local-llama");
}

#[tokio::test]
async fn test_run_agent_through_trait_object() {
    let clients: Vec<Box<dyn LlmClient>> =
        vec![Box::new(OpenAiClient::default()), Box::new(LocalLlamaClient::default())];

    let mut replies = Vec::new();
    for client in &clients {
        replies.push(run_agent(client.as_ref(), "ping").await);
    }

    assert_eq!(
        replies,
        ["OpenAI response to: ping", "Local Llama response to: ping"]
    );
}

#[tokio::test]
async fn test_run_agent_empty_prompt() {
    let reply = run_agent(&LocalLlamaClient::default(), "").await;
    assert_eq!(reply, "Local Llama response to: ");
}

#[test]
fn test_client_for_routes_by_model_name() {
    let cfg = load(&json!({
        "models": [
            {"name": "gpt-4-turbo", "api_key": "sk-1"},
            {"name": "llama-3-local", "stop_words": ["END"]},
            {"name": "GPT-uppercase"}
        ]
    }))
    .unwrap();

    assert_eq!(client_for(&cfg.models()[0]).name(), "openai");
    assert_eq!(client_for(&cfg.models()[1]).name(), "local-llama");
    assert_eq!(client_for(&cfg.models()[2]).name(), "local-llama");
    assert_eq!(client_for(&cfg.models()[0]).model(), Some("gpt-4-turbo"));
    assert_eq!(client_for(&cfg.models()[2]).model(), Some("GPT-uppercase"));
}

#[test]
fn test_clients_from_settings_keep_model_name() {
    let cfg = load(&json!({"models": [{"name": "gpt-4o"}, {"name": "llama-3"}]})).unwrap();

    assert_eq!(
        OpenAiClient::from_settings(&cfg.models()[0]).model(),
        Some("gpt-4o")
    );
    assert_eq!(
        LocalLlamaClient::from_settings(&cfg.models()[1]).model(),
        Some("llama-3")
    );
}
