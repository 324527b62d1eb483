use crate::config::Config;
use crate::retry::{with_retry_if, RetryConfig};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize, Deserialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Message,
}

const SYSTEM_PROMPT: &str = "You are a festival assistant for a film-festival \
discovery platform. Answer questions about film festivals: deadlines, categories, \
premiere rules, fees, and submission logistics.\n\n\
Guidelines:\n\
- Answer concisely, in a few sentences\n\
- If the question is not about film festivals, say so briefly\n\
- If you are not sure about a date or rule, say so instead of guessing";

/// Answer a free-text festival inquiry via the Groq chat API.
pub async fn answer_inquiry(
    client: &reqwest::Client,
    config: &Config,
    inquiry: &str,
) -> Result<String> {
    let request = ChatRequest {
        model: config.groq_model.clone(),
        messages: vec![
            Message {
                role: "system".to_string(),
                content: SYSTEM_PROMPT.to_string(),
            },
            Message {
                role: "user".to_string(),
                content: format!("Festival Inquiry: {}", inquiry),
            },
        ],
        max_tokens: 512,
        temperature: 0.7,
    };

    let answer = with_retry_if(
        &RetryConfig::api_call(),
        "Festival inquiry",
        || async {
            let response = client
                .post(&config.groq_api_url)
                .header("Authorization", format!("Bearer {}", config.groq_api_key))
                .header("Content-Type", "application/json")
                .json(&request)
                .send()
                .await
                .context("Failed to send request to inference API")?;

            if !response.status().is_success() {
                let status = response.status();
                let body = response
                    .text()
                    .await
                    .unwrap_or_else(|e| format!("<failed to read body: {}>", e));
                anyhow::bail!("Inference API error ({}): {}", status, body);
            }

            let chat_response: ChatResponse = response
                .json()
                .await
                .context("Failed to parse inference response")?;

            let answer = chat_response
                .choices
                .first()
                .map(|c| c.message.content.clone())
                .context("Inference response contained no choices")?;

            Ok(answer)
        },
        is_retryable_error,
    )
    .await?;

    Ok(answer)
}

/// Retry 429 (rate limit) and 5xx errors; fail fast on other 4xx.
fn is_retryable_error(error: &anyhow::Error) -> bool {
    let error_str = error.to_string();

    // Error format: "Inference API error (500 Internal Server Error): ..."
    if error_str.contains("Inference API error") {
        if let Some(start) = error_str.find('(') {
            if let Some(end) = error_str[start..].find(')') {
                let status_str = &error_str[start + 1..start + end];
                let status_num = status_str.split_whitespace().next().unwrap_or("");
                if let Ok(status) = status_num.parse::<u16>() {
                    return status == 429 || status >= 500;
                }
            }
        }
    }

    // Network errors, timeouts, and parse failures are transient
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::{
        matchers::{header, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    fn create_test_config(groq_url: &str) -> Config {
        Config {
            content_dir: "content".to_string(),
            tmdb_api_key: "test-tmdb-key".to_string(),
            tmdb_api_url: "https://api.tmdb.example.com".to_string(),
            groq_api_key: "test-groq-key".to_string(),
            groq_api_url: groq_url.to_string(),
            groq_model: "llama-3.3-70b-versatile".to_string(),
            festival_api_url: "https://festival-api.example.com".to_string(),
            port: 8080,
        }
    }

    fn create_chat_response(content: &str) -> serde_json::Value {
        serde_json::json!({
            "id": "chatcmpl-123",
            "object": "chat.completion",
            "choices": [
                {
                    "index": 0,
                    "message": {
                        "role": "assistant",
                        "content": content
                    },
                    "finish_reason": "stop"
                }
            ]
        })
    }

    #[test]
    fn test_chat_request_serialization() {
        let request = ChatRequest {
            model: "llama-3.3-70b-versatile".to_string(),
            messages: vec![
                Message {
                    role: "system".to_string(),
                    content: "You are a festival assistant.".to_string(),
                },
                Message {
                    role: "user".to_string(),
                    content: "When is the Sundance deadline?".to_string(),
                },
            ],
            max_tokens: 512,
            temperature: 0.7,
        };

        let json = serde_json::to_string(&request).expect("Should serialize");
        assert!(json.contains("llama-3.3-70b-versatile"));
        assert!(json.contains("system"));
        assert!(json.contains("512"));
        assert!(json.contains("0.7"));
    }

    #[test]
    fn test_chat_response_deserialization() {
        let json = r#"{
            "choices": [
                { "message": { "role": "assistant", "content": "The deadline is in September." } }
            ]
        }"#;

        let response: ChatResponse = serde_json::from_str(json).expect("Should deserialize");
        assert_eq!(response.choices.len(), 1);
        assert_eq!(
            response.choices[0].message.content,
            "The deadline is in September."
        );
    }

    #[tokio::test]
    async fn test_answer_inquiry_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("Authorization", "Bearer test-groq-key"))
            .and(header("Content-Type", "application/json"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(create_chat_response("Submissions close in September.")),
            )
            .mount(&mock_server)
            .await;

        let config = create_test_config(&format!("{}/chat/completions", mock_server.uri()));
        let client = reqwest::Client::new();

        let answer = answer_inquiry(&client, &config, "When is the Sundance deadline?")
            .await
            .expect("Should succeed");
        assert_eq!(answer, "Submissions close in September.");
    }

    #[tokio::test]
    async fn test_answer_inquiry_empty_choices() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "choices": [] })),
            )
            .mount(&mock_server)
            .await;

        let config = create_test_config(&format!("{}/chat/completions", mock_server.uri()));
        let client = reqwest::Client::new();

        let result = answer_inquiry(&client, &config, "Anything?").await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("no choices"));
    }

    #[tokio::test]
    async fn test_answer_inquiry_retries_on_500() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(500).set_body_string("overloaded"))
            .up_to_n_times(2)
            .mount(&mock_server)
            .await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(create_chat_response("Recovered answer")),
            )
            .mount(&mock_server)
            .await;

        let config = create_test_config(&format!("{}/chat/completions", mock_server.uri()));
        let client = reqwest::Client::new();

        let answer = answer_inquiry(&client, &config, "Test")
            .await
            .expect("Should succeed after retries");
        assert_eq!(answer, "Recovered answer");
    }

    #[tokio::test]
    async fn test_answer_inquiry_no_retry_on_400() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(400).set_body_string("bad request"))
            .expect(1) // no retries
            .mount(&mock_server)
            .await;

        let config = create_test_config(&format!("{}/chat/completions", mock_server.uri()));
        let client = reqwest::Client::new();

        let result = answer_inquiry(&client, &config, "Test").await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("400"));
    }

    // ==================== is_retryable_error Tests ====================

    #[test]
    fn test_is_retryable_error_statuses() {
        let retryable = anyhow::anyhow!("Inference API error (500 Internal Server Error): boom");
        assert!(is_retryable_error(&retryable));

        let rate_limited = anyhow::anyhow!("Inference API error (429 Too Many Requests): slow");
        assert!(is_retryable_error(&rate_limited));

        let client_error = anyhow::anyhow!("Inference API error (401 Unauthorized): bad key");
        assert!(!is_retryable_error(&client_error));
    }

    #[test]
    fn test_is_retryable_error_network() {
        let network = anyhow::anyhow!("Failed to send request to inference API: refused");
        assert!(is_retryable_error(&network));
    }
}
