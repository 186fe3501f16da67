//! EmailJS delivery: the only place the contact form talks to the network.
//!
//! A single POST per attempt. No retry: the submission flow's timeout guard is
//! the only fallback, and it is owned by `contact::flow`.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::config::EmailJsConfig;
use crate::models::contact::OutboundMessage;

pub const DEFAULT_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Delivery rejected (status {status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("No response within {0:?}")]
    TimedOut(std::time::Duration),
}

/// Outbound delivery collaborator. Resolves once with accept (`Ok`) or reject.
#[async_trait]
pub trait DeliveryClient: Send + Sync {
    async fn deliver(&self, message: &OutboundMessage) -> Result<(), DeliveryError>;
}

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a OutboundMessage,
}

#[derive(Clone)]
pub struct EmailJsClient {
    client: Client,
    config: EmailJsConfig,
}

impl EmailJsClient {
    pub fn new(config: EmailJsConfig) -> Result<Self, DeliveryError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()?;
        Ok(Self { client, config })
    }

    fn request_body<'a>(&'a self, message: &'a OutboundMessage) -> SendRequest<'a> {
        SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            template_params: message,
        }
    }
}

#[async_trait]
impl DeliveryClient for EmailJsClient {
    async fn deliver(&self, message: &OutboundMessage) -> Result<(), DeliveryError> {
        let response = self
            .client
            .post(&self.config.endpoint)
            .header("content-type", "application/json")
            .json(&self.request_body(message))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if !status.is_success() {
            return Err(DeliveryError::Rejected {
                status: status.as_u16(),
                message: body,
            });
        }

        debug!("EmailJS accepted message: status={}, body={}", status, body);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> EmailJsConfig {
        EmailJsConfig {
            service_id: "service_x".to_string(),
            template_id: "template_y".to_string(),
            public_key: "pk_z".to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }

    #[test]
    fn test_request_body_shape() {
        let client = EmailJsClient::new(config()).unwrap();
        let message = OutboundMessage {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "Let's collaborate".to_string(),
        };

        let body = serde_json::to_value(client.request_body(&message)).unwrap();
        assert_eq!(body["service_id"], "service_x");
        assert_eq!(body["template_id"], "template_y");
        assert_eq!(body["user_id"], "pk_z");
        assert_eq!(body["template_params"]["name"], "Ada");
        assert_eq!(body["template_params"]["email"], "ada@example.com");
        assert_eq!(body["template_params"]["subject"], "Hello");
        assert_eq!(body["template_params"]["message"], "Let's collaborate");
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_http_error() {
        let mut cfg = config();
        cfg.endpoint = "http://127.0.0.1:9/send".to_string();
        let client = EmailJsClient::new(cfg).unwrap();
        let message = OutboundMessage {
            name: "a".to_string(),
            email: "b".to_string(),
            subject: "c".to_string(),
            message: "d".to_string(),
        };

        let err = client.deliver(&message).await.unwrap_err();
        assert!(matches!(err, DeliveryError::Http(_)));
    }
}
