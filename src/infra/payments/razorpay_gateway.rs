use crate::domain::ports::PaymentGateway;
use crate::error::AppError;
use async_trait::async_trait;
use hmac::{Hmac, Mac};
use reqwest::Client;
use serde_json::{Value, json};
use sha2::Sha256;
use std::time::Duration;
use tracing::{error, info};

/// Razorpay integration via REST API (no SDK dependency).
pub struct RazorpayGateway {
    client: Client,
}

impl Default for RazorpayGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl RazorpayGateway {
    pub fn new() -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(15))
                .build()
                .unwrap_or_else(|_| Client::new()),
        }
    }
}

#[async_trait]
impl PaymentGateway for RazorpayGateway {
    async fn create_order(
        &self,
        key_id: &str,
        key_secret: &str,
        amount_minor: i64,
        receipt: &str,
    ) -> Result<String, AppError> {
        let payload = json!({
            "amount": amount_minor,
            "currency": "INR",
            "receipt": receipt
        });

        let response = self
            .client
            .post("https://api.razorpay.com/v1/orders")
            .basic_auth(key_id, Some(key_secret))
            .json(&payload)
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("Payment gateway network error: {}", e)))?;

        let status = response.status();
        let body: Value = response
            .json()
            .await
            .map_err(|_| AppError::Upstream("Payment gateway returned invalid JSON".to_string()))?;

        if !status.is_success() {
            error!("Order creation failed: {} - {}", status, body);
            return Err(AppError::Upstream(format!("Payment gateway error: {}", status)));
        }

        let order_id = body["id"]
            .as_str()
            .map(String::from)
            .ok_or_else(|| AppError::Upstream(format!("Order response missing id: {}", body)))?;
        info!("Created gateway order {}", order_id);
        Ok(order_id)
    }
}

/// Verifies the gateway callback signature: HMAC-SHA256 over
/// "{order_id}|{payment_id}" with the stored key secret, hex-encoded.
/// Comparison is constant-time via the mac itself.
pub fn verify_signature(order_id: &str, payment_id: &str, secret: &str, signature: &str) -> bool {
    let Ok(mut mac) = Hmac::<Sha256>::new_from_slice(secret.as_bytes()) else {
        return false;
    };
    mac.update(format!("{}|{}", order_id, payment_id).as_bytes());

    let Ok(sig_bytes) = hex::decode(signature) else {
        return false;
    };
    mac.verify_slice(&sig_bytes).is_ok()
}
