//! Backend endpoints for order creation and payment verification.
//!
//! The flow talks to the backend through the [`BillingBackend`] trait so the
//! purchase sequence stays testable without a live server; [`HttpBillingApi`]
//! is the production implementation.

use async_trait::async_trait;
use reqwest::Client;

use crate::config::BillingConfig;
use crate::error::{map_status_to_error_code, BillingError, Result};
use crate::models::{CreateOrderRequest, CreateOrderResponse, VerifyRequest, VerifyResponse};
use crate::plan::PlanId;

/// The backend capabilities the purchase flow depends on.
#[async_trait]
pub trait BillingBackend: Send + Sync {
    /// Create a payment order for the given plan and integer amount.
    ///
    /// The backend independently validates the amount against the plan; the
    /// client-supplied value is advisory and never trusted.
    async fn create_order(
        &self,
        plan: PlanId,
        amount: u64,
        idempotency_key: &str,
    ) -> Result<CreateOrderResponse>;

    /// Submit a gateway confirmation for authenticity validation and
    /// entitlement settlement.
    async fn verify_payment(&self, request: &VerifyRequest) -> Result<VerifyResponse>;
}

/// HTTP implementation of [`BillingBackend`] against the CareerLoop backend.
#[derive(Debug, Clone)]
pub struct HttpBillingApi {
    client: Client,
    base_url: String,
}

impl HttpBillingApi {
    pub fn new(config: &BillingConfig) -> Self {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(std::time::Duration::from_secs(secs));
        }
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post<B: serde::Serialize, T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let response = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|e| BillingError::network(format!("Request to {} failed: {}", path, e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::warn!("Backend rejected {}: {} {}", path, status, error_text);
            return Err(BillingError::with_status(
                map_status_to_error_code(status.as_u16()),
                format!("Backend rejected {}: {}", path, error_text),
                status.as_u16(),
            ));
        }

        response.json().await.map_err(|e| {
            BillingError::network(format!("Failed to parse {} response: {}", path, e))
        })
    }
}

#[async_trait]
impl BillingBackend for HttpBillingApi {
    async fn create_order(
        &self,
        plan: PlanId,
        amount: u64,
        idempotency_key: &str,
    ) -> Result<CreateOrderResponse> {
        let request = CreateOrderRequest {
            plan_type: plan,
            amount,
            idempotency_key: idempotency_key.to_string(),
        };
        let response: CreateOrderResponse =
            self.post("/payments/create-order", &request).await?;
        tracing::info!(
            "Order created: plan={}, order={}, amount={}",
            plan,
            response.order.id,
            response.order.amount
        );
        Ok(response)
    }

    async fn verify_payment(&self, request: &VerifyRequest) -> Result<VerifyResponse> {
        let response: VerifyResponse = self.post("/payments/verify", request).await?;
        tracing::info!(
            "Verification settled: order={}, success={}",
            request.confirmation.razorpay_order_id,
            response.success
        );
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_building_trims_trailing_slash() {
        let api = HttpBillingApi::new(&BillingConfig {
            base_url: "https://example.com/".into(),
            ..Default::default()
        });
        assert_eq!(
            api.url("/payments/create-order"),
            "https://example.com/payments/create-order"
        );
    }
}
