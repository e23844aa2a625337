//! Native checkout: the platform payment SDK, awaited inline.

use std::sync::Arc;

use async_trait::async_trait;

use crate::collector::{Collected, PaymentCollector};
use crate::error::{BillingError, Result};
use crate::models::{CheckoutOptions, GatewayRejection, PaymentConfirmation};

/// Seam to the native payment SDK.
#[async_trait]
pub trait NativeGateway: Send + Sync {
    /// Open the native checkout with the given options.
    ///
    /// Resolves with a signed confirmation, or rejects with a structured
    /// cancellation/error that may carry a human-readable description.
    async fn open(
        &self,
        options: CheckoutOptions,
    ) -> std::result::Result<PaymentConfirmation, GatewayRejection>;
}

/// Native checkout variant.
pub struct NativeCheckout {
    gateway: Arc<dyn NativeGateway>,
}

impl NativeCheckout {
    pub fn new(gateway: Arc<dyn NativeGateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl PaymentCollector for NativeCheckout {
    async fn collect(&self, options: CheckoutOptions) -> Result<Collected> {
        match self.gateway.open(options).await {
            Ok(confirmation) => Ok(Collected::Confirmation(confirmation)),
            Err(rejection) => {
                tracing::info!(
                    "Native checkout rejected: {}",
                    rejection.description.as_deref().unwrap_or("no description")
                );
                Err(BillingError::cancelled(rejection.description))
            }
        }
    }
}
