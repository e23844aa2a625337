//! Browser-hosted checkout: lazy script load, then a callback-driven widget.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::oneshot;

use crate::collector::{Collected, PaymentCollector};
use crate::config::BillingConfig;
use crate::error::{BillingError, Result};
use crate::models::{CheckoutOptions, PaymentConfirmation};

/// Seam to the browser page hosting the checkout.
///
/// The host injects the third-party script and constructs the widget; this
/// crate owns the sequencing around it.
#[async_trait]
pub trait CheckoutScriptHost: Send + Sync {
    /// Inject the checkout script from the given URL.
    /// Resolves true when the script loaded, false on load failure.
    async fn load_script(&self, url: &str) -> bool;

    /// Construct the checkout widget with the given options and open it.
    ///
    /// Completion is callback-driven: the host sends the confirmation on
    /// `handler` from the widget's success callback. There is no cancellation
    /// callback; the host may drop `handler` when the widget is torn down.
    fn open_checkout(
        &self,
        options: CheckoutOptions,
        handler: oneshot::Sender<PaymentConfirmation>,
    );
}

/// Browser checkout variant.
pub struct WebCheckout {
    host: Arc<dyn CheckoutScriptHost>,
    script_url: String,
    script_loaded: AtomicBool,
}

impl WebCheckout {
    pub fn new(host: Arc<dyn CheckoutScriptHost>, config: &BillingConfig) -> Self {
        Self {
            host,
            script_url: config.checkout_script_url.clone(),
            script_loaded: AtomicBool::new(false),
        }
    }

    /// Whether the checkout script has been loaded into the page.
    pub fn script_loaded(&self) -> bool {
        self.script_loaded.load(Ordering::Acquire)
    }
}

#[async_trait]
impl PaymentCollector for WebCheckout {
    async fn collect(&self, options: CheckoutOptions) -> Result<Collected> {
        // Idempotent: an already-loaded script is not injected again.
        if !self.script_loaded.load(Ordering::Acquire) {
            if !self.host.load_script(&self.script_url).await {
                tracing::warn!("Checkout script failed to load from {}", self.script_url);
                return Err(BillingError::script_load());
            }
            self.script_loaded.store(true, Ordering::Release);
        }

        let (handler, confirmation) = oneshot::channel();
        self.host.open_checkout(options, handler);
        tracing::info!("Checkout widget opened; awaiting gateway callback");

        Ok(Collected::Pending(confirmation))
    }
}
