//! Payment collection, dispatched over the runtime platform.
//!
//! Both variants normalize the gateway result into one
//! [`PaymentConfirmation`](crate::models::PaymentConfirmation) shape so that
//! verification and entitlement stay platform-agnostic.

mod native;
mod web;

pub use native::*;
pub use web::*;

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::oneshot;

use crate::config::BillingConfig;
use crate::error::Result;
use crate::models::{CheckoutOptions, PaymentConfirmation};

/// Outcome of opening a checkout.
#[derive(Debug)]
pub enum Collected {
    /// The native SDK settled inline with a signed confirmation.
    Confirmation(PaymentConfirmation),
    /// The web widget is open; the confirmation arrives on this channel if
    /// the user completes payment. The widget wires no cancellation callback,
    /// so an abandoned widget that never fires and never drops the sender
    /// leaves the attempt pending indefinitely. A dropped sender is reported
    /// as cancellation.
    Pending(oneshot::Receiver<PaymentConfirmation>),
}

/// A platform checkout: collects payment for an order and resolves with a
/// confirmation or rejects with a cancellation/error.
#[async_trait]
pub trait PaymentCollector: Send + Sync {
    async fn collect(&self, options: CheckoutOptions) -> Result<Collected>;
}

/// The platform gateway the host app runs on, chosen once at startup.
pub enum PlatformGateway {
    /// Browser-hosted checkout widget behind a script host
    Web(Arc<dyn CheckoutScriptHost>),
    /// Native payment SDK bridge
    Native(Arc<dyn NativeGateway>),
}

/// Build the collector for the given platform gateway.
pub fn collector_for(
    gateway: PlatformGateway,
    config: &BillingConfig,
) -> Arc<dyn PaymentCollector> {
    match gateway {
        PlatformGateway::Web(host) => Arc::new(WebCheckout::new(host, config)),
        PlatformGateway::Native(gateway) => Arc::new(NativeCheckout::new(gateway)),
    }
}
