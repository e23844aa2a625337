//! The purchase flow: order initiation, payment collection, verification,
//! entitlement update, in that order.
//!
//! Stages run sequentially; a failure at any stage halts the attempt and
//! surfaces a notice without partial entitlement changes. Entitlement is
//! granted in exactly one place, strictly after the backend confirms
//! verification. Gateway success alone proves collection, not settlement.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use uuid::Uuid;

use crate::api::BillingBackend;
use crate::collector::{Collected, PaymentCollector};
use crate::config::{BillingConfig, SUCCESS_REDIRECT_DELAY_MS};
use crate::error::BillingErrorCode;
use crate::models::{CheckoutOptions, CheckoutTheme, PaymentConfirmation, VerifyRequest};
use crate::plan::{find_plan, PlanId};
use crate::session::SessionStore;

/// Visual weight of a notice, for the host's toast styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Info,
    Error,
}

/// Transient user-facing notification raised by the flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Purchase attempted with no signed-in user
    LoginRequired,
    /// Order creation failed; safe to re-trigger the flow
    InitiationFailed,
    /// Web checkout script could not be loaded
    ScriptLoadFailed,
    /// Gateway cancelled or rejected before any charge
    Cancelled { description: String },
    /// Backend reported the captured payment as invalid
    VerificationFailed,
    /// Verification errored after the payment was collected; retrying could
    /// double-charge, so the user is routed to support
    ContactSupport,
    /// Entitlement granted
    Success,
}

impl Notice {
    pub fn kind(&self) -> NoticeKind {
        match self {
            Notice::Success => NoticeKind::Success,
            Notice::LoginRequired => NoticeKind::Info,
            _ => NoticeKind::Error,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Notice::LoginRequired => "Please login to upgrade.".to_string(),
            Notice::InitiationFailed => {
                "Failed to initiate payment. Please try again.".to_string()
            }
            Notice::ScriptLoadFailed => {
                "Checkout failed to load. Check your internet connection.".to_string()
            }
            Notice::Cancelled { description } => {
                format!("Payment cancelled: {}", description)
            }
            Notice::VerificationFailed => "Payment verification failed on server.".to_string(),
            Notice::ContactSupport => {
                "Payment successful but verification failed. Contact support.".to_string()
            }
            Notice::Success => "Welcome to Premium!".to_string(),
        }
    }
}

/// The UI boundary: toast presentation and navigation live on the other side.
pub trait FlowSurface: Send + Sync {
    fn notify(&self, notice: Notice);
    fn navigate_home(&self);
}

/// How a purchase attempt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseOutcome {
    /// Verified, entitlement granted, navigation triggered
    Completed,
    /// No signed-in user; nothing was attempted
    NotSignedIn,
    /// Order creation failed before any payment attempt
    InitiationFailed,
    /// Collection was cancelled or failed before any charge
    Cancelled,
    /// Backend answered `success: false` for the captured payment
    VerificationRejected,
    /// Verification call itself failed after the payment was collected
    VerificationErrored,
}

/// Coordinates one purchase attempt end to end.
///
/// One attempt may be in flight per flow instance. The loading flag is the
/// informal mutex the host reads to disable the purchase trigger; the flow
/// itself does not block programmatic re-entry.
pub struct PurchaseFlow {
    backend: Arc<dyn BillingBackend>,
    collector: Arc<dyn PaymentCollector>,
    session: SessionStore,
    surface: Arc<dyn FlowSurface>,
    config: BillingConfig,
    loading: AtomicBool,
}

impl PurchaseFlow {
    pub fn new(
        backend: Arc<dyn BillingBackend>,
        collector: Arc<dyn PaymentCollector>,
        session: SessionStore,
        surface: Arc<dyn FlowSurface>,
        config: BillingConfig,
    ) -> Self {
        Self {
            backend,
            collector,
            session,
            surface,
            config,
            loading: AtomicBool::new(false),
        }
    }

    /// Whether a stage of the current attempt is pending. Hosts disable the
    /// purchase trigger while this is true.
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::Acquire)
    }

    fn set_loading(&self, value: bool) {
        self.loading.store(value, Ordering::Release);
    }

    /// Run one purchase attempt for the selected plan.
    ///
    /// Every failure is caught at its stage boundary and surfaced as a
    /// notice; the returned outcome mirrors the notice for programmatic
    /// callers. Nothing propagates as an error.
    pub async fn purchase(&self, plan_id: PlanId) -> PurchaseOutcome {
        let Some(user) = self.session.user() else {
            self.surface.notify(Notice::LoginRequired);
            return PurchaseOutcome::NotSignedIn;
        };

        self.set_loading(true);

        let created = {
            let amount = match find_plan(plan_id).map(|p| p.amount()) {
                Some(Ok(amount)) => amount,
                _ => {
                    tracing::error!("Plan {} has no usable catalog price", plan_id);
                    self.surface.notify(Notice::InitiationFailed);
                    self.set_loading(false);
                    return PurchaseOutcome::InitiationFailed;
                }
            };

            let attempt_id = Uuid::new_v4().to_string();
            match self.backend.create_order(plan_id, amount, &attempt_id).await {
                Ok(response) => response,
                Err(e) => {
                    tracing::warn!("Order initiation failed: {}", e);
                    self.surface.notify(Notice::InitiationFailed);
                    self.set_loading(false);
                    return PurchaseOutcome::InitiationFailed;
                }
            }
        };

        let plan_title = find_plan(plan_id).map(|p| p.title).unwrap_or_default();
        let options = CheckoutOptions {
            description: format!("Upgrade to {}", plan_title),
            image: self.config.brand_logo_url.clone(),
            currency: self.config.currency.clone(),
            key: created.key.clone(),
            amount: created.order.amount,
            name: self.config.brand_name.clone(),
            order_id: created.order.id.clone(),
            prefill: user.checkout_prefill(),
            theme: CheckoutTheme {
                color: self.config.theme_color.clone(),
            },
        };

        match self.collector.collect(options).await {
            Ok(Collected::Confirmation(confirmation)) => {
                // Native SDK settled inline; loading stays on through
                // verification.
                self.verify(plan_id, confirmation).await
            }
            Ok(Collected::Pending(receiver)) => {
                // The web widget is open and completion is callback-driven,
                // so the spinner comes off now. An abandoned widget that
                // never fires keeps this attempt pending.
                self.set_loading(false);
                match receiver.await {
                    Ok(confirmation) => self.verify(plan_id, confirmation).await,
                    Err(_) => {
                        tracing::info!("Checkout widget torn down without a confirmation");
                        self.surface.notify(Notice::Cancelled {
                            description: "Checkout closed".to_string(),
                        });
                        PurchaseOutcome::Cancelled
                    }
                }
            }
            Err(e) => {
                let notice = if e.code == BillingErrorCode::ScriptLoadFailed {
                    Notice::ScriptLoadFailed
                } else {
                    Notice::Cancelled {
                        description: e.message.clone(),
                    }
                };
                self.surface.notify(notice);
                self.set_loading(false);
                PurchaseOutcome::Cancelled
            }
        }
    }

    /// Forward the confirmation to the backend and mirror the settled
    /// entitlement locally.
    async fn verify(
        &self,
        plan_id: PlanId,
        confirmation: PaymentConfirmation,
    ) -> PurchaseOutcome {
        self.set_loading(true);

        let request = VerifyRequest {
            confirmation,
            plan_type: plan_id,
            idempotency_key: Uuid::new_v4().to_string(),
        };

        let outcome = match self.backend.verify_payment(&request).await {
            Ok(response) if response.success => {
                self.surface.notify(Notice::Success);
                self.session.set_premium_entitlement(plan_id);
                PurchaseOutcome::Completed
            }
            Ok(_) => {
                tracing::warn!(
                    "Backend rejected payment for order {}",
                    request.confirmation.razorpay_order_id
                );
                self.surface.notify(Notice::VerificationFailed);
                PurchaseOutcome::VerificationRejected
            }
            Err(e) => {
                // The gateway already captured the payment; a blind retry
                // risks a double charge, so route the user to support.
                tracing::error!("Verification errored after collection: {}", e);
                self.surface.notify(Notice::ContactSupport);
                PurchaseOutcome::VerificationErrored
            }
        };

        self.set_loading(false);

        if outcome == PurchaseOutcome::Completed {
            // Let the success notice be seen before leaving the screen.
            tokio::time::sleep(Duration::from_millis(SUCCESS_REDIRECT_DELAY_MS)).await;
            self.surface.navigate_home();
        }

        outcome
    }
}
