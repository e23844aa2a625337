//! # CareerLoop Billing
//!
//! Headless purchase-and-verification flow for the CareerLoop premium
//! subscription. The crate owns the sequencing (plan selection, backend
//! order creation, platform-dispatched payment collection, server-side
//! verification, and the local entitlement update) while rendering,
//! navigation, and the gateway itself stay on the host side behind small
//! traits.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use careerloop_billing::{
//!     collector_for, BillingConfig, HttpBillingApi, PlanId, PlatformGateway,
//!     PurchaseFlow, SessionStore, UserProfile,
//! };
//!
//! # async fn example(
//! #     gateway: Arc<dyn careerloop_billing::NativeGateway>,
//! #     surface: Arc<dyn careerloop_billing::FlowSurface>,
//! # ) {
//! let config = BillingConfig::from_env();
//! let backend = Arc::new(HttpBillingApi::new(&config));
//! let collector = collector_for(PlatformGateway::Native(gateway), &config);
//! let session = SessionStore::with_user(UserProfile {
//!     name: "Alice".into(),
//!     email: "alice@example.com".into(),
//!     phone: None,
//!     is_premium: false,
//!     plan_type: None,
//! });
//!
//! let flow = PurchaseFlow::new(backend, collector, session, surface, config);
//! let outcome = flow.purchase(PlanId::Yearly).await;
//! println!("outcome: {:?}", outcome);
//! # }
//! ```

mod api;
mod collector;
mod config;
mod error;
mod flow;
mod models;
mod plan;
mod session;

pub use api::*;
pub use collector::*;
pub use config::*;
pub use error::*;
pub use flow::*;
pub use models::*;
pub use plan::*;
pub use session::*;
