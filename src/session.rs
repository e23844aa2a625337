//! The application-wide session identity store.
//!
//! Holds the single authoritative in-memory copy of the signed-in user.
//! Reads happen everywhere; the only purchase-driven mutation is
//! [`SessionStore::set_premium_entitlement`], called strictly after a
//! verified success response from the backend.

use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};

use crate::models::CheckoutPrefill;
use crate::plan::PlanId;

/// The subset of the user identity the billing flow touches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    #[serde(default)]
    pub is_premium: bool,
    #[serde(default)]
    pub plan_type: Option<PlanId>,
}

impl UserProfile {
    /// Identity prefill for the checkout form.
    pub fn checkout_prefill(&self) -> CheckoutPrefill {
        CheckoutPrefill {
            email: self.email.clone(),
            contact: self.phone.clone().unwrap_or_default(),
            name: self.name.clone(),
        }
    }
}

/// Shared session store. Cloning shares the underlying identity record.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    user: Arc<RwLock<Option<UserProfile>>>,
}

impl SessionStore {
    /// Create an empty store (no signed-in user).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with a signed-in user.
    pub fn with_user(user: UserProfile) -> Self {
        Self {
            user: Arc::new(RwLock::new(Some(user))),
        }
    }

    /// Replace the signed-in user, e.g. after a full identity refresh.
    pub fn set_user(&self, user: UserProfile) {
        if let Ok(mut guard) = self.user.write() {
            *guard = Some(user);
        }
    }

    /// Clear the session on sign-out.
    pub fn clear(&self) {
        if let Ok(mut guard) = self.user.write() {
            *guard = None;
        }
    }

    /// Snapshot of the current user, if any.
    pub fn user(&self) -> Option<UserProfile> {
        self.user.read().ok()?.clone()
    }

    /// Whether the current user holds premium entitlement.
    pub fn is_premium(&self) -> bool {
        self.user().map(|u| u.is_premium).unwrap_or(false)
    }

    /// Grant premium entitlement for the given plan.
    ///
    /// This is the only operation that sets `is_premium`; callers must have a
    /// verified `success: true` from the backend in hand. Returns false when
    /// no user is signed in; the server already recorded the entitlement and
    /// the next identity refresh will reconcile it.
    pub fn set_premium_entitlement(&self, plan: PlanId) -> bool {
        match self.user.write() {
            Ok(mut guard) => match guard.as_mut() {
                Some(user) => {
                    user.is_premium = true;
                    user.plan_type = Some(plan);
                    true
                }
                None => false,
            },
            Err(_) => false,
        }
    }
}
