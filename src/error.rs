//! Error types for the billing flow

use thiserror::Error;

/// Error codes for billing errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BillingErrorCode {
    /// No signed-in user; purchase requires a session
    NotSignedIn,
    /// Plan id not present in the catalog
    UnknownPlan,
    /// Order creation on the backend failed
    InitiationFailed,
    /// Checkout script could not be loaded (web variant)
    ScriptLoadFailed,
    /// Payment was cancelled or rejected by the gateway
    Cancelled,
    /// Backend could not validate the captured payment
    VerificationFailed,
    /// Network request failed
    NetworkError,
    /// Invalid request parameters
    ValidationError,
}

impl std::fmt::Display for BillingErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotSignedIn => write!(f, "NOT_SIGNED_IN"),
            Self::UnknownPlan => write!(f, "UNKNOWN_PLAN"),
            Self::InitiationFailed => write!(f, "INITIATION_FAILED"),
            Self::ScriptLoadFailed => write!(f, "SCRIPT_LOAD_FAILED"),
            Self::Cancelled => write!(f, "CANCELLED"),
            Self::VerificationFailed => write!(f, "VERIFICATION_FAILED"),
            Self::NetworkError => write!(f, "NETWORK_ERROR"),
            Self::ValidationError => write!(f, "VALIDATION_ERROR"),
        }
    }
}

/// Billing flow error
#[derive(Debug, Error)]
#[error("{message} (code: {code})")]
pub struct BillingError {
    /// Error code
    pub code: BillingErrorCode,
    /// Human-readable message
    pub message: String,
    /// HTTP status code (for API errors)
    pub status_code: Option<u16>,
}

impl BillingError {
    /// Create a new error
    pub fn new(code: BillingErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            status_code: None,
        }
    }

    /// Create a new error with status code
    pub fn with_status(
        code: BillingErrorCode,
        message: impl Into<String>,
        status_code: u16,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            status_code: Some(status_code),
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(BillingErrorCode::ValidationError, message)
    }

    /// Create a network error
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(BillingErrorCode::NetworkError, message)
    }

    /// Create a cancellation error from an optional gateway description
    pub fn cancelled(description: Option<String>) -> Self {
        Self::new(
            BillingErrorCode::Cancelled,
            description.unwrap_or_else(|| "Action cancelled".to_string()),
        )
    }

    /// Create a script-load error (web checkout, before the widget opens)
    pub fn script_load() -> Self {
        Self::new(
            BillingErrorCode::ScriptLoadFailed,
            "Checkout script failed to load. Check your internet connection",
        )
    }

    /// Whether the user may safely re-trigger the flow after this error.
    ///
    /// Initiation and collection failures happen before any charge, so a
    /// fresh attempt is always safe. Verification failures are not: the
    /// gateway may already have captured the payment, and a blind retry
    /// risks a double charge. Those are routed to manual support instead.
    pub fn is_retry_safe(&self) -> bool {
        !matches!(self.code, BillingErrorCode::VerificationFailed)
    }
}

/// Result type for billing operations
pub type Result<T> = std::result::Result<T, BillingError>;

/// Map HTTP status code to error code for backend responses
pub(crate) fn map_status_to_error_code(status: u16) -> BillingErrorCode {
    match status {
        400 | 422 => BillingErrorCode::ValidationError,
        401 | 403 => BillingErrorCode::InitiationFailed,
        _ => BillingErrorCode::NetworkError,
    }
}
