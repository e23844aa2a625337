//! Wire types shared by the backend endpoints and the payment gateway.

use serde::{Deserialize, Serialize};

use crate::plan::PlanId;

/// Payment order created by the backend for one purchase attempt.
///
/// Owned by the backend; the client holds a read-only copy for the duration
/// of the attempt and never persists it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub amount: u64,
    pub currency: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub plan_type: PlanId,
    pub amount: u64,
    /// Client-generated token making order-creation retries safe
    pub idempotency_key: String,
}

/// Response from the order-creation endpoint. `key` is the gateway key the
/// checkout must be opened with; it comes from the backend, never from
/// client-side configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrderResponse {
    pub order: Order,
    pub key: String,
}

/// Signed confirmation produced by the payment gateway.
///
/// Opaque to the client: both checkout variants normalize into this shape
/// and it is forwarded verbatim to verification. Never interpreted locally;
/// gateway success only proves collection, not settlement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentConfirmation {
    pub razorpay_payment_id: String,
    pub razorpay_order_id: String,
    pub razorpay_signature: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct VerifyRequest {
    #[serde(flatten)]
    pub confirmation: PaymentConfirmation,
    #[serde(rename = "planType")]
    pub plan_type: PlanId,
    #[serde(rename = "idempotencyKey")]
    pub idempotency_key: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VerifyResponse {
    pub success: bool,
}

/// Options handed to the gateway checkout (web widget or native SDK).
#[derive(Debug, Clone, Serialize)]
pub struct CheckoutOptions {
    pub description: String,
    pub image: String,
    pub currency: String,
    pub key: String,
    pub amount: u64,
    pub name: String,
    pub order_id: String,
    pub prefill: CheckoutPrefill,
    pub theme: CheckoutTheme,
}

/// Identity prefill for the checkout form.
#[derive(Debug, Clone, Serialize)]
pub struct CheckoutPrefill {
    pub email: String,
    /// Phone number; empty string when the user has none on file
    pub contact: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckoutTheme {
    pub color: String,
}

/// Structured rejection from the native gateway SDK.
#[derive(Debug, Clone, Deserialize)]
pub struct GatewayRejection {
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_order_request_uses_backend_field_names() {
        let req = CreateOrderRequest {
            plan_type: PlanId::Yearly,
            amount: 299,
            idempotency_key: "attempt-1".into(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["planType"], "yearly");
        assert_eq!(json["amount"], 299);
        assert_eq!(json["idempotencyKey"], "attempt-1");
    }

    #[test]
    fn verify_request_forwards_confirmation_verbatim() {
        let req = VerifyRequest {
            confirmation: PaymentConfirmation {
                razorpay_payment_id: "pay_1".into(),
                razorpay_order_id: "order_1".into(),
                razorpay_signature: "sig_1".into(),
            },
            plan_type: PlanId::Monthly,
            idempotency_key: "attempt-2".into(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["razorpay_payment_id"], "pay_1");
        assert_eq!(json["razorpay_order_id"], "order_1");
        assert_eq!(json["razorpay_signature"], "sig_1");
        assert_eq!(json["planType"], "monthly");
    }

    #[test]
    fn checkout_options_match_gateway_contract() {
        let options = CheckoutOptions {
            description: "Upgrade to Annual Pro".into(),
            image: "https://careerloop.onrender.com/logo.png".into(),
            currency: "INR".into(),
            key: "rzp_test_key".into(),
            amount: 299,
            name: "CareerLoop AI".into(),
            order_id: "order_1".into(),
            prefill: CheckoutPrefill {
                email: "a@b.c".into(),
                contact: "".into(),
                name: "Alice".into(),
            },
            theme: CheckoutTheme {
                color: "#6366F1".into(),
            },
        };
        let json = serde_json::to_value(&options).unwrap();
        assert_eq!(json["order_id"], "order_1");
        assert_eq!(json["prefill"]["contact"], "");
        assert_eq!(json["theme"]["color"], "#6366F1");
    }
}
