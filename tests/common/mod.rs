//! Shared in-memory mocks for purchase-flow tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::oneshot;

use careerloop_billing::{
    BillingBackend, BillingError, BillingErrorCode, CheckoutOptions, CheckoutScriptHost,
    CreateOrderResponse, FlowSurface, GatewayRejection, NativeGateway, Notice, Order,
    PaymentConfirmation, PlanId, Result, SessionStore, UserProfile, VerifyRequest,
    VerifyResponse,
};

pub fn test_user() -> UserProfile {
    UserProfile {
        name: "Alice".into(),
        email: "alice@example.com".into(),
        phone: Some("9999999999".into()),
        is_premium: false,
        plan_type: None,
    }
}

pub fn signed_in_session() -> SessionStore {
    SessionStore::with_user(test_user())
}

pub fn confirmation_for(order_id: &str) -> PaymentConfirmation {
    PaymentConfirmation {
        razorpay_payment_id: "pay_test_1".into(),
        razorpay_order_id: order_id.into(),
        razorpay_signature: "sig_test_1".into(),
    }
}

/// How the mock backend answers verification calls.
#[derive(Debug, Clone, Copy)]
pub enum VerifyBehavior {
    Success,
    Rejected,
    Errors,
}

/// Scripted backend that records every call.
pub struct MockBackend {
    pub fail_order: bool,
    pub verify: VerifyBehavior,
    pub orders: Mutex<Vec<(PlanId, u64, String)>>,
    pub verifies: Mutex<Vec<VerifyRequest>>,
}

impl MockBackend {
    pub fn new(verify: VerifyBehavior) -> Self {
        Self {
            fail_order: false,
            verify,
            orders: Mutex::new(Vec::new()),
            verifies: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_order() -> Self {
        Self {
            fail_order: true,
            ..Self::new(VerifyBehavior::Success)
        }
    }

    pub fn order_count(&self) -> usize {
        self.orders.lock().unwrap().len()
    }

    pub fn verify_count(&self) -> usize {
        self.verifies.lock().unwrap().len()
    }
}

#[async_trait]
impl BillingBackend for MockBackend {
    async fn create_order(
        &self,
        plan: PlanId,
        amount: u64,
        idempotency_key: &str,
    ) -> Result<CreateOrderResponse> {
        self.orders
            .lock()
            .unwrap()
            .push((plan, amount, idempotency_key.to_string()));

        if self.fail_order {
            return Err(BillingError::with_status(
                BillingErrorCode::InitiationFailed,
                "order rejected",
                500,
            ));
        }

        Ok(CreateOrderResponse {
            order: Order {
                id: "order_test_1".into(),
                amount,
                currency: "INR".into(),
            },
            key: "rzp_test_key".into(),
        })
    }

    async fn verify_payment(&self, request: &VerifyRequest) -> Result<VerifyResponse> {
        self.verifies.lock().unwrap().push(request.clone());

        match self.verify {
            VerifyBehavior::Success => Ok(VerifyResponse { success: true }),
            VerifyBehavior::Rejected => Ok(VerifyResponse { success: false }),
            VerifyBehavior::Errors => Err(BillingError::network("verify endpoint unreachable")),
        }
    }
}

/// Native gateway that resolves or rejects according to its script.
pub enum ScriptedGateway {
    Resolves,
    Rejects(Option<String>),
}

#[async_trait]
impl NativeGateway for ScriptedGateway {
    async fn open(
        &self,
        options: CheckoutOptions,
    ) -> std::result::Result<PaymentConfirmation, GatewayRejection> {
        match self {
            ScriptedGateway::Resolves => Ok(confirmation_for(&options.order_id)),
            ScriptedGateway::Rejects(description) => Err(GatewayRejection {
                description: description.clone(),
            }),
        }
    }
}

/// Web script host that captures the widget handler so tests can play the
/// gateway callback (or drop it).
pub struct CapturingScriptHost {
    pub script_ok: bool,
    pub opened: Mutex<Vec<CheckoutOptions>>,
    pub handler: Mutex<Option<oneshot::Sender<PaymentConfirmation>>>,
}

impl CapturingScriptHost {
    pub fn new(script_ok: bool) -> Arc<Self> {
        Arc::new(Self {
            script_ok,
            opened: Mutex::new(Vec::new()),
            handler: Mutex::new(None),
        })
    }

    pub fn take_handler(&self) -> Option<oneshot::Sender<PaymentConfirmation>> {
        self.handler.lock().unwrap().take()
    }

    pub fn widget_open(&self) -> bool {
        self.handler.lock().unwrap().is_some()
    }
}

#[async_trait]
impl CheckoutScriptHost for CapturingScriptHost {
    async fn load_script(&self, _url: &str) -> bool {
        self.script_ok
    }

    fn open_checkout(
        &self,
        options: CheckoutOptions,
        handler: oneshot::Sender<PaymentConfirmation>,
    ) {
        self.opened.lock().unwrap().push(options);
        *self.handler.lock().unwrap() = Some(handler);
    }
}

/// Records notices and navigations raised by the flow.
#[derive(Default)]
pub struct RecordingSurface {
    pub notices: Mutex<Vec<Notice>>,
    pub navigations: AtomicUsize,
}

impl RecordingSurface {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }

    pub fn navigated(&self) -> usize {
        self.navigations.load(Ordering::SeqCst)
    }
}

impl FlowSurface for RecordingSurface {
    fn notify(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }

    fn navigate_home(&self) {
        self.navigations.fetch_add(1, Ordering::SeqCst);
    }
}
