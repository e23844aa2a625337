use std::env;

/// Fixed delay between the success notice and navigation to the main surface,
/// so the notice can be seen.
pub const SUCCESS_REDIRECT_DELAY_MS: u64 = 1500;

#[derive(Debug, Clone)]
pub struct BillingConfig {
    /// Base URL of the CareerLoop backend
    pub base_url: String,
    /// CDN URL the web checkout script is loaded from
    pub checkout_script_url: String,
    /// Brand name shown in the checkout
    pub brand_name: String,
    /// Brand logo shown in the checkout
    pub brand_logo_url: String,
    /// Checkout theme accent color
    pub theme_color: String,
    /// Settlement currency for all catalog plans
    pub currency: String,
    /// Optional HTTP request timeout in seconds. None applies no timeout;
    /// a hung backend call then leaves the attempt loading indefinitely.
    pub timeout_secs: Option<u64>,
}

impl Default for BillingConfig {
    fn default() -> Self {
        Self {
            base_url: "https://careerloop.onrender.com".to_string(),
            checkout_script_url: "https://checkout.razorpay.com/v1/checkout.js".to_string(),
            brand_name: "CareerLoop AI".to_string(),
            brand_logo_url: "https://careerloop.onrender.com/logo.png".to_string(),
            theme_color: "#6366F1".to_string(),
            currency: "INR".to_string(),
            timeout_secs: None,
        }
    }
}

impl BillingConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let defaults = Self::default();

        let timeout_secs = env::var("CAREERLOOP_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok());

        Self {
            base_url: env::var("CAREERLOOP_API_URL").unwrap_or(defaults.base_url),
            checkout_script_url: env::var("CAREERLOOP_CHECKOUT_SCRIPT_URL")
                .unwrap_or(defaults.checkout_script_url),
            brand_name: env::var("CAREERLOOP_BRAND_NAME").unwrap_or(defaults.brand_name),
            brand_logo_url: env::var("CAREERLOOP_BRAND_LOGO_URL")
                .unwrap_or(defaults.brand_logo_url),
            theme_color: env::var("CAREERLOOP_THEME_COLOR").unwrap_or(defaults.theme_color),
            currency: env::var("CAREERLOOP_CURRENCY").unwrap_or(defaults.currency),
            timeout_secs,
        }
    }
}
