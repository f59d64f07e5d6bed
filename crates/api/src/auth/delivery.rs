//! Passcode delivery channels.
//!
//! [`OtpDelivery`] is the capability the session module sends codes
//! through. [`MockDelivery`] logs the code and lets the API echo it back;
//! [`SmsGatewayDelivery`] POSTs it to an external SMS gateway.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

/// HTTP request timeout for a single gateway call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Which delivery channel to use, with its settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OtpProvider {
    /// Log the code and return it in the API response.
    Mock {
        /// Issue this code instead of a random one (development only).
        fixed_code: Option<String>,
    },
    /// Send the code through an HTTP SMS gateway.
    Sms { gateway_url: String, api_key: String },
}

impl OtpProvider {
    /// Load the delivery channel from environment variables.
    ///
    /// | Env Var               | Required                 | Default |
    /// |-----------------------|--------------------------|---------|
    /// | `OTP_PROVIDER`        | no                       | `mock`  |
    /// | `OTP_FIXED_CODE`      | no (mock only)           | --      |
    /// | `SMS_GATEWAY_URL`     | when `OTP_PROVIDER=sms`  | --      |
    /// | `SMS_GATEWAY_API_KEY` | when `OTP_PROVIDER=sms`  | --      |
    ///
    /// # Panics
    ///
    /// Panics on an unknown provider, a malformed fixed code, or missing
    /// gateway settings.
    pub fn from_env() -> Self {
        let provider = std::env::var("OTP_PROVIDER").unwrap_or_else(|_| "mock".into());
        match provider.as_str() {
            "mock" => {
                let fixed_code = std::env::var("OTP_FIXED_CODE")
                    .ok()
                    .filter(|c| !c.is_empty());
                if let Some(code) = &fixed_code {
                    assert!(
                        thekedar_core::otp::is_well_formed_otp(code),
                        "OTP_FIXED_CODE must be exactly 6 ASCII digits"
                    );
                }
                OtpProvider::Mock { fixed_code }
            }
            "sms" => OtpProvider::Sms {
                gateway_url: std::env::var("SMS_GATEWAY_URL")
                    .expect("SMS_GATEWAY_URL must be set when OTP_PROVIDER=sms"),
                api_key: std::env::var("SMS_GATEWAY_API_KEY")
                    .expect("SMS_GATEWAY_API_KEY must be set when OTP_PROVIDER=sms"),
            },
            other => panic!("OTP_PROVIDER must be 'mock' or 'sms', got '{other}'"),
        }
    }

    /// Code to issue in place of a random one, if configured.
    pub fn fixed_code(&self) -> Option<&str> {
        match self {
            OtpProvider::Mock { fixed_code } => fixed_code.as_deref(),
            OtpProvider::Sms { .. } => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for passcode delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    /// The underlying HTTP request failed (network, DNS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The gateway returned a non-2xx status code.
    #[error("SMS gateway returned HTTP {status}: {body}")]
    Gateway { status: u16, body: String },
}

// ---------------------------------------------------------------------------
// Trait
// ---------------------------------------------------------------------------

/// Sends a freshly issued passcode to a phone.
#[async_trait]
pub trait OtpDelivery: Send + Sync {
    async fn deliver(&self, phone: &str, code: &str) -> Result<(), DeliveryError>;

    /// Whether the API may return the code to the caller.
    fn echoes_code(&self) -> bool {
        false
    }

    /// Short name for logs.
    fn name(&self) -> &'static str;
}

/// Build the delivery channel for a provider.
pub fn from_provider(provider: &OtpProvider) -> Arc<dyn OtpDelivery> {
    match provider {
        OtpProvider::Mock { .. } => Arc::new(MockDelivery),
        OtpProvider::Sms {
            gateway_url,
            api_key,
        } => Arc::new(SmsGatewayDelivery::new(gateway_url.clone(), api_key.clone())),
    }
}

// ---------------------------------------------------------------------------
// Mock
// ---------------------------------------------------------------------------

/// Logs the code at INFO and lets the API echo it.
#[derive(Debug, Default)]
pub struct MockDelivery;

#[async_trait]
impl OtpDelivery for MockDelivery {
    async fn deliver(&self, phone: &str, code: &str) -> Result<(), DeliveryError> {
        tracing::info!(phone, code, "Mock OTP delivery");
        Ok(())
    }

    fn echoes_code(&self) -> bool {
        true
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

// ---------------------------------------------------------------------------
// SMS gateway
// ---------------------------------------------------------------------------

/// Delivers codes through an HTTP SMS gateway.
///
/// Sends `POST {gateway_url}` with a bearer API key and a JSON body
/// `{ "to": phone, "message": text }`.
pub struct SmsGatewayDelivery {
    client: reqwest::Client,
    gateway_url: String,
    api_key: String,
}

impl SmsGatewayDelivery {
    pub fn new(gateway_url: String, api_key: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self {
            client,
            gateway_url,
            api_key,
        }
    }
}

/// Text of the SMS carrying a passcode.
fn sms_text(code: &str) -> String {
    format!("Your Thekedar login code is {code}. Do not share it with anyone.")
}

#[async_trait]
impl OtpDelivery for SmsGatewayDelivery {
    async fn deliver(&self, phone: &str, code: &str) -> Result<(), DeliveryError> {
        let payload = serde_json::json!({
            "to": phone,
            "message": sms_text(code),
        });

        let response = self
            .client
            .post(&self.gateway_url)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(DeliveryError::Gateway { status, body });
        }

        tracing::debug!(phone, "OTP sent via SMS gateway");
        Ok(())
    }

    fn name(&self) -> &'static str {
        "sms"
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
