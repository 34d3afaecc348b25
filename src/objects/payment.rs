//! Payment request/response types, including the 3-D Secure and
//! tokenized-payment material.

use std::collections::HashMap;
use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::objects::customer::CustomerInfo;
use crate::timestamp::Timestamp;

/// Lifecycle status of a payment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PaymentStatus {
    Created,
    FormShowed,
    ThreeDsMethodCallRequired,
    AuthenticationRequired,
    AuthenticationStarted,
    AuthenticationFailed,
    Authenticated,
    Initialized,
    Started,
    Success,
    Failed,
    Error,
    Expired,
    /// A value this crate does not know about, kept verbatim.
    Unknown(String),
}

impl PaymentStatus {
    pub fn as_str(&self) -> &str {
        match self {
            PaymentStatus::Created => "CREATED",
            PaymentStatus::FormShowed => "FORM_SHOWED",
            PaymentStatus::ThreeDsMethodCallRequired => "THREE_DS_METHOD_CALL_REQUIRED",
            PaymentStatus::AuthenticationRequired => "AUTHENTICATION_REQUIRED",
            PaymentStatus::AuthenticationStarted => "AUTHENTICATION_STARTED",
            PaymentStatus::AuthenticationFailed => "AUTHENTICATION_FAILED",
            PaymentStatus::Authenticated => "AUTHENTICATED",
            PaymentStatus::Initialized => "INITIALIZED",
            PaymentStatus::Started => "STARTED",
            PaymentStatus::Success => "SUCCESS",
            PaymentStatus::Failed => "FAILED",
            PaymentStatus::Error => "ERROR",
            PaymentStatus::Expired => "EXPIRED",
            PaymentStatus::Unknown(value) => value,
        }
    }
}

impl From<String> for PaymentStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "CREATED" => PaymentStatus::Created,
            "FORM_SHOWED" => PaymentStatus::FormShowed,
            "THREE_DS_METHOD_CALL_REQUIRED" => PaymentStatus::ThreeDsMethodCallRequired,
            "AUTHENTICATION_REQUIRED" => PaymentStatus::AuthenticationRequired,
            "AUTHENTICATION_STARTED" => PaymentStatus::AuthenticationStarted,
            "AUTHENTICATION_FAILED" => PaymentStatus::AuthenticationFailed,
            "AUTHENTICATED" => PaymentStatus::Authenticated,
            "INITIALIZED" => PaymentStatus::Initialized,
            "STARTED" => PaymentStatus::Started,
            "SUCCESS" => PaymentStatus::Success,
            "FAILED" => PaymentStatus::Failed,
            "ERROR" => PaymentStatus::Error,
            "EXPIRED" => PaymentStatus::Expired,
            _ => PaymentStatus::Unknown(value),
        }
    }
}

impl From<PaymentStatus> for String {
    fn from(value: PaymentStatus) -> Self {
        match value {
            PaymentStatus::Unknown(text) => text,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Default for PaymentStatus {
    fn default() -> Self {
        PaymentStatus::Unknown(String::new())
    }
}

/// Card scheme that processed a payment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PaymentSystem {
    Visa,
    MasterCard,
    /// A value this crate does not know about, kept verbatim.
    Unknown(String),
}

impl PaymentSystem {
    pub fn as_str(&self) -> &str {
        match self {
            PaymentSystem::Visa => "VISA",
            PaymentSystem::MasterCard => "MASTER_CARD",
            PaymentSystem::Unknown(value) => value,
        }
    }
}

impl From<String> for PaymentSystem {
    fn from(value: String) -> Self {
        match value.as_str() {
            "VISA" => PaymentSystem::Visa,
            "MASTER_CARD" => PaymentSystem::MasterCard,
            _ => PaymentSystem::Unknown(value),
        }
    }
}

impl From<PaymentSystem> for String {
    fn from(value: PaymentSystem) -> Self {
        match value {
            PaymentSystem::Unknown(text) => text,
            known => known.as_str().to_owned(),
        }
    }
}

/// Kind of a tokenized payment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PaymentType {
    PaymentToken,
    /// A value this crate does not know about, kept verbatim.
    Unknown(String),
}

impl PaymentType {
    pub fn as_str(&self) -> &str {
        match self {
            PaymentType::PaymentToken => "PAYMENT_TOKEN",
            PaymentType::Unknown(value) => value,
        }
    }
}

impl From<String> for PaymentType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "PAYMENT_TOKEN" => PaymentType::PaymentToken,
            _ => PaymentType::Unknown(value),
        }
    }
}

impl From<PaymentType> for String {
    fn from(value: PaymentType) -> Self {
        match value {
            PaymentType::Unknown(text) => text,
            known => known.as_str().to_owned(),
        }
    }
}

impl Default for PaymentType {
    fn default() -> Self {
        PaymentType::Unknown(String::new())
    }
}

/// Scope of a payment token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PaymentTokenType {
    Auth,
    NonRecur,
    Unauth,
    /// A value this crate does not know about, kept verbatim.
    Unknown(String),
}

impl PaymentTokenType {
    pub fn as_str(&self) -> &str {
        match self {
            PaymentTokenType::Auth => "AUTH",
            PaymentTokenType::NonRecur => "NON_RECUR",
            PaymentTokenType::Unauth => "UNAUTH",
            PaymentTokenType::Unknown(value) => value,
        }
    }
}

impl From<String> for PaymentTokenType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "AUTH" => PaymentTokenType::Auth,
            "NON_RECUR" => PaymentTokenType::NonRecur,
            "UNAUTH" => PaymentTokenType::Unauth,
            _ => PaymentTokenType::Unknown(value),
        }
    }
}

impl From<PaymentTokenType> for String {
    fn from(value: PaymentTokenType) -> Self {
        match value {
            PaymentTokenType::Unknown(text) => text,
            known => known.as_str().to_owned(),
        }
    }
}

/// Request body for creating a payment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreatePaymentRequest {
    /// Caller-supplied idempotency/correlation identifier.
    pub request_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// URL the payer is redirected to after completing the form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finish_payment_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_info: Option<CustomerInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub browser_info: Option<BrowserInfo>,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub additional_info: HashMap<String, String>,
}

/// Payment details returned by the create operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Payment {
    pub request_id: String,
    /// Gateway-assigned payment identifier.
    pub payment_id: String,
    pub status: PaymentStatus,
    pub canceled: bool,
    pub amount: Decimal,
    pub currency: String,
    pub creation_date: Timestamp,
    /// Hosted payment form the payer should be sent to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form_url: Option<String>,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub additional_info: HashMap<String, String>,
}

/// Response of the status operations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaymentStatusResponse {
    pub request_id: String,
    pub payment_id: String,
    pub status: PaymentStatus,
    pub canceled: bool,
    pub amount: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirmed_amount: Option<Decimal>,
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_type: Option<String>,
    pub creation_date: Timestamp,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<PaymentDetails>,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub additional_info: HashMap<String, String>,
}

/// Card and authorization metadata attached to a processed payment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaymentDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_code: Option<String>,
    /// Retrieval reference number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rrn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_date: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub masked_pan: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_system: Option<PaymentSystem>,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub custom_details: HashMap<String, serde_json::Value>,
}

/// Browser details collected for 3-D Secure authentication.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BrowserInfo {
    pub browser_accept_header: String,
    pub browser_ip: String,
    pub browser_java_enabled: bool,
    pub browser_language: String,
    pub browser_color_depth: String,
    pub browser_screen_width: String,
    pub browser_screen_height: String,
    #[serde(rename = "browserTZ")]
    pub browser_tz: String,
    pub browser_user_agent: String,
}

/// Challenge data for 3-D Secure authentication.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuthenticateInfo {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cardholder_info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<AuthenticateParams>,
}

/// ACS challenge parameters (3DS1 `paReq`/`md`, 3DS2 `creq`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuthenticateParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pa_req: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub md: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub term_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creq: Option<String>,
}

/// Payment source for token-based payments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaymentData {
    pub payment_type: PaymentType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_token: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use serde_json::json;
    use time::macros::datetime;

    use super::*;

    #[test]
    fn payment_deserializes_from_wire_json() {
        let payment: Payment = serde_json::from_value(json!({
            "requestId": "r1",
            "paymentId": "p1",
            "status": "CREATED",
            "amount": 100.5,
            "currency": "IQD",
            "creationDate": "2026-01-20T11:57:31",
            "formUrl": "https://pay.example.com/form"
        }))
        .unwrap();

        assert_eq!(payment.payment_id, "p1");
        assert_eq!(payment.status, PaymentStatus::Created);
        assert_eq!(payment.amount, "100.5".parse::<Decimal>().unwrap());
        assert_eq!(
            payment.creation_date.datetime(),
            Some(datetime!(2026-01-20 11:57:31 UTC))
        );
        assert!(!payment.canceled);
    }

    #[test]
    fn unknown_status_round_trips_verbatim() {
        let payment: Payment =
            serde_json::from_value(json!({"status": "SETTLED_OFFLINE"})).unwrap();
        assert_eq!(payment.status, PaymentStatus::Unknown("SETTLED_OFFLINE".into()));

        let back = serde_json::to_value(&payment).unwrap();
        assert_eq!(back["status"], "SETTLED_OFFLINE");
    }

    #[test]
    fn request_omits_unset_fields() {
        let request = CreatePaymentRequest {
            request_id: "r1".into(),
            amount: Some("250".parse().unwrap()),
            currency: Some("IQD".into()),
            ..Default::default()
        };
        let value = serde_json::to_value(&request).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object["requestId"], "r1");
        assert!(!object.contains_key("locale"));
        assert!(!object.contains_key("customerInfo"));
        assert!(!object.contains_key("additionalInfo"));
    }

    #[test]
    fn browser_tz_keeps_its_irregular_wire_casing() {
        let info = BrowserInfo {
            browser_tz: "180".into(),
            ..Default::default()
        };
        let value = serde_json::to_value(&info).unwrap();
        assert_eq!(value["browserTZ"], "180");
    }

    #[test]
    fn details_round_trip() {
        let details: PaymentDetails = serde_json::from_value(json!({
            "resultCode": "00",
            "rrn": "123456789012",
            "maskedPan": "428671**0001",
            "paymentSystem": "VISA",
            "authDate": "2026-01-20T12:00:00Z",
            "customDetails": {"bank": "QI"}
        }))
        .unwrap();
        assert_eq!(details.payment_system, Some(PaymentSystem::Visa));
        assert!(details.auth_date.unwrap().is_set());

        let back = serde_json::to_value(&details).unwrap();
        assert_eq!(back["paymentSystem"], "VISA");
        assert_eq!(back["customDetails"]["bank"], "QI");
    }
}
