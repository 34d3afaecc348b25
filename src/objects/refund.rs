//! Refund request/response types.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::objects::cancel::Cancellation;
use crate::objects::payment::PaymentDetails;
use crate::timestamp::Timestamp;

/// Lifecycle status of a refund.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RefundStatus {
    Success,
    Failed,
    Processing,
    /// A value this crate does not know about, kept verbatim.
    Unknown(String),
}

impl RefundStatus {
    pub fn as_str(&self) -> &str {
        match self {
            RefundStatus::Success => "SUCCESS",
            RefundStatus::Failed => "FAILED",
            RefundStatus::Processing => "PROCESSING",
            RefundStatus::Unknown(value) => value,
        }
    }
}

impl From<String> for RefundStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "SUCCESS" => RefundStatus::Success,
            "FAILED" => RefundStatus::Failed,
            "PROCESSING" => RefundStatus::Processing,
            _ => RefundStatus::Unknown(value),
        }
    }
}

impl From<RefundStatus> for String {
    fn from(value: RefundStatus) -> Self {
        match value {
            RefundStatus::Unknown(text) => text,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for RefundStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Default for RefundStatus {
    fn default() -> Self {
        RefundStatus::Unknown(String::new())
    }
}

/// Request body for the refund operations.
///
/// An absent `amount` refunds the full payment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateRefundRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext_params: Option<RefundExtParams>,
}

/// Routing parameters for refunds processed as outbound transfers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RefundExtParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_bank_id: Option<String>,
    pub process_refund_as_oct: bool,
}

/// Refund details returned by the refund operations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Refund {
    /// Gateway-assigned refund identifier.
    pub refund_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    pub payment_id: String,
    pub amount: Decimal,
    pub currency: String,
    pub creation_date: Timestamp,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<PaymentDetails>,
    pub status: RefundStatus,
    pub canceled: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub cancels: Vec<Cancellation>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn refund_deserializes_from_wire_json() {
        let refund: Refund = serde_json::from_value(json!({
            "refundId": "rf1",
            "paymentId": "p1",
            "amount": 50.25,
            "currency": "IQD",
            "creationDate": "2026-01-22T08:30:00Z",
            "status": "PROCESSING"
        }))
        .unwrap();
        assert_eq!(refund.refund_id, "rf1");
        assert_eq!(refund.status, RefundStatus::Processing);
        assert_eq!(refund.amount, "50.25".parse::<Decimal>().unwrap());
    }

    #[test]
    fn unknown_refund_status_round_trips() {
        let refund: Refund = serde_json::from_value(json!({"status": "ON_HOLD"})).unwrap();
        assert_eq!(refund.status, RefundStatus::Unknown("ON_HOLD".into()));
        let back = serde_json::to_value(&refund).unwrap();
        assert_eq!(back["status"], "ON_HOLD");
    }

    #[test]
    fn refund_request_serializes_known_fields_only() {
        let request = CreateRefundRequest {
            request_id: Some("r2".into()),
            amount: Some("50.25".parse().unwrap()),
            ..Default::default()
        };
        let value = serde_json::to_value(&request).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object["requestId"], "r2");
        assert!(!object.contains_key("message"));
        assert!(!object.contains_key("extParams"));
    }
}
