//! Cancellation request/response types.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::objects::payment::PaymentStatus;
use crate::timestamp::Timestamp;

/// Request body for the cancel operations.
///
/// An absent `amount` cancels the full payment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CancelPaymentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
}

/// Response of the cancel operations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaymentCancelResponse {
    pub request_id: String,
    pub payment_id: String,
    pub status: PaymentStatus,
    pub canceled: bool,
    pub amount: Decimal,
    pub currency: String,
    pub creation_date: Timestamp,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub cancels: Vec<Cancellation>,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub additional_info: HashMap<String, String>,
}

/// One recorded cancellation of a payment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Cancellation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    pub created: Timestamp,
    pub successfully: bool,
    pub amount: Decimal,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn cancel_response_carries_the_cancellation_list() {
        let response: PaymentCancelResponse = serde_json::from_value(json!({
            "requestId": "c1",
            "paymentId": "p1",
            "status": "SUCCESS",
            "canceled": true,
            "amount": 100.5,
            "currency": "IQD",
            "creationDate": "2026-01-20T11:57:31",
            "cancels": [
                {"requestId": "c1", "created": "2026-01-21T09:00:00Z", "successfully": true, "amount": 100.5}
            ]
        }))
        .unwrap();

        assert!(response.canceled);
        assert_eq!(response.cancels.len(), 1);
        assert!(response.cancels[0].successfully);
    }

    #[test]
    fn empty_cancel_request_serializes_to_an_empty_object() {
        let value = serde_json::to_value(CancelPaymentRequest::default()).unwrap();
        assert_eq!(value, json!({}));
    }
}
