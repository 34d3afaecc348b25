//! Gateway error taxonomy.
//!
//! A rejected request answers with `{"error":{"code":N,"message":"SYM"}}`.
//! The numeric code and symbolic message are a fixed pairing maintained by
//! the gateway; this crate records both sides but does not cross-validate
//! the pair. Proxy- and transport-level failures may answer with no
//! structured body at all, so [`ApiError`] classifies by envelope code when
//! one is present and falls back to the HTTP status otherwise.

use std::fmt;

use http::StatusCode;
use serde::{Deserialize, Serialize};

/// Numeric error code returned by the gateway.
///
/// Code 25 is unassigned. Values outside the known set round-trip through
/// [`ErrorCode::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u16", into = "u16")]
pub enum ErrorCode {
    OrderAlreadyExists,
    OrderNotFound,
    OrderAlreadyCancelled,
    NoCompatibleServicesFound,
    CanNotProcessRequest,
    RequisitesNotFound,
    RequisitesAlreadyExists,
    CanNotCreateNewRequisites,
    TerminalNotFoundException,
    PaymentAlreadyExists,
    MaxNumberOfPaymentsForOrderExceeded,
    PaymentNotFound,
    UnknownStrategy,
    ProcessingImpossible,
    CanNotCancelPayment,
    CanNotConfirmPayment,
    CanNotFinishAuthentication,
    RefundsNotAllowed,
    PaymentParamsNotFound,
    RefundError,
    ValidationError,
    IncorrectPaymentState,
    InternalSystemError,
    ExternalSystemError,
    InvalidPaymentFormDomain,
    BadCredentials,
    LimitViolation,
    TransferNotFound,
    IncorrectTransferState,
    TokenNotFound,
    TokenProcessNotAllowed,
    CanNotCancelTransfer,
    TransferAlreadyExists,
    InvalidTokenType,
    /// A code this crate does not know about.
    Unknown(u16),
}

impl ErrorCode {
    /// The wire value.
    pub fn as_u16(self) -> u16 {
        self.into()
    }
}

impl From<u16> for ErrorCode {
    fn from(value: u16) -> Self {
        match value {
            1 => ErrorCode::OrderAlreadyExists,
            2 => ErrorCode::OrderNotFound,
            3 => ErrorCode::OrderAlreadyCancelled,
            4 => ErrorCode::NoCompatibleServicesFound,
            5 => ErrorCode::CanNotProcessRequest,
            6 => ErrorCode::RequisitesNotFound,
            7 => ErrorCode::RequisitesAlreadyExists,
            8 => ErrorCode::CanNotCreateNewRequisites,
            9 => ErrorCode::TerminalNotFoundException,
            10 => ErrorCode::PaymentAlreadyExists,
            11 => ErrorCode::MaxNumberOfPaymentsForOrderExceeded,
            12 => ErrorCode::PaymentNotFound,
            13 => ErrorCode::UnknownStrategy,
            14 => ErrorCode::ProcessingImpossible,
            15 => ErrorCode::CanNotCancelPayment,
            16 => ErrorCode::CanNotConfirmPayment,
            17 => ErrorCode::CanNotFinishAuthentication,
            18 => ErrorCode::RefundsNotAllowed,
            19 => ErrorCode::PaymentParamsNotFound,
            20 => ErrorCode::RefundError,
            21 => ErrorCode::ValidationError,
            22 => ErrorCode::IncorrectPaymentState,
            23 => ErrorCode::InternalSystemError,
            24 => ErrorCode::ExternalSystemError,
            26 => ErrorCode::InvalidPaymentFormDomain,
            27 => ErrorCode::BadCredentials,
            28 => ErrorCode::LimitViolation,
            29 => ErrorCode::TransferNotFound,
            30 => ErrorCode::IncorrectTransferState,
            31 => ErrorCode::TokenNotFound,
            32 => ErrorCode::TokenProcessNotAllowed,
            33 => ErrorCode::CanNotCancelTransfer,
            34 => ErrorCode::TransferAlreadyExists,
            35 => ErrorCode::InvalidTokenType,
            other => ErrorCode::Unknown(other),
        }
    }
}

impl From<ErrorCode> for u16 {
    fn from(value: ErrorCode) -> Self {
        match value {
            ErrorCode::OrderAlreadyExists => 1,
            ErrorCode::OrderNotFound => 2,
            ErrorCode::OrderAlreadyCancelled => 3,
            ErrorCode::NoCompatibleServicesFound => 4,
            ErrorCode::CanNotProcessRequest => 5,
            ErrorCode::RequisitesNotFound => 6,
            ErrorCode::RequisitesAlreadyExists => 7,
            ErrorCode::CanNotCreateNewRequisites => 8,
            ErrorCode::TerminalNotFoundException => 9,
            ErrorCode::PaymentAlreadyExists => 10,
            ErrorCode::MaxNumberOfPaymentsForOrderExceeded => 11,
            ErrorCode::PaymentNotFound => 12,
            ErrorCode::UnknownStrategy => 13,
            ErrorCode::ProcessingImpossible => 14,
            ErrorCode::CanNotCancelPayment => 15,
            ErrorCode::CanNotConfirmPayment => 16,
            ErrorCode::CanNotFinishAuthentication => 17,
            ErrorCode::RefundsNotAllowed => 18,
            ErrorCode::PaymentParamsNotFound => 19,
            ErrorCode::RefundError => 20,
            ErrorCode::ValidationError => 21,
            ErrorCode::IncorrectPaymentState => 22,
            ErrorCode::InternalSystemError => 23,
            ErrorCode::ExternalSystemError => 24,
            ErrorCode::InvalidPaymentFormDomain => 26,
            ErrorCode::BadCredentials => 27,
            ErrorCode::LimitViolation => 28,
            ErrorCode::TransferNotFound => 29,
            ErrorCode::IncorrectTransferState => 30,
            ErrorCode::TokenNotFound => 31,
            ErrorCode::TokenProcessNotAllowed => 32,
            ErrorCode::CanNotCancelTransfer => 33,
            ErrorCode::TransferAlreadyExists => 34,
            ErrorCode::InvalidTokenType => 35,
            ErrorCode::Unknown(other) => other,
        }
    }
}

/// Symbolic error message returned by the gateway.
///
/// Values outside the known set round-trip through
/// [`ErrorMessage::Unknown`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ErrorMessage {
    OrderAlreadyExists,
    OrderNotFound,
    OrderAlreadyCancelled,
    NoCompatibleServicesFound,
    CanNotProcessRequest,
    RequisitesNotFound,
    RequisitesAlreadyExists,
    CanNotCreateNewRequisites,
    TerminalNotFoundException,
    PaymentAlreadyExists,
    MaxNumberOfPaymentsForOrderExceeded,
    PaymentNotFound,
    UnknownStrategy,
    ProcessingImpossible,
    CanNotCancelPayment,
    CanNotConfirmPayment,
    CanNotFinishAuthentication,
    RefundsNotAllowed,
    PaymentParamsNotFound,
    RefundError,
    ValidationError,
    IncorrectPaymentState,
    InternalSystemError,
    ExternalSystemError,
    InvalidPaymentFormDomain,
    BadCredentials,
    LimitViolation,
    TransferNotFound,
    IncorrectTransferState,
    TokenNotFound,
    TokenProcessNotAllowed,
    CanNotCancelTransfer,
    TransferAlreadyExists,
    InvalidTokenType,
    /// A message this crate does not know about, kept verbatim.
    Unknown(String),
}

impl ErrorMessage {
    /// The wire value.
    pub fn as_str(&self) -> &str {
        match self {
            ErrorMessage::OrderAlreadyExists => "ORDER_ALREADY_EXISTS",
            ErrorMessage::OrderNotFound => "ORDER_NOT_FOUND",
            ErrorMessage::OrderAlreadyCancelled => "ORDER_ALREADY_CANCELLED",
            ErrorMessage::NoCompatibleServicesFound => "NO_COMPATIBLE_SERVICES_FOUND",
            ErrorMessage::CanNotProcessRequest => "CAN_NOT_PROCESS_REQUEST",
            ErrorMessage::RequisitesNotFound => "REQUISITES_NOT_FOUND",
            ErrorMessage::RequisitesAlreadyExists => "REQUISITES_ALREADY_EXISTS",
            ErrorMessage::CanNotCreateNewRequisites => "CAN_NOT_CREATE_NEW_REQUISITES",
            ErrorMessage::TerminalNotFoundException => "TERMINAL_NOT_FOUND_EXCEPTION",
            ErrorMessage::PaymentAlreadyExists => "PAYMENT_ALREADY_EXISTS",
            ErrorMessage::MaxNumberOfPaymentsForOrderExceeded => {
                "MAX_NUMBER_OF_PAYMENTS_FOR_ORDER_EXCEEDED"
            }
            ErrorMessage::PaymentNotFound => "PAYMENT_NOT_FOUND",
            ErrorMessage::UnknownStrategy => "UNKNOWN_STRATEGY",
            ErrorMessage::ProcessingImpossible => "PROCESSING_IMPOSSIBLE",
            ErrorMessage::CanNotCancelPayment => "CAN_NOT_CANCEL_PAYMENT",
            ErrorMessage::CanNotConfirmPayment => "CAN_NOT_CONFIRM_PAYMENT",
            ErrorMessage::CanNotFinishAuthentication => "CAN_NOT_FINISH_AUTHENTICATION",
            ErrorMessage::RefundsNotAllowed => "REFUNDS_NOT_ALLOWED",
            ErrorMessage::PaymentParamsNotFound => "PAYMENT_PARAMS_NOT_FOUND",
            ErrorMessage::RefundError => "REFUND_ERROR",
            ErrorMessage::ValidationError => "VALIDATION_ERROR",
            ErrorMessage::IncorrectPaymentState => "INCORRECT_PAYMENT_STATE",
            ErrorMessage::InternalSystemError => "INTERNAL_SYSTEM_ERROR",
            ErrorMessage::ExternalSystemError => "EXTERNAL_SYSTEM_ERROR",
            ErrorMessage::InvalidPaymentFormDomain => "INVALID_PAYMENT_FORM_DOMAIN",
            ErrorMessage::BadCredentials => "BAD_CREDENTIALS",
            ErrorMessage::LimitViolation => "LIMIT_VIOLATION",
            ErrorMessage::TransferNotFound => "TRANSFER_NOT_FOUND",
            ErrorMessage::IncorrectTransferState => "INCORRECT_TRANSFER_STATE",
            ErrorMessage::TokenNotFound => "TOKEN_NOT_FOUND",
            ErrorMessage::TokenProcessNotAllowed => "TOKEN_PROCESS_NOT_ALLOWED",
            ErrorMessage::CanNotCancelTransfer => "CAN_NOT_CANCEL_TRANSFER",
            ErrorMessage::TransferAlreadyExists => "TRANSFER_ALREADY_EXISTS",
            ErrorMessage::InvalidTokenType => "INVALID_TOKEN_TYPE",
            ErrorMessage::Unknown(value) => value,
        }
    }
}

impl From<String> for ErrorMessage {
    fn from(value: String) -> Self {
        match value.as_str() {
            "ORDER_ALREADY_EXISTS" => ErrorMessage::OrderAlreadyExists,
            "ORDER_NOT_FOUND" => ErrorMessage::OrderNotFound,
            "ORDER_ALREADY_CANCELLED" => ErrorMessage::OrderAlreadyCancelled,
            "NO_COMPATIBLE_SERVICES_FOUND" => ErrorMessage::NoCompatibleServicesFound,
            "CAN_NOT_PROCESS_REQUEST" => ErrorMessage::CanNotProcessRequest,
            "REQUISITES_NOT_FOUND" => ErrorMessage::RequisitesNotFound,
            "REQUISITES_ALREADY_EXISTS" => ErrorMessage::RequisitesAlreadyExists,
            "CAN_NOT_CREATE_NEW_REQUISITES" => ErrorMessage::CanNotCreateNewRequisites,
            "TERMINAL_NOT_FOUND_EXCEPTION" => ErrorMessage::TerminalNotFoundException,
            "PAYMENT_ALREADY_EXISTS" => ErrorMessage::PaymentAlreadyExists,
            "MAX_NUMBER_OF_PAYMENTS_FOR_ORDER_EXCEEDED" => {
                ErrorMessage::MaxNumberOfPaymentsForOrderExceeded
            }
            "PAYMENT_NOT_FOUND" => ErrorMessage::PaymentNotFound,
            "UNKNOWN_STRATEGY" => ErrorMessage::UnknownStrategy,
            "PROCESSING_IMPOSSIBLE" => ErrorMessage::ProcessingImpossible,
            "CAN_NOT_CANCEL_PAYMENT" => ErrorMessage::CanNotCancelPayment,
            "CAN_NOT_CONFIRM_PAYMENT" => ErrorMessage::CanNotConfirmPayment,
            "CAN_NOT_FINISH_AUTHENTICATION" => ErrorMessage::CanNotFinishAuthentication,
            "REFUNDS_NOT_ALLOWED" => ErrorMessage::RefundsNotAllowed,
            "PAYMENT_PARAMS_NOT_FOUND" => ErrorMessage::PaymentParamsNotFound,
            "REFUND_ERROR" => ErrorMessage::RefundError,
            "VALIDATION_ERROR" => ErrorMessage::ValidationError,
            "INCORRECT_PAYMENT_STATE" => ErrorMessage::IncorrectPaymentState,
            "INTERNAL_SYSTEM_ERROR" => ErrorMessage::InternalSystemError,
            "EXTERNAL_SYSTEM_ERROR" => ErrorMessage::ExternalSystemError,
            "INVALID_PAYMENT_FORM_DOMAIN" => ErrorMessage::InvalidPaymentFormDomain,
            "BAD_CREDENTIALS" => ErrorMessage::BadCredentials,
            "LIMIT_VIOLATION" => ErrorMessage::LimitViolation,
            "TRANSFER_NOT_FOUND" => ErrorMessage::TransferNotFound,
            "INCORRECT_TRANSFER_STATE" => ErrorMessage::IncorrectTransferState,
            "TOKEN_NOT_FOUND" => ErrorMessage::TokenNotFound,
            "TOKEN_PROCESS_NOT_ALLOWED" => ErrorMessage::TokenProcessNotAllowed,
            "CAN_NOT_CANCEL_TRANSFER" => ErrorMessage::CanNotCancelTransfer,
            "TRANSFER_ALREADY_EXISTS" => ErrorMessage::TransferAlreadyExists,
            "INVALID_TOKEN_TYPE" => ErrorMessage::InvalidTokenType,
            _ => ErrorMessage::Unknown(value),
        }
    }
}

impl From<ErrorMessage> for String {
    fn from(value: ErrorMessage) -> Self {
        match value {
            ErrorMessage::Unknown(text) => text,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for ErrorMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The `error` object inside a gateway error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub code: ErrorCode,
    pub message: ErrorMessage,
}

/// Wire shape of a gateway error response: `{"error":{...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorEnvelope,
}

/// A request the gateway answered with status >= 400.
///
/// Carries the parsed [`ErrorEnvelope`] when the body held one, otherwise
/// the raw body text verbatim. Classification prefers the envelope code
/// and falls back to the HTTP status, since the gateway does not always
/// return a structured body (proxy- and transport-level failures).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// HTTP status the gateway responded with.
    pub status: StatusCode,
    /// Parsed envelope, when the body carried one.
    pub envelope: Option<ErrorEnvelope>,
    /// Raw body text, kept only when no envelope could be parsed.
    pub body: Option<String>,
}

impl ApiError {
    /// Classify an error response body.
    ///
    /// A body that is not exactly the `{"error":{"code":..,"message":..}}`
    /// shape is kept as raw text, so that predicates classify it by
    /// status rather than by a half-parsed envelope.
    pub fn from_response(status: StatusCode, body: &[u8]) -> Self {
        match serde_json::from_slice::<ErrorBody>(body) {
            Ok(parsed) => ApiError {
                status,
                envelope: Some(parsed.error),
                body: None,
            },
            Err(_) => ApiError {
                status,
                envelope: None,
                body: Some(String::from_utf8_lossy(body).into_owned()),
            },
        }
    }

    /// Whether the gateway reported a missing payment, order, transfer,
    /// or token, or (without an envelope) answered 404.
    pub fn is_not_found(&self) -> bool {
        match &self.envelope {
            Some(envelope) => matches!(
                envelope.code,
                ErrorCode::PaymentNotFound
                    | ErrorCode::OrderNotFound
                    | ErrorCode::TransferNotFound
                    | ErrorCode::TokenNotFound
            ),
            None => self.status == StatusCode::NOT_FOUND,
        }
    }

    /// Whether the gateway rejected the request as invalid, or (without
    /// an envelope) answered 400.
    pub fn is_validation_error(&self) -> bool {
        match &self.envelope {
            Some(envelope) => envelope.code == ErrorCode::ValidationError,
            None => self.status == StatusCode::BAD_REQUEST,
        }
    }

    /// Whether the gateway rejected the configured credentials, or
    /// (without an envelope) answered 401.
    pub fn is_authentication_error(&self) -> bool {
        match &self.envelope {
            Some(envelope) => envelope.code == ErrorCode::BadCredentials,
            None => self.status == StatusCode::UNAUTHORIZED,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.envelope {
            Some(envelope) => write!(
                f,
                "api error (status {}): code={}, message={}",
                self.status.as_u16(),
                envelope.code.as_u16(),
                envelope.message
            ),
            None => write!(
                f,
                "api error (status {}): {}",
                self.status.as_u16(),
                self.body.as_deref().unwrap_or_default()
            ),
        }
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip_including_the_unassigned_gap() {
        assert_eq!(ErrorCode::from(21u16), ErrorCode::ValidationError);
        assert_eq!(ErrorCode::ValidationError.as_u16(), 21);
        assert_eq!(ErrorCode::from(25u16), ErrorCode::Unknown(25));
        assert_eq!(ErrorCode::Unknown(25).as_u16(), 25);
        assert_eq!(ErrorCode::from(35u16), ErrorCode::InvalidTokenType);
    }

    #[test]
    fn messages_round_trip_unknown_values_verbatim() {
        let known = ErrorMessage::from("BAD_CREDENTIALS".to_owned());
        assert_eq!(known, ErrorMessage::BadCredentials);
        assert_eq!(String::from(known), "BAD_CREDENTIALS");

        let unknown = ErrorMessage::from("BRAND_NEW_FAILURE".to_owned());
        assert_eq!(unknown, ErrorMessage::Unknown("BRAND_NEW_FAILURE".into()));
        assert_eq!(String::from(unknown), "BRAND_NEW_FAILURE");
    }

    #[test]
    fn envelope_parses_from_the_wire_shape() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"error":{"code":21,"message":"VALIDATION_ERROR"}}"#).unwrap();
        assert_eq!(body.error.code, ErrorCode::ValidationError);
        assert_eq!(body.error.message, ErrorMessage::ValidationError);
    }

    #[test]
    fn envelope_classification_wins_over_status() {
        let error = ApiError::from_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            br#"{"error":{"code":12,"message":"PAYMENT_NOT_FOUND"}}"#,
        );
        assert!(error.is_not_found());
        assert!(!error.is_validation_error());
        assert!(error.body.is_none());
    }

    #[test]
    fn unparseable_body_falls_back_to_status_classification() {
        let error = ApiError::from_response(StatusCode::NOT_FOUND, b"upstream says no");
        assert!(error.is_not_found());
        assert_eq!(error.body.as_deref(), Some("upstream says no"));
        assert!(error.envelope.is_none());

        let bad_request = ApiError::from_response(StatusCode::BAD_REQUEST, b"");
        assert!(bad_request.is_validation_error());

        let unauthorized = ApiError::from_response(StatusCode::UNAUTHORIZED, b"denied");
        assert!(unauthorized.is_authentication_error());
    }

    #[test]
    fn json_without_a_full_envelope_is_raw_text() {
        // Proxy-style JSON bodies must not count as parsed envelopes.
        let error = ApiError::from_response(StatusCode::NOT_FOUND, br#"{"message":"timeout"}"#);
        assert!(error.envelope.is_none());
        assert!(error.is_not_found());
    }

    #[test]
    fn display_names_the_case_that_occurred() {
        let enveloped = ApiError::from_response(
            StatusCode::BAD_REQUEST,
            br#"{"error":{"code":21,"message":"VALIDATION_ERROR"}}"#,
        );
        assert_eq!(
            enveloped.to_string(),
            "api error (status 400): code=21, message=VALIDATION_ERROR"
        );

        let raw = ApiError::from_response(StatusCode::BAD_GATEWAY, b"bad gateway");
        assert_eq!(raw.to_string(), "api error (status 502): bad gateway");
    }
}
