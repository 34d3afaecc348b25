//! Payment operations client (merchant backend → gateway).

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use super::{ClientError, SIGNATURE_HEADER, TERMINAL_ID_HEADER};
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::objects::cancel::{CancelPaymentRequest, PaymentCancelResponse};
use crate::objects::payment::{CreatePaymentRequest, Payment, PaymentStatusResponse};
use crate::objects::refund::{CreateRefundRequest, Refund};

/// Typed HTTP client for the gateway's payment API.
///
/// Every request carries `Content-Type`/`Accept: application/json` and the
/// configured terminal-id header. Basic-auth and signature headers are
/// attached when their respective credentials are configured; the two are
/// independent, so both may be present on the same request.
///
/// Cloning is cheap and clones share the underlying connection pool. The
/// configuration is read-only after construction, so one client may be
/// used from any number of concurrent tasks. Dropping a call's future (or
/// hitting the configured timeout) aborts the in-flight request and
/// surfaces as [`ClientError::Http`].
#[derive(Debug, Clone)]
pub struct PaymentClient {
    http: Client,
    config: ClientConfig,
}

impl PaymentClient {
    /// Create a client from `config`, building a `reqwest::Client` with
    /// the configured timeout.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(PaymentClient { http, config })
    }

    /// Replace the underlying `reqwest::Client` (e.g. to configure a
    /// proxy or TLS settings). The custom client's own timeout settings
    /// apply; `config.timeout` is no longer consulted.
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.http = client;
        self
    }

    /// The configuration this client was built from.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// `POST /payment` – create a new payment.
    pub async fn create_payment(
        &self,
        request: &CreatePaymentRequest,
    ) -> Result<Payment, ClientError> {
        self.post_json("payment", request).await
    }

    /// `GET /payment/{payment_id}/status` – current status of a payment.
    ///
    /// Identifiers are interpolated into the path verbatim; callers must
    /// pass values that are safe as a path segment.
    pub async fn payment_status(
        &self,
        payment_id: &str,
    ) -> Result<PaymentStatusResponse, ClientError> {
        self.get_json(&format!("payment/{payment_id}/status")).await
    }

    /// `GET /payment/status/by/request/{request_id}` – current status of a
    /// payment, looked up by the caller-supplied request id.
    pub async fn payment_status_by_request(
        &self,
        request_id: &str,
    ) -> Result<PaymentStatusResponse, ClientError> {
        self.get_json(&format!("payment/status/by/request/{request_id}"))
            .await
    }

    /// `POST /payment/{payment_id}/cancel` – cancel a payment, fully or
    /// for the amount given in the request.
    pub async fn cancel_payment(
        &self,
        payment_id: &str,
        request: &CancelPaymentRequest,
    ) -> Result<PaymentCancelResponse, ClientError> {
        self.post_json(&format!("payment/{payment_id}/cancel"), request)
            .await
    }

    /// `POST /payment/cancel/by/request/{request_id}` – cancel a payment,
    /// looked up by the caller-supplied request id.
    pub async fn cancel_payment_by_request(
        &self,
        request_id: &str,
        request: &CancelPaymentRequest,
    ) -> Result<PaymentCancelResponse, ClientError> {
        self.post_json(&format!("payment/cancel/by/request/{request_id}"), request)
            .await
    }

    /// `POST /payment/{payment_id}/refund` – refund a payment.
    pub async fn refund_payment(
        &self,
        payment_id: &str,
        request: &CreateRefundRequest,
    ) -> Result<Refund, ClientError> {
        self.post_json(&format!("payment/{payment_id}/refund"), request)
            .await
    }

    /// `POST /payment/refund/by/request/{request_id}` – refund a payment,
    /// looked up by the caller-supplied request id.
    pub async fn refund_payment_by_request(
        &self,
        request_id: &str,
        request: &CreateRefundRequest,
    ) -> Result<Refund, ClientError> {
        self.post_json(&format!("payment/refund/by/request/{request_id}"), request)
            .await
    }

    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        Ok(self.config.base_url.join(path)?)
    }

    fn apply_headers(&self, request: RequestBuilder) -> RequestBuilder {
        let mut request = request
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .header(TERMINAL_ID_HEADER, &self.config.terminal_id);
        if let Some(credentials) = &self.config.credentials {
            request = request.basic_auth(&credentials.username, Some(&credentials.password));
        }
        if let Some(signature) = &self.config.signature {
            request = request.header(SIGNATURE_HEADER, signature);
        }
        request
    }

    async fn get_json<R>(&self, path: &str) -> Result<R, ClientError>
    where
        R: DeserializeOwned + Default,
    {
        let url = self.endpoint(path)?;
        debug!(method = "GET", %url, "sending gateway request");
        let response = self.apply_headers(self.http.get(url)).send().await?;
        interpret_response(response).await
    }

    async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R, ClientError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned + Default,
    {
        // Encode up front: a body that cannot be serialized is a local
        // fault and must fail before anything is sent.
        let payload = serde_json::to_vec(body)?;
        let url = self.endpoint(path)?;
        debug!(method = "POST", %url, "sending gateway request");
        let response = self
            .apply_headers(self.http.post(url))
            .body(payload)
            .send()
            .await?;
        interpret_response(response).await
    }
}

/// Map a gateway response to a typed result.
///
/// Status >= 400 routes the body through [`ApiError::from_response`]; a
/// successful empty body yields the result type's `Default` (some
/// operations answer 200 with no body at all).
async fn interpret_response<R>(response: Response) -> Result<R, ClientError>
where
    R: DeserializeOwned + Default,
{
    let status = response.status();
    let bytes = response.bytes().await?;

    if status.as_u16() >= 400 {
        debug!(status = status.as_u16(), "gateway returned an error response");
        return Err(ClientError::Api(ApiError::from_response(status, &bytes)));
    }

    if bytes.is_empty() {
        return Ok(R::default());
    }
    Ok(serde_json::from_slice(&bytes)?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_join_under_the_configured_prefix() {
        let config = ClientConfig::new("term-1")
            .with_base_url("https://sandbox.example.com/api/v1".parse().unwrap());
        let client = PaymentClient::new(config).unwrap();

        assert_eq!(
            client.endpoint("payment").unwrap().as_str(),
            "https://sandbox.example.com/api/v1/payment"
        );
        assert_eq!(
            client.endpoint("payment/p-1/status").unwrap().as_str(),
            "https://sandbox.example.com/api/v1/payment/p-1/status"
        );
    }
}
