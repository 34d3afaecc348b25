//! Typed client for the QiCard payment gateway HTTP API.
//!
//! The gateway speaks JSON over HTTPS. Every request carries the merchant
//! terminal id; authentication is basic auth, a pre-shared signature token,
//! or both at once. Responses use a timestamp format that sometimes omits
//! the timezone offset, which [`timestamp::Timestamp`] normalizes away.
//!
//! The HTTP client lives behind the `client` cargo feature (enabled by
//! default) so downstream crates that only need the wire types do not pull
//! in `reqwest`.
//!
//! ```no_run
//! use qicard_sdk::client::PaymentClient;
//! use qicard_sdk::config::ClientConfig;
//! use qicard_sdk::objects::payment::CreatePaymentRequest;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ClientConfig::new("my-terminal").with_basic_auth("merchant", "secret");
//! let client = PaymentClient::new(config)?;
//!
//! let payment = client
//!     .create_payment(&CreatePaymentRequest {
//!         request_id: "order-1234".into(),
//!         amount: Some("100.5".parse()?),
//!         currency: Some("IQD".into()),
//!         ..Default::default()
//!     })
//!     .await?;
//! println!("pay at: {:?}", payment.form_url);
//! # Ok(())
//! # }
//! ```

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![forbid(unsafe_code)]

#[cfg(feature = "client")]
pub mod client;
pub mod config;
pub mod error;
pub mod objects;
pub mod timestamp;

#[cfg(feature = "client")]
pub use client::{ClientError, PaymentClient};
pub use config::{ClientConfig, Credentials};
pub use error::{ApiError, ErrorCode, ErrorEnvelope, ErrorMessage};
pub use timestamp::Timestamp;
