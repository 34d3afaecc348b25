//! Wire-schema types for the gateway API.
//!
//! Plain serde records mirroring the JSON schema; field names are
//! camelCase on the wire. Enumerated string domains keep an `Unknown`
//! fallback variant so values the gateway adds later round-trip unchanged
//! instead of failing deserialization.

pub mod cancel;
pub mod customer;
pub mod items;
pub mod payment;
pub mod refund;
