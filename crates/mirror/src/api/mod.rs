//! Client side of the Magda content API
//!
//! [`client::ApiClient`] owns the authenticated HTTP client; each endpoint
//! under [`v0`] is a request type implementing [`client::ApiRequest`].

pub mod client;
pub mod v0;
