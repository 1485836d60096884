//! HTTP/REST layer for stanbot.
//!
//! Flat JSON request/response bodies matching the original deployment's
//! wire contract, with CORS support and per-request tracing.

pub mod error;
pub mod handlers;
pub mod router;
