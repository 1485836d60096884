//! REST API layer for the STAN chatbot backend.
//!
//! Library target so integration tests can drive the router in-process;
//! the `stanbot` binary wires CLI parsing, logging, and serving around it.

pub mod cli;
pub mod http;
pub mod state;
