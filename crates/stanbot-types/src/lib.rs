//! Shared domain types for the STAN chatbot backend.
//!
//! This crate contains the core domain types used across the stanbot
//! workspace: Sentiment, Exchange, and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod chat;
pub mod error;
