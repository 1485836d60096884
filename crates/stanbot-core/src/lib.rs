//! Conversation pipeline and session store trait definitions for stanbot.
//!
//! This crate defines the "port" (the `SessionRepository` trait) that the
//! infrastructure layer implements. It depends only on `stanbot-types` --
//! never on `stanbot-infra` or any storage crate.

pub mod chat;
