//! Infrastructure layer for stanbot.
//!
//! Contains the implementation of the `SessionRepository` trait defined in
//! `stanbot-core`: a process-lifetime in-memory store. Sessions do not
//! survive a restart; durability is explicitly out of scope.

pub mod store;
