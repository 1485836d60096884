//! Conversation pipeline for stanbot.
//!
//! This module holds the two classifiers (sentiment, intent), the
//! `SessionRepository` trait that the infrastructure layer implements, and
//! the `ConversationService` that orchestrates one chat turn.

pub mod intent;
pub mod repository;
pub mod sentiment;
pub mod service;
