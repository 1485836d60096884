//! Session storage backends.

pub mod memory;

pub use memory::InMemorySessionStore;
