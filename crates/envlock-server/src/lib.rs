//! HTTP adapter around the envlock lock registry.
//!
//! Exposes the conversational command interface (`/commands`), a chat
//! event bridge with direct-mention filtering (`/events`), a structured
//! JSON lock API, and the identity directory used to resolve chat user ids.

pub mod config;
pub mod directory;
pub mod error;
pub mod handlers;
pub mod mention;
pub mod router;
pub mod schema;
pub mod state;
