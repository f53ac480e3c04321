//! Infrastructure layer for external integrations.
//!
//! This layer implements the ports defined by the domain layer.
//!
//! # Modules
//!
//! - [`http`] - JSON-over-HTTP client for the shortening service
//! - [`clipboard`] - System and in-memory clipboards

pub mod clipboard;
pub mod http;
