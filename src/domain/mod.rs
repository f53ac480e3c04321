//! Domain layer: entities, validation rules and ports.
//!
//! Nothing in here performs I/O. The ports in [`ports`] describe the remote
//! shortening service and the clipboard; concrete adapters live in
//! [`crate::infrastructure`].
//!
//! # Modules
//!
//! - [`entities`] - Submission state and shortened address
//! - [`validation`] - Input normalization and validation
//! - [`ports`] - Gateway and clipboard traits

pub mod entities;
pub mod ports;
pub mod validation;
