//! Interfaces to the outside world, implemented by the infrastructure layer.

mod clipboard;
mod shortener_gateway;

pub use clipboard::{Clipboard, ClipboardError};
pub use shortener_gateway::{GatewayError, ShortenerGateway};

#[cfg(test)]
pub use clipboard::MockClipboard;
#[cfg(test)]
pub use shortener_gateway::MockShortenerGateway;
