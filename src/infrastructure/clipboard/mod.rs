//! Clipboard adapters.
//!
//! - [`CommandClipboard`] - System clipboard via platform utilities
//! - [`MemoryClipboard`] - In-memory buffer for headless use and testing

mod command_clipboard;
mod memory_clipboard;

pub use command_clipboard::{ClipboardProgram, CommandClipboard};
pub use memory_clipboard::MemoryClipboard;
