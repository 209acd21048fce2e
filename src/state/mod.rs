//! Editor state management
//!
//! This module handles all application state, including:
//! - The loaded image record (data.rs)
//! - Trigger identities and their legality per state (trigger.rs)
//! - The prompts the presentation shell provides (prompts.rs)
//! - The editor state machine and its dispatch table (editor.rs)

pub mod data;
pub mod editor;
pub mod prompts;
pub mod trigger;

pub use editor::Editor;
pub use prompts::Prompts;
pub use trigger::{Trigger, UiState};
