//! Presentation shell
//!
//! - Filter and file buttons (sidebar.rs)
//! - The image panel and status line (viewer.rs)
//! - Native file choosers and error dialogs (dialogs.rs)

pub mod dialogs;
pub mod sidebar;
pub mod viewer;

use crate::state::Trigger;

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// User clicked one of the sidebar buttons
    Trigger(Trigger),
}
