//! UI rendering modules.

mod control_panel;
mod dialogs;
mod histogram_window;
mod panes;
pub mod theme;
