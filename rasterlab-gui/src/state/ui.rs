//! UI state for dialogs, sliders, and status display.

use std::path::PathBuf;

use rasterlab_core::operation::DEFAULT_THRESHOLD;

/// Dialog visibility, slider values, and transient messages.
pub struct UiState {
    /// Whether the binarization slider window is visible.
    pub show_threshold_dialog: bool,
    /// Current binarization cutoff.
    pub threshold: u8,

    /// Whether the brightness slider window is visible.
    pub show_brightness_dialog: bool,
    /// Current brightness offset.
    pub brightness: i32,

    /// Whether the convolution sub-menu is visible.
    pub show_convolution_menu: bool,
    /// Whether the morphology sub-menu is visible.
    pub show_morphology_menu: bool,

    /// Whether the live histogram panel is visible.
    pub show_histogram_window: bool,
    /// Log scale for the live histogram Y-axis.
    pub log_plot: bool,

    /// Pending warning message, shown as a modal until dismissed.
    pub warning: Option<String>,
    /// Path of the last successful save, shown as a confirmation modal.
    pub saved_to: Option<PathBuf>,

    /// Status bar text.
    pub status_text: String,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            show_threshold_dialog: false,
            threshold: DEFAULT_THRESHOLD,
            show_brightness_dialog: false,
            brightness: 0,
            show_convolution_menu: false,
            show_morphology_menu: false,
            show_histogram_window: false,
            log_plot: false,
            warning: None,
            saved_to: None,
            status_text: "Ready".to_string(),
        }
    }
}
