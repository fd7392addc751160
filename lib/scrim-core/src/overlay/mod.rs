mod content;
mod manager;
mod style;

pub use content::{
    OverlayContent, LABEL_CLASS, LINE_CLASS, MASK_CLASS, SPINNER_CLASS, TRACK_CLASS,
};
pub use manager::{OverlayCommand, OverlayManager};
pub use style::{OverlayStyle, STYLE_MARKER};

use crate::host::HostDocument;
use std::sync::{Arc, OnceLock};

static OVERLAY_MANAGER: OnceLock<Arc<OverlayManager>> = OnceLock::new();

/// Creates the process-wide overlay manager for the given host document.
/// Later calls return the existing manager and ignore the argument.
pub fn init(document: Arc<dyn HostDocument>) -> Arc<OverlayManager> {
    OVERLAY_MANAGER
        .get_or_init(|| Arc::new(OverlayManager::new(document)))
        .clone()
}

pub fn manager() -> Arc<OverlayManager> {
    OVERLAY_MANAGER
        .get()
        .expect("Overlay manager not initialized. Call overlay::init() first.")
        .clone()
}
