//! Render-mode gates: conditional wrappers keyed off the store's mode flag.
//!
//! Together they let one content tree serve two presentations: wrap the
//! interactive chrome in [`HideOnExport`] and any print-only header or
//! footer in [`ShowOnExport`], and flipping the flag produces a clean
//! capture without duplicating the tree.

use crate::render::view::View;
use crate::store::{ProjectState, RenderMode};

/// Renders its child unless the store is in export mode.
///
/// Used for buttons, form controls and navigation that must not appear in
/// the PDF capture.
pub struct HideOnExport<V: View>(pub V);

impl<V: View> View for HideOnExport<V> {
    fn render(&self, state: &ProjectState, out: &mut String) {
        if state.mode == RenderMode::Export {
            return;
        }
        self.0.render(state, out);
    }
}

/// Renders its child only while the store is in export mode.
pub struct ShowOnExport<V: View>(pub V);

impl<V: View> View for ShowOnExport<V> {
    fn render(&self, state: &ProjectState, out: &mut String) {
        if state.mode != RenderMode::Export {
            return;
        }
        self.0.render(state, out);
    }
}
