//! Keeps camera drags from starting underneath the debug panel.

use bevy_egui::EguiContexts;

/// `true` while the cursor is over an egui area or egui owns the current drag.
#[inline]
pub fn egui_wants_pointer(contexts: &mut EguiContexts) -> bool {
    let ctx = contexts.ctx_mut();
    ctx.wants_pointer_input() || ctx.is_pointer_over_area()
}
