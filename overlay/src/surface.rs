//! Render surface seam
//!
//! The pixel-level text box primitive belongs to the host. The overlay only
//! hands it fully prepared boxes and reads back the size it actually drew.

use examine_types::{Color, OverlayLayer};

use crate::geometry::{Point, Size};

/// A text box ready to draw
#[derive(Debug, Clone, PartialEq)]
pub struct TextBox {
    /// One entry per line, already wrapped
    pub lines: Vec<String>,
    /// Background with the record's opacity multiplied into alpha
    pub background: Color,
    pub text_color: Color,
    pub opacity: f32,
    pub layer: OverlayLayer,
}

pub trait RenderSurface {
    /// Draw `text_box` with its top-left corner at `position` and return the
    /// size it occupied
    fn draw_box(&mut self, text_box: &TextBox, position: Point) -> Size;

    /// Draw `text_box` as a tooltip following the cursor
    fn draw_tooltip(&mut self, text_box: &TextBox);
}
