//! Page geometry and text measurement for the invoice renderer.
//!
//! A4 portrait, millimetre coordinates. The composer works top-down with a
//! cursor measured from the top edge; PDF user space runs bottom-up, so
//! [`pdf_y`] converts at the drawing boundary.

use printpdf::{IndirectFontRef, Mm, PdfLayerReference};
use rust_decimal::{Decimal, RoundingStrategy};

/// A4 portrait.
pub const PAGE_WIDTH: f32 = 210.0;
pub const PAGE_HEIGHT: f32 = 297.0;

/// Side margin; tables span the printable width between the margins.
pub const MARGIN: f32 = 12.0;

/// Outer border inset from the page edge.
pub const BORDER_INSET: f32 = 8.0;

/// Width available to any table row: page width minus both margins.
pub const PRINTABLE_WIDTH: f32 = PAGE_WIDTH - 2.0 * MARGIN;

/// Content must stay above this line; the footer sits below it.
pub const BOTTOM_LIMIT: f32 = PAGE_HEIGHT - 17.0;

const PT_TO_MM: f32 = 0.352_778;

/// The three builtin Helvetica faces used across the document.
pub struct Fonts {
    pub regular: IndirectFontRef,
    pub bold: IndirectFontRef,
    pub oblique: IndirectFontRef,
}

/// Top-down vertical cursor. Never re-flows backward.
#[derive(Debug, Clone, Copy)]
pub struct Cursor {
    y: f32,
}

impl Cursor {
    pub fn new(y: f32) -> Self {
        Self { y }
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn advance(&mut self, dy: f32) {
        self.y += dy;
    }

    pub fn jump_to(&mut self, y: f32) {
        debug_assert!(y >= self.y, "cursor only moves down");
        self.y = y;
    }

    /// Whether `height` more millimetres still fit above the footer area.
    pub fn fits(&self, height: f32) -> bool {
        self.y + height <= BOTTOM_LIMIT
    }
}

/// Convert a top-down y coordinate to PDF user space.
pub fn pdf_y(y_top: f32) -> Mm {
    Mm(PAGE_HEIGHT - y_top)
}

/// Height of a text line in millimetres for a font size in points.
pub fn line_height(font_size_pt: f32) -> f32 {
    font_size_pt * PT_TO_MM * 1.15
}

/// Approximate rendered width of `text` in Helvetica, in millimetres.
///
/// The builtin fonts expose no metrics through printpdf, so centering and
/// right-alignment use per-class advance factors. Close enough for layout;
/// never used for clipping decisions.
pub fn text_width(text: &str, font_size_pt: f32) -> f32 {
    let em: f32 = text
        .chars()
        .map(|c| match c {
            'i' | 'j' | 'l' | 't' | 'f' | 'I' | '.' | ',' | ':' | ';' | '!' | '\'' | '|'
            | '(' | ')' | '[' | ']' => 0.30,
            'm' | 'w' | 'M' | 'W' | '@' => 0.88,
            ' ' => 0.34,
            'A'..='Z' | '0'..='9' => 0.62,
            _ => 0.52,
        })
        .sum();
    em * font_size_pt * PT_TO_MM
}

/// Draw `text` at a left x position and top-down baseline y.
pub fn draw_text(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    text: &str,
    font_size: f32,
    x: f32,
    y_top: f32,
) {
    layer.use_text(text, font_size, Mm(x), pdf_y(y_top), font);
}

/// Draw `text` centered on the page width.
pub fn draw_text_centered(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    text: &str,
    font_size: f32,
    y_top: f32,
) {
    let x = (PAGE_WIDTH - text_width(text, font_size)) / 2.0;
    draw_text(layer, font, text, font_size, x, y_top);
}

/// Draw `text` ending at a right x position.
pub fn draw_text_right(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    text: &str,
    font_size: f32,
    x_right: f32,
    y_top: f32,
) {
    let x = x_right - text_width(text, font_size);
    draw_text(layer, font, text, font_size, x, y_top);
}

/// Format a monetary amount for display: two fractional digits, half-up.
/// This is the only place rounding happens; computation keeps full precision.
pub fn format_amount(amount: Decimal) -> String {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded.to_string()
}

/// Format a tax rate for display, e.g. "18%".
pub fn format_rate(rate: Decimal) -> String {
    format!("{}%", rate.normalize())
}

/// Format a quantity for the grand-total row: whole units, half-up.
pub fn format_quantity(quantity: Decimal) -> String {
    let mut rounded = quantity.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(0);
    rounded.to_string()
}
