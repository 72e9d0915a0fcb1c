//! Fixed-width bordered grid rows.
//!
//! Every table on the invoice is a sequence of rows with absolute column
//! widths tuned to the printable width. Cell borders are stroked as closed
//! lines; text is inset by the cell padding and aligned per column.

use printpdf::{Line, PdfLayerReference, Point};

use crate::core::BijakError;

use super::layout::{self, Fonts, pdf_y};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

/// One column of a table: absolute width in millimetres plus text alignment.
#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub width: f32,
    pub align: Align,
}

impl Column {
    pub const fn new(width: f32, align: Align) -> Self {
        Self { width, align }
    }
}

/// Text styling shared by all cells of a row.
#[derive(Debug, Clone, Copy)]
pub struct RowStyle {
    pub font_size: f32,
    pub padding: f32,
    pub bold: bool,
}

impl RowStyle {
    pub const fn new(font_size: f32, padding: f32) -> Self {
        Self {
            font_size,
            padding,
            bold: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Row height: padding above and below one text line.
    pub fn height(&self) -> f32 {
        2.0 * self.padding + layout::line_height(self.font_size)
    }
}

/// A cell's content with optional per-cell overrides.
#[derive(Debug, Clone)]
pub struct Cell {
    pub text: String,
    pub bold: Option<bool>,
    pub align: Option<Align>,
}

impl Cell {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: None,
            align: None,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = Some(true);
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = Some(align);
        self
    }
}

/// Guarantee a row's columns fit the printable width.
///
/// Column widths are fixed absolute values; this is checked once per table
/// before anything is drawn, so a misconfigured layout fails fast instead of
/// bleeding into the margin.
pub fn ensure_fits(columns: &[Column]) -> Result<(), BijakError> {
    let total: f32 = columns.iter().map(|c| c.width).sum();
    if total > layout::PRINTABLE_WIDTH {
        return Err(BijakError::Render(format!(
            "table columns sum to {total:.1}mm, exceeding the printable width of {:.1}mm",
            layout::PRINTABLE_WIDTH
        )));
    }
    Ok(())
}

/// Stroke a rectangle outline with the cell border weight.
pub fn stroke_rect(layer: &PdfLayerReference, x: f32, y_top: f32, width: f32, height: f32) {
    let line = Line {
        points: vec![
            (Point::new(printpdf::Mm(x), pdf_y(y_top)), false),
            (Point::new(printpdf::Mm(x + width), pdf_y(y_top)), false),
            (Point::new(printpdf::Mm(x + width), pdf_y(y_top + height)), false),
            (Point::new(printpdf::Mm(x), pdf_y(y_top + height)), false),
        ],
        is_closed: true,
    };
    layer.add_line(line);
}

/// Stroke a horizontal rule.
pub fn stroke_hline(layer: &PdfLayerReference, x1: f32, x2: f32, y_top: f32) {
    let line = Line {
        points: vec![
            (Point::new(printpdf::Mm(x1), pdf_y(y_top)), false),
            (Point::new(printpdf::Mm(x2), pdf_y(y_top)), false),
        ],
        is_closed: false,
    };
    layer.add_line(line);
}

/// Draw one bordered row at `y_top`, returning its height.
///
/// Cells beyond `columns.len()` are ignored; missing cells render as empty
/// bordered boxes, so a fixed grid keeps its shape regardless of which
/// fields have values.
pub fn draw_row(
    layer: &PdfLayerReference,
    fonts: &Fonts,
    x_left: f32,
    y_top: f32,
    columns: &[Column],
    cells: &[Cell],
    style: RowStyle,
) -> f32 {
    let height = style.height();
    let baseline = y_top + style.padding + layout::line_height(style.font_size) * 0.78;

    let mut x = x_left;
    for (i, column) in columns.iter().enumerate() {
        stroke_rect(layer, x, y_top, column.width, height);

        if let Some(cell) = cells.get(i) {
            if !cell.text.is_empty() {
                let bold = cell.bold.unwrap_or(style.bold);
                let font = if bold { &fonts.bold } else { &fonts.regular };
                let align = cell.align.unwrap_or(column.align);
                match align {
                    Align::Left => layout::draw_text(
                        layer,
                        font,
                        &cell.text,
                        style.font_size,
                        x + style.padding,
                        baseline,
                    ),
                    Align::Right => layout::draw_text_right(
                        layer,
                        font,
                        &cell.text,
                        style.font_size,
                        x + column.width - style.padding,
                        baseline,
                    ),
                    Align::Center => {
                        let tw = layout::text_width(&cell.text, style.font_size);
                        layout::draw_text(
                            layer,
                            font,
                            &cell.text,
                            style.font_size,
                            x + (column.width - tw) / 2.0,
                            baseline,
                        );
                    }
                }
            }
        }
        x += column.width;
    }

    height
}
