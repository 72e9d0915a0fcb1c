//! Printable invoice documents.
//!
//! The composer renders a fully computed [`Invoice`] into a single-page A4
//! PDF: the whole document is built in memory and the export is one terminal
//! write, so a failed save never leaves a partial artifact behind.

mod compose;
mod layout;
mod table;

use std::fs;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use printpdf::{BuiltinFont, Mm, PdfDocument};

use crate::core::{BijakError, CompanyProfile, Invoice};

pub use compose::{
    DEFAULT_UOM, MIN_ITEM_ROWS, buyer_grid_rows, grand_total_row, hsn_tax_rows, items_body_rows,
    items_header, totals_rows,
};
pub use layout::{format_amount, format_quantity, format_rate};

use layout::Fonts;

/// Render the invoice into an in-memory PDF document.
///
/// Pure with respect to its inputs: no I/O, safe to call concurrently, and
/// each call is independent. Fails fast with [`BijakError::Render`] if the
/// layout cannot fit the page or the PDF backend reports an error.
pub fn render_invoice(
    invoice: &Invoice,
    company: &CompanyProfile,
) -> Result<Vec<u8>, BijakError> {
    let (doc, page, layer) = PdfDocument::new(
        format!("Invoice {}", invoice.number),
        Mm(layout::PAGE_WIDTH),
        Mm(layout::PAGE_HEIGHT),
        "Layer 1",
    );
    let layer = doc.get_page(page).get_layer(layer);

    let fonts = Fonts {
        regular: doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| BijakError::Render(format!("failed to load font: {e}")))?,
        bold: doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| BijakError::Render(format!("failed to load font: {e}")))?,
        oblique: doc
            .add_builtin_font(BuiltinFont::HelveticaOblique)
            .map_err(|e| BijakError::Render(format!("failed to load font: {e}")))?,
    };

    compose::compose(&layer, &fonts, invoice, company)?;

    let mut writer = BufWriter::new(Vec::new());
    doc.save(&mut writer)
        .map_err(|e| BijakError::Render(format!("failed to serialize PDF: {e}")))?;
    writer
        .into_inner()
        .map_err(|e| BijakError::Render(format!("failed to flush PDF buffer: {e}")))
}

/// Render the invoice and write it to `dir` under its artifact file name.
///
/// The document is fully rendered before the single write, so the export is
/// atomic by construction; a write failure surfaces as
/// [`BijakError::Render`] without leaving a zero-byte file.
pub fn save_invoice(
    invoice: &Invoice,
    company: &CompanyProfile,
    dir: impl AsRef<Path>,
) -> Result<PathBuf, BijakError> {
    let bytes = render_invoice(invoice, company)?;
    let path = dir.as_ref().join(artifact_file_name(&invoice.number));
    fs::write(&path, bytes)
        .map_err(|e| BijakError::Render(format!("failed to write {}: {e}", path.display())))?;
    Ok(path)
}

/// Stable per-invoice file name derived from the invoice number, with path
/// separator characters replaced so numbers like "INV-2025-26/001" cannot
/// escape the target directory.
pub fn artifact_file_name(invoice_number: &str) -> String {
    let safe: String = invoice_number
        .chars()
        .map(|c| if c == '/' || c == '\\' { '_' } else { c })
        .collect();
    format!("Invoice_{safe}.pdf")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_replaces_path_separators() {
        assert_eq!(
            artifact_file_name("INV-2025-26/001"),
            "Invoice_INV-2025-26_001.pdf"
        );
        assert_eq!(artifact_file_name("A\\B/C"), "Invoice_A_B_C.pdf");
        assert_eq!(artifact_file_name("PLAIN-42"), "Invoice_PLAIN-42.pdf");
    }
}
