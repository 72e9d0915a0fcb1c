//! Section-by-section layout of the tax invoice document.
//!
//! Mirrors the printed form: header block, title band, buyer/shipment grid,
//! line-items table, tax summary, grand total, amounts in words, HSN tax
//! breakdown, declaration, bank details, footer. The cursor only ever moves
//! down; every table's column widths are checked against the printable
//! width before anything is drawn.
//!
//! Row contents are built by pure functions so the tabular shape (padding
//! rows, placeholder dashes, fixed grid cells) is testable without reading
//! a PDF back.

use printpdf::PdfLayerReference;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::core::{BijakError, CompanyProfile, GstBreakup, GstType, Invoice};
use crate::words::amount_in_words;

use super::layout::{
    self, Cursor, Fonts, MARGIN, PAGE_WIDTH, format_amount, format_quantity, format_rate,
};
use super::table::{Align, Cell, Column, RowStyle, draw_row, ensure_fits, stroke_hline,
    stroke_rect};

/// The items table keeps at least this many body rows; shorter invoices are
/// padded with blank rows that carry no data and never affect totals.
pub const MIN_ITEM_ROWS: usize = 3;

/// Unit shown in the grand-total row when the invoice has no items.
pub const DEFAULT_UOM: &str = "Kgs";

const DECLARATION: &str = "We declare that all particulars in this invoice are true and correct";
const FOOTER: &str = "THIS IS A COMPUTER GENERATED INVOICE";

const GRID_COLUMNS: [Column; 3] = [
    Column::new(100.0, Align::Left),
    Column::new(40.0, Align::Left),
    Column::new(42.0, Align::Left),
];

const ITEMS_COLUMNS: [Column; 7] = [
    Column::new(12.0, Align::Center),
    Column::new(70.0, Align::Left),
    Column::new(18.0, Align::Center),
    Column::new(20.0, Align::Right),
    Column::new(18.0, Align::Right),
    Column::new(12.0, Align::Center),
    Column::new(22.0, Align::Right),
];

/// The totals block reuses the items grid but splits the unit column to make
/// room for a rate cell next to the amount.
const TOTALS_COLUMNS: [Column; 8] = [
    Column::new(12.0, Align::Left),
    Column::new(70.0, Align::Left),
    Column::new(18.0, Align::Left),
    Column::new(20.0, Align::Left),
    Column::new(18.0, Align::Left),
    Column::new(12.0, Align::Right),
    Column::new(10.0, Align::Center),
    Column::new(22.0, Align::Right),
];

const HSN_COLUMNS: [Column; 7] = [
    Column::new(24.0, Align::Center),
    Column::new(36.0, Align::Right),
    Column::new(22.0, Align::Center),
    Column::new(26.0, Align::Right),
    Column::new(22.0, Align::Center),
    Column::new(26.0, Align::Right),
    Column::new(30.0, Align::Right),
];

const GRID_STYLE: RowStyle = RowStyle::new(7.0, 1.5);
const ITEMS_STYLE: RowStyle = RowStyle::new(8.0, 2.0);
const HSN_STYLE: RowStyle = RowStyle::new(7.0, 1.5);

// ── row builders ────────────────────────────────────────────────────────────

/// The fixed 8×3 buyer/shipment grid. The shape never varies; empty metadata
/// fields render as blank cells.
pub fn buyer_grid_rows(invoice: &Invoice) -> Vec<[String; 3]> {
    let buyer = &invoice.buyer;
    let opt = |value: &Option<String>| value.clone().unwrap_or_default();
    vec![
        [
            "Consignee Address".into(),
            "INVOICE NO.".into(),
            "DATE".into(),
        ],
        [
            format!("Name : {}", buyer.name),
            invoice.number.clone(),
            invoice.date.format("%d-%m-%Y").to_string(),
        ],
        [
            format!("Address : {}", buyer.address),
            "DELIVERY NOTE".into(),
            "MODE/TERMS OF PAYMENT".into(),
        ],
        [
            format!(
                "GSTIN/UIN : {}",
                buyer.gstin.clone().unwrap_or_else(|| "N/A".into())
            ),
            opt(&invoice.delivery_address),
            invoice.payment_mode.label().into(),
        ],
        [
            format!("State Name : {}", buyer.state_name),
            "BUYER'S ORDER NO.".into(),
            "DATE".into(),
        ],
        [format!("State Code : {}", buyer.state_code), String::new(), String::new()],
        [
            format!("Mobile No : {}", opt(&buyer.phone)),
            "DISPATCH DOC. NO.".into(),
            "DESTINATION".into(),
        ],
        [
            String::new(),
            opt(&invoice.vehicle_number),
            opt(&invoice.destination),
        ],
    ]
}

pub fn items_header() -> [&'static str; 7] {
    [
        "SL.NO.",
        "DESCRIPTION OF GOODS/SERVICE",
        "HSN/SAC",
        "QUANTITY",
        "RATE",
        "UOM",
        "AMOUNT",
    ]
}

/// One row per real line item, padded with blank rows up to [`MIN_ITEM_ROWS`].
pub fn items_body_rows(breakup: &GstBreakup) -> Vec<[String; 7]> {
    let mut rows: Vec<[String; 7]> = breakup
        .items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            [
                (i + 1).to_string(),
                item.description.clone(),
                item.hsn_code.clone(),
                item.quantity.to_string(),
                format_amount(item.unit_rate),
                item.uom.clone(),
                format_amount(item.amount),
            ]
        })
        .collect();
    while rows.len() < MIN_ITEM_ROWS {
        rows.push(Default::default());
    }
    rows
}

/// Subtotal, the three tax legs ("-" where not applicable), and the fixed
/// HAMALI handling-charge row left for manual entry.
pub fn totals_rows(breakup: &GstBreakup) -> Vec<[String; 8]> {
    let blank = String::new;
    let dash_unless = |amount: Decimal| {
        if amount > Decimal::ZERO {
            format_amount(amount)
        } else {
            "-".into()
        }
    };
    let igst_rate = if breakup.igst > Decimal::ZERO {
        format_rate(breakup.rate)
    } else {
        String::new()
    };
    vec![
        [
            blank(), blank(), blank(), blank(), blank(),
            "TOTAL".into(),
            "=".into(),
            format_amount(breakup.subtotal),
        ],
        [
            blank(), blank(), blank(), blank(), blank(),
            "IGST".into(),
            igst_rate,
            dash_unless(breakup.igst),
        ],
        [
            blank(), blank(), blank(), blank(), blank(),
            "CGST".into(),
            blank(),
            dash_unless(breakup.cgst),
        ],
        [
            blank(), blank(), blank(), blank(), blank(),
            "SGST".into(),
            blank(),
            dash_unless(breakup.sgst),
        ],
        [
            blank(), blank(), blank(), blank(), blank(),
            "HAMALI".into(),
            blank(),
            blank(),
        ],
    ]
}

/// Total quantity over the real line items (padding rows carry no data) in
/// the first item's unit, and the grand total echoed verbatim from the
/// breakup — never recomputed here.
pub fn grand_total_row(breakup: &GstBreakup) -> [String; 8] {
    let total_qty: Decimal = breakup.items.iter().map(|item| item.quantity).sum();
    let uom = breakup
        .items
        .first()
        .map(|item| item.uom.as_str())
        .unwrap_or(DEFAULT_UOM);
    [
        "GRAND TOTAL INVOICE AMOUNT :".into(),
        String::new(),
        format!("{}{}", format_quantity(total_qty), uom),
        String::new(),
        String::new(),
        String::new(),
        String::new(),
        format_amount(breakup.grand_total),
    ]
}

/// HSN-keyed tax breakdown: one row per distinct HSN code in first-appearance
/// order, plus the bold total row.
pub fn hsn_tax_rows(breakup: &GstBreakup) -> (Vec<[String; 7]>, [String; 7]) {
    let mut order: Vec<&str> = Vec::new();
    for item in &breakup.items {
        if !order.contains(&item.hsn_code.as_str()) {
            order.push(&item.hsn_code);
        }
    }

    let integrated = breakup.gst_type == GstType::Integrated;
    let half_rate = breakup.rate / dec!(2);

    let rows = order
        .iter()
        .map(|hsn| {
            let taxable: Decimal = breakup
                .items
                .iter()
                .filter(|item| item.hsn_code == *hsn)
                .map(|item| item.amount)
                .sum();
            let tax = taxable * breakup.rate / dec!(100);
            let (igst_rate, igst_amount, state_rate, state_amount) = if integrated {
                (
                    format_rate(breakup.rate),
                    format_amount(tax),
                    "-".into(),
                    "-".into(),
                )
            } else {
                (
                    "-".into(),
                    "-".into(),
                    format_rate(half_rate),
                    format_amount(taxable * half_rate / dec!(100)),
                )
            };
            [
                (*hsn).to_string(),
                format_amount(taxable),
                igst_rate,
                igst_amount,
                state_rate,
                state_amount,
                format_amount(tax),
            ]
        })
        .collect();

    let total = [
        "TOTAL".into(),
        format_amount(breakup.subtotal),
        String::new(),
        String::new(),
        String::new(),
        String::new(),
        format_amount(breakup.total_tax),
    ];

    (rows, total)
}

// ── drawing ─────────────────────────────────────────────────────────────────

fn require_space(cursor: &Cursor, height: f32, section: &str) -> Result<(), BijakError> {
    if !cursor.fits(height) {
        return Err(BijakError::Render(format!(
            "invoice content overflows the page at the {section} section; \
             reduce the item count"
        )));
    }
    Ok(())
}

/// Lay out the full document onto `layer`.
pub fn compose(
    layer: &PdfLayerReference,
    fonts: &Fonts,
    invoice: &Invoice,
    company: &CompanyProfile,
) -> Result<(), BijakError> {
    ensure_fits(&GRID_COLUMNS)?;
    ensure_fits(&ITEMS_COLUMNS)?;
    ensure_fits(&TOTALS_COLUMNS)?;
    ensure_fits(&HSN_COLUMNS)?;

    let breakup = &invoice.breakup;

    // Outer border
    layer.set_outline_thickness(0.5);
    stroke_rect(
        layer,
        layout::BORDER_INSET,
        layout::BORDER_INSET,
        PAGE_WIDTH - 2.0 * layout::BORDER_INSET,
        layout::PAGE_HEIGHT - 2.0 * layout::BORDER_INSET,
    );

    // 1. Header block
    layout::draw_text(layer, &fonts.regular, &format!("GSTIN:{}", company.gstin), 7.0, MARGIN, 14.0);
    layout::draw_text_centered(layer, &fonts.bold, &company.name, 14.0, 20.0);
    if let Some(trade_line) = &company.trade_line {
        layout::draw_text_centered(layer, &fonts.regular, trade_line, 8.0, 25.0);
    }
    layout::draw_text_centered(
        layer,
        &fonts.regular,
        &format!("Office: {}", company.address),
        7.0,
        29.0,
    );
    layout::draw_text_centered(
        layer,
        &fonts.regular,
        &format!("E-mail: {} Mobile No: {}", company.email, company.phone),
        7.0,
        33.0,
    );

    // 2. Title band
    layout::draw_text_centered(layer, &fonts.bold, "TAX INVOICE", 11.0, 41.0);
    layer.set_outline_thickness(0.3);
    stroke_hline(layer, MARGIN, PAGE_WIDTH - MARGIN, 43.0);

    let mut cursor = Cursor::new(49.0);
    layer.set_outline_thickness(0.2);

    // 3. Buyer/shipment grid: fixed shape, label column bold
    let grid_rows = buyer_grid_rows(invoice);
    require_space(&cursor, GRID_STYLE.height() * grid_rows.len() as f32, "buyer grid")?;
    for (i, row) in grid_rows.iter().enumerate() {
        let style = if i == 0 { GRID_STYLE.bold() } else { GRID_STYLE };
        let cells: Vec<Cell> = row
            .iter()
            .enumerate()
            .map(|(col, text)| {
                let cell = Cell::new(text.clone());
                if col == 1 { cell.bold() } else { cell }
            })
            .collect();
        let h = draw_row(layer, fonts, MARGIN, cursor.y(), &GRID_COLUMNS, &cells, style);
        cursor.advance(h);
    }
    cursor.advance(6.0);

    // 4. Line-items table
    let body_rows = items_body_rows(breakup);
    require_space(
        &cursor,
        ITEMS_STYLE.height() * (body_rows.len() + 1) as f32,
        "items table",
    )?;
    let head: Vec<Cell> = items_header()
        .iter()
        .map(|text| Cell::new(*text).align(Align::Center))
        .collect();
    let h = draw_row(layer, fonts, MARGIN, cursor.y(), &ITEMS_COLUMNS, &head, ITEMS_STYLE.bold());
    cursor.advance(h);
    for row in &body_rows {
        let cells: Vec<Cell> = row.iter().map(|text| Cell::new(text.clone())).collect();
        let h = draw_row(layer, fonts, MARGIN, cursor.y(), &ITEMS_COLUMNS, &cells, ITEMS_STYLE);
        cursor.advance(h);
    }

    // 5. Tax summary block
    let summary_rows = totals_rows(breakup);
    require_space(&cursor, ITEMS_STYLE.height() * summary_rows.len() as f32, "tax summary")?;
    for row in &summary_rows {
        let cells: Vec<Cell> = row
            .iter()
            .enumerate()
            .map(|(col, text)| {
                let cell = Cell::new(text.clone());
                if col == 5 { cell.bold() } else { cell }
            })
            .collect();
        let h = draw_row(layer, fonts, MARGIN, cursor.y(), &TOTALS_COLUMNS, &cells, ITEMS_STYLE);
        cursor.advance(h);
    }

    // 6. Grand-total row
    let grand_style = RowStyle::new(9.0, 2.0).bold();
    require_space(&cursor, grand_style.height(), "grand total")?;
    let cells: Vec<Cell> = grand_total_row(breakup).iter().map(|text| Cell::new(text.clone())).collect();
    let h = draw_row(layer, fonts, MARGIN, cursor.y(), &TOTALS_COLUMNS, &cells, grand_style);
    cursor.advance(h + 4.0);

    // 7. Grand total in words + HSN tax breakdown
    require_space(&cursor, 10.0, "amount in words")?;
    layout::draw_text(
        layer,
        &fonts.bold,
        "GRAND TOTAL INVOICE AMOUNT (IN WORDS)",
        7.0,
        MARGIN,
        cursor.y(),
    );
    cursor.advance(4.0);
    layout::draw_text(
        layer,
        &fonts.regular,
        &amount_in_words(breakup.grand_total),
        7.0,
        MARGIN,
        cursor.y(),
    );
    cursor.advance(6.0);

    draw_hsn_table(layer, fonts, breakup, &mut cursor)?;
    cursor.advance(4.0);

    // 8. Tax in words, declaration, bank details, signatory, footer
    require_space(&cursor, 40.0, "footer block")?;
    layout::draw_text(layer, &fonts.bold, "TAX AMOUNT (IN WORDS)", 7.0, MARGIN, cursor.y());
    cursor.advance(4.0);
    layout::draw_text(
        layer,
        &fonts.regular,
        &amount_in_words(breakup.total_tax),
        7.0,
        MARGIN,
        cursor.y(),
    );
    cursor.advance(5.0);

    layout::draw_text(layer, &fonts.bold, "DECLARATION", 7.0, MARGIN, cursor.y());
    cursor.advance(4.0);
    layout::draw_text(layer, &fonts.regular, DECLARATION, 7.0, MARGIN, cursor.y());
    cursor.advance(6.0);

    let bank_y = cursor.y();
    layout::draw_text(layer, &fonts.bold, "Company's Bank Details", 8.0, MARGIN, bank_y);
    cursor.advance(4.0);
    let bank = &invoice.bank;
    let bank_lines = [
        format!("NAME : {}", company.name),
        format!("A/C NO: {}", bank.account_no),
        format!("BANK : {}", bank.bank_name),
        format!("BRANCH : {}", bank.branch),
        format!("IFSC CODE : {}", bank.ifsc_code),
    ];
    for line in &bank_lines {
        layout::draw_text(layer, &fonts.regular, line, 7.0, MARGIN, cursor.y());
        cursor.advance(3.5);
    }

    // Signatory label shares the bank block's first baseline
    layout::draw_text_right(
        layer,
        &fonts.bold,
        "AUTHORISED SIGNATORY",
        7.0,
        PAGE_WIDTH - 14.0,
        bank_y,
    );

    layout::draw_text_centered(layer, &fonts.oblique, FOOTER, 7.0, layout::PAGE_HEIGHT - 12.0);

    Ok(())
}

/// The HSN-keyed breakdown has a two-row header with merged cells, so it is
/// drawn cell-by-cell rather than through `draw_row`.
fn draw_hsn_table(
    layer: &PdfLayerReference,
    fonts: &Fonts,
    breakup: &GstBreakup,
    cursor: &mut Cursor,
) -> Result<(), BijakError> {
    let (rows, total_row) = hsn_tax_rows(breakup);
    let row_h = HSN_STYLE.height();
    let header_h = row_h * 2.0;
    require_space(cursor, header_h + row_h * (rows.len() + 1) as f32, "tax breakdown")?;

    let y = cursor.y();
    let x0 = MARGIN;
    let xs: Vec<f32> = HSN_COLUMNS
        .iter()
        .scan(x0, |x, column| {
            let start = *x;
            *x += column.width;
            Some(start)
        })
        .collect();

    let centered = |text: &str, x: f32, width: f32, baseline: f32| {
        let tw = layout::text_width(text, HSN_STYLE.font_size);
        layout::draw_text(layer, &fonts.bold, text, HSN_STYLE.font_size, x + (width - tw) / 2.0, baseline);
    };

    // Merged header cells span both rows; the tax-pair groups split below.
    let tall_baseline = y + row_h + layout::line_height(HSN_STYLE.font_size) * 0.4;
    let row_a_baseline = y + HSN_STYLE.padding + layout::line_height(HSN_STYLE.font_size) * 0.78;
    let row_b_baseline = row_a_baseline + row_h;

    stroke_rect(layer, xs[0], y, HSN_COLUMNS[0].width, header_h);
    centered("HSN/SAC", xs[0], HSN_COLUMNS[0].width, tall_baseline);
    stroke_rect(layer, xs[1], y, HSN_COLUMNS[1].width, header_h);
    centered("TAXABLE VALUE", xs[1], HSN_COLUMNS[1].width, tall_baseline);

    let integrated_w = HSN_COLUMNS[2].width + HSN_COLUMNS[3].width;
    stroke_rect(layer, xs[2], y, integrated_w, row_h);
    centered("INTEGRATED TAX", xs[2], integrated_w, row_a_baseline);
    let state_w = HSN_COLUMNS[4].width + HSN_COLUMNS[5].width;
    stroke_rect(layer, xs[4], y, state_w, row_h);
    centered("STATE TAX", xs[4], state_w, row_a_baseline);

    stroke_rect(layer, xs[6], y, HSN_COLUMNS[6].width, header_h);
    centered("TAX AMOUNT", xs[6], HSN_COLUMNS[6].width, tall_baseline);

    for col in 2..6 {
        stroke_rect(layer, xs[col], y + row_h, HSN_COLUMNS[col].width, row_h);
        let label = if col % 2 == 0 { "RATE" } else { "AMOUNT" };
        centered(label, xs[col], HSN_COLUMNS[col].width, row_b_baseline);
    }

    cursor.jump_to(y + header_h);

    for row in &rows {
        let cells: Vec<Cell> = row.iter().map(|text| Cell::new(text.clone())).collect();
        let h = draw_row(layer, fonts, x0, cursor.y(), &HSN_COLUMNS, &cells, HSN_STYLE);
        cursor.advance(h);
    }

    let cells: Vec<Cell> = total_row.iter().map(|text| Cell::new(text.clone())).collect();
    let h = draw_row(layer, fonts, x0, cursor.y(), &HSN_COLUMNS, &cells, HSN_STYLE.bold());
    cursor.advance(h);

    Ok(())
}
