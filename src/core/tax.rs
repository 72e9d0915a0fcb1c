use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::error::BijakError;
use super::types::{GstBreakup, GstType, LineItem};

/// Default GST rate in percent, split 9/9 for intra-state supplies.
pub const DEFAULT_GST_RATE: Decimal = dec!(18);

/// Compute the GST breakup for a set of line items.
///
/// If buyer and seller share a state code (case-sensitive exact match of the
/// normalized two-digit codes), the rate is split evenly between CGST and
/// SGST; otherwise the full rate applies as IGST. Amounts keep full
/// `Decimal` precision — rounding to two fractional digits is the
/// renderer's job, so the CGST/SGST halves cannot accumulate rounding drift.
///
/// An empty item list is representable and yields an all-zero breakup (a
/// degenerate invoice, not normally saved).
///
/// # Errors
///
/// Returns [`BijakError::InvalidInput`] if the rate is not positive, either
/// state code is empty, or any item carries a negative quantity or rate.
/// Never partially computes.
///
/// ```
/// use bijak::core::{compute_gst, GstType, LineItem, DEFAULT_GST_RATE};
/// use rust_decimal_macros::dec;
///
/// let items = vec![LineItem::new("MS CENTRING SHEETS", "7308", dec!(100), dec!(73), "Kgs")];
/// let breakup = compute_gst(items, "36", "36", DEFAULT_GST_RATE).unwrap();
/// assert_eq!(breakup.gst_type, GstType::Split);
/// assert_eq!(breakup.cgst, dec!(657));
/// assert_eq!(breakup.sgst, dec!(657));
/// assert_eq!(breakup.grand_total, dec!(8614));
/// ```
pub fn compute_gst(
    items: Vec<LineItem>,
    buyer_state_code: &str,
    seller_state_code: &str,
    rate_percent: Decimal,
) -> Result<GstBreakup, BijakError> {
    if rate_percent <= Decimal::ZERO {
        return Err(BijakError::InvalidInput(format!(
            "GST rate must be positive, got {rate_percent}"
        )));
    }
    if buyer_state_code.is_empty() {
        return Err(BijakError::InvalidInput(
            "buyer state code must not be empty".into(),
        ));
    }
    if seller_state_code.is_empty() {
        return Err(BijakError::InvalidInput(
            "seller state code must not be empty".into(),
        ));
    }
    for (i, item) in items.iter().enumerate() {
        if item.quantity < Decimal::ZERO {
            return Err(BijakError::InvalidInput(format!(
                "item {i}: quantity must be non-negative, got {}",
                item.quantity
            )));
        }
        if item.unit_rate < Decimal::ZERO {
            return Err(BijakError::InvalidInput(format!(
                "item {i}: unit rate must be non-negative, got {}",
                item.unit_rate
            )));
        }
    }

    let subtotal: Decimal = items.iter().map(|item| item.amount).sum();

    let gst_type = if buyer_state_code == seller_state_code {
        GstType::Split
    } else {
        GstType::Integrated
    };

    let (cgst, sgst, igst) = match gst_type {
        GstType::Split => {
            let half = subtotal * (rate_percent / dec!(2)) / dec!(100);
            (half, half, Decimal::ZERO)
        }
        GstType::Integrated => {
            let full = subtotal * rate_percent / dec!(100);
            (Decimal::ZERO, Decimal::ZERO, full)
        }
    };

    let total_tax = cgst + sgst + igst;

    Ok(GstBreakup {
        items,
        subtotal,
        rate: rate_percent,
        gst_type,
        cgst,
        sgst,
        igst,
        total_tax,
        grand_total: subtotal + total_tax,
    })
}
