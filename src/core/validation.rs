use rust_decimal::Decimal;

use super::error::ValidationError;
use super::states;
use super::types::{GstType, Invoice, Party};

/// Validate a fully constructed invoice.
/// Returns all validation errors found (not just the first).
///
/// Callers are expected to validate user input at the UI boundary; these are
/// defensive checks guarding the computation and rendering core.
pub fn validate_invoice(invoice: &Invoice) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if invoice.number.trim().is_empty() {
        errors.push(ValidationError::new(
            "number",
            "invoice number must not be empty",
        ));
    }

    validate_party(&invoice.seller, "seller", &mut errors);
    validate_party(&invoice.buyer, "buyer", &mut errors);

    // The seller is a registered business; a GSTIN is mandatory.
    if invoice.seller.gstin.is_none() {
        errors.push(ValidationError::new("seller.gstin", "seller must have a GSTIN"));
    }

    for (i, item) in invoice.breakup.items.iter().enumerate() {
        let field = |name: &str| format!("items[{i}].{name}");
        if item.description.trim().is_empty() {
            errors.push(ValidationError::new(
                field("description"),
                "description must not be empty",
            ));
        }
        if item.quantity < Decimal::ZERO {
            errors.push(ValidationError::new(
                field("quantity"),
                "quantity must be non-negative",
            ));
        }
        if item.unit_rate < Decimal::ZERO {
            errors.push(ValidationError::new(
                field("unit_rate"),
                "unit rate must be non-negative",
            ));
        }
        // amount is derived, never set independently
        if item.amount != item.quantity * item.unit_rate {
            errors.push(ValidationError::new(
                field("amount"),
                format!(
                    "amount {} does not equal quantity × rate = {}",
                    item.amount,
                    item.quantity * item.unit_rate
                ),
            ));
        }
    }

    errors.extend(validate_arithmetic(invoice));

    errors
}

/// Verify breakup arithmetic: subtotal, the split invariant, and the grand
/// total. The grand-total row on the rendered document echoes
/// `breakup.grand_total` verbatim, so drift must be caught here.
pub fn validate_arithmetic(invoice: &Invoice) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let b = &invoice.breakup;

    let expected_subtotal: Decimal = b.items.iter().map(|item| item.amount).sum();
    if b.subtotal != expected_subtotal {
        errors.push(ValidationError::new(
            "breakup.subtotal",
            format!(
                "subtotal {} does not match sum of item amounts {}",
                b.subtotal, expected_subtotal
            ),
        ));
    }

    // Exactly one pair of legs is non-zero, as dictated by gst_type.
    match b.gst_type {
        GstType::Split => {
            if b.igst != Decimal::ZERO {
                errors.push(ValidationError::new(
                    "breakup.igst",
                    "IGST must be zero for an intra-state (CGST+SGST) breakup",
                ));
            }
            if b.cgst != b.sgst {
                errors.push(ValidationError::new(
                    "breakup.cgst",
                    format!("CGST {} and SGST {} must be equal halves", b.cgst, b.sgst),
                ));
            }
        }
        GstType::Integrated => {
            if b.cgst != Decimal::ZERO || b.sgst != Decimal::ZERO {
                errors.push(ValidationError::new(
                    "breakup.cgst",
                    "CGST and SGST must be zero for an inter-state (IGST) breakup",
                ));
            }
        }
    }

    let expected_tax = b.cgst + b.sgst + b.igst;
    if b.total_tax != expected_tax {
        errors.push(ValidationError::new(
            "breakup.total_tax",
            format!(
                "total tax {} does not match cgst+sgst+igst = {}",
                b.total_tax, expected_tax
            ),
        ));
    }

    let expected_grand = b.subtotal + b.total_tax;
    if b.grand_total != expected_grand {
        errors.push(ValidationError::new(
            "breakup.grand_total",
            format!(
                "grand total {} does not match subtotal {} + tax {}",
                b.grand_total, b.subtotal, b.total_tax
            ),
        ));
    }

    errors
}

fn validate_party(party: &Party, prefix: &str, errors: &mut Vec<ValidationError>) {
    if party.name.trim().is_empty() {
        errors.push(ValidationError::new(
            format!("{prefix}.name"),
            "name must not be empty",
        ));
    }
    if party.address.trim().is_empty() {
        errors.push(ValidationError::new(
            format!("{prefix}.address"),
            "address must not be empty",
        ));
    }
    if party.state_code.is_empty() {
        errors.push(ValidationError::new(
            format!("{prefix}.state_code"),
            "state code must not be empty",
        ));
    } else if party.state_code.len() != 2 || !party.state_code.bytes().all(|b| b.is_ascii_digit())
    {
        errors.push(ValidationError::new(
            format!("{prefix}.state_code"),
            format!(
                "state code '{}' must be a two-digit code",
                party.state_code
            ),
        ));
    } else if !states::is_known_state_code(&party.state_code) {
        errors.push(ValidationError::new(
            format!("{prefix}.state_code"),
            format!("state code '{}' is not an assigned GST code", party.state_code),
        ));
    }

    if let Some(gstin) = &party.gstin {
        validate_gstin_format(gstin, &party.state_code, prefix, errors);
    }
}

/// Format-check a GSTIN (no registry call): 15 uppercase alphanumeric
/// characters, leading two digits matching the party's state code.
fn validate_gstin_format(
    gstin: &str,
    state_code: &str,
    prefix: &str,
    errors: &mut Vec<ValidationError>,
) {
    let field = format!("{prefix}.gstin");
    if gstin.len() != 15 {
        errors.push(ValidationError::new(
            field,
            format!("GSTIN '{gstin}' must be 15 characters"),
        ));
        return;
    }
    if !gstin.bytes().all(|b| b.is_ascii_digit() || b.is_ascii_uppercase()) {
        errors.push(ValidationError::new(
            field,
            format!("GSTIN '{gstin}' must be uppercase alphanumeric"),
        ));
        return;
    }
    if !state_code.is_empty() && !gstin.starts_with(state_code) {
        errors.push(ValidationError::new(
            field,
            format!(
                "GSTIN '{gstin}' state prefix does not match state code '{state_code}'"
            ),
        ));
    }
}
