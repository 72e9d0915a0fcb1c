use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A tax invoice — the top-level document.
///
/// Constructed once (normally via [`InvoiceBuilder`](super::InvoiceBuilder)),
/// fully populated, and immutable thereafter. Rendering never mutates it and
/// persistence is a caller concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    /// Invoice number. Opaque identifier; uniqueness is expected but not
    /// enforced here (see [`InvoiceNumberSequence`](super::InvoiceNumberSequence)).
    pub number: String,
    /// Invoice issue date.
    pub date: NaiveDate,
    /// Seller (the invoicing company).
    pub seller: Party,
    /// Buyer (the customer).
    pub buyer: Party,
    /// Delivery address, when goods ship somewhere other than the buyer's address.
    pub delivery_address: Option<String>,
    /// Destination shown in the dispatch block.
    pub destination: Option<String>,
    /// Vehicle number for dispatch.
    pub vehicle_number: Option<String>,
    /// Mode of payment.
    pub payment_mode: PaymentMode,
    /// Computed tax breakup (set by the builder via [`compute_gst`](super::compute_gst)).
    pub breakup: GstBreakup,
    /// Seller bank details printed on the invoice.
    pub bank: BankDetails,
}

/// A party on the invoice (seller or buyer).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Party {
    /// Legal name.
    pub name: String,
    /// Street address.
    pub address: String,
    /// City, if tracked separately from the address line.
    pub city: Option<String>,
    /// State name (e.g. "Telangana").
    pub state_name: String,
    /// Two-digit GST state code (e.g. "36").
    pub state_code: String,
    /// GST registration number. Mandatory for the seller, optional for
    /// unregistered buyers.
    pub gstin: Option<String>,
    /// Contact phone.
    pub phone: Option<String>,
    /// Contact email.
    pub email: Option<String>,
}

/// One invoice line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    /// Optional reference to a catalogue product.
    pub product_ref: Option<String>,
    /// Description of goods/service.
    pub description: String,
    /// HSN/SAC tariff classification code.
    pub hsn_code: String,
    /// Invoiced quantity. Non-negative.
    pub quantity: Decimal,
    /// Price per unit. Non-negative.
    pub unit_rate: Decimal,
    /// Unit of measure short code (e.g. "Kgs", "Pcs").
    pub uom: String,
    /// Line amount = quantity × unit_rate. Always derived, never set
    /// independently; [`validate_invoice`](super::validate_invoice) rejects
    /// a drifted amount.
    pub amount: Decimal,
}

impl LineItem {
    /// Create a line item, deriving the amount from quantity × rate.
    pub fn new(
        description: impl Into<String>,
        hsn_code: impl Into<String>,
        quantity: Decimal,
        unit_rate: Decimal,
        uom: impl Into<String>,
    ) -> Self {
        Self {
            product_ref: None,
            description: description.into(),
            hsn_code: hsn_code.into(),
            quantity,
            unit_rate,
            uom: uom.into(),
            amount: quantity * unit_rate,
        }
    }
}

/// Which GST legs apply to an invoice.
///
/// Intra-state supplies split the rate evenly between CGST and SGST;
/// inter-state supplies carry the full rate as IGST. Exactly one of the two
/// shapes is ever non-zero on a computed breakup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GstType {
    /// CGST + SGST, each at half the configured rate (buyer and seller in
    /// the same state).
    Split,
    /// IGST at the full configured rate (inter-state supply).
    Integrated,
}

/// Computed tax breakup for a set of line items.
///
/// Produced by [`compute_gst`](super::compute_gst); callers treat it as an
/// immutable value. Amounts keep full `Decimal` precision — rounding to two
/// fractional digits happens only at render time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GstBreakup {
    /// The line items the breakup was computed over.
    pub items: Vec<LineItem>,
    /// Sum of all line amounts.
    pub subtotal: Decimal,
    /// GST rate applied, in percent (e.g. 18).
    pub rate: Decimal,
    /// Which legs apply.
    pub gst_type: GstType,
    /// Central GST. Zero unless `gst_type` is [`GstType::Split`].
    pub cgst: Decimal,
    /// State GST. Zero unless `gst_type` is [`GstType::Split`].
    pub sgst: Decimal,
    /// Integrated GST. Zero unless `gst_type` is [`GstType::Integrated`].
    pub igst: Decimal,
    /// cgst + sgst + igst.
    pub total_tax: Decimal,
    /// subtotal + total_tax.
    pub grand_total: Decimal,
}

/// Mode of payment shown on the invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMode {
    Credit,
    Cash,
    Upi,
    BankTransfer,
}

impl PaymentMode {
    /// Label as printed on the invoice.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Credit => "CREDIT",
            Self::Cash => "CASH",
            Self::Upi => "UPI",
            Self::BankTransfer => "BANK TRANSFER",
        }
    }

    /// Parse from the printed label.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "CREDIT" => Some(Self::Credit),
            "CASH" => Some(Self::Cash),
            "UPI" => Some(Self::Upi),
            "BANK TRANSFER" => Some(Self::BankTransfer),
            _ => None,
        }
    }
}

/// Seller bank details printed in the footer block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BankDetails {
    pub bank_name: String,
    pub account_no: String,
    pub branch: String,
    pub ifsc_code: String,
}

/// Company (seller) configuration, supplied externally — never hardcoded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyProfile {
    /// Registered company name.
    pub name: String,
    /// Trade description line under the name (e.g. "Trader: Column Boxes").
    pub trade_line: Option<String>,
    /// Office address.
    pub address: String,
    /// Contact email.
    pub email: String,
    /// Contact phone(s).
    pub phone: String,
    /// GSTIN. Mandatory for the invoicing company.
    pub gstin: String,
    /// State name.
    pub state_name: String,
    /// Two-digit GST state code.
    pub state_code: String,
    /// Bank details for the invoice footer.
    pub bank: BankDetails,
}

impl CompanyProfile {
    /// The company as the seller [`Party`] of an invoice.
    pub fn as_party(&self) -> Party {
        Party {
            name: self.name.clone(),
            address: self.address.clone(),
            city: None,
            state_name: self.state_name.clone(),
            state_code: self.state_code.clone(),
            gstin: Some(self.gstin.clone()),
            phone: Some(self.phone.clone()),
            email: Some(self.email.clone()),
        }
    }
}
