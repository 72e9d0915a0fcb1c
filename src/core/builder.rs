use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::error::BijakError;
use super::states;
use super::tax::{self, DEFAULT_GST_RATE};
use super::types::*;
use super::validation;

/// Builder for constructing valid invoices.
///
/// `build()` derives the GST breakup from the items and the party state
/// codes, then validates the result. The returned [`Invoice`] is immutable.
///
/// ```
/// use bijak::core::*;
/// use chrono::NaiveDate;
/// use rust_decimal_macros::dec;
///
/// let company = CompanyProfile {
///     name: "SRI LAXMI NARASIMHA SWAMY WELDING WORKS".into(),
///     trade_line: Some("Trader: Column Boxes, Centring Boxes".into()),
///     address: "R.P Road, Secunderabad".into(),
///     email: "works@example.com".into(),
///     phone: "9394749715".into(),
///     gstin: "36ADSFS2351R1Z6".into(),
///     state_name: "Telangana".into(),
///     state_code: "36".into(),
///     bank: BankDetails {
///         bank_name: "UNION BANK OF INDIA".into(),
///         account_no: "050511100004632".into(),
///         branch: "R.P ROAD, SECUNDERABAD".into(),
///         ifsc_code: "UBIN0805050".into(),
///     },
/// };
///
/// let invoice = InvoiceBuilder::new("INV-2025-26/001", NaiveDate::from_ymd_opt(2025, 6, 15).unwrap())
///     .company(&company)
///     .buyer(PartyBuilder::new("VENKATA RAMANA CONSTRUCTIONS", "Plot 45, Industrial Area")
///         .state("Telangana", "36")
///         .build())
///     .add_item(LineItem::new("MS CENTRING SHEETS", "7308", dec!(100), dec!(73), "Kgs"))
///     .build()
///     .unwrap();
///
/// assert_eq!(invoice.breakup.grand_total, dec!(8614));
/// ```
pub struct InvoiceBuilder {
    number: String,
    date: NaiveDate,
    seller: Option<Party>,
    buyer: Option<Party>,
    items: Vec<LineItem>,
    delivery_address: Option<String>,
    destination: Option<String>,
    vehicle_number: Option<String>,
    payment_mode: PaymentMode,
    gst_rate: Decimal,
    bank: Option<BankDetails>,
}

impl InvoiceBuilder {
    pub fn new(number: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            number: number.into(),
            date,
            seller: None,
            buyer: None,
            items: Vec::new(),
            delivery_address: None,
            destination: None,
            vehicle_number: None,
            payment_mode: PaymentMode::Credit,
            gst_rate: DEFAULT_GST_RATE,
            bank: None,
        }
    }

    /// Set seller party and bank details from the company profile.
    pub fn company(mut self, profile: &CompanyProfile) -> Self {
        self.seller = Some(profile.as_party());
        self.bank = Some(profile.bank.clone());
        self
    }

    pub fn seller(mut self, party: Party) -> Self {
        self.seller = Some(party);
        self
    }

    pub fn buyer(mut self, party: Party) -> Self {
        self.buyer = Some(party);
        self
    }

    pub fn add_item(mut self, item: LineItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn delivery_address(mut self, address: impl Into<String>) -> Self {
        self.delivery_address = Some(address.into());
        self
    }

    pub fn destination(mut self, destination: impl Into<String>) -> Self {
        self.destination = Some(destination.into());
        self
    }

    pub fn vehicle_number(mut self, number: impl Into<String>) -> Self {
        self.vehicle_number = Some(number.into());
        self
    }

    pub fn payment_mode(mut self, mode: PaymentMode) -> Self {
        self.payment_mode = mode;
        self
    }

    /// Override the GST rate in percent (default 18).
    pub fn gst_rate(mut self, rate: Decimal) -> Self {
        self.gst_rate = rate;
        self
    }

    pub fn bank(mut self, bank: BankDetails) -> Self {
        self.bank = Some(bank);
        self
    }

    /// Build the invoice, computing the GST breakup and running validation.
    /// Validation reports all errors, not just the first.
    pub fn build(self) -> Result<Invoice, BijakError> {
        if self.items.is_empty() {
            return Err(BijakError::InvalidInput(
                "at least one line item is required".into(),
            ));
        }
        // Input limits to prevent abuse
        if self.items.len() > 10_000 {
            return Err(BijakError::InvalidInput(
                "invoice cannot have more than 10,000 line items".into(),
            ));
        }
        if self.number.len() > 200 {
            return Err(BijakError::InvalidInput(
                "invoice number cannot exceed 200 characters".into(),
            ));
        }

        let invoice = self.assemble()?;

        let errors = validation::validate_invoice(&invoice);
        if !errors.is_empty() {
            let msg = errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(BijakError::Validation(msg));
        }

        Ok(invoice)
    }

    /// Build without validation — useful for testing or importing external
    /// data. Unlike [`build`](Self::build), an empty item list is accepted
    /// and yields a degenerate all-zero breakup.
    pub fn build_unchecked(self) -> Result<Invoice, BijakError> {
        self.assemble()
    }

    fn assemble(self) -> Result<Invoice, BijakError> {
        let seller = self
            .seller
            .ok_or_else(|| BijakError::InvalidInput("seller is required".into()))?;
        let buyer = self
            .buyer
            .ok_or_else(|| BijakError::InvalidInput("buyer is required".into()))?;
        let bank = self
            .bank
            .ok_or_else(|| BijakError::InvalidInput("bank details are required".into()))?;

        let breakup = tax::compute_gst(
            self.items,
            &buyer.state_code,
            &seller.state_code,
            self.gst_rate,
        )?;

        Ok(Invoice {
            number: self.number,
            date: self.date,
            seller,
            buyer,
            delivery_address: self.delivery_address,
            destination: self.destination,
            vehicle_number: self.vehicle_number,
            payment_mode: self.payment_mode,
            breakup,
            bank,
        })
    }
}

/// Builder for a [`Party`] (seller or buyer).
pub struct PartyBuilder {
    name: String,
    address: String,
    city: Option<String>,
    state_name: String,
    state_code: String,
    gstin: Option<String>,
    phone: Option<String>,
    email: Option<String>,
}

impl PartyBuilder {
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            city: None,
            state_name: String::new(),
            state_code: String::new(),
            gstin: None,
            phone: None,
            email: None,
        }
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn state(mut self, name: impl Into<String>, code: impl Into<String>) -> Self {
        self.state_name = name.into();
        self.state_code = code.into();
        self
    }

    /// Set the state code alone, backfilling the state name from the GST
    /// state-code table when the code is known.
    pub fn state_code(mut self, code: impl Into<String>) -> Self {
        let code = code.into();
        if let Some(name) = states::state_name(&code) {
            self.state_name = name.to_string();
        }
        self.state_code = code;
        self
    }

    pub fn gstin(mut self, gstin: impl Into<String>) -> Self {
        self.gstin = Some(gstin.into());
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn build(self) -> Party {
        Party {
            name: self.name,
            address: self.address,
            city: self.city,
            state_name: self.state_name,
            state_code: self.state_code,
            gstin: self.gstin,
            phone: self.phone,
            email: self.email,
        }
    }
}

/// Builder for a [`LineItem`]. The amount is always derived from
/// quantity × rate; there is no setter for it.
pub struct LineItemBuilder {
    product_ref: Option<String>,
    description: String,
    hsn_code: String,
    quantity: Decimal,
    unit_rate: Decimal,
    uom: String,
}

impl LineItemBuilder {
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
        }
    }

    pub fn product_ref(mut self, id: impl Into<String>) -> Self {
        self.product_ref = Some(id.into());
        self
    }

    pub fn build(self) -> LineItem {
        let mut item = LineItem::new(
            self.description,
            self.hsn_code,
            self.quantity,
            self.unit_rate,
            self.uom,
        );
        item.product_ref = self.product_ref;
        item
    }
}
