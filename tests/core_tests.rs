use bijak::core::*;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn company() -> CompanyProfile {
    CompanyProfile {
        name: "SRI LAXMI NARASIMHA SWAMY WELDING WORKS".into(),
        trade_line: Some("Trader: Column Boxes, Centring Boxes".into()),
        address: "R.P Road, Secunderabad".into(),
        email: "works@example.com".into(),
        phone: "9394749715".into(),
        gstin: "36ADSFS2351R1Z6".into(),
        state_name: "Telangana".into(),
        state_code: "36".into(),
        bank: BankDetails {
            bank_name: "UNION BANK OF INDIA".into(),
            account_no: "050511100004632".into(),
            branch: "R.P ROAD, SECUNDERABAD".into(),
            ifsc_code: "UBIN0805050".into(),
        },
    }
}

fn local_buyer() -> Party {
    PartyBuilder::new("VENKATA RAMANA CONSTRUCTIONS", "Plot No. 45, Industrial Area")
        .state("Telangana", "36")
        .gstin("36ABCDE1234F1Z5")
        .phone("9123456789")
        .build()
}

fn remote_buyer() -> Party {
    PartyBuilder::new("SAI TEJA PROJECTS", "MVV Harmony, Yendada, Visakhapatnam")
        .state("Andhra Pradesh", "37")
        .gstin("37BTIPP0332G1ZS")
        .build()
}

fn sheets(qty: u32) -> LineItem {
    LineItem::new("MS CENTRING SHEETS", "7308", Decimal::from(qty), dec!(73), "Kgs")
}

// --- Builder ---

#[test]
fn builds_intra_state_invoice() {
    let invoice = InvoiceBuilder::new("INV-2025-26/001", date(2025, 6, 15))
        .company(&company())
        .buyer(local_buyer())
        .add_item(sheets(100))
        .destination("SECUNDERABAD")
        .payment_mode(PaymentMode::Credit)
        .build()
        .unwrap();

    assert_eq!(invoice.breakup.gst_type, GstType::Split);
    assert_eq!(invoice.breakup.subtotal, dec!(7300));
    assert_eq!(invoice.breakup.cgst, dec!(657));
    assert_eq!(invoice.breakup.sgst, dec!(657));
    assert_eq!(invoice.breakup.igst, dec!(0));
    assert_eq!(invoice.breakup.grand_total, dec!(8614));
    assert_eq!(invoice.bank.ifsc_code, "UBIN0805050");
}

#[test]
fn builds_inter_state_invoice() {
    let invoice = InvoiceBuilder::new("INV-2025-26/002", date(2025, 6, 16))
        .company(&company())
        .buyer(remote_buyer())
        .add_item(sheets(100))
        .build()
        .unwrap();

    assert_eq!(invoice.breakup.gst_type, GstType::Integrated);
    assert_eq!(invoice.breakup.igst, dec!(1314));
    assert_eq!(invoice.breakup.cgst, dec!(0));
    assert_eq!(invoice.breakup.sgst, dec!(0));
    assert_eq!(invoice.breakup.grand_total, dec!(8614));
}

#[test]
fn multi_item_subtotal() {
    let invoice = InvoiceBuilder::new("INV-2025-26/003", date(2025, 6, 17))
        .company(&company())
        .buyer(local_buyer())
        .add_item(
            LineItemBuilder::new("VERTICAL PIPES", "7308", dec!(40), dec!(75), "Kgs")
                .product_ref("2")
                .build(),
        )
        .add_item(LineItem::new("U JACK", "7308", dec!(10), dec!(150), "Pcs"))
        .build()
        .unwrap();

    assert_eq!(invoice.breakup.items[0].product_ref.as_deref(), Some("2"));
    assert_eq!(invoice.breakup.items[0].amount, dec!(3000));

    // 40*75 + 10*150 = 4500
    assert_eq!(invoice.breakup.subtotal, dec!(4500));
    assert_eq!(invoice.breakup.cgst, dec!(405));
    assert_eq!(invoice.breakup.total_tax, dec!(810));
}

#[test]
fn build_requires_items_seller_buyer() {
    let err = InvoiceBuilder::new("INV-2025-26/004", date(2025, 6, 17))
        .company(&company())
        .buyer(local_buyer())
        .build()
        .unwrap_err();
    assert!(matches!(err, BijakError::InvalidInput(_)));

    let err = InvoiceBuilder::new("INV-2025-26/004", date(2025, 6, 17))
        .buyer(local_buyer())
        .add_item(sheets(1))
        .build()
        .unwrap_err();
    assert!(matches!(err, BijakError::InvalidInput(_)));
}

#[test]
fn build_unchecked_allows_degenerate_empty_invoice() {
    let invoice = InvoiceBuilder::new("INV-2025-26/005", date(2025, 6, 17))
        .company(&company())
        .buyer(local_buyer())
        .build_unchecked()
        .unwrap();
    assert_eq!(invoice.breakup.subtotal, dec!(0));
    assert_eq!(invoice.breakup.grand_total, dec!(0));
}

// --- Validation ---

#[test]
fn validation_collects_all_errors() {
    let mut invoice = InvoiceBuilder::new("INV-2025-26/006", date(2025, 6, 17))
        .company(&company())
        .buyer(local_buyer())
        .add_item(sheets(1))
        .build_unchecked()
        .unwrap();
    invoice.number = "  ".into();
    invoice.buyer.name = String::new();
    invoice.buyer.state_code = "360".into();

    let errors = validate_invoice(&invoice);
    let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
    assert!(fields.contains(&"number"));
    assert!(fields.contains(&"buyer.name"));
    assert!(fields.contains(&"buyer.state_code"));
}

#[test]
fn validation_rejects_drifted_amount() {
    let mut invoice = InvoiceBuilder::new("INV-2025-26/007", date(2025, 6, 17))
        .company(&company())
        .buyer(local_buyer())
        .add_item(sheets(100))
        .build_unchecked()
        .unwrap();
    invoice.breakup.items[0].amount = dec!(9999);

    let errors = validate_invoice(&invoice);
    assert!(errors.iter().any(|e| e.field == "items[0].amount"));
    // subtotal no longer matches the tampered amount either
    assert!(errors.iter().any(|e| e.field == "breakup.subtotal"));
}

#[test]
fn validation_rejects_gstin_mismatch() {
    let mut buyer = local_buyer();
    buyer.gstin = Some("37ABCDE1234F1Z5".into()); // prefix disagrees with state 36
    let invoice = InvoiceBuilder::new("INV-2025-26/008", date(2025, 6, 17))
        .company(&company())
        .buyer(buyer)
        .add_item(sheets(1))
        .build_unchecked()
        .unwrap();

    let errors = validate_invoice(&invoice);
    assert!(errors.iter().any(|e| e.field == "buyer.gstin"));
}

#[test]
fn validation_rejects_missing_seller_gstin() {
    let mut invoice = InvoiceBuilder::new("INV-2025-26/009", date(2025, 6, 17))
        .company(&company())
        .buyer(local_buyer())
        .add_item(sheets(1))
        .build_unchecked()
        .unwrap();
    invoice.seller.gstin = None;

    let errors = validate_invoice(&invoice);
    assert!(errors.iter().any(|e| e.field == "seller.gstin"));
}

#[test]
fn builder_surfaces_validation_failures() {
    let mut buyer = local_buyer();
    buyer.state_code = "XX".into();
    // compute_gst accepts any non-empty code; validation rejects the shape
    let err = InvoiceBuilder::new("INV-2025-26/010", date(2025, 6, 17))
        .company(&company())
        .buyer(buyer)
        .add_item(sheets(1))
        .build()
        .unwrap_err();
    assert!(matches!(err, BijakError::Validation(_)));
}

// --- Grand-total echo ---

#[test]
fn grand_total_is_never_recomputed_downstream() {
    let invoice = InvoiceBuilder::new("INV-2025-26/011", date(2025, 6, 17))
        .company(&company())
        .buyer(local_buyer())
        .add_item(sheets(100))
        .build()
        .unwrap();

    let b = &invoice.breakup;
    assert_eq!(b.grand_total, b.subtotal + b.total_tax);
    assert_eq!(b.total_tax, b.cgst + b.sgst + b.igst);
}

// --- Party builder ---

#[test]
fn state_code_backfills_state_name() {
    let party = PartyBuilder::new("SAI TEJA PROJECTS", "Visakhapatnam")
        .state_code("37")
        .build();
    assert_eq!(party.state_name, "Andhra Pradesh");

    // unknown codes leave the name alone for validation to flag
    let party = PartyBuilder::new("UNKNOWN", "Nowhere").state_code("99").build();
    assert_eq!(party.state_name, "");
}

// --- Payment modes ---

#[test]
fn payment_mode_labels_round_trip() {
    for mode in [
        PaymentMode::Credit,
        PaymentMode::Cash,
        PaymentMode::Upi,
        PaymentMode::BankTransfer,
    ] {
        assert_eq!(PaymentMode::from_label(mode.label()), Some(mode));
    }
    assert_eq!(PaymentMode::from_label("CHEQUE"), None);
}
