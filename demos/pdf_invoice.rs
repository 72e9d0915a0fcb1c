use bijak::core::*;
use bijak::pdf;
use chrono::NaiveDate;
use rust_decimal_macros::dec;

fn main() {
    let company = CompanyProfile {
        name: "SRI LAXMI NARASIMHA SWAMY WELDING WORKS".into(),
        trade_line: Some("Trader: Column Boxes, Centring Boxes".into()),
        address: "R.P Road, Secunderabad".into(),
        email: "works@example.com".into(),
        phone: "9394749715, 9989989638".into(),
        gstin: "36ADSFS2351R1Z6".into(),
        state_name: "Telangana".into(),
        state_code: "36".into(),
        bank: BankDetails {
            bank_name: "UNION BANK OF INDIA".into(),
            account_no: "050511100004632".into(),
            branch: "R.P ROAD, SECUNDERABAD".into(),
            ifsc_code: "UBIN0805050".into(),
        },
    };

    let invoice = InvoiceBuilder::new(
        "INV-2025-26/001",
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap(),
    )
    .company(&company)
    .buyer(
        PartyBuilder::new(
            "SAI TEJA PROJECTS",
            "MVV Harmony, Flat No:204, Yendada, Visakhapatnam",
        )
        .state("Andhra Pradesh", "37")
        .gstin("37BTIPP0332G1ZS")
        .build(),
    )
    .add_item(LineItem::new("MS CENTRING SHEETS", "7308", dec!(100), dec!(73), "Kgs"))
    .destination("VISAKHAPATNAM")
    .vehicle_number("TS09AB1234")
    .payment_mode(PaymentMode::BankTransfer)
    .build()
    .expect("invoice should build");

    let path = pdf::save_invoice(&invoice, &company, ".").expect("export should succeed");
    println!("Wrote {}", path.display());
}
