use bijak::core::*;
use bijak::words::amount_in_words;
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

    let mut sequence =
        InvoiceNumberSequence::new("INV-", NaiveDate::from_ymd_opt(2025, 6, 15).unwrap());

    let invoice = InvoiceBuilder::new(
        sequence.next_number(),
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap(),
    )
    .company(&company)
    .buyer(
        PartyBuilder::new(
            "VENKATA RAMANA CONSTRUCTIONS",
            "Plot No. 45, Industrial Area, Secunderabad",
        )
        .state("Telangana", "36")
        .gstin("36ABCDE1234F1Z5")
        .phone("9123456789")
        .build(),
    )
    .add_item(LineItem::new("MS CENTRING SHEETS", "7308", dec!(100), dec!(73), "Kgs"))
    .add_item(LineItem::new("U JACK", "7308", dec!(10), dec!(150), "Pcs"))
    .destination("SECUNDERABAD")
    .payment_mode(PaymentMode::Credit)
    .build()
    .expect("invoice should build");

    let b = &invoice.breakup;
    println!("Invoice {}", invoice.number);
    println!("  Subtotal:    {:>12}", b.subtotal);
    println!("  CGST:        {:>12}", b.cgst);
    println!("  SGST:        {:>12}", b.sgst);
    println!("  IGST:        {:>12}", b.igst);
    println!("  Grand total: {:>12}", b.grand_total);
    println!("  In words:    {}", amount_in_words(b.grand_total));
}
