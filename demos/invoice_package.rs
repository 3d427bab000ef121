use chrono::NaiveDate;
use fatoora::core::*;
use fatoora::pipeline::create_invoice_package;
use fatoora::qr::decode_qr_payload;
use rust_decimal_macros::dec;

// Demo key only. Production keys come from the device's key store.
const DEMO_KEY: &str = "9c96dbe9a5a80482d598ad0090e4183927093b0267a9e2873f6405e48e3308f0";

fn main() {
    let issued = NaiveDate::from_ymd_opt(2024, 6, 15)
        .unwrap()
        .and_hms_opt(10, 30, 0)
        .unwrap();
    let invoice = InvoiceBuilder::new("INV-0001", "3cf5ee18-ee25-44ea-a444-2c37ba7f28be", issued)
        .seller("Acme", "3001234567")
        .add_item(InvoiceItem::new("Oil Filter", dec!(1), dec!(25)))
        .build()
        .expect("invoice should be valid");

    let package = create_invoice_package(&invoice, DEMO_KEY).expect("pipeline should succeed");

    println!("=== XML ({} bytes) ===", package.xml.len());
    println!("{}", package.xml);
    println!("\n=== Hash ===\n{}", package.hash);
    println!("\n=== Signature ===\n{}", package.signature);
    println!("\n=== QR payload ===\n{}", package.qr);

    let fields = decode_qr_payload(&package.qr).expect("payload should decode");
    println!("\n=== QR fields ===");
    println!("  1 seller:      {}", fields.seller_name);
    println!("  2 VAT number:  {}", fields.vat_number);
    println!("  3 timestamp:   {}", fields.timestamp);
    println!("  4 total:       {}", format_amount(fields.total));
    println!("  5 VAT:         {}", format_amount(fields.vat));
    println!("  8 public key:  {}", fields.public_key);
}
