use chrono::NaiveDate;
use fatoora::core::*;
use fatoora::pipeline::create_invoice_package;
use fatoora::qr::decode_qr_payload;
use rust_decimal_macros::dec;

const DEMO_KEY: &str = "9c96dbe9a5a80482d598ad0090e4183927093b0267a9e2873f6405e48e3308f0";

fn builder() -> InvoiceBuilder {
    let issued = NaiveDate::from_ymd_opt(2024, 6, 15)
        .unwrap()
        .and_hms_opt(10, 30, 0)
        .unwrap();
    InvoiceBuilder::new("INV-0001", "3cf5ee18-ee25-44ea-a444-2c37ba7f28be", issued)
}

fn main() {
    // ── 1. Builder error: missing seller ──────────────────────────────
    println!("=== Builder Error ===");
    match builder()
        .add_item(InvoiceItem::new("Oil Filter", dec!(1), dec!(25)))
        .build()
    {
        Ok(_) => println!("  unexpectedly built"),
        Err(e) => println!("  {e}"),
    }

    // ── 2. Validation errors are collected, not first-only ───────────
    println!("\n=== Validation Errors ===");
    let invoice = builder()
        .seller("Acme", "3001234567")
        .add_item(InvoiceItem::new(" ", dec!(0), dec!(-5)))
        .build_unchecked()
        .expect("seller is set");
    for e in validate_invoice(&invoice) {
        println!("  {e}");
    }

    // ── 3. Malformed key aborts before anything is signed ─────────────
    println!("\n=== Key Format Error ===");
    let valid = builder()
        .seller("Acme", "3001234567")
        .add_item(InvoiceItem::new("Oil Filter", dec!(1), dec!(25)))
        .build()
        .expect("invoice should be valid");
    match create_invoice_package(&valid, "not-a-key") {
        Err(FatooraError::KeyFormat(msg)) => println!("  rejected: {msg}"),
        other => println!("  unexpected: {other:?}"),
    }

    // ── 4. Oversized QR field ─────────────────────────────────────────
    println!("\n=== Encoding Error ===");
    let mut huge = valid.clone();
    huge.seller_name = "X".repeat(70_000);
    match create_invoice_package(&huge, DEMO_KEY) {
        Err(e @ FatooraError::Encoding(_)) => println!("  {e}"),
        other => println!("  unexpected: {other:?}"),
    }

    // ── 5. Truncated QR payload ───────────────────────────────────────
    println!("\n=== Decode Error ===");
    match decode_qr_payload("AQRBY21l") {
        Ok(fields) => println!("  decoded: {fields:?}"),
        Err(e) => println!("  {e}"),
    }
}
