#![cfg(feature = "core")]

use chrono::{NaiveDate, NaiveDateTime};
use fatoora::core::*;
use rust_decimal_macros::dec;

fn issued() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 15)
        .unwrap()
        .and_hms_opt(10, 30, 0)
        .unwrap()
}

fn builder() -> InvoiceBuilder {
    InvoiceBuilder::new("INV-0001", "3cf5ee18-ee25-44ea-a444-2c37ba7f28be", issued())
        .seller("Acme", "3001234567")
}

// --- Totals ---

#[test]
fn reference_totals() {
    let inv = builder()
        .add_item(InvoiceItem::new("Brake Pads", dec!(2), dec!(100)))
        .add_item(InvoiceItem::new("Wiper", dec!(1), dec!(50)))
        .build()
        .unwrap();

    let totals = calculate_totals(&inv.items);
    assert_eq!(totals.subtotal, dec!(250));
    assert_eq!(totals.vat, dec!(37.5));
    assert_eq!(totals.total, dec!(287.5));
}

#[test]
fn end_to_end_scenario_totals() {
    let inv = builder()
        .add_item(InvoiceItem::new("Oil Filter", dec!(1), dec!(25)))
        .build()
        .unwrap();

    let totals = calculate_totals(&inv.items);
    assert_eq!(format_amount(totals.subtotal), "25.00");
    assert_eq!(format_amount(totals.vat), "3.75");
    assert_eq!(format_amount(totals.total), "28.75");
}

#[test]
fn per_line_amounts_sum_to_totals() {
    let items = vec![
        InvoiceItem::new("A", dec!(3), dec!(19.99)),
        InvoiceItem::new("B", dec!(0.5), dec!(7.10)),
        InvoiceItem::new("C", dec!(12), dec!(0.01)),
    ];
    let totals = calculate_totals(&items);
    let net: rust_decimal::Decimal = items.iter().map(line_extension_amount).sum();
    let tax: rust_decimal::Decimal = items.iter().map(line_tax_amount).sum();
    assert_eq!(net, totals.subtotal);
    assert_eq!(tax, totals.vat);
}

#[test]
fn fractional_quantity() {
    let totals = calculate_totals(&[InvoiceItem::new("Fuel", dec!(12.5), dec!(2.18))]);
    // 27.25 net, 4.0875 VAT
    assert_eq!(totals.subtotal, dec!(27.25));
    assert_eq!(totals.vat, dec!(4.0875));
    assert_eq!(format_amount(totals.vat), "4.09");
    assert_eq!(format_amount(totals.total), "31.34");
}

#[test]
fn discount_is_reserved() {
    let plain = builder()
        .add_item(InvoiceItem::new("Oil Filter", dec!(1), dec!(25)))
        .build()
        .unwrap();
    let discounted = builder()
        .discount(dec!(5))
        .add_item(InvoiceItem::new("Oil Filter", dec!(1), dec!(25)))
        .build()
        .unwrap();
    assert_eq!(
        calculate_totals(&plain.items),
        calculate_totals(&discounted.items)
    );
}

// --- Validation ---

#[test]
fn validation_errors_collected() {
    let err = builder()
        .add_item(InvoiceItem::new("", dec!(-1), dec!(-2)))
        .build()
        .unwrap_err();
    match err {
        FatooraError::Validation(msg) => {
            assert!(msg.contains("items[0].name"));
            assert!(msg.contains("items[0].quantity"));
            assert!(msg.contains("items[0].price"));
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn validation_error_display() {
    let e = ValidationError::new("items", "invoice must contain at least one item");
    assert_eq!(e.to_string(), "items: invoice must contain at least one item");
}

// --- Serialization ---

#[test]
fn invoice_serde_round_trip() {
    let inv = builder()
        .customer("Fahad Al-Harbi")
        .previous_invoice_hash("NWZl")
        .counter(3)
        .add_item(InvoiceItem::new("Oil Filter", dec!(1), dec!(25)))
        .build()
        .unwrap();

    let json = serde_json::to_string(&inv).unwrap();
    assert!(json.contains("\"price\":\"25\""));
    let back: Invoice = serde_json::from_str(&json).unwrap();
    assert_eq!(back, inv);
}
