use chrono::NaiveDate;
use fatoora::core::*;
use rust_decimal_macros::dec;

fn main() {
    // A simplified (B2C) sale at a service centre
    let issued = NaiveDate::from_ymd_opt(2024, 6, 15)
        .unwrap()
        .and_hms_opt(10, 30, 0)
        .unwrap();
    let invoice = InvoiceBuilder::new("INV-2024-0001", "3cf5ee18-ee25-44ea-a444-2c37ba7f28be", issued)
        .seller("مركز الخدمة السريعة", "300123456700003")
        .customer("Fahad Al-Harbi")
        .add_item(InvoiceItem::new("Brake Pads", dec!(2), dec!(100)))
        .add_item(InvoiceItem::new("Wiper Blade", dec!(1), dec!(50)))
        .add_item(InvoiceItem::new("Engine Oil (L)", dec!(4.5), dec!(18.40)))
        .build()
        .expect("invoice should be valid");

    let totals = calculate_totals(&invoice.items);
    println!("Invoice: {}", invoice.number);
    println!("Issued:  {} {}", invoice.issue_date, invoice.issue_time);
    println!("Seller:  {} ({})", invoice.seller_name, invoice.vat_number);
    println!(
        "Buyer:   {}",
        invoice.customer_name.as_deref().unwrap_or("-")
    );
    println!("---");
    for item in &invoice.items {
        println!(
            "  {} x {} @ {} = {} (+{} VAT)",
            format_quantity(item.quantity),
            item.name,
            format_amount(item.price),
            format_amount(line_extension_amount(item)),
            format_amount(line_tax_amount(item)),
        );
    }
    println!("---");
    println!("Subtotal: {} {}", format_amount(totals.subtotal), invoice.currency);
    println!("VAT 15%:  {} {}", format_amount(totals.vat), invoice.currency);
    println!("Total:    {} {}", format_amount(totals.total), invoice.currency);
}
