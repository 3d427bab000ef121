use chrono::NaiveDate;
use fatoora::core::*;
use fatoora::crypto::PrivateKey;
use fatoora::pipeline::{ChainLink, InvoiceChain, PackageOptions, verify_chain};
use rust_decimal_macros::dec;

const DEMO_KEY: &str = "9c96dbe9a5a80482d598ad0090e4183927093b0267a9e2873f6405e48e3308f0";

fn sale(n: u32) -> Invoice {
    let issued = NaiveDate::from_ymd_opt(2024, 6, 15)
        .unwrap()
        .and_hms_opt(9 + n, 0, 0)
        .unwrap();
    InvoiceBuilder::new(format!("INV-{n:04}"), format!("00000000-0000-4000-8000-{n:012}"), issued)
        .seller("Acme", "3001234567")
        .add_item(InvoiceItem::new("Oil Filter", dec!(1), dec!(25) * rust_decimal::Decimal::from(n)))
        .build()
        .expect("invoice should be valid")
}

fn main() {
    let key = PrivateKey::parse(DEMO_KEY).expect("demo key should parse");
    let options = PackageOptions::new();
    let mut chain = InvoiceChain::new();

    println!("Seed hash: {}", chain.previous_hash());

    let mut issued = Vec::new();
    for n in 1..=3 {
        let (invoice, package) = chain.issue(sale(n), &key, &options).expect("issue");
        println!(
            "#{} {}  PIH={}  hash={}",
            invoice.counter.unwrap_or_default(),
            invoice.number,
            invoice.previous_invoice_hash.as_deref().unwrap_or("-"),
            package.hash
        );
        issued.push((invoice, package));
    }

    let links: Vec<ChainLink<'_>> = issued
        .iter()
        .map(|(invoice, package)| ChainLink { invoice, package })
        .collect();
    println!("\nChain intact: {}", verify_chain(&links, &key.public_key()).is_ok());

    // Retroactively edit the second invoice
    issued[1].0.items[0].price = dec!(1);
    let links: Vec<ChainLink<'_>> = issued
        .iter()
        .map(|(invoice, package)| ChainLink { invoice, package })
        .collect();
    match verify_chain(&links, &key.public_key()) {
        Ok(()) => println!("After edit: chain still verifies"),
        Err(e) => println!("After edit: {e}"),
    }
}
