use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rust_decimal_macros::dec;

use fatoora::core::*;
use fatoora::crypto::{PrivateKey, digest_invoice};
use fatoora::pipeline::{InvoiceChain, PackageOptions, create_invoice_package_with};
use fatoora::qr::decode_qr_payload;
use fatoora::ubl::build_invoice_xml;

const KEY_HEX: &str = "9c96dbe9a5a80482d598ad0090e4183927093b0267a9e2873f6405e48e3308f0";

fn build_invoice(lines: usize) -> Invoice {
    let issued = NaiveDate::from_ymd_opt(2024, 6, 15)
        .unwrap()
        .and_hms_opt(10, 30, 0)
        .unwrap();
    let mut builder = InvoiceBuilder::new("BENCH-001", "3cf5ee18-ee25-44ea-a444-2c37ba7f28be", issued)
        .seller("Benchmark Trading", "3001234567")
        .customer("Walk-in");

    for i in 1..=lines {
        builder = builder.add_item(InvoiceItem::new(format!("Item {i}"), dec!(2), dec!(9.99)));
    }

    builder.build().unwrap()
}

fn bench_calculate_totals(c: &mut Criterion) {
    let invoice = build_invoice(10);
    c.bench_function("calculate_totals_10_lines", |b| {
        b.iter(|| black_box(calculate_totals(black_box(&invoice.items))));
    });
}

fn bench_ubl_serialize(c: &mut Criterion) {
    let invoice = build_invoice(10);
    c.bench_function("ubl_serialize", |b| {
        b.iter(|| black_box(build_invoice_xml(black_box(&invoice))));
    });
}

fn bench_ubl_serialize_1000_lines(c: &mut Criterion) {
    let invoice = build_invoice(1000);
    c.bench_function("ubl_serialize_1000_lines", |b| {
        b.iter(|| black_box(build_invoice_xml(black_box(&invoice))));
    });
}

fn bench_hash_and_sign(c: &mut Criterion) {
    let invoice = build_invoice(10);
    let xml = build_invoice_xml(&invoice).unwrap();
    let key = PrivateKey::parse(KEY_HEX).unwrap();

    c.bench_function("digest_invoice", |b| {
        b.iter(|| black_box(digest_invoice(black_box(&xml))));
    });

    let hash = digest_invoice(&xml);
    c.bench_function("sign_hash", |b| {
        b.iter(|| black_box(key.sign(black_box(&hash))));
    });
}

fn bench_full_package(c: &mut Criterion) {
    let invoice = build_invoice(10);
    let key = PrivateKey::parse(KEY_HEX).unwrap();
    let options = PackageOptions::new();

    c.bench_function("create_invoice_package", |b| {
        b.iter(|| black_box(create_invoice_package_with(black_box(&invoice), &key, &options)));
    });

    let package = create_invoice_package_with(&invoice, &key, &options).unwrap();
    c.bench_function("decode_qr_payload", |b| {
        b.iter(|| black_box(decode_qr_payload(black_box(&package.qr))));
    });
}

fn bench_chain_100_invoices(c: &mut Criterion) {
    let invoice = build_invoice(2);
    let key = PrivateKey::parse(KEY_HEX).unwrap();
    let options = PackageOptions::new();

    c.bench_function("chain_issue_100_invoices", |b| {
        b.iter(|| {
            let mut chain = InvoiceChain::new();
            for _ in 0..100 {
                black_box(chain.issue(invoice.clone(), &key, &options).unwrap());
            }
        });
    });
}

criterion_group!(
    benches,
    bench_calculate_totals,
    bench_ubl_serialize,
    bench_ubl_serialize_1000_lines,
    bench_hash_and_sign,
    bench_full_package,
    bench_chain_100_invoices,
);
criterion_main!(benches);
