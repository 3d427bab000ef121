use fatoora::core::format_amount;
use fatoora::qr::{decode_qr_payload, decode_qr_records};

fn main() {
    // Pass a base64 QR payload as the first argument, or decode a built-in sample.
    let payload = std::env::args().nth(1).unwrap_or_else(|| {
        "AQRBY21lAgozMDAxMjM0NTY3AxQyMDI0LTA2LTE1VDEwOjMwOjAwWgQFMjguNzUFBDMuNzUGBWhhc2g9BwIzMAgCcGsJAA==".into()
    });

    match decode_qr_records(&payload) {
        Ok(records) => {
            println!("=== {} TLV records ===", records.len());
            for record in &records {
                match record.value_str() {
                    Ok(text) => println!("  tag {:>2} ({:>3} bytes): {}", record.tag, record.value.len(), text),
                    Err(_) => println!("  tag {:>2} ({:>3} bytes): <binary>", record.tag, record.value.len()),
                }
            }
        }
        Err(e) => {
            println!("Not a TLV payload: {e}");
            return;
        }
    }

    match decode_qr_payload(&payload) {
        Ok(fields) => {
            println!("\nSeller: {} ({})", fields.seller_name, fields.vat_number);
            println!("Time:   {}", fields.timestamp);
            println!("Total:  {} (VAT {})", format_amount(fields.total), format_amount(fields.vat));
        }
        Err(e) => println!("\nIncomplete invoice QR: {e}"),
    }
}
