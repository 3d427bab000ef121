use rust_decimal::Decimal;

use super::error::ValidationError;
use super::totals::{VAT_RATE, checked_totals};
use super::types::*;

/// Check the structural preconditions of an invoice.
///
/// Only shape is checked here: at least one item, named items, positive quantities,
/// non-negative prices, and amounts that fit in a `Decimal`. Returns all violations
/// found (not just the first).
pub fn validate_invoice(invoice: &Invoice) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if invoice.items.is_empty() {
        errors.push(ValidationError::new(
            "items",
            "invoice must contain at least one item",
        ));
    }

    for (i, item) in invoice.items.iter().enumerate() {
        validate_item(item, i, &mut errors);
    }

    if errors.is_empty() && checked_totals(&invoice.items).is_none() {
        errors.push(ValidationError::new(
            "items",
            "invoice amounts exceed the representable decimal range",
        ));
    }

    errors
}

fn validate_item(item: &InvoiceItem, index: usize, errors: &mut Vec<ValidationError>) {
    let prefix = format!("items[{index}]");

    if item.name.trim().is_empty() {
        errors.push(ValidationError::new(
            format!("{prefix}.name"),
            "item name must not be empty",
        ));
    }

    if item.quantity <= Decimal::ZERO {
        errors.push(ValidationError::new(
            format!("{prefix}.quantity"),
            format!("quantity must be greater than zero, got {}", item.quantity),
        ));
    }

    if item.price < Decimal::ZERO {
        errors.push(ValidationError::new(
            format!("{prefix}.price"),
            format!("price must not be negative, got {}", item.price),
        ));
    }

    let representable = item
        .price
        .checked_mul(item.quantity)
        .and_then(|net| net.checked_mul(VAT_RATE))
        .is_some();
    if !representable {
        errors.push(ValidationError::new(
            format!("{prefix}.price"),
            format!(
                "price {} x quantity {} exceeds the representable decimal range",
                item.price, item.quantity
            ),
        ));
    }
}
