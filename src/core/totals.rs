use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use super::types::{InvoiceItem, InvoiceTotals};

/// Standard VAT rate applied to every line.
pub const VAT_RATE: Decimal = dec!(0.15);

/// `VAT_RATE` as a percentage, as written into the tax category blocks.
pub const VAT_RATE_PERCENT: Decimal = dec!(15);

/// Net amount of one line: `price * quantity`, unrounded.
pub fn line_extension_amount(item: &InvoiceItem) -> Decimal {
    item.price * item.quantity
}

/// VAT on one line: `price * quantity * VAT_RATE`, unrounded.
pub fn line_tax_amount(item: &InvoiceItem) -> Decimal {
    line_extension_amount(item) * VAT_RATE
}

/// Calculate subtotal, VAT and grand total for a set of items.
///
/// Nothing is rounded here; rounding happens only when amounts are rendered as text
/// (see [`format_amount`]). An empty slice yields all zeros. Negative prices and
/// quantities are accepted arithmetically.
pub fn calculate_totals(items: &[InvoiceItem]) -> InvoiceTotals {
    let subtotal: Decimal = items.iter().map(line_extension_amount).sum();
    let vat = subtotal * VAT_RATE;

    InvoiceTotals {
        subtotal,
        vat,
        total: subtotal + vat,
    }
}

/// Checked variant of [`calculate_totals`].
///
/// Returns `None` when any line amount, the subtotal, the VAT or the total cannot
/// be represented as a `Decimal`. Validation runs this so that the infallible
/// arithmetic above never sees an invoice it would overflow on.
pub fn checked_totals(items: &[InvoiceItem]) -> Option<InvoiceTotals> {
    let mut subtotal = Decimal::ZERO;
    for item in items {
        let net = item.price.checked_mul(item.quantity)?;
        net.checked_mul(VAT_RATE)?;
        subtotal = subtotal.checked_add(net)?;
    }
    let vat = subtotal.checked_mul(VAT_RATE)?;
    let total = subtotal.checked_add(vat)?;

    Some(InvoiceTotals {
        subtotal,
        vat,
        total,
    })
}

/// Render a monetary amount as two-decimal fixed-point text.
///
/// Midpoints round away from zero, so `0.125` becomes `"0.13"`.
pub fn format_amount(amount: Decimal) -> String {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded.to_string()
}

/// Render a quantity in its natural form: `1` stays `"1"`, `2.50` becomes `"2.5"`.
pub fn format_quantity(quantity: Decimal) -> String {
    quantity.normalize().to_string()
}
