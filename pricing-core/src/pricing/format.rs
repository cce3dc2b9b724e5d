//! Display formatting for prices.
//!
//! Only GBP has its own symbol; every other currency falls back to "$".
//! Real multi-currency display belongs to a locale-aware formatter.

pub fn currency_symbol(currency: &str) -> &'static str {
    match currency {
        "GBP" => "£",
        _ => "$",
    }
}

pub fn format_price(amount: f64, currency: &str) -> String {
    format!("{}{:.2}", currency_symbol(currency), amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_gbp() {
        assert_eq!(format_price(123.45, "GBP"), "£123.45");
        assert_eq!(format_price(144.0, "GBP"), "£144.00");
    }

    #[test]
    fn test_format_fallback() {
        assert_eq!(format_price(72.0, "USD"), "$72.00");
        assert_eq!(format_price(72.0, "EUR"), "$72.00");
    }
}
