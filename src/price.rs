//! Median price resolution for a card's printing in a specific set.

use crate::models::RawCard;

/// Sentinel embedded in the output when no price can be resolved.
///
/// This is a user-visible value, not a failure: a missing printing or a
/// printing without market data still gets its row.
pub const UNRESOLVED: &str = "Error";

/// Basic lands are bulk; their market value is pinned regardless of what the
/// API reports.
const BASIC_LANDS: [&str; 5] = ["Plains", "Island", "Swamp", "Mountain", "Forest"];
const BASIC_LAND_PRICE: &str = "0.10";

/// Resolve the median price of `card`'s printing in `set_id`.
///
/// The set match is case-insensitive and exact. Returns a two-decimal dollar
/// string with thousands separators, or [`UNRESOLVED`].
pub fn resolve(set_id: &str, card: &RawCard) -> String {
    if BASIC_LANDS.contains(&card.name.as_str()) {
        return BASIC_LAND_PRICE.to_string();
    }
    card.edition_in(set_id)
        .and_then(|e| e.price.as_ref())
        .and_then(|p| p.median)
        .map(format_cents)
        .unwrap_or_else(|| UNRESOLVED.to_string())
}

/// `2050` cents -> `"20.50"`, `123456` -> `"1,234.56"`.
pub fn format_cents(cents: i64) -> String {
    let dollars = cents / 100;
    let fraction = cents % 100;
    let digits = dollars.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, d) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(d);
    }
    format!("{grouped}.{fraction:02}")
}
