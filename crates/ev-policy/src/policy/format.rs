use num_format::{Locale, ToFormattedString};

/// Whole-dollar amount with thousands separators, e.g. `$390,000,000`.
pub(crate) fn usd(amount: f64) -> String {
    let whole = if amount.is_finite() {
        amount.round_ties_even().max(0.0) as u64
    } else {
        0
    };
    format!("${}", whole.to_formatted_string(&Locale::en))
}

pub(crate) fn count<T: ToFormattedString>(value: T) -> String {
    value.to_formatted_string(&Locale::en)
}
