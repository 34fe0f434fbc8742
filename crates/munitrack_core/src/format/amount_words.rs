//! Check-writing amount rendering.
//!
//! # Responsibility
//! - Render monetary amounts as uppercase words for receipts, vouchers and
//!   certificates.
//! - Provide the comma-grouped display form used by report tables.
//!
//! # Invariants
//! - Output is single-spaced and trimmed.
//! - The fractional part keeps the literal decimal digits of the amount's
//!   shortest display form: `1234.5` renders `AND 5/100`, matching the
//!   documents the treasury office already issues.

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

const ONES: [&str; 20] = [
    "", "ONE", "TWO", "THREE", "FOUR", "FIVE", "SIX", "SEVEN", "EIGHT", "NINE", "TEN", "ELEVEN",
    "TWELVE", "THIRTEEN", "FOURTEEN", "FIFTEEN", "SIXTEEN", "SEVENTEEN", "EIGHTEEN", "NINETEEN",
];
const TENS: [&str; 10] = [
    "", "", "TWENTY", "THIRTY", "FORTY", "FIFTY", "SIXTY", "SEVENTY", "EIGHTY", "NINETY",
];
const SCALES: [&str; 7] = [
    "",
    "THOUSAND",
    "MILLION",
    "BILLION",
    "TRILLION",
    "QUADRILLION",
    "QUINTILLION",
];

/// Renders a monetary amount as uppercase check-writing words.
///
/// `1234.5` renders `ONE THOUSAND TWO HUNDRED THIRTY FOUR AND 5/100`.
/// A whole amount renders `AND 00/100`; zero renders `ZERO AND 00/100`.
pub fn amount_in_words(amount: f64) -> String {
    if !amount.is_finite() {
        return "ZERO AND 00/100".to_string();
    }

    let rendered = format!("{}", amount.abs());
    let (integer_text, fraction_text) = match rendered.split_once('.') {
        Some((integer_part, fraction_part)) => (
            integer_part.to_string(),
            fraction_part.chars().take(2).collect::<String>(),
        ),
        None => (rendered, String::new()),
    };

    let integer_value: u64 = integer_text.parse().unwrap_or(0);
    let words = if integer_value == 0 {
        "ZERO".to_string()
    } else {
        group_words(integer_value)
    };
    let fraction = if fraction_text.is_empty() {
        "00".to_string()
    } else {
        fraction_text
    };

    collapse_whitespace(&format!("{words} AND {fraction}/100"))
}

/// Formats an amount for display with comma grouping and two decimals.
pub fn format_amount(amount: f64) -> String {
    let rendered = format!("{amount:.2}");
    let (sign, digits) = match rendered.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rendered.as_str()),
    };
    let (integer_part, fraction_part) = digits.split_once('.').unwrap_or((digits, "00"));
    format!("{sign}{}.{fraction_part}", group_thousands(integer_part))
}

fn group_words(value: u64) -> String {
    let mut remaining = value;
    let mut groups = Vec::new();
    while remaining > 0 {
        groups.push((remaining % 1000) as usize);
        remaining /= 1000;
    }

    let mut parts = Vec::new();
    for (index, group) in groups.iter().enumerate().rev() {
        if *group == 0 {
            continue;
        }
        parts.push(triple_words(*group));
        if index > 0 {
            parts.push(SCALES.get(index).copied().unwrap_or_default().to_string());
        }
    }
    parts.join(" ")
}

fn triple_words(value: usize) -> String {
    let mut parts = Vec::new();
    let hundreds = value / 100;
    let rest = value % 100;

    if hundreds > 0 {
        parts.push(format!("{} HUNDRED", ONES[hundreds]));
    }
    if rest >= 20 {
        let tens = rest / 10;
        let units = rest % 10;
        if units > 0 {
            parts.push(format!("{} {}", TENS[tens], ONES[units]));
        } else {
            parts.push(TENS[tens].to_string());
        }
    } else if rest > 0 {
        parts.push(ONES[rest].to_string());
    }
    parts.join(" ")
}

fn collapse_whitespace(value: &str) -> String {
    WHITESPACE_RE.replace_all(value.trim(), " ").into_owned()
}
