// templates/format.rs
use chrono::NaiveDate;

const MISSING: &str = "N/A";

/// Groups the digits of a non-negative integer string with commas.
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Whole US dollars: `$1,234,567`, `-$5,000`, `N/A`.
pub fn currency(value: Option<f64>) -> String {
    match value.filter(|v| v.is_finite()) {
        None => MISSING.to_string(),
        Some(v) => {
            let rounded = v.round();
            let sign = if rounded < 0.0 { "-" } else { "" };
            let digits = format!("{:.0}", rounded.abs());
            format!("{sign}${}", group_thousands(&digits))
        }
    }
}

/// Plain number with separators and up to three decimals: `12,500`, `0.25`.
pub fn number(value: Option<f64>) -> String {
    let Some(v) = value.filter(|v| v.is_finite()) else {
        return MISSING.to_string();
    };

    let fixed = format!("{:.3}", v.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac = frac_part.trim_end_matches('0');
    let sign = if v < 0.0 && (int_part != "0" || !frac.is_empty()) { "-" } else { "" };

    if frac.is_empty() {
        format!("{sign}{}", group_thousands(int_part))
    } else {
        format!("{sign}{}.{frac}", group_thousands(int_part))
    }
}

/// `Mar 4, 2024`
pub fn date(value: Option<NaiveDate>) -> String {
    match value {
        Some(d) => d.format("%b %-d, %Y").to_string(),
        None => MISSING.to_string(),
    }
}

/// One decimal place with a percent sign: `23.4%`.
pub fn percent(value: Option<f64>) -> String {
    match value.filter(|v| v.is_finite()) {
        Some(v) => format!("{v:.1}%"),
        None => MISSING.to_string(),
    }
}
