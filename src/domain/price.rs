//! Price and percentage parsing for scraped text.
//!
//! Bookmaker pages print decimal odds with either separator (`2,35` or
//! `2.35`) and sometimes trailing decoration (`2,35 €`). Only a finite,
//! strictly positive number is ever returned.

/// Parse a displayed decimal price.
///
/// The leading numeric run is read after mapping a comma separator to a
/// period, so `"2,35"` and `"2.35 €"` both give `2.35`. Returns `None` for
/// empty text, non-numeric text, zero, negatives, and non-finite values.
#[must_use]
pub fn parse_price(text: &str) -> Option<f64> {
    let normalized = text.trim().replace(',', ".");
    let numeric = leading_number(&normalized)?;
    let value: f64 = numeric.parse().ok()?;
    (value.is_finite() && value > 0.0).then_some(value)
}

/// Parse a displayed integer percentage such as `"42%"`.
#[must_use]
pub fn parse_percentage(text: &str) -> Option<u8> {
    let trimmed = text.trim();
    let digits: String = trimmed.chars().take_while(char::is_ascii_digit).collect();
    let value: u32 = digits.parse().ok()?;
    u8::try_from(value).ok().filter(|v| *v <= 100)
}

fn leading_number(s: &str) -> Option<&str> {
    let mut end = 0;
    let mut seen_dot = false;
    for (idx, ch) in s.char_indices() {
        match ch {
            '0'..='9' => end = idx + 1,
            '.' if !seen_dot => seen_dot = true,
            _ => break,
        }
    }
    (end > 0).then(|| &s[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comma_separator_parses() {
        assert_eq!(parse_price("2,35"), Some(2.35));
        assert_eq!(parse_price(" 1.80 "), Some(1.80));
    }

    #[test]
    fn trailing_decoration_is_ignored() {
        assert_eq!(parse_price("3,20 €"), Some(3.20));
        assert_eq!(parse_price("12"), Some(12.0));
    }

    #[test]
    fn invalid_prices_are_rejected() {
        assert_eq!(parse_price(""), None);
        assert_eq!(parse_price("-"), None);
        assert_eq!(parse_price("SUSP"), None);
        assert_eq!(parse_price("0,00"), None);
        assert_eq!(parse_price("-1.5"), None);
    }

    #[test]
    fn percentage_reads_leading_digits() {
        assert_eq!(parse_percentage("42%"), Some(42));
        assert_eq!(parse_percentage(" 7 %"), Some(7));
        assert_eq!(parse_percentage("n/a"), None);
        assert_eq!(parse_percentage("250%"), None);
    }
}
