use std::fmt;

/// Money is represented as integer cents to avoid floating-point precision issues.
/// One unit = 100 cents, so a 2£ coin is 200 cents and a 0.20£ coin is 20 cents.
pub type Cents = i64;

/// Format cents as a fixed two-decimal string.
/// Example: 5000 -> "50.00", 20 -> "0.20"
pub fn format_cents(cents: Cents) -> String {
    format!("{}.{:02}", cents / 100, cents % 100)
}

/// Format cents with trailing zeros trimmed, the way a face value is
/// printed on a coin: 20 -> "0.2", 50 -> "0.5", 100 -> "1", 2000 -> "20"
pub fn format_value(cents: Cents) -> String {
    let units = cents / 100;
    let remainder = cents % 100;
    if remainder == 0 {
        format!("{}", units)
    } else if remainder % 10 == 0 {
        format!("{}.{}", units, remainder / 10)
    } else {
        format!("{}.{:02}", units, remainder)
    }
}

/// Parse an unsigned decimal string into cents.
/// Example: "50.00" -> 5000, "12.5" -> 1250, "2" -> 200, ".50" -> 50
pub fn parse_cents(input: &str) -> Result<Cents, ParseCentsError> {
    let input = input.trim();

    let parts: Vec<&str> = input.split('.').collect();
    match parts.len() {
        1 => {
            // No decimal point, treat as whole units
            let units = parse_digits(parts[0])?;
            Ok(units * 100)
        }
        2 => {
            let units = if parts[0].is_empty() {
                0
            } else {
                parse_digits(parts[0])?
            };

            let decimal_cents = match parts[1].len() {
                0 => 0,
                // Single digit like "5" means 50 cents
                1 => parse_digits(parts[1])? * 10,
                2 => parse_digits(parts[1])?,
                // A third decimal place can never name a whole cent amount
                _ => return Err(ParseCentsError::InvalidFormat),
            };

            Ok(units * 100 + decimal_cents)
        }
        _ => Err(ParseCentsError::InvalidFormat),
    }
}

fn parse_digits(part: &str) -> Result<i64, ParseCentsError> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseCentsError::InvalidFormat);
    }
    part.parse().map_err(|_| ParseCentsError::InvalidFormat)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseCentsError {
    InvalidFormat,
}

impl fmt::Display for ParseCentsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseCentsError::InvalidFormat => write!(f, "invalid money format"),
        }
    }
}

impl std::error::Error for ParseCentsError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_cents() {
        assert_eq!(format_cents(5000), "50.00");
        assert_eq!(format_cents(1234), "12.34");
        assert_eq!(format_cents(100), "1.00");
        assert_eq!(format_cents(20), "0.20");
        assert_eq!(format_cents(0), "0.00");
    }

    #[test]
    fn test_format_value_trims_trailing_zeros() {
        assert_eq!(format_value(20), "0.2");
        assert_eq!(format_value(50), "0.5");
        assert_eq!(format_value(100), "1");
        assert_eq!(format_value(200), "2");
        assert_eq!(format_value(2000), "20");
        assert_eq!(format_value(1234), "12.34");
    }

    #[test]
    fn test_parse_cents() {
        assert_eq!(parse_cents("50.00"), Ok(5000));
        assert_eq!(parse_cents("50"), Ok(5000));
        assert_eq!(parse_cents("12.34"), Ok(1234));
        assert_eq!(parse_cents("12.5"), Ok(1250));
        assert_eq!(parse_cents("0.01"), Ok(1));
        assert_eq!(parse_cents(".50"), Ok(50));
        assert_eq!(parse_cents("2."), Ok(200));
        assert_eq!(parse_cents(" 0.20 "), Ok(20));
    }

    #[test]
    fn test_parse_cents_invalid() {
        assert!(parse_cents("abc").is_err());
        assert!(parse_cents("").is_err());
        assert!(parse_cents("12.34.56").is_err());
        assert!(parse_cents("-50.00").is_err());
        // "0.205" must not collapse onto the 0.20 coin
        assert!(parse_cents("0.205").is_err());
        assert!(parse_cents("1e2").is_err());
    }
}
