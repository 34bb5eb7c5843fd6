//! Display formatting shared by tables and detail pages

/// Thousands-separated number with a fixed number of decimals.
///
/// ```
/// use contracts::shared::format::format_number_with_decimals;
/// assert_eq!(format_number_with_decimals(1234.567, 2), "1,234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value);
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };

    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };

    let mut grouped = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    match decimal_part {
        Some(d) => format!("{}{}.{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

/// Price with the currency symbol in front; `None` renders as zero.
pub fn number_to_price(value: Option<f64>, symbol: &str) -> String {
    let value = value.unwrap_or(0.0);
    let value = if value.is_finite() { value } else { 0.0 };
    format!("{}{}", symbol, format_number_with_decimals(value, 2))
}

/// `john.doe@mail.com` -> `j******e@mail.com` (demo mode)
pub fn hide_email(email: &str) -> String {
    let Some((name, domain)) = email.split_once('@') else {
        return email.to_string();
    };
    let chars: Vec<char> = name.chars().collect();
    if chars.len() <= 2 {
        return format!("{}@{}", "*".repeat(chars.len()), domain);
    }
    format!(
        "{}{}{}@{}",
        chars[0],
        "*".repeat(chars.len() - 2),
        chars[chars.len() - 1],
        domain
    )
}

/// Keep the first 3 and last 2 characters of a phone number (demo mode)
pub fn hide_phone(phone: &str) -> String {
    let chars: Vec<char> = phone.chars().collect();
    if chars.len() <= 5 {
        return "*".repeat(chars.len());
    }
    let mut out: String = chars[..3].iter().collect();
    out.push_str(&"*".repeat(chars.len() - 5));
    out.extend(&chars[chars.len() - 2..]);
    out
}

/// `2024-03-15T14:02:26.000000Z` -> `2024-03-15 14:02`
pub fn format_datetime(value: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .or_else(|_| {
            chrono::NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S")
                .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        })
        .unwrap_or_else(|_| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number_with_decimals(1234567.891, 2), "1,234,567.89");
        assert_eq!(format_number_with_decimals(0.0, 2), "0.00");
        assert_eq!(format_number_with_decimals(-1234.0, 0), "-1,234");
        assert_eq!(format_number_with_decimals(999.0, 0), "999");
    }

    #[test]
    fn test_number_to_price() {
        assert_eq!(number_to_price(Some(1500.5), "$"), "$1,500.50");
        assert_eq!(number_to_price(None, "$"), "$0.00");
        assert_eq!(number_to_price(Some(f64::NAN), ""), "0.00");
    }

    #[test]
    fn test_hide_email_and_phone() {
        assert_eq!(hide_email("john@mail.com"), "j**n@mail.com");
        assert_eq!(hide_email("ab@x.io"), "**@x.io");
        assert_eq!(hide_email("not-an-email"), "not-an-email");
        assert_eq!(hide_phone("+998901234567"), "+99********67");
        assert_eq!(hide_phone("123"), "***");
    }

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime("2024-03-15T14:02:26.000000Z"), "2024-03-15 14:02");
        assert_eq!(format_datetime("2024-03-15 14:02:26"), "2024-03-15 14:02");
        assert_eq!(format_datetime("garbage"), "garbage");
    }
}
