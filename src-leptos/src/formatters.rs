//! Utility functions for formatting links and labels

/// `tel:` href for a display phone number. Whitespace is dropped so dialers
/// accept it; the number is otherwise left as written.
///
/// Examples:
/// - "+254 745198904" -> "tel:+254745198904"
/// - "+1 971 2510852 " -> "tel:+19712510852"
pub fn tel_href(phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    format!("tel:{digits}")
}

pub fn mailto_href(email: &str) -> String {
    format!("mailto:{}", email.trim())
}

/// Carousel position indicator, 1-based: "2 / 3".
pub fn position_label(index: usize, total: usize) -> String {
    if total == 0 {
        return "0 / 0".to_string();
    }
    format!("{} / {}", index.min(total - 1) + 1, total)
}

/// Footer line, e.g. "© 2026 Tonny.dev".
pub fn copyright_line(year: i32, brand: &str) -> String {
    format!("© {year} {brand}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tel_href_strips_whitespace() {
        assert_eq!(tel_href("+254 745198904"), "tel:+254745198904");
        assert_eq!(tel_href("+1 971 2510852 "), "tel:+19712510852");
    }

    #[test]
    fn test_mailto_href() {
        assert_eq!(mailto_href(" me@example.com"), "mailto:me@example.com");
    }

    #[test]
    fn test_position_label() {
        assert_eq!(position_label(0, 3), "1 / 3");
        assert_eq!(position_label(2, 3), "3 / 3");
        assert_eq!(position_label(7, 3), "3 / 3");
        assert_eq!(position_label(0, 0), "0 / 0");
    }

    #[test]
    fn test_copyright_line() {
        assert_eq!(copyright_line(2026, "Tonny.dev"), "© 2026 Tonny.dev");
    }
}
