// src/core/sanitize.rs

/// Keep ASCII digits only, in order. "1 234 ₽" -> "1234".
pub fn digits_only(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Keep ASCII digits and '.' only. Used for the citation index ("12.5").
pub fn digits_and_dots(s: &str) -> String {
    s.chars().filter(|&c| c.is_ascii_digit() || c == '.').collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_only_drops_separators_and_symbols() {
        assert_eq!(digits_only("12 345"), "12345");
        assert_eq!(digits_only("1,2k ₽"), "12");
        assert_eq!(digits_only("\u{a0}7\u{a0}001\n"), "7001");
        assert_eq!(digits_only("нет данных"), "");
    }

    #[test]
    fn digits_and_dots_keeps_decimal_point() {
        assert_eq!(digits_and_dots("ИЦ 12.75"), "12.75");
        assert_eq!(digits_and_dots("1 024,5"), "10245");
        assert_eq!(digits_and_dots("v1.2.3"), "1.2.3");
    }
}
