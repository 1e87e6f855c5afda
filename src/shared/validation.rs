use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for national identity numbers (NIK) and family card numbers
    /// (nomor KK): exactly 16 digits.
    /// - Valid: "3201012501990001"
    /// - Invalid: "320101250199000" (15 digits), "32010125019900012", "3201-0125-0199"
    pub static ref NIK_REGEX: Regex = Regex::new(r"^\d{16}$").unwrap();

    /// Regex for billing periods: `YYYY-MM` with a two-digit month 01-12.
    /// - Valid: "2024-06", "1999-12"
    /// - Invalid: "2024-6", "2024-13", "2024/06"
    pub static ref PERIODE_REGEX: Regex = Regex::new(r"^\d{4}-(0[1-9]|1[0-2])$").unwrap();

    /// Regex for RT/RW unit numbers: 1-3 digits.
    pub static ref RT_RW_REGEX: Regex = Regex::new(r"^\d{1,3}$").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nik_regex_valid() {
        assert!(NIK_REGEX.is_match("3201012501990001"));
        assert!(NIK_REGEX.is_match("0000000000000000"));
    }

    #[test]
    fn test_nik_regex_invalid() {
        assert!(!NIK_REGEX.is_match("320101250199000")); // 15 digits
        assert!(!NIK_REGEX.is_match("32010125019900011")); // 17 digits
        assert!(!NIK_REGEX.is_match("3201-0125-0199-01")); // separators
        assert!(!NIK_REGEX.is_match("")); // empty
        assert!(!NIK_REGEX.is_match("32010125019900ab")); // letters
    }

    #[test]
    fn test_periode_regex_valid() {
        assert!(PERIODE_REGEX.is_match("2024-06"));
        assert!(PERIODE_REGEX.is_match("1999-12"));
        assert!(PERIODE_REGEX.is_match("2030-01"));
    }

    #[test]
    fn test_periode_regex_invalid() {
        assert!(!PERIODE_REGEX.is_match("2024-6")); // single-digit month
        assert!(!PERIODE_REGEX.is_match("2024-13")); // month out of range
        assert!(!PERIODE_REGEX.is_match("2024-00")); // month zero
        assert!(!PERIODE_REGEX.is_match("2024/06")); // wrong separator
        assert!(!PERIODE_REGEX.is_match("24-06")); // short year
    }

    #[test]
    fn test_rt_rw_regex() {
        assert!(RT_RW_REGEX.is_match("1"));
        assert!(RT_RW_REGEX.is_match("003"));
        assert!(!RT_RW_REGEX.is_match("0004"));
        assert!(!RT_RW_REGEX.is_match("RT1"));
    }
}
