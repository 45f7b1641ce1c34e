use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for validating slug fields
    /// Must be lowercase alphanumeric with hyphens
    /// - Valid: "power-tools", "brand123", "spring-sale-2026"
    /// - Invalid: "-tools", "tools-", "power--tools", "Tools", "power_tools"
    pub static ref SLUG_REGEX: Regex = Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_regex_valid() {
        assert!(SLUG_REGEX.is_match("power-tools"));
        assert!(SLUG_REGEX.is_match("brand123"));
        assert!(SLUG_REGEX.is_match("spring-sale-2026"));
        assert!(SLUG_REGEX.is_match("a"));
    }

    #[test]
    fn test_slug_regex_invalid() {
        assert!(!SLUG_REGEX.is_match("-tools")); // starts with hyphen
        assert!(!SLUG_REGEX.is_match("tools-")); // ends with hyphen
        assert!(!SLUG_REGEX.is_match("power--tools")); // double hyphen
        assert!(!SLUG_REGEX.is_match("Tools")); // uppercase
        assert!(!SLUG_REGEX.is_match("power_tools")); // underscore
        assert!(!SLUG_REGEX.is_match("")); // empty
        assert!(!SLUG_REGEX.is_match("power tools")); // space
    }
}
