use std::sync::LazyLock;

use regex::Regex;

static SERVICES_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"Services: (.*)").unwrap());

/// Capture the free text after a "Services: " label, verbatim.
pub fn parse(text: &str) -> Option<String> {
    SERVICES_RE.captures(text).map(|caps| caps[1].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_rest_of_line() {
        assert_eq!(
            parse("Services: Tank repair, hydro testing").as_deref(),
            Some("Tank repair, hydro testing")
        );
    }

    #[test]
    fn missing_label_yields_none() {
        assert!(parse("We also do welding").is_none());
    }

    #[test]
    fn label_needs_its_trailing_space() {
        assert!(parse("Services:welding").is_none());
    }

    #[test]
    fn empty_list_still_matches() {
        assert_eq!(parse("Services: ").as_deref(), Some(""));
    }
}
