use std::sync::LazyLock;

use regex::Regex;

static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\(\d{3}\) \d{3}-\d{4}").unwrap());
static FAX_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d{3}-\d{3}-\d{4}").unwrap());

/// Numbers pulled from a contact line. Multiple matches per field are
/// "/"-joined; no matches join to the empty string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactNumbers {
    pub phone: String,
    pub fax: String,
}

/// Collect phone numbers in "(XXX) XXX-XXXX" form and fax numbers in
/// "XXX-XXX-XXXX" form from a contact line.
pub fn parse(text: &str) -> ContactNumbers {
    ContactNumbers {
        phone: join_matches(&PHONE_RE, text),
        fax: join_matches(&FAX_RE, text),
    }
}

fn join_matches(re: &Regex, text: &str) -> String {
    re.find_iter(text)
        .map(|m| m.as_str())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_phone() {
        let c = parse("Phone: (614) 555-1234");
        assert_eq!(c.phone, "(614) 555-1234");
        assert_eq!(c.fax, "");
    }

    #[test]
    fn phone_and_fax() {
        let c = parse("Phone: (614) 555-1234 Fax: 614-555-9999");
        assert_eq!(c.phone, "(614) 555-1234");
        assert_eq!(c.fax, "614-555-9999");
    }

    #[test]
    fn multiple_phones_joined() {
        let c = parse("Phone: (614) 555-1234 or (330) 555-0000");
        assert_eq!(c.phone, "(614) 555-1234/(330) 555-0000");
    }

    #[test]
    fn undashed_number_counts_as_fax_not_phone() {
        let c = parse("Phone: 614-555-1234");
        assert_eq!(c.phone, "");
        assert_eq!(c.fax, "614-555-1234");
    }

    #[test]
    fn no_numbers_join_to_empty() {
        let c = parse("Phone: call the shop");
        assert_eq!(c.phone, "");
        assert_eq!(c.fax, "");
    }
}
