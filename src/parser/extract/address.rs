use std::sync::LazyLock;

use regex::Regex;

static ADDRESS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([\w\s]+),").unwrap());
static ZIP_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r".*,.*(\d{5})").unwrap());

/// Pieces of a postal line. Either capture can miss independently; a line
/// with no comma yields neither.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddressParts {
    pub address: Option<String>,
    pub zip: Option<String>,
}

/// Split a "street, city, ST zip" line: the street is everything up to the
/// first comma, the zip is a 5-digit run appearing after a comma.
pub fn parse(text: &str) -> AddressParts {
    let address = ADDRESS_RE.captures(text).map(|caps| caps[1].to_string());
    let zip = ZIP_RE.captures(text).map(|caps| caps[1].to_string());
    AddressParts { address, zip }
}
