pub mod extract;
pub mod nodes;
pub mod records;

use crate::export::Record;

/// Split a page into its sibling node stream, then assemble records from it.
pub fn extract_records(html: &str) -> Vec<Record> {
    let nodes = nodes::page_nodes(html);
    records::assemble_records(&nodes)
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ohio_fixture() {
        let html = std::fs::read_to_string("tests/fixtures/ohio.html").unwrap();
        let records = extract_records(&html);
        assert_eq!(records.len(), 1);
        let r = &records[0];
        assert_eq!(r.city, "Ohio");
        assert_eq!(r.company, "Acme Tank Services");
        assert_eq!(r.address.as_deref(), Some("123 Main St"));
        assert_eq!(r.zip.as_deref(), Some("43215"));
        assert_eq!(r.phone, "(614) 555-1234");
        assert_eq!(r.fax, "");
        assert_eq!(r.services.as_deref(), Some("Tank repair, hydro testing"));
    }

    #[test]
    fn two_states_fixture() {
        let html = std::fs::read_to_string("tests/fixtures/two_states.html").unwrap();
        let records = extract_records(&html);
        assert_eq!(records.len(), 3);
        let cities: Vec<&str> = records.iter().map(|r| r.city.as_str()).collect();
        assert_eq!(cities, ["Ohio", "Ohio", "Texas"]);
        assert_eq!(records[0].fax, "614-555-9999");
        assert_eq!(records[1].company, "Buckeye Tank & Trailer");
        assert_eq!(records[2].zip.as_deref(), Some("77001"));
    }

    #[test]
    fn page_without_heading_yields_nothing() {
        let html = "<html><body><p>This page is under construction.</p></body></html>";
        assert!(extract_records(html).is_empty());
    }
}
