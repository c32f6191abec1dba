use super::extract::address::{self, AddressParts};
use super::extract::contact::{self, ContactNumbers};
use super::extract::services;
use super::nodes::PageNode;
use crate::export::Record;

const PHONE_LABEL: &str = "Phone:";
const SERVICES_LABEL: &str = "Services:";

/// A record being assembled under the current city heading. Each slot fills
/// at most once, in priority order; `None` means the matching node has not
/// been seen yet. Slot occupancy is separate from capture success: an
/// address line with no usable captures still occupies the address slot.
#[derive(Debug)]
struct PendingRecord {
    city: String,
    company: Option<String>,
    address: Option<AddressParts>,
    contact: Option<ContactNumbers>,
    services: Option<String>,
}

impl PendingRecord {
    fn new(city: String) -> Self {
        Self {
            city,
            company: None,
            address: None,
            contact: None,
            services: None,
        }
    }

    /// Feed one text node into the first open slot it qualifies for. A node
    /// naming a new company after services were captured rolls the record
    /// over: the sealed record comes back and `self` restarts under the
    /// same city.
    fn absorb(&mut self, text: &str) -> Option<Record> {
        if self.company.is_none() {
            self.company = Some(text.to_string());
        } else if self.address.is_none() {
            self.address = Some(address::parse(text));
        } else if self.contact.is_none() && text.starts_with(PHONE_LABEL) {
            self.contact = Some(contact::parse(text));
        } else if self.services.is_none() {
            // Skip nodes until the labelled one shows up.
            if text.starts_with(SERVICES_LABEL) {
                self.services = services::parse(text);
            }
        } else if text.chars().count() > 1 {
            let mut next = PendingRecord::new(self.city.clone());
            next.company = Some(text.to_string());
            return std::mem::replace(self, next).seal();
        }
        None
    }

    /// Seal into a finished record; yields nothing if no company was seen.
    fn seal(self) -> Option<Record> {
        let company = self.company?;
        let (address, zip) = match self.address {
            Some(parts) => (parts.address, parts.zip),
            None => (None, None),
        };
        let (phone, fax) = match self.contact {
            Some(c) => (c.phone, c.fax),
            None => (String::new(), String::new()),
        };
        Some(Record {
            company,
            address,
            city: self.city,
            zip,
            phone,
            fax,
            services: self.services,
        })
    }

    /// End-of-page seal: a record that never reached its address line is
    /// dropped.
    fn seal_at_end(self) -> Option<Record> {
        if self.address.is_some() {
            self.seal()
        } else {
            None
        }
    }
}

/// Run a node stream through the record state machine, in order.
pub fn assemble_records(nodes: &[PageNode]) -> Vec<Record> {
    let mut records = Vec::new();
    let mut pending: Option<PendingRecord> = None;

    for node in nodes {
        match node {
            PageNode::Heading(city) => {
                if let Some(prev) = pending.take() {
                    if let Some(record) = prev.seal() {
                        records.push(record);
                    }
                }
                pending = Some(PendingRecord::new(city.clone()));
            }
            PageNode::Text(text) => {
                if let Some(current) = pending.as_mut() {
                    if let Some(rolled) = current.absorb(text) {
                        records.push(rolled);
                    }
                }
            }
        }
    }

    if let Some(last) = pending {
        if let Some(record) = last.seal_at_end() {
            records.push(record);
        }
    }

    records
}

// ── Tests ──
