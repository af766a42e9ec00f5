//! Collapse a download history to one record per client address.

use std::collections::HashSet;

use ferry_entity::DownloadRecord;

/// Client addresses already present in a de-duplicated view.
#[derive(Debug, Default)]
pub struct SeenClients<'a> {
    addresses: HashSet<&'a str>,
}

impl<'a> SeenClients<'a> {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `address`, returning `true` the first time it is seen.
    pub fn first_sighting(&mut self, address: &'a str) -> bool {
        self.addresses.insert(address)
    }
}

/// Keep the first record per client address, preserving input order.
///
/// Later records from an address already seen are dropped outright.
pub fn dedupe(records: &[DownloadRecord]) -> Vec<DownloadRecord> {
    let mut seen = SeenClients::new();
    records
        .iter()
        .filter(|record| seen.first_sighting(&record.client_ip))
        .cloned()
        .collect()
}
