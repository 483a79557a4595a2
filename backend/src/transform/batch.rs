//! Ordered accumulation of built records.

use crate::models::ResourceRecord;

/// Records built during a run, in sheet row order.
///
/// `flush` hands them over top to bottom. Sinks are expected to append in
/// the order received, so output order matches the sheet.
#[derive(Debug, Default)]
pub struct Batch {
    records: Vec<ResourceRecord>,
}

impl Batch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, record: ResourceRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Accumulated records, in the order added.
    pub fn records(&self) -> &[ResourceRecord] {
        &self.records
    }

    /// Take every accumulated record, in the order added. Leaves the batch empty.
    pub fn flush(&mut self) -> Vec<ResourceRecord> {
        std::mem::take(&mut self.records)
    }
}
