/// Append-only storage for encoded records
///
/// Records are kept back to back in one buffer, exactly as they appear in the
/// file body, together with the running record count for the header.
#[derive(Debug, Clone, Default)]
pub struct Table {
    data: Vec<u8>,
    num_records: u32,
}

impl Table {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one encoded record
    pub fn append(&mut self, record: &[u8]) {
        self.data.extend_from_slice(record);
        self.num_records += 1;
    }

    /// Number of records appended so far
    pub fn num_records(&self) -> u32 {
        self.num_records
    }

    /// Check if no record was appended yet
    pub fn is_empty(&self) -> bool {
        self.num_records == 0
    }

    /// All records as they are written to the file body
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_counts_records() {
        let mut table = Table::new();
        assert!(table.is_empty());

        table.append(b" abc");
        table.append(b" def");

        assert_eq!(table.num_records(), 2);
        assert!(!table.is_empty());
        assert_eq!(table.as_bytes(), b" abc def");
    }
}
