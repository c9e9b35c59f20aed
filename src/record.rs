//! Record (row) implementation for FritzAdr tables

use indexmap::IndexMap;

use crate::io::{encode_string, Encoding};
use crate::schema::Schema;

/// Deletion flag of a live record
pub const RECORD_ACTIVE: u8 = 0x20;

/// A record (row) being filled before it is appended to a table
///
/// Every field of the schema is present from the start, blank filled to its
/// declared width, so the encoded size never depends on which fields were set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    schema: Schema,
    encoding: Encoding,
    /// Field name -> fixed width bytes, in table order
    data: IndexMap<&'static str, Vec<u8>>,
}

impl Record {
    /// Create a record with every field blank
    pub fn new(schema: Schema, encoding: Encoding) -> Self {
        let data = schema
            .fields()
            .iter()
            .map(|field| (field.name, field.blank()))
            .collect();

        Self {
            schema,
            encoding,
            data,
        }
    }

    /// The layout this record follows
    pub fn schema(&self) -> Schema {
        self.schema
    }

    /// Set a field from text, encoded with the record's encoding
    ///
    /// Returns `false` and leaves the record untouched if the schema has no
    /// such field.
    pub fn set(&mut self, name: &str, value: &str) -> bool {
        let bytes = encode_string(value, self.encoding);
        self.set_bytes(name, &bytes)
    }

    /// Set a field from raw bytes
    ///
    /// Values longer than the field are cut to its width, shorter ones are
    /// padded on the right. Returns `false` for an unknown field name.
    pub fn set_bytes(&mut self, name: &str, value: &[u8]) -> bool {
        let Some(field) = self.schema.field(name) else {
            tracing::trace!(field = name, "ignoring unknown field");
            return false;
        };

        let len = value.len().min(field.size());
        let mut buffer = field.blank();
        buffer[..len].copy_from_slice(&value[..len]);
        self.data.insert(field.name, buffer);
        true
    }

    /// Get the stored bytes of a field, padding included
    pub fn get(&self, name: &str) -> Option<&[u8]> {
        self.data.get(name).map(Vec::as_slice)
    }

    /// Encode the record: deletion flag followed by every field in table order
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buffer = Vec::with_capacity(self.schema.record_length() as usize);
        buffer.push(RECORD_ACTIVE);
        for value in self.data.values() {
            buffer.extend_from_slice(value);
        }
        buffer
    }
}
