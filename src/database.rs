use crate::error::Result;
use crate::io::{to_buffer, IoOptions};
use crate::record::Record;
use crate::schema::Schema;
use crate::table::Table;

/// An in-memory FritzAdr.dbf being written
///
/// The layout is fixed at construction. Records can only be appended, and
/// [`FritzAdr::get_database`] renders the current state without consuming it,
/// so it can be called again after more records were added.
#[derive(Debug, Clone)]
pub struct FritzAdr {
    schema: Schema,
    options: IoOptions,
    table: Table,
}

impl FritzAdr {
    /// Create an empty table with the 19 or 21 field layout
    ///
    /// # Arguments
    /// - `fields` - Number of fields, 19 or 21
    ///
    /// # Errors
    /// - `DbfError::InvalidSchema` for any other field count
    pub fn new(fields: usize) -> Result<Self> {
        Self::with_options(fields, IoOptions::default())
    }

    /// Create an empty table with custom encoding options
    ///
    /// # Arguments
    /// - `fields` - Number of fields, 19 or 21
    /// - `options` - How text values are encoded
    ///
    /// # Errors
    /// - `DbfError::InvalidSchema` for any other field count
    pub fn with_options(fields: usize, options: IoOptions) -> Result<Self> {
        let schema = Schema::from_field_count(fields)?;
        Ok(Self::from_schema(schema, options))
    }

    /// Create an empty table for an already selected layout
    pub fn from_schema(schema: Schema, options: IoOptions) -> Self {
        tracing::debug!(
            fields = schema.field_count(),
            record_length = schema.record_length(),
            "created FritzAdr table"
        );
        Self {
            schema,
            options,
            table: Table::new(),
        }
    }

    /// The table layout
    pub fn schema(&self) -> Schema {
        self.schema
    }

    /// The encoding options
    pub fn options(&self) -> &IoOptions {
        &self.options
    }

    /// Get the number of records (rows)
    pub fn len(&self) -> usize {
        self.table.num_records() as usize
    }

    /// Check if no record was added yet
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Bytes before the first record
    pub fn header_length(&self) -> u16 {
        self.schema.header_length()
    }

    /// Bytes per record, deletion flag included
    pub fn record_length(&self) -> u16 {
        self.schema.record_length()
    }

    /// Create a blank record for this table, to be filled and passed to [`FritzAdr::add_entry`]
    pub fn create_record(&self) -> Record {
        Record::new(self.schema, self.options.encoding)
    }

    /// Add a record from field name / value pairs
    ///
    /// Unknown field names are ignored, missing fields stay blank and values
    /// longer than their field are cut.
    ///
    /// # Arguments
    /// - `fields` - Pairs like `("NAME", "Doe")`, e.g. a `HashMap<String, String>`
    pub fn add_record<I, K, V>(&mut self, fields: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut record = self.create_record();
        for (name, value) in fields {
            record.set(name.as_ref(), value.as_ref());
        }
        self.add_entry(&record);
    }

    /// Add a record where values may be absent
    ///
    /// `None` values are skipped and leave their field blank.
    pub fn add_optional_record<I, K, V>(&mut self, fields: I)
    where
        I: IntoIterator<Item = (K, Option<V>)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.add_record(
            fields
                .into_iter()
                .filter_map(|(name, value)| value.map(|v| (name, v))),
        );
    }

    /// Append an already filled record
    ///
    /// A record built for the other layout is rebuilt field by field so the
    /// table stays consistent with its header.
    pub fn add_entry(&mut self, record: &Record) {
        if record.schema() == self.schema {
            self.table.append(&record.to_bytes());
        } else {
            let mut converted = self.create_record();
            for name in record.schema().field_names() {
                if let Some(value) = record.get(name) {
                    converted.set_bytes(name, value);
                }
            }
            self.table.append(&converted.to_bytes());
        }

        tracing::trace!(records = self.table.num_records(), "appended record");
    }

    /// Render the complete file image, dated today
    ///
    /// Callers write these bytes unchanged to a .dbf file or any other sink.
    pub fn get_database(&self) -> Vec<u8> {
        to_buffer(self)
    }

    /// Get access to the accumulated records (for I/O operations)
    pub(crate) fn table(&self) -> &Table {
        &self.table
    }
}

impl Default for FritzAdr {
    fn default() -> Self {
        Self::from_schema(Schema::default(), IoOptions::default())
    }
}
