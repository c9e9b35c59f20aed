//! The two table layouts found in real FritzAdr.dbf files

use crate::error::{DbfError, Result};
use crate::field::FieldDefinition;

/// Size of the file header and of each field descriptor
pub const DESCRIPTOR_SIZE: usize = 32;

/// Layout with 19 columns (older FRITZ!Fon installations)
static FRITZ_ADR_19: [FieldDefinition; 19] = [
    FieldDefinition::character("BEZCHNG", 40),
    FieldDefinition::character("FIRMA", 40),
    FieldDefinition::character("NAME", 40),
    FieldDefinition::character("VORNAME", 40),
    FieldDefinition::character("ABTEILUNG", 40),
    FieldDefinition::character("STRASSE", 40),
    FieldDefinition::character("PLZ", 10),
    FieldDefinition::character("ORT", 40),
    FieldDefinition::character("KOMMENT", 80),
    FieldDefinition::character("TELEFON", 64),
    FieldDefinition::character("MOBILFON", 64),
    FieldDefinition::character("TELEFAX", 64),
    FieldDefinition::character("TRANSFER", 64),
    FieldDefinition::character("BENUTZER", 128),
    FieldDefinition::character("PASSWORT", 128),
    FieldDefinition::character("TRANSPROT", 1),
    FieldDefinition::character("NOTIZEN", 254),
    FieldDefinition::character("EMAIL", 254),
    FieldDefinition::character("HOMEPAGE", 254),
];

/// Layout with 21 columns, the one FRITZ!fax expects
static FRITZ_ADR_21: [FieldDefinition; 21] = [
    FieldDefinition::character("BEZCHNG", 40),
    FieldDefinition::character("FIRMA", 40),
    FieldDefinition::character("NAME", 40),
    FieldDefinition::character("VORNAME", 40),
    FieldDefinition::character("ABTEILUNG", 40),
    FieldDefinition::character("STRASSE", 40),
    FieldDefinition::character("PLZ", 10),
    FieldDefinition::character("ORT", 40),
    FieldDefinition::character("KOMMENT", 80),
    FieldDefinition::character("TELEFON", 64),
    FieldDefinition::character("TELEFAX", 64),
    FieldDefinition::character("TRANSFER", 64),
    FieldDefinition::character("TERMINAL", 64),
    FieldDefinition::character("BENUTZER", 128),
    FieldDefinition::character("PASSWORT", 128),
    FieldDefinition::character("TRANSPROT", 1),
    FieldDefinition::character("TERMMODE", 40),
    FieldDefinition::character("NOTIZEN", 254),
    FieldDefinition::character("MOBILFON", 64),
    FieldDefinition::character("EMAIL", 254),
    FieldDefinition::character("HOMEPAGE", 254),
];

/// One of the supported FritzAdr table layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Schema {
    /// 19 fields, 1646 bytes per record
    Fields19,
    /// 21 fields, 1750 bytes per record
    #[default]
    Fields21,
}

impl Schema {
    /// Select a layout by its number of fields
    ///
    /// # Errors
    /// - `DbfError::InvalidSchema` for anything other than 19 or 21
    pub fn from_field_count(count: usize) -> Result<Self> {
        match count {
            19 => Ok(Schema::Fields19),
            21 => Ok(Schema::Fields21),
            other => Err(DbfError::InvalidSchema(other)),
        }
    }

    /// Field definitions in table order
    pub fn fields(&self) -> &'static [FieldDefinition] {
        match self {
            Schema::Fields19 => &FRITZ_ADR_19,
            Schema::Fields21 => &FRITZ_ADR_21,
        }
    }

    /// Number of fields (columns)
    pub fn field_count(&self) -> usize {
        self.fields().len()
    }

    /// Bytes per record, deletion flag included
    ///
    /// These are the values measured from existing files and written to the
    /// header as-is.
    pub const fn record_length(&self) -> u16 {
        match self {
            Schema::Fields19 => 1646,
            Schema::Fields21 => 1750,
        }
    }

    /// Bytes before the first record: header, descriptors and the 0x0D terminator
    pub fn header_length(&self) -> u16 {
        (DESCRIPTOR_SIZE + 1 + self.field_count() * DESCRIPTOR_SIZE) as u16
    }

    /// Get a field definition by name
    pub fn field(&self, name: &str) -> Option<&'static FieldDefinition> {
        self.fields().iter().find(|f| f.name == name)
    }

    /// Check if a field exists by name
    pub fn contains_field(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    /// Iterate over the field names in table order
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> {
        self.fields().iter().map(|f| f.name)
    }

    /// Byte offset of a field within an encoded record
    ///
    /// Offset 0 is the deletion flag, so the first field starts at 1.
    pub fn field_offset(&self, name: &str) -> Option<usize> {
        let mut offset = 1;
        for field in self.fields() {
            if field.name == name {
                return Some(offset);
            }
            offset += field.size();
        }
        None
    }
}

impl TryFrom<usize> for Schema {
    type Error = DbfError;

    fn try_from(count: usize) -> Result<Self> {
        Schema::from_field_count(count)
    }
}
