use std::fmt;

/// Data types supported by the FritzAdr table
///
/// dBASE III knows more types (numeric, date, logical, memo), but the
/// address book only ever declares fixed-length character columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum FieldType {
    /// Fixed-length character data, space padded
    Character = b'C',
}

impl FieldType {
    /// The type code written into the field descriptor
    pub const fn code(&self) -> u8 {
        *self as u8
    }

    /// Byte used to fill unset space in a value of this type
    pub const fn pad_byte(&self) -> u8 {
        match self {
            FieldType::Character => b' ',
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code() as char)
    }
}

/// Definition of a field (column) in a dBASE table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDefinition {
    /// Column name, at most 10 ASCII bytes
    pub name: &'static str,
    /// Data type of the field
    pub field_type: FieldType,
    /// Width of the field in bytes
    pub length: u8,
}

impl FieldDefinition {
    /// Create a character field
    pub const fn character(name: &'static str, length: u8) -> Self {
        Self {
            name,
            field_type: FieldType::Character,
            length,
        }
    }

    /// Size of this field in bytes
    pub const fn size(&self) -> usize {
        self.length as usize
    }

    /// An unset value for this field: the pad byte repeated over the full width
    pub fn blank(&self) -> Vec<u8> {
        vec![self.field_type.pad_byte(); self.size()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_code() {
        assert_eq!(FieldType::Character.code(), 0x43);
        assert_eq!(FieldType::Character.to_string(), "C");
    }

    #[test]
    fn test_blank_is_space_filled() {
        let field = FieldDefinition::character("PLZ", 10);
        assert_eq!(field.blank(), b"          ".to_vec());
        assert_eq!(field.size(), 10);
    }
}
