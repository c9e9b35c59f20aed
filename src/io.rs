use std::fs::File;
use std::io::Write;
use std::path::Path;

use byteorder::{ByteOrder, LittleEndian};
use chrono::{Datelike, Local, NaiveDate};

use crate::database::FritzAdr;
use crate::error::Result;
use crate::field::FieldDefinition;
use crate::schema::{Schema, DESCRIPTOR_SIZE};

/// dBASE III without memo file
pub const DBASE_VERSION: u8 = 0x03;
/// Ends the field descriptor array
pub const HEADER_TERMINATOR: u8 = 0x0D;
/// Last byte of the file
pub const END_OF_FILE: u8 = 0x1A;
/// Header byte 28, the production .mdx flag in every FritzAdr.dbf seen so far
pub const TABLE_FLAGS: u8 = 0x01;

/// Options for encoding a FritzAdr table
#[derive(Debug, Clone, Default)]
pub struct IoOptions {
    /// How text values are turned into bytes before they are cut to width
    pub encoding: Encoding,
}

/// String encoding options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    /// Bytes of the UTF-8 string, written unchanged
    #[default]
    Utf8,
    /// Windows-1252, the code page of the FRITZ! desktop tools
    Windows1252,
}

impl IoOptions {
    /// Options for files read by FRITZ!Fon and FRITZ!fax on Windows
    pub fn fritz_adr() -> Self {
        Self {
            encoding: Encoding::Windows1252,
        }
    }
}

/// Write a FritzAdr table to a byte buffer, dated today
///
/// # Arguments
/// - `db` - The table to serialize
///
/// # Returns
/// The complete file image: header, field descriptors, terminator, records and end-of-file marker
pub fn to_buffer(db: &FritzAdr) -> Vec<u8> {
    to_buffer_at(db, Local::now().date_naive())
}

/// Write a FritzAdr table to a byte buffer with an explicit last-update date
///
/// # Arguments
/// - `db` - The table to serialize
/// - `date` - The date stored in header bytes 1 to 3
///
/// # Returns
/// The complete file image
pub fn to_buffer_at(db: &FritzAdr, date: NaiveDate) -> Vec<u8> {
    let schema = db.schema();
    let header_length = schema.header_length() as usize;
    let records = db.table().as_bytes();

    let mut buffer = vec![0u8; header_length - 1];
    write_header(&mut buffer[..DESCRIPTOR_SIZE], schema, db.table().num_records(), date);

    let mut off = DESCRIPTOR_SIZE;
    for field in schema.fields() {
        write_field_descriptor(&mut buffer[off..off + DESCRIPTOR_SIZE], field);
        off += DESCRIPTOR_SIZE;
    }

    buffer.reserve(records.len() + 2);
    buffer.push(HEADER_TERMINATOR);
    buffer.extend_from_slice(records);
    buffer.push(END_OF_FILE);

    tracing::debug!(
        records = db.len(),
        bytes = buffer.len(),
        "assembled dBASE image"
    );

    buffer
}

/// Write a FritzAdr table to a file
///
/// The image is assembled in memory first and written in one go.
///
/// # Arguments
/// - `db` - The table to write
/// - `path` - The path of the .dbf file to create
///
/// # Type
/// - `P` - A type that can be converted to a `Path` reference, such as `&str` or `String`
///
/// # Returns
/// Ok(()) if the file was successfully written, or an error if the file cannot be created or written to
pub fn to_file<P: AsRef<Path>>(db: &FritzAdr, path: P) -> Result<()> {
    to_file_at(db, path, Local::now().date_naive())
}

/// Write a FritzAdr table to a file with an explicit last-update date
///
/// # Arguments
/// - `db` - The table to write
/// - `path` - The path of the .dbf file to create
/// - `date` - The date stored in header bytes 1 to 3
pub fn to_file_at<P: AsRef<Path>>(db: &FritzAdr, path: P, date: NaiveDate) -> Result<()> {
    let buffer = to_buffer_at(db, date);
    let mut file = File::create(path)?;
    file.write_all(&buffer)?;
    file.flush()?;
    Ok(())
}

/// Write the 32 byte file header
///
/// | Offset | Content |
/// |---|---|
/// | 0 | version |
/// | 1..4 | year % 1000, month, day |
/// | 4..8 | record count (LE u32) |
/// | 8..10 | header length (LE u16) |
/// | 10..12 | record length (LE u16) |
/// | 28 | table flags |
///
/// Everything else is zero.
fn write_header(buffer: &mut [u8], schema: Schema, num_records: u32, date: NaiveDate) {
    buffer[0x00] = DBASE_VERSION;
    // year % 1000 cut to one byte: 2019 -> 19, 2300 -> 44
    buffer[0x01] = (date.year() % 1000) as u8;
    buffer[0x02] = date.month() as u8;
    buffer[0x03] = date.day() as u8;
    LittleEndian::write_u32(&mut buffer[0x04..0x08], num_records);
    LittleEndian::write_u16(&mut buffer[0x08..0x0A], schema.header_length());
    LittleEndian::write_u16(&mut buffer[0x0A..0x0C], schema.record_length());
    buffer[0x0C..0x1C].fill(0);
    buffer[0x1C] = TABLE_FLAGS;
    buffer[0x1D..0x20].fill(0);
}

/// Write a 32 byte field descriptor
///
/// # Arguments
/// - `buffer` - Exactly one descriptor worth of bytes
/// - `field` - The field to describe
fn write_field_descriptor(buffer: &mut [u8], field: &FieldDefinition) {
    buffer.fill(0);
    let name = field.name.as_bytes();
    let len = name.len().min(10);
    buffer[..len].copy_from_slice(&name[..len]);
    // 0x0A stays zero: name terminator
    buffer[0x0B] = field.field_type.code();
    buffer[0x10] = field.length;
    // 0x11 is the decimal count, always zero for character fields
}

/// Encode a string into a byte vector using the specified encoding
///
/// # Arguments
/// - `s` - The string to encode
/// - `encoding` - The target encoding
///
/// # Returns
/// A `Vec<u8>` containing the encoded bytes; characters Windows-1252 cannot
/// represent come out as numeric character references
pub(crate) fn encode_string(s: &str, encoding: Encoding) -> Vec<u8> {
    match encoding {
        Encoding::Utf8 => s.as_bytes().to_vec(),
        Encoding::Windows1252 => {
            let (encoded, _, _) = encoding_rs::WINDOWS_1252.encode(s);
            encoded.into_owned()
        }
    }
}
