//! # fritz-adr-dbf
//!
//! A Rust library for writing FritzAdr.dbf, the dBASE III address database
//! read by AVM's FRITZ!Fon, FRITZ!Data, FRITZ!Com and FRITZ!fax
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fritz_adr_dbf::FritzAdr;
//!
//! // 21 fields is the layout FRITZ!fax expects, 19 is the older one
//! let mut fritz_adr = FritzAdr::new(21).unwrap();
//!
//! fritz_adr.add_record([("NAME", "Doe"), ("VORNAME", "John"), ("TELEFAX", "030 1234567")]);
//!
//! std::fs::write("FritzAdr.dbf", fritz_adr.get_database()).unwrap();
//! ```
//!
//! ## Features
//!
//! - Both known table layouts (19 and 21 fields)
//! - Byte-exact header, field descriptors and fixed-width records
//! - UTF-8 passthrough or Windows-1252 string encoding
//! - CSV import

pub mod csv;
pub mod database;
pub mod error;
pub mod field;
pub mod io;
pub mod record;
pub mod schema;
pub mod table;

#[cfg(feature = "python")]
mod python;

pub use crate::csv::{from_csv, from_csv_reader};
pub use crate::database::FritzAdr;
pub use crate::error::{DbfError, Result};
pub use crate::field::{FieldDefinition, FieldType};
pub use crate::io::{to_buffer, to_buffer_at, to_file, to_file_at, Encoding, IoOptions};
pub use crate::record::Record;
pub use crate::schema::Schema;
