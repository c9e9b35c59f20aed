use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::database::FritzAdr;
use crate::error::{DbfError, Result};
use crate::io::IoOptions;
use crate::schema::Schema;

/// Build a FritzAdr table from a CSV file
///
/// The first row names the columns, using the dBASE field names
/// (`NAME`, `VORNAME`, `TELEFON`, ...). Every following row becomes one record.
/// Columns that are not part of the layout are ignored, as are empty cells.
///
/// For example:
/// ```text
/// NAME;VORNAME;TELEFON
/// Doe;John;030 1234567
/// ```
///
/// # Arguments
/// - `path` - The path to the CSV file to read
/// - `schema` - The table layout to fill
/// - `options` - Encoding options for the resulting table
/// - `delimiter` - Optional column delimiter. Default is ','
///
/// # Returns
/// A FritzAdr table holding one record per data row
pub fn from_csv<P: AsRef<Path>>(
    path: P,
    schema: Schema,
    options: IoOptions,
    delimiter: Option<u8>,
) -> Result<FritzAdr> {
    let file = File::open(path)?;
    from_csv_reader(BufReader::new(file), schema, options, delimiter)
}

/// Build a FritzAdr table from any CSV source
///
/// See [`from_csv`] for the expected layout.
///
/// # Errors
/// - `DbfError::CsvError` if the input has no header row or cannot be parsed
pub fn from_csv_reader<R: Read>(
    reader: R,
    schema: Schema,
    options: IoOptions,
    delimiter: Option<u8>,
) -> Result<FritzAdr> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter.unwrap_or(b','))
        .from_reader(reader);

    let mut records = csv_reader.records();

    // Parse header
    let header = records
        .next()
        .ok_or_else(|| DbfError::CsvError("CSV file is empty".to_string()))??;

    let columns: Vec<String> = header.iter().map(|name| name.trim().to_string()).collect();

    for name in columns.iter().filter(|name| !schema.contains_field(name)) {
        tracing::debug!(column = name.as_str(), "CSV column is not a FritzAdr field");
    }

    let mut db = FritzAdr::from_schema(schema, options);

    // Parse data rows
    for result in records {
        let row = result?;
        db.add_record(
            columns
                .iter()
                .zip(row.iter())
                .filter(|(_, value)| !value.is_empty()),
        );
    }

    Ok(db)
}
