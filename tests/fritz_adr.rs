use std::collections::HashMap;

use byteorder::{ByteOrder, LittleEndian};
use chrono::NaiveDate;
use fritz_adr_dbf::{to_buffer_at, to_file, to_file_at, DbfError, FritzAdr, IoOptions, Schema};

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2021, 3, 4).unwrap()
}

#[test]
fn test_empty_database() {
    for (fields, header_length) in [(19, 641), (21, 705)] {
        let db = FritzAdr::new(fields).unwrap();
        let image = db.get_database();

        assert_eq!(LittleEndian::read_u32(&image[4..8]), 0);
        assert_eq!(LittleEndian::read_u16(&image[8..10]), header_length);
        assert_eq!(image.len(), header_length as usize + 1);
    }
}

#[test]
fn test_invalid_field_count() {
    for fields in [0, 18, 20, 22] {
        assert!(matches!(
            FritzAdr::new(fields),
            Err(DbfError::InvalidSchema(n)) if n == fields
        ));
    }
}

#[test]
fn test_single_record_21_fields() {
    let mut db = FritzAdr::new(21).unwrap();
    db.add_record(HashMap::from([("NAME", "Doe"), ("VORNAME", "John")]));

    let image = to_buffer_at(&db, date());
    assert_eq!(LittleEndian::read_u32(&image[4..8]), 1);
    // The 0x0D terminator is part of the 705 header bytes
    assert_eq!(image.len(), 705 + 1750 + 1);
    assert_eq!(&image[1..4], &[21, 3, 4]);
    assert_eq!(image[704], 0x0D);
    assert_eq!(image[705], 0x20);
    assert_eq!(*image.last().unwrap(), 0x1A);

    let name = 705 + Schema::Fields21.field_offset("NAME").unwrap();
    assert_eq!(&image[name..name + 40], format!("Doe{}", " ".repeat(37)).as_bytes());

    let vorname = 705 + Schema::Fields21.field_offset("VORNAME").unwrap();
    assert_eq!(&image[vorname..vorname + 4], b"John");
}

#[test]
fn test_record_lengths() {
    for (fields, record_length) in [(19, 1646), (21, 1750)] {
        let mut db = FritzAdr::new(fields).unwrap();
        db.add_record([("FIRMA", "AVM")]);
        db.add_record([("FIRMA", "AVM")]);

        let image = db.get_database();
        let header_length = db.header_length() as usize;
        assert_eq!(LittleEndian::read_u16(&image[10..12]), record_length);
        assert_eq!(image.len(), header_length + 2 * record_length as usize + 1);
    }
}

#[test]
fn test_repeated_rendering_is_stable() {
    let mut db = FritzAdr::new(19).unwrap();
    db.add_record([("NAME", "Doe"), ("EMAIL", "john@example.org")]);

    let first = to_buffer_at(&db, date());
    let second = to_buffer_at(&db, date());
    assert_eq!(first, second);

    // Only the date bytes may differ between two calls on different days
    let today = db.get_database();
    assert_eq!(first.len(), today.len());
    assert_eq!(first[0], today[0]);
    assert_eq!(first[4..], today[4..]);
}

#[test]
fn test_header_tracks_added_records() {
    let mut db = FritzAdr::new(21).unwrap();
    let before = to_buffer_at(&db, date());

    db.add_record([("NAME", "Doe")]);
    db.add_record([("NAME", "Roe")]);
    let after = to_buffer_at(&db, date());

    assert_eq!(LittleEndian::read_u32(&before[4..8]), 0);
    assert_eq!(LittleEndian::read_u32(&after[4..8]), 2);
    assert_eq!(before[..4], after[..4]);
    assert_eq!(before[8..705], after[8..705]);
}

#[test]
fn test_truncation_and_padding() {
    let mut db = FritzAdr::new(21).unwrap();
    let long = "x".repeat(300);
    db.add_record([("PLZ", "1"), ("NOTIZEN", long.as_str())]);

    let image = to_buffer_at(&db, date());
    let plz = 705 + Schema::Fields21.field_offset("PLZ").unwrap();
    assert_eq!(&image[plz..plz + 10], b"1         ");

    let notizen = 705 + Schema::Fields21.field_offset("NOTIZEN").unwrap();
    assert_eq!(&image[notizen..notizen + 254], "x".repeat(254).as_bytes());
    // The next field still starts with its blank padding
    assert_eq!(image[notizen + 254], b' ');
}

#[test]
fn test_unknown_field_leaves_record_blank() {
    let mut db = FritzAdr::new(19).unwrap();
    db.add_record([("NOT_A_FIELD", "x")]);

    let image = to_buffer_at(&db, date());
    let record = &image[641..641 + 1646];
    assert!(record.iter().all(|&b| b == b' '));
}

#[test]
fn test_windows_1252_table() {
    let mut db = FritzAdr::with_options(21, IoOptions::fritz_adr()).unwrap();
    db.add_record([("ORT", "Köln")]);

    let image = to_buffer_at(&db, date());
    let ort = 705 + Schema::Fields21.field_offset("ORT").unwrap();
    assert_eq!(&image[ort..ort + 5], b"K\xF6ln ");
}

#[test]
fn test_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("FritzAdr.dbf");

    let mut db = FritzAdr::new(21).unwrap();
    db.add_record([("NAME", "Doe")]);
    to_file_at(&db, &path, date()).unwrap();

    let written = std::fs::read(&path).unwrap();
    assert_eq!(written, to_buffer_at(&db, date()));
    assert_eq!(&written[1..4], &[21, 3, 4]);
}

#[test]
fn test_to_file_uses_current_state() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("FritzAdr.dbf");

    let mut db = FritzAdr::new(19).unwrap();
    db.add_record([("NAME", "Doe")]);
    db.add_record([("NAME", "Roe")]);
    to_file(&db, &path).unwrap();

    let written = std::fs::read(&path).unwrap();
    assert_eq!(written.len(), 641 + 2 * 1646 + 1);
    assert_eq!(LittleEndian::read_u32(&written[4..8]), 2);
}
