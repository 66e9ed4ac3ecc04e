//! Extractor tests against synthetic front-office exports.
//!
//! Fixtures are built in memory with rust_xlsxwriter and fed to the extractor
//! through a cursor, mirroring the byte stream the upload layer hands over.

use std::io::Cursor;

use inhouse_roster::excel::GuestExtractor;
use inhouse_roster::{GuestRecord, RosterError, SourceFormat};
use pretty_assertions::assert_eq;
use rust_xlsxwriter::{Workbook, Worksheet};

// Template positions of the export (absolute sheet coordinates).
const ROOM_COL: u16 = 3;
const NAME_COL: u16 = 6;
const RATE_COL: u16 = 15;
const FIRST_DATA_ROW: u32 = 15;

/// Write the banner block the real report carries above its data rows,
/// including the column labels that give the sheet its full width.
fn write_banner(worksheet: &mut Worksheet) {
    worksheet
        .write_string(0, 0, "In House Guest")
        .unwrap();
    worksheet
        .write_string(13, 0, "Best Western at Firestone")
        .unwrap();
    worksheet.write_string(14, ROOM_COL, "Room").unwrap();
    worksheet.write_string(14, NAME_COL, "Guest Name").unwrap();
    worksheet.write_string(14, RATE_COL, "Rate").unwrap();
}

/// One guest row at an absolute row index; empty strings leave the cell unset.
fn write_guest_row(worksheet: &mut Worksheet, row: u32, room: &str, name: &str, rate: &str) {
    if !room.is_empty() {
        worksheet.write_string(row, ROOM_COL, room).unwrap();
    }
    if !name.is_empty() {
        worksheet.write_string(row, NAME_COL, name).unwrap();
    }
    if !rate.is_empty() {
        worksheet.write_string(row, RATE_COL, rate).unwrap();
    }
}

fn into_stream(mut workbook: Workbook) -> Cursor<Vec<u8>> {
    Cursor::new(workbook.save_to_buffer().unwrap())
}

fn extract(workbook: Workbook) -> Result<inhouse_roster::GuestDirectory, RosterError> {
    GuestExtractor::new(SourceFormat::Xlsx).extract(into_stream(workbook))
}

#[test]
fn test_extracts_room_name_and_rate_triple() {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    write_banner(worksheet);
    write_guest_row(worksheet, FIRST_DATA_ROW, "105-A", "Jane Doe", "$129.00");

    let guests = extract(workbook).unwrap();

    assert_eq!(guests.len(), 1);
    assert_eq!(guests[&105], GuestRecord::new("Jane Doe", 129.0));
}

#[test]
fn test_rows_inside_the_banner_block_are_skipped() {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    write_banner(worksheet);
    // Looks exactly like a guest row but sits above the data boundary.
    write_guest_row(worksheet, 5, "999-X", "Phantom Guest", "$500.00");
    write_guest_row(worksheet, FIRST_DATA_ROW, "106-K", "Real Guest", "$99.00");

    let guests = extract(workbook).unwrap();

    assert_eq!(guests.len(), 1);
    assert!(guests.contains_key(&106));
}

#[test]
fn test_rows_from_the_totals_footer_onward_are_discarded() {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    write_banner(worksheet);
    write_guest_row(worksheet, FIRST_DATA_ROW, "105-A", "Jane Doe", "$129.00");
    write_guest_row(worksheet, FIRST_DATA_ROW + 1, "106-K", "John Roe", "$99.00");
    // The footer marker lands in the room column and is not a guest row.
    write_guest_row(worksheet, FIRST_DATA_ROW + 2, "Total Rooms: 2", "", "");
    write_guest_row(worksheet, FIRST_DATA_ROW + 3, "107-Q", "Below Footer", "$79.00");

    let guests = extract(workbook).unwrap();

    assert_eq!(guests.len(), 2);
    assert!(!guests.contains_key(&107));
}

#[test]
fn test_duplicate_room_keeps_the_last_row() {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    write_banner(worksheet);
    write_guest_row(worksheet, FIRST_DATA_ROW, "110-A", "First Booking", "$99.00");
    write_guest_row(worksheet, FIRST_DATA_ROW + 1, "110-B", "Second Booking", "$119.00");

    let guests = extract(workbook).unwrap();

    assert_eq!(guests.len(), 1);
    assert_eq!(guests[&110], GuestRecord::new("Second Booking", 119.0));
}

#[test]
fn test_rows_without_a_room_are_dropped() {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    write_banner(worksheet);
    write_guest_row(worksheet, FIRST_DATA_ROW, "", "No Room Posted", "$50.00");
    write_guest_row(worksheet, FIRST_DATA_ROW + 1, "0-", "Placeholder", "$60.00");
    write_guest_row(worksheet, FIRST_DATA_ROW + 2, "114-Q", "Kept", "$70.00");

    let guests = extract(workbook).unwrap();

    assert_eq!(guests.keys().copied().collect::<Vec<_>>(), vec![114]);
}

#[test]
fn test_blank_rate_defaults_to_zero() {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    write_banner(worksheet);
    write_guest_row(worksheet, FIRST_DATA_ROW, "105-A", "Comp Stay", "");

    let guests = extract(workbook).unwrap();

    assert_eq!(guests[&105].rate, 0.0);
}

#[test]
fn test_zero_dollar_rate_is_a_real_zero_entry() {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    write_banner(worksheet);
    write_guest_row(worksheet, FIRST_DATA_ROW, "105-A", "Comp Stay", "$0.00");

    let guests = extract(workbook).unwrap();

    // The room is present with rate 0.0, distinct from an unoccupied room.
    assert!(guests.contains_key(&105));
    assert_eq!(guests[&105].rate, 0.0);
}

#[test]
fn test_numeric_rate_cell_is_accepted() {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    write_banner(worksheet);
    write_guest_row(worksheet, FIRST_DATA_ROW, "105-A", "Jane Doe", "");
    worksheet.write_number(FIRST_DATA_ROW, RATE_COL, 129.5).unwrap();

    let guests = extract(workbook).unwrap();

    assert_eq!(guests[&105].rate, 129.5);
}

#[test]
fn test_empty_guest_name_is_preserved_as_empty() {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    write_banner(worksheet);
    write_guest_row(worksheet, FIRST_DATA_ROW, "105-A", "", "$129.00");

    let guests = extract(workbook).unwrap();

    assert_eq!(guests[&105].guest_name, "");
}

#[test]
fn test_unparseable_room_aborts_the_run() {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    write_banner(worksheet);
    write_guest_row(worksheet, FIRST_DATA_ROW, "Suite-1", "Jane Doe", "$129.00");

    let err = extract(workbook).unwrap_err();

    assert!(matches!(err, RosterError::Conversion(_)));
    assert!(err.to_string().contains("Suite-1"));
}

#[test]
fn test_unparseable_rate_aborts_the_run() {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    write_banner(worksheet);
    write_guest_row(worksheet, FIRST_DATA_ROW, "105-A", "Jane Doe", "comp");

    let err = extract(workbook).unwrap_err();

    assert!(matches!(err, RosterError::Conversion(_)));
    assert!(err.to_string().contains("comp"));
}

#[test]
fn test_missing_sheet1_is_a_structural_error() {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Report").unwrap();
    write_banner(worksheet);
    write_guest_row(worksheet, FIRST_DATA_ROW, "105-A", "Jane Doe", "$129.00");

    let err = extract(workbook).unwrap_err();

    assert!(matches!(err, RosterError::Structure(_)));
    assert!(err.to_string().contains("Sheet1"));
}

#[test]
fn test_sheet_narrower_than_the_rate_column_is_a_structural_error() {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    // Data rows exist, but the sheet ends before the rate column.
    worksheet.write_string(0, 0, "In House Guest").unwrap();
    worksheet.write_string(FIRST_DATA_ROW, ROOM_COL, "105-A").unwrap();
    worksheet.write_string(FIRST_DATA_ROW, NAME_COL, "Jane Doe").unwrap();

    let err = extract(workbook).unwrap_err();

    assert!(matches!(err, RosterError::Structure(_)));
}

#[test]
fn test_export_with_no_guest_rows_yields_an_empty_directory() {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    write_banner(worksheet);

    let guests = extract(workbook).unwrap();

    assert!(guests.is_empty());
}

#[test]
fn test_entirely_empty_sheet_yields_an_empty_directory() {
    let mut workbook = Workbook::new();
    workbook.add_worksheet();

    let guests = extract(workbook).unwrap();

    assert!(guests.is_empty());
}
