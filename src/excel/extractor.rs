//! Guest record extraction from the front-office export.
//!
//! The export is a fixed template: a banner block above the data, guest rows
//! with room/name/rate at fixed column positions, and a totals footer. None
//! of that is documented by the source system; the constants below encode the
//! observed contract.

use std::io::{Read, Seek};

use calamine::{Data, Range, Reader, Xls, Xlsx};
use tracing::debug;

use crate::error::{RosterError, RosterResult};
use crate::types::{GuestDirectory, GuestRecord, SourceFormat};

/// Sheet the front-office report is exported into.
const SOURCE_SHEET: &str = "Sheet1";

/// Banner/metadata rows above the first guest row.
const TEMPLATE_HEADER_ROWS: u32 = 15;

/// Compound room cell, formatted `"<number>-<suffix>"`.
const ROOM_COL: u32 = 3;
/// Guest name cell.
const GUEST_NAME_COL: u32 = 6;
/// Nightly rate cell, possibly `$`-prefixed, possibly blank.
const RATE_COL: u32 = 15;

/// Marker the report writes into the room column of its totals footer.
/// Everything from the first row containing it is discarded.
const FOOTER_MARKER: &str = "Total Rooms";

/// Excel importer for the In House Guests export.
pub struct GuestExtractor {
    format: SourceFormat,
}

impl GuestExtractor {
    pub fn new(format: SourceFormat) -> Self {
        Self { format }
    }

    /// Read the export stream and produce the room → guest mapping.
    pub fn extract<RS>(&self, source: RS) -> RosterResult<GuestDirectory>
    where
        RS: Read + Seek,
    {
        let range = match self.format {
            SourceFormat::Xlsx => {
                let mut workbook: Xlsx<_> = Xlsx::new(source)
                    .map_err(|e| RosterError::Unexpected(format!("failed to open export: {e}")))?;
                workbook.worksheet_range(SOURCE_SHEET).map_err(|e| {
                    RosterError::Structure(format!("sheet '{SOURCE_SHEET}' not found: {e}"))
                })?
            }
            SourceFormat::Xls => {
                let mut workbook: Xls<_> = Xls::new(source)
                    .map_err(|e| RosterError::Unexpected(format!("failed to open export: {e}")))?;
                workbook.worksheet_range(SOURCE_SHEET).map_err(|e| {
                    RosterError::Structure(format!("sheet '{SOURCE_SHEET}' not found: {e}"))
                })?
            }
        };

        Self::collect_guests(&range)
    }

    /// Scan the data region and build the directory.
    ///
    /// Rows are addressed in absolute sheet coordinates so the fixed 15-row
    /// skip holds even when the used range starts below the sheet origin.
    fn collect_guests(range: &Range<Data>) -> RosterResult<GuestDirectory> {
        let mut guests = GuestDirectory::new();

        let Some((last_row, last_col)) = range.end() else {
            // Nothing in the sheet at all: no guests, not an error.
            return Ok(guests);
        };

        if last_row >= TEMPLATE_HEADER_ROWS && last_col < RATE_COL {
            return Err(RosterError::Structure(format!(
                "sheet '{SOURCE_SHEET}' has {} columns, rate expected in column {}",
                last_col + 1,
                RATE_COL + 1
            )));
        }

        for row in TEMPLATE_HEADER_ROWS..=last_row {
            let room_raw = cell_text(range.get_value((row, ROOM_COL)));
            if room_raw.contains(FOOTER_MARKER) {
                // Totals footer; no guest rows below it.
                break;
            }

            let Some(room_number) = parse_room_number(&room_raw)? else {
                continue;
            };

            let guest_name = cell_text(range.get_value((row, GUEST_NAME_COL)));
            let rate = parse_rate(&cell_text(range.get_value((row, RATE_COL))))?;

            // Later rows overwrite earlier ones for the same room.
            guests.insert(room_number, GuestRecord { guest_name, rate });
        }

        debug!("extracted {} guest records", guests.len());
        Ok(guests)
    }
}

/// Render a source cell as trimmed text. Missing and empty cells become "".
fn cell_text(cell: Option<&Data>) -> String {
    match cell {
        None | Some(Data::Empty) => String::new(),
        Some(Data::String(s)) => s.trim().to_string(),
        Some(other) => other.to_string(),
    }
}

/// Pull the room number out of a compound `"<number>-<suffix>"` cell.
///
/// `None` means "no room posted on this line": the cell was blank, or the
/// number parsed to 0, which the export itself uses as a no-room placeholder.
/// A genuine room numbered 0 therefore cannot occur in valid input.
fn parse_room_number(raw: &str) -> RosterResult<Option<u32>> {
    if raw.is_empty() {
        return Ok(None);
    }

    let prefix = raw.split_once('-').map_or(raw, |(prefix, _)| prefix).trim();
    let room = prefix.parse::<u32>().map_err(|_| {
        RosterError::Conversion(format!("room cell {raw:?} does not hold a room number"))
    })?;

    Ok(if room == 0 { None } else { Some(room) })
}

/// Parse the nightly rate, tolerating a currency sign and blank cells.
fn parse_rate(raw: &str) -> RosterResult<f64> {
    let cleaned = raw.trim_matches('$').trim();
    if cleaned.is_empty() {
        return Ok(0.0);
    }

    cleaned
        .parse::<f64>()
        .map_err(|_| RosterError::Conversion(format!("rate cell {raw:?} is not a valid amount")))
}
