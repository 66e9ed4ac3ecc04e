//! One-shot pipeline: export stream in, finished roster bytes out.

use std::io::{Read, Seek};

use chrono::{Local, NaiveDate};
use tracing::info;

use crate::error::{RosterError, RosterResult};
use crate::excel::{GuestExtractor, RosterSheetBuilder};
use crate::types::SourceFormat;

/// MIME type the collaborator serves the roster with.
pub const ROSTER_MIME: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Finished roster: workbook bytes plus the suggested download filename.
#[derive(Debug, Clone)]
pub struct Transcription {
    pub content: Vec<u8>,
    pub filename: String,
}

/// Transcribe an In House Guests export into the formatted roster,
/// dated with the current calendar date.
pub fn transcribe<RS>(source: RS, format: SourceFormat) -> RosterResult<Transcription>
where
    RS: Read + Seek,
{
    transcribe_for_date(source, format, Local::now().date_naive())
}

/// Same as [`transcribe`] with an explicit report date.
///
/// Given identical input bytes and date, the run is fully deterministic.
pub fn transcribe_for_date<RS>(
    source: RS,
    format: SourceFormat,
    report_date: NaiveDate,
) -> RosterResult<Transcription>
where
    RS: Read + Seek,
{
    let guests = GuestExtractor::new(format).extract(source)?;
    info!("loaded {} guest records from export", guests.len());

    let mut workbook = RosterSheetBuilder::new(guests, report_date).build()?;
    let content = workbook
        .save_to_buffer()
        .map_err(|e| RosterError::Unexpected(format!("failed to serialize roster: {e}")))?;

    Ok(Transcription {
        content,
        filename: roster_filename(report_date),
    })
}

/// Suggested download name: `In House Guest List <YYYYMMDD>.xlsx`.
pub fn roster_filename(report_date: NaiveDate) -> String {
    format!("In House Guest List {}.xlsx", report_date.format("%Y%m%d"))
}
