//! Inhouse Roster - in-house guest list transcriber
//!
//! This library turns the property-management-system "In House Guests" export
//! into the fixed-layout, print-ready room roster the front desk keeps on a
//! clipboard: two mirrored 30-room columns with guest name, rate, and blank
//! PET/INIT fields for handwriting.
//!
//! # Pipeline
//!
//! - Extract (room, guest, rate) triples from the semi-structured export
//! - Clean and validate them into a room → guest mapping
//! - Render the mapping onto the fixed two-block page layout
//!
//! The web layer that uploads the export and serves the download is a separate
//! collaborator; it hands this crate a readable byte stream plus the declared
//! format, and gets back the finished workbook bytes and a suggested filename.
//!
//! # Example
//!
//! ```no_run
//! use std::fs::File;
//! use std::io::BufReader;
//! use inhouse_roster::{transcribe, SourceFormat};
//!
//! let export = BufReader::new(File::open("In_House_Guests.xls")?);
//! let roster = transcribe(export, SourceFormat::Xls)?;
//!
//! std::fs::write(&roster.filename, &roster.content)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;
pub mod excel;
pub mod transcribe;
pub mod types;

// Re-export commonly used types
pub use error::{RosterError, RosterResult};
pub use transcribe::{roster_filename, transcribe, transcribe_for_date, Transcription, ROSTER_MIME};
pub use types::{GuestDirectory, GuestRecord, SourceFormat};
