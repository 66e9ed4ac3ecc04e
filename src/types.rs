use std::collections::BTreeMap;
use std::path::Path;

//==============================================================================
// Guest records
//==============================================================================

/// One cleaned row of the front-office export.
///
/// The room number is the key of the [`GuestDirectory`], not a field here.
#[derive(Debug, Clone, PartialEq)]
pub struct GuestRecord {
    /// Guest name as exported; may be empty.
    pub guest_name: String,
    /// Nightly rate with any currency sign stripped; blank cells become 0.0.
    pub rate: f64,
}

impl GuestRecord {
    pub fn new(guest_name: impl Into<String>, rate: f64) -> Self {
        Self {
            guest_name: guest_name.into(),
            rate,
        }
    }
}

/// Ordered mapping of room number to the guest currently posted to it.
///
/// At most one record per room: when the export lists a room twice, the later
/// row overwrites the earlier one.
pub type GuestDirectory = BTreeMap<u32, GuestRecord>;

//==============================================================================
// Source format
//==============================================================================

/// Spreadsheet format the collaborator declares for the input stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// Legacy binary export (`.xls`).
    Xls,
    /// OOXML export (`.xlsx`).
    Xlsx,
}

impl SourceFormat {
    /// Infer the format from a file name's extension, case-insensitively.
    ///
    /// Returns `None` for anything that is not `.xls` or `.xlsx`.
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "xls" => Some(SourceFormat::Xls),
            "xlsx" => Some(SourceFormat::Xlsx),
            _ => None,
        }
    }
}
