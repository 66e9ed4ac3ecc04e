//! Physical layout of the printed roster page.
//!
//! Every position here is fixed by the paper form the desk uses, not by the
//! input data: two mirrored 30-room blocks, a spacer column between them, a
//! date banner on top. Rooms missing from these sequences never print.

/// Room numbers of the left block, top to bottom.
pub const LEFT_BLOCK_ROOMS: [u32; 30] = [
    105, 106, 107, 108, 109, 110, 111, 112, 114, 115, //
    201, 202, 203, 204, 205, 206, 207, 208, 209, 210, //
    211, 212, 214, 215, 216, 217, 218, 219, 220, 221,
];

/// Room numbers of the right block, top to bottom.
pub const RIGHT_BLOCK_ROOMS: [u32; 30] = [
    222, 223, 224, 225, 226, //
    301, 302, 303, 304, 305, 306, 307, 308, 309, 310, //
    311, 312, 314, 315, 316, 317, 318, 319, 320, //
    321, 322, 323, 324, 325, 326,
];

/// Column headers repeated over each block.
pub const BLOCK_HEADERS: [&str; 5] = ["ROOM", "GUEST NAME", "RATE", "PET", "INIT"];

/// Widths of the 11 logical columns: 5 left + spacer + 5 right.
pub const COLUMN_WIDTHS: [f64; 11] = [
    7.0, 31.0, 10.0, 5.0, 5.0, 3.0, 7.0, 31.0, 10.0, 5.0, 5.0,
];

/// First column of each block (ROOM); name and rate follow at +1 and +2.
pub const LEFT_BLOCK_COL: u16 = 0;
pub const RIGHT_BLOCK_COL: u16 = 6;

/// Blank divider between the blocks; gets side borders only.
pub const SPACER_COL: u16 = 5;

/// Banner row: label cell and the bold report date next to it.
pub const DATE_ROW: u32 = 0;
pub const DATE_LABEL_COL: u16 = 1;
pub const DATE_VALUE_COL: u16 = 2;
pub const DATE_LABEL: &str = "GUEST LIST DATE:";

/// Column-header row of the grid.
pub const HEADER_ROW: u32 = 2;

/// First of the 30 room rows; row `FIRST_ROOM_ROW + i` holds sequence entry `i`.
pub const FIRST_ROOM_ROW: u32 = 3;

/// Last grid row (header + 30 room rows end here).
pub const LAST_GRID_ROW: u32 = FIRST_ROOM_ROW + LEFT_BLOCK_ROOMS.len() as u32 - 1;

/// Uniform height for every row below the banner.
pub const DATA_ROW_HEIGHT: f64 = 14.5;
