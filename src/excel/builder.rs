//! Fixed-layout roster sheet rendering.

use chrono::NaiveDate;
use rust_xlsxwriter::{Format, FormatAlign, FormatBorder, Workbook, Worksheet, XlsxError};
use tracing::debug;

use crate::error::{RosterError, RosterResult};
use crate::excel::layout::{
    BLOCK_HEADERS, COLUMN_WIDTHS, DATA_ROW_HEIGHT, DATE_LABEL, DATE_LABEL_COL, DATE_ROW,
    DATE_VALUE_COL, FIRST_ROOM_ROW, HEADER_ROW, LAST_GRID_ROW, LEFT_BLOCK_COL, LEFT_BLOCK_ROOMS,
    RIGHT_BLOCK_COL, RIGHT_BLOCK_ROOMS, SPACER_COL,
};
use crate::types::GuestDirectory;

/// Cell styles for the roster grid, built once per run and applied per region.
struct RosterStyles {
    /// `GUEST LIST DATE:` banner label, right-aligned against the date.
    date_label: Format,
    /// The bold report date itself.
    date_value: Format,
    /// Bold bordered block headers (ROOM, GUEST NAME, ...).
    block_header: Format,
    /// Bold bordered room numbers.
    room: Format,
    /// Plain bordered data cells: names, rates, PET/INIT blanks.
    guest: Format,
    /// Spacer column: side borders only, a divider rather than a data cell.
    spacer: Format,
}

impl RosterStyles {
    fn new() -> Self {
        let bordered = Format::new()
            .set_border(FormatBorder::Thin)
            .set_align(FormatAlign::Center)
            .set_align(FormatAlign::VerticalCenter);

        Self {
            date_label: Format::new().set_align(FormatAlign::Right),
            date_value: Format::new().set_bold(),
            block_header: bordered.clone().set_bold(),
            room: bordered.clone().set_bold(),
            guest: bordered,
            spacer: Format::new()
                .set_border_left(FormatBorder::Thin)
                .set_border_right(FormatBorder::Thin)
                .set_align(FormatAlign::Center)
                .set_align(FormatAlign::VerticalCenter),
        }
    }
}

/// Renders the guest directory onto the fixed two-block page.
pub struct RosterSheetBuilder {
    guests: GuestDirectory,
    report_date: NaiveDate,
}

impl RosterSheetBuilder {
    pub fn new(guests: GuestDirectory, report_date: NaiveDate) -> Self {
        Self {
            guests,
            report_date,
        }
    }

    /// Build the complete single-sheet roster workbook in memory.
    ///
    /// Serialization (`save_to_buffer`, `save`) is the caller's concern.
    pub fn build(&self) -> RosterResult<Workbook> {
        let mut workbook = Workbook::new();
        let styles = RosterStyles::new();

        let worksheet = workbook.add_worksheet();
        worksheet.set_landscape();

        for (col, width) in COLUMN_WIDTHS.iter().enumerate() {
            worksheet
                .set_column_width(col as u16, *width)
                .map_err(render_error)?;
        }
        for row in (DATE_ROW + 1)..=LAST_GRID_ROW {
            worksheet
                .set_row_height(row, DATA_ROW_HEIGHT)
                .map_err(render_error)?;
        }

        self.write_banner(worksheet, &styles)?;
        write_block_headers(worksheet, &styles)?;
        self.write_room_rows(worksheet, &styles)?;

        debug!(
            "rendered roster for {} with {} occupied rooms",
            self.report_date,
            self.guests.len()
        );
        Ok(workbook)
    }

    fn write_banner(&self, worksheet: &mut Worksheet, styles: &RosterStyles) -> RosterResult<()> {
        worksheet
            .write_string_with_format(DATE_ROW, DATE_LABEL_COL, DATE_LABEL, &styles.date_label)
            .map_err(render_error)?;
        worksheet
            .write_string_with_format(
                DATE_ROW,
                DATE_VALUE_COL,
                self.report_date.format("%Y-%m-%d").to_string(),
                &styles.date_value,
            )
            .map_err(render_error)?;
        Ok(())
    }

    fn write_room_rows(
        &self,
        worksheet: &mut Worksheet,
        styles: &RosterStyles,
    ) -> RosterResult<()> {
        let rows = LEFT_BLOCK_ROOMS.iter().zip(RIGHT_BLOCK_ROOMS.iter());
        for (i, (&left_room, &right_room)) in rows.enumerate() {
            let row = FIRST_ROOM_ROW + i as u32;
            self.write_room_entry(worksheet, styles, row, LEFT_BLOCK_COL, left_room)?;
            worksheet
                .write_blank(row, SPACER_COL, &styles.spacer)
                .map_err(render_error)?;
            self.write_room_entry(worksheet, styles, row, RIGHT_BLOCK_COL, right_room)?;
        }
        Ok(())
    }

    /// Write one five-cell block entry: room, name, rate, and the PET/INIT
    /// cells that stay blank for handwriting.
    fn write_room_entry(
        &self,
        worksheet: &mut Worksheet,
        styles: &RosterStyles,
        row: u32,
        block_col: u16,
        room: u32,
    ) -> RosterResult<()> {
        worksheet
            .write_number_with_format(row, block_col, f64::from(room), &styles.room)
            .map_err(render_error)?;

        match self.guests.get(&room) {
            Some(record) => {
                worksheet
                    .write_string_with_format(row, block_col + 1, &record.guest_name, &styles.guest)
                    .map_err(render_error)?;
                worksheet
                    .write_number_with_format(row, block_col + 2, record.rate, &styles.guest)
                    .map_err(render_error)?;
            }
            None => {
                worksheet
                    .write_blank(row, block_col + 1, &styles.guest)
                    .map_err(render_error)?;
                worksheet
                    .write_blank(row, block_col + 2, &styles.guest)
                    .map_err(render_error)?;
            }
        }

        worksheet
            .write_blank(row, block_col + 3, &styles.guest)
            .map_err(render_error)?;
        worksheet
            .write_blank(row, block_col + 4, &styles.guest)
            .map_err(render_error)?;
        Ok(())
    }
}

fn write_block_headers(worksheet: &mut Worksheet, styles: &RosterStyles) -> RosterResult<()> {
    for (offset, title) in BLOCK_HEADERS.iter().enumerate() {
        worksheet
            .write_string_with_format(
                HEADER_ROW,
                LEFT_BLOCK_COL + offset as u16,
                *title,
                &styles.block_header,
            )
            .map_err(render_error)?;
        worksheet
            .write_string_with_format(
                HEADER_ROW,
                RIGHT_BLOCK_COL + offset as u16,
                *title,
                &styles.block_header,
            )
            .map_err(render_error)?;
    }
    worksheet
        .write_blank(HEADER_ROW, SPACER_COL, &styles.spacer)
        .map_err(render_error)?;
    Ok(())
}

fn render_error(err: XlsxError) -> RosterError {
    RosterError::Unexpected(format!("roster render failed: {err}"))
}
