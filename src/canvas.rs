//! Draws rows as aligned lines of text.

use std::io::{self, Write};

use crate::app::{rates::UnitMode, rows::DiskIoRow};

const NAME_HEADER: &str = "DISK";
const READ_HEADER: &str = "READ";
const WRITE_HEADER: &str = "WRITE";

/// Minimum width of the read and write columns.
const RATE_COLUMN_WIDTH: usize = 10;

/// Writes refreshes out. In raw mode, lines need an explicit carriage return.
#[derive(Debug, Clone, Copy)]
pub struct Painter {
    raw_mode: bool,
}

impl Painter {
    pub fn new(raw_mode: bool) -> Self {
        Self { raw_mode }
    }

    fn line_ending(&self) -> &'static str {
        if self.raw_mode {
            "\r\n"
        } else {
            "\n"
        }
    }

    /// Draws a header followed by one line per row.
    pub fn draw_rows<W: Write>(
        &self, out: &mut W, rows: &[DiskIoRow], unit_mode: UnitMode,
    ) -> io::Result<()> {
        let eol = self.line_ending();
        let name_width = rows
            .iter()
            .map(|row| row.display_name.chars().count())
            .chain(std::iter::once(NAME_HEADER.len()))
            .max()
            .unwrap_or(NAME_HEADER.len());

        let mode = match unit_mode {
            UnitMode::Bytes => "",
            UnitMode::Ops => " (IOPS)",
        };

        write!(
            out,
            "{NAME_HEADER:<name_width$} {READ_HEADER:>RATE_COLUMN_WIDTH$} {WRITE_HEADER:>RATE_COLUMN_WIDTH$}{mode}{eol}"
        )?;

        for row in rows {
            write!(
                out,
                "{:<name_width$} {:>RATE_COLUMN_WIDTH$} {:>RATE_COLUMN_WIDTH$}{eol}",
                row.display_name,
                row.read.to_string(),
                row.write.to_string(),
            )?;
        }

        out.flush()
    }

    /// Draws a single status line, e.g. after a key press changes the mode.
    pub fn draw_status<W: Write>(&self, out: &mut W, message: &str) -> io::Result<()> {
        write!(out, "{message}{}", self.line_ending())?;
        out.flush()
    }
}
