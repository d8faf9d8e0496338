//! Console and spreadsheet renderings of the status matrix.

use crate::errors::{self, Result};
use crate::logdate;
use crate::matrix::StatusMatrix;
use crate::status::Status;
use chrono::NaiveDate;
use itertools::Itertools;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook, Worksheet};
use std::path::Path;

/// Label of the sensor column.
const INDEX_LABEL: &str = "name";

/// Spreadsheet position of the header cell of the sensor column (zero-based).
const FIRST_ROW: usize = 1;
const FIRST_COL: usize = 1;

const BORDER_COLOR: u32 = 0x999999;
const HEADER_FILL: u32 = 0xF5F5F5;

/// Matrix as plain text, one line per sensor.
pub fn console_table(matrix: &StatusMatrix) -> String {
    let labels = matrix.column_labels();
    let name_width = matrix
        .sensors
        .iter()
        .map(|s| s.chars().count())
        .chain([INDEX_LABEL.len()])
        .max()
        .unwrap_or_default();
    let mut lines = vec![];
    lines.push(
        [format!("{INDEX_LABEL:<name_width$}")]
            .into_iter()
            .chain(labels.iter().map(|l| format!("{l:>10}")))
            .join("  "),
    );
    for (i, sensor) in matrix.sensors.iter().enumerate() {
        lines.push(
            [format!("{sensor:<name_width$}")]
                .into_iter()
                .chain(matrix.row(i).iter().map(|s| format!("{:>10}", s.symbol())))
                .join("  "),
        );
    }
    lines.iter().map(|l| format!("{}\n", l.trim_end())).join("")
}

/// `results_DD.MM.YYYY_..._DD.MM.YYYY.xlsx`, over the distinct dates in ascending order.
pub fn output_filename(dates: &[NaiveDate]) -> String {
    let parts = ["results".to_owned()]
        .into_iter()
        .chain(dates.iter().sorted().dedup().map(logdate::log_date))
        .join("_");
    format!("{parts}.xlsx")
}

/// Font and fill colours of a data cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellColors {
    pub font: Color,
    pub fill: Color,
}

pub fn status_colors(status: Status) -> CellColors {
    let (font, fill) = match status {
        Status::Ok => (0x006100, 0xC6EFCE),
        Status::Short => (0x9C0006, 0xFFC7CE),
        Status::Alarm => (0x9C6500, 0xFFEB9C),
    };
    CellColors {
        font: Color::RGB(font),
        fill: Color::RGB(fill),
    }
}

/// How a spreadsheet cell is styled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellStyle {
    /// Header row, including the label of the sensor column.
    Header,
    /// Sensor names.
    Index,
    /// Status symbols.
    Body(Status),
}

impl CellStyle {
    fn format(self) -> Format {
        match self {
            CellStyle::Header => header_format(),
            CellStyle::Index => index_format(),
            CellStyle::Body(status) => body_format(status),
        }
    }
}

/// One spreadsheet cell, zero-based.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SheetCell {
    pub row: u32,
    pub col: u16,
    pub text: String,
    pub style: CellStyle,
}

fn body_format(status: Status) -> Format {
    let colors = status_colors(status);
    Format::new()
        .set_align(FormatAlign::Center)
        .set_font_name("Calibri")
        .set_font_size(11.0)
        .set_font_color(colors.font)
        .set_background_color(colors.fill)
        .set_border(FormatBorder::Medium)
        .set_border_color(Color::RGB(BORDER_COLOR))
}

fn index_format() -> Format {
    Format::new()
        .set_align(FormatAlign::Left)
        .set_font_name("Liberation Sans")
        .set_font_size(10.0)
        .set_border(FormatBorder::Medium)
        .set_border_color(Color::RGB(BORDER_COLOR))
}

fn header_format() -> Format {
    Format::new()
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
        .set_font_name("Liberation Sans")
        .set_font_size(7.0)
        .set_border(FormatBorder::Medium)
        .set_border_bottom(FormatBorder::Double)
        .set_border_color(Color::RGB(BORDER_COLOR))
        .set_background_color(Color::RGB(HEADER_FILL))
}

fn cell(row: usize, col: usize) -> Result<(u32, u16)> {
    match (u32::try_from(FIRST_ROW + row), u16::try_from(FIRST_COL + col)) {
        (Ok(r), Ok(c)) => Ok((r, c)),
        _ => Err(errors::invalid_input_ref("status matrix too large for a spreadsheet")),
    }
}

fn sheet_cell(row: usize, col: usize, text: &str, style: CellStyle) -> Result<SheetCell> {
    let (row, col) = cell(row, col)?;
    Ok(SheetCell {
        row,
        col,
        text: text.to_owned(),
        style,
    })
}

/// Every cell of the spreadsheet: header row, sensor column and statuses.
pub fn sheet_cells(matrix: &StatusMatrix) -> Result<Vec<SheetCell>> {
    let mut cells = vec![sheet_cell(0, 0, INDEX_LABEL, CellStyle::Header)?];
    for (j, label) in matrix.column_labels().iter().enumerate() {
        cells.push(sheet_cell(0, j + 1, label, CellStyle::Header)?);
    }
    for (i, sensor) in matrix.sensors.iter().enumerate() {
        cells.push(sheet_cell(i + 1, 0, sensor, CellStyle::Index)?);
        for (j, &status) in matrix.row(i).iter().enumerate() {
            let text = status.to_string();
            cells.push(sheet_cell(i + 1, j + 1, &text, CellStyle::Body(status))?);
        }
    }
    Ok(cells)
}

fn fill_worksheet(worksheet: &mut Worksheet, matrix: &StatusMatrix) -> Result<()> {
    let (_, index_col) = cell(0, 0)?;
    worksheet.set_column_width(index_col, 12)?;
    for c in sheet_cells(matrix)? {
        if c.style == CellStyle::Header && c.col != index_col {
            worksheet.set_column_width(c.col, 10)?;
        }
        worksheet.write_string_with_format(c.row, c.col, c.text, &c.style.format())?;
    }
    Ok(())
}

/// Write the matrix as a styled spreadsheet.
///
/// The header cell of the sensor column is at B2.
pub fn write_spreadsheet(matrix: &StatusMatrix, path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Sheet1")?;
    fill_worksheet(worksheet, matrix)?;
    workbook.save(path)?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::matrix;
    use crate::status::ClassifiedReading;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn cr(name: &str, day: u32, status: Status) -> ClassifiedReading {
        ClassifiedReading {
            name: name.to_owned(),
            date: ymd(2023, 1, day),
            status,
        }
    }

    fn example() -> StatusMatrix {
        matrix::build_matrix(&[
            cr("Sensor1", 1, Status::Ok),
            cr("Sensor2", 1, Status::Short),
            cr("Sensor1", 2, Status::Short),
            cr("Sensor12", 2, Status::Alarm),
        ])
        .unwrap()
    }

    #[test]
    fn console_table_basic() {
        let expected = "\
name      01/01/2023  02/01/2023
Sensor1            +           -
Sensor2            -           -
Sensor12           -           !
";
        assert_eq!(console_table(&example()), expected);
    }

    #[test]
    fn console_table_repeatable() {
        let m = example();
        assert_eq!(console_table(&m), console_table(&m));
    }

    #[test]
    fn console_table_empty() {
        let m = matrix::build_matrix(&[]).unwrap();
        assert_eq!(console_table(&m), "name\n");
    }

    #[test]
    fn output_filename_basic() {
        let dates = [ymd(2023, 1, 2), ymd(2022, 12, 31), ymd(2023, 1, 2)];
        assert_eq!(
            output_filename(&dates),
            "results_31.12.2022_02.01.2023.xlsx"
        );
        assert_eq!(output_filename(&[ymd(2023, 1, 1)]), "results_01.01.2023.xlsx");
        assert_eq!(output_filename(&[]), "results.xlsx");
    }

    #[test]
    fn colors() {
        assert_eq!(status_colors(Status::Ok).fill, Color::RGB(0xC6EFCE));
        assert_eq!(status_colors(Status::Ok).font, Color::RGB(0x006100));
        assert_eq!(status_colors(Status::Short).fill, Color::RGB(0xFFC7CE));
        assert_eq!(status_colors(Status::Short).font, Color::RGB(0x9C0006));
        assert_eq!(status_colors(Status::Alarm).fill, Color::RGB(0xFFEB9C));
        assert_eq!(status_colors(Status::Alarm).font, Color::RGB(0x9C6500));
    }

    #[test]
    fn body_format_follows_status() {
        for status in [Status::Ok, Status::Short, Status::Alarm] {
            let colors = status_colors(status);
            let expected = Format::new()
                .set_align(FormatAlign::Center)
                .set_font_name("Calibri")
                .set_font_size(11.0)
                .set_font_color(colors.font)
                .set_background_color(colors.fill)
                .set_border(FormatBorder::Medium)
                .set_border_color(Color::RGB(BORDER_COLOR));
            assert_eq!(CellStyle::Body(status).format(), expected);
        }
        assert_ne!(
            CellStyle::Body(Status::Ok).format(),
            CellStyle::Body(Status::Short).format()
        );
        assert_ne!(CellStyle::Header.format(), CellStyle::Index.format());
    }

    #[test]
    fn sheet_cells_layout() {
        let cells = sheet_cells(&example()).unwrap();
        // 1 + 2 header cells, 3 sensor names, 3 × 2 statuses
        assert_eq!(cells.len(), 12);
        let at = |row: u32, col: u16| {
            cells
                .iter()
                .find(|c| c.row == row && c.col == col)
                .unwrap()
        };
        // B2
        assert_eq!(at(1, 1).text, "name");
        assert_eq!(at(1, 1).style, CellStyle::Header);
        assert_eq!(at(1, 2).text, "01/01/2023");
        assert_eq!(at(1, 3).text, "02/01/2023");
        assert_eq!(at(1, 3).style, CellStyle::Header);
        assert_eq!(at(2, 1).text, "Sensor1");
        assert_eq!(at(2, 1).style, CellStyle::Index);
        assert_eq!(at(4, 1).text, "Sensor12");
        assert_eq!(at(2, 2).text, "+");
        assert_eq!(at(2, 2).style, CellStyle::Body(Status::Ok));
        assert_eq!(at(2, 3).style, CellStyle::Body(Status::Short));
        assert_eq!(at(4, 3).text, "!");
        assert_eq!(at(4, 3).style, CellStyle::Body(Status::Alarm));
        assert!(cells.iter().all(|c| c.row >= 1 && c.col >= 1));
        for c in &cells {
            if let CellStyle::Body(status) = c.style {
                assert_eq!(c.text, status.to_string());
            }
        }
    }

    #[test]
    fn write_spreadsheet_basic() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results_01.01.2023_02.01.2023.xlsx");
        write_spreadsheet(&example(), &path).unwrap();
        let data = std::fs::read(&path).unwrap();
        assert!(data.starts_with(b"PK"));
    }

    #[test]
    fn cell_offset() {
        assert_eq!(cell(0, 0).unwrap(), (1, 1));
        assert_eq!(cell(3, 2).unwrap(), (4, 3));
        assert!(cell(0, 70000).is_err());
    }
}
