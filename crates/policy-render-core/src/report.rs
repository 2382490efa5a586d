//! Three-table report: access, row filter and data mask policies.
//!
//! Sections are always written in that order, each as a label line, the grid
//! and a blank line. Empty row sets still produce headers and borders.
//!
//! Tables are laid out by `comfy-table` with an ASCII grid style:
//!
//! ```text
//! +----+------+
//! | ID | Name |
//! +====+======+
//! | 1  | p1   |
//! +----+------+
//! ```

use comfy_table::presets::ASCII_FULL;
use comfy_table::{ContentArrangement, Table, TableComponent};
use std::io::{self, Write};

use crate::flatten::{PolicyRow, PolicyTables};

/// Headers shared by all three tables.
pub const COMMON_HEADERS: [&str; 9] = [
    "ID", "Name", "URL", "DB", "Table", "Column", "UDF", "Users", "Accesses",
];

/// Extra header of the row filter table.
pub const ROW_FILTER_HEADER: &str = "Row Filter Expression";

/// Extra header of the data mask table.
pub const DATA_MASK_HEADER: &str = "Data Mask Expression";

pub const ACCESS_LABEL: &str = "Access Policies:";
pub const ROW_FILTER_LABEL: &str = "Row Filter Policies:";
pub const DATA_MASK_LABEL: &str = "Data Mask Policies:";

/// Write the full report.
pub fn write_report<W: Write>(tables: &PolicyTables, mut out: W) -> io::Result<()> {
    write_section(&mut out, ACCESS_LABEL, None, &tables.access)?;
    write_section(
        &mut out,
        ROW_FILTER_LABEL,
        Some(ROW_FILTER_HEADER),
        &tables.row_filter,
    )?;
    write_section(
        &mut out,
        DATA_MASK_LABEL,
        Some(DATA_MASK_HEADER),
        &tables.data_mask,
    )?;
    out.flush()
}

fn write_section<W: Write>(
    out: &mut W,
    label: &str,
    extra_header: Option<&str>,
    rows: &[PolicyRow],
) -> io::Result<()> {
    let headers = COMMON_HEADERS.iter().copied().chain(extra_header);

    writeln!(out, "{}", label)?;
    writeln!(out, "{}", grid_table(headers, rows))?;
    writeln!(out)
}

/// Build an ASCII grid: `=` under the header, `-` between data rows, `+` at
/// every intersection. Columns are sized to content and never wrapped.
fn grid_table<'a>(headers: impl IntoIterator<Item = &'a str>, rows: &[PolicyRow]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_style(TableComponent::MiddleHeaderIntersections, '+')
        .set_style(TableComponent::LeftBorderIntersections, '+')
        .set_style(TableComponent::RightBorderIntersections, '+')
        .set_content_arrangement(ContentArrangement::Disabled)
        .set_header(headers);

    for row in rows {
        table.add_row(row.cells());
    }
    table
}
