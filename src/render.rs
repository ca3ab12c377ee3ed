//! Terminal rendering for the dashboard views.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::fmt::Write as _;

use crate::net::Profile;

pub const ALL_LOCATIONS: &str = "All Locations";
pub const EMPTY_TABLE: &str = "(no profiles)";

const COLUMN_GAP: &str = "  ";

/// Plain-text table with `ID`, `Name`, and `City` columns, each padded to its
/// widest cell.
#[must_use]
pub fn render_table(rows: &[&Profile]) -> String {
    if rows.is_empty() {
        return format!("{EMPTY_TABLE}\n");
    }

    let header = ["ID", "Name", "City"];
    let mut widths = header.map(|h| h.chars().count());
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(cells(row)) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, header, widths);
    for row in rows {
        push_line(&mut out, cells(row), widths);
    }
    out
}

fn cells(profile: &Profile) -> [&str; 3] {
    [profile.id.as_str(), profile.name.as_str(), profile.city.as_str()]
}

fn push_line(out: &mut String, cells: [&str; 3], widths: [usize; 3]) {
    let mut line = String::new();
    for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
        if i > 0 {
            line.push_str(COLUMN_GAP);
        }
        let _ = write!(line, "{cell:<width$}");
    }
    out.push_str(line.trim_end());
    out.push('\n');
}

/// City options as the filter dropdown lists them: "All Locations" first,
/// the active choice marked with `*`.
#[must_use]
pub fn render_cities(cities: &[&str], selected: &str) -> String {
    let mut out = String::new();
    let marker = |active: bool| if active { '*' } else { ' ' };
    let _ = writeln!(out, "{} {ALL_LOCATIONS}", marker(selected.is_empty()));
    for city in cities {
        let _ = writeln!(out, "{} {city}", marker(*city == selected));
    }
    out
}

/// Pretty JSON array of the given rows.
///
/// # Errors
///
/// Returns the `serde_json` error if serialization fails.
pub fn render_json(rows: &[&Profile]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(rows)
}

/// One-line summary of what is shown versus what is loaded.
#[must_use]
pub fn render_summary(shown: usize, total: usize, search: &str, city: &str) -> String {
    let mut out = format!("{shown} of {total} profiles");
    if !search.is_empty() {
        let _ = write!(out, ", name contains \"{search}\"");
    }
    if !city.is_empty() {
        let _ = write!(out, ", city = {city}");
    }
    out
}
