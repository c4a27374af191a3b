//! CSV codec for [`PopulationTable`].
//!
//! Layout: a `TimeStep,<species>...` header, then one row per tick with the
//! tick index and one integer count per species column.

use crate::error::{IoError, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use trophica_data::PopulationTable;

pub const TICK_COLUMN: &str = "TimeStep";

/// Writes `table` to `path`, replacing any existing file.
///
/// # Errors
/// [`IoError::FileSystem`] naming `path` if it cannot be created or written.
pub fn write_table<P: AsRef<Path>>(path: P, table: &PopulationTable) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| IoError::file_system(path, e))?;
    let mut out = BufWriter::new(file);
    encode(&mut out, table).map_err(|e| IoError::file_system(path, e))?;
    out.flush().map_err(|e| IoError::file_system(path, e))?;
    tracing::debug!(path = %path.display(), rows = table.len(), "Wrote population table");
    Ok(())
}

/// Encodes `table` as CSV text.
pub fn to_csv(table: &PopulationTable) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = encode(&mut buf, table);
    String::from_utf8_lossy(&buf).into_owned()
}

fn encode<W: Write>(out: &mut W, table: &PopulationTable) -> std::io::Result<()> {
    write!(out, "{TICK_COLUMN}")?;
    for name in &table.species {
        write!(out, ",{name}")?;
    }
    writeln!(out)?;

    for (row, tick) in table.ticks.iter().enumerate() {
        write!(out, "{tick}")?;
        for column in &table.columns {
            write!(out, ",{}", column.get(row).copied().unwrap_or(0))?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Reads a table previously written by [`write_table`].
///
/// # Errors
/// [`IoError::FileSystem`] if the file cannot be read, [`IoError::Parse`] if
/// its contents are malformed.
pub fn read_table<P: AsRef<Path>>(path: P) -> Result<PopulationTable> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| IoError::file_system(path, e))?;
    parse_table(&text, path)
}

/// Parses CSV text. `path` is only used in error messages.
pub fn parse_table(text: &str, path: &Path) -> Result<PopulationTable> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim_end_matches('\r')))
        .filter(|(_, l)| !l.trim().is_empty());

    let (_, header) = lines
        .next()
        .ok_or_else(|| IoError::parse(path, 1, "missing header"))?;
    let mut fields = header.split(',').map(str::trim);
    if fields.next() != Some(TICK_COLUMN) {
        return Err(IoError::parse(
            path,
            1,
            format!("header must start with {TICK_COLUMN}"),
        ));
    }
    let species: Vec<String> = fields.map(str::to_string).collect();
    if species.iter().any(String::is_empty) {
        return Err(IoError::parse(path, 1, "empty species name in header"));
    }

    let mut table = PopulationTable::new(species);
    let width = table.species.len() + 1;
    let mut values = Vec::with_capacity(table.species.len());
    for (line_no, line) in lines {
        let cells: Vec<&str> = line.split(',').map(str::trim).collect();
        if cells.len() != width {
            return Err(IoError::parse(
                path,
                line_no,
                format!("expected {width} columns, found {}", cells.len()),
            ));
        }
        let tick = cells[0]
            .parse::<u64>()
            .map_err(|e| IoError::parse(path, line_no, format!("bad tick {:?}: {e}", cells[0])))?;
        values.clear();
        for cell in &cells[1..] {
            let count = cell
                .parse::<u32>()
                .map_err(|e| IoError::parse(path, line_no, format!("bad count {cell:?}: {e}")))?;
            values.push(count);
        }
        table.push_row(tick, &values);
    }
    Ok(table)
}
