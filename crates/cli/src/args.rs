// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Value parsers for editor positions and `KEY=VALUE` pairs.
//!
//! Positions on the command line are one-based `LINE:COLUMN`; they are
//! stored zero-based like the editor cursor.

use vr_core::Cursor;

/// A selected range, `start` inclusive and `end` exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub start: Cursor,
    pub end: Cursor,
}

fn one_based(part: &str, what: &str) -> Result<usize, String> {
    match part.trim().parse::<usize>() {
        Ok(0) | Err(_) => Err(format!("{what} must be a positive integer, got `{part}`")),
        Ok(n) => Ok(n - 1),
    }
}

/// `LINE:COLUMN`, or just `LINE` for column 1
pub fn parse_position(s: &str) -> Result<Cursor, String> {
    let (line, column) = match s.split_once(':') {
        Some((line, column)) => (line, Some(column)),
        None => (s, None),
    };
    let line = one_based(line, "line")?;
    let column = match column {
        Some(c) => one_based(c, "column")?,
        None => 0,
    };
    Ok(Cursor::new(line, column))
}

/// `LINE:COLUMN-LINE:COLUMN`
pub fn parse_selection(s: &str) -> Result<Selection, String> {
    let (start, end) =
        s.split_once('-').ok_or_else(|| format!("expected START-END, got `{s}`"))?;
    let start = parse_position(start)?;
    let end = parse_position(end)?;
    if (end.line, end.column) < (start.line, start.column) {
        return Err(format!("selection end comes before its start in `{s}`"));
    }
    Ok(Selection { start, end })
}

/// `KEY=VALUE`; the value may itself contain `=`
pub fn parse_key_value(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected KEY=VALUE, got `{s}`")),
    }
}

#[cfg(test)]
#[path = "args_tests.rs"]
mod tests;
