//! This module provides the parser for the line-oriented paint shop format:
//!  - lines are trimmed, and blank lines as well as lines starting with `#` are skipped,
//!  - the first remaining line holds the number of positions,
//!  - every further line is one customer, given as whitespace-separated pairs of a 1-based
//!    position and a finish code (`G` or `M`).
//!
//! A customer may ask for matte on at most one position. A customer who names one position with
//! both finishes is satisfied by any assignment and is left out of the instance.
use paintshop_solver::Clause;
use paintshop_solver::Finish;
use thiserror::Error;

pub(crate) const DEFAULT_MAX_WIDTH: usize = 1_000_000;

const COMMENT_PREFIX: char = '#';

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum ParseError {
    #[error("the source does not contain a width line")]
    MissingWidth,

    #[error("line {line_number}: '{line}' is not a valid width")]
    InvalidWidth { line_number: usize, line: String },

    #[error("line {line_number}: the width {width} is not in the range [1, {max_width}]")]
    WidthOutOfRange {
        line_number: usize,
        line: String,
        width: i64,
        max_width: usize,
    },

    #[error("line {line_number}: '{token}' is not a valid position in '{line}'")]
    InvalidPosition {
        line_number: usize,
        line: String,
        token: String,
    },

    #[error("line {line_number}: position {position} is not in the range [1, {width}] in '{line}'")]
    PositionOutOfRange {
        line_number: usize,
        line: String,
        position: i64,
        width: usize,
    },

    #[error("line {line_number}: '{token}' is not a valid finish in '{line}', expected 'G' or 'M'")]
    InvalidFinish {
        line_number: usize,
        line: String,
        token: String,
    },

    #[error("line {line_number}: position {position} has no finish in '{line}'")]
    MissingFinish {
        line_number: usize,
        line: String,
        position: i64,
    },

    #[error("line {line_number}: only one position may be matte in '{line}'")]
    MultipleMatte { line_number: usize, line: String },
}

/// The contents of a paint shop file.
#[derive(Debug)]
pub(crate) struct PaintshopInstance {
    pub(crate) width: usize,
    /// The customers in file order. Customers who accept any assignment are left out.
    pub(crate) clauses: Vec<Clause>,
}

pub(crate) fn parse_paintshop(
    source: &str,
    max_width: usize,
) -> Result<PaintshopInstance, ParseError> {
    let mut lines = source
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with(COMMENT_PREFIX));

    let (line_number, line) = lines.next().ok_or(ParseError::MissingWidth)?;
    let width = parse_width(line_number, line, max_width)?;

    let mut clauses = Vec::new();
    for (line_number, line) in lines {
        if let Some(clause) = parse_customer(line_number, line, width)? {
            clauses.push(clause);
        }
    }

    Ok(PaintshopInstance { width, clauses })
}

fn parse_width(line_number: usize, line: &str, max_width: usize) -> Result<usize, ParseError> {
    let width = line
        .parse::<i64>()
        .map_err(|_| ParseError::InvalidWidth {
            line_number,
            line: line.to_owned(),
        })?;

    match usize::try_from(width) {
        Ok(width) if (1..=max_width).contains(&width) => Ok(width),
        _ => Err(ParseError::WidthOutOfRange {
            line_number,
            line: line.to_owned(),
            width,
            max_width,
        }),
    }
}

/// Returns [`None`] for a customer who names a position with both finishes.
fn parse_customer(
    line_number: usize,
    line: &str,
    width: usize,
) -> Result<Option<Clause>, ParseError> {
    let mut entries: Vec<Option<Finish>> = vec![None; width];
    let mut matte_position = None;
    let mut is_tautology = false;

    let mut tokens = line.split_whitespace();
    while let Some(position_token) = tokens.next() {
        let position = parse_position(line_number, line, position_token, width)?;

        let finish_token = tokens.next().ok_or_else(|| ParseError::MissingFinish {
            line_number,
            line: line.to_owned(),
            position: position as i64 + 1,
        })?;
        let finish = Finish::from_code(finish_token).ok_or_else(|| ParseError::InvalidFinish {
            line_number,
            line: line.to_owned(),
            token: finish_token.to_owned(),
        })?;

        if finish == Finish::Matte {
            if matte_position.is_some_and(|matte_position| matte_position != position) {
                return Err(ParseError::MultipleMatte {
                    line_number,
                    line: line.to_owned(),
                });
            }
            matte_position = Some(position);
        }

        match entries[position] {
            Some(existing) if existing != finish => is_tautology = true,
            _ => entries[position] = Some(finish),
        }
    }

    if is_tautology {
        return Ok(None);
    }

    Ok(Some(Clause::from_entries(entries)))
}

/// Parses a 1-based position token into a 0-based position.
fn parse_position(
    line_number: usize,
    line: &str,
    token: &str,
    width: usize,
) -> Result<usize, ParseError> {
    let position = token
        .parse::<i64>()
        .map_err(|_| ParseError::InvalidPosition {
            line_number,
            line: line.to_owned(),
            token: token.to_owned(),
        })?;

    match usize::try_from(position) {
        Ok(position) if (1..=width).contains(&position) => Ok(position - 1),
        _ => Err(ParseError::PositionOutOfRange {
            line_number,
            line: line.to_owned(),
            position,
            width,
        }),
    }
}
