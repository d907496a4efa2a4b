//! Line parser for the arriving-animals manifest grammar.
//!
//! One record per line:
//!
//! ```text
//! <name> - <age> year old <sex> <species>, [born in <season>, ]<color> color, <weight> pounds, from <origin>
//! ```
//!
//! Two grammar modes are supported. `Positional` mirrors the historical
//! parser: clauses after the first are read at positions keyed on whether
//! the optional "born in" clause is present. `Marker` classifies clauses by
//! their literal markers ("born in", " color", " pounds", "from ") so field
//! mapping survives reordered or unexpected clause layouts.

use crate::models::{ParsedAnimal, Season};
use crate::{Error, Result};

/// How clauses after the first are mapped to fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GrammarMode {
    /// Clause positions keyed on season-clause presence (historical behavior).
    #[default]
    Positional,
    /// Clauses classified by literal markers, order-independent.
    Marker,
}

/// Parse one manifest line into a `ParsedAnimal`.
///
/// Fails with [`Error::MalformedLine`] carrying the raw line when the
/// grammar does not match: missing `" - "` separator, too few clauses or
/// tokens, or non-numeric age/weight. No partial records are returned.
pub fn parse_line(line: &str, mode: GrammarMode) -> Result<ParsedAnimal> {
    let trimmed = line.trim();

    let (name, rest) = trimmed
        .split_once(" - ")
        .ok_or_else(|| malformed(trimmed))?;

    let clauses: Vec<&str> = rest.split(", ").collect();

    // Clause 0 is always "<age> year old <sex> <species>". Tokens 1-2 are
    // fixed filler and not validated beyond position.
    let head: Vec<&str> = clauses[0].split_whitespace().collect();
    let age: u32 = head
        .first()
        .and_then(|t| t.parse().ok())
        .ok_or_else(|| malformed(trimmed))?;
    let sex = *head.get(3).ok_or_else(|| malformed(trimmed))?;
    let species = *head.get(4).ok_or_else(|| malformed(trimmed))?;

    let (season, color, weight, origin) = match mode {
        GrammarMode::Positional => parse_positional(trimmed, &clauses)?,
        GrammarMode::Marker => parse_marker(trimmed, &clauses)?,
    };

    Ok(ParsedAnimal {
        name: name.trim().to_string(),
        age,
        sex: sex.to_string(),
        species: species.to_string(),
        season,
        color,
        weight,
        origin,
    })
}

fn malformed(line: &str) -> Error {
    Error::MalformedLine(line.to_string())
}

/// Positional mapping: season (when present) occupies clause 1 and
/// color/weight/origin follow at 2/3/4; without a season clause they sit at
/// 1/2/3.
fn parse_positional(
    line: &str,
    clauses: &[&str],
) -> Result<(Option<Season>, String, u32, String)> {
    let second = clauses.get(1).ok_or_else(|| malformed(line))?;

    let (season, base) = if second.contains("born in") {
        let token = second
            .split_whitespace()
            .nth(2)
            .ok_or_else(|| malformed(line))?;
        (Season::parse(token), 2)
    } else {
        (None, 1)
    };

    let color_clause = clauses.get(base).ok_or_else(|| malformed(line))?;
    let weight_clause = clauses.get(base + 1).ok_or_else(|| malformed(line))?;
    let origin_clause = clauses.get(base + 2).ok_or_else(|| malformed(line))?;

    Ok((
        season,
        strip_color(color_clause),
        parse_weight(line, weight_clause)?,
        strip_origin(origin_clause),
    ))
}

/// Marker mapping: each clause after the first is classified by its literal
/// marker; all of color, weight, and origin must appear exactly once.
fn parse_marker(line: &str, clauses: &[&str]) -> Result<(Option<Season>, String, u32, String)> {
    let mut season = None;
    let mut color = None;
    let mut weight = None;
    let mut origin = None;

    for clause in &clauses[1..] {
        if clause.starts_with("born in") {
            let token = clause
                .split_whitespace()
                .nth(2)
                .ok_or_else(|| malformed(line))?;
            season = Season::parse(token);
        } else if clause.ends_with(" color") {
            color = Some(strip_color(clause));
        } else if clause.ends_with(" pounds") {
            weight = Some(parse_weight(line, clause)?);
        } else if clause.starts_with("from ") {
            origin = Some(strip_origin(clause));
        } else {
            return Err(malformed(line));
        }
    }

    match (color, weight, origin) {
        (Some(color), Some(weight), Some(origin)) => Ok((season, color, weight, origin)),
        _ => Err(malformed(line)),
    }
}

fn strip_color(clause: &str) -> String {
    clause.strip_suffix(" color").unwrap_or(clause).to_string()
}

fn parse_weight(line: &str, clause: &str) -> Result<u32> {
    clause
        .split_whitespace()
        .next()
        .and_then(|t| t.parse().ok())
        .ok_or_else(|| malformed(line))
}

fn strip_origin(clause: &str) -> String {
    clause.strip_prefix("from ").unwrap_or(clause).to_string()
}
