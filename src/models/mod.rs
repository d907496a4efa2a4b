//! Data models for manifest records.
//!
//! This module defines the core data structures:
//! - `Season` - Birth season named in a manifest line
//! - `ParsedAnimal` - Fields extracted from one raw line
//! - `EnrichedAnimal` - A parsed record plus derived attributes

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Birth season named in a manifest line.
///
/// Each season maps to a fixed anchor date used when reconstructing a birth
/// date from an animal's age.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    /// Parse a season token, case-insensitively.
    ///
    /// Unknown tokens yield `None`, which downstream enrichment treats the
    /// same as a missing season clause.
    pub fn parse(token: &str) -> Option<Self> {
        match token.to_lowercase().as_str() {
            "spring" => Some(Season::Spring),
            "summer" => Some(Season::Summer),
            "fall" => Some(Season::Fall),
            "winter" => Some(Season::Winter),
            _ => None,
        }
    }

    /// The fixed (month, day) anchor for this season.
    pub fn anchor(self) -> (u32, u32) {
        match self {
            Season::Spring => (3, 21),
            Season::Summer => (6, 21),
            Season::Fall => (9, 21),
            Season::Winter => (12, 21),
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Fall => "fall",
            Season::Winter => "winter",
        };
        write!(f, "{}", name)
    }
}

/// Fields extracted from one raw manifest line.
///
/// Every field except `season` is required; a line missing any required
/// field fails to parse rather than producing a partial record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedAnimal {
    /// Given name (e.g., "Leo")
    pub name: String,

    /// Age in whole years
    pub age: u32,

    /// Sex token as written in the manifest (e.g., "male")
    pub sex: String,

    /// Species token as written in the manifest (e.g., "lion")
    pub species: String,

    /// Birth season, when the line carries a "born in" clause
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season: Option<Season>,

    /// Descriptive color
    pub color: String,

    /// Weight in pounds
    pub weight: u32,

    /// Free-form place of origin
    pub origin: String,
}

/// A parsed record plus derived attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedAnimal {
    /// Unique per-species identifier (e.g., "Li01")
    pub id: String,

    /// Given name
    pub name: String,

    /// Reconstructed birth date
    pub birth_date: NaiveDate,

    /// Descriptive color
    pub color: String,

    /// Sex token
    pub sex: String,

    /// Species token
    pub species: String,

    /// Weight in pounds
    pub weight: u32,

    /// Free-form place of origin
    pub origin: String,

    /// Arrival date, constant for the whole run
    pub arrival_date: NaiveDate,
}
