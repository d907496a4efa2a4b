//! Record enrichment: unique ID assignment and birth-date derivation.
//!
//! Enrichment is deterministic given a parsed record, the counter state, and
//! the reference date; its only side effect is advancing the per-species
//! counter.

use chrono::{Datelike, NaiveDate};
use std::collections::HashMap;

use crate::models::{EnrichedAnimal, ParsedAnimal, Season};
use crate::{Error, Result};

/// Reference date used both as the arrival date and as the fallback birth
/// anchor when a record names no season.
pub const DEFAULT_REFERENCE_DATE: NaiveDate =
    match NaiveDate::from_ymd_opt(2024, 3, 26) {
        Some(date) => date,
        None => unreachable!(),
    };

/// Running per-species arrival counts for one run.
///
/// Created empty at run start and advanced once per animal; sequence numbers
/// are 1-based in strict arrival order with no gaps or reuse.
#[derive(Debug, Default)]
pub struct SpeciesCounter {
    counts: HashMap<String, u32>,
}

impl SpeciesCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the counter for `species` and return the new 1-based count.
    pub fn next(&mut self, species: &str) -> u32 {
        let count = self.counts.entry(species.to_string()).or_insert(0);
        *count += 1;
        *count
    }

    /// Count of animals of `species` seen so far.
    pub fn seen(&self, species: &str) -> u32 {
        self.counts.get(species).copied().unwrap_or(0)
    }
}

/// Derive the unique ID and birth date for a parsed record.
///
/// The ID is `<first two letters of species, titlecased><sequence number,
/// zero-padded to at least two digits>`. Counts above 99 widen the numeric
/// field rather than truncate.
pub fn enrich(
    parsed: ParsedAnimal,
    counters: &mut SpeciesCounter,
    reference_date: NaiveDate,
) -> Result<EnrichedAnimal> {
    let birth_date = birth_date(parsed.age, parsed.season, reference_date)?;
    let id = unique_id(&parsed.species, counters.next(&parsed.species));

    Ok(EnrichedAnimal {
        id,
        name: parsed.name,
        birth_date,
        color: parsed.color,
        sex: parsed.sex,
        species: parsed.species,
        weight: parsed.weight,
        origin: parsed.origin,
        arrival_date: reference_date,
    })
}

/// Format a species prefix plus sequence number, e.g. `lion` + 1 → `Li01`.
fn unique_id(species: &str, count: u32) -> String {
    let mut prefix = String::new();
    let mut chars = species.chars();
    if let Some(first) = chars.next() {
        prefix.extend(first.to_uppercase());
    }
    if let Some(second) = chars.next() {
        prefix.extend(second.to_lowercase());
    }
    format!("{prefix}{count:02}")
}

/// Reconstruct a birth date from age and optional season.
///
/// The year is the reference year minus the age; the month and day come from
/// the season's fixed anchor, or from the reference date when no season is
/// known. Invalid year/month/day combinations are rejected rather than
/// clamped, though none are reachable with the current anchors.
fn birth_date(age: u32, season: Option<Season>, reference_date: NaiveDate) -> Result<NaiveDate> {
    let year = reference_date.year() - age as i32;
    let (month, day) = match season {
        Some(season) => season.anchor(),
        None => (reference_date.month(), reference_date.day()),
    };

    NaiveDate::from_ymd_opt(year, month, day).ok_or(Error::InvalidDate { year, month, day })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(name: &str, age: u32, species: &str, season: Option<Season>) -> ParsedAnimal {
        ParsedAnimal {
            name: name.to_string(),
            age,
            sex: "male".to_string(),
            species: species.to_string(),
            season,
            color: "golden".to_string(),
            weight: 420,
            origin: "Kenya".to_string(),
        }
    }

    #[test]
    fn id_prefix_titlecases_species_regardless_of_input_casing() {
        let mut counters = SpeciesCounter::new();
        for species in ["lion", "LION", "Lion", "lIoN"] {
            let animal = enrich(
                parsed("Leo", 4, species, None),
                &mut counters,
                DEFAULT_REFERENCE_DATE,
            )
            .unwrap();
            assert!(animal.id.starts_with("Li"), "id was {}", animal.id);
        }
    }

    #[test]
    fn sequence_numbers_are_dense_and_ordered_per_species() {
        let mut counters = SpeciesCounter::new();
        let ids: Vec<String> = (0..5)
            .map(|i| {
                enrich(
                    parsed(&format!("lion-{i}"), 4, "lion", None),
                    &mut counters,
                    DEFAULT_REFERENCE_DATE,
                )
                .unwrap()
                .id
            })
            .collect();
        assert_eq!(ids, ["Li01", "Li02", "Li03", "Li04", "Li05"]);

        // A second species counts independently.
        let tiger = enrich(
            parsed("Rex", 6, "tiger", None),
            &mut counters,
            DEFAULT_REFERENCE_DATE,
        )
        .unwrap();
        assert_eq!(tiger.id, "Ti01");
    }

    #[test]
    fn counts_above_ninety_nine_widen_the_field() {
        assert_eq!(unique_id("lion", 7), "Li07");
        assert_eq!(unique_id("lion", 99), "Li99");
        assert_eq!(unique_id("lion", 100), "Li100");
        assert_eq!(unique_id("lion", 123), "Li123");
    }

    #[test]
    fn birth_date_uses_season_anchor() {
        let animal = enrich(
            parsed("Sam", 5, "bear", Some(Season::Summer)),
            &mut SpeciesCounter::new(),
            DEFAULT_REFERENCE_DATE,
        )
        .unwrap();
        assert_eq!(animal.birth_date.to_string(), "2019-06-21");
    }

    #[test]
    fn birth_date_falls_back_to_reference_day_without_season() {
        let animal = enrich(
            parsed("Sam", 3, "bear", None),
            &mut SpeciesCounter::new(),
            DEFAULT_REFERENCE_DATE,
        )
        .unwrap();
        assert_eq!(animal.birth_date.to_string(), "2021-03-26");
    }

    #[test]
    fn arrival_date_is_the_reference_date() {
        let animal = enrich(
            parsed("Sam", 3, "bear", None),
            &mut SpeciesCounter::new(),
            DEFAULT_REFERENCE_DATE,
        )
        .unwrap();
        assert_eq!(animal.arrival_date, DEFAULT_REFERENCE_DATE);
    }

    #[test]
    fn enrich_is_deterministic() {
        let reference = DEFAULT_REFERENCE_DATE;
        let mut a = SpeciesCounter::new();
        let mut b = SpeciesCounter::new();
        let first = enrich(parsed("Leo", 4, "lion", Some(Season::Spring)), &mut a, reference);
        let second = enrich(parsed("Leo", 4, "lion", Some(Season::Spring)), &mut b, reference);
        assert_eq!(first.unwrap(), second.unwrap());
    }

    #[test]
    fn leap_day_reference_rejects_invalid_birth_year() {
        // Age 1 back from 2024-02-29 lands on 2023-02-29, which does not exist.
        let leap = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        let err = enrich(parsed("Sam", 1, "bear", None), &mut SpeciesCounter::new(), leap)
            .unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidDate {
                year: 2023,
                month: 2,
                day: 29
            }
        ));
    }
}
