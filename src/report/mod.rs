//! Habitat report: per-species grouping and text rendering.

use std::fmt::Write as _;

use crate::models::EnrichedAnimal;

/// Animals grouped by species, in species-first-seen order.
///
/// Within a species, animals keep their arrival order. Built incrementally
/// by the pipeline and rendered once at the end; rendering does not mutate
/// the report, so repeated renders yield identical text.
#[derive(Debug, Default)]
pub struct HabitatReport {
    habitats: Vec<(String, Vec<EnrichedAnimal>)>,
}

impl HabitatReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an animal to its species' habitat, creating the habitat on
    /// first occurrence of the species.
    pub fn add(&mut self, animal: EnrichedAnimal) {
        match self
            .habitats
            .iter_mut()
            .find(|(species, _)| *species == animal.species)
        {
            Some((_, animals)) => animals.push(animal),
            None => self.habitats.push((animal.species.clone(), vec![animal])),
        }
    }

    /// Number of distinct species seen.
    pub fn species_count(&self) -> usize {
        self.habitats.len()
    }

    /// Total number of animals across all habitats.
    pub fn animal_count(&self) -> usize {
        self.habitats.iter().map(|(_, animals)| animals.len()).sum()
    }

    /// Render the full report text.
    ///
    /// Each species gets a titlecased `"<Species> Habitat:"` header, a blank
    /// line, one detail line per animal in arrival order, and a trailing
    /// blank line.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (species, animals) in &self.habitats {
            let _ = writeln!(out, "{} Habitat:", titlecase(species));
            out.push('\n');
            for animal in animals {
                let _ = writeln!(
                    out,
                    "{}; {}; birth date: {}; {} color; {}; {} pounds; from {}; arrived {}",
                    animal.id,
                    animal.name,
                    animal.birth_date,
                    animal.color,
                    animal.sex,
                    animal.weight,
                    animal.origin,
                    animal.arrival_date,
                );
            }
            out.push('\n');
        }
        out
    }
}

/// Uppercase the first letter, lowercase the rest.
fn titlecase(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
