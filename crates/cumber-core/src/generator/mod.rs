//! Rejection sampling of two-word names over a [`Phonology`] service.
//!
//! Each slot (first name, last name) draws from its own word sampler until a
//! word passes the slot's suitability predicate or the draw cap is reached.

#[cfg(test)]
mod tests;

use std::fmt;

use rand::Rng;
use tracing::{debug, debug_span};

use crate::dict::Phonology;

/// Words never produced by the generator.
const EXCLUDED_WORDS: [&str; 2] = ["benedict", "cumberbatch"];

/// Syllable count required in both slots.
const SYLLABLE_COUNT: usize = 3;

/// Default per-slot draw cap.
pub const DEFAULT_MAX_DRAWS: usize = 1_000_000;

/// How strictly candidates must mirror the original name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Diversity {
    /// Initials, stress and last-name vowel must match.
    #[default]
    Low,
    /// Only syllable count and stress position are constrained.
    High,
}

impl TryFrom<u8> for Diversity {
    type Error = GenerateError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        match level {
            0 => Ok(Self::Low),
            1 => Ok(Self::High),
            other => Err(GenerateError::InvalidDiversity(other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    First,
    Last,
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First => f.write_str("first name"),
            Self::Last => f.write_str("last name"),
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GenerateError {
    #[error("no suitable {slot} found after {draws} draws")]
    Exhausted { slot: Slot, draws: usize },

    #[error("dictionary has no words to sample")]
    NoWords,

    #[error("invalid diversity level: {0} (expected 0 or 1)")]
    InvalidDiversity(u8),
}

pub struct NameGenerator<'a, P> {
    phonology: &'a P,
    diversity: Diversity,
    max_draws: usize,
}

impl<'a, P: Phonology> NameGenerator<'a, P> {
    pub fn new(phonology: &'a P, diversity: Diversity) -> Self {
        Self {
            phonology,
            diversity,
            max_draws: DEFAULT_MAX_DRAWS,
        }
    }

    /// Cap the number of words drawn per slot. `0` removes the cap, in which
    /// case an unsatisfiable slot never returns.
    pub fn with_max_draws(mut self, max_draws: usize) -> Self {
        self.max_draws = max_draws;
        self
    }

    pub fn diversity(&self) -> Diversity {
        self.diversity
    }

    pub fn is_suitable_first_name(&self, word: &str) -> bool {
        self.passes_common_filters(word)
            && self.stressed_at(word, 0)
            && (self.diversity == Diversity::High || word.starts_with('b'))
    }

    pub fn is_suitable_last_name(&self, word: &str) -> bool {
        if !self.passes_common_filters(word) {
            return false;
        }
        match self.diversity {
            Diversity::Low => {
                self.stressed_at(word, 0)
                    && self
                        .phonology
                        .last_vowel_sound(word)
                        .is_ok_and(|sound| sound.contains("AE"))
                    && word.starts_with('c')
            }
            Diversity::High => self.stressed_at(word, 2),
        }
    }

    /// Generate "First Last" using the thread-local RNG.
    pub fn random_name(&self) -> Result<String, GenerateError> {
        let first = self.draw(Slot::First, self.phonology.sample_words())?;
        let last = self.draw(Slot::Last, self.phonology.sample_words())?;
        Ok(format!("{} {}", capitalize(first), capitalize(last)))
    }

    /// Generate "First Last" drawing from `rng`.
    pub fn random_name_with<R: Rng>(&self, rng: &mut R) -> Result<String, GenerateError> {
        let first = self.draw(Slot::First, self.phonology.sample_words_with(&mut *rng))?;
        let last = self.draw(Slot::Last, self.phonology.sample_words_with(&mut *rng))?;
        Ok(format!("{} {}", capitalize(first), capitalize(last)))
    }

    fn is_suitable(&self, slot: Slot, word: &str) -> bool {
        match slot {
            Slot::First => self.is_suitable_first_name(word),
            Slot::Last => self.is_suitable_last_name(word),
        }
    }

    fn draw<'w>(
        &self,
        slot: Slot,
        words: impl Iterator<Item = &'w str>,
    ) -> Result<&'w str, GenerateError> {
        let _span = debug_span!("draw", %slot, diversity = ?self.diversity).entered();
        let mut draws = 0usize;
        for word in words {
            draws += 1;
            if self.is_suitable(slot, word) {
                debug!(draws, word, "accepted");
                return Ok(word);
            }
            if self.max_draws != 0 && draws >= self.max_draws {
                debug!(draws, "draw cap reached");
                return Err(GenerateError::Exhausted { slot, draws });
            }
        }
        Err(GenerateError::NoWords)
    }

    /// Shared by both slots: no possessives or contractions, no excluded
    /// words, exactly three syllables.
    fn passes_common_filters(&self, word: &str) -> bool {
        if word.ends_with('\'') || word.ends_with("'s") {
            return false;
        }
        if EXCLUDED_WORDS.contains(&word) {
            return false;
        }
        self.phonology
            .syllabify(word)
            .is_ok_and(|syllables| syllables.len() == SYLLABLE_COUNT)
    }

    fn stressed_at(&self, word: &str, index: usize) -> bool {
        matches!(self.phonology.stressed_syllable_index(word), Ok(Some(i)) if i == index)
    }
}

/// Uppercase the first character, leave the rest untouched.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
