use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::debug;

use super::cmu::parse_cmudict;
use super::dict_io::MAGIC;
use super::syllable::syllabify;
use super::{DictError, Phonology, Syllable};
use crate::phoneme::{has_stress_digit, stress, strip_stress, Stress};

/// Immutable word → pronunciation dictionary with precomputed syllables.
pub struct PronunciationDict {
    transcriptions: HashMap<String, Vec<String>>,
    syllables: HashMap<String, Vec<Syllable>>,
    words: Vec<String>,
}

impl PronunciationDict {
    /// Build from `(word, phonemes)` pairs.
    ///
    /// Words are lowercased; when a word occurs more than once the first
    /// transcription wins. Words containing whitespace are skipped.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, Vec<String>)>,
    {
        let mut transcriptions: HashMap<String, Vec<String>> = HashMap::new();
        for (word, phonemes) in entries {
            if word.is_empty() || word.chars().any(char::is_whitespace) {
                continue;
            }
            transcriptions
                .entry(word.to_lowercase())
                .or_insert(phonemes);
        }

        let syllables = transcriptions
            .iter()
            .map(|(word, phonemes)| (word.clone(), syllabify(phonemes)))
            .collect();

        let mut words: Vec<String> = transcriptions.keys().cloned().collect();
        words.sort();

        Self {
            transcriptions,
            syllables,
            words,
        }
    }

    /// Parse CMU dictionary text.
    pub fn from_text(text: &str) -> Result<Self, DictError> {
        let dict = Self::from_entries(parse_cmudict(text));
        if dict.is_empty() {
            return Err(DictError::Empty);
        }
        Ok(dict)
    }

    /// Load the dictionary at `path`, either CMU text or a compiled `CBDX` file
    /// (detected by magic bytes). Must succeed before any query is made.
    pub fn bootstrap(path: &Path) -> Result<Self, DictError> {
        let data = fs::read(path)?;
        let dict = if data.starts_with(MAGIC) {
            Self::from_bytes(&data)?
        } else {
            let text = String::from_utf8(data)
                .map_err(|e| DictError::Parse(format!("{}: {e}", path.display())))?;
            Self::from_text(&text)?
        };
        if dict.is_empty() {
            return Err(DictError::Empty);
        }
        debug!(path = %path.display(), words = dict.len(), "dictionary bootstrapped");
        Ok(dict)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.transcriptions.contains_key(word)
    }

    /// Canonical transcription of `word`.
    pub fn transcription(&self, word: &str) -> Option<&[String]> {
        self.transcriptions.get(word).map(Vec::as_slice)
    }

    /// `(word, transcription)` pairs in sorted word order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> + '_ {
        self.words.iter().filter_map(|w| {
            self.transcriptions
                .get(w)
                .map(|t| (w.as_str(), t.as_slice()))
        })
    }

    fn lookup(&self, word: &str) -> Result<&[String], DictError> {
        self.transcription(word)
            .ok_or_else(|| DictError::UnknownWord(word.to_string()))
    }
}

impl Phonology for PronunciationDict {
    fn words(&self) -> &[String] {
        &self.words
    }

    fn syllabify(&self, word: &str) -> Result<&[Syllable], DictError> {
        self.syllables
            .get(word)
            .map(Vec::as_slice)
            .ok_or_else(|| DictError::UnknownWord(word.to_string()))
    }

    fn last_vowel_sound(&self, word: &str) -> Result<String, DictError> {
        Ok(self
            .lookup(word)?
            .iter()
            .rev()
            .find(|ph| has_stress_digit(ph))
            .map(|ph| strip_stress(ph))
            .unwrap_or_default())
    }

    fn stressed_syllable_index(&self, word: &str) -> Result<Option<usize>, DictError> {
        Ok(self.syllabify(word)?.iter().position(|syllable| {
            syllable
                .iter()
                .any(|ph| stress(ph) == Some(Stress::Primary))
        }))
    }
}
