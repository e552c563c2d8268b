//! Pronunciation dictionary and the phonological queries built on it.
//!
//! `PronunciationDict` maps lowercase words to one ARPAbet transcription and
//! precomputes each word's syllabification. The `Phonology` trait is the seam
//! the name generator depends on.

mod cmu;
mod dict_io;
mod pronunciation;
mod sampler;
mod syllable;

pub use cmu::parse_cmudict;
pub use dict_io::MAGIC;
pub use pronunciation::PronunciationDict;
pub use sampler::WordSampler;
pub use syllable::syllabify;

use std::io;

use rand::rngs::ThreadRng;
use rand::Rng;

/// A run of phonemes holding exactly one vowel.
pub type Syllable = Vec<String>;

#[derive(Debug, thiserror::Error)]
pub enum DictError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid header (too short)")]
    InvalidHeader,

    #[error("invalid magic bytes (expected CBDX)")]
    InvalidMagic,

    #[error("unsupported version: {0}")]
    UnsupportedVersion(u8),

    #[error("serialization error: {0}")]
    Serialize(bincode::Error),

    #[error("deserialization error: {0}")]
    Deserialize(bincode::Error),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("dictionary contains no words")]
    Empty,

    #[error("unknown word: {0}")]
    UnknownWord(String),
}

/// Per-word phonological queries over an immutable word list.
pub trait Phonology {
    /// All words, sorted.
    fn words(&self) -> &[String];

    /// Syllables of `word`, in order.
    fn syllabify(&self, word: &str) -> Result<&[Syllable], DictError>;

    /// Last vowel phoneme of `word` without its stress digit, or `""` if the
    /// transcription has no vowel.
    fn last_vowel_sound(&self, word: &str) -> Result<String, DictError>;

    /// Index into [`Phonology::syllabify`] of the syllable carrying primary stress.
    fn stressed_syllable_index(&self, word: &str) -> Result<Option<usize>, DictError>;

    /// Endless uniform sample of words (with replacement) driven by `rng`.
    fn sample_words_with<R: Rng>(&self, rng: R) -> WordSampler<'_, R> {
        WordSampler::new(self.words(), rng)
    }

    /// Endless uniform sample of words using the thread-local RNG.
    ///
    /// Each call returns an independent sampler; nothing is shared between them.
    fn sample_words(&self) -> WordSampler<'_, ThreadRng> {
        self.sample_words_with(rand::rng())
    }
}
