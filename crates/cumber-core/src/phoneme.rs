//! ARPAbet phoneme classification.
//!
//! Vowel phonemes carry a trailing stress digit (`AE1`, `AH0`, `IY2`);
//! consonants carry none (`B`, `CH`, `NG`).

/// Letters whose presence marks a phoneme symbol as a vowel.
const VOWEL_LETTERS: [char; 5] = ['A', 'E', 'I', 'O', 'U'];

/// Lexical stress carried by a vowel phoneme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stress {
    Unstressed,
    Primary,
    Secondary,
}

impl Stress {
    fn from_digit(c: char) -> Option<Self> {
        match c {
            '0' => Some(Self::Unstressed),
            '1' => Some(Self::Primary),
            '2' => Some(Self::Secondary),
            _ => None,
        }
    }
}

/// Whether the phoneme is a vowel, judged by its symbol alone (stress digit ignored).
pub fn is_vowel(phoneme: &str) -> bool {
    phoneme.chars().any(|c| VOWEL_LETTERS.contains(&c))
}

/// Whether the phoneme ends in a stress digit.
pub fn has_stress_digit(phoneme: &str) -> bool {
    phoneme.chars().last().is_some_and(|c| c.is_ascii_digit())
}

/// Stress marker of a vowel phoneme, `None` for consonants and unknown digits.
pub fn stress(phoneme: &str) -> Option<Stress> {
    phoneme.chars().last().and_then(Stress::from_digit)
}

/// Phoneme symbol with all digits removed (`AE1` → `AE`).
pub fn strip_stress(phoneme: &str) -> String {
    phoneme.chars().filter(|c| !c.is_ascii_digit()).collect()
}
