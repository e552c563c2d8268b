use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::*;
use crate::dict::{DictError, PronunciationDict, Syllable};
use crate::testutil::fixture_dict;

#[test]
fn low_first_name_predicate() {
    let dict = fixture_dict();
    let generator = NameGenerator::new(&dict, Diversity::Low);
    assert!(generator.is_suitable_first_name("bandicoot"));
    assert!(generator.is_suitable_first_name("barrister"));
    assert!(!generator.is_suitable_first_name("barrister's"));
    assert!(!generator.is_suitable_first_name("benedict"));
    assert!(!generator.is_suitable_first_name("batch"));
    assert!(!generator.is_suitable_first_name("elephant"));
    assert!(!generator.is_suitable_first_name("volunteer"));
}

#[test]
fn high_first_name_predicate() {
    let dict = fixture_dict();
    let generator = NameGenerator::new(&dict, Diversity::High);
    assert!(generator.is_suitable_first_name("elephant"));
    assert!(generator.is_suitable_first_name("bandicoot"));
    assert!(generator.is_suitable_first_name("countryman"));
    assert!(!generator.is_suitable_first_name("precaution"));
    assert!(!generator.is_suitable_first_name("cumberbatch"));
}

#[test]
fn low_last_name_predicate() {
    let dict = fixture_dict();
    let generator = NameGenerator::new(&dict, Diversity::Low);
    assert!(generator.is_suitable_last_name("callahan"));
    assert!(generator.is_suitable_last_name("countryman"));
    assert!(!generator.is_suitable_last_name("cumberbatch"));
    assert!(!generator.is_suitable_last_name("cat"));
    // Three syllables stressed on the first, wrong initial and vowel.
    assert!(!generator.is_suitable_last_name("bandicoot"));
    assert!(!generator.is_suitable_last_name("volunteer"));
}

#[test]
fn high_last_name_predicate() {
    let dict = fixture_dict();
    let generator = NameGenerator::new(&dict, Diversity::High);
    assert!(generator.is_suitable_last_name("volunteer"));
    assert!(generator.is_suitable_last_name("engineer"));
    assert!(generator.is_suitable_last_name("referee"));
    assert!(!generator.is_suitable_last_name("callahan"));
    assert!(!generator.is_suitable_last_name("precaution"));
}

#[test]
fn possessives_are_never_suitable() {
    let dict = fixture_dict();
    for diversity in [Diversity::Low, Diversity::High] {
        let generator = NameGenerator::new(&dict, diversity);
        for word in ["bandicoots'", "barrister's"] {
            assert!(!generator.is_suitable_first_name(word), "{word}");
            assert!(!generator.is_suitable_last_name(word), "{word}");
        }
    }
    // Same pronunciation without the apostrophe passes.
    let high = NameGenerator::new(&dict, Diversity::High);
    assert!(high.is_suitable_first_name("bandicoot"));
}

#[test]
fn unknown_words_are_never_suitable() {
    let dict = fixture_dict();
    for diversity in [Diversity::Low, Diversity::High] {
        let generator = NameGenerator::new(&dict, diversity);
        assert!(!generator.is_suitable_first_name("bumblebee"));
        assert!(!generator.is_suitable_last_name("catamaran"));
    }
}

#[test]
fn low_diversity_names() {
    let dict = fixture_dict();
    let generator = NameGenerator::new(&dict, Diversity::Low);
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..20 {
        let name = generator.random_name_with(&mut rng).unwrap();
        let (first, last) = name.split_once(' ').unwrap();
        assert!(first.starts_with('B'), "{name}");
        assert!(last.starts_with('C'), "{name}");
    }
}

#[test]
fn high_diversity_names() {
    let dict = fixture_dict();
    let generator = NameGenerator::new(&dict, Diversity::High);
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..20 {
        let name = generator.random_name_with(&mut rng).unwrap();
        let (first, last) = name.split_once(' ').unwrap();
        assert!(first.len() > 1 && last.len() > 1, "{name}");
        assert!(first.chars().next().unwrap().is_uppercase(), "{name}");
        assert!(last.chars().next().unwrap().is_uppercase(), "{name}");
        assert!(generator.is_suitable_first_name(&first.to_lowercase()));
        assert!(generator.is_suitable_last_name(&last.to_lowercase()));
    }
}

#[test]
fn thread_rng_name() {
    let dict = fixture_dict();
    let name = NameGenerator::new(&dict, Diversity::Low)
        .random_name()
        .unwrap();
    assert_eq!(name.split(' ').count(), 2);
}

#[test]
fn unsatisfiable_slot_is_exhausted() {
    let dict = PronunciationDict::from_text("bandicoot B AE1 N D IH0 K UW2 T\n").unwrap();
    let generator = NameGenerator::new(&dict, Diversity::Low).with_max_draws(50);
    let mut rng = StdRng::seed_from_u64(1);
    assert_eq!(
        generator.random_name_with(&mut rng),
        Err(GenerateError::Exhausted {
            slot: Slot::Last,
            draws: 50
        })
    );
}

#[test]
fn empty_dictionary_has_no_words() {
    let dict = PronunciationDict::from_entries(Vec::<(String, Vec<String>)>::new());
    let generator = NameGenerator::new(&dict, Diversity::High);
    assert_eq!(generator.random_name(), Err(GenerateError::NoWords));
}

#[test]
fn diversity_from_level() {
    assert_eq!(Diversity::try_from(0u8), Ok(Diversity::Low));
    assert_eq!(Diversity::try_from(1u8), Ok(Diversity::High));
    assert_eq!(
        Diversity::try_from(2u8),
        Err(GenerateError::InvalidDiversity(2))
    );
    assert_eq!(Diversity::default(), Diversity::Low);
}

#[test]
fn capitalize_first_char_only() {
    assert_eq!(capitalize("bandicoot"), "Bandicoot");
    assert_eq!(capitalize("mcgregor"), "Mcgregor");
    assert_eq!(capitalize("o'neil"), "O'neil");
    assert_eq!(capitalize("élan"), "Élan");
    assert_eq!(capitalize(""), "");
}

/// Canned answers, independent of any transcription data.
struct FakePhonology {
    words: Vec<String>,
    syllables: HashMap<&'static str, Vec<Syllable>>,
    stress: HashMap<&'static str, usize>,
    vowel: HashMap<&'static str, &'static str>,
}

impl FakePhonology {
    fn new(entries: &[(&'static str, usize, usize, &'static str)]) -> Self {
        let mut fake = Self {
            words: entries.iter().map(|e| e.0.to_string()).collect(),
            syllables: HashMap::new(),
            stress: HashMap::new(),
            vowel: HashMap::new(),
        };
        for &(word, count, stressed, vowel) in entries {
            fake.syllables
                .insert(word, vec![vec!["X".to_string()]; count]);
            fake.stress.insert(word, stressed);
            fake.vowel.insert(word, vowel);
        }
        fake
    }
}

impl Phonology for FakePhonology {
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
        Ok(self.vowel.get(word).copied().unwrap_or_default().to_string())
    }

    fn stressed_syllable_index(&self, word: &str) -> Result<Option<usize>, DictError> {
        Ok(self.stress.get(word).copied())
    }
}

#[test]
fn generator_runs_over_any_phonology() {
    let fake = FakePhonology::new(&[
        ("bobolink", 3, 0, "IH"),
        ("cassowary", 3, 0, "AE"),
        ("cockatoo", 3, 2, "UW"),
    ]);

    let low = NameGenerator::new(&fake, Diversity::Low);
    let mut rng = StdRng::seed_from_u64(3);
    assert_eq!(
        low.random_name_with(&mut rng).unwrap(),
        "Bobolink Cassowary"
    );

    let high = NameGenerator::new(&fake, Diversity::High);
    assert!(high.is_suitable_last_name("cockatoo"));
    assert!(!high.is_suitable_last_name("cassowary"));
}
