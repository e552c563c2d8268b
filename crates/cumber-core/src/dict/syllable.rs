use super::Syllable;
use crate::phoneme::is_vowel;

/// Split a transcription into syllables.
///
/// Every vowel closes the syllable accumulated so far, so onset consonants
/// join the following vowel. Consonants after the last vowel join the last
/// syllable. A transcription without any vowel yields no syllables.
pub fn syllabify<S: AsRef<str>>(transcription: &[S]) -> Vec<Syllable> {
    let mut result: Vec<Syllable> = Vec::new();
    let mut current: Syllable = Vec::new();

    for phoneme in transcription {
        let phoneme = phoneme.as_ref();
        current.push(phoneme.to_string());
        if is_vowel(phoneme) {
            result.push(std::mem::take(&mut current));
        }
    }

    if let Some(last) = result.last_mut() {
        last.append(&mut current);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phonemes(s: &str) -> Vec<&str> {
        s.split_whitespace().collect()
    }

    #[test]
    fn single_syllable() {
        assert_eq!(syllabify(&phonemes("B AE1 CH")), vec![vec!["B", "AE1", "CH"]]);
    }

    #[test]
    fn onset_consonants_join_next_vowel() {
        assert_eq!(
            syllabify(&phonemes("P R IY0 K AO1 SH AH0 N")),
            vec![
                vec!["P", "R", "IY0"],
                vec!["K", "AO1"],
                vec!["SH", "AH0", "N"],
            ]
        );
    }

    #[test]
    fn vowel_final_word() {
        assert_eq!(
            syllabify(&phonemes("K AA1 F IY0")),
            vec![vec!["K", "AA1"], vec!["F", "IY0"]]
        );
    }

    #[test]
    fn no_vowel_drops_everything() {
        assert!(syllabify(&phonemes("HH M M")).is_empty());
        assert!(syllabify::<&str>(&[]).is_empty());
    }
}
