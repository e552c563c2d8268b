use rand::seq::IndexedRandom;
use rand::Rng;

/// Infinite iterator of words drawn uniformly, with replacement.
///
/// Only yields `None` when the word list is empty.
pub struct WordSampler<'a, R> {
    words: &'a [String],
    rng: R,
}

impl<'a, R: Rng> WordSampler<'a, R> {
    pub fn new(words: &'a [String], rng: R) -> Self {
        Self { words, rng }
    }
}

impl<'a, R: Rng> Iterator for WordSampler<'a, R> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let words = self.words;
        words.choose(&mut self.rng).map(String::as_str)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.words.is_empty() {
            (0, Some(0))
        } else {
            (usize::MAX, None)
        }
    }
}
