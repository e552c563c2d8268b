use tracing::debug;

/// Parse CMU Pronouncing Dictionary text into `(word, phonemes)` pairs in file order.
///
/// Line format: `word PH PH ...`, with alternate pronunciations written as
/// `word(2) ...`. Lines starting with `;;;` and anything after a `#` token are
/// comments. Words are lowercased and variant suffixes removed, so a word may
/// appear more than once in the output; the first occurrence is canonical.
pub fn parse_cmudict(text: &str) -> Vec<(String, Vec<String>)> {
    let mut entries = Vec::new();
    let mut total_lines = 0u64;
    let mut skipped = 0u64;

    for line in text.lines() {
        total_lines += 1;
        let line = line.trim();
        if line.is_empty() || line.starts_with(";;;") {
            skipped += 1;
            continue;
        }

        let mut tokens = line.split_whitespace();
        let Some(raw_word) = tokens.next() else {
            skipped += 1;
            continue;
        };
        let phonemes: Vec<String> = tokens
            .take_while(|t| !t.starts_with('#'))
            .map(str::to_string)
            .collect();
        if phonemes.is_empty() {
            skipped += 1;
            continue;
        }

        entries.push((strip_variant(raw_word).to_lowercase(), phonemes));
    }

    debug!(total_lines, skipped, entries = entries.len(), "parsed cmudict");
    entries
}

/// `word(2)` → `word`. Anything else is returned unchanged.
fn strip_variant(word: &str) -> &str {
    let Some(body) = word.strip_suffix(')') else {
        return word;
    };
    match body.rfind('(') {
        Some(open)
            if open > 0
                && !body[open + 1..].is_empty()
                && body[open + 1..].bytes().all(|b| b.is_ascii_digit()) =>
        {
            &body[..open]
        }
        _ => word,
    }
}
