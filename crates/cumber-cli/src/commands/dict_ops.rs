use std::fs;
use std::path::Path;

use crate::dict_source;
use cumber_core::dict::{DictError, Phonology, PronunciationDict, MAGIC};

pub fn fetch(url: &str, output: &Path) {
    die!(
        dict_source::fetch(url, output),
        "Error fetching dictionary: {}"
    );
}

pub fn compile(input: &str, output: &str) {
    let text = die!(fs::read_to_string(input), "Error reading {input}: {}");
    eprintln!("Parsing {input}...");
    let dict = die!(
        PronunciationDict::from_text(&text),
        "Error parsing dictionary: {}"
    );
    eprintln!("  {} words", dict.len());

    die!(
        dict.save(Path::new(output)),
        "Error writing dictionary: {}"
    );

    let file_size = fs::metadata(output).map(|m| m.len()).unwrap_or(0);
    eprintln!(
        "Wrote {output} ({:.1} MB)",
        file_size as f64 / 1_048_576.0
    );
}

pub fn info(file: &str) {
    let data = die!(fs::read(file), "Error reading {file}: {}");
    let size = data.len();
    let (format, dict) = die!(parse_any(data), "Error loading dictionary: {}");
    println!("File:   {file}");
    println!("Format: {format}");
    println!("Size:   {size} bytes");
    println!("Words:  {}", dict.len());
}

/// Parse dictionary bytes already in memory, detecting the format by magic.
fn parse_any(data: Vec<u8>) -> Result<(&'static str, PronunciationDict), DictError> {
    if data.starts_with(MAGIC) {
        return Ok(("compiled (CBDX)", PronunciationDict::from_bytes(&data)?));
    }
    let text = String::from_utf8(data).map_err(|e| DictError::Parse(e.to_string()))?;
    Ok(("CMU text", PronunciationDict::from_text(&text)?))
}

pub fn inspect(dict_file: &Path, words: &[String]) {
    let dict = die!(
        PronunciationDict::bootstrap(dict_file),
        "Error loading dictionary: {}"
    );
    for word in words {
        match describe(&dict, &word.to_lowercase()) {
            Some(line) => println!("{line}"),
            None => println!("Not found: {word}"),
        }
    }
}

/// One tab-separated line: word, transcription, syllables, stressed index, last vowel.
fn describe(dict: &PronunciationDict, word: &str) -> Option<String> {
    let transcription = dict.transcription(word)?;
    let syllables = dict.syllabify(word).ok()?;
    let stressed = dict
        .stressed_syllable_index(word)
        .ok()?
        .map_or_else(|| "-".to_string(), |i| i.to_string());
    let vowel = dict.last_vowel_sound(word).ok()?;

    let syllables: Vec<String> = syllables.iter().map(|s| s.join(" ")).collect();
    Some(format!(
        "{word}\t{}\t{}\t{stressed}\t{vowel}",
        transcription.join(" "),
        syllables.join(" | ")
    ))
}
