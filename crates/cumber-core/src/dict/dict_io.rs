use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{DictError, PronunciationDict};

pub const MAGIC: &[u8; 4] = b"CBDX";
const VERSION: u8 = 1;
const HEADER_SIZE: usize = 5;

#[derive(Serialize, Deserialize)]
struct WordRecord {
    word: String,
    phonemes: Vec<String>,
}

impl PronunciationDict {
    /// Serialize to bytes (CBDX format): magic, version, bincode records.
    pub fn to_bytes(&self) -> Result<Vec<u8>, DictError> {
        let records: Vec<WordRecord> = self
            .iter()
            .map(|(word, phonemes)| WordRecord {
                word: word.to_string(),
                phonemes: phonemes.to_vec(),
            })
            .collect();

        let body = bincode::serialize(&records).map_err(DictError::Serialize)?;
        let mut buf = Vec::with_capacity(HEADER_SIZE + body.len());
        buf.extend_from_slice(MAGIC);
        buf.push(VERSION);
        buf.extend_from_slice(&body);
        Ok(buf)
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self, DictError> {
        if data.len() < HEADER_SIZE {
            return Err(DictError::InvalidHeader);
        }
        if &data[..4] != MAGIC {
            return Err(DictError::InvalidMagic);
        }
        if data[4] != VERSION {
            return Err(DictError::UnsupportedVersion(data[4]));
        }
        let records: Vec<WordRecord> =
            bincode::deserialize(&data[HEADER_SIZE..]).map_err(DictError::Deserialize)?;
        Ok(Self::from_entries(
            records.into_iter().map(|r| (r.word, r.phonemes)),
        ))
    }

    /// Atomic write: write to .tmp then rename.
    pub fn save(&self, path: &Path) -> Result<(), DictError> {
        let bytes = self.to_bytes()?;
        let tmp = path.with_extension("tmp");
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&tmp, &bytes)?;
        fs::rename(&tmp, path)?;
        Ok(())
    }
}
