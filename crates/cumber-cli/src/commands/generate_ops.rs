use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::dict_source;
use cumber_core::dict::{Phonology, PronunciationDict};
use cumber_core::generator::{Diversity, GenerateError, NameGenerator};

pub struct GenerateOptions {
    pub count: u16,
    pub diversity: Diversity,
    pub max_draws: usize,
    pub seed: Option<u64>,
    /// Explicit dictionary file; when `None` the cached default is used and
    /// downloaded from `url` if missing.
    pub dict: Option<PathBuf>,
    pub url: String,
}

pub fn generate(opts: &GenerateOptions) {
    let path = resolve_dict(opts.dict.as_deref(), &opts.url);
    let dict = die!(
        PronunciationDict::bootstrap(&path),
        "Error loading dictionary: {}"
    );
    die!(
        for_each_name(&dict, opts, |name| println!("{name}")),
        "Error: {}"
    );
}

/// Generate `opts.count` names in order, handing each to `emit` as soon as it
/// exists. On failure the names already emitted stay emitted.
pub fn for_each_name<P: Phonology>(
    phonology: &P,
    opts: &GenerateOptions,
    mut emit: impl FnMut(String),
) -> Result<(), GenerateError> {
    let generator = NameGenerator::new(phonology, opts.diversity).with_max_draws(opts.max_draws);
    debug!(count = opts.count, diversity = ?opts.diversity, seed = ?opts.seed, "generating");

    match opts.seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            for _ in 0..opts.count {
                emit(generator.random_name_with(&mut rng)?);
            }
        }
        None => {
            for _ in 0..opts.count {
                emit(generator.random_name()?);
            }
        }
    }
    Ok(())
}

fn resolve_dict(explicit: Option<&Path>, url: &str) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    let path = dict_source::default_dict_path();
    die!(
        dict_source::fetch(url, &path),
        "Error fetching dictionary: {}"
    );
    path
}
