use criterion::{black_box, criterion_group, criterion_main, Criterion};
use cumber_core::dict::{syllabify, Phonology, PronunciationDict};
use cumber_core::generator::{Diversity, NameGenerator};
use rand::rngs::StdRng;
use rand::SeedableRng;

const BENCH_DICT: &str = "\
bandicoot B AE1 N D IH0 K UW2 T
barrister B AE1 R IH0 S T ER0
callahan K AE1 L AH0 HH AE0 N
countryman K AH1 N T R IY0 M AE2 N
engineer EH2 N JH AH0 N IH1 R
precaution P R IY0 K AO1 SH AH0 N
volunteer V AA2 L AH0 N T IH1 R
";

fn bench_syllabify(c: &mut Criterion) {
    let transcription = ["P", "R", "IY0", "K", "AO1", "SH", "AH0", "N"];
    c.bench_function("syllabify/precaution", |b| {
        b.iter(|| syllabify(black_box(&transcription[..])))
    });
}

fn bench_queries(c: &mut Criterion) {
    let dict = PronunciationDict::from_text(BENCH_DICT).unwrap();
    c.bench_function("stressed_syllable_index", |b| {
        b.iter(|| dict.stressed_syllable_index(black_box("volunteer")))
    });
    c.bench_function("last_vowel_sound", |b| {
        b.iter(|| dict.last_vowel_sound(black_box("callahan")))
    });
}

fn bench_random_name(c: &mut Criterion) {
    let dict = PronunciationDict::from_text(BENCH_DICT).unwrap();
    let mut group = c.benchmark_group("random_name");
    for (label, diversity) in [("low", Diversity::Low), ("high", Diversity::High)] {
        let generator = NameGenerator::new(&dict, diversity);
        let mut rng = StdRng::seed_from_u64(0);
        group.bench_function(label, |b| {
            b.iter(|| generator.random_name_with(&mut rng).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_syllabify, bench_queries, bench_random_name);
criterion_main!(benches);
