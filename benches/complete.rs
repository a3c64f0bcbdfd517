use std::hint::black_box;

use brunch::Bench;
use typeahead::{BaseCompleter, Completer, FrequencyCompleter};

const SAMPLES: u32 = 100_000;

/// Every word of length 1 to 4 over a small alphabet, with a frequency derived from the word's
/// position so that ranking has real work to do.
fn entries() -> Vec<(String, u64)> {
    let alphabet = ['c', 'a', 'r', 't', 'd', 'o', 'g'];
    let mut words = vec![String::new()];
    let mut out = Vec::new();

    for _ in 0..4 {
        let mut next = Vec::new();
        for word in &words {
            for ch in alphabet {
                let mut word = word.clone();
                word.push(ch);
                next.push(word);
            }
        }
        out.extend(next.iter().cloned());
        words = next;
    }

    out.into_iter()
        .enumerate()
        .map(|(position, word)| (word, (position % 97) as u64))
        .collect()
}

fn main() {
    let owned = entries();
    let entries: Vec<(&str, u64)> = owned
        .iter()
        .map(|(word, frequency)| (word.as_str(), *frequency))
        .collect();
    let base = BaseCompleter::new(entries.iter().copied()).unwrap();
    let frequency = FrequencyCompleter::new(entries.iter().copied()).unwrap();

    eprintln!("Benchmarking over {} words...", entries.len());
    eprintln!();
    brunch::benches!(
        inline:

        // Construction
        Bench::new("Build a BaseCompleter")
            .run(|| BaseCompleter::new(black_box(entries.iter().copied()))),
        Bench::spacer(),

        // Queries
        Bench::new("Base: short prefix (\"ca\")")
            .with_samples(SAMPLES)
            .run(|| {
                let mut out = Vec::new();
                base.complete(black_box("ca"), &mut out);
                out
            }),
        Bench::new("Base: whole dictionary (\"\")")
            .run(|| {
                let mut out = Vec::new();
                base.complete(black_box(""), &mut out);
                out
            }),
        Bench::new("Frequency: short prefix (\"ca\")")
            .with_samples(SAMPLES)
            .run(|| {
                let mut out = Vec::new();
                frequency.complete(black_box("ca"), &mut out);
                out
            }),
        Bench::new("No match (\"zz\")")
            .with_samples(SAMPLES)
            .run(|| {
                let mut out = Vec::new();
                base.complete(black_box("zz"), &mut out);
                out
            }),
    );
}
