//! Analysis Pipeline Benchmarking Tool
//!
//! Measures throughput of the matching engine on a large text file, one
//! record per line (skill names, subject titles, article abstracts).
//!
//! ## What It Benchmarks
//!
//! 1. **Normalize**: folding every line to the canonical alphabet
//! 2. **Tokenize**: splitting every line into filtered tokens
//! 3. **Query**: expanding every line into its match-key set
//! 4. **Similarity**: scoring each line against the next one
//!
//! ## Usage
//!
//! ```bash
//! cargo build --release -p sift-core --features bench
//! ./target/release/sift_bench /path/to/lines.txt           # all modes
//! ./target/release/sift_bench /path/to/lines.txt query     # one mode
//! RUST_LOG=sift_core=trace ./target/release/sift_bench lines.txt similarity
//! ```
//!
//! ## Output
//!
//! ```text
//! === Similarity ===
//! mode        : Similarity
//! elapsed     : 452.108 ms
//! input       : 223.41 MiB/s
//! per line    : 187.3 ns
//! pairs       : 2_413_905
//! pairs/s     : 5_339_267
//! ```
//!
//! Build in release mode and use an input of 100MB+ for stable numbers.

use std::env;
use std::fs;
use std::io;
use std::time::{Duration, Instant};

use sift_core::Analyzer;
use tracing::info;
use tracing_subscriber::EnvFilter;

const WARMUP_RUNS: usize = 1;
const MEASURE_RUNS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Normalize,
    Tokenize,
    Query,
    Similarity,
}

impl Mode {
    const ALL: [Mode; 4] = [Mode::Normalize, Mode::Tokenize, Mode::Query, Mode::Similarity];

    fn parse(arg: &str) -> Option<Vec<Mode>> {
        let mode = match arg {
            "normalize" => Mode::Normalize,
            "tokenize" => Mode::Tokenize,
            "query" => Mode::Query,
            "similarity" => Mode::Similarity,
            "all" => return Some(Self::ALL.to_vec()),
            _ => return None,
        };
        Some(vec![mode])
    }

    /// What one run of this mode produces, for the throughput line.
    fn unit(self) -> &'static str {
        match self {
            Mode::Normalize => "bytes out",
            Mode::Tokenize => "tokens",
            Mode::Query => "keys",
            Mode::Similarity => "pairs",
        }
    }
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: sift_bench <path> [normalize|tokenize|query|similarity|all]");
        std::process::exit(1);
    }

    let modes = match args.get(2).map(String::as_str) {
        None => Mode::ALL.to_vec(),
        Some(arg) => match Mode::parse(arg) {
            Some(modes) => modes,
            None => {
                eprintln!("Unknown mode: {arg}");
                std::process::exit(1);
            }
        },
    };

    let input = fs::read_to_string(&args[1])?;
    let lines: Vec<&str> = input.lines().collect();

    info!(
        path = %args[1],
        size = %fmt_bytes(input.len() as u64),
        lines = lines.len(),
        "loaded input"
    );

    let analyzer = Analyzer::new();
    for mode in modes {
        bench(&analyzer, mode, &lines, input.len());
    }

    Ok(())
}

fn bench(analyzer: &Analyzer, mode: Mode, lines: &[&str], input_bytes: usize) {
    println!("=== {mode:?} ===");

    let run = || -> u64 {
        let mut items = 0u64;
        match mode {
            Mode::Normalize => {
                for line in lines {
                    items += analyzer.normalize(*line).len() as u64;
                }
            }
            Mode::Tokenize => {
                for line in lines {
                    items += analyzer.tokenize(*line).len() as u64;
                }
            }
            Mode::Query => {
                for line in lines {
                    items += analyzer.process_search_query(*line).len() as u64;
                }
            }
            Mode::Similarity => {
                for pair in lines.windows(2) {
                    let score = analyzer.calculate_similarity(pair[0], pair[1]);
                    std::hint::black_box(score);
                    items += 1;
                }
            }
        }
        std::hint::black_box(items)
    };

    for _ in 0..WARMUP_RUNS {
        run();
    }

    let mut items = 0u64;
    let mut total = Duration::ZERO;
    for _ in 0..MEASURE_RUNS {
        let start = Instant::now();
        items = run();
        total += start.elapsed();
    }

    print_perf(mode, input_bytes, lines.len(), total / MEASURE_RUNS as u32, items);
}

fn print_perf(mode: Mode, input_bytes: usize, lines: usize, elapsed: Duration, produced: u64) {
    let secs = elapsed.as_secs_f64();
    let unit = mode.unit();

    println!("{:<12}: {mode:?}", "mode");
    println!("{:<12}: {:.3} ms", "elapsed", secs * 1e3);
    println!("{:<12}: {}/s", "input", fmt_bytes((input_bytes as f64 / secs) as u64));
    if lines > 0 {
        println!("{:<12}: {:.1} ns", "per line", secs * 1e9 / lines as f64);
    }
    if produced > 0 {
        println!("{unit:<12}: {}", fmt_count(produced));
        println!("{:<12}: {}", format!("{unit}/s"), fmt_count((produced as f64 / secs) as u64));
    }
    println!();
}

fn fmt_bytes(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KiB", "MiB", "GiB"];

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit + 1 < UNITS.len() {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{bytes} {}", UNITS[0])
    } else {
        format!("{value:.2} {}", UNITS[unit])
    }
}

/// Groups digits in threes: `1234567` becomes `1_234_567`.
fn fmt_count(n: u64) -> String {
    let digits = n.to_string();
    let head = digits.len() % 3;
    let mut out = String::from(&digits[..head]);

    for chunk in digits.as_bytes()[head..].chunks(3) {
        if !out.is_empty() {
            out.push('_');
        }
        out.extend(chunk.iter().map(|&b| char::from(b)));
    }
    out
}
