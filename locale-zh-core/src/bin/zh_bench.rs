//! Chinese Pipeline Benchmarking Tool
//!
//! Measures the throughput of the Chinese tokenizer and the full locale
//! pipeline on a large UTF-8 text file, such as a zhwiki abstracts dump.
//!
//! ## What It Benchmarks
//!
//! 1. **Tokenize**: jieba search-mode segmentation plus offset metadata
//! 2. **Pipeline**: tokenization followed by trimmer → stop words → stemmer
//!
//! Each line of the file is treated as one document field.
//!
//! ## Usage
//!
//! ```bash
//! cargo build --release --features bench -p locale-zh-core
//!
//! # Run both modes
//! ./target/release/zh_bench /path/to/zhwiki.txt
//!
//! # Only the tokenizer
//! ./target/release/zh_bench /path/to/zhwiki.txt tokenize
//!
//! # Legacy host token shape (no metadata)
//! ./target/release/zh_bench /path/to/zhwiki.txt pipeline legacy
//! ```
//!
//! Set `RUST_LOG=locale_zh_core=debug` to see dictionary loading and
//! installation events.
//!
//! ## Output
//!
//! ```text
//! === Pipeline (3 stages) ===
//! --------------------------------
//! Mode        : Pipeline
//! Mean        : 1.204 s
//! Best        : 1.187 s
//! Throughput  : 21.73 MiB/s (best 22.04 MiB/s)
//! Tokens      : 6_480_112
//! Tokens/sec  : 5_382_153
//! --------------------------------
//! ```

use std::env;
use std::fmt;
use std::fs;
use std::io;
use std::time::{Duration, Instant};

use locale_zh_core::host::{Host, LegacyHost, ModernHost};
use locale_zh_core::{ChineseLocale, HostMode};
use tracing_subscriber::EnvFilter;

const WARMUP_RUNS: usize = 1;
const MEASURE_RUNS: usize = 5;

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: zh_bench <path> [tokenize|pipeline|all] [modern|legacy]");
        std::process::exit(1);
    }

    let path = &args[1];
    let mode = args.get(2).map(String::as_str).unwrap_or("all");
    let host_mode = match args.get(3).map(String::as_str) {
        Some("legacy") => HostMode::Legacy,
        _ => HostMode::Modern,
    };

    println!("Loading file...");
    let bytes = fs::read(path)?;
    let input = std::str::from_utf8(&bytes)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    let lines: Vec<&str> = input.lines().filter(|l| !l.trim().is_empty()).collect();

    println!("File size: {}", fmt_size(input.len() as f64));
    println!("Fields:    {}", fmt_count(lines.len() as u64));
    println!("Host:      {}\n", host_mode);

    let locale = ChineseLocale::new();

    if matches!(mode, "tokenize" | "all") {
        bench_tokenize(&locale, &lines, input.len(), host_mode);
    }
    if matches!(mode, "pipeline" | "all") {
        bench_pipeline(&locale, &lines, input.len(), host_mode)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    }

    Ok(())
}

fn bench_tokenize(locale: &ChineseLocale, lines: &[&str], input_bytes: usize, mode: HostMode) {
    let tokenizer = locale.tokenizer(mode);

    println!("=== Tokenize ===");
    let report = time_fields("Tokenize", input_bytes, || {
        lines
            .iter()
            .map(|line| tokenizer.tokenize(Some((*line).into())).len() as u64)
            .sum()
    });
    println!("{report}\n");
}

fn bench_pipeline(
    locale: &ChineseLocale,
    lines: &[&str],
    input_bytes: usize,
    mode: HostMode,
) -> Result<(), locale_zh_core::InstallError> {
    let mut host: Box<dyn Host> = match mode {
        HostMode::Modern => Box::new(ModernHost::default()),
        HostMode::Legacy => Box::new(LegacyHost::default()),
    };
    locale.install(Some(host.as_mut()))?;

    println!("=== Pipeline ({} stages) ===", host.pipeline().len());
    let report = time_fields("Pipeline", input_bytes, || {
        lines
            .iter()
            .map(|line| host.analyze(Some((*line).into())).len() as u64)
            .sum()
    });
    println!("{report}\n");
    Ok(())
}

/// Timings of one benchmark over every field of the input.
struct Report {
    label: &'static str,
    input_bytes: usize,
    best: Duration,
    mean: Duration,
    tokens: u64,
}

/// Runs `pass` `WARMUP_RUNS` times untimed, then `MEASURE_RUNS` times timed.
/// `pass` returns the number of tokens it produced.
fn time_fields<F>(label: &'static str, input_bytes: usize, mut pass: F) -> Report
where
    F: FnMut() -> u64,
{
    for _ in 0..WARMUP_RUNS {
        std::hint::black_box(pass());
    }

    let mut best = Duration::MAX;
    let mut total = Duration::ZERO;
    let mut tokens = 0;
    for _ in 0..MEASURE_RUNS {
        let start = Instant::now();
        tokens = std::hint::black_box(pass());
        let took = start.elapsed();
        best = best.min(took);
        total += took;
    }

    Report {
        label,
        input_bytes,
        best,
        mean: total / MEASURE_RUNS as u32,
        tokens,
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mean = self.mean.as_secs_f64();
        let best = self.best.as_secs_f64();
        let per_sec = |secs: f64| self.input_bytes as f64 / secs;

        writeln!(f, "--------------------------------")?;
        writeln!(f, "Mode        : {}", self.label)?;
        writeln!(f, "Mean        : {:.3} s", mean)?;
        writeln!(f, "Best        : {:.3} s", best)?;
        writeln!(
            f,
            "Throughput  : {}/s (best {}/s)",
            fmt_size(per_sec(mean)),
            fmt_size(per_sec(best))
        )?;
        if self.tokens > 0 {
            writeln!(f, "Tokens      : {}", fmt_count(self.tokens))?;
            writeln!(f, "Tokens/sec  : {}", fmt_count((self.tokens as f64 / mean) as u64))?;
        }
        write!(f, "--------------------------------")
    }
}

/// Binary-prefixed size, e.g. `21.73 MiB`.
fn fmt_size(bytes: f64) -> String {
    const UNITS: [&str; 4] = ["B", "KiB", "MiB", "GiB"];

    let mut value = bytes;
    let mut unit = 0;
    while value >= 1024.0 && unit + 1 < UNITS.len() {
        value /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{value:.0} {}", UNITS[unit])
    } else {
        format!("{value:.2} {}", UNITS[unit])
    }
}

/// `6480112` → `6_480_112`.
fn fmt_count(n: u64) -> String {
    let digits = n.to_string();
    let head = digits.len() % 3;

    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    out.push_str(&digits[..head]);
    for (i, group) in digits.as_bytes()[head..].chunks(3).enumerate() {
        if head > 0 || i > 0 {
            out.push('_');
        }
        // ASCII digits only.
        out.extend(group.iter().map(|&b| b as char));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_are_grouped_by_thousands() {
        assert_eq!(fmt_count(0), "0");
        assert_eq!(fmt_count(999), "999");
        assert_eq!(fmt_count(123_456), "123_456");
        assert_eq!(fmt_count(6_480_112), "6_480_112");
    }

    #[test]
    fn sizes_pick_the_largest_unit() {
        assert_eq!(fmt_size(512.0), "512 B");
        assert_eq!(fmt_size(1536.0), "1.50 KiB");
        assert_eq!(fmt_size(3.0 * 1024.0 * 1024.0 * 1024.0 * 1024.0), "3072.00 GiB");
    }
}
