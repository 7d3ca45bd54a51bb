use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

/// Write a synthetic certificate-size benchmark file in the layout the
/// viewer reads: one `<size> <count>` histogram per algorithm, each closed
/// by a `-` line.
#[derive(Parser, Debug)]
#[command(name = "generate_sample", about)]
struct Args {
    #[arg(long, default_value = "data")]
    out_dir: PathBuf,

    #[arg(long, default_value = "characters")]
    curve_set: String,

    /// Certificate variant (`yes`, `yes_alt` or `no` in the benchmark)
    #[arg(long, default_value = "yes")]
    variant: String,

    #[arg(long, default_value_t = 1000)]
    queries: u32,

    #[arg(long, default_value_t = 42)]
    seed: u64,
}

/// splitmix64, enough for reproducible sample data.
struct SplitMix {
    state: u64,
}

impl SplitMix {
    fn new(seed: u64) -> Self {
        SplitMix { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    fn unit(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn range(&mut self, lo: u32, hi: u32) -> u32 {
        lo + (self.next_u64() % u64::from(hi - lo + 1)) as u32
    }
}

/// Certificate sizes for one query: `(shortest, frechet_light)`.
///
/// The shortest certificate never exceeds the FRECHET_LIGHT one; trivial
/// queries (one in twenty) produce an empty shortest certificate.
fn sample_query(rng: &mut SplitMix) -> (u32, u32) {
    let curve_len = rng.range(20, 999);
    let light = (curve_len as f64 * (0.05 + 0.25 * rng.unit())).round() as u32 + 1;
    let shortest = if rng.unit() < 0.05 {
        0
    } else {
        (light as f64 * (0.3 + 0.6 * rng.unit())).round().max(1.0) as u32
    };
    (shortest, light)
}

fn write_histogram(out: &mut impl Write, hist: &BTreeMap<u32, u32>) -> std::io::Result<()> {
    for (size, count) in hist {
        writeln!(out, "{size} {count}")?;
    }
    writeln!(out, "-")
}

fn write_sample(path: &Path, args: &Args) -> Result<()> {
    let mut rng = SplitMix::new(args.seed);
    let mut shortest: BTreeMap<u32, u32> = BTreeMap::new();
    let mut light: BTreeMap<u32, u32> = BTreeMap::new();

    for _ in 0..args.queries {
        let (s, l) = sample_query(&mut rng);
        *shortest.entry(s).or_default() += 1;
        *light.entry(l).or_default() += 1;
    }

    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut out = BufWriter::new(file);
    write_histogram(&mut out, &shortest)?;
    write_histogram(&mut out, &light)?;
    out.flush()?;

    log::info!(
        "{} distinct SHORTEST_CERTIFICATE sizes, {} distinct FRECHET_LIGHT sizes",
        shortest.len(),
        light.len()
    );
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating {}", args.out_dir.display()))?;
    let path = args
        .out_dir
        .join(format!("{}_{}.txt", args.curve_set, args.variant));

    write_sample(&path, &args)?;
    println!("Wrote {} queries to {}", args.queries, path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shortest_never_exceeds_light() {
        let mut rng = SplitMix::new(7);
        for _ in 0..5000 {
            let (s, l) = sample_query(&mut rng);
            assert!(s <= l, "{s} > {l}");
            assert!(l >= 1);
        }
    }

    #[test]
    fn histogram_layout() {
        let hist = BTreeMap::from([(12, 3), (4, 1)]);
        let mut buf = Vec::new();
        write_histogram(&mut buf, &hist).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "4 1\n12 3\n-\n");
    }

    #[test]
    fn counts_add_up_to_queries() {
        let dir = tempfile::tempdir().unwrap();
        let args = Args::parse_from(["generate_sample", "--queries", "250", "--seed", "3"]);
        let path = dir.path().join("characters_yes.txt");
        write_sample(&path, &args).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let mut sections = text.split("-\n");
        for _ in 0..2 {
            let total: u32 = sections
                .next()
                .unwrap()
                .lines()
                .map(|l| l.split_whitespace().nth(1).unwrap().parse::<u32>().unwrap())
                .sum();
            assert_eq!(total, 250);
        }
    }
}
