use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

use sarf_core::{Lexicon, LexiconStats};
use sarf_index::DerivedWord;
use sarf_schemes::{SchemeEntry, SchemeTable};
use sarf_text::{contains_arabic, decode_utf8, to_scalars, Normalizer};

/// Walk a small corpus of root/word observations through the lexicon and
/// print what the index ends up holding.
#[derive(Parser, Debug)]
#[command(name = "sarf-demo", version, about = "Arabic root lexicon demo")]
struct Cli {
    /// File of `root word` observation lines; defaults to a built-in sample
    #[arg(long)]
    input: Option<PathBuf>,

    /// File of `name pattern` scheme lines; defaults to the built-in inventory
    #[arg(long)]
    schemes: Option<PathBuf>,

    /// Fold spelling variants before indexing
    #[arg(long)]
    normalize: bool,

    /// Emit the final listing as JSON instead of a plain report
    #[arg(long)]
    json: bool,
}

/// Sample corpus of (root form, derived word) observations.
const SAMPLE_OBSERVATIONS: &[(&str, &str)] = &[
    ("كتب", "كاتب"),
    ("كتب", "مكتوب"),
    ("كتب", "كاتب"),
    ("كتب", "كتاب"),
    ("درس", "دارس"),
    ("درس", "مدرسة"),
    ("خرج", "خروج"),
    ("علم", "عالم"),
    ("علم", "معلوم"),
    ("فهم", "فاهم"),
    ("قرأ", "قارئ"),
    ("سمع", "سامع"),
    ("نظر", "ناظر"),
    ("ذهب", "ذاهب"),
    ("جلس", "جالس"),
    ("قام", "قائم"),
    ("نام", "نائم"),
    ("أكل", "آكل"),
    ("شرب", "شارب"),
    ("لعب", "لاعب"),
    ("عمل", "عامل"),
];

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let schemes = match &cli.schemes {
        Some(path) => SchemeTable::from_file(path)
            .with_context(|| format!("loading schemes from {}", path.display()))?,
        None => SchemeTable::with_builtin(),
    };

    let mut lexicon = Lexicon::new().with_schemes(schemes);
    if cli.normalize {
        lexicon = lexicon.with_normalizer(Normalizer::new());
    }

    let observations = load_observations(cli.input.as_deref())?;
    for (root, word) in &observations {
        lexicon.record(root, word)?;
    }
    info!(
        "Indexed {} observations into {} roots (tree height {})",
        observations.len(),
        lexicon.root_count(),
        lexicon.tree_height()
    );

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&Report::gather(&lexicon))?);
    } else {
        print_report(&lexicon);
    }
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or(EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(false);
    Registry::default().with(env_filter).with(fmt_layer).init();
}

fn load_observations(input: Option<&std::path::Path>) -> anyhow::Result<Vec<(String, String)>> {
    let Some(path) = input else {
        return Ok(SAMPLE_OBSERVATIONS
            .iter()
            .map(|(root, word)| (root.to_string(), word.to_string()))
            .collect());
    };

    // Read as raw bytes so malformed UTF-8 is caught at the boundary
    // instead of surfacing later as a lookup miss.
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let text = decode_utf8(&bytes)?;

    let mut observations = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let (root, word) = line
            .split_once(char::is_whitespace)
            .with_context(|| format!("line {}: expected `root word`", idx + 1))?;
        observations.push((root.to_string(), word.trim_start().to_string()));
    }
    Ok(observations)
}

fn print_report(lexicon: &Lexicon) {
    println!("Indexed roots ({}), ascending:", lexicon.root_count());
    for node in lexicon.roots() {
        let words: Vec<String> = node
            .derived_words()
            .iter()
            .map(|d| format!("{} x{}", d.word, d.frequency))
            .collect();
        println!("  {:<10} h{}  {}", node.key(), node.height(), words.join("، "));
    }

    if let Some(node) = lexicon.roots().next() {
        let sample = node.key().as_str();
        println!(
            "\nFirst root {:?}: {} bytes, {} scalars, arabic: {}",
            sample,
            sample.len(),
            to_scalars(sample).len(),
            contains_arabic(sample)
        );
    }

    println!("\nSchemes ({}):", lexicon.scheme_count());
    for entry in lexicon.schemes() {
        println!("  {:<10} {}", entry.name, entry.pattern);
    }

    let stats = lexicon.stats();
    println!(
        "\nTree height {}, scheme load factor {:.3}, {} bucket collisions",
        stats.tree_height, stats.scheme_load_factor, stats.scheme_collisions
    );
}

#[derive(Serialize)]
struct Report {
    roots: Vec<RootReport>,
    schemes: Vec<SchemeEntry>,
    stats: LexiconStats,
}

#[derive(Serialize)]
struct RootReport {
    root: String,
    height: u32,
    derived: Vec<DerivedWord>,
}

impl Report {
    fn gather(lexicon: &Lexicon) -> Self {
        Report {
            roots: lexicon
                .roots()
                .map(|node| RootReport {
                    root: node.key().to_string(),
                    height: node.height(),
                    derived: node.derived_words().to_vec(),
                })
                .collect(),
            schemes: lexicon.schemes().cloned().collect(),
            stats: lexicon.stats(),
        }
    }
}
