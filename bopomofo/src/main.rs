use std::io::{self, BufRead};
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use libsuggest_core::Config;

use libbopomofo::{Dictionary, Engine};

/// Demo CLI for the bopomofo suggestion engine.
#[derive(Parser)]
#[command(name = "libbopomofo", about = "Bopomofo suggestion engine demo REPL")]
struct Args {
    /// Tab-separated word list (word, syllables, tones, initials, count,
    /// weight, is_ngram). Falls back to a tiny built-in demo dictionary.
    #[arg(long)]
    dict: Option<PathBuf>,

    /// Optional TOML config overriding the built-in tuning defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// How many suggestions to print per input line.
    #[arg(long, default_value_t = 8)]
    top: usize,
}

fn build_demo_dictionary() -> Dictionary {
    let mut dict = Dictionary::new();
    let rows: &[(&str, &str, &str, &str, usize, f32, bool)] = &[
        ("你好", "ㄋㄧ,ㄏㄠ", "3,3", "ㄋ,ㄏ", 2, 100.0, false),
        ("你", "ㄋㄧ", "3", "ㄋ", 1, 60.0, false),
        ("好", "ㄏㄠ", "3", "ㄏ", 1, 55.0, false),
        ("嗎", "ㄇㄚ", "0", "ㄇ", 1, 40.0, false),
        ("中國", "ㄓㄨㄥ,ㄍㄨㄛ", "1,2", "ㄓ,ㄍ", 2, 90.0, false),
        ("你好嗎", "ㄋㄧ,ㄏㄠ,ㄇㄚ", "3,3,0", "ㄋ,ㄏ,ㄇ", 3, 30.0, true),
    ];
    for (word, syl, tones, initials, count, weight, is_ngram) in rows {
        dict.insert(word, syl, tones, initials, *count, *weight, *is_ngram)
            .expect("demo dictionary row");
    }
    dict
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load_toml(path).map_err(|e| anyhow::anyhow!("{e}"))?,
        None => Config::default(),
    };

    let dict = match &args.dict {
        Some(path) => {
            let dict = Dictionary::load_tsv(path)?;
            println!("loaded {} entries from {}", dict.len(), path.display());
            dict
        }
        None => {
            println!("no --dict given, using the built-in demo dictionary");
            build_demo_dictionary()
        }
    };

    let engine = Engine::new(Arc::new(dict), config);

    println!("libbopomofo demo REPL — type bopomofo input and press Enter");
    println!("Example: ㄋㄧˇㄏㄠˇ for 你好. Ctrl-D to exit.");

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.is_empty() {
            continue;
        }
        // Do not trim: a trailing space is the tone-1 mark.
        let suggestions = engine.suggest(&line);
        if suggestions.is_empty() {
            println!("(no suggestions)");
            continue;
        }
        for (idx, s) in suggestions.iter().take(args.top).enumerate() {
            if s.remainder.is_empty() {
                println!("{}. {}", idx + 1, s.text);
            } else {
                println!("{}. {}  (remainder: {})", idx + 1, s.text, s.remainder);
            }
        }
    }
    Ok(())
}
