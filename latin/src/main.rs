use std::io::{self, BufRead};
use std::path::PathBuf;

use clap::Parser;
use libsuggest_core::Config;

use liblatin::Engine;

/// Demo CLI for the Latin suggestion engine.
#[derive(Parser)]
#[command(name = "liblatin", about = "Latin suggestion engine demo REPL")]
struct Args {
    /// Word list, one word per line. Falls back to a tiny built-in set.
    #[arg(long)]
    words: Option<PathBuf>,

    /// Optional TOML config overriding the built-in tuning defaults.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load_toml(path).map_err(|e| anyhow::anyhow!("{e}"))?,
        None => Config::default(),
    };

    let mut engine = Engine::new(config);
    match &args.words {
        Some(path) => {
            let n = engine.load_words(path)?;
            println!("loaded {} words from {}", n, path.display());
        }
        None => {
            println!("no --words given, using the built-in demo words");
            for w in ["hello", "help", "world", "word", "work", "cat", "car", "cart"] {
                engine.insert(w);
            }
        }
    }

    println!("liblatin demo REPL — type a prefix and press Enter, Ctrl-D to exit.");

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        for (idx, word) in engine.suggest(input).iter().enumerate() {
            println!("{}. {}", idx + 1, word);
        }
    }
    Ok(())
}
