use anyhow::{Context, Result};
use clap::Parser;
use rayon::prelude::*;
use serde::Serialize;
use std::fs;
use std::io::Read;
use std::path::PathBuf;

use unicount::TextCounter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input text files; reads stdin when none are given
    files: Vec<PathBuf>,

    /// Emit counts as JSON instead of the tabular format
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct FileCounts {
    file: String,
    words: usize,
    lines: usize,
}

fn count_text(counter: &TextCounter, file: String, text: &str) -> FileCounts {
    FileCounts {
        file,
        words: counter.count_words(text),
        lines: TextCounter::count_lines(text),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let counter = TextCounter::new();

    let counts: Vec<FileCounts> = if args.files.is_empty() {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read stdin")?;
        vec![count_text(&counter, "-".to_string(), &text)]
    } else {
        // Files are independent, so fan out across the pool.
        args.files
            .par_iter()
            .map(|path| {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("failed to read {}", path.display()))?;
                Ok(count_text(&counter, path.display().to_string(), &text))
            })
            .collect::<Result<Vec<_>>>()?
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&counts)?);
        return Ok(());
    }

    println!("{:>10} {:>10}  {}", "words", "lines", "file");
    for c in &counts {
        println!("{:>10} {:>10}  {}", c.words, c.lines, c.file);
    }
    if counts.len() > 1 {
        let words: usize = counts.iter().map(|c| c.words).sum();
        let lines: usize = counts.iter().map(|c| c.lines).sum();
        println!("{:>10} {:>10}  total", words, lines);
    }

    Ok(())
}
