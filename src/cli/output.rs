use crate::checker::{LoadStats, Verdict};
use colored::*;
use serde::Serialize;
use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize)]
struct JsonVerdict<'a> {
    word: &'a str,
    correct: bool,
    suggestions: &'a [String],
}

pub fn print_load_stats(stats: &LoadStats, colored_output: bool) {
    let line = format!(
        "Dictionary loaded: {} words in {:.3} seconds",
        stats.words,
        stats.elapsed.as_secs_f64()
    );

    if colored_output {
        println!("{}", line.dimmed());
    } else {
        println!("{}", line);
    }
}

pub fn print_verdict(word: &str, verdict: &Verdict, colored_output: bool, format: &OutputFormat) {
    match format {
        OutputFormat::Text => print_text_verdict(word, verdict, colored_output),
        OutputFormat::Json => print_json_verdict(word, verdict),
    }
}

fn print_text_verdict(word: &str, verdict: &Verdict, colored_output: bool) {
    match verdict {
        Verdict::Correct => {
            if colored_output {
                println!(
                    "{} The word {} is spelled correctly",
                    "✓".green().bold(),
                    word.green().bold()
                );
            } else {
                println!("✓ The word {} is spelled correctly", word);
            }
        }
        Verdict::Misspelled { suggestions } => {
            if colored_output {
                println!(
                    "{} The word {} is spelled incorrectly",
                    "✗".red().bold(),
                    word.red().bold()
                );
            } else {
                println!("✗ The word {} is spelled incorrectly", word);
            }

            if suggestions.is_empty() {
                println!("  No suggestions available");
            } else if colored_output {
                let joined = suggestions
                    .iter()
                    .map(|s| s.green().to_string())
                    .collect::<Vec<_>>()
                    .join(&", ".dimmed().to_string());
                println!("  Did you mean {}?", joined);
            } else {
                println!("  Did you mean {}?", suggestions.join(", "));
            }
        }
    }
}

fn print_json_verdict(word: &str, verdict: &Verdict) {
    let empty: &[String] = &[];
    let output = match verdict {
        Verdict::Correct => JsonVerdict {
            word,
            correct: true,
            suggestions: empty,
        },
        Verdict::Misspelled { suggestions } => JsonVerdict {
            word,
            correct: false,
            suggestions,
        },
    };

    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}

pub fn print_prompt() -> io::Result<()> {
    print!("Enter a word or \"quit\" to quit: ");
    io::stdout().flush()
}

pub fn print_invalid_word(word: &str, colored_output: bool) {
    if colored_output {
        println!("{} {}", "Invalid word:".yellow().bold(), word);
    } else {
        println!("Invalid word: {}", word);
    }
}
