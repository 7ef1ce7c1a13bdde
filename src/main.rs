use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, BufRead};
use std::path::PathBuf;
use std::time::Duration;
use wordwise::checker::{normalize_query, SpellChecker, Verdict};
use wordwise::cli::output::{self, OutputFormat};
use wordwise::Config;

#[derive(Parser, Debug)]
#[command(name = "wordwise")]
#[command(version, about = "An interactive spelling suggester", long_about = None)]
struct Cli {
    /// Word to check (omit for an interactive session)
    #[arg(value_name = "WORD")]
    word: Option<String>,

    /// Dictionary word list to load
    #[arg(short, long, value_name = "FILE")]
    dictionary: Option<PathBuf>,

    /// Number of hash buckets for the dictionary store
    #[arg(long, value_name = "N")]
    capacity: Option<usize>,

    /// Maximum number of suggestions to offer
    #[arg(short = 'n', long, value_name = "N")]
    max_suggestions: Option<usize>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Suppress the dictionary load report
    #[arg(long)]
    no_timing: bool,

    /// Output format (text, json)
    #[arg(short = 'o', long, default_value = "text")]
    format: OutputFormat,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "wordwise", &mut io::stdout());
        return Ok(());
    }

    let config = Config::load(
        cli.dictionary.clone(),
        cli.capacity,
        cli.max_suggestions,
        cli.no_timing,
    )?;

    let colored = !cli.no_color;

    // Spinner draws to stderr and hides itself when not a terminal.
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}").unwrap());
    spinner.set_message(format!("Loading {}...", config.dictionary.display()));
    spinner.enable_steady_tick(Duration::from_millis(80));

    let checker = SpellChecker::new(&config)?;
    spinner.finish_and_clear();

    if config.show_timing && matches!(cli.format, OutputFormat::Text) {
        output::print_load_stats(&checker.load_stats(), colored);
    }

    match cli.word {
        Some(raw) => run_once(&checker, &raw, colored, &cli.format),
        None => run_interactive(&checker, colored),
    }
}

fn run_once(checker: &SpellChecker, raw: &str, colored: bool, format: &OutputFormat) -> Result<()> {
    let word = match normalize_query(raw) {
        Ok(word) => word,
        Err(_) => {
            output::print_invalid_word(raw, colored);
            std::process::exit(2);
        }
    };

    let verdict = checker.check(&word);
    let misspelled = matches!(verdict, Verdict::Misspelled { .. });
    output::print_verdict(raw, &verdict, colored, format);

    if misspelled {
        std::process::exit(1);
    }
    Ok(())
}

fn run_interactive(checker: &SpellChecker, colored: bool) -> Result<()> {
    let stdin = io::stdin();
    let mut line = String::new();

    loop {
        output::print_prompt()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF ends the session
        }

        let token = line.trim();
        if token.is_empty() {
            continue;
        }
        if token == "quit" {
            break;
        }

        match normalize_query(token) {
            Ok(word) => {
                let verdict = checker.check(&word);
                output::print_verdict(token, &verdict, colored, &OutputFormat::Text);
            }
            Err(_) => output::print_invalid_word(token, colored),
        }
    }

    Ok(())
}
