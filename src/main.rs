//! Wordle CSP CLI
//!
//! Interactive and one-shot front ends for the candidate filter.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::warn;
use wordle_csp::config::{load_config, Config, DEFAULT_CONFIG_PATH};
use wordle_csp::dictionary::load_dictionary;
use wordle_csp::{
    audit, score, DirectNormalizer, Fallback, Normalizer, Notation, Outcome, Session, Symbol,
    ToolCallNormalizer, Word,
};

#[derive(Parser)]
#[command(
    name = "wordle-csp",
    version,
    about = "List the Wordle words still consistent with your guesses"
)]
struct Cli {
    /// Configuration file.
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Word list, one word per line (overrides the config file).
    #[arg(long, global = true)]
    dictionary: Option<PathBuf>,

    /// Feedback letters (overrides the config file).
    #[arg(long, global = true, value_enum)]
    notation: Option<Notation>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Read attempts line by line and show the remaining words (default).
    Interactive,
    /// Print the feedback a guess gets against a secret.
    Score { secret: String, guess: String },
    /// Apply attempts such as "crane bybbb" and print the remaining words.
    Filter {
        #[arg(required = true)]
        attempts: Vec<String>,
    },
    /// Check that every dictionary word survives its own feedback for the given guesses.
    Audit {
        #[arg(required = true)]
        guesses: Vec<String>,
    },
}

/// Run `work` on this thread while a second one animates `message` on
/// stderr. The animation is cleared before the result is returned.
fn with_progress<T>(message: &str, work: impl FnOnce() -> T) -> T {
    const FRAMES: [char; 4] = ['|', '/', '-', '\\'];
    let done = AtomicBool::new(false);

    thread::scope(|scope| {
        scope.spawn(|| {
            let mut stderr = io::stderr();
            for frame in FRAMES.iter().cycle() {
                if done.load(Ordering::Relaxed) {
                    break;
                }
                let _ = write!(stderr, "\r{frame} {message}");
                let _ = stderr.flush();
                thread::sleep(Duration::from_millis(100));
            }
            let _ = write!(stderr, "\r{:width$}\r", "", width = message.len() + 2);
            let _ = stderr.flush();
        });

        let result = work();
        done.store(true, Ordering::Relaxed);
        result
    })
}

fn main() {
    wordle_csp::logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut config = load_config(&cli.config)?;
    if let Some(path) = cli.dictionary {
        config.dictionary = Some(path);
    }
    if let Some(notation) = cli.notation {
        config.notation = notation;
    }

    match cli.command.unwrap_or(Command::Interactive) {
        Command::Interactive => cmd_interactive(&config),
        Command::Score { secret, guess } => cmd_score(&config, &secret, &guess),
        Command::Filter { attempts } => cmd_filter(&config, &attempts),
        Command::Audit { guesses } => cmd_audit(&config, &guesses),
    }
}

fn normalizer(notation: Notation) -> impl Normalizer {
    Fallback::new(
        DirectNormalizer::new(notation),
        ToolCallNormalizer::new(notation),
    )
}

fn print_candidates(session: &Session, limit: usize) {
    let candidates = session.candidates();
    let shown: Vec<String> = candidates
        .iter()
        .take(limit)
        .map(|w| w.to_uppercase())
        .collect();
    let more = if candidates.len() > limit { ", ..." } else { "" };
    println!("Possible words ({}):", candidates.len());
    println!("{}{}", shown.join(", "), more);
}

fn print_outcome(outcome: &Outcome, session: &Session, config: &Config) {
    match outcome {
        Outcome::Solved(word) => {
            println!("Solved: {}", word.to_uppercase());
        }
        Outcome::Inconsistent => {
            println!("No word matches every attempt.");
            println!("One of the attempts is probably wrong. Use 'reset' to start over.");
        }
        Outcome::Remaining(_) => print_candidates(session, config.display_limit),
    }
}

fn print_help(notation: Notation) {
    let hit = notation.letter(Symbol::Hit);
    let present = notation.letter(Symbol::Present);
    let absent = notation.letter(Symbol::Absent);
    let example = format!("{hit}{absent}{absent}{present}{absent}");

    println!("Enter an attempt as GUESS FEEDBACK, e.g. ORATE {example} or ORATE -> {example}.");
    println!("Feedback letters: {hit} = hit, {present} = present, {absent} = absent.");
    println!("Tool-call JSON {{\"guess\": ..., \"feedback\": ...}} is accepted too.");
    println!("Commands: help, history, remaining, reset, quit");
}

fn cmd_interactive(config: &Config) -> Result<()> {
    let words = load_dictionary(config.dictionary.as_deref())?;
    if words.is_empty() {
        bail!("dictionary is empty");
    }
    println!("Loaded {} words.", words.len());

    let mut session = Session::new(words);
    let normalizer = normalizer(config.notation);
    print_help(config.notation);
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush().context("flush stdout")?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).context("read stdin")? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match line.to_lowercase().as_str() {
            "help" | "h" | "?" => print_help(config.notation),
            "quit" | "exit" | "q" => {
                println!("Goodbye!");
                break;
            }
            "history" => {
                if session.history().is_empty() {
                    println!("No attempts yet.");
                }
                for (i, attempt) in session.history().iter().enumerate() {
                    println!(
                        "{}. {} {} {}",
                        i + 1,
                        attempt.guess().to_uppercase(),
                        attempt.feedback().to_notation_string(config.notation),
                        attempt.feedback()
                    );
                }
            }
            "remaining" | "r" => print_candidates(&session, config.display_limit),
            "reset" => {
                session.reset();
                println!("New game. {} words available.", session.remaining_count());
            }
            _ => match session.submit(line, &normalizer) {
                Ok(outcome) => {
                    if let Some(attempt) = session.history().last() {
                        println!(
                            "Added attempt {}: {} {}",
                            session.history().len(),
                            attempt.guess().to_uppercase(),
                            attempt.feedback()
                        );
                    }
                    print_outcome(&outcome, &session, config);
                }
                Err(err) => {
                    warn!(input = line, error = %err, "attempt rejected");
                    println!("Could not read an attempt: {}", err);
                    println!("Type 'help' for the expected format.");
                }
            },
        }
        println!();
    }
    Ok(())
}

fn cmd_score(config: &Config, secret: &str, guess: &str) -> Result<()> {
    let feedback = score(secret, guess).context("score guess")?;
    println!(
        "{} {}",
        feedback.to_notation_string(config.notation),
        feedback
    );
    Ok(())
}

fn cmd_filter(config: &Config, attempts: &[String]) -> Result<()> {
    let words = load_dictionary(config.dictionary.as_deref())?;
    let mut session = Session::new(words);
    let normalizer = normalizer(config.notation);

    let mut outcome = Outcome::Remaining(session.remaining_count());
    for raw in attempts {
        outcome = session
            .submit(raw, &normalizer)
            .with_context(|| format!("attempt {:?}", raw))?;
    }
    print_outcome(&outcome, &session, config);
    Ok(())
}

fn cmd_audit(config: &Config, guesses: &[String]) -> Result<()> {
    let guesses = guesses
        .iter()
        .map(|g| Word::parse(g).with_context(|| format!("guess {:?}", g)))
        .collect::<Result<Vec<_>>>()?;
    let words = load_dictionary(config.dictionary.as_deref())?;

    let start = Instant::now();
    let report = with_progress("Auditing...", || audit(&words, &guesses));
    let elapsed = start.elapsed();

    let total = report.secrets.len();
    println!("Remaining words after {} guesses:", guesses.len());
    for (remaining, count) in report.distribution() {
        let pct = count as f64 / total as f64 * 100.0;
        let bar = "█".repeat((count * 40 / total).max(1));
        println!("  {:>4} left: {:>5} ({:>5.1}%) {}", remaining, count, pct, bar);
    }
    println!();
    println!("Average remaining: {:.2}", report.average_remaining());
    println!("Secrets audited: {}", total);
    println!("Time elapsed: {:.2?}", elapsed);

    let violations = report.violations();
    if !violations.is_empty() {
        for v in &violations {
            eprintln!("secret {} was eliminated", v.secret.to_uppercase());
        }
        bail!("{} secrets eliminated by their own feedback", violations.len());
    }
    println!("✓ Every secret survived its own feedback.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_progress_returns_work_result() {
        let words = vec!["crane".to_string(), "slate".to_string()];
        let guesses = vec![Word::parse("crane").unwrap()];
        let report = with_progress("Auditing...", || audit(&words, &guesses));
        assert_eq!(report.secrets.len(), 2);
        assert!(report.violations().is_empty());
    }
}
