//! Tinter - console toolkit
//!
//! CLI entry point: style text, ask questions, list the palette.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use tinter::{
    AskError, Color, FontStyle, Question, QuestionHelper, StreamIo, StyleFormatter, Support, Theme,
};

/// Console toolkit: ANSI text styling and validated prompts
#[derive(Parser, Debug)]
#[command(name = "tinter", version, about)]
struct Cli {
    /// Enable debug logging (otherwise RUST_LOG or warn)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print text wrapped in ANSI escape sequences
    Paint(PaintArgs),
    /// Ask a question on stdin/stdout and print the answer
    Ask(AskArgs),
    /// List every color and font style, rendered in itself
    Palette {
        /// Emit escape sequences even if the platform looks unsupported
        #[arg(long)]
        force: bool,
    },
}

#[derive(Args, Debug)]
struct PaintArgs {
    /// Text to style
    text: String,

    /// Foreground color name
    #[arg(long)]
    fg: Option<String>,

    /// Background color name
    #[arg(long)]
    bg: Option<String>,

    /// Font style name (repeatable)
    #[arg(long = "style")]
    styles: Vec<String>,

    /// Theme file to take a named style from
    #[arg(long, requires = "name")]
    theme: Option<PathBuf>,

    /// Style name within the theme; flags above override it
    #[arg(long, requires = "theme")]
    name: Option<String>,

    /// Emit escape sequences even if the platform looks unsupported
    #[arg(long)]
    force: bool,
}

#[derive(Args, Debug)]
struct AskArgs {
    /// Prompt text
    prompt: String,

    /// Answer used for an empty line
    #[arg(long)]
    default: Option<String>,

    /// Comma-separated list of accepted answers
    #[arg(long, value_delimiter = ',', conflicts_with = "confirm")]
    choices: Vec<String>,

    /// Attempts allowed when --choices is given
    #[arg(long, default_value_t = 3)]
    attempts: u32,

    /// Yes/no question; prints "yes" or "no"
    #[arg(long)]
    confirm: bool,
}

/// Build the formatter for `paint`, layering flags over a theme style
fn build_formatter(args: &PaintArgs) -> Result<StyleFormatter> {
    let mut formatter = match (&args.theme, &args.name) {
        (Some(path), Some(name)) => {
            let theme = Theme::from_path(path)?;
            let Some(formatter) = theme.formatter(name) else {
                bail!(
                    "Theme {} has no style '{name}' (available: {})",
                    path.display(),
                    theme.names().collect::<Vec<_>>().join(", ")
                );
            };
            formatter
        }
        _ => StyleFormatter::new(),
    };

    if let Some(ref fg) = args.fg {
        formatter.set_foreground_color(fg)?;
    }
    if let Some(ref bg) = args.bg {
        formatter.set_background_color(bg)?;
    }
    if !args.styles.is_empty() {
        formatter.set_font_styles(&args.styles)?;
    }
    if args.force {
        formatter.set_support(Support::Always);
    }
    Ok(formatter)
}

/// Build the question for `ask` from CLI flags
fn build_question(args: &AskArgs) -> Question {
    if args.confirm {
        let default = args
            .default
            .as_deref()
            .map_or(true, |d| d.starts_with(['y', 'Y']));
        return Question::confirmation(args.prompt.clone(), default);
    }

    let question = if args.choices.is_empty() {
        Question::new(args.prompt.clone())
    } else {
        Question::choice(args.prompt.clone(), &args.choices).with_max_attempts(args.attempts)
    };
    match args.default {
        Some(ref default) => question.with_default(default.clone()),
        None => question,
    }
}

/// Print every palette entry styled as itself
fn print_palette(force: bool) {
    let support = if force { Support::Always } else { Support::Detect };

    println!("{}", "Colors".bold());
    for color in Color::ALL {
        let mut fg = StyleFormatter::with_support(support);
        fg.foreground(color);
        let mut bg = StyleFormatter::with_support(support);
        bg.background(color);
        println!(
            "  {:<8} {} {}",
            color.name(),
            fg.apply(&format!("fg {}", color.foreground_code())),
            bg.apply(&format!("bg {}", color.background_code()))
        );
    }

    println!("{}", "Font styles".bold());
    for style in FontStyle::ALL {
        let mut formatter = StyleFormatter::with_support(support);
        formatter.font_style(style);
        println!(
            "  {:<10} {}",
            style.name(),
            formatter.apply(&format!("code {}", style.code()))
        );
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Paint(args) => {
            let formatter = build_formatter(&args)?;
            println!("{}", formatter.apply(&args.text));
        }
        Command::Ask(args) => {
            let mut question = build_question(&args);
            let mut helper = QuestionHelper::new(StreamIo::stdio());
            match helper.ask(&mut question) {
                Ok(answer) => println!("{answer}"),
                Err(AskError::Exhausted { attempts, last }) => {
                    bail!("Gave up after {attempts} attempt(s): {last}")
                }
                Err(AskError::Io(err)) => {
                    return Err(err).context("Failed to read answer from stdin");
                }
            }
        }
        Command::Palette { force } => print_palette(force),
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    // --verbose enables DEBUG level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(cli) {
        eprintln!("{} {err:#}", "error:".red().bold());
        std::process::exit(1);
    }
}
