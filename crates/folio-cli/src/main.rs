//! Folio CLI
//!
//! Command-line front end for the profile import pipeline:
//! - Importing a CV (`.pdf`) or an exported profile (`.json`)
//! - Inspecting how a document is split into sections
//! - Merging two profile JSON files
//! - Emitting the default profile

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

use folio_ingest::{
    default_profile, document_sections, merge_profiles, DocumentReader, ImportError, ImportOptions,
    Profile, RawDocument, Session,
};

/// Exit status for uploads the pipeline refuses.
const EXIT_UNSUPPORTED: i32 = 2;

#[derive(Parser)]
#[command(name = "folio")]
#[command(author, version, about = "Folio: build a structured profile from a CV")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Import a `.pdf` CV or `.json` profile and print the resulting profile.
    Import {
        /// Input document
        input: PathBuf,
        /// Profile JSON to merge over (default: built-in default profile)
        #[arg(long)]
        base: Option<PathBuf>,
        /// Import options JSON (missing keys use defaults)
        #[arg(long)]
        options: Option<PathBuf>,
        /// Output file (default: stdout)
        #[arg(short, long)]
        out: Option<PathBuf>,
        /// Skip the PDF backend and decode bytes directly
        #[arg(long)]
        raw_text: bool,
    },

    /// Print the section map detected in a document.
    Sections {
        /// Input document
        input: PathBuf,
        /// Skip the PDF backend and decode bytes directly
        #[arg(long)]
        raw_text: bool,
    },

    /// Merge a profile JSON over a base profile JSON.
    Merge {
        /// Base profile JSON
        base: PathBuf,
        /// Profile JSON whose non-empty fields win
        new: PathBuf,
        /// Output file (default: stdout)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Print the built-in default profile.
    Default {
        /// Output file (default: stdout)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Import {
            input,
            base,
            options,
            out,
            raw_text,
        } => cmd_import(&input, base.as_deref(), options.as_deref(), out.as_deref(), raw_text),
        Commands::Sections { input, raw_text } => cmd_sections(&input, raw_text),
        Commands::Merge { base, new, out } => cmd_merge(&base, &new, out.as_deref()),
        Commands::Default { out } => write_profile(&default_profile(), out.as_deref()),
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn read_profile(path: &Path) -> Result<Profile> {
    let json = fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    Profile::from_json(&json).with_context(|| format!("failed to parse profile {}", path.display()))
}

fn read_options(path: &Path) -> Result<ImportOptions> {
    let json = fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    ImportOptions::from_json(&json).with_context(|| format!("failed to parse options {}", path.display()))
}

fn write_profile(profile: &Profile, out: Option<&Path>) -> Result<()> {
    let json = profile.to_json()?;
    match out {
        Some(path) => {
            fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;
            eprintln!("{} {}", "wrote".green().bold(), path.display().to_string().bold());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn warn_unsupported(err: &ImportError) -> ! {
    eprintln!("{} {}", "warning:".yellow().bold(), err);
    std::process::exit(EXIT_UNSUPPORTED);
}

fn cmd_import(
    input: &Path,
    base: Option<&Path>,
    options: Option<&Path>,
    out: Option<&Path>,
    raw_text: bool,
) -> Result<()> {
    let base = match base {
        Some(path) => read_profile(path)?,
        None => default_profile(),
    };
    let options = match options {
        Some(path) => read_options(path)?,
        None => ImportOptions::default(),
    };
    let name = file_name(input);

    let mut session = Session::with_base(base)
        .with_options(options)
        .with_reader(DocumentReader::new().with_lossy_decoding(raw_text));

    print_status("Importing", input);
    let bytes = fs::read(input).with_context(|| format!("failed to read {}", input.display()))?;
    let profile = match session.import(&name, &bytes) {
        Ok(profile) => profile,
        Err(err @ ImportError::UnsupportedFormat { .. }) => warn_unsupported(&err),
        Err(err) => return Err(err).with_context(|| format!("failed to import {}", input.display())),
    };

    eprintln!(
        "  {} {} positions, {} projects, {} publications, {} awards",
        "→".yellow(),
        profile.career.len(),
        profile.projects.len(),
        profile.publications.len(),
        profile.awards.len()
    );
    write_profile(profile, out)
}

fn cmd_sections(input: &Path, raw_text: bool) -> Result<()> {
    let bytes = fs::read(input).with_context(|| format!("failed to read {}", input.display()))?;
    let document = RawDocument::new(file_name(input), bytes);
    let reader = DocumentReader::new().with_lossy_decoding(raw_text);

    let sections = match document_sections(&document, &reader) {
        Ok(sections) => sections,
        Err(err @ ImportError::UnsupportedFormat { .. }) => warn_unsupported(&err),
        Err(err) => return Err(err.into()),
    };
    println!("{}", serde_json::to_string_pretty(&sections)?);
    Ok(())
}

fn cmd_merge(base: &Path, new: &Path, out: Option<&Path>) -> Result<()> {
    let merged = merge_profiles(&read_profile(base)?, &read_profile(new)?)
        .context("failed to merge profiles")?;
    write_profile(&merged, out)
}

fn print_status(verb: &str, path: &Path) {
    eprintln!("{} {}", verb.green().bold(), path.display());
}
