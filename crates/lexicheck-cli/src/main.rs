use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

use lexicheck_core::{CoderPolicy, Config, Diagnostic, Report, Severity};
use lexicheck_engine::{
    check_corpus, check_registry, data_filenames, suggest_unregistered, ReferenceTables,
};
use lexicheck_tables::LanguageRegistry;

/// lexicheck - consistency checker for the pronoun paradigm dataset
#[derive(Parser)]
#[command(name = "lexicheck")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to config file (default: lexicheck.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check every data file against the reference tables and the registry
    Check {
        /// Root of the data file tree (default: data_dir from config)
        dir: Option<PathBuf>,

        /// Write the full JSON report to this file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Reject the '?' coder placeholder in the registry
        #[arg(long)]
        strict_coders: bool,
    },

    /// Validate the language registry and suggest rows for new data files
    Registry {
        /// Reject the '?' coder placeholder
        #[arg(long)]
        strict_coders: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = if let Some(config_path) = &cli.config {
        Config::from_file(config_path)
            .with_context(|| format!("failed to load config from {}", config_path.display()))?
    } else if std::path::Path::new("lexicheck.toml").exists() {
        Config::from_file(std::path::Path::new("lexicheck.toml"))?
    } else {
        if cli.verbose {
            eprintln!("{}", "No config file found, using defaults".yellow());
        }
        Config::default()
    };

    match cli.command {
        Commands::Check {
            dir,
            output,
            strict_coders,
        } => {
            if strict_coders {
                config.coder_policy = CoderPolicy::Strict;
            }
            check_command(&config, dir, output.as_deref(), cli.verbose)
        }
        Commands::Registry { strict_coders } => {
            if strict_coders {
                config.coder_policy = CoderPolicy::Strict;
            }
            registry_command(&config, cli.verbose)
        }
    }
}

/// Check command - run the full corpus check
fn check_command(
    config: &Config,
    dir: Option<PathBuf>,
    output: Option<&std::path::Path>,
    verbose: bool,
) -> Result<()> {
    if verbose {
        eprintln!("{}", "Loading reference tables...".cyan());
    }

    let tables = ReferenceTables::load(config).context("failed to load reference tables")?;

    if verbose {
        eprintln!(
            "  {} concepts, {} sources, {} registered languages",
            tables.concepts.len(),
            tables.sources.len(),
            tables.registry.len()
        );
    }

    let root = dir.unwrap_or_else(|| config.data_dir.clone());
    if verbose {
        eprintln!("{} {}", "Scanning".cyan(), root.display());
    }

    let report = check_corpus(&root, &tables, config);

    for file in &report.files {
        println!("{}:", file.path.bold());
        for diagnostic in &file.diagnostics {
            println!("  {}", render(diagnostic));
        }
    }

    if !report.registry.is_empty() {
        println!("{}:", config.languages.display().to_string().bold());
        for diagnostic in &report.registry {
            println!("  {}", render(diagnostic));
        }
    }

    if let Some(path) = output {
        report
            .save_to_file(path)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        if verbose {
            eprintln!("{} {}", "Report saved to:".green(), path.display());
        }
    }

    if verbose {
        eprintln!(
            "Checked {} files ({} flagged)",
            report.summary.files_checked, report.summary.files_flagged
        );
    }

    print_total(&report);

    if report.has_errors() {
        std::process::exit(1);
    }
    Ok(())
}

/// Registry command - validate the registry on its own and propose rows
/// for data files not yet declared
fn registry_command(config: &Config, verbose: bool) -> Result<()> {
    let registry = LanguageRegistry::from_file(&config.languages)
        .context("failed to load language registry")?;

    if verbose {
        eprintln!("{} {} rows", "Loaded".cyan(), registry.len());
    }

    let mut findings = check_registry(&registry, config);

    let files = data_filenames(&config.data_dir, config);
    let on_disk: std::collections::HashSet<&str> = files.iter().map(String::as_str).collect();
    for filename in registry.filenames() {
        if !filename.is_empty() && !on_disk.contains(filename) {
            findings.push(
                Diagnostic::error(
                    lexicheck_core::DiagnosticCode::FileNotOnDisk,
                    format!("'{filename}' declared in the registry but matched 0 files on disk"),
                )
                .with_location(lexicheck_core::Location::new(
                    config.languages.display().to_string(),
                )),
            );
        }
    }

    if !findings.is_empty() {
        println!("{}:", config.languages.display().to_string().bold());
        for diagnostic in &findings {
            println!("  {}", render(diagnostic));
        }
    }
    let suggestions = suggest_unregistered(&registry, &files);
    if !suggestions.is_empty() {
        println!();
        println!(
            "{}",
            format!(
                "New data files to add to {}:",
                config.languages.display()
            )
            .bold()
        );
        println!("ID\tLocalID\tName\tDialect\tVariant\tFilename\tGlottocode\tAnalect\tCoder\tComment");
        for suggestion in &suggestions {
            println!("{}", suggestion.to_tsv_row());
        }
    }

    let errors = findings
        .iter()
        .filter(|d| d.severity == Severity::Error)
        .count();
    println!("TOTAL ERRORS: {errors}");

    if errors > 0 {
        std::process::exit(1);
    }
    Ok(())
}

/// One indented report line for a diagnostic
fn render(diagnostic: &Diagnostic) -> String {
    let severity = match diagnostic.severity {
        Severity::Error => "ERROR".red().bold(),
        Severity::Warn => "WARN".yellow().bold(),
        Severity::Info => "INFO".cyan(),
    };

    let row = diagnostic
        .location
        .as_ref()
        .and_then(|l| l.line)
        .map(|line| format!(" (row {line})"))
        .unwrap_or_default();

    format!("[{severity}] {}{row}: {}", diagnostic.code, diagnostic.message)
}

fn print_total(report: &Report) {
    let total = report.total_errors();
    if total == 0 {
        println!("{}", format!("TOTAL ERRORS: {total}").green());
    } else {
        println!("{}", format!("TOTAL ERRORS: {total}").red().bold());
    }
}
