//! `windex`: build a back-of-book word index from a text file.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use word_index::format::write_report_to;
use word_index::{
    read_keywords, read_lines, write_report, IndexBuilder, IndexConfig, IndexResult,
    ReportFormat,
};

#[derive(Parser)]
#[command(
    name = "windex",
    about = "Report every line on which each keyword occurs in a document",
    version
)]
struct Cli {
    /// TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Number of index buckets (overrides config)
    #[arg(long, global = true)]
    buckets: Option<usize>,

    /// Strip diacritics from words and keywords
    #[arg(long, global = true)]
    fold_accents: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the index report for a keyword list
    Index {
        /// Document to index
        text: PathBuf,

        /// Keyword list, one per line
        keywords: PathBuf,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
        format: ReportFormat,

        /// Keep keyword order instead of sorting alphabetically
        #[arg(long)]
        unsorted: bool,

        /// Report each keyword once
        #[arg(long)]
        dedup: bool,
    },

    /// Look up individual words in a document
    Lookup {
        /// Document to index
        text: PathBuf,

        /// Words to look up
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Show bucket distribution for a document
    Stats {
        /// Document to index
        text: PathBuf,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    if let Err(e) = run(cli) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> IndexResult<()> {
    let mut config = match &cli.config {
        Some(path) => IndexConfig::load(path)?,
        None => IndexConfig::default(),
    };
    if let Some(buckets) = cli.buckets {
        config.bucket_count = buckets;
    }
    if cli.fold_accents {
        config.fold_accents = true;
    }

    match cli.command {
        Commands::Index {
            text,
            keywords,
            output,
            format,
            unsorted,
            dedup,
        } => {
            if unsorted {
                config.sort_report = false;
            }
            if dedup {
                config.dedup_keywords = true;
            }
            config.validate()?;
            let builder = build(&text, config)?;
            let keywords = read_keywords(&keywords)?;
            let report = builder.report(&keywords);

            match output {
                Some(path) => {
                    write_report(&path, &report, format)?;
                    eprintln!(
                        "Index written to {} ({} of {} keywords found)",
                        path.display(),
                        report.len(),
                        keywords.len()
                    );
                }
                None => {
                    let stdout = io::stdout();
                    write_report_to(&mut stdout.lock(), &report, format)?;
                }
            }
        }
        Commands::Lookup { text, words } => {
            config.validate()?;
            let builder = build(&text, config)?;
            let stdout = io::stdout();
            let mut out = stdout.lock();
            for word in &words {
                let normalized = builder.normalize_keyword(word);
                match builder.index().search(&normalized) {
                    Some(entry) => writeln!(out, "{}", entry)?,
                    None => writeln!(out, "{}: not found", word)?,
                }
            }
        }
        Commands::Stats { text, json } => {
            config.validate()?;
            let builder = build(&text, config)?;
            let stats = builder.index().stats();
            let stdout = io::stdout();
            let mut out = stdout.lock();
            if json {
                serde_json::to_writer_pretty(&mut out, &stats)?;
                writeln!(out)?;
            } else {
                writeln!(out, "lines:        {}", builder.lines_scanned())?;
                writeln!(out, "words:        {}", builder.words_inserted())?;
                writeln!(out, "distinct:     {}", stats.word_count)?;
                writeln!(out, "occurrences:  {}", stats.occurrence_count)?;
                writeln!(out, "buckets:      {}", stats.bucket_count)?;
                writeln!(out)?;
                writeln!(out, "{:>6}  {:>8}  {:>6}", "bucket", "words", "height")?;
                for b in stats.buckets.iter().filter(|b| b.words > 0) {
                    writeln!(out, "{:>6}  {:>8}  {:>6}", b.bucket, b.words, b.height)?;
                }
            }
        }
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "windex", &mut io::stdout());
        }
    }

    Ok(())
}

fn build(text: &Path, config: IndexConfig) -> IndexResult<IndexBuilder> {
    let lines = read_lines(text)?;
    let mut builder = IndexBuilder::new(config);
    builder.index_lines(&lines);
    Ok(builder)
}
