//! Stenodict CLI — compile an IPA pronunciation list into a steno chord
//! dictionary, merge dictionary fragments, and sort word lists by frequency.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use stenodict_core::merge::{merge_json_objects, natural_sort_key};
use stenodict_core::{compile_dictionary, output, Config, IpaIndex};

// ─── Top-level CLI ───────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "stenodict",
    about = "Compile IPA pronunciations into a steno chord dictionary",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compile a word list plus IPA pronunciations into a dictionary
    Generate(GenerateArgs),
    /// Merge dictionary JSON fragments in a directory into one file
    Merge(MergeArgs),
    /// Sort a word list by frequency rank in a canonical word list
    SortWords(SortWordsArgs),
}

// ─── generate ────────────────────────────────────────────────────

#[derive(Parser, Debug)]
struct GenerateArgs {
    /// CSV file of `word,/ipa/` pronunciations
    #[arg(long = "ipa-notation")]
    ipa_notation: PathBuf,

    /// File of words to generate translations for, one per line
    #[arg(long)]
    words: PathBuf,

    /// YAML phoneme mapping and phonotactics configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output dictionary JSON path
    #[arg(short, long, default_value = "output.json")]
    output: PathBuf,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn run_generate(args: GenerateArgs) -> Result<()> {
    let config = match args.config {
        Some(path) => Config::load(&path)
            .with_context(|| format!("loading config `{}`", path.display()))?,
        None => Config::default_config(),
    };

    let ipa_index = IpaIndex::load(&args.ipa_notation)
        .with_context(|| format!("loading IPA notation `{}`", args.ipa_notation.display()))?;

    let words_text = fs::read_to_string(&args.words)
        .with_context(|| format!("reading word list `{}`", args.words.display()))?;
    let words: Vec<String> =
        words_text.lines().map(str::trim).filter(|line| !line.is_empty()).map(String::from).collect();

    let entries = compile_dictionary(&words, &ipa_index, &config);

    let file = fs::File::create(&args.output)
        .with_context(|| format!("creating output file `{}`", args.output.display()))?;
    output::write_dictionary(&entries, io::BufWriter::new(file))
        .with_context(|| format!("writing dictionary to `{}`", args.output.display()))?;

    Ok(())
}

// ─── merge ───────────────────────────────────────────────────────

#[derive(Parser, Debug)]
struct MergeArgs {
    /// Directory of dictionary JSON fragments to merge
    directory: PathBuf,

    /// Overwrite the output file without prompting
    #[arg(short, long, default_value_t = false)]
    force: bool,

    /// Recurse into subdirectories
    #[arg(short, long, default_value_t = false)]
    recursive: bool,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn run_merge(args: MergeArgs) -> Result<()> {
    if !args.directory.is_dir() {
        bail!("Not a directory: {}", args.directory.display());
    }

    let mut json_files = collect_json_files(&args.directory, args.recursive)?;
    json_files.sort_by_key(|p| natural_sort_key(&p.to_string_lossy()));

    let dir_name = args
        .directory
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "merged".to_string());
    let output_path = args.directory.join(format!("{dir_name}.json"));

    if output_path.exists() && !args.force {
        print!("`{}` already exists. Overwrite? [y/N] ", output_path.display());
        io::stdout().flush().ok();
        let mut answer = String::new();
        io::stdin().read_line(&mut answer).context("reading confirmation")?;
        if !answer.trim().eq_ignore_ascii_case("y") {
            log::info!("Aborted, nothing was written");
            return Ok(());
        }
    }

    let mut loaded = Vec::with_capacity(json_files.len());
    for path in &json_files {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading `{}`", path.display()))?;
        let value: serde_json::Map<String, serde_json::Value> = serde_json::from_str(&text)
            .with_context(|| format!("parsing `{}` as a JSON object", path.display()))?;
        loaded.push((path.display().to_string(), value));
    }

    let combined = merge_json_objects(loaded);

    let file = fs::File::create(&output_path)
        .with_context(|| format!("creating output file `{}`", output_path.display()))?;
    serde_json::to_writer(io::BufWriter::new(file), &serde_json::Value::Object(combined))
        .context("writing merged dictionary")?;

    log::info!("Merged {} files into `{}`", json_files.len(), output_path.display());
    Ok(())
}

fn collect_json_files(directory: &Path, recursive: bool) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(directory)
        .with_context(|| format!("reading directory `{}`", directory.display()))?
    {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() {
            if recursive {
                files.extend(collect_json_files(&path, recursive)?);
            }
        } else if path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        }
    }
    Ok(files)
}

// ─── sort-words ──────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(group(clap::ArgGroup::new("destination").required(true).args(["output", "no_output"])))]
struct SortWordsArgs {
    /// File of words to sort, one per line
    #[arg(long)]
    words: PathBuf,

    /// File of words in frequency order, most frequent first
    #[arg(long = "canonical-order")]
    canonical_order: PathBuf,

    /// Fold case when matching against the canonical order
    #[arg(short, long, default_value_t = false)]
    ignore_case: bool,

    /// Write the sorted word list here
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Discard the sorted word list instead of writing it (useful to just
    /// see the "not found" warnings)
    #[arg(long)]
    no_output: bool,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn run_sort_words(args: SortWordsArgs) -> Result<()> {
    let words = read_lines(&args.words)?;
    let canonical_order = read_lines(&args.canonical_order)?;

    let sorted = stenodict_core::frequency_sort::sort_words(&words, &canonical_order, args.ignore_case);

    if let Some(output_path) = args.output {
        let mut file = fs::File::create(&output_path)
            .with_context(|| format!("creating output file `{}`", output_path.display()))?;
        for word in &sorted {
            writeln!(file, "{word}")?;
        }
    }

    Ok(())
}

fn read_lines(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path).with_context(|| format!("reading `{}`", path.display()))?;
    Ok(text.lines().map(str::trim).filter(|line| !line.is_empty()).map(String::from).collect())
}

// ─── Main ────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    let verbosity = match &cli.command {
        Command::Generate(a) => a.verbose,
        Command::Merge(a) => a.verbose,
        Command::SortWords(a) => a.verbose,
    };
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let result = match cli.command {
        Command::Generate(args) => run_generate(args),
        Command::Merge(args) => run_merge(args),
        Command::SortWords(args) => run_sort_words(args),
    };

    if let Err(e) = result {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}
