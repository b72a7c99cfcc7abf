mod cli;
mod generate;

use std::io::{self, BufRead};
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{CommandFactory, Parser};
use clap_complete::generate as generate_completions;
use colored::Colorize;
use tabled::{settings::Style, Table, Tabled};
use tracing::info;

use cli::{Cli, Command};
use generate::Generator;
use vakfmt_core::Citation;
use vakfmt_processor::{batch_stats, io as corpus_io, Normalizer, Pipeline};

/// Row of the per-type count tables printed by `process --stats` and
/// `validate`.
#[derive(Tabled)]
struct TypeRow {
    #[tabled(rename = "Type")]
    category: String,
    #[tabled(rename = "Count")]
    count: usize,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Process { input, json, stats } => process(input.as_deref(), json, stats),
        Command::Validate { corpus } => validate(&corpus),
        Command::Clean { corpus, output } => clean(&corpus, output.as_deref()),
        Command::Generate { output, count, seed } => generate_corpus(&output, count, seed),
        Command::Completions { shell } => {
            let mut command = Cli::command();
            generate_completions(shell, &mut command, "vakfmt", &mut io::stdout());
            Ok(())
        }
    }
}

fn load_input(input: Option<&Path>) -> Result<Vec<Citation>> {
    match input {
        Some(path) => {
            let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
            if matches!(ext, "json" | "yaml" | "yml") {
                Ok(corpus_io::load_citations(path)
                    .with_context(|| format!("loading {}", path.display()))?)
            } else {
                let content = std::fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                Ok(content
                    .lines()
                    .map(str::trim)
                    .filter(|line| !line.is_empty())
                    .map(Citation::text)
                    .collect())
            }
        }
        None => {
            let stdin = io::stdin();
            let mut citations = Vec::new();
            for line in stdin.lock().lines() {
                let line = line?;
                let line = line.trim();
                if !line.is_empty() {
                    citations.push(Citation::text(line));
                }
            }
            Ok(citations)
        }
    }
}

fn process(input: Option<&Path>, json: bool, stats: bool) -> Result<()> {
    let citations = load_input(input)?;
    if citations.is_empty() {
        eprintln!("{}", "no citations to process".yellow());
        return Ok(());
    }

    let pipeline = Pipeline::new();
    let outcomes = pipeline.process_all(&citations);
    info!(count = outcomes.len(), "processed batch");

    if json {
        println!("{}", serde_json::to_string_pretty(&outcomes)?);
    } else {
        for (index, outcome) in outcomes.iter().enumerate() {
            let confidence = format!("{}%", outcome.confidence);
            let confidence = if outcome.confidence >= 70 {
                confidence.as_str().green()
            } else {
                confidence.as_str().yellow()
            };
            println!(
                "{}. [{} {}] {}",
                index + 1,
                outcome.category.tag().cyan(),
                confidence,
                outcome.formatted
            );
            for issue in &outcome.issues {
                let issue = issue.to_string();
                println!("   - {}", issue.as_str().dimmed());
            }
        }
    }

    if stats {
        let stats = batch_stats(&outcomes);
        let rows: Vec<TypeRow> = stats
            .by_category
            .iter()
            .map(|(category, count)| TypeRow { category: category.to_string(), count: *count })
            .collect();
        let mut table = Table::new(rows);
        table.with(Style::modern());
        println!("\n{table}");
        println!(
            "total: {}  mean confidence: {:.1}  with issues: {}",
            stats.total, stats.mean_confidence, stats.with_issues
        );
    }

    Ok(())
}

fn validate(path: &Path) -> Result<()> {
    let corpus =
        corpus_io::load_corpus(path).with_context(|| format!("loading {}", path.display()))?;
    let normalizer = Normalizer::new();

    println!("corpus: {}", corpus.description);
    println!("examples: {}", corpus.examples.len());

    // Structure checks.
    let mut errors = 0usize;
    if corpus.total_examples != corpus.examples.len() {
        errors += 1;
        println!(
            "{} declared total {} but found {} examples",
            "error:".red().bold(),
            corpus.total_examples,
            corpus.examples.len()
        );
    }
    for (tag, declared, found) in corpus.distribution_mismatches() {
        errors += 1;
        println!(
            "{} type {tag} declares {declared} but has {found} examples",
            "error:".red().bold()
        );
    }

    // Punctuation lint: anything the normalizer would rewrite.
    let mut findings: Vec<(usize, &str, Vec<&'static str>)> = Vec::new();
    for (index, record) in corpus.examples.iter().enumerate() {
        let rules = normalizer.lint(&record.example);
        if !rules.is_empty() {
            findings.push((index, record.category.tag(), rules));
        }
    }

    let rows: Vec<TypeRow> = corpus
        .type_distribution
        .iter()
        .map(|(tag, count)| TypeRow { category: tag.clone(), count: *count })
        .collect();
    if !rows.is_empty() {
        let mut table = Table::new(rows);
        table.with(Style::modern());
        println!("\n{table}");
    }

    if findings.is_empty() && errors == 0 {
        println!("{}", "corpus is clean".green().bold());
        return Ok(());
    }

    if !findings.is_empty() {
        println!(
            "\n{} {} examples need normalization:",
            "warning:".yellow().bold(),
            findings.len()
        );
        for (index, tag, rules) in findings.iter().take(10) {
            println!("  [{index}] {tag}: {}", rules.join(", "));
        }
        if findings.len() > 10 {
            println!("  ... and {} more", findings.len() - 10);
        }
        println!("run `vakfmt clean {}` to fix", path.display());
    }

    if errors > 0 {
        anyhow::bail!("{errors} structural error(s)");
    }
    Ok(())
}

fn clean(path: &Path, output: Option<&Path>) -> Result<()> {
    let mut corpus =
        corpus_io::load_corpus(path).with_context(|| format!("loading {}", path.display()))?;
    let normalizer = Normalizer::new();

    let mut changed = 0usize;
    for record in &mut corpus.examples {
        let cleaned = normalizer.normalize(&record.example);
        if cleaned != record.example {
            changed += 1;
            record.example = cleaned;
        }
    }
    corpus.tally();

    let target = output.unwrap_or(path);
    corpus_io::save_corpus(&corpus, target)
        .with_context(|| format!("writing {}", target.display()))?;

    println!("cleaned {changed} of {} examples → {}", corpus.examples.len(), target.display());
    Ok(())
}

fn generate_corpus(output: &Path, count: usize, seed: Option<u64>) -> Result<()> {
    let mut generator = Generator::new(seed);
    let mut corpus = generator.corpus(count);
    corpus.generated_at = Some(Utc::now().format("%Y-%m-%d").to_string());

    corpus_io::save_corpus(&corpus, output)
        .with_context(|| format!("writing {}", output.display()))?;

    println!(
        "generated {} examples across {} types → {}",
        corpus.total_examples,
        corpus.type_distribution.len(),
        output.display()
    );
    Ok(())
}
