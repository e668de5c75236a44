//! Faultnet CLI - vehicle breakdown risk from a single maintenance answer
//!
//! Usage:
//!   faultnet                          # Prompt for the maintenance answer
//!   faultnet --maintained taip        # Answer on the command line
//!   faultnet --lang en -m yes -o json # English answer, JSON output
//!   faultnet -m no --runs 1000        # Mean marginals over 1000 runs

use clap::Parser;
use faultnet_core::engine::random::entropy_seed;
use faultnet_core::{
    evaluate_batch, normalize_observation, BatchSummary, FaultNetError, FaultNetworkEvaluator,
    Locale, NetworkConfig, ResultMapping, RiskAdvisory, SeededSource,
};
use serde::Serialize;
use std::io::{self, BufRead, Write};
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "faultnet")]
#[command(version)]
#[command(about = "Faultnet - vehicle breakdown risk model")]
#[command(
    long_about = "Estimate fault and accident probabilities from whether the vehicle is regularly maintained"
)]
struct Cli {
    /// Maintenance answer (e.g. taip/ne, yes/no). Prompts on stdin if omitted.
    #[arg(short, long, value_name = "ANSWER")]
    maintained: Option<String>,

    /// Seed for reproducible runs (entropy if omitted)
    #[arg(short, long, value_name = "SEED")]
    seed: Option<u64>,

    /// Display language: lt or en
    #[arg(short, long, default_value = "lt", value_name = "LANG")]
    lang: String,

    /// Output format: summary or json
    #[arg(short, long, default_value = "summary", value_name = "FORMAT")]
    output: String,

    /// JSON file with model parameters (missing fields use defaults)
    #[arg(short, long, value_name = "PATH")]
    config: Option<String>,

    /// Number of independent runs; more than one reports mean marginals
    #[arg(short, long, default_value_t = 1, value_name = "N")]
    runs: usize,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    runs: usize,
    observation: bool,
    marginals: &'a ResultMapping,
    advisory: RiskAdvisory,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let locale = match Locale::from_code(&cli.lang) {
        Some(l) => l,
        None => {
            eprintln!("Unknown language '{}': expected lt or en", cli.lang);
            process::exit(2);
        }
    };

    let config = match load_config(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            process::exit(1);
        }
    };

    let evaluator = match FaultNetworkEvaluator::new(config) {
        Ok(ev) => ev,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    let answer = match &cli.maintained {
        Some(a) => a.clone(),
        None => match prompt(locale) {
            Ok(a) => a,
            Err(e) => {
                eprintln!("Error reading answer: {}", e);
                process::exit(1);
            }
        },
    };
    let observation = normalize_observation(&answer, locale);
    tracing::info!(observation, runs = cli.runs, "evaluating fault network");

    let result = match run(&evaluator, observation, cli.seed, cli.runs) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error evaluating fault network: {}", e);
            process::exit(1);
        }
    };
    let advisory = result.advisory(evaluator.config().high_risk_threshold);

    match cli.output.as_str() {
        "json" => {
            let report = JsonReport {
                runs: cli.runs.max(1),
                observation,
                marginals: &result,
                advisory,
            };
            match serde_json::to_string_pretty(&report) {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    eprintln!("Error serializing to JSON: {}", e);
                    process::exit(1);
                }
            }
        }
        "summary" | _ => print_summary(locale, &result, advisory),
    }
}

fn load_config(path: Option<&str>) -> Result<NetworkConfig, String> {
    let Some(path) = path else {
        return Ok(NetworkConfig::default());
    };
    let text =
        std::fs::read_to_string(path).map_err(|e| format!("reading '{}': {}", path, e))?;
    serde_json::from_str(&text).map_err(|e| format!("parsing '{}': {}", path, e))
}

fn prompt(locale: Locale) -> io::Result<String> {
    println!("{}", locale.greeting());
    print!("{}", locale.maintenance_prompt());
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}

fn run(
    evaluator: &FaultNetworkEvaluator,
    observation: bool,
    seed: Option<u64>,
    runs: usize,
) -> Result<ResultMapping, FaultNetError> {
    if runs <= 1 {
        return match seed {
            Some(s) => evaluator.evaluate(observation, &mut SeededSource::from_seed(s)),
            None => evaluator.evaluate(observation, &mut SeededSource::from_entropy()),
        };
    }

    let seed = seed.unwrap_or_else(entropy_seed);
    let observations = vec![observation; runs];
    let results = evaluate_batch(evaluator, &observations, seed)?;
    BatchSummary::from_results(&results)
        .map(|summary| summary.mean)
        .ok_or_else(|| FaultNetError::InvalidConfig("runs must be at least 1".into()))
}

fn print_summary(locale: Locale, result: &ResultMapping, advisory: RiskAdvisory) {
    println!("\n{}", locale.report_header());
    for line in result.format_percentages(locale) {
        println!("{}", line);
    }
    println!("\n{}", locale.information_header());
    println!("{}", advisory.message(locale));
}
