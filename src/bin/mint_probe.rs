use crossterm::style::Stylize;
use mint_core::config::{EngineConfig, CURRENCY_META_ENV, ENGINE_CONFIG_ENV};
use mint_core::core::tokens;
use mint_core::{CurrencyRegistry, Label, MintEngine, RecognitionRequest, RecognitionResult};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

const BUILTIN: &str = "builtin";

/// What the OCR collaborator would hand over, in file form.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProbeRequest {
    currency_code: String,
    #[serde(default)]
    denomination: String,
    #[serde(default)]
    texts: Vec<String>,
    #[serde(default)]
    labels: Vec<Label>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let (meta, request_path) = match args.as_slice() {
        [request] => (env::var(CURRENCY_META_ENV).unwrap_or_else(|_| BUILTIN.to_string()), request.clone()),
        [meta, request] => (meta.clone(), request.clone()),
        _ => {
            eprintln!("usage: mint_probe [<currency-meta.json>|{}] <request.json>", BUILTIN);
            return ExitCode::from(2);
        }
    };

    match run(&meta, Path::new(&request_path)) {
        Ok(result) => {
            print_result(&result);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{} {}", "[ERROR]".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(meta: &str, request_path: &Path) -> Result<RecognitionResult, Box<dyn std::error::Error>> {
    let registry = if meta == BUILTIN {
        CurrencyRegistry::builtin()?
    } else {
        CurrencyRegistry::from_json_file(Path::new(meta))?
    };
    let config = match env::var(ENGINE_CONFIG_ENV) {
        Ok(path) => EngineConfig::from_file(Path::new(&path))?,
        Err(_) => EngineConfig::default(),
    };
    let engine = MintEngine::new(Arc::new(registry), config);

    let probe: ProbeRequest = serde_json::from_str(&fs::read_to_string(request_path)?)?;
    let request = RecognitionRequest {
        currency_code: probe.currency_code,
        denomination: probe.denomination,
        tokens: tokens::tokenize(&probe.texts),
        labels: probe.labels,
    };
    println!("Tokens: {}", request.tokens.join(" ").dim());

    Ok(engine.process_money(&request)?)
}

fn print_result(result: &RecognitionResult) {
    println!("---------------------------------------------------------------");
    match result.denomination.as_str() {
        "" => println!("Denomination: {}", "not detected".yellow()),
        d => println!("Denomination: {}", d.green().bold()),
    }
    match result.serial.as_str() {
        "" => println!("Serial:       {}", "not found".yellow()),
        s => println!("Serial:       {}", s.green().bold()),
    }
}
