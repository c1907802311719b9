// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::env;
use std::io;

use anyhow::{anyhow, Context, Result};
use tokio::io::BufReader;

use faxe_processors::backends::local::LocalProcessorFactory;
use faxe_processors::config::{load_and_validate_config, Config, RuntimeBuilder};
use faxe_processors::engine::{write_output, LineDriver};
use faxe_processors::observability::init_tracing;

fn print_usage(program: &str) {
    eprintln!("Usage: {} [--verbose] <config.yaml|config.toml>", program);
    eprintln!("       {} --list", program);
    eprintln!();
    eprintln!("Reads one JSON record per line from stdin, drives it through the configured");
    eprintln!("processor and writes {{\"emit\": ..}} / {{\"reply\": ..}} lines to stdout.");
    eprintln!("Example: {} configs/double.yaml < configs/points.jsonl", program);
}

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("faxe-processors");

    if args.iter().any(|a| a == "--list") {
        list_implementations();
        return Ok(());
    }

    let verbose = args.iter().any(|a| a == "--verbose" || a == "-v");
    let config_file = match args.iter().skip(1).find(|a| !a.starts_with('-')) {
        Some(path) => path,
        None => {
            print_usage(program);
            std::process::exit(1);
        }
    };

    init_tracing(verbose);

    let config = load_and_validate_config(config_file).map_err(|e| anyhow!("{}", e))?;
    run(&config).await
}

fn list_implementations() {
    for name in LocalProcessorFactory::list_available_implementations() {
        let specs = LocalProcessorFactory::options(name).unwrap_or_default();
        let options: Vec<String> = specs
            .iter()
            .map(|spec| format!("{}: {}", spec.name, spec.kind))
            .collect();
        println!("{} ({})", name, options.join(", "));
    }
}

async fn run(config: &Config) -> Result<()> {
    let (mut host, mut emissions) = RuntimeBuilder::from_config(config)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let init_req = config.init_term().context("init request")?;
    let reply = host.init(init_req).await?;
    write_output(reply, &mut emissions, &mut out)?;

    let input = BufReader::new(tokio::io::stdin());
    LineDriver::from_config(config)
        .run(&mut host, &mut emissions, input, &mut out)
        .await?;

    Ok(())
}
