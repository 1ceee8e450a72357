// ============================================================================
// Interactive Addition CLI
// Menu-driven front end over the aggregation pipeline
// ============================================================================

use addition_service::prelude::*;
use addition_service::utils::{init_logging, LogConfig, DEFAULT_LOG_FILE};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "addition-cli", version, about = "Add numbers from the keyboard or a CSV/TXT file")]
struct Args {
    /// Fractional digits the sum is rounded to
    #[arg(long, default_value_t = 2)]
    precision: u32,

    /// Maximum seconds allowed per aggregation
    #[arg(long, default_value_t = 30.0)]
    timeout: f64,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "ADDITION_LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// File receiving a copy of the log
    #[arg(long, default_value = DEFAULT_LOG_FILE)]
    log_file: PathBuf,

    /// Do not write a log file
    #[arg(long)]
    no_log_file: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let log_config = LogConfig {
        level: args.log_level.clone(),
        log_file: (!args.no_log_file).then(|| args.log_file.clone()),
        enable_stderr: true,
    };
    let _guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut aggregator = match AggregatorBuilder::new()
        .precision(args.precision)
        .timeout_secs(args.timeout)
        .sink(Box::new(ConsoleSink))
        .build()
    {
        Ok(aggregator) => aggregator,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let stdin = io::stdin();
    interactive_mode(&mut aggregator, &mut stdin.lock());
    ExitCode::SUCCESS
}

fn interactive_mode(aggregator: &mut Aggregator, input: &mut impl BufRead) {
    loop {
        println!("\n=== Addition Service (Multi-Source) ===");
        println!("1. Add two numbers");
        println!("2. Add from list");
        println!("3. Add from file");
        println!("4. Exit");

        let choice = match prompt(input, "Enter choice (1-4): ") {
            Ok(Some(choice)) => choice,
            Ok(None) => {
                println!("\nExiting...");
                break;
            }
            Err(e) => {
                tracing::error!("Error: {}", e);
                println!("Error: {}", e);
                break;
            }
        };

        let outcome = match choice.as_str() {
            "1" => add_two_numbers(aggregator, input),
            "2" => add_from_list(aggregator, input),
            "3" => add_from_file(aggregator, input),
            "4" => {
                println!("Exiting...");
                break;
            }
            _ => {
                println!("Invalid choice");
                Ok(())
            }
        };

        if let Err(e) = outcome {
            tracing::error!("Error: {}", e);
            println!("Error: {}", e);
        }
    }
}

fn add_two_numbers(aggregator: &mut Aggregator, input: &mut impl BufRead) -> io::Result<()> {
    let Some(first) = prompt(input, "Enter first number (integer, float, or decimal): ")? else {
        return Ok(());
    };
    let Some(second) = prompt(input, "Enter second number (integer, float, or decimal): ")? else {
        return Ok(());
    };

    aggregator.add_numbers([first, second]);
    Ok(())
}

fn add_from_list(aggregator: &mut Aggregator, input: &mut impl BufRead) -> io::Result<()> {
    let Some(line) = prompt(input, "Enter numbers (comma-separated): ")? else {
        return Ok(());
    };

    let numbers: Vec<&str> = line.split(',').map(str::trim).collect();
    aggregator.add_numbers(numbers);
    Ok(())
}

fn add_from_file(aggregator: &mut Aggregator, input: &mut impl BufRead) -> io::Result<()> {
    let Some(path) = prompt(input, "Enter file path (.csv or .txt): ")? else {
        return Ok(());
    };
    let Some(column) = prompt(input, "Column index [0]: ")? else {
        return Ok(());
    };
    let column_index = if column.is_empty() {
        0
    } else {
        match column.parse::<usize>() {
            Ok(index) => index,
            Err(_) => {
                println!("Invalid column index: {}", column);
                return Ok(());
            }
        }
    };
    let Some(header) = prompt(input, "Skip header row? [Y/n]: ")? else {
        return Ok(());
    };
    let skip_header = !matches!(header.to_ascii_lowercase().as_str(), "n" | "no");

    aggregator.add_from_csv(path, column_index, skip_header);
    Ok(())
}

/// Print `message` and read one trimmed line; `None` on end of input
fn prompt(input: &mut impl BufRead, message: &str) -> io::Result<Option<String>> {
    print!("{}", message);
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
