use anyhow::Context;
use can2svy::cli::args::{Args, Commands};
use can2svy::cli::commands;
use can2svy::constants::APP_NAME;
use clap::Parser;
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let command = match &args.command {
        Some(Commands::Convert(_)) => "convert",
        _ => "formats",
    };

    match runtime
        .block_on(commands::run(args))
        .with_context(|| format!("`can2svy {}` failed", command))
    {
        Ok(Some(stats)) if stats.has_failures() => process::exit(1),
        Ok(_) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    let title = format!("can2svy - {}", APP_NAME);
    println!("{}", title);
    println!("{}", "=".repeat(title.len()));
    println!();
    println!("Convert CANrecorder and CANalyst-II exports into the 13-column");
    println!("Savvy CSV schema (.svy) used by downstream analysis tools.");
    println!();
    println!("USAGE:");
    println!("    can2svy <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    convert     Convert logger exports to .svy files (main command)");
    println!("    formats     List the supported source formats");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("EXAMPLES:");
    println!("    # Convert a CANrecorder 20241013XXX capture, channel 1 only:");
    println!("    can2svy convert capture.csv --format recorder-v1 --channel 1");
    println!();
    println!("    # Convert several CANalyst-II exports:");
    println!("    can2svy convert run1.csv run2.csv --format analyst-ii");
    println!();
    println!("For detailed help on any command, use:");
    println!("    can2svy <COMMAND> --help");
}
