//! Convert command implementation
//!
//! Files are converted strictly one after another. Each conversion runs on a
//! blocking worker so the progress bar keeps drawing while the pipeline works.

use super::shared::{ConvertStats, load_configuration, log_configuration, setup_logging};
use crate::app::models::{ChannelSelector, ConversionResult};
use crate::app::services::format_strategy::FormatStrategy;
use crate::app::services::progress::{BarProgress, create_conversion_bar};
use crate::cli::args::ConvertArgs;
use crate::constants::INPUT_EXTENSIONS;
use crate::{Error, Result};
use colored::*;
use indicatif::{HumanDuration, ProgressBar};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, warn};

/// Run the convert command
pub async fn run_convert(args: ConvertArgs) -> Result<ConvertStats> {
    args.validate()?;
    let config = load_configuration(&args)?;
    setup_logging(&config.log_level, args.quiet)?;
    log_configuration(&config);

    let format = config.default_format.ok_or_else(|| {
        Error::configuration(
            "No source format given; pass --format or set default_format in the config file",
        )
    })?;
    let strategy = FormatStrategy::for_format(format);
    let channel = config.default_channel;

    info!("Converting {} file(s) as {}", args.files.len(), format);

    let start = Instant::now();
    let mut stats = ConvertStats::default();
    for input in &args.files {
        warn_on_unexpected_extension(input);

        let result = convert_file(strategy, input.clone(), channel, config.show_progress).await?;
        if !args.quiet || !result.is_success() {
            print_outcome(input, &result);
        }
        stats.record(input.clone(), &result);
    }
    stats.processing_time = start.elapsed();

    if !args.quiet {
        print_summary(&stats);
    }
    Ok(stats)
}

/// Convert one file on a blocking worker, driving a progress bar
pub async fn convert_file(
    strategy: FormatStrategy,
    input: PathBuf,
    channel: ChannelSelector,
    show_progress: bool,
) -> Result<ConversionResult> {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| input.display().to_string());
    let bar = if show_progress {
        create_conversion_bar(&name)
    } else {
        ProgressBar::hidden()
    };

    let mut sink = BarProgress::new(bar.clone());
    let result =
        tokio::task::spawn_blocking(move || strategy.convert(&input, channel, &mut sink)).await?;

    bar.finish_and_clear();
    Ok(result)
}

fn warn_on_unexpected_extension(input: &Path) {
    let known = input
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            INPUT_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        });
    if !known {
        warn!(
            "{} does not have a usual logger export extension ({})",
            input.display(),
            INPUT_EXTENSIONS.join(", ")
        );
    }
}

fn print_outcome(input: &Path, result: &ConversionResult) {
    match result {
        ConversionResult::Success {
            output_path,
            rows_written,
        } => println!(
            "{} {} {} {} ({} rows)",
            "✓".bright_green().bold(),
            input.display(),
            "→".bright_cyan(),
            output_path.display().to_string().bright_white(),
            rows_written
        ),
        ConversionResult::Failure { message, .. } => eprintln!(
            "{} {}: {}",
            "✗".bright_red().bold(),
            input.display(),
            message.as_str().bright_red()
        ),
    }
}

fn print_summary(stats: &ConvertStats) {
    println!("\n{}", "Conversion Summary".bright_green().bold());
    println!(
        "  {} {}",
        "Time elapsed:".bright_cyan(),
        HumanDuration(stats.processing_time).to_string().bright_white()
    );
    println!(
        "  {} {}",
        "Files converted:".bright_cyan(),
        stats.files_converted.to_string().bright_white()
    );
    if stats.has_failures() {
        println!(
            "  {} {}",
            "Files failed:".bright_red(),
            stats.files_failed().to_string().bright_red().bold()
        );
    }
    println!(
        "  {} {}",
        "Rows written:".bright_cyan(),
        stats.rows_written.to_string().bright_white().bold()
    );
}
