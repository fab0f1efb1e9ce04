//! Formats command: list the strategy registry

use crate::Result;
use crate::app::services::format_strategy::REGISTRY;
use colored::*;

/// One registry entry as shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatListing {
    pub cli_name: &'static str,
    pub label: &'static str,
    pub delimiter: char,
    pub channels: bool,
}

/// Registry entries in display order
pub fn format_listings() -> Vec<FormatListing> {
    REGISTRY
        .iter()
        .map(|(label, strategy)| {
            let format = strategy.format();
            FormatListing {
                cli_name: format.cli_name(),
                label: *label,
                delimiter: char::from(format.delimiter()),
                channels: format.supports_channels(),
            }
        })
        .collect()
}

/// Print the supported formats
pub fn run_formats() -> Result<()> {
    println!("{}", "Supported source formats".bright_green().bold());
    for listing in format_listings() {
        println!(
            "  {:<12} {:<26} delimiter '{}'  channels: {}",
            listing.cli_name.bright_white().bold(),
            listing.label,
            listing.delimiter,
            if listing.channels { "1-3" } else { "none" }
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_listings() {
        let listings = format_listings();
        assert_eq!(listings.len(), 3);
        assert_eq!(listings[0].cli_name, "recorder-v1");
        assert_eq!(listings[1].label, "CANrecorder 20250305XXX");
        assert_eq!(listings[2].delimiter, ';');
        assert!(listings[0].channels);
        assert!(!listings[2].channels);
    }
}
