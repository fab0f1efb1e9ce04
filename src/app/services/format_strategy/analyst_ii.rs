//! CANalyst-II S/N 31F0001EXXX conversion pipeline
//!
//! Semicolon-delimited export with padded header names and no channel
//! column. Canonical columns are derived next to the source columns and the
//! final projection selects them by name.

use std::path::Path;

use super::{ConversionOutput, ConversionPipeline};
use crate::app::models::{ChannelSelector, SourceFormat};
use crate::app::services::column_normalizer::analyst::{
    normalize_analyst_identity, normalize_analyst_timestamp,
};
use crate::app::services::output_writer::{assemble_rows, output_path_for, write_svy};
use crate::app::services::payload_splitter::{ANALYST_LAYOUT, split_payload_column};
use crate::app::services::progress::StageTracker;
use crate::app::services::record_table::RecordTableLoader;
use crate::constants::analyst_ii;
use crate::error::ConversionError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnalystII;

impl ConversionPipeline for AnalystII {
    const FORMAT: SourceFormat = SourceFormat::AnalystII;
    const STAGES: u32 = 5;

    fn run(
        &self,
        input: &Path,
        _channel: ChannelSelector,
        tracker: &mut StageTracker<'_>,
    ) -> Result<ConversionOutput, ConversionError> {
        let mut table = RecordTableLoader::new(Self::FORMAT.delimiter()).load(input)?;
        let rows_read = table.len();

        table.trim_headers();
        tracker.complete_stage("trim headers");

        let stats = normalize_analyst_timestamp(&mut table, input)?;
        tracker.complete_stage("normalize timestamps");

        normalize_analyst_identity(&mut table);
        tracker.complete_stage("normalize identifiers");

        split_payload_column(&mut table, analyst_ii::DATA, &ANALYST_LAYOUT);
        tracker.complete_stage("split payload");

        let output_path = output_path_for(input, ChannelSelector::Automatic);
        let rows = assemble_rows(&table, Self::FORMAT.payload_fill());
        let rows_written = write_svy(&rows, &output_path)?;
        tracker.complete_stage("write output");

        Ok(ConversionOutput {
            output_path,
            rows_read,
            rows_written,
            unchanged_fields: stats.unchanged_fields,
        })
    }
}
