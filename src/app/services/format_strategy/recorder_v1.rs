//! CANrecorder S/N 20241013XXX conversion pipeline

use std::path::Path;
use tracing::debug;

use super::{ConversionOutput, ConversionPipeline};
use crate::app::models::{ChannelSelector, SourceFormat};
use crate::app::services::channel_filter::filter_channel;
use crate::app::services::column_normalizer::recorder::normalize_recorder_v1;
use crate::app::services::output_writer::{assemble_rows, output_path_for, write_svy};
use crate::app::services::payload_splitter::{RECORDER_LAYOUT, split_payload_column};
use crate::app::services::progress::StageTracker;
use crate::app::services::record_table::RecordTableLoader;
use crate::constants::recorder_v1;
use crate::error::ConversionError;

/// Comma-delimited export with hex tick timestamps and a wrapped payload
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecorderV1;

impl ConversionPipeline for RecorderV1 {
    const FORMAT: SourceFormat = SourceFormat::RecorderV1;
    const STAGES: u32 = 6;

    fn run(
        &self,
        input: &Path,
        channel: ChannelSelector,
        tracker: &mut StageTracker<'_>,
    ) -> Result<ConversionOutput, ConversionError> {
        let mut table = RecordTableLoader::new(Self::FORMAT.delimiter()).load(input)?;
        let rows_read = table.len();

        filter_channel(&mut table, channel, input)?;
        tracker.complete_stage("channel filter");

        let dropped = table.drop_columns(recorder_v1::DROPPED);
        debug!("Dropped {} administrative columns", dropped);
        tracker.complete_stage("drop columns");

        let stats = normalize_recorder_v1(&mut table);
        tracker.complete_stage("normalize fields");

        if !split_payload_column(&mut table, recorder_v1::DATA, &RECORDER_LAYOUT) {
            debug!(
                "No '{}' column; payload bytes left empty",
                recorder_v1::DATA
            );
        }
        tracker.complete_stage("split payload");

        table.rename_columns(recorder_v1::RENAMES);
        tracker.complete_stage("rename columns");

        let output_path = output_path_for(input, channel);
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
