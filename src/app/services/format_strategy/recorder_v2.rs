//! CANrecorder S/N 20250305XXX conversion pipeline
//!
//! Same shape as the V1 recorder export with renamed columns. Timestamps may
//! be either hex ticks or decimal seconds, decided per value. The length
//! column is carried over without rewriting.

use std::path::Path;
use tracing::debug;

use super::{ConversionOutput, ConversionPipeline};
use crate::app::models::{ChannelSelector, SourceFormat};
use crate::app::services::channel_filter::filter_channel;
use crate::app::services::column_normalizer::recorder::{
    normalize_recorder_v2_identity, normalize_recorder_v2_timestamp,
};
use crate::app::services::output_writer::{assemble_rows, output_path_for, write_svy};
use crate::app::services::payload_splitter::{RECORDER_LAYOUT, split_payload_column};
use crate::app::services::progress::StageTracker;
use crate::app::services::record_table::RecordTableLoader;
use crate::constants::recorder_v2;
use crate::error::ConversionError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecorderV2;

impl ConversionPipeline for RecorderV2 {
    const FORMAT: SourceFormat = SourceFormat::RecorderV2;
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

        let dropped = table.drop_columns(recorder_v2::DROPPED);
        debug!("Dropped {} administrative columns", dropped);
        tracker.complete_stage("drop columns");

        let mut unchanged_fields = normalize_recorder_v2_timestamp(&mut table).unchanged_fields;
        tracker.complete_stage("normalize timestamps");

        unchanged_fields += normalize_recorder_v2_identity(&mut table).unchanged_fields;
        tracker.complete_stage("normalize identifiers");

        if !split_payload_column(&mut table, recorder_v2::DATA, &RECORDER_LAYOUT) {
            debug!(
                "No '{}' column; payload bytes left empty",
                recorder_v2::DATA
            );
        }
        tracker.complete_stage("split payload");

        table.rename_columns(recorder_v2::RENAMES);
        let output_path = output_path_for(input, channel);
        let rows = assemble_rows(&table, Self::FORMAT.payload_fill());
        let rows_written = write_svy(&rows, &output_path)?;
        tracker.complete_stage("write output");

        Ok(ConversionOutput {
            output_path,
            rows_read,
            rows_written,
            unchanged_fields,
        })
    }
}
