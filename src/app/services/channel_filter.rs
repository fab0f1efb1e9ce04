//! Channel filtering for multi-channel recorder captures

use std::path::Path;
use tracing::debug;

use super::record_table::SourceRecordTable;
use crate::app::models::ChannelSelector;
use crate::constants::RECORDER_CHANNEL_COLUMN_INDEX;
use crate::error::ConversionError;

/// Restrict a recorder table to one channel
///
/// `Automatic` leaves the table untouched. A specific channel keeps only the
/// rows whose fourth column equals the channel token, in original order.
pub fn filter_channel(
    table: &mut SourceRecordTable,
    channel: ChannelSelector,
    origin: &Path,
) -> Result<(), ConversionError> {
    let Some(token) = channel.token() else {
        return Ok(());
    };

    if table.column_count() <= RECORDER_CHANNEL_COLUMN_INDEX {
        return Err(ConversionError::field(
            origin,
            format!("column {}", RECORDER_CHANNEL_COLUMN_INDEX + 1),
            format!(
                "cannot select {}: table has only {} columns",
                channel,
                table.column_count()
            ),
        ));
    }

    let before = table.len();
    table.retain_rows(|row| row[RECORDER_CHANNEL_COLUMN_INDEX] == token);
    debug!(
        "Channel filter {}: kept {} of {} rows",
        token,
        table.len(),
        before
    );
    Ok(())
}
