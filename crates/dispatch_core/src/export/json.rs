use std::io::{BufWriter, Write};

use crate::views::RideView;

use super::ExportError;

pub(super) fn export_rides_json_impl(rides: &[RideView], file: std::fs::File) -> Result<(), ExportError> {
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, rides)?;
    writer.flush()?;
    Ok(())
}
