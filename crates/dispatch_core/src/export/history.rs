use std::io::{BufWriter, Write};

use crate::views::RideView;

pub fn history_file_name(driver_id: i64) -> String {
    format!("driver_{driver_id}_history.txt")
}

/// Legacy history line. Names are concatenated without separating spaces.
pub fn format_history_line(ride: &RideView) -> String {
    format!(
        "From{}to{}, Price: Rs. {}",
        ride.source, ride.destination, ride.price
    )
}

pub(super) fn write_history_impl(rides: &[RideView], file: std::fs::File) -> std::io::Result<()> {
    let mut writer = BufWriter::new(file);
    for ride in rides {
        writeln!(writer, "{}", format_history_line(ride))?;
    }
    writer.flush()
}
