use crate::views::RideView;

use super::ExportError;

pub(super) fn export_rides_csv_impl(rides: &[RideView], file: std::fs::File) -> Result<(), ExportError> {
    let mut wtr = csv::Writer::from_writer(file);

    wtr.write_record([
        "sequence",
        "rider_id",
        "rider_name",
        "driver_id",
        "driver_name",
        "source",
        "destination",
        "price",
        "status",
    ])?;

    for ride in rides {
        wtr.write_record([
            &ride.sequence.to_string(),
            &ride.rider_id.to_string(),
            &ride.rider_name,
            &ride.driver_id.to_string(),
            &ride.driver_name,
            &ride.source,
            &ride.destination,
            &ride.price.to_string(),
            &ride.status.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
