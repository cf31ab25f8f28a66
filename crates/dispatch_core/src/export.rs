//! History and ride log export.
//!
//! Driver history files keep the legacy line layout, one file per driver named
//! `driver_<id>_history.txt`. The ride log can also be written as CSV or JSON for analysis.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::dispatcher::RideManager;
use crate::ecs::DriverHandle;
use crate::error::DispatchError;
use crate::views::RideView;

#[path = "export/csv.rs"]
mod csv;
#[path = "export/history.rs"]
mod history;
#[path = "export/json.rs"]
mod json;
#[path = "export/writer_utils.rs"]
mod writer_utils;

pub use history::{format_history_line, history_file_name};

#[derive(Debug)]
pub enum ExportError {
    Io(std::io::Error),
    Csv(::csv::Error),
    Json(serde_json::Error),
    Dispatch(DispatchError),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::Io(err) => write!(f, "export failed: {err}"),
            ExportError::Csv(err) => write!(f, "csv export failed: {err}"),
            ExportError::Json(err) => write!(f, "json export failed: {err}"),
            ExportError::Dispatch(err) => write!(f, "export failed: {err}"),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExportError::Io(err) => Some(err),
            ExportError::Csv(err) => Some(err),
            ExportError::Json(err) => Some(err),
            ExportError::Dispatch(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for ExportError {
    fn from(err: std::io::Error) -> Self {
        ExportError::Io(err)
    }
}

impl From<::csv::Error> for ExportError {
    fn from(err: ::csv::Error) -> Self {
        ExportError::Csv(err)
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(err: serde_json::Error) -> Self {
        ExportError::Json(err)
    }
}

impl From<DispatchError> for ExportError {
    fn from(err: DispatchError) -> Self {
        ExportError::Dispatch(err)
    }
}

/// Write one driver's history into `dir`, returning the file path.
///
/// The file is rewritten on every call. A driver with no rides gets an empty file.
pub fn export_driver_history(
    manager: &RideManager,
    driver: DriverHandle,
    dir: impl AsRef<Path>,
) -> Result<PathBuf, ExportError> {
    let view = manager.driver(driver).ok_or_else(|| {
        DispatchError::InvalidArgument(format!("unknown driver {:?}", driver))
    })?;
    let rides = manager.driver_history(driver)?;
    let path = dir.as_ref().join(history_file_name(view.id));
    let file = writer_utils::create_output_file(&path)?;
    history::write_history_impl(&rides, file)?;
    Ok(path)
}

/// Write every driver's history into `dir`, in registration order.
pub fn export_all_driver_histories(
    manager: &RideManager,
    dir: impl AsRef<Path>,
) -> Result<Vec<PathBuf>, ExportError> {
    manager
        .list_drivers()
        .iter()
        .map(|driver| export_driver_history(manager, driver.handle, dir.as_ref()))
        .collect()
}

/// Export rides to CSV, one row per ride.
pub fn export_rides_csv(rides: &[RideView], path: impl AsRef<Path>) -> Result<(), ExportError> {
    let file = writer_utils::create_output_file(path)?;
    csv::export_rides_csv_impl(rides, file)
}

/// Export rides as a JSON array.
pub fn export_rides_json(rides: &[RideView], path: impl AsRef<Path>) -> Result<(), ExportError> {
    let file = writer_utils::create_output_file(path)?;
    json::export_rides_json_impl(rides, file)
}
