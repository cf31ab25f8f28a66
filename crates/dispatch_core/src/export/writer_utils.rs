use std::fs::{self, File};
use std::path::Path;

/// Create (or truncate) `path`, creating missing parent directories first.
pub(super) fn create_output_file(path: impl AsRef<Path>) -> std::io::Result<File> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    File::create(path)
}
