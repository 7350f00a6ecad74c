//! Copies picked photos into the application's own image directory.
//!
//! A picked path may point anywhere (a download folder, removable media),
//! so the bytes are copied somewhere the application owns for the record's
//! lifetime. Failure is reported as `None` rather than an error: the
//! calling flow keeps the previous image path or stores no image at all.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::warn;

/// Copy `source` into `images_dir` as `file_name` and return the stable
/// destination path, or `None` if the copy failed.
pub fn copy_into_library(source: &Path, images_dir: &Path, file_name: &str) -> Option<PathBuf> {
    match try_copy(source, images_dir, file_name) {
        Ok(dest) => Some(dest),
        Err(err) => {
            warn!("image copy from {} failed: {err}", source.display());
            None
        }
    }
}

fn try_copy(source: &Path, images_dir: &Path, file_name: &str) -> io::Result<PathBuf> {
    fs::create_dir_all(images_dir)?;
    let dest = images_dir.join(file_name);
    fs::copy(source, &dest)?;
    Ok(dest)
}

/// File name used for a contact's photo inside the image library.
pub fn library_file_name(contact_name: &str) -> String {
    format!("{}.jpg", contact_name)
}
