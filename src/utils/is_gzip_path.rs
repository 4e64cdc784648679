use crate::constants::GZIP_FILE_EXTENSION;
use std::path::Path;

/// Returns `true` when the path's extension marks it as gzip-compressed.
pub fn is_gzip_path(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case(GZIP_FILE_EXTENSION))
        .unwrap_or(false)
}
