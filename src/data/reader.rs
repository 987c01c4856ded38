// ============================================================
// Layer 4 — Text Reader
// ============================================================
// Reads one source file fully into memory as UTF-8.
//
// The file handle lives only inside fs::read, so it is closed
// before we return, whether decoding succeeds or not.
//
// No lossy fallback: invalid UTF-8
// becomes ConcatError::Encoding and the run stops.
// Line endings are kept exactly as they are on disk.

use std::{fs, path::Path};

use crate::domain::error::{ConcatError, ConcatResult};

/// Read the whole file at `path` as a UTF-8 String.
pub fn read_text_file(path: &Path) -> ConcatResult<String> {
    let bytes = fs::read(path).map_err(|e| ConcatError::io(path, e))?;

    String::from_utf8(bytes).map_err(|source| ConcatError::Encoding {
        path: path.to_path_buf(),
        source,
    })
}
