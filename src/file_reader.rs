//! Input sources with transparent gzip decompression.
//!
//! Tool input comes from a file path or from stdin (`-`). Gzip input is
//! recognised by its magic bytes rather than the file name, so compressed data
//! piped through stdin works too.
//!
//! ```rust,no_run
//! use wildscan::file_reader;
//!
//! let mut tokens = file_reader::open_tokens("input.txt.gz")?;
//! let pattern = tokens.expect_token("pattern")?;
//! let text = tokens.expect_token("text")?;
//! # Ok::<(), wildscan::WildscanError>(())
//! ```

use crate::error::WildscanError;
use crate::tokens::TokenScanner;
use flate2::bufread::GzDecoder;
use std::fs::File;
use std::io::{self, stdin, BufRead, BufReader};
use std::path::Path;

/// Buffer size for input reading (128KB)
const BUFFER_SIZE: usize = 128 * 1024;

/// First two bytes of every gzip member
const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Boxed buffered reader returned by [`open`].
pub type InputReader = Box<dyn BufRead + Send>;

/// Opens `path` for reading, `-` meaning stdin.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or its first bytes cannot be
/// read.
pub fn open<P: AsRef<Path>>(path: P) -> io::Result<InputReader> {
    let path = path.as_ref();

    if path.to_str() == Some("-") {
        return wrap(BufReader::with_capacity(BUFFER_SIZE, stdin()));
    }

    let file = File::open(path)?;
    wrap(BufReader::with_capacity(BUFFER_SIZE, file))
}

/// Opens `path` and wraps it in a [`TokenScanner`].
pub fn open_tokens<P: AsRef<Path>>(path: P) -> Result<TokenScanner<InputReader>, WildscanError> {
    let path = path.as_ref();
    let reader = open(path).map_err(|e| {
        WildscanError::Io(format!("cannot open {}: {}", path.display(), e))
    })?;
    Ok(TokenScanner::new(reader))
}

/// Wraps an already buffered reader, decompressing if it starts with the gzip
/// magic bytes.
pub fn wrap<R: BufRead + Send + 'static>(mut reader: R) -> io::Result<InputReader> {
    if is_gzip(&mut reader)? {
        log::debug!("gzip input detected");
        Ok(Box::new(BufReader::with_capacity(
            BUFFER_SIZE,
            GzDecoder::new(reader),
        )))
    } else {
        Ok(Box::new(reader))
    }
}

/// Peeks at the buffered prefix without consuming it.
fn is_gzip<R: BufRead>(reader: &mut R) -> io::Result<bool> {
    let buffer = reader.fill_buf()?;
    if buffer.len() >= GZIP_MAGIC.len() {
        return Ok(buffer[..GZIP_MAGIC.len()] == GZIP_MAGIC);
    }
    // Too short to carry a gzip header
    Ok(false)
}
