//! Program Image Loader.
//!
//! This module reads program images from disk. It performs:
//! 1. **Parsing:** One base-2 byte literal per line; `#` starts a comment; blank lines are skipped.
//! 2. **Validation:** Literals must fit in a byte and the image must fit in memory.
//! 3. **File access:** Distinguishes a missing file from other read failures.
//!
//! ```text
//! 10000010 # LDI R0,8
//! 00000000
//! 00001000
//! 01000111 # PRN R0
//! 00000000
//! 00000001 # HLT
//! ```

use std::fs;
use std::io;
use std::path::Path;

use crate::common::constants::MEMORY_SIZE;
use crate::common::LoadError;

/// Parses the text of a program image into bytes.
///
/// # Errors
///
/// Returns [`LoadError::InvalidLiteral`] for a line that is not a base-2 byte
/// (a digit other than 0 and 1, or a value above 255), and
/// [`LoadError::ImageTooLarge`] once more than 256 bytes have been read.
pub fn parse_image(text: &str) -> Result<Vec<u8>, LoadError> {
    let mut image = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let literal = line.split('#').next().unwrap_or_default().trim();
        if literal.is_empty() {
            continue;
        }
        let byte = u8::from_str_radix(literal, 2).map_err(|_| LoadError::InvalidLiteral {
            line: idx + 1,
            text: literal.to_string(),
        })?;
        if image.len() == MEMORY_SIZE {
            return Err(LoadError::ImageTooLarge {
                len: image.len() + 1,
            });
        }
        image.push(byte);
    }
    Ok(image)
}

/// Reads and parses a program image file.
///
/// # Errors
///
/// Returns [`LoadError::ImageNotFound`] if `path` does not exist,
/// [`LoadError::Io`] if it cannot be read, or any error from [`parse_image`].
pub fn load_image_file(path: impl AsRef<Path>) -> Result<Vec<u8>, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => LoadError::ImageNotFound(path.to_path_buf()),
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;
    let image = parse_image(&text)?;
    tracing::debug!(path = %path.display(), bytes = image.len(), "parsed program image");
    Ok(image)
}
