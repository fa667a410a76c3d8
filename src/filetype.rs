//! Content type sniffing over seekable streams.
//!
//! Every function here reads from a caller supplied `Read + Seek` stream and
//! puts the stream back where it found it:
//!
//! 1. the current position is recorded,
//! 2. the stream is read (a 512 byte prefix, a full image decode, or the
//!    whole remaining content for checksums),
//! 3. the stream is seeked back to the recorded position.
//!
//! The restorative seek is attempted on every exit path. When both the read
//! and the seek fail, the read error is returned and the seek error is only
//! logged. If recording the position fails nothing is read.
//!
//! ```
//! use std::io::{Cursor, Seek};
//! use plain_types::filetype;
//!
//! let mut stream = Cursor::new(b"%PDF-1.4\n".to_vec());
//! assert_eq!(filetype::mime_type(&mut stream).unwrap(), "application/pdf");
//! assert_eq!(stream.stream_position().unwrap(), 0);
//! assert_eq!(filetype::is_image(&mut stream).unwrap(), None);
//! ```

use std::{
    fmt,
    io::{BufReader, Read, Seek, SeekFrom},
};

use sha2::{Digest, Sha256};

use crate::Result;

/// Number of leading bytes inspected when sniffing.
pub const SNIFF_LEN: usize = 512;

pub const MIME_GIF: &str = "image/gif";
pub const MIME_PNG: &str = "image/png";
pub const MIME_JPEG: &str = "image/jpeg";
pub const MIME_TEXT_UTF8: &str = "text/plain; charset=utf-8";
pub const MIME_OCTET_STREAM: &str = "application/octet-stream";

/// Image formats that can be validated by a full decode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImageKind {
    Gif,
    Png,
    Jpeg,
}

impl ImageKind {
    pub fn mime_type(self) -> &'static str {
        match self {
            ImageKind::Gif => MIME_GIF,
            ImageKind::Png => MIME_PNG,
            ImageKind::Jpeg => MIME_JPEG,
        }
    }

    /// Map a sniffed MIME type to an image kind, `None` for anything else.
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime {
            MIME_GIF => Some(ImageKind::Gif),
            MIME_PNG => Some(ImageKind::Png),
            MIME_JPEG => Some(ImageKind::Jpeg),
            _ => None,
        }
    }

    fn image_format(self) -> image::ImageFormat {
        match self {
            ImageKind::Gif => image::ImageFormat::Gif,
            ImageKind::Png => image::ImageFormat::Png,
            ImageKind::Jpeg => image::ImageFormat::Jpeg,
        }
    }
}

impl fmt::Display for ImageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mime_type())
    }
}

/// Runs `op` against `stream` and seeks back to the position the stream had
/// before the call, whatever `op` returned.
fn with_restored_position<R, T, F>(stream: &mut R, op: F) -> Result<T>
where
    R: Read + Seek,
    F: FnOnce(&mut R) -> Result<T>,
{
    let start = stream.stream_position()?;
    let outcome = op(stream);
    let restored = stream.seek(SeekFrom::Start(start));

    match (outcome, restored) {
        (Ok(value), Ok(_)) => Ok(value),
        (Ok(_), Err(seek_err)) => Err(seek_err.into()),
        (Err(err), Ok(_)) => Err(err),
        (Err(err), Err(seek_err)) => {
            log::warn!("Could not restore stream position {start} after error ({err}): {seek_err}");
            Err(err)
        }
    }
}

/// Classify a byte prefix.
///
/// Known binary formats are recognised by their magic numbers. Content
/// without binary control bytes is reported as UTF-8 text, everything else
/// as `application/octet-stream`.
pub fn detect_content_type(prefix: &[u8]) -> &'static str {
    let prefix = &prefix[..prefix.len().min(SNIFF_LEN)];
    if let Some(kind) = infer::get(prefix) {
        return with_utf8_charset(kind.mime_type());
    }
    if prefix.iter().any(|&b| is_binary_byte(b)) {
        MIME_OCTET_STREAM
    } else {
        MIME_TEXT_UTF8
    }
}

// Text types recognised by magic get the same charset as plain text.
fn with_utf8_charset(mime: &'static str) -> &'static str {
    match mime {
        "text/html" => "text/html; charset=utf-8",
        "text/xml" => "text/xml; charset=utf-8",
        "text/x-shellscript" => "text/x-shellscript; charset=utf-8",
        other => other,
    }
}

// Control characters that never show up in text files. Tab, line feed,
// form feed, carriage return and escape are allowed.
fn is_binary_byte(b: u8) -> bool {
    matches!(b, 0x00..=0x08 | 0x0B | 0x0E..=0x1A | 0x1C..=0x1F)
}

/// Sniff the MIME type of the stream from its next [`SNIFF_LEN`] bytes.
pub fn mime_type<R: Read + Seek>(stream: &mut R) -> Result<&'static str> {
    let mime = with_restored_position(stream, |stream| {
        let mut prefix = Vec::with_capacity(SNIFF_LEN);
        stream.take(SNIFF_LEN as u64).read_to_end(&mut prefix)?;
        Ok(detect_content_type(&prefix))
    })?;
    log::trace!("Sniffed content type {mime}");
    Ok(mime)
}

/// Check that the stream holds a well formed GIF, PNG or JPEG image.
///
/// Returns `Ok(None)` when the sniffed type is not one of these. When it is,
/// the whole image is decoded and a decode failure is returned as
/// [`crate::TypesError::Decode`].
pub fn is_image<R: Read + Seek>(stream: &mut R) -> Result<Option<ImageKind>> {
    let Some(kind) = ImageKind::from_mime(mime_type(stream)?) else {
        return Ok(None);
    };
    validate_image(stream, kind)?;
    Ok(Some(kind))
}

/// Decode the stream as `kind` from its current position.
pub fn validate_image<R: Read + Seek>(stream: &mut R, kind: ImageKind) -> Result<()> {
    with_restored_position(stream, |stream| {
        let reader = BufReader::new(stream);
        match image::load(reader, kind.image_format()) {
            Ok(img) => {
                log::debug!("Decoded {kind} image of {}x{}", img.width(), img.height());
                Ok(())
            }
            Err(err) => {
                log::debug!("Stream sniffed as {kind} failed to decode: {err}");
                Err(err.into())
            }
        }
    })
}

pub fn is_gif<R: Read + Seek>(stream: &mut R) -> Result<bool> {
    Ok(mime_type(stream)? == MIME_GIF)
}

pub fn is_png<R: Read + Seek>(stream: &mut R) -> Result<bool> {
    Ok(mime_type(stream)? == MIME_PNG)
}

pub fn is_jpg<R: Read + Seek>(stream: &mut R) -> Result<bool> {
    Ok(mime_type(stream)? == MIME_JPEG)
}

/// Lowercase hex SHA-256 of everything from the current position to the end.
pub fn sha256_sum<R: Read + Seek>(stream: &mut R) -> Result<String> {
    let sum = with_restored_position(stream, |stream| {
        let mut hasher = Sha256::new();
        std::io::copy(stream, &mut hasher)?;
        Ok(hex::encode(hasher.finalize()))
    })?;
    log::trace!("Computed sha256 {sum}");
    Ok(sum)
}
