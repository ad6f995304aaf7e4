//! Frequency extraction.
//!
//! Decodes a PNG and tallies every pixel of its bounding rectangle into a
//! [`FrequencyTable`] keyed by the pixel's exact 16-bit RGBA value.

use std::io::{Cursor, Read};

use image::{DynamicImage, ImageFormat, ImageReader};

use crate::error::{RankError, Result};
use crate::types::{Colour, FrequencyTable};

/// Read `reader` to the end and tally the PNG it contains.
pub fn extract<R: Read>(mut reader: R) -> Result<FrequencyTable> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    extract_bytes(&bytes)
}

/// Tally a PNG held in memory.
pub fn extract_bytes(bytes: &[u8]) -> Result<FrequencyTable> {
    let image = decode(bytes)?;
    Ok(tally(&image))
}

/// Decode `bytes` as PNG.
///
/// The decoder's allocation limits are lifted; callers that need a cap
/// bound the input before it gets here.
pub fn decode(bytes: &[u8]) -> Result<DynamicImage> {
    let mut reader = ImageReader::with_format(Cursor::new(bytes), ImageFormat::Png);
    reader.no_limits();
    reader.decode().map_err(|e| RankError::Decode {
        message: e.to_string(),
    })
}

/// Count every pixel of an already decoded image.
///
/// 8-bit images are widened by bit replication, deeper images are read at
/// 16 bits, so distinct source pixels always land in distinct buckets.
pub fn tally(image: &DynamicImage) -> FrequencyTable {
    let mut table = FrequencyTable::new();

    if is_eight_bit(image) {
        for pixel in image.to_rgba8().pixels() {
            table.record(Colour::from_rgba8(pixel.0));
        }
    } else {
        for pixel in image.to_rgba16().pixels() {
            table.record(Colour::from_rgba16(pixel.0));
        }
    }

    table
}

fn is_eight_bit(image: &DynamicImage) -> bool {
    let color = image.color();
    color.bytes_per_pixel() == color.channel_count()
}
