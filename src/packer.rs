//! The pixel-to-bit transform.
//!
//! Every run of 8 horizontal pixels becomes one byte, leftmost pixel in
//! the most significant bit. A pure black pixel is a 0 bit, anything else
//! is a 1 bit. Bytes are emitted row by row, left to right.

use crate::{
    binary_stream::BitWriter,
    bitmap::{ChannelOrder, PixelGrid},
    error::Error,
    glyph_table::GlyphTable,
    logger,
};

/// pixels folded into one output byte
pub const GROUP_WIDTH: u32 = 8;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PackOptions {
    pub channel_order: ChannelOrder,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PackedGlyphTable {
    bytes_per_row: usize,
    bytes: Vec<u8>,
}

impl PackedGlyphTable {
    pub fn bytes_per_row(&self) -> usize {
        self.bytes_per_row
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn glyph_table(&self) -> crate::Result<GlyphTable<'_>> {
        GlyphTable::new(&self.bytes, self.bytes_per_row)
    }
}

pub fn check_dimensions(image: &PixelGrid) -> crate::Result<()> {
    if image.height() % GROUP_WIDTH != 0 {
        return Err(Error::HeightNotMultipleOfEight(image.height()));
    }
    if image.width() % GROUP_WIDTH != 0 {
        return Err(Error::WidthNotMultipleOfEight(image.width()));
    }
    Ok(())
}

pub fn pack_pixel_grid(image: &PixelGrid, options: &PackOptions) -> crate::Result<PackedGlyphTable> {
    if let Err(e) = check_dimensions(image) {
        log::warn!(
            "Refusing to pack {}x{} image: {}",
            image.width(),
            image.height(),
            e
        );
        return Err(e);
    }
    let bytes_per_row = (image.width() / GROUP_WIDTH) as usize;
    let mut bytes = Vec::with_capacity(bytes_per_row * image.height() as usize);
    let mut bit_writer = BitWriter::new(&mut bytes);
    for row_index in 0..image.height() {
        let bits = image
            .row(row_index)
            .map(|pixel| !options.channel_order.is_black(pixel));
        bit_writer
            .write_bits(bits)
            .map_err(|e| Error::FailedToPackRow(row_index, e))?;
        debug_assert!(bit_writer.is_byte_aligned());
    }
    bit_writer
        .flush()
        .map_err(|e| Error::FailedToPackRow(image.height(), e))?;
    if log::log_enabled!(log::Level::Trace) {
        for (row_index, row) in bytes.chunks(bytes_per_row.max(1)).enumerate() {
            logger::log_glyph_row(row_index as u32, row);
        }
    }
    log::info!(
        "Packed {}x{} pixels into {} bytes",
        image.width(),
        image.height(),
        bytes.len()
    );
    Ok(PackedGlyphTable {
        bytes_per_row,
        bytes,
    })
}
