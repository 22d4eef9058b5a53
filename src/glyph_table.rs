//! Read side of a packed table: the sheet is a grid of 8x8 glyphs,
//! `bytes_per_row` glyphs across, each scanline one byte.

use crate::{error::Error, packer::GROUP_WIDTH};

const GLYPH_HEIGHT: usize = 8;

pub type Glyph = [u8; GLYPH_HEIGHT];

#[derive(Clone, Copy, Debug)]
pub struct GlyphTable<'a> {
    bytes: &'a [u8],
    bytes_per_row: usize,
}

impl<'a> GlyphTable<'a> {
    pub fn new(bytes: &'a [u8], bytes_per_row: usize) -> crate::Result<Self> {
        if bytes_per_row == 0 || bytes.len() % (bytes_per_row * GLYPH_HEIGHT) != 0 {
            return Err(Error::InvalidGlyphTableLayout(bytes.len(), bytes_per_row));
        }
        Ok(Self {
            bytes,
            bytes_per_row,
        })
    }

    pub fn width(&self) -> usize {
        self.bytes_per_row * GROUP_WIDTH as usize
    }

    pub fn height(&self) -> usize {
        self.bytes.len() / self.bytes_per_row
    }

    pub fn glyph_count(&self) -> usize {
        self.bytes.len() / GLYPH_HEIGHT
    }

    /// Scanlines of the glyph at `index`, counting left to right, then
    /// top to bottom across the sheet.
    pub fn glyph(&self, index: usize) -> Option<Glyph> {
        if index >= self.glyph_count() {
            return None;
        }
        let sheet_row = index / self.bytes_per_row;
        let sheet_column = index % self.bytes_per_row;
        let mut glyph = [0; GLYPH_HEIGHT];
        for (scanline, value) in glyph.iter_mut().enumerate() {
            let row = sheet_row * GLYPH_HEIGHT + scanline;
            *value = self.bytes[row * self.bytes_per_row + sheet_column];
        }
        Some(glyph)
    }

    /// `true` for a pixel that was not pure black in the source
    pub fn is_set(&self, x: usize, y: usize) -> Option<bool> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let byte = self.bytes[y * self.bytes_per_row + x / GROUP_WIDTH as usize];
        Some(byte & (0b1000_0000 >> (x % GROUP_WIDTH as usize)) != 0)
    }

    /// every pixel of the sheet, row-major
    pub fn unpack(&self) -> Vec<bool> {
        self.bytes
            .iter()
            .flat_map(|byte| (0..GROUP_WIDTH).rev().map(move |bit| byte & (1u8 << bit) != 0))
            .collect()
    }
}
