use std::io::Write;

use crate::{bitmap::ImageWriter, error::Error, packer::PackedGlyphTable};

/// Writes a packed table as-is: no header, no length prefix, no trailer.
pub struct GlyphTableWriter<'a, T: Write> {
    writer: T,
    destination: String,
    table: &'a PackedGlyphTable,
}

impl<'a, T: Write> GlyphTableWriter<'a, T> {
    pub fn new(writer: T, destination: String, table: &'a PackedGlyphTable) -> Self {
        Self {
            writer,
            destination,
            table,
        }
    }
}

impl<T: Write> ImageWriter for GlyphTableWriter<'_, T> {
    fn write_image(&mut self) -> crate::Result<()> {
        self.writer
            .write_all(self.table.as_bytes())
            .map_err(|e| Error::FailedToWriteGlyphTable(self.destination.clone(), e))?;
        self.writer
            .flush()
            .map_err(|e| Error::FailedToWriteGlyphTable(self.destination.clone(), e))?;
        Ok(())
    }
}
