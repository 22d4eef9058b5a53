use std::io;
use std::io::Write;

/// State for writing individual bits to a Writer, most significant bit first
pub struct BitWriter<'a, T: Write> {
    /// the underlying output stream
    writer: &'a mut T,
    /// buffer of individual bits not yet written
    buffer: u8,
    /// how many bits are waiting to be written
    buffer_space_used: u8,
}

impl<'a, T: Write> BitWriter<'a, T> {
    pub fn new(writer: &'a mut T) -> BitWriter<'a, T> {
        BitWriter {
            writer,
            buffer: 0,
            buffer_space_used: 0,
        }
    }

    /// append a single bit
    ///
    /// the first bit written after a byte boundary becomes the
    /// most significant bit of the next output byte.
    ///
    /// returns the number of bytes handed to the underlying
    /// stream, which is 1 whenever this bit completed a byte.
    pub fn write_bit(&mut self, bit: bool) -> Result<usize, io::Error> {
        self.buffer = (self.buffer << 1) | u8::from(bit);
        self.buffer_space_used += 1;
        if self.buffer_space_used < 8 {
            return Ok(0);
        }
        self.writer.write_all(&[self.buffer])?;
        self.buffer_space_used = 0;
        self.buffer = 0; // depended upon in flush()
        Ok(1)
    }

    /// append every bit yielded by the iterator, in order
    pub fn write_bits<I>(&mut self, bits: I) -> Result<usize, io::Error>
    where
        I: IntoIterator<Item = bool>,
    {
        let mut bytes_written = 0;
        for bit in bits {
            bytes_written += self.write_bit(bit)?;
        }
        Ok(bytes_written)
    }

    pub fn is_byte_aligned(&self) -> bool {
        self.buffer_space_used == 0
    }

    /// Flush all bits and the underlying writer;
    ///
    /// If there are non-byte-aligned bits still
    /// in the buffer, they will be written to the output
    /// with 0 padding to the next byte;
    pub fn flush(&mut self) -> Result<(), io::Error> {
        if self.buffer_space_used != 0 {
            let padding = 8 - self.buffer_space_used;
            self.writer.write_all(&[self.buffer << padding])?;
            self.buffer = 0;
            self.buffer_space_used = 0;
        }
        self.writer.flush()
    }
}
