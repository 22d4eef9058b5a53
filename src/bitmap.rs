pub mod reader;
pub mod writer;

/// Decoded raster, row-major, `channels` samples per pixel.
///
/// Samples are widened to 16 bit regardless of the source depth, so an
/// exactly-zero sample stays zero and every other value stays non-zero.
#[derive(Clone, Debug, PartialEq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    channels: u8,
    samples: Vec<u16>,
}

impl PixelGrid {
    pub fn new(width: u32, height: u32, channels: u8, samples: Vec<u16>) -> Self {
        assert!(channels > 0, "A pixel needs at least one channel");
        assert_eq!(
            samples.len(),
            width as usize * height as usize * channels as usize,
            "Number of samples does not match {}x{} pixels with {} channels",
            width,
            height,
            channels
        );
        Self {
            width,
            height,
            channels,
            samples,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channels(&self) -> u8 {
        self.channels
    }

    pub fn pixel(&self, column_index: u32, row_index: u32) -> &[u16] {
        let channels = self.channels as usize;
        let index = (column_index as usize + row_index as usize * self.width as usize) * channels;
        &self.samples[index..index + channels]
    }

    /// all pixels of one row, left to right
    pub fn row(&self, row_index: u32) -> impl Iterator<Item = &[u16]> {
        let channels = self.channels as usize;
        let row_length = self.width as usize * channels;
        let start = row_index as usize * row_length;
        self.samples[start..start + row_length].chunks_exact(channels)
    }
}

/// Position of the colour channels inside a decoded pixel.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ChannelOrder {
    #[default]
    Rgb,
    Bgr,
}

impl ChannelOrder {
    /// indices of red, green and blue
    pub fn color_channel_indices(&self) -> [usize; 3] {
        match self {
            Self::Rgb => [0, 1, 2],
            Self::Bgr => [2, 1, 0],
        }
    }

    /// Pure black means every colour channel is exactly zero.
    ///
    /// Channels beyond the three colour channels (alpha) are ignored.
    /// Grayscale pixels, with or without alpha, only have their luma
    /// channel inspected.
    pub fn is_black(&self, pixel: &[u16]) -> bool {
        match pixel {
            [] => false,
            [luma] | [luma, _] => *luma == 0,
            _ => self
                .color_channel_indices()
                .iter()
                .all(|&index| pixel[index] == 0),
        }
    }
}

pub trait ImageReader {
    fn read_image(&mut self) -> crate::Result<PixelGrid>;
}

pub trait ImageWriter {
    fn write_image(&mut self) -> crate::Result<()>;
}
