use std::io::{BufRead, Seek};

use image::{DynamicImage, GenericImageView, ImageFormat};

use crate::bitmap::{ImageReader, PixelGrid};
use crate::error::Error;

/// Reads any raster format the `image` crate can decode.
///
/// The format is sniffed from the content; `format_hint` (usually derived
/// from the file extension) is used for formats without a magic number.
pub struct DecodedImageReader<T: BufRead + Seek> {
    reader: T,
    source_name: String,
    format_hint: Option<ImageFormat>,
}

impl<T: BufRead + Seek> DecodedImageReader<T> {
    pub fn new(reader: T, source_name: String, format_hint: Option<ImageFormat>) -> Self {
        Self {
            reader,
            source_name,
            format_hint,
        }
    }

    fn decode(&mut self) -> image::ImageResult<DynamicImage> {
        let mut decoder = image::ImageReader::new(&mut self.reader);
        if let Some(format) = self.format_hint {
            decoder.set_format(format);
        }
        decoder.with_guessed_format()?.decode()
    }
}

impl<T: BufRead + Seek> ImageReader for DecodedImageReader<T> {
    fn read_image(&mut self) -> crate::Result<PixelGrid> {
        let image = self
            .decode()
            .map_err(|e| Error::UnableToDecodeInputImage(self.source_name.clone(), e))?;
        log::debug!(
            "Decoded '{}' with color type {:?}",
            self.source_name,
            image.color()
        );
        Ok(into_pixel_grid(image))
    }
}

fn into_pixel_grid(image: DynamicImage) -> PixelGrid {
    let (width, height) = image.dimensions();
    let (channels, samples) = match image.color().channel_count() {
        1 => (1, image.into_luma16().into_raw()),
        2 => (2, image.into_luma_alpha16().into_raw()),
        3 => (3, image.into_rgb16().into_raw()),
        _ => (4, image.into_rgba16().into_raw()),
    };
    PixelGrid::new(width, height, channels, samples)
}

#[cfg(test)]
mod test {
    use std::io::Cursor;

    use image::{
        DynamicImage, GrayImage, ImageBuffer, ImageFormat, Luma, Rgb, RgbImage, Rgba, RgbaImage,
    };

    use super::DecodedImageReader;
    use crate::{
        bitmap::{ChannelOrder, ImageReader},
        error::Error,
    };

    fn encode(image: DynamicImage, format: ImageFormat) -> Vec<u8> {
        let mut bytes = Cursor::new(Vec::new());
        image
            .write_to(&mut bytes, format)
            .expect("Encoding of test image failed");
        bytes.into_inner()
    }

    fn read(bytes: Vec<u8>, format_hint: Option<ImageFormat>) -> crate::Result<super::PixelGrid> {
        let mut reader =
            DecodedImageReader::new(Cursor::new(bytes), "test image".to_owned(), format_hint);
        reader.read_image()
    }

    #[test]
    fn read_rgb_png() {
        let mut image = RgbImage::from_pixel(16, 8, Rgb([255, 255, 255]));
        image.put_pixel(3, 1, Rgb([0, 0, 0]));
        let grid = read(encode(DynamicImage::ImageRgb8(image), ImageFormat::Png), None).unwrap();
        assert_eq!(grid.width(), 16);
        assert_eq!(grid.height(), 8);
        assert_eq!(grid.channels(), 3);
        assert_eq!(grid.pixel(3, 1), &[0, 0, 0]);
        assert_eq!(grid.pixel(4, 1), &[u16::MAX, u16::MAX, u16::MAX]);
    }

    #[test]
    fn read_grayscale_keeps_single_channel() {
        let mut image = GrayImage::from_pixel(8, 8, Luma([200]));
        image.put_pixel(0, 0, Luma([0]));
        let grid = read(encode(DynamicImage::ImageLuma8(image), ImageFormat::Png), None).unwrap();
        assert_eq!(grid.channels(), 1);
        assert_eq!(grid.pixel(0, 0), &[0]);
        assert_ne!(grid.pixel(1, 0), &[0]);
    }

    #[test]
    fn read_rgba_keeps_alpha_channel() {
        let image = RgbaImage::from_pixel(8, 8, Rgba([0, 0, 0, 0]));
        let grid = read(encode(DynamicImage::ImageRgba8(image), ImageFormat::Png), None).unwrap();
        assert_eq!(grid.channels(), 4);
        assert_eq!(grid.pixel(7, 7), &[0, 0, 0, 0]);
    }

    #[test]
    fn near_black_stays_non_zero() {
        let image = RgbImage::from_pixel(8, 8, Rgb([0, 1, 0]));
        let grid = read(encode(DynamicImage::ImageRgb8(image), ImageFormat::Bmp), None).unwrap();
        assert_ne!(grid.pixel(0, 0)[1], 0);
    }

    #[test]
    fn sixteen_bit_samples_keep_full_depth() {
        let image: ImageBuffer<Rgb<u16>, Vec<u16>> = ImageBuffer::from_pixel(8, 8, Rgb([0, 100, 0]));
        let grid = read(encode(DynamicImage::ImageRgb16(image), ImageFormat::Png), None).unwrap();
        assert_eq!(grid.pixel(0, 0), &[0, 100, 0]);
        assert!(!ChannelOrder::Rgb.is_black(grid.pixel(0, 0)));
    }

    #[test]
    fn reject_garbage() {
        let result = read(b"definitely not an image".to_vec(), None);
        match result {
            Err(Error::UnableToDecodeInputImage(name, _)) => assert_eq!(name, "test image"),
            Err(e) => panic!("Unexpected error: {}", e),
            Ok(_) => panic!("Garbage input was decoded"),
        }
    }
}
