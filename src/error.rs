use std::fmt::Display;

#[derive(Debug)]
pub enum Error {
    UnableToOpenInputFileForReading(String, std::io::Error),
    UnableToDecodeInputImage(String, image::ImageError),
    WidthNotMultipleOfEight(u32),
    HeightNotMultipleOfEight(u32),
    FailedToPackRow(u32, std::io::Error),
    UnableToOpenOutputFileForWriting(String, std::io::Error),
    FailedToWriteGlyphTable(String, std::io::Error),
    InvalidGlyphTableLayout(usize, usize),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnableToOpenInputFileForReading(path, error) => {
                write!(
                    f,
                    "Unable to open input file '{}' for reading: {}",
                    path, error
                )
            }
            Self::UnableToDecodeInputImage(path, error) => {
                write!(f, "Unable to decode input image '{}': {}", path, error)
            }
            Self::WidthNotMultipleOfEight(width) => {
                write!(f, "Image width {} is not a multiple of 8", width)
            }
            Self::HeightNotMultipleOfEight(height) => {
                write!(f, "Image height {} is not a multiple of 8", height)
            }
            Self::FailedToPackRow(row, error) => {
                write!(f, "Failed to pack pixel row {}: {}", row, error)
            }
            Self::UnableToOpenOutputFileForWriting(path, error) => {
                write!(
                    f,
                    "Unable to open output file '{}' for writing: {}",
                    path, error
                )
            }
            Self::FailedToWriteGlyphTable(path, error) => {
                write!(f, "Failed to write glyph table to '{}': {}", path, error)
            }
            Self::InvalidGlyphTableLayout(length, bytes_per_row) => {
                write!(
                    f,
                    "A glyph table of {} bytes can not be split into glyph rows of {} bytes",
                    length, bytes_per_row
                )
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::UnableToOpenInputFileForReading(_, error)
            | Self::FailedToPackRow(_, error)
            | Self::UnableToOpenOutputFileForWriting(_, error)
            | Self::FailedToWriteGlyphTable(_, error) => Some(error),
            Self::UnableToDecodeInputImage(_, error) => Some(error),
            Self::WidthNotMultipleOfEight(_)
            | Self::HeightNotMultipleOfEight(_)
            | Self::InvalidGlyphTableLayout(_, _) => None,
        }
    }
}
