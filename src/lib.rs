use std::{
    fs::{self, File, OpenOptions},
    io::{BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use bitmap::{
    reader::decoded::DecodedImageReader, writer::glyph_table::GlyphTableWriter, ImageReader,
    ImageWriter,
};
pub use bitmap::{ChannelOrder, PixelGrid};
pub use cli::CLIParser;
pub use error::Error;
pub use glyph_table::GlyphTable;
pub use packer::{pack_pixel_grid, PackOptions, PackedGlyphTable};

pub mod binary_stream;
pub mod bitmap;
mod cli;
mod error;
pub mod glyph_table;
mod logger;
pub mod packer;

pub type Result<T> = std::result::Result<T, error::Error>;

pub struct Arguments {
    input_file: PathBuf,
    output_file: PathBuf,
}

fn open_input_file(file_path: &Path) -> Result<File> {
    File::open(file_path).map_err(|e| {
        Error::UnableToOpenInputFileForReading(file_path.display().to_string(), e)
    })
}

fn open_output_file(file_path: &Path) -> Result<File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(file_path)
        .map_err(|e| {
            Error::UnableToOpenOutputFileForWriting(file_path.display().to_string(), e)
        })
}

pub fn read_pixel_grid(file_path: &Path) -> Result<PixelGrid> {
    let input_file = open_input_file(file_path)?;
    let format_hint = image::ImageFormat::from_path(file_path).ok();
    let mut reader = DecodedImageReader::new(
        BufReader::new(input_file),
        file_path.display().to_string(),
        format_hint,
    );
    let image = reader.read_image()?;
    log::info!(
        "Read {}x{} image with {} channels from '{}'",
        image.width(),
        image.height(),
        image.channels(),
        file_path.display()
    );
    Ok(image)
}

/// Writes the complete table in one pass. A file left behind by a failed
/// write is removed again.
pub fn write_glyph_table(file_path: &Path, table: &PackedGlyphTable) -> Result<()> {
    let output_file = open_output_file(file_path)?;
    write_or_remove(file_path, BufWriter::new(output_file), table)
}

fn write_or_remove<W: Write>(
    file_path: &Path,
    writer: W,
    table: &PackedGlyphTable,
) -> Result<()> {
    let destination = file_path.display().to_string();
    // the writer is dropped, and the file closed, before any removal
    let result = GlyphTableWriter::new(writer, destination, table).write_image();
    if let Err(e) = result {
        log::warn!("Removing incomplete output file '{}'", file_path.display());
        if let Err(removal_error) = fs::remove_file(file_path) {
            log::warn!(
                "Failed to remove '{}': {}",
                file_path.display(),
                removal_error
            );
        }
        return Err(e);
    }
    log::info!("Wrote {} bytes to '{}'", table.len(), file_path.display());
    Ok(())
}

pub fn pack_with_options(
    image_path: &Path,
    output_path: &Path,
    options: &PackOptions,
) -> Result<()> {
    let image = read_pixel_grid(image_path)?;
    let table = pack_pixel_grid(&image, options)?;
    drop(image);
    write_glyph_table(output_path, &table)
}

pub fn pack<P, Q>(image_path: P, output_path: Q) -> Result<()>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    pack_with_options(
        image_path.as_ref(),
        output_path.as_ref(),
        &PackOptions::default(),
    )
}

pub fn pack_image_to_glyph_table(arguments: &Arguments) -> Result<()> {
    pack(&arguments.input_file, &arguments.output_file)
}
