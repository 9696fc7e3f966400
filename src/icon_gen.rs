use crate::error::{ResizeError, Result};
use image::{
    imageops::FilterType, io::Reader as ImageReader, ColorType, DynamicImage, ImageOutputFormat,
    ImageResult,
};
use std::{
    borrow::Cow,
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};
use tracing::{debug, info};

/// A square PNG icon written to a fixed location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconTarget {
    pub size: u32,
    pub path: &'static str,
}

/// The icons a web app manifest expects, in the order they are written.
pub const PWA_ICONS: [IconTarget; 2] = [
    IconTarget {
        size: 192,
        path: "public/icon-192.png",
    },
    IconTarget {
        size: 512,
        path: "public/icon-512.png",
    },
];

/// Resize `input` into every icon in [`PWA_ICONS`], relative to the current directory.
///
/// Returns the paths written, in order.
pub fn resize_icon(input: &Path) -> Result<Vec<PathBuf>> {
    resize_icon_in(input, Path::new(""))
}

/// Same as [`resize_icon`] but resolves the output paths against `root`.
///
/// Prints a `✓ Created:` line to stdout as each icon is written.
///
/// The output directory is never created. Icons already written stay on disk
/// when a later one fails.
pub fn resize_icon_in(input: &Path, root: &Path) -> Result<Vec<PathBuf>> {
    if !input.exists() {
        return Err(ResizeError::NotFound {
            path: input.to_path_buf(),
        });
    }

    let source = load_image(input)?;

    let mut written = Vec::with_capacity(PWA_ICONS.len());
    for target in PWA_ICONS {
        let resized = resize_square(&source, target.size);
        let output_path = root.join(target.path);
        save_png(&resized, &output_path)?;
        println!("✓ Created: {}", output_path.display());
        written.push(output_path);
    }

    Ok(written)
}

/// Decode an image, sniffing the format from its content before falling back
/// to the file extension.
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    let source = decode(path).map_err(|source| ResizeError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(
        "Decoded {} ({}x{}, {:?})",
        path.display(),
        source.width(),
        source.height(),
        source.color()
    );
    Ok(source)
}

fn decode(path: &Path) -> ImageResult<DynamicImage> {
    ImageReader::open(path)?.with_guessed_format()?.decode()
}

/// Stretch `source` to exactly `size`x`size`; the aspect ratio is not kept.
pub fn resize_square(source: &DynamicImage, size: u32) -> DynamicImage {
    debug!(
        "Resampling {}x{} -> {size}x{size} (Lanczos3)",
        source.width(),
        source.height()
    );
    source.resize_exact(size, size, FilterType::Lanczos3)
}

fn save_png(image: &DynamicImage, path: &Path) -> Result<()> {
    write_png(image, path).map_err(|source| ResizeError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    info!("Wrote {}x{} PNG to {}", image.width(), image.height(), path.display());
    Ok(())
}

fn write_png(image: &DynamicImage, path: &Path) -> ImageResult<()> {
    let mut out_file = BufWriter::new(File::create(path)?);
    png_compatible(image).write_to(&mut out_file, ImageOutputFormat::Png)?;
    out_file.flush()?;
    Ok(())
}

// PNG has no floating point sample format.
fn png_compatible(image: &DynamicImage) -> Cow<'_, DynamicImage> {
    match image.color() {
        ColorType::Rgb32F | ColorType::Rgba32F => {
            debug!("Converting {:?} raster to Rgba8 for PNG", image.color());
            Cow::Owned(DynamicImage::ImageRgba8(image.to_rgba8()))
        }
        _ => Cow::Borrowed(image),
    }
}
