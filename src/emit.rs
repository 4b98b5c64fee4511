use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use ico::{IconDir, IconDirEntry, IconImage, ResourceType};
use image::imageops::{self, FilterType};
use image::codecs::png::PngEncoder;
use image::{ColorType, ImageBuffer, ImageEncoder, Rgba, Rgba32FImage, RgbaImage};

use crate::config::{BANNER_BACKGROUND, BANNER_MARGIN};
use crate::error::IconError;
use crate::helpers::{file_label, format_dims};
use crate::logger::log_saved;

pub fn resize_square(img: &RgbaImage, size: u32) -> RgbaImage {
    if img.dimensions() == (size, size) {
        img.clone()
    } else {
        resample(img, size, size)
    }
}

/// Lanczos3 on premultiplied alpha, so fully transparent pixels carry no
/// color into the edges of the shape.
pub fn resample(img: &RgbaImage, width: u32, height: u32) -> RgbaImage {
    let premultiplied: Rgba32FImage = ImageBuffer::from_fn(img.width(), img.height(), |x, y| {
        let [r, g, b, a] = img.get_pixel(x, y).0;
        let a = a as f32 / 255.0;
        Rgba([
            r as f32 / 255.0 * a,
            g as f32 / 255.0 * a,
            b as f32 / 255.0 * a,
            a,
        ])
    });
    let resized = imageops::resize(&premultiplied, width, height, FilterType::Lanczos3);

    RgbaImage::from_fn(width, height, |x, y| {
        let [r, g, b, a] = resized.get_pixel(x, y).0;
        let a = a.clamp(0.0, 1.0);
        if a <= 0.0 {
            return Rgba([0, 0, 0, 0]);
        }
        let unpremultiply = |c: f32| to_u8(c / a);
        Rgba([unpremultiply(r), unpremultiply(g), unpremultiply(b), to_u8(a)])
    })
}

fn to_u8(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Encode `img` as PNG at `path`, replacing any existing file.
pub fn write_png(img: &RgbaImage, path: &Path) -> Result<(), IconError> {
    let file = File::create(path).map_err(|e| IconError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    PngEncoder::new(&mut writer)
        .write_image(img.as_raw(), img.width(), img.height(), ColorType::Rgba8)
        .map_err(|e| IconError::image(path, e))?;
    writer.flush().map_err(|e| IconError::io(path, e))
}

pub fn save_png(img: &RgbaImage, path: &Path, size: Option<u32>) -> Result<(), IconError> {
    let resized = match size {
        Some(sz) => resize_square(img, sz),
        None => img.clone(),
    };
    write_png(&resized, path)?;
    log_saved(&file_label(path), &format_dims(resized.width(), resized.height()));
    Ok(())
}

/// Write a multi-size ICO. Frames are stored in the order of `sizes`, so
/// callers pass them largest first.
pub fn save_ico(img: &RgbaImage, path: &Path, sizes: &[u32]) -> Result<(), IconError> {
    let mut icon_dir = IconDir::new(ResourceType::Icon);
    for &size in sizes {
        let resized = resize_square(img, size);
        let frame = IconImage::from_rgba_data(size, size, resized.into_raw());
        let entry = IconDirEntry::encode(&frame).map_err(|e| IconError::io(path, e))?;
        icon_dir.add_entry(entry);
    }

    let file = File::create(path).map_err(|e| IconError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    icon_dir.write(&mut writer).map_err(|e| IconError::io(path, e))?;
    writer.flush().map_err(|e| IconError::io(path, e))?;

    log_saved(&file_label(path), &format!("sizes: {:?}", sizes));
    Ok(())
}

/// Icon centered horizontally on a solid background, inset from the top
/// by the banner margin and scaled to the height minus both margins.
pub fn compose_banner(icon: &RgbaImage, width: u32, height: u32) -> RgbaImage {
    let mut banner = RgbaImage::from_pixel(width, height, Rgba(BANNER_BACKGROUND));
    let side = height.saturating_sub(2 * BANNER_MARGIN);
    if side == 0 {
        return banner;
    }
    let small = resize_square(icon, side);
    let x = width.saturating_sub(side) / 2;
    imageops::overlay(&mut banner, &small, x as i64, BANNER_MARGIN as i64);
    banner
}
