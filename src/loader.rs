use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use ico::{IconDir, IconDirEntry};
use image::RgbaImage;

use crate::config::MIN_WORKING_SIZE;
use crate::emit::resample;
use crate::error::IconError;

/// Load the largest frame of an ICO file as RGBA, upscaled to the
/// working size when it is narrower than that.
pub fn load_icon(path: &Path) -> Result<RgbaImage, IconError> {
    let file = File::open(path).map_err(|e| IconError::io(path, e))?;
    let dir = IconDir::read(BufReader::new(file)).map_err(|e| IconError::decode(path, e))?;
    let entry = largest_entry(&dir).ok_or_else(|| IconError::EmptyContainer(path.to_path_buf()))?;
    let frame = entry.decode().map_err(|e| IconError::decode(path, e))?;
    let (width, height) = (frame.width(), frame.height());
    let rgba = RgbaImage::from_raw(width, height, frame.rgba_data().to_vec()).ok_or_else(|| {
        IconError::InvalidFrame { path: path.to_path_buf(), width, height }
    })?;
    Ok(normalize(rgba))
}

/// Widest entry; the earlier one wins on ties.
pub fn largest_entry(dir: &IconDir) -> Option<&IconDirEntry> {
    dir.entries().iter().fold(None, |best, entry| match best {
        Some(b) if b.width() >= entry.width() => Some(b),
        _ => Some(entry),
    })
}

pub fn normalize(img: RgbaImage) -> RgbaImage {
    if img.width() < MIN_WORKING_SIZE {
        resample(&img, MIN_WORKING_SIZE, MIN_WORKING_SIZE)
    } else {
        img
    }
}
