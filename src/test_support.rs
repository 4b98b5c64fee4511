use std::fs::{self, File};
use std::path::Path;

use ico::{IconDir, IconDirEntry, IconImage, ResourceType};
use image::{Rgba, RgbaImage};
use tempfile::TempDir;

use crate::config::Config;

pub fn opaque_square(size: u32, rgb: [u8; 3]) -> RgbaImage {
    RgbaImage::from_pixel(size, size, Rgba([rgb[0], rgb[1], rgb[2], 255]))
}

pub fn write_ico(path: &Path, frames: &[RgbaImage]) {
    let mut dir = IconDir::new(ResourceType::Icon);
    for frame in frames {
        let image = IconImage::from_rgba_data(frame.width(), frame.height(), frame.as_raw().clone());
        dir.add_entry(IconDirEntry::encode(&image).unwrap());
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    dir.write(File::create(path).unwrap()).unwrap();
}

/// Frame widths of an ICO file, in stored order.
pub fn ico_sizes(path: &Path) -> Vec<u32> {
    let dir = IconDir::read(File::open(path).unwrap()).unwrap();
    dir.entries().iter().map(|e| e.width()).collect()
}

pub fn read_png(path: &Path) -> RgbaImage {
    image::open(path).unwrap().to_rgba8()
}

/// Empty project tree with a source icon of the given size.
pub fn project_with_icon(size: u32) -> (TempDir, Config) {
    let tmp = tempfile::tempdir().unwrap();
    let cfg = Config::for_project(tmp.path());
    write_ico(&cfg.source_icon(), &[opaque_square(size, [200, 60, 20])]);
    (tmp, cfg)
}
