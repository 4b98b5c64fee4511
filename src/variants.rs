use image::RgbaImage;

use crate::models::IconSet;

/// Solid white silhouette carrying the source alpha.
pub fn make_white(img: &RgbaImage) -> RgbaImage {
    silhouette(img, [255, 255, 255])
}

/// Solid black silhouette carrying the source alpha.
pub fn make_black(img: &RgbaImage) -> RgbaImage {
    silhouette(img, [0, 0, 0])
}

/// Dimmed copy: alpha halved, color untouched.
pub fn make_stop(img: &RgbaImage) -> RgbaImage {
    let mut out = img.clone();
    for px in out.chunks_exact_mut(4) {
        px[3] /= 2;
    }
    out
}

pub fn derive(icon: RgbaImage) -> IconSet {
    let white = make_white(&icon);
    let black = make_black(&icon);
    let stop_white = make_stop(&white);
    let stop_black = make_stop(&black);
    IconSet { icon, white, black, stop_white, stop_black }
}

fn silhouette(img: &RgbaImage, rgb: [u8; 3]) -> RgbaImage {
    let mut out = img.clone();
    for px in out.chunks_exact_mut(4) {
        px[..3].copy_from_slice(&rgb);
    }
    out
}
