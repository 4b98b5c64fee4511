use std::io;
use std::path::{Path, PathBuf};

/// Frame sizes of the full application icon container, largest first.
pub const ICO_SIZES: [u32; 6] = [256, 128, 64, 48, 32, 16];
/// Frame sizes of the tray icon containers.
pub const TRAY_SIZES: [u32; 4] = [64, 48, 32, 16];
/// Edge length of the flat PNG variants in the assets directory.
pub const PNG_SIZE: u32 = 512;
/// Sources narrower than this are upscaled before deriving variants.
pub const MIN_WORKING_SIZE: u32 = 512;

pub const LAUNCHER_DENSITIES: [(&str, u32); 5] = [
    ("mipmap-mdpi", 48),
    ("mipmap-hdpi", 72),
    ("mipmap-xhdpi", 96),
    ("mipmap-xxhdpi", 144),
    ("mipmap-xxxhdpi", 192),
];

pub const NOTIFICATION_DENSITIES: [(&str, u32); 5] = [
    ("drawable-mdpi", 24),
    ("drawable-hdpi", 36),
    ("drawable-xhdpi", 48),
    ("drawable-xxhdpi", 72),
    ("drawable-xxxhdpi", 96),
];

/// TV banner: (density folder, width, height)
pub const BANNER: (&str, u32, u32) = ("mipmap-xhdpi", 320, 180);
pub const BANNER_BACKGROUND: [u8; 4] = [32, 32, 32, 255];
pub const BANNER_MARGIN: u32 = 10;

pub const MACOS_ICONS: [(&str, u32); 7] = [
    ("app_icon_16.png", 16),
    ("app_icon_32.png", 32),
    ("app_icon_64.png", 64),
    ("app_icon_128.png", 128),
    ("app_icon_256.png", 256),
    ("app_icon_512.png", 512),
    ("app_icon_1024.png", 1024),
];

/// Project layout the generator reads from and writes into.
#[derive(Debug, Clone)]
pub struct Config {
    pub root: PathBuf,
}

impl Config {
    pub fn for_project(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn from_current_dir() -> Result<Self, io::Error> {
        Ok(Self::for_project(std::env::current_dir()?))
    }

    pub fn assets_dir(&self) -> PathBuf {
        self.root.join("assets").join("images")
    }

    pub fn source_icon(&self) -> PathBuf {
        self.assets_dir().join("icon.ico")
    }

    pub fn windows_res_dir(&self) -> PathBuf {
        self.root.join("windows").join("runner").join("resources")
    }

    pub fn android_res_dir(&self) -> PathBuf {
        join_all(&self.root, &["android", "app", "src", "main", "res"])
    }

    pub fn macos_iconset_dir(&self) -> PathBuf {
        join_all(
            &self.root,
            &["macos", "Runner", "Assets.xcassets", "AppIcon.appiconset"],
        )
    }
}

fn join_all(base: &Path, parts: &[&str]) -> PathBuf {
    parts.iter().fold(base.to_path_buf(), |p, part| p.join(part))
}
