//! Per-platform emitters.
//!
//! Assets, launcher icons and the Windows icon are always written. The
//! notification icons, the TV banner and the macOS icon set are only
//! refreshed when the host project already tracks the file.

use std::fs;

use crate::config::{
    BANNER, Config, ICO_SIZES, LAUNCHER_DENSITIES, MACOS_ICONS, NOTIFICATION_DENSITIES, PNG_SIZE,
    TRAY_SIZES,
};
use crate::emit::{compose_banner, save_ico, save_png, write_png};
use crate::error::IconError;
use crate::helpers::{folder_label, format_dims};
use crate::logger::{log_line, log_saved, log_section};
use crate::models::{IconSet, RunSummary};

pub fn generate_assets_images(
    cfg: &Config,
    set: &IconSet,
    summary: &mut RunSummary,
) -> Result<(), IconError> {
    log_section("assets/images/");
    let dir = cfg.assets_dir();

    for (stem, img) in set.named() {
        save_png(img, &dir.join(format!("{stem}.png")), Some(PNG_SIZE))?;
        summary.record_written();
    }

    save_ico(&set.icon, &dir.join("icon.ico"), &ICO_SIZES)?;
    summary.record_written();
    for (stem, img) in set.tinted() {
        save_ico(img, &dir.join(format!("{stem}.ico")), &TRAY_SIZES)?;
        summary.record_written();
    }
    Ok(())
}

pub fn generate_windows_icon(
    cfg: &Config,
    set: &IconSet,
    summary: &mut RunSummary,
) -> Result<(), IconError> {
    log_section("windows/runner/resources/");
    let dir = cfg.windows_res_dir();
    fs::create_dir_all(&dir).map_err(|e| IconError::io(&dir, e))?;
    save_ico(&set.icon, &dir.join("app_icon.ico"), &ICO_SIZES)?;
    summary.record_written();
    Ok(())
}

pub fn generate_android_icons(
    cfg: &Config,
    set: &IconSet,
    summary: &mut RunSummary,
) -> Result<(), IconError> {
    log_section("android mipmap icons");
    let res = cfg.android_res_dir();

    for (folder, size) in LAUNCHER_DENSITIES {
        let dir = res.join(folder);
        fs::create_dir_all(&dir).map_err(|e| IconError::io(&dir, e))?;
        save_png(&set.icon, &dir.join("ic_launcher.png"), Some(size))?;
        summary.record_written();
    }

    // notification icons: white silhouette, only where one already exists
    for (folder, size) in NOTIFICATION_DENSITIES {
        let dir = res.join(folder);
        let target = dir.join("ic.png");
        if dir.exists() && target.exists() {
            save_png(&set.white, &target, Some(size))?;
            summary.record_written();
        } else {
            summary.record_skipped();
        }
    }

    let (folder, width, height) = BANNER;
    let banner_path = res.join(folder).join("ic_banner.png");
    if banner_path.exists() {
        let banner = compose_banner(&set.icon, width, height);
        write_png(&banner, &banner_path)?;
        log_saved(&folder_label(&banner_path), &format_dims(width, height));
        summary.record_written();
    } else {
        summary.record_skipped();
    }
    Ok(())
}

pub fn generate_macos_icons(
    cfg: &Config,
    set: &IconSet,
    summary: &mut RunSummary,
) -> Result<(), IconError> {
    log_section("macOS AppIcon.appiconset");
    let dir = cfg.macos_iconset_dir();
    if !dir.exists() {
        log_line("  macOS icon assets directory not found, skipping");
        for _ in MACOS_ICONS {
            summary.record_skipped();
        }
        return Ok(());
    }

    for (name, size) in MACOS_ICONS {
        let path = dir.join(name);
        if path.exists() {
            save_png(&set.icon, &path, Some(size))?;
            summary.record_written();
        } else {
            summary.record_skipped();
        }
    }
    Ok(())
}
