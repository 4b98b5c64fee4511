//! Derives the FoxCloud icon variants from the master `icon.ico` and writes
//! them into the asset trees of each platform.

pub mod config;
pub mod emit;
pub mod error;
mod helpers;
pub mod loader;
pub mod logger;
pub mod models;
pub mod platforms;
pub mod variants;

#[cfg(test)]
mod test_support;

use config::Config;
use error::IconError;
use logger::log_line;
use models::RunSummary;

/// Load the source icon, derive its variants and emit every platform target
/// in turn. The first failure aborts the run; files written before it stay.
pub fn run(cfg: &Config) -> Result<RunSummary, IconError> {
    let icon = loader::load_icon(&cfg.source_icon())?;
    log_line(&format!("Loaded icon: {}x{} RGBA", icon.width(), icon.height()));

    let set = variants::derive(icon);
    let mut summary = RunSummary::default();

    platforms::generate_assets_images(cfg, &set, &mut summary)?;
    platforms::generate_windows_icon(cfg, &set, &mut summary)?;
    platforms::generate_android_icons(cfg, &set, &mut summary)?;
    platforms::generate_macos_icons(cfg, &set, &mut summary)?;

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LAUNCHER_DENSITIES, NOTIFICATION_DENSITIES};
    use crate::test_support::{ico_sizes, project_with_icon, read_png};

    #[test]
    fn opaque_square_end_to_end() {
        let (_tmp, cfg) = project_with_icon(256);
        let summary = run(&cfg).unwrap();

        let assets = cfg.assets_dir();
        let icon = read_png(&assets.join("icon.png"));
        assert_eq!(icon.dimensions(), (512, 512));
        assert!(icon.pixels().all(|p| p[3] == 255));

        let stop_white = read_png(&assets.join("icon_stop_white.png"));
        assert_eq!(stop_white.dimensions(), (512, 512));
        assert!(stop_white.pixels().all(|p| {
            p[0] == 255 && p[1] == 255 && p[2] == 255 && p[3].abs_diff(127) <= 1
        }));

        for stem in ["icon_white", "icon_black", "icon_stop_white", "icon_stop_black"] {
            assert_eq!(ico_sizes(&assets.join(format!("{stem}.ico"))), vec![64, 48, 32, 16]);
        }
        assert_eq!(ico_sizes(&assets.join("icon.ico")), vec![256, 128, 64, 48, 32, 16]);
        assert_eq!(
            ico_sizes(&cfg.windows_res_dir().join("app_icon.ico")),
            vec![256, 128, 64, 48, 32, 16]
        );

        let res = cfg.android_res_dir();
        for (folder, size) in LAUNCHER_DENSITIES {
            assert_eq!(read_png(&res.join(folder).join("ic_launcher.png")).dimensions(), (size, size));
        }
        for (folder, _) in NOTIFICATION_DENSITIES {
            assert!(!res.join(folder).exists());
        }
        assert!(!res.join("mipmap-xhdpi").join("ic_banner.png").exists());
        assert!(!cfg.macos_iconset_dir().exists());

        // 5 PNG + 5 ICO + windows + 5 launchers
        assert_eq!(summary, RunSummary { written: 16, skipped: 13 });
    }

    #[test]
    fn rerun_reads_regenerated_icon() {
        let (_tmp, cfg) = project_with_icon(64);
        run(&cfg).unwrap();
        // icon.ico was rewritten with a 256px frame; the second pass must still load it
        let summary = run(&cfg).unwrap();
        assert_eq!(summary.written, 16);
        assert!(!cfg.android_res_dir().join("drawable-mdpi").join("ic.png").exists());
    }

    #[test]
    fn write_failure_aborts_and_keeps_earlier_files() {
        let (_tmp, cfg) = project_with_icon(256);
        // a regular file where the windows resource tree should go
        let blocker = cfg.root.join("windows").join("runner");
        std::fs::create_dir_all(blocker.parent().unwrap()).unwrap();
        std::fs::write(&blocker, b"not a directory").unwrap();

        let err = run(&cfg).unwrap_err();
        assert!(matches!(err, IconError::Io { .. }), "{err:?}");

        let assets = cfg.assets_dir();
        assert!(assets.join("icon.png").exists());
        for stem in ["icon_white", "icon_black", "icon_stop_white", "icon_stop_black"] {
            assert!(assets.join(format!("{stem}.ico")).exists());
        }
        assert!(!cfg.root.join("android").exists());
    }

    #[test]
    fn missing_source_aborts_before_writing() {
        let tmp = tempfile::tempdir().unwrap();
        let cfg = Config::for_project(tmp.path());

        let err = run(&cfg).unwrap_err();
        assert!(err.is_not_found());
        assert!(!cfg.windows_res_dir().exists());
        assert!(!cfg.android_res_dir().exists());
    }
}
