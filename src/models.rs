use image::RgbaImage;

/// The normalized source icon and the variants derived from it.
#[derive(Debug, Clone)]
pub struct IconSet {
    pub icon: RgbaImage,
    pub white: RgbaImage,
    pub black: RgbaImage,
    pub stop_white: RgbaImage,
    pub stop_black: RgbaImage,
}

impl IconSet {
    /// Every image with the file stem it is published under.
    pub fn named(&self) -> [(&'static str, &RgbaImage); 5] {
        [
            ("icon", &self.icon),
            ("icon_white", &self.white),
            ("icon_black", &self.black),
            ("icon_stop_white", &self.stop_white),
            ("icon_stop_black", &self.stop_black),
        ]
    }

    /// The silhouette variants used for tray icons.
    pub fn tinted(&self) -> [(&'static str, &RgbaImage); 4] {
        let [_, white, black, stop_white, stop_black] = self.named();
        [white, black, stop_white, stop_black]
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub written: usize,
    pub skipped: usize,
}

impl RunSummary {
    pub fn record_written(&mut self) {
        self.written += 1;
    }

    pub fn record_skipped(&mut self) {
        self.skipped += 1;
    }
}
