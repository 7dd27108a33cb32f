use std::ops::RangeInclusive;

use serde::{
    Deserialize,
    Serialize,
};

use crate::core::export::DEFAULT_PRODUCT;

pub const SETTINGS_FILE: &str = "settings.json";
pub const DEFAULT_ZOOM: f32 = 1.2;
pub const ZOOM_RANGE: RangeInclusive<f32> = 0.75..=2.5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsData {
    /// Prefix of the exported file name.
    pub product_name: String,
    pub dark_mode: bool,
    pub zoom: f32,
    /// Folder the save dialog opens in.
    pub last_export_dir: Option<String>,
}

impl SettingsData {
    pub fn new() -> Self {
        Self {
            product_name: DEFAULT_PRODUCT.to_string(),
            dark_mode: true,
            zoom: DEFAULT_ZOOM,
            last_export_dir: None,
        }
    }

    /// Pulls hand-edited values back into range before they reach egui.
    pub fn sanitized(mut self) -> Self {
        self.zoom = if self.zoom.is_finite() {
            self.zoom.clamp(*ZOOM_RANGE.start(), *ZOOM_RANGE.end())
        } else {
            DEFAULT_ZOOM
        };
        self
    }

    pub fn export_file_name(&self) -> String {
        crate::core::export::file_name(&self.product_name)
    }
}

impl Default for SettingsData {
    fn default() -> Self {
        Self::new()
    }
}
