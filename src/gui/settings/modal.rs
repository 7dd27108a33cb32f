use eframe::egui;

use super::data::{
    SettingsData,
    ZOOM_RANGE,
};
use crate::gui::modal::{
    Modal,
    ModalConfig,
    ModalResult,
};

#[derive(Clone, Default)]
pub struct SettingsModalData {
    pub settings: SettingsData,
    pub original_settings: SettingsData,
}

impl SettingsModalData {
    pub fn is_dirty(&self) -> bool {
        self.settings != self.original_settings
    }
}

pub struct SettingsModal {
    modal: Modal<SettingsModalData>,
}

impl SettingsModal {
    pub fn new() -> Self {
        let config = ModalConfig {
            min_size: Some(egui::Vec2::new(420.0, 220.0)),
            centered: true,
            show_overlay: true,
            ..Default::default()
        };

        Self { modal: Modal::new("Settings").with_config(config) }
    }

    pub fn open_settings(&mut self, current_settings: SettingsData) {
        self.modal.data_mut().settings = current_settings.clone();
        self.modal.data_mut().original_settings = current_settings;
        self.modal.open();
    }

    /// Returns the new settings once the user saves them.
    pub fn show(&mut self, ctx: &egui::Context) -> Option<SettingsData> {
        let result = self.modal.show(ctx, |ui, data| {
            egui::Grid::new("settings_grid").num_columns(2).spacing([10.0, 6.0]).show(ui, |ui| {
                ui.label("Product name:");
                ui.text_edit_singleline(&mut data.settings.product_name)
                    .on_hover_text("Used as the prefix of the downloaded file name.");
                ui.end_row();

                ui.label("File name:");
                ui.monospace(data.settings.export_file_name());
                ui.end_row();

                ui.label("Dark mode:");
                ui.checkbox(&mut data.settings.dark_mode, "");
                ui.end_row();

                ui.label("Zoom:");
                ui.add(egui::Slider::new(&mut data.settings.zoom, ZOOM_RANGE).step_by(0.05));
                ui.end_row();
            });

            ui.separator();

            if data.is_dirty() {
                ui.horizontal(|ui| {
                    ui.colored_label(egui::Color32::YELLOW, "⚠");
                    ui.label("Settings have been modified");
                });
                ui.add_space(5.0);
            }

            ui.horizontal(|ui| {
                let is_dirty = data.is_dirty();
                let save_clicked =
                    ui.add_enabled(is_dirty, egui::Button::new("Save Settings")).clicked();
                let close_clicked = ui.button("Close").clicked();
                let reset_clicked = ui.button("Restore Default").clicked();

                if save_clicked {
                    data.original_settings = data.settings.clone();
                    Some(ModalResult::Confirmed(data.clone()))
                } else if reset_clicked {
                    let last_export_dir = data.settings.last_export_dir.clone();
                    data.settings = SettingsData { last_export_dir, ..SettingsData::new() };
                    None
                } else if close_clicked {
                    Some(ModalResult::Cancelled)
                } else {
                    None
                }
            })
            .inner
        });

        match result {
            Some(ModalResult::Confirmed(data)) => Some(data.settings),
            _ => None,
        }
    }
}

impl Default for SettingsModal {
    fn default() -> Self {
        Self::new()
    }
}
