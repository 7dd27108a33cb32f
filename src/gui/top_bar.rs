use eframe::egui::{
    self,
    containers,
};

use crate::gui::actions::{
    ActionQueue,
    Page,
    UiAction,
};

pub struct TopBar;

impl TopBar {
    pub fn show(
        ctx: &egui::Context,
        page: Page,
        can_export: bool,
        dark_mode: bool,
        actions: &mut ActionQueue,
    ) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            containers::menu::Bar::new().ui(ui, |ui| {
                let theme_icon = if dark_mode { "☀" } else { "🌙" };
                if ui.button(theme_icon).on_hover_text("Toggle dark mode").clicked() {
                    actions.push(UiAction::ToggleDarkMode);
                }

                ui.menu_button("File", |ui| {
                    if ui.add_enabled(can_export, egui::Button::new("Download Responses")).clicked() {
                        actions.push(UiAction::Export);
                    }
                    if ui.button("Start Over").clicked() {
                        actions.push(UiAction::StartOver);
                    }
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("View", |ui| {
                    if ui.button("Expand All Sections").clicked() {
                        actions.push(UiAction::Navigate(Page::Worksheet));
                        actions.push(UiAction::ExpandAll);
                    }
                    if ui.button("Collapse All Sections").clicked() {
                        actions.push(UiAction::Navigate(Page::Worksheet));
                        actions.push(UiAction::CollapseAll);
                    }
                });

                if ui.button("Settings").clicked() {
                    actions.push(UiAction::OpenSettings);
                }

                ui.separator();

                if ui.selectable_label(page == Page::Overview, "Framework").clicked() {
                    actions.push(UiAction::Navigate(Page::Overview));
                }
                if ui.selectable_label(page == Page::Worksheet, "Interactive Worksheet").clicked() {
                    actions.push(UiAction::Navigate(Page::Worksheet));
                }
            });
        });
    }
}
