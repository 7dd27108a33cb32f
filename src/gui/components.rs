use eframe::egui;

use crate::gui::theme::Theme;

const BADGE_SIZE: f32 = 28.0;

/// Numbered circle shown next to section titles.
pub fn number_badge(ui: &mut egui::Ui, theme: &Theme, number: u8) {
    let (rect, _) = ui.allocate_exact_size(egui::Vec2::splat(BADGE_SIZE), egui::Sense::hover());
    let fill = theme.primary(ui.ctx());
    ui.painter().circle_filled(rect.center(), BADGE_SIZE / 2.0, fill);
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        number.to_string(),
        egui::FontId::proportional(15.0),
        egui::Color32::WHITE,
    );
}

/// Click id of a section header. Views that list the same sections on one page
/// must pass distinct salts.
pub fn section_header_id(id_salt: &str, number: u8) -> egui::Id {
    egui::Id::new(("section_header", id_salt, number))
}

/// A bordered, collapsible section with a clickable numbered header.
/// Returns true when the header was clicked; the caller owns the expanded flag.
pub fn collapsible_section(
    ui: &mut egui::Ui,
    theme: &Theme,
    id_salt: &str,
    number: u8,
    title: &str,
    badge_note: Option<egui::RichText>,
    expanded: bool,
    add_body: impl FnOnce(&mut egui::Ui),
) -> bool {
    ui.push_id((id_salt, number), |ui| {
        egui::Frame::group(ui.style())
            .inner_margin(0.0)
            .corner_radius(8.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());

                let header = egui::Frame::new()
                    .fill(theme.header_fill(ui.ctx()))
                    .inner_margin(egui::Margin::same(12))
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.horizontal(|ui| {
                            number_badge(ui, theme, number);
                            ui.add_space(6.0);
                            ui.label(egui::RichText::new(title).size(18.0).strong());
                            if let Some(note) = badge_note {
                                ui.label(note);
                            }
                            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                                ui.label(if expanded { "⏶" } else { "⏷" });
                            });
                        });
                    });

                let clicked = ui
                    .interact(header.response.rect, section_header_id(id_salt, number), egui::Sense::click())
                    .on_hover_cursor(egui::CursorIcon::PointingHand)
                    .clicked();

                if expanded {
                    egui::Frame::new().inner_margin(egui::Margin::same(16)).show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        add_body(ui);
                    });
                }

                clicked
            })
            .inner
    })
    .inner
}
