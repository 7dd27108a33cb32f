use eframe::egui;

use crate::{
    core::{
        summarize,
        ExpansionState,
        WorksheetController,
    },
    gui::{
        actions::{
            ActionQueue,
            UiAction,
        },
        components::collapsible_section,
        theme::Theme,
    },
};

/// Header id salt for summary sections, distinct from the form's.
pub const SUMMARY_SECTION_SALT: &str = "summary";

pub fn saved_responses(
    ui: &mut egui::Ui,
    controller: &WorksheetController,
    expansion: &ExpansionState,
    theme: &Theme,
    actions: &mut ActionQueue,
) {
    let ctx = ui.ctx().clone();

    let Some(snapshot) = controller.saved() else {
        egui::Frame::group(ui.style()).inner_margin(24.0).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.label(theme.description(&ctx, "No responses have been saved yet."));
                ui.add_space(6.0);
                ui.label(
                    "Fill out the form below and click \"Save Framework Responses\" to save your work.",
                );
            });
        });
        return;
    };

    ui.horizontal(|ui| {
        ui.heading("Your Saved Responses");
        ui.label(theme.description(
            &ctx,
            &format!("saved {}", snapshot.saved_at.format("%H:%M:%S")),
        ));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.add_enabled(controller.can_export(), egui::Button::new("⬇ Download Responses")).clicked()
            {
                actions.push(UiAction::Export);
            }
        });
    });
    ui.add_space(8.0);

    for section in summarize(controller.schema(), &snapshot.answers) {
        let clicked = collapsible_section(
            ui,
            theme,
            SUMMARY_SECTION_SALT,
            section.number,
            section.title,
            None,
            expansion.is_expanded(section.number),
            |ui| {
                for entry in &section.entries {
                    ui.label(egui::RichText::new(entry.label).strong());
                    egui::Frame::new()
                        .fill(ui.visuals().faint_bg_color)
                        .inner_margin(egui::Margin::same(8))
                        .corner_radius(4.0)
                        .show(ui, |ui| {
                            ui.set_width(ui.available_width());
                            ui.label(&entry.value);
                        });
                    ui.add_space(8.0);
                }
            },
        );

        if clicked {
            actions.push(UiAction::ToggleSummarySection(section.number));
        }
        ui.add_space(8.0);
    }
}
