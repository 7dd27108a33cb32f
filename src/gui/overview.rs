use eframe::egui;

use crate::{
    core::FieldSchema,
    gui::{
        actions::{
            ActionQueue,
            Page,
            UiAction,
        },
        components::number_badge,
        theme::Theme,
    },
};

const SUMMARY_POINTS: [&str; 8] = [
    "Begin with a clear map of audiences and contexts (Step 1), paying special attention to how people's cognitive and entertainment needs change over time.",
    "Choose a theme that has wide appeal and layering potential (Step 2), then define a design philosophy that works across mediums (Step 3).",
    "Shape the project using creative constraints (Step 4), ensuring longevity and multi-generational scalability.",
    "Translate your core message into cross-platform experiences with tiered complexity (Step 5).",
    "Implement serial or modular release strategies (Step 6) to keep audiences hooked and returning as they age.",
    "Expand reach through partnerships and platforms (Step 7), from docu-streaming deals to educational game publishers, to traveling exhibits.",
    "Integrate physical and digital elements (Step 8) so that audiences can engage anywhere, anytime, at the level that suits them.",
    "Collect analytics and feedback (Step 9), refining each iteration for multi-generational user flows.",
];

/// Landing page describing the nine framework steps.
pub fn overview(ui: &mut egui::Ui, schema: &FieldSchema, theme: &Theme, actions: &mut ActionQueue) {
    let ctx = ui.ctx().clone();

    ui.vertical_centered(|ui| {
        ui.add_space(16.0);
        ui.label(egui::RichText::new("The 9-Step Framework").size(28.0).strong());
        ui.label(theme.description(
            &ctx,
            "A systematic approach for creating engaging, multi-generational educational experiences across various platforms.",
        ));
        ui.add_space(8.0);
        if ui.button("Open the Interactive Worksheet").clicked() {
            actions.push(UiAction::Navigate(Page::Worksheet));
        }
    });
    ui.add_space(24.0);

    for section in schema.sections() {
        ui.horizontal(|ui| {
            number_badge(ui, theme, section.number);
            ui.label(egui::RichText::new(section.title).size(18.0).strong());
        });
        egui::Frame::group(ui.style()).inner_margin(12.0).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new("Goal").strong());
            ui.label(section.goal);
            ui.add_space(6.0);
            ui.label(egui::RichText::new(format!("Tool: {}", section.tool)).color(theme.primary(&ctx)));
            ui.add_space(6.0);
            ui.label(egui::RichText::new("Outcome").strong().color(theme.secondary(&ctx)));
            ui.label(theme.description(&ctx, section.outcome));
        });
        ui.add_space(16.0);
    }

    ui.separator();
    ui.vertical_centered(|ui| {
        ui.label(egui::RichText::new("Bringing It All Together").size(22.0).strong());
    });
    ui.add_space(8.0);
    for point in SUMMARY_POINTS {
        ui.horizontal_wrapped(|ui| {
            ui.label(egui::RichText::new("✔").color(theme.primary(&ctx)));
            ui.label(point);
        });
    }
    ui.add_space(12.0);
    ui.vertical_centered(|ui| {
        if ui.button("Start Implementing The Framework").clicked() {
            actions.push(UiAction::Navigate(Page::Worksheet));
        }
    });
    ui.add_space(24.0);
}
