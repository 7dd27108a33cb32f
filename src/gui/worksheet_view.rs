use eframe::egui;

use crate::{
    core::{
        FieldDef,
        FieldKind,
        SectionDef,
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

/// Header id salt for form sections, distinct from the summary's.
pub const FORM_SECTION_SALT: &str = "form";
const FIELD_SPACING: f32 = 12.0;
const MULTILINE_ROWS: usize = 4;

/// Every section of the form, drawn from the schema.
pub fn worksheet_form(
    ui: &mut egui::Ui,
    controller: &WorksheetController,
    theme: &Theme,
    actions: &mut ActionQueue,
) {
    for section in controller.schema().sections() {
        section_form(ui, controller, section, theme, actions);
        ui.add_space(FIELD_SPACING);
    }

    ui.add_space(FIELD_SPACING);
    ui.vertical_centered(|ui| {
        let button = egui::Button::new(egui::RichText::new("💾 Save Framework Responses").size(16.0))
            .min_size(egui::Vec2::new(260.0, 36.0));
        if ui.add(button).clicked() {
            actions.push(UiAction::Save);
        }
    });
}

fn section_form(
    ui: &mut egui::Ui,
    controller: &WorksheetController,
    section: &SectionDef,
    theme: &Theme,
    actions: &mut ActionQueue,
) {
    let ctx = ui.ctx().clone();
    let error_count = controller.errors().errors_in_section(controller.schema(), section.number);
    let note = (error_count > 0).then(|| {
        egui::RichText::new(format!("{} missing", error_count)).color(theme.red(&ctx)).small()
    });

    let clicked = collapsible_section(
        ui,
        theme,
        FORM_SECTION_SALT,
        section.number,
        section.title,
        note,
        controller.is_expanded(section.number),
        |ui| {
            ui.label(egui::RichText::new(section.heading).size(16.0).strong());
            ui.label(theme.description(&ctx, section.description));
            ui.add_space(FIELD_SPACING);

            for field in &section.fields {
                field_input(ui, controller, field, theme, actions);
                ui.add_space(FIELD_SPACING);
            }
        },
    );

    if clicked {
        actions.push(UiAction::ToggleSection(section.number));
    }
}

fn field_input(
    ui: &mut egui::Ui,
    controller: &WorksheetController,
    field: &FieldDef,
    theme: &Theme,
    actions: &mut ActionQueue,
) {
    let ctx = ui.ctx().clone();
    let error = controller.error(field.id);

    let label = egui::RichText::new(field.label).strong();
    ui.label(if error.is_some() { label.color(theme.red(&ctx)) } else { label });

    let mut value = controller.value(field.id).to_string();
    let edit = match field.kind {
        FieldKind::SingleLine => egui::TextEdit::singleline(&mut value),
        FieldKind::MultiLine => egui::TextEdit::multiline(&mut value).desired_rows(MULTILINE_ROWS),
    }
    .id_salt(field.id)
    .hint_text(field.placeholder)
    .desired_width(f32::INFINITY);

    if ui.add(edit).changed() {
        actions.push(UiAction::SetField { id: field.id, value });
    }

    if let Some(help) = field.help {
        ui.label(theme.description(&ctx, help).small());
    }

    if let Some(message) = error {
        ui.label(egui::RichText::new(message).color(theme.red(&ctx)).small());
    }
}
