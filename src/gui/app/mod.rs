mod modals;

use std::path::{
    Path,
    PathBuf,
};

use eframe::egui;
use modals::Modals;

use super::{
    actions::{
        ActionQueue,
        Page,
        UiAction,
    },
    modal::{
        confirmation_dialog,
        ModalResult,
    },
    overview::overview,
    saved_responses::saved_responses,
    settings::{
        data::SETTINGS_FILE,
        SettingsData,
    },
    theme::{
        apply_dark_mode,
        set_theme,
        Theme,
    },
    toast::Toasts,
    top_bar::TopBar,
    worksheet_view::worksheet_form,
};
use crate::{
    core::{
        export::write_export,
        ExpansionState,
        FieldSchema,
        WorksheetController,
        WorksheetError,
        WorksheetEvent,
    },
    persistence::{
        get_data_file_path,
        load_json_at_or_default,
        save_json_at,
    },
};

const CONTENT_MAX_WIDTH: f32 = 820.0;
const DOWNLOADED_MESSAGE: &str = "Responses downloaded successfully!";
const START_OVER_MESSAGE: &str =
    "Clear every answer in the form? Your saved responses are kept until you save again.";

pub struct WorksheetApp {
    // Worksheet
    pub controller: WorksheetController,
    pub summary_expansion: ExpansionState,

    // Configuration
    pub settings: SettingsData,
    settings_path: PathBuf,

    // UI State
    pub page: Page,
    pub theme: Theme,
    pub toasts: Toasts,
    pub actions: ActionQueue,
    scroll_to_top: bool,

    // Modals
    pub modals: Modals,
}

impl WorksheetApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings_path = get_data_file_path(SETTINGS_FILE);
        let settings = load_json_at_or_default::<SettingsData>(&settings_path).sanitized();
        tracing::info!(path = %settings_path.display(), "Settings loaded");

        let app = Self::with_settings(FieldSchema::technopolis(), settings, settings_path);

        set_theme(&cc.egui_ctx, &app.theme);
        apply_dark_mode(&cc.egui_ctx, app.settings.dark_mode);
        cc.egui_ctx.set_zoom_factor(app.settings.zoom);

        app
    }

    pub fn with_settings(schema: FieldSchema, settings: SettingsData, settings_path: PathBuf) -> Self {
        Self {
            controller: WorksheetController::new(schema),
            summary_expansion: ExpansionState::default(),
            settings,
            settings_path,
            page: Page::default(),
            theme: Theme::default(),
            toasts: Toasts::new(),
            actions: ActionQueue::new(),
            scroll_to_top: false,
            modals: Modals::default(),
        }
    }

    fn save_settings(&self) {
        if let Err(e) = save_json_at(&self.settings, &self.settings_path) {
            tracing::error!(error = %e, "Failed to save settings");
        }
    }

    pub fn process_actions(&mut self, ctx: &egui::Context) {
        let actions: Vec<UiAction> = self.actions.drain().collect();
        for action in actions {
            self.handle_action(action, ctx);
        }
        self.handle_worksheet_events();
    }

    fn handle_action(&mut self, action: UiAction, ctx: &egui::Context) {
        match action {
            UiAction::Navigate(page) => {
                if self.page != page {
                    self.page = page;
                    self.scroll_to_top = true;
                }
            }
            UiAction::SetField { id, value } => {
                if let Err(e) = self.controller.set_field(id, value) {
                    tracing::error!(error = %e, "Rejected field edit");
                }
            }
            UiAction::ToggleSection(number) => self.controller.toggle_section(number),
            UiAction::ExpandAll => self.controller.expand_all(),
            UiAction::CollapseAll => self.controller.collapse_all(),
            UiAction::Save => {
                // Outcome is reported through the controller's events.
                let _ = self.controller.save();
            }
            UiAction::StartOver => self.modals.start_over.open(),
            UiAction::ToggleSummarySection(number) => self.summary_expansion.toggle(number),
            UiAction::Export => self.export_responses(),
            UiAction::OpenSettings => self.modals.settings.open_settings(self.settings.clone()),
            UiAction::ToggleDarkMode => {
                self.settings.dark_mode = !self.settings.dark_mode;
                apply_dark_mode(ctx, self.settings.dark_mode);
                self.save_settings();
            }
        }
    }

    fn handle_worksheet_events(&mut self) {
        for event in self.controller.drain_events() {
            match event {
                WorksheetEvent::Notify(kind, message) => self.toasts.push(kind, message),
                WorksheetEvent::ScrollToTop => self.scroll_to_top = true,
            }
        }
    }

    fn export_responses(&mut self) {
        let bytes = match self.controller.export() {
            Ok(bytes) => bytes,
            Err(WorksheetError::NothingToExport) => {
                tracing::debug!("Export requested with nothing saved");
                return;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to serialize responses");
                self.modals.error.show_error("Export Error", &e);
                return;
            }
        };

        let mut dialog = rfd::FileDialog::new()
            .set_file_name(self.settings.export_file_name())
            .add_filter("JSON", &["json"]);
        if let Some(dir) = &self.settings.last_export_dir {
            dialog = dialog.set_directory(dir);
        }

        let Some(path) = dialog.save_file() else {
            tracing::debug!("Export cancelled");
            return;
        };

        self.finish_export(&path, &bytes);
    }

    fn finish_export(&mut self, path: &Path, bytes: &[u8]) {
        match write_export(path, bytes) {
            Ok(()) => {
                self.toasts.success(DOWNLOADED_MESSAGE);
                if let Some(dir) = path.parent() {
                    self.settings.last_export_dir = Some(dir.display().to_string());
                    self.save_settings();
                }
            }
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "Failed to write export");
                self.modals.error.show_error("Download Failed", &e);
            }
        }
    }

    fn show_modals(&mut self, ctx: &egui::Context) {
        self.modals.error.show(ctx);

        if let Some(settings) = self.modals.settings.show(ctx) {
            if settings.dark_mode != self.settings.dark_mode {
                apply_dark_mode(ctx, settings.dark_mode);
            }
            if settings.zoom != self.settings.zoom {
                ctx.set_zoom_factor(settings.zoom);
            }
            self.settings = settings;
            self.save_settings();
            tracing::info!("Settings updated");
        }

        if let Some(ModalResult::Confirmed(())) =
            confirmation_dialog(&mut self.modals.start_over, ctx, START_OVER_MESSAGE)
        {
            self.controller.reset();
            self.scroll_to_top = true;
        }
    }

    fn show_page(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let mut scroll = egui::ScrollArea::vertical().id_salt(self.page).auto_shrink(false);
            if std::mem::take(&mut self.scroll_to_top) {
                scroll = scroll.vertical_scroll_offset(0.0);
            }

            scroll.show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.set_max_width(CONTENT_MAX_WIDTH);
                    ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| match self.page {
                        Page::Overview => {
                            overview(ui, self.controller.schema(), &self.theme, &mut self.actions)
                        }
                        Page::Worksheet => self.worksheet_page(ui),
                    });
                });
            });
        });
    }

    fn worksheet_page(&mut self, ui: &mut egui::Ui) {
        ui.add_space(16.0);
        if ui.button("⬅ Back to Overview").clicked() {
            self.actions.push(UiAction::Navigate(Page::Overview));
        }
        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new("Interactive Framework Worksheet").size(28.0).strong());
            ui.label(self.theme.description(
                ui.ctx(),
                "Complete each section of the framework to create your own innovation strategy",
            ));
        });
        ui.add_space(20.0);

        saved_responses(
            ui,
            &self.controller,
            &self.summary_expansion,
            &self.theme,
            &mut self.actions,
        );
        ui.add_space(20.0);
        worksheet_form(ui, &self.controller, &self.theme, &mut self.actions);
        ui.add_space(24.0);
    }
}

impl eframe::App for WorksheetApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        TopBar::show(
            ctx,
            self.page,
            self.controller.can_export(),
            self.settings.dark_mode,
            &mut self.actions,
        );

        self.show_page(ctx);
        self.toasts.show(ctx, &self.theme);
        self.show_modals(ctx);
        self.process_actions(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gui::{
        components::section_header_id,
        saved_responses::SUMMARY_SECTION_SALT,
        worksheet_view::FORM_SECTION_SALT,
    };

    fn test_app(dir: &tempfile::TempDir) -> WorksheetApp {
        WorksheetApp::with_settings(
            FieldSchema::technopolis(),
            SettingsData::new(),
            dir.path().join(SETTINGS_FILE),
        )
    }

    fn fill_all(app: &mut WorksheetApp) {
        let ids: Vec<&'static str> = app.controller.schema().fields().map(|f| f.id).collect();
        for id in ids {
            app.actions.push(UiAction::SetField { id, value: format!("{} answer", id) });
        }
    }

    #[test]
    fn test_save_action_scrolls_and_notifies() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(&dir);
        let ctx = egui::Context::default();

        fill_all(&mut app);
        app.actions.push(UiAction::Save);
        app.process_actions(&ctx);

        assert!(app.controller.saved().is_some());
        assert!(app.scroll_to_top);
        assert!(app.actions.is_empty());
    }

    #[test]
    fn test_failed_save_keeps_store_empty() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(&dir);
        let ctx = egui::Context::default();

        app.actions.push(UiAction::Save);
        app.process_actions(&ctx);

        assert!(app.controller.saved().is_none());
        assert!(!app.scroll_to_top);
        assert_eq!(app.controller.errors().len(), 27);
    }

    #[test]
    fn test_form_and_summary_expansion_are_independent() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(&dir);
        let ctx = egui::Context::default();

        app.actions.push(UiAction::ToggleSection(2));
        app.actions.push(UiAction::ToggleSummarySection(1));
        app.process_actions(&ctx);

        assert!(app.controller.is_expanded(2));
        assert!(app.controller.is_expanded(1));
        assert!(!app.summary_expansion.is_expanded(1));
    }

    #[test]
    fn test_navigation_scrolls_only_on_change() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(&dir);
        let ctx = egui::Context::default();

        app.actions.push(UiAction::Navigate(Page::Overview));
        app.process_actions(&ctx);
        assert!(!app.scroll_to_top);

        app.actions.push(UiAction::Navigate(Page::Worksheet));
        app.process_actions(&ctx);
        assert_eq!(app.page, Page::Worksheet);
        assert!(app.scroll_to_top);
    }

    #[test]
    fn test_finish_export_writes_file_and_remembers_folder() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(&dir);
        let ctx = egui::Context::default();

        fill_all(&mut app);
        app.actions.push(UiAction::Save);
        app.process_actions(&ctx);

        let path = dir.path().join(app.settings.export_file_name());
        let bytes = app.controller.export().unwrap();
        app.finish_export(&path, &bytes);

        assert_eq!(std::fs::read(&path).unwrap(), bytes);
        assert_eq!(app.settings.last_export_dir, Some(dir.path().display().to_string()));
        let persisted: SettingsData = load_json_at_or_default(&dir.path().join(SETTINGS_FILE));
        assert_eq!(persisted.last_export_dir, app.settings.last_export_dir);
    }

    #[test]
    fn test_toggle_dark_mode_persists() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(&dir);
        let ctx = egui::Context::default();

        app.actions.push(UiAction::ToggleDarkMode);
        app.process_actions(&ctx);

        let persisted: SettingsData = load_json_at_or_default(&dir.path().join(SETTINGS_FILE));
        assert!(!persisted.dark_mode);
    }

    fn run_worksheet_frame(
        app: &mut WorksheetApp,
        ctx: &egui::Context,
        time: f64,
        events: Vec<egui::Event>,
    ) {
        let input = egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(
                egui::Pos2::ZERO,
                egui::vec2(1024.0, 4000.0),
            )),
            time: Some(time),
            events,
            ..Default::default()
        };
        let _ = ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| app.worksheet_page(ui));
        });
    }

    /// Draws the saved summary and the form together, clicks one header and
    /// returns the actions the page queued.
    fn click_header(id_salt: &str, number: u8) -> Vec<UiAction> {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(&dir);
        let ctx = egui::Context::default();

        fill_all(&mut app);
        app.actions.push(UiAction::Save);
        app.process_actions(&ctx);
        assert!(app.controller.saved().is_some());

        run_worksheet_frame(&mut app, &ctx, 0.0, Vec::new());
        let summary = ctx.read_response(section_header_id(SUMMARY_SECTION_SALT, number)).unwrap();
        let form = ctx.read_response(section_header_id(FORM_SECTION_SALT, number)).unwrap();
        assert!(!summary.rect.intersects(form.rect));

        let pos = ctx.read_response(section_header_id(id_salt, number)).unwrap().rect.center();
        let button = |pressed| egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed,
            modifiers: egui::Modifiers::NONE,
        };
        run_worksheet_frame(&mut app, &ctx, 0.1, vec![egui::Event::PointerMoved(pos)]);
        run_worksheet_frame(&mut app, &ctx, 0.2, vec![button(true)]);
        run_worksheet_frame(&mut app, &ctx, 0.3, vec![button(false)]);

        app.actions.drain().collect()
    }

    #[test]
    fn test_summary_header_click_toggles_only_summary() {
        assert_eq!(click_header(SUMMARY_SECTION_SALT, 1), vec![UiAction::ToggleSummarySection(1)]);
    }

    #[test]
    fn test_form_header_click_toggles_only_form() {
        assert_eq!(click_header(FORM_SECTION_SALT, 1), vec![UiAction::ToggleSection(1)]);
    }
}
