use eframe::egui::{
    self,
    RichText,
};
use egui::{
    epaint::Shadow,
    style::{
        Selection,
        WidgetVisuals,
        Widgets,
    },
    Color32,
    Stroke,
    Visuals,
};

#[derive(Clone)]
pub struct Theme {
    dark: ThemeDetails,
    light: ThemeDetails,
}

impl Default for Theme {
    fn default() -> Self {
        Self::technopolis()
    }
}

impl Theme {
    pub fn technopolis() -> Self {
        Theme { dark: ThemeDetails::technopolis_dark(), light: ThemeDetails::technopolis_light() }
    }

    fn details(&self, ctx: &egui::Context) -> &ThemeDetails {
        if ctx.style().visuals.dark_mode {
            &self.dark
        } else {
            &self.light
        }
    }

    pub fn primary(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).primary
    }

    pub fn secondary(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).secondary
    }

    pub fn muted(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).muted
    }

    pub fn green(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).green
    }

    pub fn orange(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).orange
    }

    pub fn red(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).red
    }

    /// Tinted background used behind section headers.
    pub fn header_fill(&self, ctx: &egui::Context) -> Color32 {
        let details = self.details(ctx);
        blend_colors(details.surface, details.primary, 0.08)
    }

    pub fn description(&self, ctx: &egui::Context, content: &str) -> RichText {
        RichText::new(content).color(self.muted(ctx))
    }
}

#[derive(Clone)]
pub struct ThemeDetails {
    background: Color32,
    surface: Color32,
    foreground: Color32,
    muted: Color32,
    selection: Color32,
    border: Color32,
    primary: Color32,
    secondary: Color32,
    red: Color32,
    orange: Color32,
    green: Color32,
}

impl ThemeDetails {
    fn technopolis_dark() -> Self {
        Self {
            background: Color32::from_rgb(17, 24, 39),
            surface: Color32::from_rgb(31, 41, 55),
            foreground: Color32::from_rgb(243, 244, 246),
            muted: Color32::from_rgb(156, 163, 175),
            selection: Color32::from_rgb(55, 65, 81),
            border: Color32::from_rgb(55, 65, 81),
            primary: Color32::from_rgb(96, 165, 250),
            secondary: Color32::from_rgb(52, 211, 153),
            red: Color32::from_rgb(248, 113, 113),
            orange: Color32::from_rgb(251, 191, 36),
            green: Color32::from_rgb(74, 222, 128),
        }
    }

    fn technopolis_light() -> Self {
        Self {
            background: Color32::from_rgb(249, 250, 251),
            surface: Color32::from_rgb(255, 255, 255),
            foreground: Color32::from_rgb(17, 24, 39),
            muted: Color32::from_rgb(107, 114, 128),
            selection: Color32::from_rgb(219, 234, 254),
            border: Color32::from_rgb(229, 231, 235),
            primary: Color32::from_rgb(37, 99, 235),
            secondary: Color32::from_rgb(5, 150, 105),
            red: Color32::from_rgb(220, 38, 38),
            orange: Color32::from_rgb(217, 119, 6),
            green: Color32::from_rgb(22, 163, 74),
        }
    }
}

pub fn set_theme(ctx: &egui::Context, theme: &Theme) {
    set_theme_variant(ctx, &theme.dark, true);
    set_theme_variant(ctx, &theme.light, false);
}

pub fn apply_dark_mode(ctx: &egui::Context, dark_mode: bool) {
    let (theme, preference) = if dark_mode {
        (egui::Theme::Dark, egui::ThemePreference::Dark)
    } else {
        (egui::Theme::Light, egui::ThemePreference::Light)
    };
    ctx.set_theme(theme);
    ctx.options_mut(|o| o.theme_preference = preference);
}

pub fn blend_colors(color_a: Color32, color_b: Color32, t: f32) -> Color32 {
    let blend_channel = |a: u8, b: u8| ((1.0 - t) * (a as f32) + t * (b as f32)).round() as u8;
    Color32::from_rgba_unmultiplied(
        blend_channel(color_a.r(), color_b.r()),
        blend_channel(color_a.g(), color_b.g()),
        blend_channel(color_a.b(), color_b.b()),
        blend_channel(color_a.a(), color_b.a()),
    )
}

fn set_theme_variant(ctx: &egui::Context, theme: &ThemeDetails, is_dark: bool) {
    let (default, variant) = match is_dark {
        true => (Visuals::dark(), egui::Theme::Dark),
        false => (Visuals::light(), egui::Theme::Light),
    };

    ctx.set_visuals_of(
        variant,
        Visuals {
            dark_mode: is_dark,
            widgets: Widgets {
                noninteractive: WidgetVisuals {
                    bg_fill: theme.background,
                    weak_bg_fill: theme.surface,
                    bg_stroke: Stroke { color: theme.border, ..default.widgets.noninteractive.bg_stroke },
                    fg_stroke: Stroke {
                        color: theme.foreground,
                        ..default.widgets.noninteractive.fg_stroke
                    },
                    ..default.widgets.noninteractive
                },
                inactive: WidgetVisuals {
                    bg_fill: theme.surface,
                    weak_bg_fill: theme.surface,
                    bg_stroke: Stroke { color: theme.border, ..default.widgets.inactive.bg_stroke },
                    fg_stroke: Stroke { color: theme.foreground, ..default.widgets.inactive.fg_stroke },
                    ..default.widgets.inactive
                },
                hovered: WidgetVisuals {
                    bg_fill: theme.selection,
                    weak_bg_fill: theme.selection,
                    bg_stroke: Stroke { color: theme.primary, ..default.widgets.hovered.bg_stroke },
                    fg_stroke: Stroke { color: theme.foreground, ..default.widgets.hovered.fg_stroke },
                    ..default.widgets.hovered
                },
                active: WidgetVisuals {
                    bg_fill: theme.selection,
                    weak_bg_fill: theme.selection,
                    bg_stroke: Stroke { color: theme.primary, ..default.widgets.active.bg_stroke },
                    fg_stroke: Stroke { color: theme.foreground, ..default.widgets.active.fg_stroke },
                    ..default.widgets.active
                },
                open: WidgetVisuals {
                    bg_fill: theme.surface,
                    weak_bg_fill: theme.surface,
                    bg_stroke: Stroke { color: theme.primary, ..default.widgets.open.bg_stroke },
                    fg_stroke: Stroke { color: theme.foreground, ..default.widgets.open.fg_stroke },
                    ..default.widgets.open
                },
            },
            selection: Selection {
                bg_fill: theme.selection,
                stroke: Stroke { color: theme.foreground, ..default.selection.stroke },
            },
            hyperlink_color: theme.primary,
            faint_bg_color: theme.surface,
            extreme_bg_color: theme.background,
            code_bg_color: theme.surface,
            error_fg_color: theme.red,
            warn_fg_color: theme.orange,
            window_shadow: Shadow { color: theme.border, ..default.window_shadow },
            window_fill: theme.surface,
            window_stroke: Stroke { color: theme.border, ..default.window_stroke },
            panel_fill: theme.background,
            ..default
        },
    );
}
