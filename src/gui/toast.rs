use std::time::{
    Duration,
    Instant,
};

use eframe::egui;

use crate::{
    core::NoticeKind,
    gui::theme::Theme,
};

const TOAST_DURATION: Duration = Duration::from_secs(3);
const TOAST_WIDTH: f32 = 320.0;

struct Toast {
    kind: NoticeKind,
    message: String,
    shown_at: Instant,
}

/// Transient notifications stacked in the bottom-right corner.
#[derive(Default)]
pub struct Toasts {
    toasts: Vec<Toast>,
}

impl Toasts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: NoticeKind, message: impl Into<String>) {
        self.toasts.push(Toast { kind, message: message.into(), shown_at: Instant::now() });
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(NoticeKind::Success, message);
    }

    pub fn show(&mut self, ctx: &egui::Context, theme: &Theme) {
        self.toasts.retain(|t| t.shown_at.elapsed() < TOAST_DURATION);
        if self.toasts.is_empty() {
            return;
        }

        egui::Area::new(egui::Id::new("toasts"))
            .order(egui::Order::Foreground)
            .anchor(egui::Align2::RIGHT_BOTTOM, egui::Vec2::new(-16.0, -16.0))
            .show(ctx, |ui| {
                ui.set_width(TOAST_WIDTH);
                for toast in &self.toasts {
                    let (icon, color) = match toast.kind {
                        NoticeKind::Success => ("✔", theme.green(ctx)),
                        NoticeKind::Warning => ("⚠", theme.orange(ctx)),
                    };

                    egui::Frame::popup(ui.style()).stroke(egui::Stroke::new(1.5, color)).show(
                        ui,
                        |ui| {
                            ui.horizontal(|ui| {
                                ui.label(egui::RichText::new(icon).color(color).size(18.0));
                                ui.label(&toast.message);
                            });
                        },
                    );
                    ui.add_space(6.0);
                }
            });

        if let Some(next_expiry) =
            self.toasts.iter().map(|t| TOAST_DURATION.saturating_sub(t.shown_at.elapsed())).min()
        {
            ctx.request_repaint_after(next_expiry);
        }
    }
}
