use eframe::egui;

use crate::gui::theme::Theme;

/// Operations that block the whole window while they run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusyReason {
    Connecting,
    SavingMatches,
}

impl BusyReason {
    fn message(self) -> &'static str {
        match self {
            BusyReason::Connecting => "Connecting to the restaurant server...",
            BusyReason::SavingMatches => "Saving your matches...",
        }
    }
}

/// Dimmed spinner layer. Stays up while any reason is still pending and
/// shows the most recent one.
pub struct MessageOverlay {
    pending: Vec<BusyReason>,
}

impl MessageOverlay {
    pub fn new() -> Self {
        Self { pending: vec![BusyReason::Connecting] }
    }

    pub fn begin(&mut self, reason: BusyReason) {
        if !self.pending.contains(&reason) {
            self.pending.push(reason);
        }
    }

    pub fn end(&mut self, reason: BusyReason) {
        self.pending.retain(|r| *r != reason);
    }

    pub fn is_active(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn show(&self, ctx: &egui::Context, theme: &Theme) {
        let Some(reason) = self.pending.last() else {
            return;
        };

        let screen = ctx.screen_rect();
        egui::Area::new(egui::Id::new("message_overlay"))
            .order(egui::Order::Foreground)
            .fixed_pos(screen.min)
            .show(ctx, |ui| {
                ui.painter().rect_filled(screen, 0.0, egui::Color32::from_black_alpha(120));
                // Swallow clicks meant for the screen underneath
                ui.allocate_rect(screen, egui::Sense::click());

                let frame = egui::Frame::window(ui.style())
                    .stroke(egui::Stroke::new(2.0, theme.accent(ui.ctx())))
                    .inner_margin(16.0);
                let card = egui::Rect::from_center_size(screen.center(), egui::vec2(260.0, 72.0));
                ui.scope_builder(egui::UiBuilder::new().max_rect(card), |ui| {
                    frame.show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.spinner();
                            ui.label(reason.message());
                        });
                    });
                });
            });
    }
}

impl Default for MessageOverlay {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_tracks_each_reason() {
        let mut overlay = MessageOverlay::new();
        assert!(overlay.is_active());

        overlay.begin(BusyReason::SavingMatches);
        overlay.begin(BusyReason::SavingMatches);
        overlay.end(BusyReason::Connecting);
        assert!(overlay.is_active());

        overlay.end(BusyReason::SavingMatches);
        assert!(!overlay.is_active());
    }
}
