use std::collections::VecDeque;

use eframe::egui;

use crate::core::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub severity: Severity,
    pub title: String,
    pub message: String,
    pub details: Option<String>,
}

/// Blocking notices, shown one at a time in arrival order.
///
/// Backend failures from several tasks can land in the same frame, so
/// notices queue up instead of replacing each other.
#[derive(Default)]
pub struct ErrorModal {
    queue: VecDeque<Notice>,
}

impl ErrorModal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        !self.queue.is_empty()
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn show_info(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.push(Notice {
            severity: Severity::Info,
            title: title.into(),
            message: message.into(),
            details: None,
        });
    }

    pub fn show_api_error(&mut self, title: impl Into<String>, error: &ApiError) {
        let message = if error.is_retryable() {
            "The server could not be reached. Please try again in a moment."
        } else {
            "The server refused the request."
        };
        self.push(Notice {
            severity: Severity::Error,
            title: title.into(),
            message: message.to_string(),
            details: Some(error.to_string()),
        });
    }

    fn push(&mut self, notice: Notice) {
        // The same failure repeated back to back is shown once
        if self.queue.back() != Some(&notice) {
            self.queue.push_back(notice);
        }
    }

    /// Draws the front notice. Returns `true` on the frame it is dismissed.
    pub fn show(&mut self, ctx: &egui::Context) -> bool {
        let Some(notice) = self.queue.front() else {
            return false;
        };

        let modal = egui::Modal::new(egui::Id::new("error_modal")).show(ctx, |ui| {
            ui.set_width(420.0);

            let (icon, color) = match notice.severity {
                Severity::Info => ("ℹ", ui.visuals().hyperlink_color),
                Severity::Error => ("⚠", ui.visuals().error_fg_color),
            };
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(icon).size(24.0).color(color));
                ui.label(egui::RichText::new(&notice.title).size(18.0).strong());
            });

            ui.add_space(8.0);
            ui.label(&notice.message);

            if let Some(details) = &notice.details {
                ui.add_space(8.0);
                ui.collapsing("Details", |ui| {
                    ui.monospace(details);
                });
            }

            ui.add_space(12.0);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if self.queue.len() > 1 {
                    ui.small(format!("{} more", self.queue.len() - 1));
                }
                if ui.button("OK").clicked() {
                    ui.close();
                }
            });
        });

        if modal.should_close() {
            self.queue.pop_front();
            return true;
        }
        false
    }
}
