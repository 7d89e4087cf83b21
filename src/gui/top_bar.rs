use eframe::egui::{
    self,
    containers,
};

use super::{
    actions::{
        ActionQueue,
        UiAction,
    },
    theme::Theme,
};
use crate::{
    route::{
        Navigator,
        Route,
    },
    session::SessionState,
};

/// Cuisine categories offered in the browse menu.
pub const CATEGORIES: [&str; 5] = ["Korean", "Western", "Chinese", "Japanese", "Random"];

pub struct TopBar;

impl TopBar {
    pub fn show(
        ctx: &egui::Context,
        theme: &Theme,
        navigator: &Navigator,
        session: &SessionState,
        dark_mode: bool,
        actions: &mut ActionQueue,
    ) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            containers::menu::Bar::new().ui(ui, |ui| {
                if ui.add_enabled(navigator.can_go_back(), egui::Button::new("⏴")).clicked() {
                    actions.push(UiAction::Back);
                }

                for route in [Route::Home, Route::Survey, Route::Community] {
                    let selected = navigator.current() == &route;
                    if ui.selectable_label(selected, route.to_string()).clicked() {
                        actions.push(UiAction::Navigate(route));
                    }
                }

                ui.menu_button("Browse", |ui| {
                    for category in CATEGORIES {
                        if ui.button(category).clicked() {
                            actions.push(UiAction::open_category(category));
                        }
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mut dark = dark_mode;
                    if ui.checkbox(&mut dark, "Dark").changed() {
                        actions.push(UiAction::SetDarkMode(dark));
                    }

                    ui.separator();
                    Self::show_session(ui, theme, session, actions);
                });
            });
        });
    }

    fn show_session(ui: &mut egui::Ui, theme: &Theme, session: &SessionState, actions: &mut ActionQueue) {
        if session.is_busy() {
            ui.spinner();
            return;
        }

        let (color, tooltip) = if session.is_authenticated() {
            (theme.green(ui.ctx()), "Signed in")
        } else {
            (theme.red(ui.ctx()), "Not signed in")
        };

        if session.is_authenticated() {
            if ui.button("Sign out").clicked() {
                actions.push(UiAction::Logout);
            }
        } else if ui.button("Sign in").clicked() {
            actions.push(UiAction::Navigate(Route::Login));
        }

        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 2.0;
            ui.small(egui::RichText::new("●").color(color)).on_hover_text(tooltip);
            if let Some(name) = session.display_name() {
                ui.small(name);
            }
        });
    }
}
