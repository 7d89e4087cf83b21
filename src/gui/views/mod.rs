mod community;
mod favorites;
mod listing;
mod login;
mod restaurant;
mod survey;

use eframe::egui;

use super::{
    actions::{
        ActionQueue,
        UiAction,
    },
    app::TasteMapApp,
    theme::Theme,
};
use crate::{
    core::{
        ApiError,
        Restaurant,
    },
    route::Route,
};

pub fn central_panel(ctx: &egui::Context, app: &mut TasteMapApp, actions: &mut ActionQueue) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let route = app.navigator.current().clone();
        ui.label(app.theme.heading(ctx, &route.to_string()));
        ui.separator();

        egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| match route {
            Route::Home => favorites::show(ui, app, actions),
            Route::Survey => survey::show(ui, app, actions),
            Route::Category(_) => listing::show(ui, app, actions),
            Route::Restaurant(id) => restaurant::show(ui, app, id, actions),
            Route::Community => community::show_board(ui, app, actions),
            Route::WritePost | Route::EditPost(_) => community::show_editor(ui, app, actions),
            Route::Login => login::show(ui, app, actions),
        });
    });
}

/// Inline failure notice with a retry button.
fn error_with_retry(ui: &mut egui::Ui, error: &ApiError, retry: UiAction, actions: &mut ActionQueue) {
    ui.horizontal(|ui| {
        ui.colored_label(ui.visuals().error_fg_color, format!("⚠ {error}"));
        if ui.button("Retry").clicked() {
            actions.push(retry);
        }
    });
}

fn stars(ui: &mut egui::Ui, theme: &Theme, rating: f32) {
    let filled = rating.round().clamp(0.0, 5.0) as usize;
    let text = format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled));
    ui.label(egui::RichText::new(text).color(theme.star(ui.ctx())))
        .on_hover_text(format!("{rating:.1}"));
}

/// Compact line for a restaurant: name opens it, menu tags open their category.
fn restaurant_card(ui: &mut egui::Ui, theme: &Theme, restaurant: &Restaurant, actions: &mut ActionQueue) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            if ui.link(egui::RichText::new(&restaurant.name).strong()).clicked() {
                actions.push(UiAction::open_restaurant(restaurant.id));
            }
            ui.label(egui::RichText::new(restaurant.cuisine()).color(theme.muted(ui.ctx())));
            stars(ui, theme, restaurant.rating);
        });
        if let Some(address) = &restaurant.address {
            ui.small(address);
        }
        menu_tags(ui, restaurant, actions);
    });
}

fn menu_tags(ui: &mut egui::Ui, restaurant: &Restaurant, actions: &mut ActionQueue) {
    if restaurant.menus.is_empty() {
        return;
    }
    ui.horizontal_wrapped(|ui| {
        for tag in &restaurant.menus {
            if ui.small_button(format!("#{tag}")).clicked() {
                actions.push(UiAction::open_category(tag));
            }
        }
    });
}
