use eframe::egui;

use super::{
    error_with_retry,
    restaurant_card,
};
use crate::{
    gui::{
        actions::{
            ActionQueue,
            UiAction,
        },
        app::TasteMapApp,
    },
    route::Route,
};

pub fn show(ui: &mut egui::Ui, app: &mut TasteMapApp, actions: &mut ActionQueue) {
    ui.horizontal(|ui| {
        let search = ui.add(
            egui::TextEdit::singleline(&mut app.favorites.query)
                .hint_text("Find a restaurant by name")
                .desired_width(240.0),
        );
        let submitted = search.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if ui.button("Search").clicked() || submitted {
            actions.push(UiAction::SearchRestaurants);
        }
    });

    let theme = &app.theme;
    let favorites = &app.favorites;

    if !favorites.results().is_empty() {
        ui.add_space(6.0);
        for restaurant in favorites.results() {
            restaurant_card(ui, theme, restaurant, actions);
        }
        ui.separator();
    }

    if !app.session.is_authenticated() {
        ui.label("Sign in to see the restaurants you liked.");
        if ui.button("Sign in").clicked() {
            actions.push(UiAction::Navigate(Route::Login));
        }
        return;
    }

    ui.horizontal(|ui| {
        ui.strong(format!("Liked restaurants ({})", favorites.liked().len()));
        if favorites.is_loading() {
            ui.spinner();
        }
    });

    if let Some(error) = favorites.error() {
        error_with_retry(ui, error, UiAction::ReloadLiked, actions);
    }

    if favorites.liked().is_empty() && !favorites.is_loading() {
        ui.label("No liked restaurants yet.");
        if ui.button("Take the taste survey").clicked() {
            actions.push(UiAction::Navigate(Route::Survey));
        }
    }

    for restaurant in favorites.liked() {
        restaurant_card(ui, theme, restaurant, actions);
    }
}
