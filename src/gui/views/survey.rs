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
    survey::{
        LikesState,
        Question,
    },
};

pub fn show(ui: &mut egui::Ui, app: &mut TasteMapApp, actions: &mut ActionQueue) {
    let snapshot = app.store.snapshot();
    let preferences = snapshot.preferences();
    let progress = app.survey.progress(&app.store);

    ui.add(
        egui::ProgressBar::new(f32::from(progress) / 100.0)
            .text(format!("{progress}% answered"))
            .desired_width(ui.available_width().min(480.0)),
    );

    if app.survey.is_loading() {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label("Loading restaurants...");
        });
    } else if let Some(error) = app.survey.load_error() {
        error_with_retry(ui, error, UiAction::ReloadRestaurants, actions);
    }

    ui.add_space(8.0);

    for question in Question::ALL {
        ui.label(egui::RichText::new(question.prompt()).strong());
        ui.horizontal_wrapped(|ui| {
            let current = preferences.answer(question);
            for (value, label) in question.options() {
                if ui.radio(current == *value, *label).clicked() && current != *value {
                    actions.push(UiAction::Answer { question, value: value.to_string() });
                }
            }
        });
        ui.add_space(6.0);
    }

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        let submit = egui::Button::new("Find my restaurants");
        if ui.add_enabled(app.survey.can_submit(&app.store), submit).clicked() {
            actions.push(UiAction::SubmitSurvey);
        }
        if let LikesState::Failed(error) = app.survey.likes() {
            ui.colored_label(ui.visuals().error_fg_color, format!("Matches not saved: {error}"));
        }
    });

    if !snapshot.filtered().is_empty() {
        ui.add_space(12.0);
        ui.label(format!("Last match: {} restaurants", snapshot.filtered().len()));
        for restaurant in snapshot.filtered() {
            restaurant_card(ui, &app.theme, restaurant, actions);
        }
    }
}
