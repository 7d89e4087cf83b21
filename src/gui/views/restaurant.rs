use eframe::egui;

use super::{
    error_with_retry,
    menu_tags,
    stars,
};
use crate::{
    core::{
        RestaurantId,
        Review,
        ReviewId,
        ReviewStatus,
    },
    gui::{
        actions::{
            ActionQueue,
            UiAction,
        },
        app::TasteMapApp,
        theme::Theme,
    },
};

pub fn show(ui: &mut egui::Ui, app: &mut TasteMapApp, id: RestaurantId, actions: &mut ActionQueue) {
    if let Some(restaurant) = app.find_restaurant(id) {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(&restaurant.name).size(18.0).strong());
            stars(ui, &app.theme, restaurant.rating);
            ui.label(format!("{} reviews · {} favorites", restaurant.review_count, restaurant.view_count));
        });
        egui::Grid::new("restaurant_details").num_columns(2).spacing([12.0, 4.0]).show(ui, |ui| {
            let rows = [
                ("Cuisine", Some(restaurant.cuisine().to_string())),
                ("Address", restaurant.address.clone()),
                ("Hours", restaurant.opening_hours.clone()),
                ("Phone", restaurant.phone.clone()),
            ];
            for (label, value) in rows {
                if let Some(value) = value.filter(|v| !v.is_empty()) {
                    ui.label(egui::RichText::new(label).color(app.theme.muted(ui.ctx())));
                    ui.label(value);
                    ui.end_row();
                }
            }
        });
        menu_tags(ui, &restaurant, actions);
        ui.separator();
    }

    let reviews = &app.reviews;

    ui.horizontal(|ui| {
        ui.strong(format!("Reviews ({})", reviews.reviews().len()));
        if reviews.is_loading() {
            ui.spinner();
        } else if ui.small_button("⟳").on_hover_text("Reload").clicked() {
            actions.push(UiAction::ReloadReviews);
        }
        let toggle = if reviews.is_write_open() { "Cancel" } else { "Write a review" };
        if ui.button(toggle).clicked() {
            actions.push(UiAction::ToggleReviewPanel);
        }
    });

    if let Some(error) = reviews.error() {
        error_with_retry(ui, error, UiAction::ReloadReviews, actions);
    }

    if reviews.is_write_open() {
        write_panel(ui, app, actions);
    }

    let reviews = &app.reviews;
    if reviews.reviews().is_empty() && !reviews.is_loading() {
        ui.label("No reviews yet. Be the first!");
    }
    for review in reviews.reviews() {
        let deleting = matches!(review.id, ReviewId::Server(id) if reviews.is_deleting(id));
        review_entry(ui, &app.theme, review, deleting, actions);
    }
}

fn write_panel(ui: &mut egui::Ui, app: &mut TasteMapApp, actions: &mut ActionQueue) {
    let draft = &mut app.forms.review;

    egui::Frame::group(ui.style()).show(ui, |ui| {
        egui::Grid::new("review_form").num_columns(2).spacing([8.0, 6.0]).show(ui, |ui| {
            ui.label("Name");
            ui.text_edit_singleline(&mut draft.author);
            ui.end_row();

            ui.label("Rating");
            ui.add(egui::Slider::new(&mut draft.rating, 1..=5).suffix(" ★"));
            ui.end_row();

            ui.label("Hashtags");
            ui.add(egui::TextEdit::singleline(&mut draft.hashtags).hint_text("#spicy #cozy"));
            ui.end_row();
        });

        ui.add(
            egui::TextEdit::multiline(&mut draft.content)
                .hint_text("How was it?")
                .desired_rows(4)
                .desired_width(f32::INFINITY),
        );

        ui.horizontal(|ui| {
            if ui.button("Post review").clicked() {
                actions.push(UiAction::SubmitReview);
            }
            if let Some(error) = &app.forms.review_error {
                ui.colored_label(ui.visuals().error_fg_color, error.to_string());
            }
        });
    });
}

fn review_entry(ui: &mut egui::Ui, theme: &Theme, review: &Review, deleting: bool, actions: &mut ActionQueue) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.strong(&review.author);
            stars(ui, theme, f32::from(review.rating));

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| match review.status {
                ReviewStatus::Confirmed => {
                    if deleting {
                        ui.spinner();
                    } else if ui.small_button("Delete").clicked() {
                        actions.push(UiAction::DeleteReview(review.id));
                    }
                }
                ReviewStatus::Pending => {
                    ui.small(egui::RichText::new("Sending...").color(theme.muted(ui.ctx())));
                }
                ReviewStatus::Failed => {
                    if ui.small_button("Discard").clicked() {
                        actions.push(UiAction::DiscardReview(review.id));
                    }
                    ui.small(egui::RichText::new("Not saved").color(theme.red(ui.ctx())));
                }
            });
        });
        ui.label(&review.content);
        if !review.hashtags.is_empty() {
            let tags: Vec<String> = review.hashtags.iter().map(|t| format!("#{t}")).collect();
            ui.small(egui::RichText::new(tags.join(" ")).color(theme.accent(ui.ctx())));
        }
    });
}
