use eframe::egui;
use egui_extras::{
    Column,
    TableBuilder,
};

use super::{
    error_with_retry,
    menu_tags,
    stars,
};
use crate::{
    gui::{
        actions::{
            ActionQueue,
            UiAction,
        },
        app::TasteMapApp,
    },
    listing::SortKey,
};

const ROW_HEIGHT: f32 = 44.0;

pub fn show(ui: &mut egui::Ui, app: &mut TasteMapApp, actions: &mut ActionQueue) {
    let listing = &app.listing;
    let theme = &app.theme;

    ui.horizontal(|ui| {
        ui.label("Sort by");
        egui::ComboBox::from_id_salt("listing_sort")
            .selected_text(listing.sort_key().label())
            .show_ui(ui, |ui| {
                for key in SortKey::ALL {
                    if ui.selectable_label(listing.sort_key() == key, key.label()).clicked() {
                        actions.push(UiAction::SetSort(key));
                    }
                }
            });

        if listing.is_fetching() {
            ui.spinner();
        }
    });

    if let Some(error) = listing.error() {
        error_with_retry(ui, error, UiAction::RetryCategory, actions);
    }

    if !listing.is_fetching() && listing.is_empty() && listing.error().is_none() {
        ui.label("No restaurants in this category yet.");
    }

    let visible = listing.visible();
    if !visible.is_empty() {
        ui.push_id("listing_table", |ui| {
            TableBuilder::new(ui)
                .striped(true)
                .resizable(false)
                .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                .column(Column::remainder().at_least(160.0))
                .column(Column::auto().at_least(90.0))
                .column(Column::auto().at_least(70.0))
                .column(Column::auto().at_least(70.0))
                .column(Column::remainder().at_least(140.0))
                .header(24.0, |mut header| {
                    for title in ["Restaurant", "Rating", "Reviews", "Favorites", "Menus"] {
                        header.col(|ui| {
                            ui.strong(title);
                        });
                    }
                })
                .body(|mut body| {
                    for restaurant in visible {
                        body.row(ROW_HEIGHT, |mut row| {
                            row.col(|ui| {
                                ui.vertical(|ui| {
                                    if ui.link(&restaurant.name).clicked() {
                                        actions.push(UiAction::open_restaurant(restaurant.id));
                                    }
                                    ui.small(restaurant.cuisine());
                                });
                            });
                            row.col(|ui| stars(ui, theme, restaurant.rating));
                            row.col(|ui| {
                                ui.label(restaurant.review_count.to_string());
                            });
                            row.col(|ui| {
                                ui.label(restaurant.view_count.to_string());
                            });
                            row.col(|ui| menu_tags(ui, restaurant, actions));
                        });
                    }
                });
        });
    }

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        if ui.add_enabled(listing.has_previous(), egui::Button::new("◀ Previous")).clicked() {
            actions.push(UiAction::PreviousPage);
        }
        ui.label(format!("Page {} of {}", listing.page(), listing.page_count()));
        if ui.add_enabled(listing.has_next(), egui::Button::new("Next ▶")).clicked() {
            actions.push(UiAction::NextPage);
        }
    });
}
