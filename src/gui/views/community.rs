use eframe::egui;

use super::error_with_retry;
use crate::{
    core::Post,
    gui::{
        actions::{
            ActionQueue,
            UiAction,
        },
        app::TasteMapApp,
        theme::Theme,
    },
    route::Route,
};

pub fn show_board(ui: &mut egui::Ui, app: &mut TasteMapApp, actions: &mut ActionQueue) {
    ui.horizontal(|ui| {
        let search = ui.add(
            egui::TextEdit::singleline(&mut app.forms.post_search)
                .hint_text("Search by title")
                .desired_width(240.0),
        );
        let submitted = search.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if ui.button("Search").clicked() || submitted {
            actions.push(UiAction::SearchPosts);
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Write").clicked() {
                actions.push(UiAction::Navigate(Route::WritePost));
            }
            if ui.small_button("⟳").on_hover_text("Reload").clicked() {
                actions.push(UiAction::ReloadPosts);
            }
        });
    });

    let board = &app.board;
    let theme = &app.theme;

    if board.has_searched() {
        ui.add_space(6.0);
        ui.strong(format!("Search results ({})", board.search_results().len()));
        for post in board.search_results() {
            post_entry(ui, theme, post, actions);
        }
        ui.separator();
    }

    if let Some(notice) = board.notice() {
        ui.label(egui::RichText::new(notice).color(theme.green(ui.ctx())));
    }
    if let Some(error) = board.error() {
        error_with_retry(ui, error, UiAction::ReloadPosts, actions);
    }

    if board.is_loading() {
        ui.spinner();
    } else if board.posts().is_empty() {
        ui.label("Nothing posted yet.");
    }

    for post in board.posts() {
        post_entry(ui, theme, post, actions);
    }
}

fn post_entry(ui: &mut egui::Ui, theme: &Theme, post: &Post, actions: &mut ActionQueue) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.strong(&post.title);
            let byline = [post.author.as_deref(), post.date.as_deref().map(short_date)]
                .into_iter()
                .flatten()
                .collect::<Vec<_>>()
                .join(" · ");
            ui.small(egui::RichText::new(byline).color(theme.muted(ui.ctx())));

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.small_button("Delete").clicked() {
                    actions.push(UiAction::DeletePost(post.id));
                }
                if ui.small_button("Edit").clicked() {
                    actions.push(UiAction::Navigate(Route::EditPost(post.id)));
                }
            });
        });
        ui.label(&post.content);
    });
}

/// `2024-11-02T10:00:00.000Z` shown as `2024-11-02`.
fn short_date(date: &str) -> &str {
    date.split('T').next().unwrap_or(date)
}

pub fn show_editor(ui: &mut egui::Ui, app: &mut TasteMapApp, actions: &mut ActionQueue) {
    let form = &mut app.board.form;

    ui.add(
        egui::TextEdit::singleline(&mut form.title)
            .hint_text("Title")
            .desired_width(f32::INFINITY),
    );
    ui.add(
        egui::TextEdit::multiline(&mut form.content)
            .hint_text("What would you like to share?")
            .desired_rows(10)
            .desired_width(f32::INFINITY),
    );

    ui.horizontal(|ui| {
        let writing = app.board.is_writing();
        if ui.add_enabled(!writing, egui::Button::new("Save")).clicked() {
            actions.push(UiAction::SavePost);
        }
        if writing {
            ui.spinner();
        }
        if ui.button("Cancel").clicked() {
            actions.push(UiAction::Navigate(Route::Community));
        }

        if let Some(error) = &app.forms.post_error {
            ui.colored_label(ui.visuals().error_fg_color, error.to_string());
        } else if let Some(notice) = app.board.notice() {
            ui.colored_label(ui.visuals().warn_fg_color, notice);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_date() {
        assert_eq!(short_date("2024-11-02T10:00:00.000Z"), "2024-11-02");
        assert_eq!(short_date("yesterday"), "yesterday");
    }
}
