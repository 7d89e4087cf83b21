use eframe::egui;

use crate::gui::{
    actions::{
        ActionQueue,
        UiAction,
    },
    app::TasteMapApp,
};

pub fn show(ui: &mut egui::Ui, app: &mut TasteMapApp, actions: &mut ActionQueue) {
    let busy = app.session.is_busy();
    let form = &mut app.session.form;

    ui.set_max_width(360.0);
    egui::Grid::new("login_form").num_columns(2).spacing([8.0, 6.0]).show(ui, |ui| {
        ui.label("Email");
        ui.text_edit_singleline(&mut form.email);
        ui.end_row();

        ui.label("Password");
        let password = ui.add(egui::TextEdit::singleline(&mut form.password).password(true));
        if password.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            actions.push(UiAction::Login);
        }
        ui.end_row();
    });

    ui.add_space(6.0);
    ui.horizontal(|ui| {
        if ui.add_enabled(!busy, egui::Button::new("Sign in")).clicked() {
            actions.push(UiAction::Login);
        }
        if busy {
            ui.spinner();
        }
    });

    if let Some(error) = &app.forms.login_error {
        ui.colored_label(ui.visuals().error_fg_color, error.to_string());
    } else if let Some(error) = app.session.error() {
        ui.colored_label(ui.visuals().error_fg_color, format!("Sign in failed: {error}"));
    }
}
