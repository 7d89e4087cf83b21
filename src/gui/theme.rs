use eframe::egui::{
    self,
    RichText,
};
use egui::{
    style::WidgetVisuals,
    Color32,
    Visuals,
};

/// Light and dark palettes. Both are registered with egui up front so the
/// dark mode toggle only switches the preference.
#[derive(Clone)]
pub struct Theme {
    dark: Palette,
    light: Palette,
}

impl Default for Theme {
    fn default() -> Self {
        Self::mustard()
    }
}

impl Theme {
    pub fn mustard() -> Self {
        Theme { dark: Palette::mustard_night(), light: Palette::mustard_day() }
    }

    fn palette(&self, ctx: &egui::Context) -> &Palette {
        match ctx.theme() {
            egui::Theme::Dark => &self.dark,
            egui::Theme::Light => &self.light,
        }
    }

    pub fn heading(&self, ctx: &egui::Context, content: &str) -> RichText {
        RichText::new(content).color(self.palette(ctx).accent).strong().size(20.0)
    }

    pub fn accent(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).accent
    }

    pub fn muted(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).muted
    }

    pub fn red(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).red
    }

    pub fn green(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).green
    }

    /// Rating stars.
    pub fn star(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).yellow
    }
}

#[derive(Clone)]
struct Palette {
    text: Color32,
    muted: Color32,
    accent: Color32,
    highlight: Color32,
    red: Color32,
    yellow: Color32,
    green: Color32,
    // Surfaces, from the deepest (text fields) to the raised (buttons)
    sunken: Color32,
    panel: Color32,
    window: Color32,
    raised: Color32,
    hover: Color32,
}

impl Palette {
    fn mustard_night() -> Self {
        Self {
            text: Color32::from_rgb(238, 230, 214),
            muted: Color32::from_rgb(160, 146, 120),
            accent: Color32::from_rgb(228, 174, 56),
            highlight: Color32::from_rgb(92, 74, 36),
            red: Color32::from_rgb(235, 110, 95),
            yellow: Color32::from_rgb(245, 200, 66),
            green: Color32::from_rgb(130, 196, 110),
            sunken: Color32::from_rgb(24, 21, 17),
            panel: Color32::from_rgb(29, 26, 21),
            window: Color32::from_rgb(34, 30, 24),
            raised: Color32::from_rgb(52, 46, 37),
            hover: Color32::from_rgb(68, 61, 49),
        }
    }

    fn mustard_day() -> Self {
        Self {
            text: Color32::from_rgb(48, 40, 28),
            muted: Color32::from_rgb(130, 118, 96),
            accent: Color32::from_rgb(190, 136, 20),
            highlight: Color32::from_rgb(246, 222, 160),
            red: Color32::from_rgb(196, 72, 60),
            yellow: Color32::from_rgb(214, 160, 20),
            green: Color32::from_rgb(70, 150, 80),
            sunken: Color32::from_rgb(236, 228, 206),
            panel: Color32::from_rgb(246, 240, 222),
            window: Color32::from_rgb(255, 251, 240),
            raised: Color32::from_rgb(255, 253, 246),
            hover: Color32::from_rgb(255, 255, 255),
        }
    }

    fn visuals(&self, dark: bool) -> Visuals {
        let mut visuals = if dark { Visuals::dark() } else { Visuals::light() };

        let tint = |widget: &mut WidgetVisuals, fill: Color32, border: Color32| {
            widget.bg_fill = fill;
            widget.weak_bg_fill = fill;
            widget.bg_stroke.color = border;
            widget.fg_stroke.color = self.text;
        };
        let widgets = &mut visuals.widgets;
        tint(&mut widgets.noninteractive, self.window, self.panel);
        tint(&mut widgets.inactive, self.raised, self.panel);
        tint(&mut widgets.hovered, self.hover, self.accent);
        tint(&mut widgets.active, self.highlight, self.accent);
        tint(&mut widgets.open, self.panel, self.accent);

        visuals.selection.bg_fill = self.highlight;
        visuals.selection.stroke.color = self.text;
        visuals.hyperlink_color = self.accent;
        visuals.error_fg_color = self.red;
        visuals.warn_fg_color = self.yellow;

        visuals.panel_fill = self.panel;
        visuals.window_fill = self.window;
        visuals.window_stroke.color = self.raised;
        visuals.window_shadow.color = self.sunken;
        visuals.popup_shadow.color = self.panel;
        visuals.faint_bg_color = if dark { self.sunken } else { self.panel };
        visuals.extreme_bg_color = self.sunken;
        visuals.code_bg_color = self.panel;

        visuals
    }
}

pub fn set_theme(ctx: &egui::Context, theme: &Theme) {
    ctx.set_visuals_of(egui::Theme::Dark, theme.dark.visuals(true));
    ctx.set_visuals_of(egui::Theme::Light, theme.light.visuals(false));
}

pub fn apply_preference(ctx: &egui::Context, dark_mode: bool) {
    ctx.set_theme(if dark_mode {
        egui::ThemePreference::Dark
    } else {
        egui::ThemePreference::Light
    });
}
