use eframe::egui::{
    self,
    RichText,
};
use egui::{
    epaint::Shadow,
    style::Selection,
    Color32,
    Stroke,
    Visuals,
};

/// Palette pair registered on both egui theme variants; the variant the
/// user picked decides which half is active.
#[derive(Clone)]
pub struct Theme {
    dark: ThemeDetails,
    light: ThemeDetails,
}

impl Default for Theme {
    fn default() -> Self {
        Self::midnight()
    }
}

impl Theme {
    pub fn midnight() -> Self {
        Theme { dark: ThemeDetails::midnight(), light: ThemeDetails::midnight_light() }
    }

    fn details(&self, ctx: &egui::Context) -> &ThemeDetails {
        match ctx.theme() {
            egui::Theme::Dark => &self.dark,
            egui::Theme::Light => &self.light,
        }
    }

    pub fn heading(&self, content: &str, ctx: &egui::Context) -> RichText {
        RichText::new(content).color(self.details(ctx).accent).strong()
    }

    pub fn accent(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).accent
    }

    pub fn comment(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).comment
    }

    pub fn red(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).red
    }

    pub fn green(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).green
    }

    /// Face colors are shared between variants so the card always looks
    /// like a physical card: white front, cream back, dark ink.
    pub fn card_front(&self) -> Color32 {
        Color32::from_rgb(0xfa, 0xfa, 0xf5)
    }

    pub fn card_back(&self) -> Color32 {
        Color32::from_rgb(0xff, 0xeb, 0xb0)
    }

    pub fn card_ink(&self) -> Color32 {
        Color32::from_rgb(0x1d, 0x1f, 0x35)
    }
}

#[derive(Clone)]
struct ThemeDetails {
    background: Color32,
    foreground: Color32,
    selection: Color32,
    comment: Color32,
    red: Color32,
    green: Color32,
    accent: Color32,
    background_darker: Color32,
    background_dark: Color32,
    background_light: Color32,
}

impl ThemeDetails {
    /// Deep indigo panels (#272a60) with a brighter tab tint (#4146a3).
    fn midnight() -> Self {
        Self {
            background: Color32::from_rgb(0x23, 0x25, 0x4a),
            foreground: Color32::from_rgb(0xf2, 0xf2, 0xf7),
            selection: Color32::from_rgb(0x41, 0x46, 0xa3),
            comment: Color32::from_rgb(0x8d, 0x93, 0xc4),
            red: Color32::from_rgb(0xff, 0x6b, 0x6b),
            green: Color32::from_rgb(0x5f, 0xd6, 0x8b),
            accent: Color32::from_rgb(0xb9, 0xa8, 0xf5),
            background_darker: Color32::from_rgb(0x16, 0x17, 0x2e),
            background_dark: Color32::from_rgb(0x27, 0x2a, 0x60),
            background_light: Color32::from_rgb(0x34, 0x38, 0x75),
        }
    }

    fn midnight_light() -> Self {
        Self {
            background: Color32::from_rgb(0xf4, 0xf5, 0xfc),
            foreground: Color32::from_rgb(0x27, 0x2a, 0x40),
            selection: Color32::from_rgb(0xc5, 0xca, 0xf2),
            comment: Color32::from_rgb(0x78, 0x80, 0xa8),
            red: Color32::from_rgb(0xc8, 0x50, 0x50),
            green: Color32::from_rgb(0x3f, 0xa8, 0x6b),
            accent: Color32::from_rgb(0x5a, 0x5f, 0xc0),
            background_darker: Color32::from_rgb(0xdf, 0xe1, 0xf2),
            background_dark: Color32::from_rgb(0xe9, 0xea, 0xf8),
            background_light: Color32::from_rgb(0xff, 0xff, 0xff),
        }
    }
}

pub fn set_theme(ctx: &egui::Context, theme: Theme) {
    set_theme_variant(ctx, &theme.dark, true);
    set_theme_variant(ctx, &theme.light, false);
}

pub fn blend_colors(color_a: Color32, color_b: Color32, t: f32) -> Color32 {
    let blend_channel = |a: u8, b: u8| ((1.0 - t) * (a as f32) + t * (b as f32)).round() as u8;
    Color32::from_rgba_unmultiplied(
        blend_channel(color_a.r(), color_b.r()),
        blend_channel(color_a.g(), color_b.g()),
        blend_channel(color_a.b(), color_b.b()),
        blend_channel(color_a.a(), color_b.a()),
    )
}

fn set_theme_variant(ctx: &egui::Context, theme: &ThemeDetails, is_dark: bool) {
    let (default, variant) = match is_dark {
        true => (Visuals::dark(), egui::Theme::Dark),
        false => (Visuals::light(), egui::Theme::Light),
    };

    let mut widgets = default.widgets.clone();
    widgets.noninteractive.bg_fill = theme.background;
    widgets.noninteractive.fg_stroke =
        Stroke { color: theme.foreground, ..default.widgets.noninteractive.fg_stroke };
    widgets.inactive.bg_fill = theme.background_light;
    widgets.inactive.fg_stroke =
        Stroke { color: theme.foreground, ..default.widgets.inactive.fg_stroke };
    widgets.hovered.bg_fill = theme.selection;
    widgets.active.bg_fill = theme.selection;
    widgets.open.bg_fill = theme.background_dark;

    ctx.set_visuals_of(
        variant,
        Visuals {
            dark_mode: is_dark,
            widgets,
            selection: Selection {
                bg_fill: theme.selection,
                stroke: Stroke { color: theme.foreground, ..default.selection.stroke },
            },
            hyperlink_color: theme.accent,
            faint_bg_color: theme.background_darker,
            extreme_bg_color: theme.background_darker,
            error_fg_color: theme.red,
            window_fill: theme.background,
            window_stroke: Stroke { color: theme.background_light, ..default.window_stroke },
            window_shadow: Shadow { color: theme.background_darker, ..default.window_shadow },
            panel_fill: theme.background_dark,
            ..default
        },
    );
}
