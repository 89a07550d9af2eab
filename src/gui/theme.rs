use eframe::egui::{
    self,
    epaint::Shadow,
    style::{
        Selection,
        WidgetVisuals,
        Widgets,
    },
    Color32,
    Stroke,
    Visuals,
};

/// One palette per egui theme variant. Registered for both variants so the
/// global theme preference switch works without restarting.
#[derive(Clone)]
pub struct Theme {
    dark: Palette,
    light: Palette,
}

#[derive(Clone)]
struct Palette {
    background: Color32,
    background_dim: Color32,
    background_raise: Color32,
    foreground: Color32,
    selection: Color32,
    accent: Color32,
    red: Color32,
    green: Color32,
    yellow: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        Self::ink()
    }
}

impl Theme {
    /// Ink-and-vermilion palette, dark variant first.
    pub fn ink() -> Self {
        Theme {
            dark: Palette {
                background: Color32::from_rgb(0x20, 0x21, 0x2b),
                background_dim: Color32::from_rgb(0x18, 0x19, 0x21),
                background_raise: Color32::from_rgb(0x2e, 0x30, 0x3e),
                foreground: Color32::from_rgb(0xe8, 0xe6, 0xe0),
                selection: Color32::from_rgb(0x41, 0x44, 0x58),
                accent: Color32::from_rgb(0xe0, 0x5a, 0x47),
                red: Color32::from_rgb(0xff, 0x6b, 0x6b),
                green: Color32::from_rgb(0x6b, 0xd9, 0x8a),
                yellow: Color32::from_rgb(0xe8, 0xc5, 0x6a),
            },
            light: Palette {
                background: Color32::from_rgb(0xf6, 0xf4, 0xee),
                background_dim: Color32::from_rgb(0xea, 0xe7, 0xdf),
                background_raise: Color32::from_rgb(0xff, 0xff, 0xfb),
                foreground: Color32::from_rgb(0x2a, 0x2a, 0x30),
                selection: Color32::from_rgb(0xd8, 0xd3, 0xc4),
                accent: Color32::from_rgb(0xc0, 0x3a, 0x2b),
                red: Color32::from_rgb(0xb8, 0x3a, 0x3a),
                green: Color32::from_rgb(0x3a, 0x8f, 0x58),
                yellow: Color32::from_rgb(0xa8, 0x86, 0x2a),
            },
        }
    }

    fn palette(&self, ctx: &egui::Context) -> &Palette {
        match ctx.theme() {
            egui::Theme::Dark => &self.dark,
            egui::Theme::Light => &self.light,
        }
    }

    pub fn accent(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).accent
    }

    pub fn red(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).red
    }

    pub fn green(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).green
    }

    pub fn yellow(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).yellow
    }

    pub fn card_face(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).background_raise
    }
}

pub fn set_theme(ctx: &egui::Context, theme: &Theme) {
    set_theme_variant(ctx, &theme.dark, true);
    set_theme_variant(ctx, &theme.light, false);
}

fn set_theme_variant(ctx: &egui::Context, palette: &Palette, is_dark: bool) {
    let (default, variant) = match is_dark {
        true => (Visuals::dark(), egui::Theme::Dark),
        false => (Visuals::light(), egui::Theme::Light),
    };

    let widget = |base: &WidgetVisuals, bg_fill: Color32, stroke: Color32| WidgetVisuals {
        bg_fill,
        weak_bg_fill: palette.background_raise,
        bg_stroke: Stroke { color: palette.background_dim, ..base.bg_stroke },
        fg_stroke: Stroke { color: stroke, ..base.fg_stroke },
        ..*base
    };

    ctx.set_visuals_of(
        variant,
        Visuals {
            dark_mode: is_dark,
            widgets: Widgets {
                noninteractive: widget(
                    &default.widgets.noninteractive,
                    palette.background,
                    palette.foreground,
                ),
                inactive: widget(
                    &default.widgets.inactive,
                    palette.background_raise,
                    palette.foreground,
                ),
                hovered: widget(&default.widgets.hovered, palette.selection, palette.foreground),
                active: widget(&default.widgets.active, palette.selection, palette.accent),
                open: widget(&default.widgets.open, palette.background_dim, palette.foreground),
            },
            selection: Selection {
                bg_fill: palette.selection,
                stroke: Stroke { color: palette.foreground, ..default.selection.stroke },
            },
            hyperlink_color: palette.accent,
            faint_bg_color: palette.background_dim,
            extreme_bg_color: palette.background_dim,
            code_bg_color: palette.background_dim,
            error_fg_color: palette.red,
            warn_fg_color: palette.yellow,
            window_shadow: Shadow { color: palette.background_dim, ..default.window_shadow },
            window_fill: palette.background,
            window_stroke: Stroke { color: palette.background_raise, ..default.window_stroke },
            panel_fill: palette.background,
            collapsing_header_frame: true,
            ..default
        },
    );
}
