use eframe::egui::{
    self,
    RichText,
};
use egui::{
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

#[derive(Clone)]
pub struct Theme {
    dark: Palette,
    light: Palette,
}

impl Default for Theme {
    fn default() -> Self {
        Self::nord()
    }
}

impl Theme {
    pub fn nord() -> Self {
        Theme { dark: Palette::nord_night(), light: Palette::nord_day() }
    }

    pub fn word(&self, content: &str) -> RichText {
        RichText::new(content).size(16.0).color(self.dark.frost).strong()
    }

    pub fn hint(&self, content: &str) -> RichText {
        RichText::new(content).color(self.dark.comment)
    }

    pub fn red(&self) -> Color32 {
        self.dark.red
    }

    pub fn green(&self) -> Color32 {
        self.dark.green
    }
}

#[derive(Clone)]
struct Palette {
    background: Color32,
    foreground: Color32,
    selection: Color32,
    comment: Color32,
    red: Color32,
    orange: Color32,
    green: Color32,
    frost: Color32,
    purple: Color32,
    background_darker: Color32,
    background_dark: Color32,
    background_light: Color32,
    background_lighter: Color32,
}

impl Palette {
    fn nord_night() -> Self {
        Self {
            background: Color32::from_rgb(46, 52, 64),
            foreground: Color32::from_rgb(216, 222, 233),
            selection: Color32::from_rgb(67, 76, 94),
            comment: Color32::from_rgb(123, 136, 161),
            red: Color32::from_rgb(191, 97, 106),
            orange: Color32::from_rgb(208, 135, 112),
            green: Color32::from_rgb(163, 190, 140),
            frost: Color32::from_rgb(136, 192, 208),
            purple: Color32::from_rgb(180, 142, 173),
            background_darker: Color32::from_rgb(36, 41, 51),
            background_dark: Color32::from_rgb(41, 46, 57),
            background_light: Color32::from_rgb(59, 66, 82),
            background_lighter: Color32::from_rgb(67, 76, 94),
        }
    }

    fn nord_day() -> Self {
        Self {
            background: Color32::from_rgb(236, 239, 244),
            foreground: Color32::from_rgb(46, 52, 64),
            selection: Color32::from_rgb(216, 222, 233),
            comment: Color32::from_rgb(123, 136, 161),
            red: Color32::from_rgb(180, 90, 100),
            orange: Color32::from_rgb(190, 120, 95),
            green: Color32::from_rgb(120, 160, 95),
            frost: Color32::from_rgb(80, 140, 160),
            purple: Color32::from_rgb(150, 115, 145),
            background_darker: Color32::from_rgb(216, 222, 233),
            background_dark: Color32::from_rgb(229, 233, 240),
            background_light: Color32::from_rgb(245, 247, 250),
            background_lighter: Color32::from_rgb(255, 255, 255),
        }
    }
}

pub fn set_theme(ctx: &egui::Context, theme: Theme) {
    set_theme_variant(ctx, &theme.dark, true);
    set_theme_variant(ctx, &theme.light, false);
}

fn set_theme_variant(ctx: &egui::Context, palette: &Palette, is_dark: bool) {
    let (default, variant) = match is_dark {
        true => (Visuals::dark(), egui::Theme::Dark),
        false => (Visuals::light(), egui::Theme::Light),
    };

    ctx.set_visuals_of(
        variant,
        Visuals {
            dark_mode: is_dark,
            widgets: Widgets {
                noninteractive: WidgetVisuals {
                    bg_fill: palette.background,
                    weak_bg_fill: palette.background_lighter,
                    bg_stroke: Stroke {
                        color: palette.background_dark,
                        ..default.widgets.noninteractive.bg_stroke
                    },
                    fg_stroke: Stroke {
                        color: palette.foreground,
                        ..default.widgets.noninteractive.fg_stroke
                    },
                    ..default.widgets.noninteractive
                },
                inactive: WidgetVisuals {
                    bg_fill: palette.background_light,
                    weak_bg_fill: palette.background_lighter,
                    bg_stroke: Stroke {
                        color: palette.background_dark,
                        ..default.widgets.inactive.bg_stroke
                    },
                    fg_stroke: Stroke {
                        color: palette.foreground,
                        ..default.widgets.inactive.fg_stroke
                    },
                    ..default.widgets.inactive
                },
                hovered: WidgetVisuals {
                    bg_fill: palette.selection,
                    weak_bg_fill: palette.background_lighter,
                    bg_stroke: Stroke { color: palette.frost, ..default.widgets.hovered.bg_stroke },
                    fg_stroke: Stroke {
                        color: palette.foreground,
                        ..default.widgets.hovered.fg_stroke
                    },
                    ..default.widgets.hovered
                },
                active: WidgetVisuals {
                    bg_fill: palette.selection,
                    weak_bg_fill: palette.background_light,
                    bg_stroke: Stroke { color: palette.frost, ..default.widgets.active.bg_stroke },
                    fg_stroke: Stroke {
                        color: palette.foreground,
                        ..default.widgets.active.fg_stroke
                    },
                    ..default.widgets.active
                },
                open: WidgetVisuals {
                    bg_fill: palette.background_dark,
                    weak_bg_fill: palette.background_lighter,
                    bg_stroke: Stroke { color: palette.purple, ..default.widgets.open.bg_stroke },
                    fg_stroke: Stroke {
                        color: palette.foreground,
                        ..default.widgets.open.fg_stroke
                    },
                    ..default.widgets.open
                },
            },
            selection: Selection {
                bg_fill: palette.selection,
                stroke: Stroke { color: palette.foreground, ..default.selection.stroke },
            },
            hyperlink_color: palette.frost,
            faint_bg_color: match is_dark {
                true => palette.background_darker,
                false => palette.background_light,
            },
            extreme_bg_color: palette.background_darker,
            code_bg_color: palette.background_dark,
            error_fg_color: palette.red,
            warn_fg_color: palette.orange,
            window_shadow: Shadow { color: palette.background_darker, ..default.window_shadow },
            window_fill: palette.background,
            window_stroke: Stroke { color: palette.background_light, ..default.window_stroke },
            panel_fill: palette.background_dark,
            popup_shadow: Shadow { color: palette.background_dark, ..default.popup_shadow },
            ..default
        },
    );

    ctx.all_styles_mut(|style| {
        style.interaction.tooltip_delay = 0.0;
        style.interaction.show_tooltips_only_when_still = false;
    });
}
