//! # GUI Theme
//!
//! Fixed clinical palette for egui: dark slate background, teal accent,
//! color-coded recruitment statuses. One theme, no persistence.

use egui::{Color32, Context, Stroke, Visuals};

/// Color roles used across screens and widgets.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Normal text
    pub normal: Color32,
    /// Primary accent (headings, active nav entry, links)
    pub selected: Color32,
    /// Border color
    pub border: Color32,
    /// Dimmed/secondary text
    pub dim: Color32,
    /// Success/positive
    pub success: Color32,
    /// Error/negative
    pub error: Color32,
    /// Warning/attention
    pub warning: Color32,
    /// Information
    pub info: Color32,
    /// Window background
    pub background: Color32,
    /// Raised panel background (cards, bubbles)
    pub panel: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            normal: Color32::from_rgb(230, 234, 238),
            selected: Color32::from_rgb(38, 166, 154),
            border: Color32::from_rgb(55, 62, 70),
            dim: Color32::from_rgb(145, 155, 165),
            success: Color32::from_rgb(102, 187, 106),
            error: Color32::from_rgb(239, 83, 80),
            warning: Color32::from_rgb(255, 183, 77),
            info: Color32::from_rgb(100, 181, 246),
            background: Color32::from_rgb(18, 22, 27),
            panel: Color32::from_rgb(28, 34, 41),
        }
    }
}

impl Theme {
    /// Badge color for a registry recruitment status string.
    pub fn status_color(&self, status: &str) -> Color32 {
        match status {
            "RECRUITING" => self.success,
            "NOT_YET_RECRUITING" => self.warning,
            "ENROLLING_BY_INVITATION" => self.info,
            "COMPLETED" | "TERMINATED" | "WITHDRAWN" | "SUSPENDED" => self.dim,
            _ => self.dim,
        }
    }

    /// Color for a 0..=1 match score.
    pub fn score_color(&self, score: f64) -> Color32 {
        if score >= 0.7 {
            self.success
        } else if score >= 0.4 {
            self.warning
        } else {
            self.dim
        }
    }

    fn visuals(&self) -> Visuals {
        let mut visuals = Visuals::dark();

        visuals.override_text_color = Some(self.normal);
        visuals.panel_fill = self.background;
        visuals.window_fill = self.background;
        visuals.faint_bg_color = self.panel;
        visuals.extreme_bg_color = Color32::from_rgb(12, 15, 19);
        visuals.window_stroke = Stroke::new(1.0, self.border);

        visuals.widgets.noninteractive.bg_fill = self.panel;
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, self.border);
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, self.normal);

        visuals.widgets.inactive.bg_fill = self.panel;
        visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, self.border);
        visuals.widgets.inactive.weak_bg_fill = self.panel;

        visuals.widgets.hovered.bg_fill = Color32::from_rgb(38, 48, 58);
        visuals.widgets.hovered.bg_stroke = Stroke::new(1.5, self.selected);

        visuals.widgets.active.bg_fill = Color32::from_rgb(30, 72, 66);
        visuals.widgets.active.bg_stroke = Stroke::new(1.5, self.selected);

        visuals.widgets.open.bg_fill = Color32::from_rgb(38, 48, 58);
        visuals.widgets.open.bg_stroke = Stroke::new(1.5, self.selected);

        visuals.selection.bg_fill = Color32::from_rgba_unmultiplied(38, 166, 154, 70);
        visuals.selection.stroke = Stroke::new(1.5, self.selected);

        visuals.hyperlink_color = self.info;
        visuals.slider_trailing_fill = true;

        visuals
    }

    /// Install the theme on an egui context. Called once at startup.
    pub fn apply(ctx: &Context) {
        ctx.set_visuals(Theme::default().visuals());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recruiting_statuses_get_distinct_colors() {
        let theme = Theme::default();
        assert_eq!(theme.status_color("RECRUITING"), theme.success);
        assert_eq!(theme.status_color("NOT_YET_RECRUITING"), theme.warning);
        assert_eq!(theme.status_color("ENROLLING_BY_INVITATION"), theme.info);
        assert_eq!(theme.status_color("COMPLETED"), theme.dim);
        assert_eq!(theme.status_color("SOMETHING_NEW"), theme.dim);
    }
}
