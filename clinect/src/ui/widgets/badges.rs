//! # Badges
//!
//! Small color-coded labels: recruitment status and match score.

use egui;

use crate::ui::theme::Theme;

/// Human label for a registry recruitment status constant, e.g.
/// `NOT_YET_RECRUITING` becomes `Not Yet Recruiting`.
pub fn status_label(status: &str) -> String {
    status
        .split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Render a color-coded recruitment status badge.
pub fn render_status_badge(ui: &mut egui::Ui, status: &str, theme: &Theme) {
    let color = theme.status_color(status);
    let text = egui::RichText::new(status_label(status)).color(color).small();
    egui::Frame::new()
        .stroke(egui::Stroke::new(1.0, color))
        .corner_radius(4.0)
        .inner_margin(egui::Margin::symmetric(6, 2))
        .show(ui, |ui| {
            ui.label(text);
        });
}

/// Render a match-score badge as a percentage.
pub fn render_score_badge(ui: &mut egui::Ui, score: f64, theme: &Theme) {
    let percent = (score * 100.0).round() as i64;
    ui.colored_label(theme.score_color(score), format!("{}% match", percent));
}

/// Comma-joined phase list, or a dash when the record carries none.
pub fn phase_text(phases: &[String]) -> String {
    if phases.is_empty() {
        "—".to_string()
    } else {
        phases.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_labels_are_title_cased() {
        assert_eq!(status_label("RECRUITING"), "Recruiting");
        assert_eq!(status_label("NOT_YET_RECRUITING"), "Not Yet Recruiting");
        assert_eq!(status_label(""), "");
    }

    #[test]
    fn phase_text_joins_or_dashes() {
        assert_eq!(phase_text(&[]), "—");
        assert_eq!(
            phase_text(&["PHASE2".to_string(), "PHASE3".to_string()]),
            "PHASE2, PHASE3"
        );
    }
}
