use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::config::Theme;
use crate::engine::GameState;

/// Supplemental values displayed by the HUD row.
#[derive(Debug, Clone, Copy)]
pub struct HudInfo {
    pub high_score: u32,
    pub theme: &'static Theme,
}

/// Renders the one-line HUD and returns the remaining play area above it.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, state: &GameState, info: HudInfo) -> Rect {
    let [play_area, hud_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    let theme = info.theme;
    let sep = Span::styled(" │ ", Style::new().fg(theme.hud_muted));
    let line = Line::from(vec![
        Span::raw("Score: "),
        Span::styled(state.score.to_string(), Style::new().fg(theme.hud_score)),
        sep.clone(),
        Span::raw("Hi: "),
        Span::styled(info.high_score.to_string(), Style::new().fg(theme.hud_score)),
        sep,
        Span::styled(state.status.label(), Style::new().fg(theme.hud_muted)),
    ]);

    frame.render_widget(
        Paragraph::new(line).alignment(Alignment::Center),
        hud_area,
    );

    play_area
}
