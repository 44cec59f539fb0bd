//! Bottom key-hint bar.

use crate::constants::KEY_HINTS;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

pub struct StatusBarComponent;

impl StatusBarComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, f: &mut Frame, rect: Rect, pending: &[String]) {
        let bar = Paragraph::new(Self::status_text(pending))
            .style(Style::default().fg(Color::DarkGray));
        f.render_widget(bar, rect);
    }

    /// Key hints, extended with the newest in-flight operation while any
    /// background work is pending.
    pub fn status_text(pending: &[String]) -> String {
        match pending.last() {
            None => KEY_HINTS.to_string(),
            Some(newest) if pending.len() == 1 => format!("{}  |  ⟳ {}", KEY_HINTS, newest),
            Some(newest) => format!("{}  |  ⟳ {} (+{} more)", KEY_HINTS, newest, pending.len() - 1),
        }
    }
}

impl Default for StatusBarComponent {
    fn default() -> Self {
        Self::new()
    }
}
