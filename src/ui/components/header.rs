//! Page header with the add-food affordance hint.

use crate::constants::APP_TITLE;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub struct HeaderComponent;

impl HeaderComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, f: &mut Frame, rect: Rect) {
        let title = Line::from(vec![
            Span::styled(APP_TITLE, Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            Span::styled("  press 'a' to add a food", Style::default().fg(Color::DarkGray)),
        ]);

        let header = Paragraph::new(title).block(Block::default().borders(Borders::BOTTOM));
        f.render_widget(header, rect);
    }
}

impl Default for HeaderComponent {
    fn default() -> Self {
        Self::new()
    }
}
