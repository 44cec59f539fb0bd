use super::actions::Action;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

/// A renderable UI piece that turns key presses into actions. The root
/// component decides which piece receives each key.
pub trait Component {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action;

    fn render(&mut self, f: &mut Frame, rect: Rect);
}
