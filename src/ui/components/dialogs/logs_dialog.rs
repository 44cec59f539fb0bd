//! Developer logs overlay showing the in-memory diagnostic log.

use crate::constants::{DIALOG_TITLE_LOGS, DIALOG_WIDTH_PCT, LOGS_HEIGHT_PCT};
use crate::logger::Logger;
use crate::ui::components::dialogs::common;
use crate::ui::core::{Action, Component};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Margin, Rect},
    style::{Color, Style},
    widgets::{Clear, List, ListItem},
    Frame,
};

pub struct LogsDialog {
    logger: Logger,
    pub visible: bool,
}

impl LogsDialog {
    pub fn new(logger: Logger) -> Self {
        Self {
            logger,
            visible: false,
        }
    }
}

impl Component for LogsDialog {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc | KeyCode::Char('G') | KeyCode::Char('q') => Action::ShowLogs(false),
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let dialog_area = common::centered_rect(DIALOG_WIDTH_PCT + 20, LOGS_HEIGHT_PCT, rect);
        f.render_widget(Clear, dialog_area);
        f.render_widget(common::create_dialog_block(DIALOG_TITLE_LOGS, Color::Gray), dialog_area);

        let inner = dialog_area.inner(Margin {
            horizontal: 1,
            vertical: 1,
        });

        // Newest entries first; show what fits.
        let items: Vec<ListItem> = self
            .logger
            .entries()
            .into_iter()
            .take(inner.height as usize)
            .map(ListItem::new)
            .collect();

        let list = List::new(items).style(Style::default().fg(Color::Gray));
        f.render_widget(list, inner);
    }
}
