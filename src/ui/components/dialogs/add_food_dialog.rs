//! Add-food form dialog.
//!
//! On submit it hands a candidate record (sans id) upward as a
//! [`Action::CreateFood`] intent; whether the modal closes is decided by
//! the dashboard once the round-trip settles.

use crate::api::CreateFoodArgs;
use crate::constants::{DIALOG_HEIGHT_PCT, DIALOG_TITLE_ADD_FOOD, DIALOG_WIDTH_PCT};
use crate::ui::components::dialogs::common::{self, shortcuts};
use crate::ui::core::{Action, Component};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Layout, Margin, Rect},
    style::Color,
    widgets::Clear,
    Frame,
};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Field {
    Name,
    Image,
    Price,
}

pub struct AddFoodDialog {
    pub name: String,
    pub image: String,
    pub price: String,
    focused: Field,
}

impl AddFoodDialog {
    pub fn new() -> Self {
        Self {
            name: String::new(),
            image: String::new(),
            price: String::new(),
            focused: Field::Name,
        }
    }

    /// Clear the form, ready for a fresh candidate.
    pub fn reset(&mut self) {
        self.name.clear();
        self.image.clear();
        self.price.clear();
        self.focused = Field::Name;
    }

    fn focused_buffer(&mut self) -> &mut String {
        match self.focused {
            Field::Name => &mut self.name,
            Field::Image => &mut self.image,
            Field::Price => &mut self.price,
        }
    }

    fn focus_next(&mut self) {
        self.focused = match self.focused {
            Field::Name => Field::Image,
            Field::Image => Field::Price,
            Field::Price => Field::Name,
        };
    }

    /// Build the candidate if the form holds one. The availability a
    /// candidate carries is irrelevant: creation forces it to true.
    fn submit(&self) -> Action {
        if self.name.is_empty() {
            return Action::None;
        }
        let Ok(price) = self.price.parse::<f64>() else {
            return Action::None;
        };

        Action::CreateFood(CreateFoodArgs {
            name: self.name.clone(),
            image: self.image.clone(),
            price,
            available: false,
        })
    }
}

impl Component for AddFoodDialog {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => Action::ToggleAddModal,
            KeyCode::Enter => self.submit(),
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus_next();
                Action::None
            }
            KeyCode::Char(c) => {
                self.focused_buffer().push(c);
                Action::None
            }
            KeyCode::Backspace => {
                self.focused_buffer().pop();
                Action::None
            }
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let dialog_area = common::centered_rect(DIALOG_WIDTH_PCT, DIALOG_HEIGHT_PCT, rect);
        f.render_widget(Clear, dialog_area);
        f.render_widget(common::create_dialog_block(DIALOG_TITLE_ADD_FOOD, Color::Green), dialog_area);

        let inner = dialog_area.inner(Margin {
            horizontal: 2,
            vertical: 1,
        });
        let rows = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(inner);

        f.render_widget(
            common::create_input_paragraph(&self.name, "Name", self.focused == Field::Name),
            rows[0],
        );
        f.render_widget(
            common::create_input_paragraph(&self.image, "Image URL", self.focused == Field::Image),
            rows[1],
        );
        f.render_widget(
            common::create_input_paragraph(&self.price, "Price", self.focused == Field::Price),
            rows[2],
        );

        let instructions = [
            shortcuts::ENTER_SUBMIT,
            shortcuts::SEPARATOR,
            shortcuts::TAB_FIELD,
            shortcuts::SEPARATOR,
            shortcuts::ESC_CANCEL,
        ];
        f.render_widget(common::create_instructions_paragraph(&instructions), rows[4]);
    }
}

impl Default for AddFoodDialog {
    fn default() -> Self {
        Self::new()
    }
}
