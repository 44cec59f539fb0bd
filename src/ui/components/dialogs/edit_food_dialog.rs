//! Edit-food form dialog, pre-populated from the editing target.
//!
//! On submit it hands back the edited fields as a partial record. The
//! partial never carries an identifier; updates are keyed by the editing
//! target's original id at the dashboard layer.

use crate::api::{FoodRecord, UpdateFoodArgs};
use crate::constants::{DIALOG_HEIGHT_PCT, DIALOG_TITLE_EDIT_FOOD, DIALOG_WIDTH_PCT};
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
    Available,
}

pub struct EditFoodDialog {
    pub name: String,
    pub image: String,
    pub price: String,
    pub available: bool,
    focused: Field,
}

impl EditFoodDialog {
    pub fn new() -> Self {
        Self {
            name: String::new(),
            image: String::new(),
            price: String::new(),
            available: true,
            focused: Field::Name,
        }
    }

    /// Load the editing target's fields into the form.
    pub fn populate(&mut self, food: &FoodRecord) {
        self.name = food.name.clone();
        self.image = food.image.clone();
        self.price = format!("{}", food.price);
        self.available = food.available;
        self.focused = Field::Name;
    }

    fn focus_next(&mut self) {
        self.focused = match self.focused {
            Field::Name => Field::Image,
            Field::Image => Field::Price,
            Field::Price => Field::Available,
            Field::Available => Field::Name,
        };
    }

    /// Build the partial record. An unparsable price is simply omitted so
    /// the stored value survives the merge.
    fn submit(&self) -> Action {
        if self.name.is_empty() {
            return Action::None;
        }

        Action::UpdateFood(UpdateFoodArgs {
            id: None,
            name: Some(self.name.clone()),
            image: Some(self.image.clone()),
            price: self.price.parse::<f64>().ok(),
            available: Some(self.available),
        })
    }
}

impl Component for EditFoodDialog {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => Action::ToggleEditModal,
            KeyCode::Enter => self.submit(),
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus_next();
                Action::None
            }
            KeyCode::Char(' ') if self.focused == Field::Available => {
                self.available = !self.available;
                Action::None
            }
            KeyCode::Char(c) => {
                match self.focused {
                    Field::Name => self.name.push(c),
                    Field::Image => self.image.push(c),
                    Field::Price => self.price.push(c),
                    Field::Available => {}
                }
                Action::None
            }
            KeyCode::Backspace => {
                match self.focused {
                    Field::Name => {
                        self.name.pop();
                    }
                    Field::Image => {
                        self.image.pop();
                    }
                    Field::Price => {
                        self.price.pop();
                    }
                    Field::Available => {}
                }
                Action::None
            }
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let dialog_area = common::centered_rect(DIALOG_WIDTH_PCT, DIALOG_HEIGHT_PCT + 10, rect);
        f.render_widget(Clear, dialog_area);
        f.render_widget(
            common::create_dialog_block(DIALOG_TITLE_EDIT_FOOD, Color::Yellow),
            dialog_area,
        );

        let inner = dialog_area.inner(Margin {
            horizontal: 2,
            vertical: 1,
        });
        let rows = Layout::vertical([
            Constraint::Length(3),
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
        let availability = if self.available { "yes" } else { "no" };
        f.render_widget(
            common::create_input_paragraph(availability, "Available", self.focused == Field::Available),
            rows[3],
        );

        let instructions = [
            shortcuts::ENTER_SUBMIT,
            shortcuts::SEPARATOR,
            shortcuts::TAB_FIELD,
            shortcuts::SEPARATOR,
            shortcuts::SPACE_TOGGLE,
            shortcuts::SEPARATOR,
            shortcuts::ESC_CANCEL,
        ];
        f.render_widget(common::create_instructions_paragraph(&instructions), rows[5]);
    }
}

impl Default for EditFoodDialog {
    fn default() -> Self {
        Self::new()
    }
}
