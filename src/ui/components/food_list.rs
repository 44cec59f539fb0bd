//! Scrollable list of food records with per-item edit/delete affordances.

use crate::api::FoodRecord;
use crate::constants::{EMPTY_LIST_HINT, LIST_TITLE};
use crate::ui::components::food_list_item;
use crate::ui::core::{Action, Component};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, List, ListState, Paragraph},
    Frame,
};

pub struct FoodListComponent {
    foods: Vec<FoodRecord>,
    selected: usize,
    show_images: bool,
}

impl FoodListComponent {
    pub fn new(show_images: bool) -> Self {
        Self {
            foods: Vec::new(),
            selected: 0,
            show_images,
        }
    }

    /// Replace the rows, keeping the selection in bounds.
    pub fn update_data(&mut self, foods: Vec<FoodRecord>) {
        self.foods = foods;
        if self.selected >= self.foods.len() {
            self.selected = self.foods.len().saturating_sub(1);
        }
    }

    pub fn selected_food(&self) -> Option<&FoodRecord> {
        self.foods.get(self.selected)
    }

    pub fn select_next(&mut self) {
        if !self.foods.is_empty() && self.selected + 1 < self.foods.len() {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }
}

impl Component for FoodListComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => Action::NextFood,
            KeyCode::Up | KeyCode::Char('k') => Action::PreviousFood,
            // Per-item edit intent
            KeyCode::Char('e') => match self.selected_food() {
                Some(food) => Action::RequestEdit(food.clone()),
                None => Action::None,
            },
            // Per-item delete intent
            KeyCode::Char('d') => match self.selected_food() {
                Some(food) => Action::DeleteFood(food.id),
                None => Action::None,
            },
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!("{}({}) ", LIST_TITLE, self.foods.len()));

        if self.foods.is_empty() {
            let hint = Paragraph::new(EMPTY_LIST_HINT)
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            f.render_widget(hint, rect);
            return;
        }

        let items: Vec<_> = self
            .foods
            .iter()
            .enumerate()
            .map(|(i, food)| food_list_item::render(food, i == self.selected, self.show_images))
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(Color::Indexed(236)));

        let mut list_state = ListState::default();
        list_state.select(Some(self.selected));
        f.render_stateful_widget(list, rect, &mut list_state);
    }
}
