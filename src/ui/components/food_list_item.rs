//! Rendering of a single food row.

use crate::api::FoodRecord;
use crate::constants::{BADGE_AVAILABLE, BADGE_UNAVAILABLE};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::ListItem as RatatuiListItem,
};

/// Render one record as a list row: availability badge, name, price, and
/// (optionally) the image reference.
pub fn render(food: &FoodRecord, selected: bool, show_images: bool) -> RatatuiListItem<'static> {
    let badge = if food.available {
        Span::styled(BADGE_AVAILABLE, Style::default().fg(Color::Green))
    } else {
        Span::styled(BADGE_UNAVAILABLE, Style::default().fg(Color::DarkGray))
    };

    let name_style = if selected {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    let mut spans = vec![
        badge,
        Span::raw("  "),
        Span::styled(food.name.clone(), name_style),
        Span::raw("  "),
        Span::styled(format!("${:.2}", food.price), Style::default().fg(Color::Yellow)),
    ];

    if show_images && !food.image.is_empty() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(food.image.clone(), Style::default().fg(Color::DarkGray)));
    }

    RatatuiListItem::new(Line::from(spans))
}
