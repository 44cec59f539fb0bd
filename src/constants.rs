//! Constants used throughout the application
//!
//! This module centralizes UI text and layout values to keep the components
//! consistent.

// UI text
pub const APP_TITLE: &str = "🍽️  Foodboard";
pub const LIST_TITLE: &str = " Foods ";
pub const KEY_HINTS: &str = "a add • e edit • d delete • j/k move • r reload • G logs • q quit";
pub const EMPTY_LIST_HINT: &str = "No foods yet. Press 'a' to add one";

// Dialog titles
pub const DIALOG_TITLE_ADD_FOOD: &str = " Add Food ";
pub const DIALOG_TITLE_EDIT_FOOD: &str = " Edit Food ";
pub const DIALOG_TITLE_LOGS: &str = " Logs - press 'Esc', 'G' or 'q' to close ";

// Availability badges
pub const BADGE_AVAILABLE: &str = "● available";
pub const BADGE_UNAVAILABLE: &str = "○ unavailable";

// Config messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";

// UI layout
/// Dialog width as a percentage of the terminal width
pub const DIALOG_WIDTH_PCT: u16 = 60;
/// Form dialog height as a percentage of the terminal height
pub const DIALOG_HEIGHT_PCT: u16 = 45;
/// Logs overlay height as a percentage of the terminal height
pub const LOGS_HEIGHT_PCT: u16 = 70;
