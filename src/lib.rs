//! Foodboard - A Terminal User Interface (TUI) for a foods REST backend
//!
//! This library provides a terminal-based dashboard for listing, creating,
//! editing, and deleting food records served by a REST API. The server is
//! the source of truth; the dashboard keeps an in-memory mirror that is
//! updated after each round-trip.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`api`] - REST client and data structures for the foods backend
//! * [`config`] - Application configuration management
//! * [`dashboard`] - Dashboard state aggregate and its operations
//! * [`ui`] - Terminal user interface components

/// REST API client and food data models
pub mod api;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Dashboard state and the operations that mutate it
pub mod dashboard;

/// In-memory diagnostic log for developer visibility
pub mod logger;

/// Terminal user interface components and rendering
pub mod ui;

pub use api::{CreateFoodArgs, FoodRecord, UpdateFoodArgs};
pub use dashboard::{DashboardService, DashboardState};
