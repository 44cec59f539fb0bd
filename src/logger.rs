use chrono::Utc;
use std::sync::{Arc, Mutex};

/// Cap on retained entries so a long session cannot grow without bound.
const MAX_ENTRIES: usize = 500;

/// Shared in-memory diagnostic log.
///
/// This is where failures of background operations end up; it is shown in
/// the developer logs overlay and never surfaced as a user-facing error.
#[derive(Clone)]
pub struct Logger {
    entries: Arc<Mutex<Vec<String>>>,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add a timestamped entry.
    pub fn log(&self, message: String) {
        let timestamp = Utc::now().format("%H:%M:%S%.3f").to_string();
        if let Ok(mut entries) = self.entries.lock() {
            entries.push(format!("[{}] {}", timestamp, message));
            if entries.len() > MAX_ENTRIES {
                let excess = entries.len() - MAX_ENTRIES;
                entries.drain(..excess);
            }
        }
    }

    /// All entries, newest first.
    pub fn entries(&self) -> Vec<String> {
        if let Ok(entries) = self.entries.lock() {
            let mut newest_first = entries.clone();
            newest_first.reverse();
            newest_first
        } else {
            Vec::new()
        }
    }

    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.clear();
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}
