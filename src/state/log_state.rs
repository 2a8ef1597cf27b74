//! LogState - Activity Log with Ring Buffer
//!
//! Mirrors user-relevant service activity (fetches, failures, CRUD results)
//! into the collapsible log panel at the bottom of the window.

use std::collections::VecDeque;

use chrono::{DateTime, Local};

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warn,
    Error,
    Debug,
}

impl LogLevel {
    pub fn label(&self) -> &'static str {
        match self {
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Debug => "DEBUG",
        }
    }

    pub fn color(&self) -> gpui::Rgba {
        match self {
            LogLevel::Info => gpui::rgba(0x22c55eff),
            LogLevel::Warn => gpui::rgba(0xf59e0bff),
            LogLevel::Error => gpui::rgba(0xef4444ff),
            LogLevel::Debug => gpui::rgba(0x6b7280ff),
        }
    }
}

/// A single log entry
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub id: u64,
    pub level: LogLevel,
    pub message: String,
    pub timestamp: DateTime<Local>,
}

/// State for log messages using a ring buffer
#[derive(Debug)]
pub struct LogState {
    entries: VecDeque<LogEntry>,
    capacity: usize,
    next_id: u64,
}

impl LogState {
    /// Create a new log state with the specified capacity
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            next_id: 1,
        }
    }

    /// Push a new log entry, evicting the oldest when full
    pub fn push(&mut self, level: LogLevel, message: impl Into<String>, timestamp: DateTime<Local>) {
        let entry = LogEntry {
            id: self.next_id,
            level,
            message: message.into(),
            timestamp,
        };
        self.next_id += 1;

        if self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    pub fn entries(&self) -> &VecDeque<LogEntry> {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for LogState {
    fn default() -> Self {
        Self::new(1000)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_buffer_evicts_oldest() {
        let mut state = LogState::new(3);
        for i in 0..5 {
            state.push(LogLevel::Info, format!("line {i}"), Local::now());
        }

        assert_eq!(state.len(), 3);
        assert_eq!(state.entries().front().expect("entry").message, "line 2");
        assert_eq!(state.entries().back().expect("entry").message, "line 4");
    }

    #[test]
    fn test_ids_are_monotonic_across_eviction() {
        let mut state = LogState::new(2);
        for _ in 0..4 {
            state.push(LogLevel::Debug, "x", Local::now());
        }
        let ids: Vec<u64> = state.entries().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![3, 4]);
    }
}
