//! # Department Timetable Bot
//!
//! A Telegram bot that answers queries about a fixed weekly class timetable
//! for several academic sections.
//!
//! ## Features
//! - Button-driven navigation: pick a section, then a view mode
//! - Full-week, single-day and single-period timetable views
//! - Full-name expansion for CS4's abbreviated subject codes
//! - Injectable clock so "today" is deterministic in tests

/// Telegram transport adapter: commands, handlers and keyboards
pub mod bot;
/// Configuration management and environment variables
pub mod config;
/// Per-conversation navigation state machine
pub mod navigation;
/// Clock and health-check services
pub mod services;
/// Read-only timetable data and lookups
pub mod timetable;
/// Logging helpers
pub mod utils;
