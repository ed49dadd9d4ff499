//! # Practice Booking Bot
//!
//! A Telegram bot for booking practice slots with a coach.
//!
//! ## Features
//! - Book a practice slot through inline date and time keyboards
//! - List and cancel existing bookings by player name
//! - Per-chat saved display name via /setname
//! - Slot storage with SQLite, provisioned out-of-band

/// Bot command handlers and message processing
pub mod bot;
/// Configuration management and environment variables
pub mod config;
/// HTTP health check service
pub mod services;
/// Slot row store: records, connections, and migrations
pub mod store;
/// Utility functions for feedback and validation
pub mod utils;
