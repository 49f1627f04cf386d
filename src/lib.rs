//! # Owghat Bot
//!
//! A Telegram bot that replies with the daily prayer schedule for an Iranian
//! city, localized to Persian digits and the Solar Hijri calendar.
//!
//! ## Pipeline
//! - inbound message → [`bot::router::MessageRouter`]
//! - provider lookup → [`services::owghat::OwghatClient`]
//! - digit/calendar decoding → [`utils::numerals`], [`utils::calendar`]
//! - reply assembly → [`bot::response`]

/// Command definitions, message routing, and reply composition
pub mod bot;
/// Configuration management and environment variables
pub mod config;
/// Typed failures from the provider call
pub mod error;
/// The prayer-times provider client and the health endpoint
pub mod services;
/// Utility functions for numerals, calendar, and clock formatting
pub mod utils;
