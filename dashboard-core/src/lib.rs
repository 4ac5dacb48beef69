//! Core library for the `weather-dashboard` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling, including demo-mode selection
//! - The OpenWeather HTTP client (current conditions + 5-day forecast)
//! - Pure response-to-display mapping
//! - The search orchestrator and its rendering seam
//!
//! It is used by `dashboard-cli`, but can also be reused by other binaries or
//! services.

pub mod client;
pub mod config;
pub mod demo;
pub mod display;
pub mod error;
pub mod payload;
pub mod search;

pub use client::{OpenWeatherClient, WeatherFetch};
pub use config::{Config, KeySource, Mode, PLACEHOLDER_API_KEY, Units};
pub use display::{CurrentReport, ForecastDay};
pub use error::{ClientError, InputError, SearchError};
pub use search::{AppState, Dashboard, Phase, Query, SearchOutcome, View};
