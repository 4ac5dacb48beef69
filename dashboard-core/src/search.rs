//! Search orchestration.
//!
//! Owns the application state, guards against duplicate and concurrent
//! submissions, runs the fetch pair, maps the results, and drives the
//! injected rendering surface. State transitions: Idle/Success/Error →
//! Loading on an accepted submit; Loading → Success or Error when the fetch
//! pair settles. The loading indicator always clears on settle, before any
//! mapping or rendering runs.

use tracing::{debug, info, warn};

use crate::{
    client::WeatherFetch,
    config::{Config, Mode},
    demo,
    display::{self, CurrentReport, ForecastDay},
    error::{InputError, SearchError},
};

/// A validated, trimmed city name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query(String);

impl Query {
    /// Validate raw input. Rules, in order: empty or whitespace-only fails
    /// with [`InputError::Empty`]; trimmed length below 2 fails with
    /// [`InputError::TooShort`].
    pub fn parse(raw: &str) -> Result<Self, InputError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(InputError::Empty);
        }
        if trimmed.chars().count() < 2 {
            return Err(InputError::TooShort);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// Mutable state for one dashboard session.
#[derive(Debug, Default)]
pub struct AppState {
    pub current_city: Option<String>,
    pub is_loading: bool,
    /// The last successfully completed or currently in-flight search;
    /// identical consecutive submissions are suppressed against it.
    pub last_search: Option<String>,
    pub phase: Phase,
}

/// Rendering surface. Injected as a collaborator; the orchestrator never
/// looks up output globally.
pub trait View {
    fn show_loading(&mut self, visible: bool);
    fn show_error(&mut self, message: &str);
    fn clear_error(&mut self);
    fn render(&mut self, current: &CurrentReport, forecast: &[ForecastDay]) -> anyhow::Result<()>;
}

/// What happened to one submission.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// Fetched (or sampled, in demo mode), mapped, and rendered.
    Rendered,
    /// Duplicate or concurrent submission; nothing was fetched.
    Suppressed,
    /// Validation or fetch failure; a message was surfaced.
    Failed(SearchError),
}

/// The search orchestrator.
pub struct Dashboard<F, V> {
    fetcher: F,
    view: V,
    state: AppState,
    mode: Mode,
    forecast_step_hours: u8,
}

impl<F: WeatherFetch, V: View> Dashboard<F, V> {
    pub fn new(fetcher: F, view: V, config: &Config) -> Self {
        Self {
            fetcher,
            view,
            state: AppState::default(),
            mode: config.mode(),
            forecast_step_hours: config.forecast_step_hours,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Initial render. In demo mode this shows the fixed sample city
    /// immediately, without any network call; in live mode it is a no-op.
    pub async fn start(&mut self) -> anyhow::Result<SearchOutcome> {
        match self.mode {
            Mode::Demo => {
                warn!("no usable API key configured; showing sample data");
                self.submit(demo::SAMPLE_CITY).await
            }
            Mode::Live => Ok(SearchOutcome::Rendered),
        }
    }

    /// Handle one search submission end to end.
    pub async fn submit(&mut self, raw: &str) -> anyhow::Result<SearchOutcome> {
        let trimmed = raw.trim();

        // Re-entrancy guard: nothing is fetched while a search is in flight
        // or for a repeat of the last completed search.
        if self.state.is_loading {
            debug!("submission ignored: a search is already in flight");
            return Ok(SearchOutcome::Suppressed);
        }
        if !trimmed.is_empty() && self.state.last_search.as_deref() == Some(trimmed) {
            debug!(city = %trimmed, "submission ignored: duplicate of last search");
            return Ok(SearchOutcome::Suppressed);
        }

        let query = match Query::parse(raw) {
            Ok(query) => query,
            Err(err) => {
                // Invalid input never reaches the fetch path and never
                // changes the loading state.
                self.view.show_error(&err.to_string());
                return Ok(SearchOutcome::Failed(SearchError::InvalidInput(err)));
            }
        };

        info!(city = %query.as_str(), mode = ?self.mode, "starting weather search");
        self.state.current_city = Some(query.as_str().to_string());
        self.state.last_search = Some(query.as_str().to_string());
        self.state.is_loading = true;
        self.state.phase = Phase::Loading;
        self.view.clear_error();
        self.view.show_loading(true);

        let fetched = match self.mode {
            Mode::Live => self.fetcher.fetch_pair(query.as_str()).await,
            // Same mapper and render path as live data; only the fetch is
            // substituted.
            Mode::Demo => Ok(demo::sample_pair(self.forecast_step_hours)),
        };

        // The loading indicator clears unconditionally on settle, before
        // mapping or rendering gets a chance to fail.
        self.state.is_loading = false;
        self.view.show_loading(false);

        match fetched {
            Ok((current, forecast)) => {
                let report = display::map_current(&current);
                let days = display::map_forecast(&forecast, self.forecast_step_hours);
                self.state.phase = Phase::Success;
                self.view.render(&report, &days)?;
                Ok(SearchOutcome::Rendered)
            }
            Err(err) => {
                let classified = SearchError::from(err);
                info!(error = %classified, "weather search failed");
                self.state.phase = Phase::Error;
                // Allow an immediate retry of the same city after a failure.
                self.state.last_search = None;
                self.view.show_error(&classified.user_message());
                Ok(SearchOutcome::Failed(classified))
            }
        }
    }
}
