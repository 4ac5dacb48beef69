//! Response-to-display mapping.
//!
//! Pure transformations from raw provider payloads into display models whose
//! values are ready for presentation: temperatures rounded, descriptions
//! title-cased, dates formatted, icon codes expanded into URLs. No I/O.

use chrono::{TimeZone, Utc};

use crate::payload::{ConditionEntry, CurrentPayload, ForecastPayload};

const ICON_URL_BASE: &str = "https://openweathermap.org/img/wn";

/// Current conditions, ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentReport {
    pub city: String,
    pub country: String,
    pub temperature: i64,
    pub feels_like: i64,
    pub humidity: u8,
    pub wind_speed: f64,
    pub pressure: u32,
    pub description: String,
    pub icon_url: String,
}

/// One day of the forecast, ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastDay {
    /// Short date, e.g. "Mon, Jan 15".
    pub date: String,
    pub temperature: i64,
    pub description: String,
    pub icon_url: String,
}

/// Map a `/weather` payload into the current-conditions display model.
pub fn map_current(payload: &CurrentPayload) -> CurrentReport {
    let (description, icon) = primary_condition(&payload.weather);

    CurrentReport {
        city: payload.name.clone(),
        country: payload.sys.country.clone(),
        temperature: round_temperature(payload.main.temp),
        feels_like: round_temperature(payload.main.feels_like),
        humidity: payload.main.humidity,
        wind_speed: payload.wind.speed,
        pressure: payload.main.pressure,
        description: title_case(&description),
        icon_url: format!("{ICON_URL_BASE}/{icon}@2x.png"),
    }
}

/// Map a `/forecast` payload into one display entry per calendar day.
///
/// The provider reports entries in fixed `step_hours` increments, so taking
/// every `24 / step_hours`-th entry yields one entry per day, in original
/// order. For `n` entries the result has exactly `ceil(n / stride)` days.
/// `step_hours` is validated at config load to divide 24.
pub fn map_forecast(payload: &ForecastPayload, step_hours: u8) -> Vec<ForecastDay> {
    debug_assert!(step_hours > 0 && 24 % step_hours == 0);
    let stride = usize::from(24 / step_hours.max(1));

    payload
        .list
        .iter()
        .step_by(stride)
        .map(|entry| {
            let (description, icon) = primary_condition(&entry.weather);
            ForecastDay {
                date: format_day(entry.dt),
                temperature: round_temperature(entry.main.temp),
                description: title_case(&description),
                icon_url: format!("{ICON_URL_BASE}/{icon}.png"),
            }
        })
        .collect()
}

fn primary_condition(weather: &[ConditionEntry]) -> (String, String) {
    weather
        .first()
        .map(|w| (w.description.clone(), w.icon.clone()))
        .unwrap_or_else(|| ("unknown".to_string(), "01d".to_string()))
}

/// Round to the nearest integer, ties away from zero (`f64::round`), so
/// 21.5 → 22 and -21.5 → -22.
pub fn round_temperature(value: f64) -> i64 {
    value.round() as i64
}

/// Uppercase the first character of each space-separated token, lowercase the
/// remainder. Tolerates empty tokens and mixed case; idempotent.
pub fn title_case(s: &str) -> String {
    s.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Format a unix timestamp as a short date, e.g. "Mon, Jan 15".
fn format_day(dt: i64) -> String {
    let when = Utc.timestamp_opt(dt, 0).single().unwrap_or_else(Utc::now);
    when.format("%a, %b %-d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload::{City, ForecastEntry, MainReadings, Sys, Wind};

    fn current_payload(temp: f64) -> CurrentPayload {
        CurrentPayload {
            name: "Paris".into(),
            sys: Sys { country: "FR".into() },
            main: MainReadings { temp, feels_like: temp - 1.0, humidity: 56, pressure: 1013 },
            weather: vec![ConditionEntry { description: "clear sky".into(), icon: "01d".into() }],
            wind: Wind { speed: 3.5 },
        }
    }

    fn forecast_payload(entries: usize) -> ForecastPayload {
        let list = (0..entries)
            .map(|i| ForecastEntry {
                // 2024-01-15T12:00:00Z onwards in 3-hour steps
                dt: 1_705_320_000 + i as i64 * 3 * 3600,
                main: MainReadings {
                    temp: 20.0 + i as f64,
                    feels_like: 19.0,
                    humidity: 60,
                    pressure: 1010,
                },
                weather: vec![ConditionEntry {
                    description: "light rain".into(),
                    icon: "10d".into(),
                }],
            })
            .collect();

        ForecastPayload {
            list,
            city: City { name: "Paris".into(), country: "FR".into() },
        }
    }

    #[test]
    fn current_report_rounds_and_formats() {
        let report = map_current(&current_payload(21.6));

        assert_eq!(report.city, "Paris");
        assert_eq!(report.country, "FR");
        assert_eq!(report.temperature, 22);
        assert_eq!(report.feels_like, 21);
        assert_eq!(report.humidity, 56);
        assert_eq!(report.pressure, 1013);
        assert_eq!(report.description, "Clear Sky");
        assert_eq!(report.icon_url, "https://openweathermap.org/img/wn/01d@2x.png");
    }

    #[test]
    fn rounding_is_half_away_from_zero() {
        assert_eq!(round_temperature(21.6), 22);
        assert_eq!(round_temperature(21.4), 21);
        assert_eq!(round_temperature(21.5), 22);
        assert_eq!(round_temperature(-21.5), -22);
        assert_eq!(round_temperature(0.0), 0);
    }

    #[test]
    fn title_case_capitalizes_each_word() {
        assert_eq!(title_case("scattered clouds"), "Scattered Clouds");
        assert_eq!(title_case("LIGHT RAIN"), "Light Rain");
        assert_eq!(title_case("mIxEd CaSe words"), "Mixed Case Words");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn title_case_tolerates_empty_tokens() {
        // Double space produces an empty token; it must pass through.
        assert_eq!(title_case("heavy  rain"), "Heavy  Rain");
        assert_eq!(title_case(" rain"), " Rain");
    }

    #[test]
    fn title_case_is_idempotent() {
        for s in ["clear sky", "LIGHT RAIN", "mIxEd CaSe", "", "a  b", "übrig grau"] {
            let once = title_case(s);
            assert_eq!(title_case(&once), once, "not idempotent for {s:?}");
        }
    }

    #[test]
    fn forecast_sampling_takes_every_eighth_entry() {
        // 40 entries at 3-hour steps: five full days.
        let days = map_forecast(&forecast_payload(40), 3);
        assert_eq!(days.len(), 5);

        // Entries keep list order: indices 0, 8, 16, 24, 32.
        let temps: Vec<i64> = days.iter().map(|d| d.temperature).collect();
        assert_eq!(temps, vec![20, 28, 36, 44, 52]);
    }

    #[test]
    fn forecast_sampling_yields_ceil_of_n_over_stride() {
        for (entries, expected) in [(0, 0), (1, 1), (8, 1), (9, 2), (16, 2), (17, 3), (39, 5)] {
            let days = map_forecast(&forecast_payload(entries), 3);
            assert_eq!(days.len(), expected, "for {entries} entries");
        }
    }

    #[test]
    fn forecast_stride_follows_configured_step() {
        // 6-hour steps: stride 4, 8 entries cover two days.
        let days = map_forecast(&forecast_payload(8), 6);
        assert_eq!(days.len(), 2);
    }

    #[test]
    fn forecast_dates_are_short_and_human_readable() {
        let days = map_forecast(&forecast_payload(9), 3);
        assert_eq!(days[0].date, "Mon, Jan 15");
        assert_eq!(days[1].date, "Tue, Jan 16");
        assert_eq!(days[0].icon_url, "https://openweathermap.org/img/wn/10d.png");
        assert_eq!(days[0].description, "Light Rain");
    }

    #[test]
    fn missing_condition_entry_falls_back() {
        let mut payload = current_payload(10.0);
        payload.weather.clear();

        let report = map_current(&payload);
        assert_eq!(report.description, "Unknown");
        assert_eq!(report.icon_url, "https://openweathermap.org/img/wn/01d@2x.png");
    }
}
