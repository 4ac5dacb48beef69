//! Fixed sample data for demo mode.
//!
//! When no usable API key is configured the dashboard feeds these payloads
//! through the same mapper and rendering path as live data, so both modes
//! exercise identical code downstream of the fetch.

use crate::payload::{
    City, ConditionEntry, CurrentPayload, ForecastEntry, ForecastPayload, MainReadings, Sys, Wind,
};

pub const SAMPLE_CITY: &str = "New York";

/// 2024-01-15T12:00:00Z, a Monday.
const SAMPLE_BASE_DT: i64 = 1_705_320_000;

/// Five sample days: temperature, description, icon code.
const SAMPLE_DAYS: [(f64, &str, &str); 5] = [
    (22.0, "partly cloudy", "02d"),
    (18.0, "light rain", "10d"),
    (25.0, "clear sky", "01d"),
    (20.0, "scattered clouds", "03d"),
    (23.0, "sunny", "01d"),
];

pub fn sample_current() -> CurrentPayload {
    CurrentPayload {
        name: SAMPLE_CITY.to_string(),
        sys: Sys { country: "US".to_string() },
        main: MainReadings { temp: 22.0, feels_like: 24.0, humidity: 65, pressure: 1013 },
        weather: vec![ConditionEntry {
            description: "partly cloudy".to_string(),
            icon: "02d".to_string(),
        }],
        wind: Wind { speed: 3.5 },
    }
}

/// Build a forecast payload shaped like the provider's: entries every
/// `step_hours`, so day sampling leaves exactly one entry per sample day.
pub fn sample_forecast(step_hours: u8) -> ForecastPayload {
    let step_hours = i64::from(step_hours.max(1));
    let slots_per_day = 24 / step_hours;

    let mut list = Vec::with_capacity(SAMPLE_DAYS.len() * slots_per_day as usize);
    for (day, (temp, description, icon)) in SAMPLE_DAYS.iter().enumerate() {
        for slot in 0..slots_per_day {
            list.push(ForecastEntry {
                dt: SAMPLE_BASE_DT + day as i64 * 86_400 + slot * step_hours * 3600,
                main: MainReadings {
                    temp: *temp,
                    feels_like: *temp,
                    humidity: 65,
                    pressure: 1013,
                },
                weather: vec![ConditionEntry {
                    description: (*description).to_string(),
                    icon: (*icon).to_string(),
                }],
            });
        }
    }

    ForecastPayload {
        list,
        city: City { name: SAMPLE_CITY.to_string(), country: "US".to_string() },
    }
}

pub fn sample_pair(step_hours: u8) -> (CurrentPayload, ForecastPayload) {
    (sample_current(), sample_forecast(step_hours))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::{map_current, map_forecast};

    #[test]
    fn sample_current_maps_to_new_york_report() {
        let report = map_current(&sample_current());
        assert_eq!(report.city, "New York");
        assert_eq!(report.country, "US");
        assert_eq!(report.temperature, 22);
        assert_eq!(report.feels_like, 24);
        assert_eq!(report.description, "Partly Cloudy");
    }

    #[test]
    fn sample_forecast_maps_to_five_days() {
        let days = map_forecast(&sample_forecast(3), 3);

        assert_eq!(days.len(), 5);
        assert_eq!(days[0].date, "Mon, Jan 15");
        assert_eq!(days[4].date, "Fri, Jan 19");

        let temps: Vec<i64> = days.iter().map(|d| d.temperature).collect();
        assert_eq!(temps, vec![22, 18, 25, 20, 23]);
    }

    #[test]
    fn sample_forecast_follows_the_configured_step() {
        // A coarser step still maps to one entry per sample day.
        let days = map_forecast(&sample_forecast(6), 6);
        assert_eq!(days.len(), 5);
    }
}
