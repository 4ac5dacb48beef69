//! Console rendering surface.

use dashboard_core::{CurrentReport, ForecastDay, Units, View};

/// Renders display models to the terminal. Transient errors go to stderr so
/// they never interleave with the weather report itself.
#[derive(Debug)]
pub struct ConsoleView {
    units: Units,
}

impl ConsoleView {
    pub fn new(units: Units) -> Self {
        Self { units }
    }
}

impl View for ConsoleView {
    fn show_loading(&mut self, visible: bool) {
        if visible {
            println!("Fetching weather data...");
        }
    }

    fn show_error(&mut self, message: &str) {
        eprintln!("{message}");
    }

    fn clear_error(&mut self) {
        // A terminal has no persistent error widget to clear.
    }

    fn render(&mut self, current: &CurrentReport, forecast: &[ForecastDay]) -> anyhow::Result<()> {
        let temp = self.units.temperature_suffix();

        println!();
        println!("{}, {}", current.city, current.country);
        println!("{}  {}{temp}", current.description, current.temperature);
        println!(
            "Feels like {}{temp}   Humidity {}%   Wind {} {}   Pressure {} hPa",
            current.feels_like,
            current.humidity,
            current.wind_speed,
            self.units.wind_speed_suffix(),
            current.pressure
        );
        println!("Icon: {}", current.icon_url);

        if !forecast.is_empty() {
            println!();
            println!("Forecast:");
            for day in forecast {
                println!(
                    "  {:<12} {:>4}{temp}  {}",
                    day.date, day.temperature, day.description
                );
            }
        }
        println!();

        Ok(())
    }
}
