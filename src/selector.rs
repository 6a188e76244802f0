//! Expands the configured year/month into the months to render.

use tracing::debug;

use crate::calendar::{self, MonthPlan};
use crate::config::Settings;
use crate::error::ConfigError;

/// Months named by `settings`, ordered January to December.
///
/// `target_month == 0` selects the whole year.
pub fn select(settings: &Settings) -> Result<Vec<MonthPlan>, ConfigError> {
    select_months(settings.target_year, settings.target_month)
}

pub fn select_months(year: i32, month: u32) -> Result<Vec<MonthPlan>, ConfigError> {
    if year <= 0 {
        return Err(ConfigError::MissingYear);
    }
    let months = match month {
        0 => 1..=12,
        1..=12 => month..=month,
        _ => return Err(ConfigError::InvalidMonth(month)),
    };
    let plans = months
        .map(|m| calendar::enumerate(year, m))
        .collect::<Result<Vec<_>, _>>()?;
    debug!(year, month, selected = plans.len(), "selected months");
    Ok(plans)
}
