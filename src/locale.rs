//! Locale tables.
//!
//! Callers hand in a [`PartialLocale`] (usually deserialized from a JSON
//! table); [`fill_locale`] turns it into a [`Locale`] with every format set.

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_CELL_DATE_FORMAT, DEFAULT_CELL_QUARTER_FORMAT, DEFAULT_CELL_YEAR_FORMAT,
    DEFAULT_DATE_FORMAT, DEFAULT_DATE_TIME_FORMAT, DEFAULT_LOCALE, DEFAULT_MONTH_FORMAT,
    DEFAULT_QUARTER_FORMAT, DEFAULT_TIME_FORMAT, DEFAULT_WEEK_FORMAT, DEFAULT_YEAR_FORMAT,
};
use crate::types::InternalMode;

/// Caller-supplied locale, any field may be missing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartialLocale {
    pub locale: Option<String>,
    pub field_date_format: Option<String>,
    pub field_date_time_format: Option<String>,
    pub field_time_format: Option<String>,
    pub field_week_format: Option<String>,
    pub field_month_format: Option<String>,
    pub field_quarter_format: Option<String>,
    pub field_year_format: Option<String>,
    pub year_format: Option<String>,
    pub day_format: Option<String>,
    pub cell_date_format: Option<String>,
    pub cell_year_format: Option<String>,
    pub cell_quarter_format: Option<String>,
}

/// Fully populated locale.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Locale {
    pub locale: String,
    pub field_date_format: String,
    pub field_date_time_format: String,
    pub field_time_format: String,
    pub field_week_format: String,
    pub field_month_format: String,
    pub field_quarter_format: String,
    pub field_year_format: String,
    pub year_format: String,
    pub cell_date_format: String,
    pub cell_year_format: String,
    pub cell_quarter_format: String,
}

impl Locale {
    /// Returns the input-field format for a mode
    pub fn field_format(&self, mode: InternalMode) -> &str {
        match mode {
            InternalMode::Date => &self.field_date_format,
            InternalMode::DateTime => &self.field_date_time_format,
            InternalMode::Time => &self.field_time_format,
            InternalMode::Week => &self.field_week_format,
            InternalMode::Month => &self.field_month_format,
            InternalMode::Quarter => &self.field_quarter_format,
            InternalMode::Year => &self.field_year_format,
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        fill_locale(None)
    }
}

/// Fills every missing locale field with its default.
pub fn fill_locale(locale: Option<&PartialLocale>) -> Locale {
    let empty = PartialLocale::default();
    let partial = locale.unwrap_or(&empty);
    let or = |value: &Option<String>, default: &str| value.clone().unwrap_or_else(|| default.to_owned());

    Locale {
        locale: or(&partial.locale, DEFAULT_LOCALE),
        field_date_format: or(&partial.field_date_format, DEFAULT_DATE_FORMAT),
        field_date_time_format: or(&partial.field_date_time_format, DEFAULT_DATE_TIME_FORMAT),
        field_time_format: or(&partial.field_time_format, DEFAULT_TIME_FORMAT),
        field_week_format: or(&partial.field_week_format, DEFAULT_WEEK_FORMAT),
        field_month_format: or(&partial.field_month_format, DEFAULT_MONTH_FORMAT),
        field_quarter_format: or(&partial.field_quarter_format, DEFAULT_QUARTER_FORMAT),
        field_year_format: or(&partial.field_year_format, DEFAULT_YEAR_FORMAT),
        year_format: or(&partial.year_format, DEFAULT_YEAR_FORMAT),
        cell_date_format: partial
            .cell_date_format
            .clone()
            .or_else(|| partial.day_format.clone())
            .unwrap_or_else(|| DEFAULT_CELL_DATE_FORMAT.to_owned()),
        cell_year_format: or(&partial.cell_year_format, DEFAULT_CELL_YEAR_FORMAT),
        cell_quarter_format: or(&partial.cell_quarter_format, DEFAULT_CELL_QUARTER_FORMAT),
    }
}
