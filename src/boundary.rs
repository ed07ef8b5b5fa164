use crate::engine::SharedEngine;
use crate::types::{DisabledDate, DisabledInfo};

/// Folds the min/max boundaries into the caller's disabled-date rule.
///
/// A date is disabled when the caller's rule says so, or when it lies before
/// `min_date` / after `max_date` and does not share the boundary's unit at the
/// granularity the question is asked at (so the month holding `min_date` stays
/// selectable in a month panel).
pub fn disabled_boundary<D: 'static>(
    engine: SharedEngine<D>,
    locale: &str,
    disabled_date: Option<DisabledDate<D>>,
    min_date: Option<D>,
    max_date: Option<D>,
) -> DisabledDate<D> {
    let locale = locale.to_owned();

    DisabledDate::new(move |date: &D, info: &DisabledInfo<D>| {
        if disabled_date.as_ref().is_some_and(|rule| (**rule)(date, info)) {
            return true;
        }

        if let Some(min) = &min_date {
            if engine.is_after(min, date) && !engine.is_same(&locale, min, date, info.mode) {
                return true;
            }
        }

        if let Some(max) = &max_date {
            if engine.is_after(date, max) && !engine.is_same(&locale, max, date, info.mode) {
                return true;
            }
        }

        false
    })
}
