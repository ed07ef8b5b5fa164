use crate::engine::SharedEngine;
use crate::time::TimeConfig;
use crate::types::{DisabledDate, DisabledInfo, DisabledTimes, InvalidDate, PanelMode, PickerMode, RangeSide};

/// Builds the predicate that flags dates the picker must not accept.
///
/// Unlike [`crate::boundary::disabled_boundary`] this uses the caller's raw
/// disabled-date rule (no min/max folding) and additionally rejects times
/// that the time config disables.
pub fn invalidity_predicate<D: Clone + 'static>(
    engine: SharedEngine<D>,
    picker: PickerMode,
    disabled_date: Option<DisabledDate<D>>,
    show_time: Option<TimeConfig<D>>,
) -> InvalidDate<D> {
    InvalidDate::new(move |date: &D, info: Option<&DisabledInfo<D>>| {
        let outside = DisabledInfo {
            mode: info.map_or_else(|| PanelMode::from(picker), |info| info.mode),
            from: info.and_then(|info| info.from.clone()),
            active_index: None,
        };

        if !engine.is_valid(date) || disabled_date.as_ref().is_some_and(|rule| (**rule)(date, &outside)) {
            return true;
        }

        let Some(config) = show_time.as_ref() else {
            return false;
        };
        if !matches!(picker, PickerMode::Date | PickerMode::Time) {
            return false;
        }

        let side = match info.and_then(|info| info.active_index) {
            Some(1) => RangeSide::End,
            _ => RangeSide::Start,
        };
        let DisabledTimes {
            disabled_hours,
            disabled_minutes,
            disabled_seconds,
            disabled_milliseconds,
        } = config
            .disabled_time
            .as_ref()
            .map(|disabled_time| (**disabled_time)(date, side, outside.from.as_ref()))
            .unwrap_or_default();

        let disabled_hours = disabled_hours.or_else(|| config.disabled_hours.clone());
        let disabled_minutes = disabled_minutes.or_else(|| config.disabled_minutes.clone());
        let disabled_seconds = disabled_seconds.or_else(|| config.disabled_seconds.clone());

        let hour = engine.hour(date);
        let minute = engine.minute(date);
        let second = engine.second(date);
        let millisecond = engine.millisecond(date);

        disabled_hours.is_some_and(|f| (*f)().contains(&hour))
            || disabled_minutes.is_some_and(|f| (*f)(hour).contains(&minute))
            || disabled_seconds.is_some_and(|f| (*f)(hour, minute).contains(&second))
            || disabled_milliseconds.is_some_and(|f| (*f)(hour, minute, second).contains(&millisecond))
    })
}
