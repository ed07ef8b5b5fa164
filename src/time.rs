use crate::consts::{
    FRACTION_SEPARATOR, HOUR_12_TOKEN, HOUR_24_TOKEN, MERIDIEM_TOKEN, MILLISECOND_TOKEN, MINUTE_TOKEN, SECOND_TOKEN,
    TIME_SEPARATOR,
};
use crate::format::FormatSpec;
use crate::props::PickerProps;
use crate::types::{DisabledHours, DisabledMinutes, DisabledSeconds, DisabledTime, OneOrMany, PickerMode};

/// Detailed time-panel configuration.
///
/// After [`resolve_time_config`] the show flags, `use_12_hours` and `format`
/// are always `Some`.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeConfig<D> {
    pub format: Option<String>,
    pub show_hour: Option<bool>,
    pub show_minute: Option<bool>,
    pub show_second: Option<bool>,
    pub show_millisecond: Option<bool>,
    pub use_12_hours: Option<bool>,
    pub hour_step: Option<u32>,
    pub minute_step: Option<u32>,
    pub second_step: Option<u32>,
    pub millisecond_step: Option<u32>,
    pub hide_disabled_options: Option<bool>,
    pub default_open_value: Option<D>,
    pub disabled_time: Option<DisabledTime<D>>,
    pub disabled_hours: Option<DisabledHours>,
    pub disabled_minutes: Option<DisabledMinutes>,
    pub disabled_seconds: Option<DisabledSeconds>,
}

impl<D> Default for TimeConfig<D> {
    fn default() -> Self {
        Self {
            format: None,
            show_hour: None,
            show_minute: None,
            show_second: None,
            show_millisecond: None,
            use_12_hours: None,
            hour_step: None,
            minute_step: None,
            second_step: None,
            millisecond_step: None,
            hide_disabled_options: None,
            default_open_value: None,
            disabled_time: None,
            disabled_hours: None,
            disabled_minutes: None,
            disabled_seconds: None,
        }
    }
}

/// Raw time-display option: a boolean shorthand or a detailed config.
#[derive(Debug, Clone, PartialEq)]
pub enum ShowTime<D> {
    Enabled(bool),
    Config(TimeConfig<D>),
}

impl<D> From<bool> for ShowTime<D> {
    fn from(enabled: bool) -> Self {
        Self::Enabled(enabled)
    }
}

impl<D> From<TimeConfig<D>> for ShowTime<D> {
    fn from(config: TimeConfig<D>) -> Self {
        Self::Config(config)
    }
}

/// Reduces the raw time option to a detailed config, or `None` when no time
/// panel is shown.
///
/// A time picker always gets a config, even without `show_time`. The legacy
/// top-level disablers fill the config's slots when the config has none.
pub fn resolve_time_config<D: Clone>(props: &PickerProps<D>) -> Option<TimeConfig<D>> {
    let picker = props.picker.unwrap_or_default();
    let mut config = match &props.show_time {
        Some(ShowTime::Config(config)) => config.clone(),
        Some(ShowTime::Enabled(true)) => TimeConfig::default(),
        Some(ShowTime::Enabled(false)) | None if picker == PickerMode::Time => TimeConfig::default(),
        _ => return None,
    };

    config.disabled_hours = config.disabled_hours.or_else(|| props.disabled_hours.clone());
    config.disabled_minutes = config.disabled_minutes.or_else(|| props.disabled_minutes.clone());
    config.disabled_seconds = config.disabled_seconds.or_else(|| props.disabled_seconds.clone());

    if config.format.is_none() && picker == PickerMode::Time {
        config.format = props
            .format
            .as_ref()
            .and_then(OneOrMany::first)
            .and_then(FormatSpec::pattern)
            .map(str::to_owned);
    }

    let format = config.format.as_deref();
    let has_token = |tokens: &str| format.is_some_and(|f| f.chars().any(|c| tokens.contains(c)));
    let any_flag = [config.show_hour, config.show_minute, config.show_second, config.show_millisecond]
        .iter()
        .any(Option::is_some);

    let (show_hour, show_minute, show_second, show_millisecond) = if !any_flag && format.is_none() {
        (true, true, true, false)
    } else {
        (
            config.show_hour.unwrap_or_else(|| has_token("Hh")),
            config.show_minute.unwrap_or_else(|| has_token("m")),
            config.show_second.unwrap_or_else(|| has_token("s")),
            config.show_millisecond.unwrap_or_else(|| has_token("S")),
        )
    };
    let use_12_hours = config.use_12_hours.unwrap_or_else(|| has_token("aAh"));

    if config.format.is_none() {
        config.format = Some(build_time_format(
            show_hour,
            show_minute,
            show_second,
            show_millisecond,
            use_12_hours,
        ));
    }
    config.show_hour = Some(show_hour);
    config.show_minute = Some(show_minute);
    config.show_second = Some(show_second);
    config.show_millisecond = Some(show_millisecond);
    config.use_12_hours = Some(use_12_hours);

    Some(config)
}

fn build_time_format(hour: bool, minute: bool, second: bool, millisecond: bool, use_12_hours: bool) -> String {
    let mut format = String::new();
    if hour {
        format.push_str(if use_12_hours { HOUR_12_TOKEN } else { HOUR_24_TOKEN });
    }
    for (shown, token) in [(minute, MINUTE_TOKEN), (second, SECOND_TOKEN)] {
        if shown {
            if !format.is_empty() {
                format.push(TIME_SEPARATOR);
            }
            format.push_str(token);
        }
    }
    if millisecond {
        if !format.is_empty() {
            format.push(FRACTION_SEPARATOR);
        }
        format.push_str(MILLISECOND_TOKEN);
    }
    if use_12_hours {
        format.push(' ');
        format.push_str(MERIDIEM_TOKEN);
    }
    format
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{props, Date};

    #[test]
    fn test_absent_show_time_is_none_for_date() {
        let props = props();
        assert!(resolve_time_config(&props).is_none());
    }

    #[test]
    fn test_show_time_false_is_none_for_date() {
        let props = PickerProps {
            show_time: Some(false.into()),
            ..props()
        };
        assert!(resolve_time_config(&props).is_none());
    }

    #[test]
    fn test_time_picker_always_has_config() {
        let props = PickerProps {
            picker: Some(PickerMode::Time),
            ..props()
        };
        let config = resolve_time_config(&props).expect("time picker gets a config");
        assert_eq!(config.format.as_deref(), Some("HH:mm:ss"));
        assert_eq!(config.show_hour, Some(true));
        assert_eq!(config.show_minute, Some(true));
        assert_eq!(config.show_second, Some(true));
        assert_eq!(config.show_millisecond, Some(false));
        assert_eq!(config.use_12_hours, Some(false));
    }

    #[test]
    fn test_boolean_shorthand_expands_to_default_config() {
        let props = PickerProps {
            show_time: Some(true.into()),
            ..props()
        };
        let config = resolve_time_config(&props).expect("show_time=true gets a config");
        assert_eq!(config.format.as_deref(), Some("HH:mm:ss"));
    }

    #[test]
    fn test_flags_inferred_from_format() {
        let config = TimeConfig::<Date> {
            format: Some("hh:mm a".to_owned()),
            ..TimeConfig::default()
        };
        let props = PickerProps {
            show_time: Some(config.into()),
            ..props()
        };
        let resolved = resolve_time_config(&props).expect("config");

        assert_eq!(resolved.format.as_deref(), Some("hh:mm a"));
        assert_eq!(resolved.show_hour, Some(true));
        assert_eq!(resolved.show_minute, Some(true));
        assert_eq!(resolved.show_second, Some(false));
        assert_eq!(resolved.use_12_hours, Some(true));
    }

    #[test]
    fn test_format_built_from_flags() {
        struct TestCase {
            config: TimeConfig<Date>,
            expected: &'static str,
            description: &'static str,
        }

        let cases = [
            TestCase {
                config: TimeConfig {
                    show_hour: Some(true),
                    show_minute: Some(true),
                    ..TimeConfig::default()
                },
                expected: "HH:mm",
                description: "hour and minute",
            },
            TestCase {
                config: TimeConfig {
                    show_hour: Some(true),
                    use_12_hours: Some(true),
                    ..TimeConfig::default()
                },
                expected: "hh A",
                description: "12 hour clock",
            },
            TestCase {
                config: TimeConfig {
                    show_second: Some(true),
                    show_millisecond: Some(true),
                    ..TimeConfig::default()
                },
                expected: "ss.SSS",
                description: "seconds with fraction",
            },
        ];

        for case in cases {
            let props = PickerProps {
                show_time: Some(case.config.into()),
                ..props()
            };
            let resolved = resolve_time_config(&props).expect("config");
            assert_eq!(resolved.format.as_deref(), Some(case.expected), "{}", case.description);
        }
    }

    #[test]
    fn test_time_picker_takes_format_prop() {
        let props = PickerProps {
            picker: Some(PickerMode::Time),
            format: Some(OneOrMany::One(FormatSpec::Pattern("HH:mm".to_owned()))),
            ..props()
        };
        let resolved = resolve_time_config(&props).expect("config");
        assert_eq!(resolved.format.as_deref(), Some("HH:mm"));
        assert_eq!(resolved.show_second, Some(false));
    }

    #[test]
    fn test_legacy_disablers_fill_config() {
        let legacy = DisabledHours::new(|| vec![0, 1]);
        let own = DisabledMinutes::new(|_| vec![30]);
        let legacy_minutes = DisabledMinutes::new(|_| vec![15]);

        let props = PickerProps {
            picker: Some(PickerMode::Time),
            show_time: Some(
                TimeConfig {
                    disabled_minutes: Some(own.clone()),
                    ..TimeConfig::default()
                }
                .into(),
            ),
            disabled_hours: Some(legacy.clone()),
            disabled_minutes: Some(legacy_minutes),
            ..props()
        };
        let resolved = resolve_time_config(&props).expect("config");

        assert_eq!(resolved.disabled_hours, Some(legacy));
        assert_eq!(resolved.disabled_minutes, Some(own));
        assert!(resolved.disabled_seconds.is_none());
    }
}
