/// Class-name prefix used when the caller does not supply one
pub const DEFAULT_PREFIX_CLS: &str = "rc-picker";

/// Suffix appended to the prefix for the synthesized clear button
pub const CLEAR_BTN_SUFFIX: &str = "-clear-btn";

/// Locale code used when no locale is supplied
pub const DEFAULT_LOCALE: &str = "en_US";

/// Default field formats, one per picker granularity
pub const DEFAULT_DATE_FORMAT: &str = "YYYY-MM-DD";
pub const DEFAULT_TIME_FORMAT: &str = "HH:mm:ss";
pub const DEFAULT_DATE_TIME_FORMAT: &str = "YYYY-MM-DD HH:mm:ss";
pub const DEFAULT_WEEK_FORMAT: &str = "gggg-wo";
pub const DEFAULT_MONTH_FORMAT: &str = "YYYY-MM";
pub const DEFAULT_QUARTER_FORMAT: &str = "YYYY-[Q]Q";
pub const DEFAULT_YEAR_FORMAT: &str = "YYYY";

/// Default cell formats used by panels
pub const DEFAULT_CELL_DATE_FORMAT: &str = "D";
pub const DEFAULT_CELL_YEAR_FORMAT: &str = "YYYY";
pub const DEFAULT_CELL_QUARTER_FORMAT: &str = "[Q]Q";

/// Time format tokens
pub(crate) const HOUR_24_TOKEN: &str = "HH";
pub(crate) const HOUR_12_TOKEN: &str = "hh";
pub(crate) const MINUTE_TOKEN: &str = "mm";
pub(crate) const SECOND_TOKEN: &str = "ss";
pub(crate) const MILLISECOND_TOKEN: &str = "SSS";
pub(crate) const MERIDIEM_TOKEN: &str = "A";

/// Separator between time units (ISO 8601 extended format)
pub const TIME_SEPARATOR: char = ':';
/// Separator before the millisecond fraction
pub const FRACTION_SEPARATOR: char = '.';

/// Number of months in a quarter
pub(crate) const MONTHS_PER_QUARTER: u32 = 3;
/// Number of years in a decade panel
pub(crate) const YEARS_PER_DECADE: i32 = 10;

/// Legacy per-unit time disablers that were replaced by `disabledTime`
pub const DEPRECATED_TIME_PROPS: [&str; 3] = ["disabledHours", "disabledMinutes", "disabledSeconds"];

/// Advisory emitted when a time picker still uses the legacy disablers
pub const DEPRECATED_TIME_PROPS_MESSAGE: &str = "'disabledHours', 'disabledMinutes', 'disabledSeconds' will be removed in the next major version, please use 'disabledTime' instead.";
