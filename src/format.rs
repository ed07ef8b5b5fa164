//! Field formats and the read-only rule that depends on them.

use crate::locale::Locale;
use crate::types::{FormatFn, InternalMode, OneOrMany};

/// One entry of the caller's `format` option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatSpec<D> {
    /// Display and parse pattern
    Pattern(String),
    /// Pattern that also drives input masking
    Mask(String),
    /// Display-only formatter; such a field cannot be typed into
    Custom(FormatFn<D>),
}

impl<D> FormatSpec<D> {
    /// Returns the pattern text, if this entry has one
    pub fn pattern(&self) -> Option<&str> {
        match self {
            Self::Pattern(pattern) | Self::Mask(pattern) => Some(pattern),
            Self::Custom(_) => None,
        }
    }
}

impl<D> From<&str> for FormatSpec<D> {
    fn from(pattern: &str) -> Self {
        Self::Pattern(pattern.to_owned())
    }
}

/// A resolved format: a pattern or a custom formatter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatType<D> {
    Pattern(String),
    Custom(FormatFn<D>),
}

impl<D> FormatType<D> {
    pub const fn is_custom(&self) -> bool {
        matches!(self, Self::Custom(_))
    }
}

/// Derives the format list and the mask format.
///
/// Without a caller format (or with an empty list) the locale's field format
/// for the mode is used. The mask format is only set when the first entry is
/// a [`FormatSpec::Mask`].
pub fn field_format<D>(
    mode: InternalMode,
    locale: &Locale,
    format: Option<&OneOrMany<FormatSpec<D>>>,
) -> (Vec<FormatType<D>>, Option<String>) {
    let specs = format.map(OneOrMany::as_slice).unwrap_or_default();
    if specs.is_empty() {
        return (vec![FormatType::Pattern(locale.field_format(mode).to_owned())], None);
    }

    let mask_format = match &specs[0] {
        FormatSpec::Mask(pattern) => Some(pattern.clone()),
        FormatSpec::Pattern(_) | FormatSpec::Custom(_) => None,
    };
    let format_list = specs
        .iter()
        .map(|spec| match spec {
            FormatSpec::Pattern(pattern) | FormatSpec::Mask(pattern) => FormatType::Pattern(pattern.clone()),
            FormatSpec::Custom(formatter) => FormatType::Custom(formatter.clone()),
        })
        .collect();

    (format_list, mask_format)
}

/// Resolves whether the text input is read-only.
///
/// A custom first formatter cannot be parsed back, and a multi-value field is
/// edited through the panel only, so both force read-only.
pub fn input_read_only<D>(format_list: &[FormatType<D>], input_read_only: Option<bool>, multiple: bool) -> bool {
    if multiple || format_list.first().is_some_and(FormatType::is_custom) {
        return true;
    }
    input_read_only.unwrap_or(false)
}
