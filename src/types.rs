use crate::consts::{MONTHS_PER_QUARTER, YEARS_PER_DECADE};
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;
use std::str::FromStr;

/// Error returned when a mode identifier is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModeError {
    /// The identifier names no known mode.
    #[error("Unknown picker mode: {0}")]
    Unknown(String),
}

/// Granularity selected by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum PickerMode {
    #[default]
    #[display(fmt = "date")]
    Date,
    #[display(fmt = "week")]
    Week,
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "quarter")]
    Quarter,
    #[display(fmt = "year")]
    Year,
    #[display(fmt = "time")]
    Time,
}

impl PickerMode {
    /// Returns the identifier used in configuration
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Week => "week",
            Self::Month => "month",
            Self::Quarter => "quarter",
            Self::Year => "year",
            Self::Time => "time",
        }
    }
}

impl FromStr for PickerMode {
    type Err = ModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "date" => Ok(Self::Date),
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            "quarter" => Ok(Self::Quarter),
            "year" => Ok(Self::Year),
            "time" => Ok(Self::Time),
            other => Err(ModeError::Unknown(other.to_owned())),
        }
    }
}

impl TryFrom<String> for PickerMode {
    type Error = ModeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PickerMode> for &'static str {
    fn from(mode: PickerMode) -> Self {
        mode.as_str()
    }
}

/// The mode used by formatting and rendering.
///
/// Same as [`PickerMode`] plus `DateTime`, which only arises for a date picker
/// that also shows a time panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum InternalMode {
    #[display(fmt = "date")]
    Date,
    #[display(fmt = "week")]
    Week,
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "quarter")]
    Quarter,
    #[display(fmt = "year")]
    Year,
    #[display(fmt = "time")]
    Time,
    #[display(fmt = "datetime")]
    DateTime,
}

impl InternalMode {
    /// Resolves the internal mode from the caller's mode and whether a time
    /// config survived resolution.
    pub const fn resolve(picker: PickerMode, has_show_time: bool) -> Self {
        match picker {
            PickerMode::Date if has_show_time => Self::DateTime,
            PickerMode::Date => Self::Date,
            PickerMode::Week => Self::Week,
            PickerMode::Month => Self::Month,
            PickerMode::Quarter => Self::Quarter,
            PickerMode::Year => Self::Year,
            PickerMode::Time => Self::Time,
        }
    }

    /// `true` for modes that carry a time of day
    #[inline]
    pub const fn has_time(self) -> bool {
        matches!(self, Self::Time | Self::DateTime)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Week => "week",
            Self::Month => "month",
            Self::Quarter => "quarter",
            Self::Year => "year",
            Self::Time => "time",
            Self::DateTime => "datetime",
        }
    }
}

impl From<PickerMode> for InternalMode {
    fn from(mode: PickerMode) -> Self {
        Self::resolve(mode, false)
    }
}

impl FromStr for InternalMode {
    type Err = ModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "datetime" => Ok(Self::DateTime),
            other => other.parse::<PickerMode>().map(Self::from),
        }
    }
}

impl TryFrom<String> for InternalMode {
    type Error = ModeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<InternalMode> for &'static str {
    fn from(mode: InternalMode) -> Self {
        mode.as_str()
    }
}

/// Granularity at which a date is checked against the disabled rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelMode {
    #[display(fmt = "time")]
    Time,
    #[display(fmt = "date")]
    Date,
    #[display(fmt = "week")]
    Week,
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "quarter")]
    Quarter,
    #[display(fmt = "year")]
    Year,
    #[display(fmt = "decade")]
    Decade,
}

impl From<PickerMode> for PanelMode {
    fn from(mode: PickerMode) -> Self {
        match mode {
            PickerMode::Date => Self::Date,
            PickerMode::Week => Self::Week,
            PickerMode::Month => Self::Month,
            PickerMode::Quarter => Self::Quarter,
            PickerMode::Year => Self::Year,
            PickerMode::Time => Self::Time,
        }
    }
}

impl From<InternalMode> for PanelMode {
    fn from(mode: InternalMode) -> Self {
        match mode {
            InternalMode::Date | InternalMode::DateTime => Self::Date,
            InternalMode::Week => Self::Week,
            InternalMode::Month => Self::Month,
            InternalMode::Quarter => Self::Quarter,
            InternalMode::Year => Self::Year,
            InternalMode::Time => Self::Time,
        }
    }
}

/// Which end of a range is being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangeSide {
    #[display(fmt = "start")]
    Start,
    #[display(fmt = "end")]
    End,
}

/// A field that accepts either a single item or a list of items.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    /// Returns the first item, if any
    pub fn first(&self) -> Option<&T> {
        match self {
            Self::One(item) => Some(item),
            Self::Many(items) => items.first(),
        }
    }

    /// Returns the items as a slice
    pub fn as_slice(&self) -> &[T] {
        match self {
            Self::One(item) => std::slice::from_ref(item),
            Self::Many(items) => items,
        }
    }
}

/// Coerces a scalar-or-list field into its list form.
///
/// An absent field stays absent, and so does an empty list, so downstream
/// code only ever sees `None` or a non-empty list. A caller that passes an
/// empty list is therefore treated like one that passed nothing.
pub fn to_list<T: Clone>(value: Option<&OneOrMany<T>>) -> Option<Vec<T>> {
    match value? {
        OneOrMany::One(item) => Some(vec![item.clone()]),
        OneOrMany::Many(items) if items.is_empty() => None,
        OneOrMany::Many(items) => Some(items.clone()),
    }
}

/// Reference-counted handle compared by identity.
///
/// Two handles are equal only when they point at the same allocation, which
/// is what lets memoized stages tell "same callback" from "new callback".
pub struct Shared<T: ?Sized>(Rc<T>);

impl<T: ?Sized> Shared<T> {
    /// Returns `true` if both handles point at the same allocation
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T: ?Sized> Clone for Shared<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T: ?Sized> PartialEq for Shared<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl<T: ?Sized> Eq for Shared<T> {}

impl<T: ?Sized> Deref for Shared<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T: ?Sized> From<Rc<T>> for Shared<T> {
    fn from(rc: Rc<T>) -> Self {
        Self(rc)
    }
}

impl<T: ?Sized> fmt::Debug for Shared<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Shared({:p})", Rc::as_ptr(&self.0))
    }
}

/// Extra context handed to a disabled-date rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisabledInfo<D> {
    /// Granularity the date is being checked at
    pub mode: PanelMode,
    /// Already selected start of a range, if any
    pub from: Option<D>,
    /// Index of the range input being edited (0 = start, 1 = end)
    pub active_index: Option<usize>,
}

impl<D> DisabledInfo<D> {
    pub const fn new(mode: PanelMode) -> Self {
        Self {
            mode,
            from: None,
            active_index: None,
        }
    }
}

/// Per-unit disablers returned by a [`DisabledTime`] callback.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DisabledTimes {
    pub disabled_hours: Option<DisabledHours>,
    pub disabled_minutes: Option<DisabledMinutes>,
    pub disabled_seconds: Option<DisabledSeconds>,
    pub disabled_milliseconds: Option<DisabledMilliseconds>,
}

/// Rendered output of a slot renderer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Display, From, Into)]
pub struct Markup(pub String);

/// Attributes handed to a slot renderer
pub type InputAttrs = BTreeMap<String, String>;

pub type DisabledDate<D> = Shared<dyn Fn(&D, &DisabledInfo<D>) -> bool>;
pub type InvalidDate<D> = Shared<dyn Fn(&D, Option<&DisabledInfo<D>>) -> bool>;
pub type DisabledTime<D> = Shared<dyn Fn(&D, RangeSide, Option<&D>) -> DisabledTimes>;
pub type DisabledHours = Shared<dyn Fn() -> Vec<u32>>;
pub type DisabledMinutes = Shared<dyn Fn(u32) -> Vec<u32>>;
pub type DisabledSeconds = Shared<dyn Fn(u32, u32) -> Vec<u32>>;
pub type DisabledMilliseconds = Shared<dyn Fn(u32, u32, u32) -> Vec<u32>>;
pub type FormatFn<D> = Shared<dyn Fn(&D) -> String>;
pub type Renderer = Shared<dyn Fn(&InputAttrs) -> Markup>;

impl<D> Shared<dyn Fn(&D, &DisabledInfo<D>) -> bool> {
    pub fn new(f: impl Fn(&D, &DisabledInfo<D>) -> bool + 'static) -> Self {
        Self(Rc::new(f))
    }
}

impl<D> Shared<dyn Fn(&D, Option<&DisabledInfo<D>>) -> bool> {
    pub fn new(f: impl Fn(&D, Option<&DisabledInfo<D>>) -> bool + 'static) -> Self {
        Self(Rc::new(f))
    }
}

impl<D> Shared<dyn Fn(&D, RangeSide, Option<&D>) -> DisabledTimes> {
    pub fn new(f: impl Fn(&D, RangeSide, Option<&D>) -> DisabledTimes + 'static) -> Self {
        Self(Rc::new(f))
    }
}

impl Shared<dyn Fn() -> Vec<u32>> {
    pub fn new(f: impl Fn() -> Vec<u32> + 'static) -> Self {
        Self(Rc::new(f))
    }
}

impl Shared<dyn Fn(u32) -> Vec<u32>> {
    pub fn new(f: impl Fn(u32) -> Vec<u32> + 'static) -> Self {
        Self(Rc::new(f))
    }
}

impl Shared<dyn Fn(u32, u32) -> Vec<u32>> {
    pub fn new(f: impl Fn(u32, u32) -> Vec<u32> + 'static) -> Self {
        Self(Rc::new(f))
    }
}

impl Shared<dyn Fn(u32, u32, u32) -> Vec<u32>> {
    pub fn new(f: impl Fn(u32, u32, u32) -> Vec<u32> + 'static) -> Self {
        Self(Rc::new(f))
    }
}

impl<D> Shared<dyn Fn(&D) -> String> {
    pub fn new(f: impl Fn(&D) -> String + 'static) -> Self {
        Self(Rc::new(f))
    }
}

impl Shared<dyn Fn(&InputAttrs) -> Markup> {
    pub fn new(f: impl Fn(&InputAttrs) -> Markup + 'static) -> Self {
        Self(Rc::new(f))
    }
}

// Helper functions

pub(crate) const fn quarter_of(month: u32) -> u32 {
    (month - 1) / MONTHS_PER_QUARTER + 1
}

pub(crate) const fn decade_of(year: i32) -> i32 {
    year.div_euclid(YEARS_PER_DECADE)
}
