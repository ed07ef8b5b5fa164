//! Raw and normalized picker configuration records.

use std::collections::BTreeMap;

use crate::clear_icon::{fill_clear_icon, AllowClear, Icon};
use crate::consts::DEFAULT_PREFIX_CLS;
use crate::engine::SharedEngine;
use crate::format::FormatSpec;
use crate::locale::{Locale, PartialLocale};
use crate::prelude::*;
use crate::time::{ShowTime, TimeConfig};
use crate::types::{DisabledDate, DisabledHours, DisabledMinutes, DisabledSeconds, OneOrMany, PickerMode, Renderer};

/// Per-part inline styles, keyed by part name then CSS property
pub type SemanticStyles = BTreeMap<String, BTreeMap<String, String>>;
/// Per-part class names, keyed by part name
pub type SemanticClassNames = BTreeMap<String, String>;
/// Component slot overrides, keyed by slot name
pub type Components = BTreeMap<String, Renderer>;

/// Name of the input component slot
pub const INPUT_SLOT: &str = "input";

/// Caller-supplied picker configuration. Everything but the engine is optional.
#[derive(Debug, Clone, PartialEq)]
pub struct PickerProps<D> {
    pub engine: SharedEngine<D>,
    pub locale: Option<PartialLocale>,
    pub picker: Option<PickerMode>,
    pub prefix_cls: Option<String>,
    pub styles: Option<SemanticStyles>,
    pub class_names: Option<SemanticClassNames>,
    pub order: Option<bool>,
    pub components: Option<Components>,
    /// Legacy input renderer, superseded by `components["input"]`
    pub input_render: Option<Renderer>,
    pub allow_clear: Option<AllowClear>,
    /// Legacy clear icon, superseded by `allow_clear`
    pub clear_icon: Option<Icon>,
    pub need_confirm: Option<bool>,
    pub multiple: Option<bool>,
    pub format: Option<OneOrMany<FormatSpec<D>>>,
    pub input_read_only: Option<bool>,
    pub disabled_date: Option<DisabledDate<D>>,
    pub min_date: Option<D>,
    pub max_date: Option<D>,
    pub show_time: Option<ShowTime<D>>,
    /// Deprecated, use `TimeConfig::disabled_time`
    pub disabled_hours: Option<DisabledHours>,
    /// Deprecated, use `TimeConfig::disabled_time`
    pub disabled_minutes: Option<DisabledMinutes>,
    /// Deprecated, use `TimeConfig::disabled_time`
    pub disabled_seconds: Option<DisabledSeconds>,
    pub value: Option<OneOrMany<D>>,
    pub default_value: Option<OneOrMany<D>>,
    pub picker_value: Option<OneOrMany<D>>,
    pub default_picker_value: Option<OneOrMany<D>>,
}

impl<D> PickerProps<D> {
    /// Props with every optional field unset
    pub fn new(engine: SharedEngine<D>) -> Self {
        Self {
            engine,
            locale: None,
            picker: None,
            prefix_cls: None,
            styles: None,
            class_names: None,
            order: None,
            components: None,
            input_render: None,
            allow_clear: None,
            clear_icon: None,
            need_confirm: None,
            multiple: None,
            format: None,
            input_read_only: None,
            disabled_date: None,
            min_date: None,
            max_date: None,
            show_time: None,
            disabled_hours: None,
            disabled_minutes: None,
            disabled_seconds: None,
            value: None,
            default_value: None,
            picker_value: None,
            default_picker_value: None,
        }
    }

    /// Whether a time picker still uses the per-unit disablers
    pub fn uses_deprecated_time_props(&self) -> bool {
        self.picker == Some(PickerMode::Time)
            && (self.disabled_hours.is_some() || self.disabled_minutes.is_some() || self.disabled_seconds.is_some())
    }
}

/// First-stage configuration: defaults filled, legacy options folded in.
#[derive(Debug, Clone, PartialEq)]
pub struct BaseProps<D> {
    pub engine: SharedEngine<D>,
    pub locale: Locale,
    pub picker: PickerMode,
    pub prefix_cls: String,
    pub styles: SemanticStyles,
    pub class_names: SemanticClassNames,
    pub order: bool,
    pub components: Components,
    pub clear_icon: Option<Icon>,
    pub multiple: bool,
    pub format: Option<OneOrMany<FormatSpec<D>>>,
    pub min_date: Option<D>,
    pub max_date: Option<D>,
    pub show_time: Option<TimeConfig<D>>,
    pub value: Option<Vec<D>>,
    pub default_value: Option<Vec<D>>,
    pub picker_value: Option<Vec<D>>,
    pub default_picker_value: Option<Vec<D>>,
}

/// Normalized configuration handed to rendering.
///
/// Dereferences to its [`BaseProps`]; the three fields here are the ones the
/// final merge overrides.
#[derive(Debug, Clone, PartialEq, Deref)]
pub struct FilledProps<D> {
    #[deref]
    pub base: BaseProps<D>,
    pub need_confirm: bool,
    pub input_read_only: bool,
    /// Caller rule with the min/max boundaries folded in
    pub disabled_date: DisabledDate<D>,
}

/// Partial override returned by an [`Updater`]. `Some` fields replace the
/// corresponding base field.
#[derive(Debug, Clone, PartialEq)]
pub struct PropsOverride<D> {
    pub locale: Option<Locale>,
    pub prefix_cls: Option<String>,
    pub styles: Option<SemanticStyles>,
    pub class_names: Option<SemanticClassNames>,
    pub order: Option<bool>,
    pub components: Option<Components>,
    pub clear_icon: Option<Option<Icon>>,
    pub show_time: Option<Option<TimeConfig<D>>>,
    pub value: Option<Option<Vec<D>>>,
    pub default_value: Option<Option<Vec<D>>>,
    pub picker_value: Option<Option<Vec<D>>>,
    pub default_picker_value: Option<Option<Vec<D>>>,
}

impl<D> Default for PropsOverride<D> {
    fn default() -> Self {
        Self {
            locale: None,
            prefix_cls: None,
            styles: None,
            class_names: None,
            order: None,
            components: None,
            clear_icon: None,
            show_time: None,
            value: None,
            default_value: None,
            picker_value: None,
            default_picker_value: None,
        }
    }
}

impl<D> PropsOverride<D> {
    /// Writes every set field onto `base`
    pub fn apply(self, base: &mut BaseProps<D>) {
        let Self {
            locale,
            prefix_cls,
            styles,
            class_names,
            order,
            components,
            clear_icon,
            show_time,
            value,
            default_value,
            picker_value,
            default_picker_value,
        } = self;

        if let Some(locale) = locale {
            base.locale = locale;
        }
        if let Some(prefix_cls) = prefix_cls {
            base.prefix_cls = prefix_cls;
        }
        if let Some(styles) = styles {
            base.styles = styles;
        }
        if let Some(class_names) = class_names {
            base.class_names = class_names;
        }
        if let Some(order) = order {
            base.order = order;
        }
        if let Some(components) = components {
            base.components = components;
        }
        if let Some(clear_icon) = clear_icon {
            base.clear_icon = clear_icon;
        }
        if let Some(show_time) = show_time {
            base.show_time = show_time;
        }
        if let Some(value) = value {
            base.value = value;
        }
        if let Some(default_value) = default_value {
            base.default_value = default_value;
        }
        if let Some(picker_value) = picker_value {
            base.picker_value = picker_value;
        }
        if let Some(default_picker_value) = default_picker_value {
            base.default_picker_value = default_picker_value;
        }
    }
}

/// Extension point run once per base recomputation; its output wins over the
/// base defaults but not over the final merge.
pub type Updater<D> = dyn Fn(&BaseProps<D>) -> PropsOverride<D>;

/// Normalized inputs the base merge consumes besides the raw props.
#[derive(Debug, Clone, PartialEq)]
pub struct BaseInputs<D> {
    pub locale: Locale,
    pub show_time: Option<TimeConfig<D>>,
    pub value: Option<Vec<D>>,
    pub default_value: Option<Vec<D>>,
    pub picker_value: Option<Vec<D>>,
    pub default_picker_value: Option<Vec<D>>,
}

/// Builds the first-stage configuration.
pub fn fill_base<D: Clone>(props: &PickerProps<D>, inputs: BaseInputs<D>, updater: Option<&Updater<D>>) -> BaseProps<D> {
    let prefix_cls = props
        .prefix_cls
        .clone()
        .unwrap_or_else(|| DEFAULT_PREFIX_CLS.to_owned());

    let mut components = Components::new();
    if let Some(input_render) = &props.input_render {
        components.insert(INPUT_SLOT.to_owned(), input_render.clone());
    }
    // caller slots override the legacy renderer
    components.extend(props.components.iter().flatten().map(|(k, v)| (k.clone(), v.clone())));

    let clear_icon = fill_clear_icon(&prefix_cls, props.allow_clear.as_ref(), props.clear_icon.as_ref());

    let mut base = BaseProps {
        engine: props.engine.clone(),
        locale: inputs.locale,
        picker: props.picker.unwrap_or_default(),
        prefix_cls,
        styles: props.styles.clone().unwrap_or_default(),
        class_names: props.class_names.clone().unwrap_or_default(),
        order: props.order.unwrap_or(true),
        components,
        clear_icon,
        multiple: props.multiple.unwrap_or(false),
        format: props.format.clone(),
        min_date: props.min_date.clone(),
        max_date: props.max_date.clone(),
        show_time: inputs.show_time,
        value: inputs.value,
        default_value: inputs.default_value,
        picker_value: inputs.picker_value,
        default_picker_value: inputs.default_picker_value,
    };

    if let Some(updater) = updater {
        updater(&base).apply(&mut base);
    }

    base
}
