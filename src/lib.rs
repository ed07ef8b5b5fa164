mod boundary;
mod clear_icon;
mod consts;
mod diagnostics;
mod engine;
mod format;
mod invalidate;
mod locale;
mod memo;
mod prelude;
mod props;
mod time;
mod types;

#[cfg(test)]
mod test_utils;

pub use boundary::disabled_boundary;
pub use clear_icon::{fill_clear_icon, AllowClear, Icon};
pub use consts::*;
pub use diagnostics::{deprecated_time_props, DiagnosticSink, FillOptions, TracingSink};
pub use engine::{ChronoEngine, DateEngine, SharedEngine};
pub use format::{field_format, input_read_only, FormatSpec, FormatType};
pub use invalidate::invalidity_predicate;
pub use locale::{fill_locale, Locale, PartialLocale};
pub use memo::Memo;
pub use props::{
    fill_base, BaseInputs, BaseProps, Components, FilledProps, PickerProps, PropsOverride, SemanticClassNames,
    SemanticStyles, Updater, INPUT_SLOT,
};
pub use time::{resolve_time_config, ShowTime, TimeConfig};
pub use types::{
    to_list, DisabledDate, DisabledHours, DisabledInfo, DisabledMilliseconds, DisabledMinutes, DisabledSeconds,
    DisabledTime, DisabledTimes, FormatFn, InputAttrs, InternalMode, InvalidDate, Markup, ModeError, OneOrMany,
    PanelMode, PickerMode, RangeSide, Renderer, Shared,
};

type FormatKey<D> = (InternalMode, Locale, Option<OneOrMany<FormatSpec<D>>>);
type FormatOutput<D> = (Vec<FormatType<D>>, Option<String>);
type BoundaryKey<D> = (SharedEngine<D>, String, Option<DisabledDate<D>>, Option<D>, Option<D>);
type InvalidateKey<D> = (SharedEngine<D>, PickerMode, Option<DisabledDate<D>>, Option<TimeConfig<D>>);
type FilledKey<D> = (BaseProps<D>, bool, bool, DisabledDate<D>);

/// Everything the pipeline derives from one set of props.
#[derive(Debug, Clone, PartialEq)]
pub struct Filled<D> {
    pub props: FilledProps<D>,
    /// Granularity used for formatting, `DateTime` for a date picker with time
    pub internal_mode: InternalMode,
    /// Time-bearing or multi-value; such pickers confirm by default
    pub complex: bool,
    pub format_list: Vec<FormatType<D>>,
    pub mask_format: Option<String>,
    pub is_invalid_date: InvalidDate<D>,
}

/// Memoizing props pipeline.
///
/// Each stage keeps the result for its last inputs, so filling the same props
/// again returns the same predicates and records without recomputing them.
pub struct PropsFiller<D> {
    options: FillOptions,
    sink: Box<dyn DiagnosticSink>,
    warned: bool,
    value: Memo<Option<OneOrMany<D>>, Option<Vec<D>>>,
    default_value: Memo<Option<OneOrMany<D>>, Option<Vec<D>>>,
    picker_value: Memo<Option<OneOrMany<D>>, Option<Vec<D>>>,
    default_picker_value: Memo<Option<OneOrMany<D>>, Option<Vec<D>>>,
    base: Memo<PickerProps<D>, BaseProps<D>>,
    format: Memo<FormatKey<D>, FormatOutput<D>>,
    boundary: Memo<BoundaryKey<D>, DisabledDate<D>>,
    invalidate: Memo<InvalidateKey<D>, InvalidDate<D>>,
    filled: Memo<FilledKey<D>, FilledProps<D>>,
}

impl<D: Clone + PartialEq + 'static> PropsFiller<D> {
    /// Filler that reports advisories through `tracing`
    pub fn new(options: FillOptions) -> Self {
        Self::with_sink(options, TracingSink)
    }

    pub fn with_sink(options: FillOptions, sink: impl DiagnosticSink + 'static) -> Self {
        Self {
            options,
            sink: Box::new(sink),
            warned: false,
            value: Memo::new(),
            default_value: Memo::new(),
            picker_value: Memo::new(),
            default_picker_value: Memo::new(),
            base: Memo::new(),
            format: Memo::new(),
            boundary: Memo::new(),
            invalidate: Memo::new(),
            filled: Memo::new(),
        }
    }

    /// Normalizes `props` and derives the values rendering needs.
    ///
    /// `updater` runs once each time the base record is rebuilt and may
    /// override any base field; `need_confirm`, `input_read_only` and
    /// `disabled_date` are applied after it and always win.
    pub fn fill(&mut self, props: &PickerProps<D>, updater: Option<&Updater<D>>) -> Filled<D> {
        let picker = props.picker.unwrap_or_default();

        let value = self.value.get_or_compute(props.value.clone(), |v| to_list(v.as_ref()));
        let default_value = self
            .default_value
            .get_or_compute(props.default_value.clone(), |v| to_list(v.as_ref()));
        let picker_value = self
            .picker_value
            .get_or_compute(props.picker_value.clone(), |v| to_list(v.as_ref()));
        let default_picker_value = self
            .default_picker_value
            .get_or_compute(props.default_picker_value.clone(), |v| to_list(v.as_ref()));

        self.advise(props);

        let locale = fill_locale(props.locale.as_ref());
        let show_time = resolve_time_config(props);

        let inputs = BaseInputs {
            locale: locale.clone(),
            show_time: show_time.clone(),
            value,
            default_value,
            picker_value,
            default_picker_value,
        };
        let base = self.base.get_or_compute(props.clone(), |props| {
            tracing::debug!(target: "picker_props", %picker, "rebuilding base props");
            fill_base(props, inputs, updater)
        });

        let multiple = props.multiple.unwrap_or(false);
        let internal_mode = InternalMode::resolve(picker, base.show_time.is_some());
        let complex = internal_mode.has_time() || multiple;
        let need_confirm = props.need_confirm.unwrap_or(complex);

        let (format_list, mask_format) = self.format.get_or_compute(
            (internal_mode, locale.clone(), props.format.clone()),
            |(mode, locale, format)| {
                tracing::trace!(target: "picker_props", %mode, "deriving formats");
                field_format(*mode, locale, format.as_ref())
            },
        );
        let read_only = input_read_only(&format_list, props.input_read_only, multiple);

        let disabled_date = self.boundary.get_or_compute(
            (
                base.engine.clone(),
                locale.locale.clone(),
                props.disabled_date.clone(),
                props.min_date.clone(),
                props.max_date.clone(),
            ),
            |(engine, locale, disabled_date, min_date, max_date)| {
                tracing::trace!(target: "picker_props", "deriving boundary predicate");
                disabled_boundary(
                    engine.clone(),
                    locale,
                    disabled_date.clone(),
                    min_date.clone(),
                    max_date.clone(),
                )
            },
        );

        let is_invalid_date = self.invalidate.get_or_compute(
            (props.engine.clone(), picker, props.disabled_date.clone(), show_time),
            |(engine, picker, disabled_date, show_time)| {
                tracing::trace!(target: "picker_props", "deriving invalidity predicate");
                invalidity_predicate(engine.clone(), *picker, disabled_date.clone(), show_time.clone())
            },
        );

        let props = self.filled.get_or_compute(
            (base, need_confirm, read_only, disabled_date),
            |(base, need_confirm, input_read_only, disabled_date)| FilledProps {
                base: base.clone(),
                need_confirm: *need_confirm,
                input_read_only: *input_read_only,
                disabled_date: disabled_date.clone(),
            },
        );

        Filled {
            props,
            internal_mode,
            complex,
            format_list,
            mask_format,
            is_invalid_date,
        }
    }

    fn advise(&mut self, props: &PickerProps<D>) {
        if !self.options.diagnostics_enabled || self.warned {
            return;
        }
        if let Some(message) = deprecated_time_props(props) {
            self.sink.warn(message);
            self.warned = true;
        }
    }
}

impl<D: Clone + PartialEq + 'static> Default for PropsFiller<D> {
    fn default() -> Self {
        Self::new(FillOptions::default())
    }
}

/// One-shot pipeline run with default options.
///
/// Nothing is cached between calls, and the deprecation advisory is only
/// deduplicated within one [`PropsFiller`], so every call may warn again.
/// Keep a `PropsFiller` around to fill the same picker repeatedly.
pub fn fill_props<D: Clone + PartialEq + 'static>(props: &PickerProps<D>, updater: Option<&Updater<D>>) -> Filled<D> {
    PropsFiller::default().fill(props, updater)
}
