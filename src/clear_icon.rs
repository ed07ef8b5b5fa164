use serde::{Deserialize, Serialize};

use crate::consts::CLEAR_BTN_SUFFIX;
use crate::prelude::*;

/// A renderable icon descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Icon {
    /// Caller-provided markup
    #[display(fmt = "{_0}")]
    Custom(String),
    /// Built-in clear button
    #[display(fmt = "<span class=\"{class_name}\"></span>")]
    Clear { class_name: String },
}

impl Icon {
    /// The default clear button for a class-name prefix
    pub fn clear_button(prefix_cls: &str) -> Self {
        Self::Clear {
            class_name: format!("{prefix_cls}{CLEAR_BTN_SUFFIX}"),
        }
    }
}

/// Legacy allow-clear option: a flag or a config carrying its own icon.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AllowClear {
    Flag(bool),
    Config {
        #[serde(default, rename = "clearIcon")]
        clear_icon: Option<Icon>,
    },
}

impl AllowClear {
    /// Whether clearing is enabled at all
    pub const fn is_enabled(&self) -> bool {
        match self {
            Self::Flag(enabled) => *enabled,
            Self::Config { .. } => true,
        }
    }
}

impl From<bool> for AllowClear {
    fn from(enabled: bool) -> Self {
        Self::Flag(enabled)
    }
}

/// Resolves the clear affordance from the legacy inputs.
///
/// An explicit icon wins, then the allow-clear config's own icon, then the
/// built-in button when clearing is enabled.
pub fn fill_clear_icon(prefix_cls: &str, allow_clear: Option<&AllowClear>, clear_icon: Option<&Icon>) -> Option<Icon> {
    if let Some(icon) = clear_icon {
        return Some(icon.clone());
    }

    match allow_clear? {
        AllowClear::Config {
            clear_icon: Some(icon),
        } => Some(icon.clone()),
        allow_clear if allow_clear.is_enabled() => Some(Icon::clear_button(prefix_cls)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_clear_icon_cases() {
        struct TestCase {
            allow_clear: Option<AllowClear>,
            clear_icon: Option<Icon>,
            expected: Option<Icon>,
            description: &'static str,
        }

        let custom = Icon::Custom("x".to_owned());
        let cases = [
            TestCase {
                allow_clear: Some(AllowClear::Flag(false)),
                clear_icon: Some(custom.clone()),
                expected: Some(custom.clone()),
                description: "explicit icon wins over disabled flag",
            },
            TestCase {
                allow_clear: Some(AllowClear::Flag(true)),
                clear_icon: Some(custom.clone()),
                expected: Some(custom.clone()),
                description: "explicit icon wins over enabled flag",
            },
            TestCase {
                allow_clear: Some(AllowClear::Flag(true)),
                clear_icon: None,
                expected: Some(Icon::clear_button("my-picker")),
                description: "enabled flag synthesizes default",
            },
            TestCase {
                allow_clear: Some(AllowClear::Config {
                    clear_icon: Some(Icon::Custom("y".to_owned())),
                }),
                clear_icon: None,
                expected: Some(Icon::Custom("y".to_owned())),
                description: "config icon used when no explicit icon",
            },
            TestCase {
                allow_clear: Some(AllowClear::Config { clear_icon: None }),
                clear_icon: None,
                expected: Some(Icon::clear_button("my-picker")),
                description: "empty config counts as enabled",
            },
            TestCase {
                allow_clear: Some(AllowClear::Flag(false)),
                clear_icon: None,
                expected: None,
                description: "disabled flag",
            },
            TestCase {
                allow_clear: None,
                clear_icon: None,
                expected: None,
                description: "nothing supplied",
            },
        ];

        for case in &cases {
            assert_eq!(
                fill_clear_icon("my-picker", case.allow_clear.as_ref(), case.clear_icon.as_ref()),
                case.expected,
                "{}",
                case.description
            );
        }
    }

    #[test]
    fn test_clear_button_uses_prefix() {
        let icon = Icon::clear_button("rc-picker");
        assert_eq!(
            icon,
            Icon::Clear {
                class_name: "rc-picker-clear-btn".to_owned()
            }
        );
        assert_eq!(icon.to_string(), r#"<span class="rc-picker-clear-btn"></span>"#);
    }

    #[test]
    fn test_allow_clear_serde() {
        let flag: AllowClear = serde_json::from_str("true").expect("flag");
        assert_eq!(flag, AllowClear::Flag(true));

        let config: AllowClear = serde_json::from_str(r#"{"clearIcon": {"custom": "x"}}"#).expect("config");
        assert_eq!(
            config,
            AllowClear::Config {
                clear_icon: Some(Icon::Custom("x".to_owned()))
            }
        );

        let empty: AllowClear = serde_json::from_str("{}").expect("empty config");
        assert!(empty.is_enabled());
    }
}
