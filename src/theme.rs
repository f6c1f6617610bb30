//! The fixed visual theme the adapter registers with the engine.

use serde::{Deserialize, Serialize};

/// Name the fixed theme is registered under.
pub const THEME_NAME: &str = "daylight";

/// Base style a theme derives from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BaseTheme {
    Light,
    Dark,
    HighContrast,
}

/// Syntax-highlight override for one token scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRule {
    pub token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreground: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_style: Option<String>,
}

/// A theme definition as the engine's theme-registration capability takes
/// it: a base style, an inherit flag, token rules, and UI color pairs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeSpec {
    pub base: BaseTheme,
    pub inherit: bool,
    #[serde(default)]
    pub rules: Vec<TokenRule>,
    #[serde(default)]
    pub colors: Vec<(String, String)>,
}

/// Light theme tuned for forms embedded in white pages: white background,
/// neutral gutter, no token rule overrides.
pub fn daylight() -> ThemeSpec {
    let colors = [
        ("editor.background", "#FFF"),
        ("editorGutter.background", "#f1f1f1"),
        ("editorLineNumber.foreground", "#333333"),
        ("editor.lineHighlightBorder", "#c6c6c6"),
    ];
    ThemeSpec {
        base: BaseTheme::Light,
        inherit: true,
        rules: Vec::new(),
        colors: colors
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    }
}
