//! Hover tooltips: keyed entries and their rendering into content blocks.

use lsp_types::{LanguageString, MarkedString};
use serde::{Deserialize, Serialize};

/// Label shown when an entry does not name one.
pub const DEFAULT_LABEL: &str = "method";

/// One hover tooltip, keyed by the identifier it is shown for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoverEntry {
    /// Identifier the tooltip is attached to.
    pub key: String,
    /// Display label above the code block ("type" on the wire). Empty falls
    /// back to [`DEFAULT_LABEL`].
    #[serde(rename = "type", default)]
    pub label: String,
    /// Raw content shown inside the code block.
    pub value: String,
}

impl HoverEntry {
    pub fn new(
        key: impl Into<String>,
        label: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self { key: key.into(), label: label.into(), value: value.into() }
    }
}

/// Put every comma on its own line: `"a,b"` becomes `"a,\nb"`.
///
/// Purely cosmetic reflow for comma-separated signatures that would
/// otherwise render as one long line inside the tooltip.
pub fn reflow_commas(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    text.split(',').collect::<Vec<_>>().join(",\n")
}

/// Render an entry into its two content blocks: the label, then the value
/// inside a code block tagged with `language`.
pub(crate) fn render_entry(entry: &HoverEntry, language: &str, reflow: bool) -> Vec<MarkedString> {
    let label = if entry.label.is_empty() { DEFAULT_LABEL } else { &entry.label };
    let body = if reflow { reflow_commas(&entry.value) } else { entry.value.clone() };
    vec![
        MarkedString::String(label.to_string()),
        MarkedString::LanguageString(LanguageString {
            language: language.to_string(),
            value: body,
        }),
    ]
}

/// Contents returned when the hovered word has no entry.
pub(crate) fn empty_contents() -> Vec<MarkedString> {
    vec![MarkedString::String(String::new())]
}
