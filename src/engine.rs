//! Contract between the adapter and the editor engine it drives.
//!
//! The engine is whatever actually tokenizes, renders, and runs the
//! completion/hover UI. This crate never talks to a concrete engine;
//! everything goes through [`EditorEngine`], and provider callbacks hand
//! back plain `lsp-types` values synchronously.

use std::fmt;

use lsp_types::{CompletionList, Hover, Range};
use serde::{Deserialize, Serialize};

use crate::theme::ThemeSpec;

/// What the engine passes a provider at user-interaction time: the word
/// under the cursor and the range it spans.
#[derive(Debug, Clone, PartialEq)]
pub struct WordQuery {
    /// Word under the cursor. Empty when the cursor is not on a word.
    pub word: String,
    /// Range the word spans in the document.
    pub range: Range,
}

impl WordQuery {
    pub fn new(word: impl Into<String>, range: Range) -> Self {
        Self { word: word.into(), range }
    }
}

/// Completion provider installed on the engine. Invoked on every completion
/// request; the returned list is rebuilt fresh each call.
pub type CompletionCallback = Box<dyn Fn(&WordQuery) -> CompletionList + Send + Sync>;

/// Hover provider installed on the engine.
pub type HoverCallback = Box<dyn Fn(&WordQuery) -> Hover + Send + Sync>;

/// Owned handle for a live provider registration.
///
/// Wraps the engine's release operation and runs it exactly once — on
/// [`release`](Registration::release) or on drop, whichever comes first.
pub struct Registration {
    release: Option<Box<dyn FnOnce() + Send>>,
}

impl Registration {
    /// Wrap an engine release operation.
    pub fn new(release: impl FnOnce() + Send + 'static) -> Self {
        Self { release: Some(Box::new(release)) }
    }

    /// A registration with nothing to tear down.
    pub fn inert() -> Self {
        Self { release: None }
    }

    /// Release now instead of at drop time.
    pub fn release(self) {
        drop(self);
    }
}

impl Drop for Registration {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("live", &self.release.is_some())
            .finish()
    }
}

/// How the engine indents soft-wrapped lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WrappingIndent {
    None,
    Same,
    Indent,
    DeepIndent,
}

/// Display options handed to the engine when constructing a view.
///
/// [`ViewOptions::for_language`] is the bundle the adapter always uses:
/// compact gutter, no folding, no minimap, lightbulb and parameter hints on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewOptions {
    pub language: String,
    pub theme: String,
    pub wrapping_indent: WrappingIndent,
    pub font_size: u16,
    pub folding: bool,
    pub line_numbers_min_chars: u8,
    pub automatic_layout: bool,
    pub minimap: bool,
    pub lightbulb: bool,
    pub parameter_hints: bool,
    pub snippets_prevent_quick_suggestions: bool,
}

impl ViewOptions {
    /// The fixed bundle used by the adapter for every view it creates.
    pub fn for_language(language: impl Into<String>, theme: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            theme: theme.into(),
            wrapping_indent: WrappingIndent::Indent,
            font_size: 14,
            folding: false,
            line_numbers_min_chars: 2,
            automatic_layout: true,
            minimap: false,
            lightbulb: true,
            parameter_hints: true,
            snippets_prevent_quick_suggestions: false,
        }
    }
}

/// Capabilities the adapter consumes from the editor engine.
///
/// Each registration returns a [`Registration`] whose drop detaches the
/// provider. `define_theme` is overwrite-on-conflict: registering the same
/// name twice replaces the earlier definition.
pub trait EditorEngine {
    /// A constructed editor view.
    type View;
    /// Whatever the engine binds a view to (a DOM node, a terminal region).
    type Container;

    fn define_theme(&self, name: &str, theme: &ThemeSpec);

    fn register_completions(&self, language: &str, provider: CompletionCallback)
        -> Registration;

    fn register_hover(&self, language: &str, provider: HoverCallback) -> Registration;

    fn create_view(&self, container: Self::Container, options: &ViewOptions) -> Self::View;
}
