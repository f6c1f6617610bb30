//! The adapter: language selection, theme, and provider wiring over an
//! [`EditorEngine`].

use std::collections::HashMap;
use std::sync::Arc;

use lsp_types::{CompletionList, Hover, HoverContents, MarkedString};
use parking_lot::Mutex;

use crate::engine::{EditorEngine, Registration, ViewOptions, WordQuery};
use crate::hover::{empty_contents, render_entry, HoverEntry};
use crate::suggest::{completion_items, Suggestion};
use crate::theme::{self, THEME_NAME};

type HoverMap = HashMap<String, Vec<MarkedString>>;

/// Caller-owned adapter over a code-editor engine.
///
/// Holds the current editing language and wires suggestion and hover data
/// into the engine's provider extension points. At most one completion and
/// one hover registration are live at a time; re-registering releases the
/// previous one first, and dropping the adapter releases both.
///
/// Construction registers the fixed [`theme::daylight`] theme with the
/// engine. Multiple adapters over distinct engines are fully independent.
pub struct EditorAdapter<E: EditorEngine> {
    engine: E,
    language: String,
    hover_map: Arc<Mutex<HoverMap>>,
    completion_reg: Option<Registration>,
    hover_reg: Option<Registration>,
}

impl<E: EditorEngine> EditorAdapter<E> {
    /// Wrap an engine. Starts on `"python"` and registers the fixed theme.
    pub fn new(engine: E) -> Self {
        let adapter = Self {
            engine,
            language: "python".to_string(),
            hover_map: Arc::new(Mutex::new(HashMap::new())),
            completion_reg: None,
            hover_reg: None,
        };
        adapter.define_theme();
        adapter
    }

    /// Current editing language.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Set the editing language used for subsequent registrations and view
    /// construction. Any string is accepted; providers already registered
    /// keep their original language — re-register to pick up the change.
    pub fn set_language(&mut self, language: impl Into<String>) {
        self.language = language.into();
    }

    /// Register the fixed theme under [`THEME_NAME`]. Safe to call again;
    /// the engine overwrites the earlier definition.
    pub fn define_theme(&self) {
        self.engine.define_theme(THEME_NAME, &theme::daylight());
    }

    /// Register a completion provider for the current language serving
    /// `specs`. Replaces any live completion registration.
    ///
    /// Items are rebuilt on every request at the engine-reported word range,
    /// and the returned list is marked incomplete so the engine re-queries
    /// as the user keeps typing.
    pub fn init_suggestions(&mut self, specs: Vec<Suggestion>) {
        // Release-before-replace: never two live providers on one event.
        self.completion_reg.take();

        tracing::debug!("registering completion provider: language={} specs={}", self.language, specs.len());
        let specs: Arc<[Suggestion]> = specs.into();
        let provider = Box::new(move |query: &WordQuery| CompletionList {
            is_incomplete: true,
            items: completion_items(&specs, query.range),
        });
        self.completion_reg = Some(self.engine.register_completions(&self.language, provider));
    }

    /// Store hover entries (last write wins per key) and register a hover
    /// provider for the current language. Replaces any live hover
    /// registration.
    ///
    /// With `reflow` set, each value has its commas broken onto separate
    /// lines before rendering; see [`crate::hover::reflow_commas`].
    pub fn init_hover(&mut self, entries: impl IntoIterator<Item = HoverEntry>, reflow: bool) {
        {
            let mut map = self.hover_map.lock();
            for entry in entries {
                let contents = render_entry(&entry, &self.language, reflow);
                map.insert(entry.key, contents);
            }
        }

        self.hover_reg.take();

        tracing::debug!("registering hover provider: language={}", self.language);
        let map = Arc::clone(&self.hover_map);
        let provider = Box::new(move |query: &WordQuery| Hover {
            contents: HoverContents::Array(
                map.lock().get(&query.word).cloned().unwrap_or_else(empty_contents),
            ),
            range: None,
        });
        self.hover_reg = Some(self.engine.register_hover(&self.language, provider));
    }

    /// Release both live registrations. Language and hover entries stay
    /// intact; a no-op when nothing is registered.
    pub fn dispose(&mut self) {
        if self.completion_reg.take().is_some() || self.hover_reg.take().is_some() {
            tracing::debug!("released provider registrations");
        }
    }

    /// Build an editor view bound to `container`, using the current language,
    /// the fixed theme, and the fixed display options. `None` container
    /// yields `None` with no side effects.
    pub fn create_view(&self, container: Option<E::Container>) -> Option<E::View> {
        let container = container?;
        let options = ViewOptions::for_language(&self.language, THEME_NAME);
        Some(self.engine.create_view(container, &options))
    }

    /// Borrow the wrapped engine.
    pub fn engine(&self) -> &E {
        &self.engine
    }
}
