//! editor-bridge — typed adapter over an embeddable code-editor engine.
//!
//! The engine (whatever tokenizes, renders, and runs the completion/hover
//! UI) sits behind the [`engine::EditorEngine`] trait. This crate supplies
//! the glue on top: pick an editing language, register one fixed light
//! theme, register completion suggestions, and register hover tooltips
//! keyed by identifier. Data shapes are plain `lsp-types` values, handed
//! over synchronously — no transport, no async.
//!
//! ```
//! # use editor_bridge::{EditorAdapter, HoverEntry, Suggestion};
//! # use editor_bridge::engine::{CompletionCallback, EditorEngine, HoverCallback, Registration, ViewOptions};
//! # use editor_bridge::theme::ThemeSpec;
//! # struct NullEngine;
//! # impl EditorEngine for NullEngine {
//! #     type View = ();
//! #     type Container = ();
//! #     fn define_theme(&self, _: &str, _: &ThemeSpec) {}
//! #     fn register_completions(&self, _: &str, _: CompletionCallback) -> Registration {
//! #         Registration::inert()
//! #     }
//! #     fn register_hover(&self, _: &str, _: HoverCallback) -> Registration {
//! #         Registration::inert()
//! #     }
//! #     fn create_view(&self, _: (), _: &ViewOptions) {}
//! # }
//! let mut adapter = EditorAdapter::new(NullEngine);
//! adapter.set_language("go");
//! adapter.init_suggestions(vec!["print".into()]);
//! adapter.init_hover([HoverEntry::new("print", "function", "print(a,b)")], true);
//! ```

pub mod adapter;
pub mod engine;
pub mod hover;
pub mod suggest;
pub mod theme;

pub use adapter::EditorAdapter;
pub use hover::HoverEntry;
pub use suggest::{Suggestion, SuggestionKind, UnknownKindError};
