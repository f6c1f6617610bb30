//! Completion suggestions: the caller-facing spec shapes and their
//! normalization into `lsp-types` completion items.

use std::str::FromStr;

use lsp_types::{
    CompletionItem, CompletionItemKind, CompletionTextEdit, InsertTextFormat, Range, TextEdit,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A completion-kind name outside the closed [`SuggestionKind`] set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown completion kind: {0:?}")]
pub struct UnknownKindError(pub String);

/// Completion category, mirroring the engine's kind enumeration.
///
/// Closed by construction: names that fall outside this set are rejected at
/// the parse boundary (`FromStr` / deserialization) instead of flowing into
/// the engine as an absent kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SuggestionKind {
    Text,
    Method,
    Function,
    Constructor,
    Field,
    Variable,
    Class,
    Interface,
    Module,
    Property,
    Unit,
    Value,
    Enum,
    Keyword,
    Snippet,
    Color,
    File,
    Reference,
    Folder,
    EnumMember,
    Constant,
    Struct,
    Event,
    Operator,
    TypeParameter,
}

impl SuggestionKind {
    /// Engine-side kind for this category.
    pub fn to_lsp(self) -> CompletionItemKind {
        match self {
            Self::Text => CompletionItemKind::TEXT,
            Self::Method => CompletionItemKind::METHOD,
            Self::Function => CompletionItemKind::FUNCTION,
            Self::Constructor => CompletionItemKind::CONSTRUCTOR,
            Self::Field => CompletionItemKind::FIELD,
            Self::Variable => CompletionItemKind::VARIABLE,
            Self::Class => CompletionItemKind::CLASS,
            Self::Interface => CompletionItemKind::INTERFACE,
            Self::Module => CompletionItemKind::MODULE,
            Self::Property => CompletionItemKind::PROPERTY,
            Self::Unit => CompletionItemKind::UNIT,
            Self::Value => CompletionItemKind::VALUE,
            Self::Enum => CompletionItemKind::ENUM,
            Self::Keyword => CompletionItemKind::KEYWORD,
            Self::Snippet => CompletionItemKind::SNIPPET,
            Self::Color => CompletionItemKind::COLOR,
            Self::File => CompletionItemKind::FILE,
            Self::Reference => CompletionItemKind::REFERENCE,
            Self::Folder => CompletionItemKind::FOLDER,
            Self::EnumMember => CompletionItemKind::ENUM_MEMBER,
            Self::Constant => CompletionItemKind::CONSTANT,
            Self::Struct => CompletionItemKind::STRUCT,
            Self::Event => CompletionItemKind::EVENT,
            Self::Operator => CompletionItemKind::OPERATOR,
            Self::TypeParameter => CompletionItemKind::TYPE_PARAMETER,
        }
    }
}

impl FromStr for SuggestionKind {
    type Err = UnknownKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "Text" => Self::Text,
            "Method" => Self::Method,
            "Function" => Self::Function,
            "Constructor" => Self::Constructor,
            "Field" => Self::Field,
            "Variable" => Self::Variable,
            "Class" => Self::Class,
            "Interface" => Self::Interface,
            "Module" => Self::Module,
            "Property" => Self::Property,
            "Unit" => Self::Unit,
            "Value" => Self::Value,
            "Enum" => Self::Enum,
            "Keyword" => Self::Keyword,
            "Snippet" => Self::Snippet,
            "Color" => Self::Color,
            "File" => Self::File,
            "Reference" => Self::Reference,
            "Folder" => Self::Folder,
            "EnumMember" => Self::EnumMember,
            "Constant" => Self::Constant,
            "Struct" => Self::Struct,
            "Event" => Self::Event,
            "Operator" => Self::Operator,
            "TypeParameter" => Self::TypeParameter,
            other => return Err(UnknownKindError(other.to_string())),
        })
    }
}

/// One suggestion as the caller specifies it.
///
/// On the wire (JSON/YAML) this is a string-or-record union: a bare string
/// is shorthand for a callable inserted as `name()`, a record carries the
/// full item. Deserialization is untagged, so both forms parse directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Suggestion {
    /// Shorthand: a callable name, completed as `name()`.
    Bare(String),
    /// Full item: label/text/detail carried verbatim.
    Structured {
        label: String,
        text: String,
        detail: String,
        kind: SuggestionKind,
    },
}

impl From<&str> for Suggestion {
    fn from(name: &str) -> Self {
        Self::Bare(name.to_string())
    }
}

impl From<String> for Suggestion {
    fn from(name: String) -> Self {
        Self::Bare(name)
    }
}

/// Build completion items for a batch of specs at a cursor word range.
///
/// Called per completion request so the emitted text edits carry the range
/// the engine reported for that request. All items insert as snippets,
/// matching the engine's placeholder-aware insertion mode.
pub(crate) fn completion_items(specs: &[Suggestion], range: Range) -> Vec<CompletionItem> {
    specs
        .iter()
        .map(|spec| {
            let (label, text, detail, kind) = match spec {
                Suggestion::Bare(name) => (
                    name.clone(),
                    format!("{name}()"),
                    name.clone(),
                    SuggestionKind::Function,
                ),
                Suggestion::Structured { label, text, detail, kind } => {
                    (label.clone(), text.clone(), detail.clone(), *kind)
                }
            };
            CompletionItem {
                label,
                kind: Some(kind.to_lsp()),
                detail: Some(detail),
                insert_text: Some(text.clone()),
                insert_text_format: Some(InsertTextFormat::SNIPPET),
                text_edit: Some(CompletionTextEdit::Edit(TextEdit::new(range, text))),
                ..Default::default()
            }
        })
        .collect()
}
