//! Admin projection metadata
//!
//! Everything an embedding admin front end needs to render the catalog,
//! described as plain serializable data: which record types exist, their
//! form fields with labels and help texts, list columns, filters,
//! fieldset grouping and inline child tables. The crate ships a default
//! projection built by [`default_site`]; there is no process-wide
//! registry, callers hold the [`AdminSite`] value they build.

mod site;

pub use site::default_site;

use indexmap::IndexMap;
use serde::Serialize;

/// Record types the admin projection can describe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelKind {
    Book,
    Author,
    BookInstance,
    Genre,
    Language,
}

impl ModelKind {
    /// Stored form fields of this record type
    pub fn fields(&self) -> &'static [FieldMeta] {
        site::fields(*self)
    }

    /// Computed list columns this record type offers beyond its stored
    /// fields (for example a book's joined genre names)
    pub fn derived_ops(&self) -> &'static [FieldMeta] {
        site::derived_ops(*self)
    }
}

impl std::fmt::Display for ModelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ModelKind::Book => "book",
            ModelKind::Author => "author",
            ModelKind::BookInstance => "book_instance",
            ModelKind::Genre => "genre",
            ModelKind::Language => "language",
        };
        write!(f, "{}", name)
    }
}

/// One form field: its name plus the label and help text a front end
/// should show. A missing label means "derive it from the name".
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FieldMeta {
    pub name: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help_text: Option<&'static str>,
}

/// A labeled group of form rows; fields sharing a row render side by side
#[derive(Debug, Clone, Serialize)]
pub struct Fieldset {
    pub label: Option<&'static str>,
    pub rows: Vec<Vec<&'static str>>,
}

/// A child table edited inline on the parent's form
#[derive(Debug, Clone, Serialize)]
pub struct ModelInline {
    pub model: ModelKind,
    /// Blank extra rows to offer for new children
    pub extra: u32,
}

/// Per-model presentation options. The all-default value means: one
/// list column showing the record's display string, a flat form with
/// every field on its own row, no filters, no inlines.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ModelAdmin {
    pub list_display: Vec<&'static str>,
    pub list_filter: Vec<&'static str>,
    pub fieldsets: Vec<Fieldset>,
    pub inlines: Vec<ModelInline>,
}

/// The full projection: registered models in registration order
#[derive(Debug, Clone, Default, Serialize)]
pub struct AdminSite {
    models: IndexMap<ModelKind, ModelAdmin>,
}

impl AdminSite {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a model. Re-registering replaces the previous options
    /// but keeps the original position.
    pub fn register(&mut self, model: ModelKind, admin: ModelAdmin) {
        self.models.insert(model, admin);
    }

    pub fn get(&self, model: ModelKind) -> Option<&ModelAdmin> {
        self.models.get(&model)
    }

    /// Registered models with their options, in registration order
    pub fn models(&self) -> impl Iterator<Item = (ModelKind, &ModelAdmin)> {
        self.models.iter().map(|(kind, admin)| (*kind, admin))
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}
