//! Default admin projection for the catalog

use super::{AdminSite, FieldMeta, Fieldset, ModelAdmin, ModelInline, ModelKind};

const fn field(name: &'static str) -> FieldMeta {
    FieldMeta { name, label: None, help_text: None }
}

const BOOK_FIELDS: &[FieldMeta] = &[
    field("title"),
    field("author"),
    FieldMeta {
        name: "summary",
        label: None,
        help_text: Some("Enter a brief description of the book"),
    },
    FieldMeta {
        name: "isbn",
        label: Some("ISBN"),
        help_text: Some("13 character ISBN number"),
    },
    FieldMeta {
        name: "genre",
        label: None,
        help_text: Some("Select a genre for this book"),
    },
];

// Computed list columns on books
const BOOK_DERIVED: &[FieldMeta] = &[
    FieldMeta { name: "display_genre", label: Some("Genre"), help_text: None },
    field("copy_count"),
];

const AUTHOR_FIELDS: &[FieldMeta] = &[
    field("first_name"),
    field("last_name"),
    FieldMeta { name: "date_of_birth", label: Some("Born"), help_text: None },
    FieldMeta { name: "date_of_death", label: Some("Died"), help_text: None },
];

const BOOK_INSTANCE_FIELDS: &[FieldMeta] = &[
    FieldMeta {
        name: "id",
        label: None,
        help_text: Some("Unique ID for this particular book at the library."),
    },
    field("book"),
    field("imprint"),
    field("due_back"),
    field("language"),
    FieldMeta {
        name: "status",
        label: None,
        help_text: Some("Book availability"),
    },
    field("borrower"),
];

const GENRE_FIELDS: &[FieldMeta] = &[FieldMeta {
    name: "name",
    label: None,
    help_text: Some("Enter a book genre (e.g. Science Fiction)"),
}];

const LANGUAGE_FIELDS: &[FieldMeta] = &[FieldMeta {
    name: "name",
    label: None,
    help_text: Some("Enter the book's language"),
}];

pub(super) fn fields(model: ModelKind) -> &'static [FieldMeta] {
    match model {
        ModelKind::Book => BOOK_FIELDS,
        ModelKind::Author => AUTHOR_FIELDS,
        ModelKind::BookInstance => BOOK_INSTANCE_FIELDS,
        ModelKind::Genre => GENRE_FIELDS,
        ModelKind::Language => LANGUAGE_FIELDS,
    }
}

pub(super) fn derived_ops(model: ModelKind) -> &'static [FieldMeta] {
    match model {
        ModelKind::Book => BOOK_DERIVED,
        _ => &[],
    }
}

/// Build the default catalog projection
pub fn default_site() -> AdminSite {
    let mut site = AdminSite::new();

    site.register(
        ModelKind::Book,
        ModelAdmin {
            list_display: vec!["title", "author", "display_genre"],
            inlines: vec![ModelInline { model: ModelKind::BookInstance, extra: 0 }],
            ..Default::default()
        },
    );

    site.register(
        ModelKind::Author,
        ModelAdmin {
            list_display: vec!["last_name", "first_name", "date_of_birth", "date_of_death"],
            fieldsets: vec![Fieldset {
                label: None,
                rows: vec![
                    vec!["first_name"],
                    vec!["last_name"],
                    vec!["date_of_birth", "date_of_death"],
                ],
            }],
            inlines: vec![ModelInline { model: ModelKind::Book, extra: 0 }],
            ..Default::default()
        },
    );

    site.register(
        ModelKind::BookInstance,
        ModelAdmin {
            list_display: vec!["book", "status", "borrower", "due_back", "id"],
            list_filter: vec!["status", "due_back"],
            fieldsets: vec![
                Fieldset {
                    label: None,
                    rows: vec![vec!["book"], vec!["imprint"], vec!["id"]],
                },
                Fieldset {
                    label: Some("Availability"),
                    rows: vec![vec!["status"], vec!["due_back"], vec!["borrower"]],
                },
            ],
            ..Default::default()
        },
    );

    site.register(ModelKind::Language, ModelAdmin::default());
    site.register(ModelKind::Genre, ModelAdmin::default());

    site
}
