//! Projections from a field sequence to template fragments
//!
//! Each projection is a pure, total function over `&[FieldSpec]` producing
//! one rendered text fragment for a specific placeholder. Output order
//! always follows input order. The fragments are Laravel PHP; indentation
//! baked into each joiner matches the placeholder position inside the
//! corresponding template stub.

use crate::field::{FieldModifier, FieldSpec, FieldType};

/// Joiner for migration column statements (placeholder indent: 12 spaces)
const MIGRATION_JOIN: &str = "\n            ";

/// Joiner for repository search clauses (placeholder indent: 16 spaces)
const SEARCH_JOIN: &str = "\n                ";

/// Parse a default-value token the way PHP's `FILTER_VALIDATE_BOOLEAN` does
///
/// `1`, `true`, `on` and `yes` (case-insensitive, surrounding whitespace
/// ignored) are true; everything else is false.
#[must_use]
pub fn parse_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "on" | "yes"
    )
}

/// PHP boolean literal for a truthy-parsed default token
fn truthy_literal(value: &str) -> &'static str {
    if parse_truthy(value) {
        "true"
    } else {
        "false"
    }
}

/// Render the migration column block
///
/// Always emits the identity-key statement first and the timestamps
/// statement last, regardless of field count. Nullability is always written
/// explicitly, and a field literally named `email` of type `string` is
/// additionally marked unique.
#[must_use]
pub fn migration_fields(fields: &[FieldSpec]) -> String {
    let mut statements = vec!["$table->id();".to_string()];

    for field in fields {
        let mut stmt = format!("$table->{}('{}')", field.ty.as_token(), field.name);

        if field.modifier == FieldModifier::Nullable {
            stmt.push_str("->nullable()");
        } else {
            stmt.push_str("->nullable(false)");
        }

        if let Some(default) = &field.default {
            let literal = if field.ty == FieldType::Boolean {
                truthy_literal(default).to_string()
            } else if field.ty.is_numeric() {
                default.clone()
            } else {
                format!("'{default}'")
            };
            stmt.push_str(&format!("->default({literal})"));
        }

        if field.name == "email" && field.ty == FieldType::String {
            stmt.push_str("->unique()");
        }

        stmt.push(';');
        statements.push(stmt);
    }

    statements.push("$table->timestamps();".to_string());
    statements.join(MIGRATION_JOIN)
}

/// Render the fillable-field list: quoted names, comma-joined, input order
#[must_use]
pub fn fillable_list(fields: &[FieldSpec]) -> String {
    fields
        .iter()
        .map(|field| format!("'{}'", field.name))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Render the model's default-attribute block
///
/// Fields without a default contribute nothing. When no field carries a
/// default, the projection is empty: no attribute block at all, not an
/// empty one.
#[must_use]
pub fn default_attributes(fields: &[FieldSpec]) -> String {
    let entries: Vec<String> = fields
        .iter()
        .filter_map(|field| {
            let default = field.default.as_ref()?;
            let literal = if field.ty == FieldType::Boolean {
                truthy_literal(default).to_string()
            } else if field.ty.is_textual() {
                format!("'{default}'")
            } else {
                default.clone()
            };
            Some(format!("        '{}' => {literal}", field.name))
        })
        .collect();

    if entries.is_empty() {
        String::new()
    } else {
        format!(
            "\n\n    protected $attributes = [\n{}\n    ];",
            entries.join(",\n")
        )
    }
}

/// Render the validation rule block for create (`is_update = false`) or
/// update (`is_update = true`) requests
///
/// Rule order per field: `sometimes` (update only), then exactly one of
/// `required`/`nullable`, then the fixed type-specific rules. Unknown types
/// contribute no type rule.
#[must_use]
pub fn validation_rules(fields: &[FieldSpec], is_update: bool) -> String {
    let lines: Vec<String> = fields
        .iter()
        .map(|field| {
            let mut rules = Vec::new();

            if is_update {
                rules.push("sometimes");
            }

            if field.modifier == FieldModifier::Required {
                rules.push("required");
            } else {
                rules.push("nullable");
            }

            match field.ty {
                FieldType::String => {
                    rules.push("string");
                    rules.push("max:255");
                }
                FieldType::Integer => rules.push("integer"),
                FieldType::Decimal => rules.push("numeric"),
                FieldType::Boolean => rules.push("boolean"),
                FieldType::Text => rules.push("string"),
                FieldType::Date => rules.push("date"),
                FieldType::Email => rules.push("email"),
                FieldType::Other(_) => {}
            }

            format!("            '{}' => '{}'", field.name, rules.join("|"))
        })
        .collect();

    lines.join(",\n")
}

/// Render the repository search clauses
///
/// Every string/text field contributes an `orWhere ... like` clause. When no
/// such field exists the projection falls back to a single identity-key
/// clause: a generated search capability must never be empty.
#[must_use]
pub fn search_clauses(fields: &[FieldSpec]) -> String {
    let clauses: Vec<String> = fields
        .iter()
        .filter(|field| field.ty.is_textual())
        .map(|field| {
            format!(
                "$query->orWhere('{}', 'like', '%' . $search . '%');",
                field.name
            )
        })
        .collect();

    if clauses.is_empty() {
        "$query->where(\"id\", \"like\", \"%\". $search .\"%\");".to_string()
    } else {
        clauses.join(SEARCH_JOIN)
    }
}
