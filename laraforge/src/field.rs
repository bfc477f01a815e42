//! Field mini-DSL parsing
//!
//! Each command-line field token has the positional form
//! `name[:type[:modifier[:default]]]`. Only the name is required; the type
//! defaults to `string`. Unrecognized types are not rejected here; they are
//! carried through verbatim and handled by the projections.

use crate::error::{Error, Result};

/// Column type of a parsed field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldType {
    /// Short string column (`VARCHAR`)
    String,
    /// Long text column
    Text,
    /// Integer column
    Integer,
    /// Decimal column
    Decimal,
    /// Boolean column
    Boolean,
    /// Date column
    Date,
    /// Email column (validated as email, stored as string)
    Email,
    /// Any unrecognized type token, carried verbatim
    Other(String),
}

impl FieldType {
    fn parse(token: &str) -> Self {
        match token {
            "string" => Self::String,
            "text" => Self::Text,
            "integer" => Self::Integer,
            "decimal" => Self::Decimal,
            "boolean" => Self::Boolean,
            "date" => Self::Date,
            "email" => Self::Email,
            other => Self::Other(other.to_string()),
        }
    }

    /// The raw type token, used verbatim as the schema-builder method name
    #[must_use]
    pub fn as_token(&self) -> &str {
        match self {
            Self::String => "string",
            Self::Text => "text",
            Self::Integer => "integer",
            Self::Decimal => "decimal",
            Self::Boolean => "boolean",
            Self::Date => "date",
            Self::Email => "email",
            Self::Other(token) => token,
        }
    }

    /// Whether values of this type are quoted in generated PHP
    #[must_use]
    pub fn is_textual(&self) -> bool {
        matches!(self, Self::String | Self::Text)
    }

    /// Whether values of this type are bare numeric literals
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer | Self::Decimal)
    }
}

/// Nullability modifier of a parsed field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldModifier {
    /// No modifier supplied (treated as nullable in validation)
    #[default]
    None,
    /// Field is required
    Required,
    /// Field is nullable
    Nullable,
}

impl FieldModifier {
    fn parse(token: &str) -> Self {
        match token {
            "required" => Self::Required,
            "nullable" => Self::Nullable,
            _ => Self::None,
        }
    }
}

/// Parsed representation of one field description token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    /// Column/attribute name
    pub name: String,
    /// Column type
    pub ty: FieldType,
    /// Nullability modifier
    pub modifier: FieldModifier,
    /// Default value, interpreted according to `ty`
    pub default: Option<String>,
}

impl FieldSpec {
    /// Parse a single `name[:type[:modifier[:default]]]` token
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedField`] when the name position is empty.
    pub fn parse(token: &str) -> Result<Self> {
        let mut parts = token.splitn(4, ':');

        let name = parts.next().unwrap_or_default();
        if name.is_empty() {
            return Err(Error::MalformedField {
                token: token.to_string(),
            });
        }

        let ty = parts.next().map_or(FieldType::String, FieldType::parse);
        let modifier = parts
            .next()
            .map_or(FieldModifier::None, FieldModifier::parse);
        let default = parts.next().map(ToString::to_string);

        Ok(Self {
            name: name.to_string(),
            ty,
            modifier,
            default,
        })
    }
}

/// Parse an ordered sequence of field tokens, preserving input order
///
/// # Errors
///
/// Returns [`Error::MissingInput`] when `tokens` is empty, or
/// [`Error::MalformedField`] for the first unparseable token.
pub fn parse_fields(tokens: &[String]) -> Result<Vec<FieldSpec>> {
    if tokens.is_empty() {
        return Err(Error::MissingInput);
    }

    tokens.iter().map(|token| FieldSpec::parse(token)).collect()
}
