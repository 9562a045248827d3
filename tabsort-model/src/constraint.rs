use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// One sort key: a field name and a direction.
///
/// The field is either a literal column name or a positional alias (see the
/// engine's indexed-column prefix). An empty field is representable but never
/// resolves to a column.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SortConstraint {
    field: String,
    ascending: bool,
}

impl SortConstraint {
    pub fn new(field: impl Into<String>, ascending: bool) -> Self {
        Self {
            field: field.into(),
            ascending,
        }
    }

    pub fn ascending(field: impl Into<String>) -> Self {
        Self::new(field, true)
    }

    pub fn descending(field: impl Into<String>) -> Self {
        Self::new(field, false)
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn is_ascending(&self) -> bool {
        self.ascending
    }

    /// Same direction, different field. Used when a positional alias is
    /// rewritten to the literal column name it points at.
    pub fn with_field(&self, field: impl Into<String>) -> Self {
        Self::new(field, self.ascending)
    }
}

impl fmt::Display for SortConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let direction = if self.ascending { "asc" } else { "desc" };
        write!(f, "{}:{}", self.field, direction)
    }
}

/// Parses `field`, `field:asc` or `field:desc`. Only a trailing direction
/// word (case-insensitive, `asc`, `ascending`, `desc` or `descending`) is split
/// off; any other text after a `:` stays part of the field, so names such as
/// `Time:UTC` and aliases such as `::column::2:desc` survive. Parsing never
/// fails: fields that name no column are dropped later, during resolution.
impl FromStr for SortConstraint {
    type Err = Infallible;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let raw = raw.trim();
        let parsed = raw
            .rsplit_once(':')
            .and_then(|(field, direction)| {
                match direction.to_ascii_lowercase().as_str() {
                    "asc" | "ascending" => Some(SortConstraint::ascending(field)),
                    "desc" | "descending" => Some(SortConstraint::descending(field)),
                    _ => None,
                }
            })
            .unwrap_or_else(|| SortConstraint::ascending(raw));
        Ok(parsed)
    }
}
