//! Drop-statement generation.
//!
//! Consumes a [`Selection`], classifies each line through the rule table and
//! assembles the final statement list: an optional interactive directive,
//! an optional search-path statement, then one drop statement per matched
//! line in source order.

use tracing::debug;

use crate::error::Result;
use crate::project::SchemaLookup;
use crate::rules::Rules;
use crate::select::Selection;

/// psql directive that aborts an interactive session on the first error.
pub const ON_ERROR_STOP: &str = r"\set ON_ERROR_STOP on";

/// How the search path for the snippet is determined.
///
/// Exactly one mode is active per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchPath {
    /// Caller-supplied schema name; always wins.
    Explicit(String),
    /// Caller explicitly asked for no search-path statement.
    Suppressed,
    /// Nothing supplied; fall back to in-file discovery, then to the
    /// directory-convention lookup.
    Unset,
}

impl SearchPath {
    /// Maps the CLI option onto a directive: absent is `Unset`, an empty
    /// string is `Suppressed`, anything else is `Explicit`.
    #[must_use]
    pub fn from_option(option: Option<String>) -> Self {
        match option {
            None => Self::Unset,
            Some(schema) if schema.is_empty() => Self::Suppressed,
            Some(schema) => Self::Explicit(schema),
        }
    }

    /// Returns true unless the directive is `Unset`.
    ///
    /// A given directive (explicit or suppressed) disables in-file
    /// search-path discovery during line selection.
    #[must_use]
    pub const fn is_given(&self) -> bool {
        !matches!(self, Self::Unset)
    }
}

/// Generates the ordered statement list for a selection.
///
/// Lines that are neither a `set search_path` assertion nor a recognized
/// `create` header are skipped silently. The schema lookup is only invoked
/// when the directive is [`SearchPath::Unset`] and no search path was
/// discovered before the range.
///
/// # Errors
///
/// Returns the lookup's error when a search path is needed but no schema
/// can be determined.
pub fn generate<L: SchemaLookup>(
    selection: &Selection,
    search_path: &SearchPath,
    interactive: bool,
    lookup: &L,
) -> Result<Vec<String>> {
    let rules = Rules::new();
    let mut statements = Vec::new();

    for line in &selection.lines {
        if rules.is_search_path(line) {
            statements.push(line.clone());
        } else if let Some(statement) = rules.drop_statement(line) {
            statements.push(statement);
        } else {
            debug!("skipping unrecognized line: {line}");
        }
    }

    match search_path {
        SearchPath::Suppressed => {}
        SearchPath::Explicit(schema) => {
            statements.insert(0, format!("set search_path to {schema};"));
        }
        SearchPath::Unset => {
            let statement = match &selection.search_path {
                // Already terminated as found in the source.
                Some(line) => line.clone(),
                None => format!("set search_path to {};", lookup.schema()?),
            };
            statements.insert(0, statement);
        }
    }

    if interactive {
        statements.insert(0, ON_ERROR_STOP.to_string());
    }

    Ok(statements)
}
