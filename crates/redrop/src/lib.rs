//! Make a slice of a SQL source file safe to re-execute.
//!
//! `redrop` scans a line range of a SQL file for object-creating statements
//! and emits the matching `drop ... if exists ... cascade;` statement for
//! each, so the snippet can be piped back into a live database without
//! "already exists" failures. It also asserts the right schema search path
//! for the snippet and, for interactive psql sessions, a stop-on-error
//! directive.
//!
//! # Architecture
//!
//! The pipeline has two stages plus one external collaborator:
//!
//! - **Line selection** ([`select`]) - walks the file once, keeping the
//!   non-blank lines inside the requested range and remembering the last
//!   `set search_path` declaration seen before it.
//! - **Generation** ([`generate`]) - classifies each selected line through
//!   an ordered rule table ([`rules::Rules`]) and synthesizes the reversing
//!   drop statements, then resolves the search path.
//! - **Directory convention** ([`project`]) - when neither the caller nor
//!   the file provides a search path, the schema is derived from the file's
//!   location under the project's `schemas/` folder.
//!
//! Recognition is deliberately line-oriented and permissive: multi-line
//! `CREATE` headers, comments and `create or replace` forms are skipped
//! rather than rejected.
//!
//! # Example
//!
//! ```rust
//! use redrop::prelude::*;
//!
//! let source = "create table widgets (id bigint);\n";
//! let selection = select(source, &LineRange::unbounded(), true);
//! let statements = generate(
//!     &selection,
//!     &SearchPath::Explicit("public".to_string()),
//!     false,
//!     &ConventionLookup::new(".".into(), DEFAULT_MARKER, DEFAULT_SCHEMA_DIR),
//! )
//! .unwrap();
//!
//! assert_eq!(
//!     statements,
//!     [
//!         "set search_path to public;",
//!         "drop table if exists widgets cascade;",
//!     ]
//! );
//! ```
//!
//! # CLI Usage
//!
//! ```bash
//! # Drop statements for lines 10..=40 of a snippet, then the snippet itself
//! redrop --from 10 --to 40 --with-source schemas/app/tables.sql | psql
//!
//! # Interactive session: stop on the first error
//! redrop -i schemas/app/tables.sql
//! ```

pub mod error;
pub mod generate;
pub mod project;
pub mod rules;
pub mod select;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::{RedropError, Result};
    pub use crate::generate::{generate, SearchPath, ON_ERROR_STOP};
    pub use crate::project::{
        find_project_root, schema_from_path, ConventionLookup, SchemaLookup, DEFAULT_MARKER,
        DEFAULT_SCHEMA_DIR,
    };
    pub use crate::rules::{ObjectKind, Rules};
    pub use crate::select::{select, LineRange, Selection};
}
