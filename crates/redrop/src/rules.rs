//! Statement recognition rules.
//!
//! One recognition pattern and one synthesis rule per object kind, held in a
//! fixed-order table evaluated top to bottom with first-match-wins semantics.
//! The patterns deliberately only understand single-line `CREATE` headers;
//! `create or replace` forms, comments and multi-line headers fall through
//! unmatched and are skipped by the generator.

use regex::{Captures, Regex};

/// Pattern for a `set search_path` line (leading whitespace ignored).
pub(crate) const SEARCH_PATH_PATTERN: &str = r"(?i)^\s*set\s+search_path\b";

/// The kinds of objects whose `CREATE` statements can be reversed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    /// `create table`, with optional persistence modifiers.
    Table,
    /// `create view`, with optional `temp`/`recursive` modifiers.
    View,
    /// `create function`, dropped together with its argument signature.
    Function,
    /// `create procedure`, dropped together with its argument signature.
    Procedure,
    /// `create trigger`, dropped together with the table it fires on.
    Trigger,
}

impl ObjectKind {
    /// The SQL keyword used in the emitted drop statement.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Table => "table",
            Self::View => "view",
            Self::Function => "function",
            Self::Procedure => "procedure",
            Self::Trigger => "trigger",
        }
    }
}

/// A single recognition rule: the kind it detects and the pattern that
/// extracts its identifying captures from the text following `create`.
#[derive(Debug)]
struct KindRule {
    kind: ObjectKind,
    pattern: Regex,
}

/// Compiled rule table for classifying selected lines.
///
/// Keywords are matched case-insensitively; captured names and types are
/// preserved verbatim.
#[derive(Debug)]
pub struct Rules {
    search_path: Regex,
    create: Regex,
    kinds: Vec<KindRule>,
    arg_name: Regex,
    default_clause: Regex,
}

impl Rules {
    /// Compiles the rule table.
    ///
    /// The kind order is fixed: Table, View, Function, Procedure, Trigger.
    #[must_use]
    pub fn new() -> Self {
        let rule = |kind, pattern: &str| KindRule {
            kind,
            pattern: Regex::new(pattern).expect("object pattern is valid"),
        };

        Self {
            search_path: Regex::new(SEARCH_PATH_PATTERN).expect("search-path pattern is valid"),
            create: Regex::new(r"(?i)^\s*create\s+(.*)$").expect("create pattern is valid"),
            kinds: vec![
                rule(
                    ObjectKind::Table,
                    r"(?i)^(?:(?:global|local|temporary|temp|unlogged)\s+)*table\s+(?:if\s+not\s+exists\s+)?([\w.]+)",
                ),
                rule(
                    ObjectKind::View,
                    r"(?i)^(?:(?:temp|temporary|recursive)\s+)*view\s+([\w.]+)",
                ),
                rule(
                    ObjectKind::Function,
                    r"(?i)^function\s+([\w.]+)\s*\((.*?)\)\s*(?:returns\b|$)",
                ),
                rule(
                    ObjectKind::Procedure,
                    r"(?i)^procedure\s+([\w.]+)\s*\((.*?)\)\s*(?:as\b|$)",
                ),
                rule(
                    ObjectKind::Trigger,
                    r"(?i)^trigger\s+([\w.]+).*?\son\s+([\w.]+)",
                ),
            ],
            arg_name: Regex::new(r"^\s*[\w.]+\s+").expect("argument-name pattern is valid"),
            default_clause: Regex::new(r"(?i)\s+default\s+[^,(]*(?:\([^()]*\))?\s*$")
                .expect("default-clause pattern is valid"),
        }
    }

    /// Returns true if the line asserts a search path.
    #[must_use]
    pub fn is_search_path(&self, line: &str) -> bool {
        self.search_path.is_match(line)
    }

    /// Classifies a line and synthesizes its reversing drop statement.
    ///
    /// Returns `None` for lines that are not a recognized single-line
    /// `create` header.
    #[must_use]
    pub fn drop_statement(&self, line: &str) -> Option<String> {
        let created = self.create.captures(line)?;
        let rest = created.get(1)?.as_str();

        self.kinds.iter().find_map(|rule| {
            rule.pattern
                .captures(rest)
                .map(|caps| self.synthesize(rule.kind, &caps))
        })
    }

    /// Builds the drop statement for one matched kind.
    fn synthesize(&self, kind: ObjectKind, caps: &Captures<'_>) -> String {
        let name = &caps[1];
        match kind {
            ObjectKind::Table | ObjectKind::View => {
                format!("drop {} if exists {name} cascade;", kind.keyword())
            }
            ObjectKind::Function | ObjectKind::Procedure => {
                let types = self.reduce_arguments(&caps[2]);
                format!("drop {} if exists {name}({types}) cascade;", kind.keyword())
            }
            ObjectKind::Trigger => {
                let table = &caps[2];
                format!("drop trigger if exists {name} on {table} cascade;")
            }
        }
    }

    /// Reduces a raw argument list to the comma-joined argument types.
    ///
    /// Per argument: the trailing `default <value>` clause is removed, then
    /// the leading argument name. Default values containing commas are not
    /// supported; the split is a plain comma split.
    fn reduce_arguments(&self, raw: &str) -> String {
        if raw.trim().is_empty() {
            return String::new();
        }

        raw.split(',')
            .map(|argument| {
                let argument = self.default_clause.replace(argument, "");
                let argument = self.arg_name.replace(&argument, "");
                argument.trim().to_string()
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_table() {
        let rules = Rules::new();
        assert_eq!(
            rules.drop_statement("create table t;"),
            Some("drop table if exists t cascade;".to_string())
        );
    }

    #[test]
    fn table_with_modifiers_and_if_not_exists() {
        let rules = Rules::new();
        assert_eq!(
            rules.drop_statement("CREATE UNLOGGED TABLE IF NOT EXISTS app.events ("),
            Some("drop table if exists app.events cascade;".to_string())
        );
    }

    #[test]
    fn temporary_view() {
        let rules = Rules::new();
        assert_eq!(
            rules.drop_statement("create temp view v as select 1;"),
            Some("drop view if exists v cascade;".to_string())
        );
    }

    #[test]
    fn function_signature_keeps_types_only() {
        let rules = Rules::new();
        assert_eq!(
            rules.drop_statement(
                "create function app.add(a integer default 5, b text) returns integer as $$"
            ),
            Some("drop function if exists app.add(integer, text) cascade;".to_string())
        );
    }

    #[test]
    fn function_default_with_call_value() {
        let rules = Rules::new();
        assert_eq!(
            rules.drop_statement("create function stamp(at timestamptz default now()) returns void"),
            Some("drop function if exists stamp(timestamptz) cascade;".to_string())
        );
    }

    #[test]
    fn zero_argument_function() {
        let rules = Rules::new();
        assert_eq!(
            rules.drop_statement("create function tick() returns trigger"),
            Some("drop function if exists tick() cascade;".to_string())
        );
    }

    #[test]
    fn procedure_up_to_as() {
        let rules = Rules::new();
        assert_eq!(
            rules.drop_statement("create procedure sync(batch int) as $$"),
            Some("drop procedure if exists sync(int) cascade;".to_string())
        );
    }

    #[test]
    fn trigger_references_its_table() {
        let rules = Rules::new();
        assert_eq!(
            rules.drop_statement("create trigger trg_audit after insert on app.users"),
            Some("drop trigger if exists trg_audit on app.users cascade;".to_string())
        );
    }

    #[test]
    fn or_replace_is_not_recognized() {
        let rules = Rules::new();
        assert_eq!(
            rules.drop_statement("create or replace function f() returns void"),
            None
        );
    }

    #[test]
    fn non_create_lines_are_not_recognized() {
        let rules = Rules::new();
        assert_eq!(rules.drop_statement("insert into t values (1);"), None);
        assert_eq!(rules.drop_statement("create index idx on t (a);"), None);
    }

    #[test]
    fn search_path_detection_ignores_leading_whitespace() {
        let rules = Rules::new();
        assert!(rules.is_search_path("  SET search_path TO app;"));
        assert!(!rules.is_search_path("-- set search_path to app;"));
    }

    #[test]
    fn name_case_is_preserved() {
        let rules = Rules::new();
        assert_eq!(
            rules.drop_statement("CREATE TABLE MixedCase.Names"),
            Some("drop table if exists MixedCase.Names cascade;".to_string())
        );
    }
}
