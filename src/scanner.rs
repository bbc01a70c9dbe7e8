use anyhow::Result;
use std::collections::HashSet;
use tracing::{debug, info};

use crate::matcher::{
    find_case_insensitive_term_instances, find_case_sensitive_term_instances, CaseSensitivityRules,
};
use crate::pronouns::PronounLexicon;

/// Stateless term search service over fixed rule tables.
///
/// The tables are validated once at construction and never mutated; every
/// scan is a pure, bounded computation over its two string arguments.
#[derive(Debug, Clone)]
pub struct TermScanner {
    lexicon: PronounLexicon,
    case_rules: CaseSensitivityRules,
}

impl TermScanner {
    /// Create a scanner over custom rule tables, validating them up front
    pub fn new(lexicon: PronounLexicon, case_rules: CaseSensitivityRules) -> Result<Self> {
        for class in &lexicon.classes {
            if class.name.is_empty() {
                anyhow::bail!("Pronoun class with empty name");
            }
            if class.members.is_empty() {
                anyhow::bail!("Pronoun class '{}' has no members", class.name);
            }

            let mut seen = HashSet::new();
            for member in &class.members {
                if !seen.insert(member.as_str()) {
                    anyhow::bail!(
                        "Pronoun class '{}' lists member '{}' more than once",
                        class.name,
                        member
                    );
                }
            }
        }

        info!(
            "Term scanner ready: {} pronoun classes, {} case-sensitive terms",
            lexicon.classes.len(),
            case_rules.case_sensitive_terms.len()
        );

        Ok(Self { lexicon, case_rules })
    }

    /// Create a scanner with the standard pronoun tables and case-sensitive set
    pub fn with_default_rules() -> Result<Self> {
        Self::new(PronounLexicon::default(), CaseSensitivityRules::default())
    }

    /// True iff the term's uppercased form is in the case-sensitive set
    pub fn is_term_case_sensitive(&self, term: &str) -> bool {
        self.case_rules.is_term_case_sensitive(term)
    }

    /// Find which of the comma-separated `terms` occur in `text`.
    ///
    /// Any requested term that is a pronoun pulls its entire person/number
    /// class into the search set. Case-sensitive terms (per the fixed set)
    /// are matched against the raw tokens; everything else matches after
    /// lowercasing both sides. Case-sensitive matches come first in the
    /// result, then case-insensitive matches.
    pub fn find_term_instances(&self, text: &str, terms: &str) -> Vec<String> {
        // WHY: tokens split on single literal spaces only; consecutive spaces
        // yield empty tokens and attached punctuation stays on the token, so
        // "myself," will not match "myself". Kept for compatibility.
        let tokens: Vec<&str> = text.split(' ').collect();

        // Terms split on the literal ", " separator; sloppier spacing
        // degrades to literal malformed term strings rather than an error.
        // Case-sensitive terms keep their casing, all others are lowercased.
        let requested: Vec<String> = terms
            .split(", ")
            .map(|term| {
                if self.is_term_case_sensitive(term) {
                    term.to_string()
                } else {
                    term.to_lowercase()
                }
            })
            .collect();

        let expansions = self.lexicon.class_expansions(&requested);
        debug!(
            tokens = tokens.len(),
            requested = requested.len(),
            expansions = expansions.len(),
            "Expanded search terms"
        );

        // Merge with set semantics. Added pronouns keep their class-table
        // casing, so "I" re-classifies as case-sensitive in the partition.
        let mut seen = HashSet::new();
        let merged: Vec<String> = requested
            .into_iter()
            .chain(expansions)
            .filter(|term| seen.insert(term.clone()))
            .collect();

        let (case_sensitive, case_insensitive): (Vec<String>, Vec<String>) = merged
            .into_iter()
            .partition(|term| self.is_term_case_sensitive(term));

        let mut matches = find_case_sensitive_term_instances(&tokens, &case_sensitive);
        matches.extend(find_case_insensitive_term_instances(&tokens, &case_insensitive));

        debug!(matches = matches.len(), "Term scan complete");
        matches
    }
}
