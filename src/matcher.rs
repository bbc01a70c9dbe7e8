use serde::{Deserialize, Serialize};

/// Terms that must never be case-folded during matching.
///
/// Membership is tested against the UPPERCASED candidate term, so "i", "I",
/// and any mixed-case spelling all classify identically.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseSensitivityRules {
    pub case_sensitive_terms: Vec<String>,
}

impl Default for CaseSensitivityRules {
    fn default() -> Self {
        Self {
            case_sensitive_terms: vec!["I".to_string()],
        }
    }
}

impl CaseSensitivityRules {
    /// Classification depends only on the uppercased term, never on the text
    /// being scanned. Total over all strings; the empty string is not
    /// case-sensitive unless explicitly added to the set.
    pub fn is_term_case_sensitive(&self, term: &str) -> bool {
        let upper = term.to_uppercase();
        self.case_sensitive_terms.iter().any(|cs| *cs == upper)
    }
}

/// Return the subsequence of `terms` present in `tokens` under exact string
/// equality. An exists test per term, not a count and not positions.
pub fn find_case_sensitive_term_instances(tokens: &[&str], terms: &[String]) -> Vec<String> {
    terms
        .iter()
        .filter(|term| tokens.contains(&term.as_str()))
        .cloned()
        .collect()
}

/// Return the subsequence of `terms` present in `tokens` after lowercasing
/// both sides. Matched terms are returned in their given (already lowercased
/// by the orchestrator) form, not as the tokens that matched them.
pub fn find_case_insensitive_term_instances(tokens: &[&str], terms: &[String]) -> Vec<String> {
    let lowered: Vec<String> = tokens.iter().map(|token| token.to_lowercase()).collect();

    terms
        .iter()
        .filter(|term| lowered.contains(&term.to_lowercase()))
        .cloned()
        .collect()
}
