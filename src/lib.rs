pub mod matcher;
pub mod pronouns;
pub mod scanner;

// Re-export main types for convenient access
pub use matcher::{
    find_case_insensitive_term_instances, find_case_sensitive_term_instances, CaseSensitivityRules,
};
pub use pronouns::{PronounClass, PronounLexicon};
pub use scanner::TermScanner;
