use thiserror::Error;

/// Internal emission failures.
///
/// These indicate defects in the generator rather than problems with user
/// input; callers abort the whole unit rather than surface partial text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmitError {
    #[error("Closed scope {closed} while {open} is innermost")]
    ScopeMismatch { closed: String, open: String },

    #[error("Closed scope {closed} with no scope open")]
    ScopeUnderflow { closed: String },

    #[error("Scope {open} left open at end of unit")]
    UnclosedScope { open: String },
}
