use serde::{Deserialize, Serialize};

/// Java language level targeted by emission.
///
/// The level only gates which syntactic constructs the engine chooses; it
/// never affects classification or the chosen strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceLevel {
    Java6,
    Java7,
}

impl SourceLevel {
    /// Whether `new LinkedHashMap<>()` may replace explicit type arguments.
    pub const fn supports_diamond_operator(self) -> bool {
        matches!(self, SourceLevel::Java7)
    }

    /// Whether `java.util.Objects.equals`/`hash` are available.
    pub const fn has_java_util_objects(self) -> bool {
        matches!(self, SourceLevel::Java7)
    }

    /// Whether `@SafeVarargs` may replace `@SuppressWarnings("unchecked")` on
    /// final varargs methods.
    pub const fn supports_safe_varargs(self) -> bool {
        matches!(self, SourceLevel::Java7)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            SourceLevel::Java6 => "6",
            SourceLevel::Java7 => "7",
        }
    }
}

impl Default for SourceLevel {
    fn default() -> Self {
        SourceLevel::Java7
    }
}
