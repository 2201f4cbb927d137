//! Common error infrastructure for armory-core.
//!
//! The engine is almost entirely infallible: rejected actions (firing while
//! reloading, reloading a full magazine) are reported through unchanged state
//! and `Option`/`bool` returns. Errors only exist for invariant violations in
//! the perk catalog and in weapon definitions, which are surfaced at
//! registration or roll time and never ignored.

use crate::perk::SlotCategory;

/// Severity level of an error, used for categorization by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input, should not retry without changes.
    ///
    /// Examples: a perk placed in a pool of the wrong slot category
    Validation,

    /// Catalog or definition invariant violated; content must be fixed.
    ///
    /// Examples: duplicate perk key, unknown perk key in a weapon definition
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error means content data is corrupt.
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Fatal)
    }
}

/// Common trait for all armory-core errors.
pub trait ArmoryError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Errors raised while building the perk catalog or rolling weapons from it.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CatalogError {
    /// A perk key was registered twice.
    #[error("perk '{0}' is already registered")]
    DuplicatePerk(String),

    /// A weapon definition or lookup referenced a key the catalog lacks.
    #[error("perk '{0}' is not registered")]
    UnknownPerk(String),

    /// A perk was placed where its slot category does not belong.
    #[error("perk '{key}' is a {found} perk but was placed in a {expected} slot")]
    SlotMismatch {
        key: String,
        expected: SlotCategory,
        found: SlotCategory,
    },

    /// A weapon definition declared more perk pools than there are slots.
    #[error("weapon '{weapon}' declares {pools} perk pools (max {max})")]
    TooManySlots {
        weapon: String,
        pools: usize,
        max: usize,
    },

    /// A weapon definition declared a perk pool with no entries.
    #[error("weapon '{weapon}' has an empty perk pool at slot {slot}")]
    EmptyPool { weapon: String, slot: usize },
}

impl ArmoryError for CatalogError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::DuplicatePerk(_) | Self::UnknownPerk(_) => ErrorSeverity::Fatal,
            Self::SlotMismatch { .. } | Self::TooManySlots { .. } | Self::EmptyPool { .. } => {
                ErrorSeverity::Validation
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::DuplicatePerk(_) => "CATALOG_DUPLICATE_PERK",
            Self::UnknownPerk(_) => "CATALOG_UNKNOWN_PERK",
            Self::SlotMismatch { .. } => "CATALOG_SLOT_MISMATCH",
            Self::TooManySlots { .. } => "CATALOG_TOO_MANY_SLOTS",
            Self::EmptyPool { .. } => "CATALOG_EMPTY_POOL",
        }
    }
}
