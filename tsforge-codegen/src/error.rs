//! Error types for model generation.

use thiserror::Error;

/// Error type for generator model construction.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// A root or referenced type could not be resolved in the catalog.
    #[error("unknown type '{type_name}' in {context}")]
    UnknownType {
        /// Qualified display name of the unresolved type.
        type_name: String,
        /// Where the reference was encountered.
        context: String,
    },

    /// The collision-suffix search exceeded its bound. Indicates an
    /// internal inconsistency in the catalog, never a user error.
    #[error("could not find a free name for entity '{name}' within {limit} candidates")]
    CollisionOverflow {
        /// Display name of the entity that could not be renamed.
        name: String,
        /// Number of candidate suffixes tried.
        limit: usize,
    },
}

impl CodegenError {
    /// Creates an unknown-type error.
    pub fn unknown_type(type_name: impl Into<String>, context: impl Into<String>) -> Self {
        Self::UnknownType {
            type_name: type_name.into(),
            context: context.into(),
        }
    }
}
