//! Generation configuration.
//!
//! One immutable value threaded through the build pipeline. There are no
//! mutable settings singletons; two runs with equal configurations and
//! equal catalogs produce identical models.

use crate::dependencies::TraversalPolicy;
use tsforge_meta::QualifiedName;

/// Configuration for one model build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Marker interface a root class must implement to be built as a
    /// command entity. With `None`, every non-abstract root class is
    /// eligible.
    pub command_marker: Option<QualifiedName>,
    /// The contract interface of commands (e.g. the generic command
    /// interface carrying the response type). When set, command entities
    /// render only this interface and take their response type from its
    /// generic argument.
    pub command_contract: Option<QualifiedName>,
    /// Display name substituted for the contract interface in rendered
    /// output, preserving its generic argument.
    pub contract_display_name: Option<String>,
    /// Drop the nullable wrapper when rendering member types and mark
    /// the member optional instead.
    pub erase_optionality: bool,
    /// Structural edges followed during dependency discovery.
    pub policy: TraversalPolicy,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            command_marker: None,
            command_contract: None,
            contract_display_name: None,
            erase_optionality: true,
            policy: TraversalPolicy::default(),
        }
    }
}

impl GeneratorConfig {
    /// Returns the qualified names the dependency resolver must treat as
    /// already known: the marker and contract interfaces are provided by
    /// the caller's runtime, never re-emitted.
    #[must_use]
    pub fn known_types(&self) -> Vec<QualifiedName> {
        self.command_marker
            .iter()
            .chain(self.command_contract.iter())
            .cloned()
            .collect()
    }
}
