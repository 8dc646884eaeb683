//! Exported generator model.
//!
//! The entity records built here are the hand-off format to the renderer:
//! every string a declaration needs is already resolved, and external
//! consumers depend on the field set verbatim.

use serde::{Deserialize, Serialize};
use tsforge_meta::QualifiedName;

/// Kind of a generated entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    /// Command class.
    Class,
    /// Interface (structural value types render as interfaces).
    Interface,
    /// Enumeration.
    Enum,
    /// A type discovered only because something else references it.
    UsedReturnType,
}

/// One member of a generated entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorMember {
    /// Member name.
    pub name: String,
    /// Rendered TypeScript type.
    pub type_name: String,
    /// True when the member was declared nullable and optionality was
    /// erased from `type_name`; the renderer marks the member optional.
    pub is_optional: bool,
    /// True when the member's type depends on an enclosing open generic
    /// parameter; the renderer then uses `generic_name` instead of the
    /// concrete `type_name`.
    pub is_declared_as_generic: bool,
    /// Parameter symbol rendering (e.g. `T` or `T[]`), meaningful only
    /// when `is_declared_as_generic` is set.
    pub generic_name: String,
    /// Documentation lines.
    pub docs: Vec<String>,
}

impl GeneratorMember {
    /// Creates a plain member with a rendered type name.
    #[must_use]
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            is_optional: false,
            is_declared_as_generic: false,
            generic_name: String::new(),
            docs: Vec::new(),
        }
    }
}

/// A generated declaration, ready for rendering.
///
/// `identity` is immutable for the entity's lifetime and keys all
/// lookups; `name` is the display name and is rewritten at most once, by
/// the collision resolver, before emission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorEntity {
    /// Display name. Unique across the catalog after collision
    /// resolution.
    pub name: String,
    /// Entity kind.
    pub kind: EntityKind,
    /// Stable identity of the underlying declaration.
    pub identity: QualifiedName,
    /// Namespace path, used for file grouping downstream.
    pub namespace: String,
    /// Generic parameter symbols (empty for non-generic entities).
    pub generic_params: Vec<String>,
    /// Ordered members.
    pub members: Vec<GeneratorMember>,
    /// Rendered names of implemented interfaces.
    pub implemented_interfaces: Vec<String>,
    /// Rendered base type name (empty when the entity has no base).
    pub base_type_name: String,
    /// Rendered response type for command-shaped entities (empty
    /// otherwise).
    pub return_type_name: String,
    /// Host qualified name emitted as the `$type` discriminator (empty
    /// when not applicable).
    pub json_type_name: String,
    /// Documentation lines.
    pub documentation: Vec<String>,
    /// Enumeration value names (enums only).
    pub enum_members: Vec<String>,
}

impl GeneratorEntity {
    /// Creates an empty entity of the given kind.
    #[must_use]
    pub fn new(kind: EntityKind, identity: QualifiedName) -> Self {
        Self {
            name: identity.name.clone(),
            kind,
            namespace: identity.namespace.clone(),
            identity,
            generic_params: Vec::new(),
            members: Vec::new(),
            implemented_interfaces: Vec::new(),
            base_type_name: String::new(),
            return_type_name: String::new(),
            json_type_name: String::new(),
            documentation: Vec::new(),
            enum_members: Vec::new(),
        }
    }

    /// Returns true for enum entities.
    #[must_use]
    pub const fn is_enum(&self) -> bool {
        matches!(self.kind, EntityKind::Enum)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_entity_takes_name_and_namespace_from_identity() {
        let entity = GeneratorEntity::new(
            EntityKind::Class,
            QualifiedName::new("Api.Commands", "CreateUser"),
        );
        assert_eq!(entity.name, "CreateUser");
        assert_eq!(entity.namespace, "Api.Commands");
        assert!(entity.members.is_empty());
    }

    #[test]
    fn model_round_trips_through_json() {
        let mut entity = GeneratorEntity::new(
            EntityKind::UsedReturnType,
            QualifiedName::new("Api.Data", "UserData"),
        );
        entity.members.push(GeneratorMember::new("name", "string"));
        entity.implemented_interfaces.push("IEntity".to_string());

        let json = serde_json::to_string(&entity).expect("Failed to serialize entity");
        let back: GeneratorEntity = serde_json::from_str(&json).expect("Failed to deserialize");
        assert_eq!(back, entity);
    }
}
