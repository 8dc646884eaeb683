//! # TsForge Codegen
//!
//! Generator model core for TsForge.
//!
//! This crate provides:
//! - Type name resolution into TypeScript syntax
//! - Dependency graph resolution with worklist-based closure
//! - Generator entity construction with used-type fixpoint expansion
//! - Deterministic collision-free naming
//!
//! All components are synchronous and operate over an in-memory type
//! catalog; discovery order is insertion order throughout, so two runs
//! over the same catalog produce identical models.

pub mod builder;
pub mod collisions;
pub mod config;
pub mod dependencies;
pub mod error;
pub mod model;
pub mod names;

pub use builder::ModelBuilder;
pub use collisions::CollisionResolver;
pub use config::GeneratorConfig;
pub use dependencies::{DependencyNode, DependencyResolver, TraversalPolicy, TypeKind};
pub use error::CodegenError;
pub use model::{EntityKind, GeneratorEntity, GeneratorMember};
pub use names::TypeNameResolver;

use tsforge_meta::{TypeCatalog, TypeRef};

/// Builds the collision-free entity catalog for the given roots.
///
/// Runs the full pipeline: dependency discovery, entity construction and
/// collision resolution. The returned list is frozen - rendering must not
/// mutate it.
///
/// # Arguments
/// * `catalog` - the reflected type catalog
/// * `commands` - candidate command types
/// * `extra` - additional roots that seed dependency discovery
/// * `config` - generation configuration
///
/// # Errors
/// Returns `CodegenError` if a root does not resolve or collision
/// resolution detects an internal inconsistency.
pub fn build_model(
    catalog: &TypeCatalog,
    commands: &[TypeRef],
    extra: &[TypeRef],
    config: &GeneratorConfig,
) -> Result<Vec<GeneratorEntity>, CodegenError> {
    let mut entities = ModelBuilder::new(catalog, config).build(commands, extra)?;
    CollisionResolver::resolve(&mut entities)?;
    Ok(entities)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tsforge_meta::TypeDecl;

    #[test]
    fn pipeline_produces_unique_names() {
        let mut catalog = TypeCatalog::new();
        catalog.add_type(
            TypeDecl::class("First", "Payload").with_property("Value", TypeRef::text()),
        );
        catalog.add_type(
            TypeDecl::class("Second", "Payload").with_property("Value", TypeRef::int()),
        );
        catalog.add_type(
            TypeDecl::class("Api", "Envelope")
                .with_property("A", TypeRef::named("First", "Payload"))
                .with_property("B", TypeRef::named("Second", "Payload")),
        );

        let entities = build_model(
            &catalog,
            &[TypeRef::named("Api", "Envelope")],
            &[],
            &GeneratorConfig::default(),
        )
        .expect("Failed to build model");

        assert_eq!(entities.len(), 3);
        let names: Vec<&str> = entities.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Envelope", "Payload", "Payload_1"]);
    }
}
