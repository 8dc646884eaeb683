//! Collision-free naming.
//!
//! After the model is built, entities from different namespaces can share
//! a display name. This pass renames the later discoveries so that every
//! emitted declaration has a unique name, deterministically: groups are
//! processed in discovery order, the first member of a group keeps its
//! name, and every rename re-checks the live global name set.

use crate::error::CodegenError;
use crate::model::GeneratorEntity;
use indexmap::IndexMap;
use std::collections::HashSet;

/// Renames colliding entities in place.
pub struct CollisionResolver;

impl CollisionResolver {
    /// Makes every entity name unique across the catalog. Identities and
    /// entity order are preserved; only display names change.
    ///
    /// # Errors
    /// Returns `CodegenError::CollisionOverflow` when no free suffix is
    /// found within catalog length + 1 candidates. With a consistent
    /// catalog this cannot happen; the bound exists so an inconsistency
    /// surfaces as a diagnosable failure instead of a loop.
    pub fn resolve(entities: &mut [GeneratorEntity]) -> Result<(), CodegenError> {
        let mut groups: IndexMap<String, Vec<usize>> = IndexMap::new();
        for (position, entity) in entities.iter().enumerate() {
            groups.entry(entity.name.clone()).or_default().push(position);
        }

        let mut taken: HashSet<String> = entities.iter().map(|e| e.name.clone()).collect();
        let limit = entities.len() + 1;

        for (name, positions) in &groups {
            for &position in positions.iter().skip(1) {
                let renamed = (1..=limit)
                    .map(|suffix| format!("{name}_{suffix}"))
                    .find(|candidate| !taken.contains(candidate))
                    .ok_or_else(|| CodegenError::CollisionOverflow {
                        name: name.clone(),
                        limit,
                    })?;
                taken.insert(renamed.clone());
                entities[position].name = renamed;
            }
        }

        Ok(())
    }
}
