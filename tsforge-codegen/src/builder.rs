//! Generator model construction.
//!
//! Builds the emitted entity catalog in two passes: root types that pass
//! the command filter become command entities, and every type discovered
//! through the dependency closure or through member rendering becomes a
//! used-type entity. The used-type pass iterates to a fixpoint - building
//! an entity can surface further types - deduplicated by identity, so a
//! type reached on two paths builds exactly once.

use crate::config::GeneratorConfig;
use crate::dependencies::DependencyResolver;
use crate::error::CodegenError;
use crate::model::{EntityKind, GeneratorEntity, GeneratorMember};
use crate::names::TypeNameResolver;
use indexmap::IndexMap;
use std::collections::HashSet;
use tsforge_meta::{DeclKind, QualifiedName, TypeCatalog, TypeDecl, TypeRef};

/// Builds [`GeneratorEntity`] records from a type catalog.
pub struct ModelBuilder<'a> {
    catalog: &'a TypeCatalog,
    config: &'a GeneratorConfig,
    resolver: TypeNameResolver<'a>,
    known: Vec<QualifiedName>,
}

impl<'a> ModelBuilder<'a> {
    /// Creates a builder over the given catalog and configuration.
    #[must_use]
    pub fn new(catalog: &'a TypeCatalog, config: &'a GeneratorConfig) -> Self {
        Self {
            catalog,
            config,
            resolver: TypeNameResolver::new(catalog),
            known: config.known_types(),
        }
    }

    /// Builds the entity catalog for the given roots.
    ///
    /// `commands` are the candidate command types; `extra` are additional
    /// roots that seed dependency discovery. Both lists contribute their
    /// transitive closures.
    ///
    /// # Errors
    /// Returns `CodegenError::UnknownType` when a root reference does not
    /// resolve in the catalog.
    pub fn build(
        &self,
        commands: &[TypeRef],
        extra: &[TypeRef],
    ) -> Result<Vec<GeneratorEntity>, CodegenError> {
        let dependency_resolver = DependencyResolver::new(self.catalog)
            .with_ignored(self.config.known_types())
            .with_policy(self.config.policy);

        let mut roots: Vec<TypeRef> = commands.to_vec();
        roots.extend_from_slice(extra);
        let closure = dependency_resolver.all_dependencies(&roots);

        let mut entities: Vec<GeneratorEntity> = Vec::new();
        let mut discovered: IndexMap<String, TypeRef> = IndexMap::new();

        // Pass 1: roots that pass the command filter.
        for root in &roots {
            let Some(decl) = self.catalog.resolve(root) else {
                // Scalars and shape wrappers have no declaration of
                // their own; the closure already expanded them.
                let Some(identity) = root.identity() else {
                    continue;
                };
                return Err(CodegenError::unknown_type(identity.to_string(), "root types"));
            };
            if decl.is_abstract || !self.is_root_eligible(decl) {
                continue;
            }
            if entities.iter().any(|entity| entity.identity == decl.name) {
                continue;
            }
            let entity = if decl.is_enum() {
                self.build_enum_entity(decl)
            } else {
                self.build_command_entity(decl, &mut discovered)
            };
            entities.push(entity);
        }

        // Everything else in the closure is a used-type candidate. The
        // worklist is deduplicated by identity: two types sharing a
        // rendered name but living in different namespaces both build
        // (the collision resolver renames them later).
        let mut built: HashSet<QualifiedName> =
            entities.iter().map(|entity| entity.identity.clone()).collect();
        let mut queued = built.clone();
        let mut pending: Vec<TypeRef> = Vec::new();
        for (identity, ty) in &closure {
            if queued.insert(identity.clone()) {
                pending.push(ty.clone());
            }
        }

        // Pass 2: drain the worklist to a fixpoint. Building an entity
        // can surface further types through member rendering; those land
        // in `discovered` and are folded into the queue, so edges the
        // traversal policy does not walk (e.g. base types) still emit.
        let mut position = 0;
        let mut drained = 0;
        loop {
            while drained < discovered.len() {
                let Some(ty) = discovered.get_index(drained).map(|(_, ty)| ty.clone()) else {
                    break;
                };
                drained += 1;
                if let Some(identity) = ty.identity() {
                    if queued.insert(identity.clone()) {
                        pending.push(ty);
                    }
                }
            }
            if position >= pending.len() {
                break;
            }
            let ty = pending[position].clone();
            position += 1;

            let Some(identity) = ty.identity().cloned() else {
                continue;
            };
            if built.contains(&identity) {
                continue;
            }
            let Some(decl) = self.catalog.get(&identity) else {
                // Unresolvable references render by simple name only.
                continue;
            };
            built.insert(identity);
            if decl.is_abstract {
                continue;
            }

            let entity = if decl.is_enum() {
                self.build_enum_entity(decl)
            } else {
                self.build_used_entity(decl, &mut discovered)
            };
            entities.push(entity);
        }

        Ok(entities)
    }

    /// Root filter: classes must implement the marker interface when one
    /// is configured; enums always qualify; value types qualify only
    /// without a marker.
    fn is_root_eligible(&self, decl: &TypeDecl) -> bool {
        match decl.kind {
            DeclKind::Enum => true,
            DeclKind::Class => match &self.config.command_marker {
                Some(marker) => decl
                    .interfaces
                    .iter()
                    .any(|interface| interface.identity() == Some(marker)),
                None => true,
            },
            DeclKind::ValueType => self.config.command_marker.is_none(),
            DeclKind::Interface => false,
        }
    }

    fn build_enum_entity(&self, decl: &TypeDecl) -> GeneratorEntity {
        let mut entity = GeneratorEntity::new(EntityKind::Enum, decl.name.clone());
        entity.enum_members = decl.enum_members.clone();
        entity.documentation = decl.docs.clone();
        entity
    }

    fn build_command_entity(
        &self,
        decl: &TypeDecl,
        discovered: &mut IndexMap<String, TypeRef>,
    ) -> GeneratorEntity {
        let kind = if decl.kind == DeclKind::ValueType {
            EntityKind::Interface
        } else {
            EntityKind::Class
        };
        let mut entity = GeneratorEntity::new(kind, decl.name.clone());
        entity.generic_params = decl.generic_params.clone();
        entity.documentation = decl.docs.clone();
        entity.json_type_name = decl.name.to_string();
        entity.members = self.build_members(decl, discovered);

        if let Some(base) = &decl.base {
            entity.base_type_name =
                self.resolver
                    .resolve(Some(base), self.config.erase_optionality, None);
            self.record_used(base, discovered);
        }

        let contract_match = self.config.command_contract.as_ref().and_then(|contract| {
            decl.interfaces
                .iter()
                .find(|interface| interface.identity() == Some(contract))
        });
        match contract_match {
            Some(interface) => {
                let display = self
                    .config
                    .contract_display_name
                    .as_deref()
                    .or_else(|| self.config.command_contract.as_ref().map(|c| c.name.as_str()));
                entity.implemented_interfaces.push(self.resolver.resolve(
                    Some(interface),
                    self.config.erase_optionality,
                    display,
                ));
                if let TypeRef::Instance { args, .. } = interface {
                    entity.return_type_name = self.resolver.resolve(
                        args.first(),
                        self.config.erase_optionality,
                        None,
                    );
                    if let Some(arg) = args.first() {
                        self.record_used(arg, discovered);
                    }
                }
            }
            // No contract configured, or the configured contract is not
            // implemented: render all interfaces instead.
            None => entity.implemented_interfaces = self.render_interfaces(decl, discovered),
        }

        entity
    }

    fn build_used_entity(
        &self,
        decl: &TypeDecl,
        discovered: &mut IndexMap<String, TypeRef>,
    ) -> GeneratorEntity {
        let mut entity = GeneratorEntity::new(EntityKind::UsedReturnType, decl.name.clone());
        entity.generic_params = decl.generic_params.clone();
        entity.documentation = decl.docs.clone();
        entity.members = self.build_members(decl, discovered);
        entity.implemented_interfaces = self.render_interfaces(decl, discovered);
        if let Some(base) = &decl.base {
            entity.base_type_name =
                self.resolver
                    .resolve(Some(base), self.config.erase_optionality, None);
            self.record_used(base, discovered);
        }
        entity
    }

    fn render_interfaces(
        &self,
        decl: &TypeDecl,
        discovered: &mut IndexMap<String, TypeRef>,
    ) -> Vec<String> {
        decl.interfaces
            .iter()
            .map(|interface| {
                self.record_used(interface, discovered);
                self.resolver
                    .resolve(Some(interface), self.config.erase_optionality, None)
            })
            .collect()
    }

    fn build_members(
        &self,
        decl: &TypeDecl,
        discovered: &mut IndexMap<String, TypeRef>,
    ) -> Vec<GeneratorMember> {
        decl.properties
            .iter()
            .map(|property| {
                let type_name = self.resolver.resolve(
                    Some(&property.ty),
                    self.config.erase_optionality,
                    None,
                );
                let mut member = GeneratorMember::new(&property.name, type_name);
                member.docs = property.docs.clone();
                member.is_optional = self.config.erase_optionality
                    && matches!(property.ty, TypeRef::Optional(_));
                if let Some(symbol) = generic_symbol(&property.ty, &decl.generic_params) {
                    member.is_declared_as_generic = true;
                    member.generic_name = symbol;
                }
                self.record_used(&property.ty, discovered);
                member
            })
            .collect()
    }

    /// Records every custom type a rendered reference pulls in, keyed by
    /// its rendered display name. Known (caller-provided) types are never
    /// recorded.
    fn record_used(&self, ty: &TypeRef, discovered: &mut IndexMap<String, TypeRef>) {
        match ty {
            TypeRef::Optional(inner) | TypeRef::Sequence(inner) | TypeRef::Array(inner) => {
                self.record_used(inner, discovered);
            }
            TypeRef::Instance { definition, args } => {
                for arg in args {
                    self.record_used(arg, discovered);
                }
                self.record_named(definition, discovered);
            }
            TypeRef::Named(qualified) => self.record_named(qualified, discovered),
            TypeRef::Primitive(_) | TypeRef::Param(_) => {}
        }
    }

    fn record_named(&self, qualified: &QualifiedName, discovered: &mut IndexMap<String, TypeRef>) {
        if self.known.contains(qualified) {
            return;
        }
        let reference = TypeRef::Named(qualified.clone());
        let key = self.resolver.resolve(Some(&reference), true, None);
        discovered.entry(key).or_insert(reference);
    }
}

/// Returns the parameter symbol rendering when a member type depends on
/// one of the declaring entity's own generic parameters.
fn generic_symbol(ty: &TypeRef, params: &[String]) -> Option<String> {
    match ty {
        TypeRef::Param(symbol) if params.contains(symbol) => Some(symbol.clone()),
        TypeRef::Sequence(inner) | TypeRef::Array(inner) => {
            generic_symbol(inner, params).map(|symbol| format!("{symbol}[]"))
        }
        TypeRef::Optional(inner) => generic_symbol(inner, params),
        _ => None,
    }
}
