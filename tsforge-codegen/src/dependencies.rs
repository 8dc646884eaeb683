//! Dependency graph resolution.
//!
//! Computes which custom types a given type reference pulls into the
//! generated catalog. Expansion of a single type walks only that type's
//! own structural edges (generic arguments, interfaces, base, members);
//! the transitive closure is computed with an explicit worklist, so
//! self-referential and cyclic graphs terminate by construction.

use indexmap::IndexMap;
use std::collections::{HashSet, VecDeque};
use std::hash::{Hash, Hasher};
use tsforge_meta::{DeclKind, QualifiedName, TypeCatalog, TypeRef};

/// Which structural edges the resolver follows. Generic type arguments
/// are always followed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraversalPolicy {
    /// Follow implemented interfaces.
    pub interfaces: bool,
    /// Follow the base type.
    pub base: bool,
    /// Follow declared fields.
    pub fields: bool,
    /// Follow declared properties.
    pub properties: bool,
    /// Follow method parameter and return types.
    pub methods: bool,
}

impl Default for TraversalPolicy {
    fn default() -> Self {
        Self {
            interfaces: true,
            base: false,
            fields: false,
            properties: true,
            methods: false,
        }
    }
}

/// Classification of a discovered dependency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    /// Not resolvable in the catalog.
    Unknown,
    /// Class type.
    Class,
    /// Interface type.
    Interface,
    /// Enumeration type.
    Enum,
    /// Structural value type.
    ValueType,
}

impl TypeKind {
    /// Classifies a declared type through the catalog.
    #[must_use]
    pub fn of(catalog: &TypeCatalog, name: &QualifiedName) -> Self {
        match catalog.get(name).map(|decl| decl.kind) {
            Some(DeclKind::Class) => Self::Class,
            Some(DeclKind::Interface) => Self::Interface,
            Some(DeclKind::Enum) => Self::Enum,
            Some(DeclKind::ValueType) => Self::ValueType,
            None => Self::Unknown,
        }
    }
}

/// A discovered dependency: a type reference plus its classification.
/// Equality and hashing are by the underlying qualified identity, so a
/// closed generic compares equal to its definition. The classification
/// is computed once at discovery and never changes.
#[derive(Debug, Clone)]
pub struct DependencyNode {
    /// The discovered type (closed generics are collapsed to their
    /// definition).
    pub ty: TypeRef,
    /// Classification at discovery time.
    pub kind: TypeKind,
}

impl PartialEq for DependencyNode {
    fn eq(&self, other: &Self) -> bool {
        self.ty.identity() == other.ty.identity()
    }
}

impl Eq for DependencyNode {}

impl Hash for DependencyNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ty.identity().hash(state);
    }
}

/// Resolves the custom types referenced by root types.
pub struct DependencyResolver<'a> {
    catalog: &'a TypeCatalog,
    ignored: Vec<QualifiedName>,
    policy: TraversalPolicy,
}

impl<'a> DependencyResolver<'a> {
    /// Creates a resolver with the default traversal policy and no
    /// caller exclusions.
    #[must_use]
    pub fn new(catalog: &'a TypeCatalog) -> Self {
        Self {
            catalog,
            ignored: Vec::new(),
            policy: TraversalPolicy::default(),
        }
    }

    /// Excludes the given already-known types from every result. Closed
    /// generics are excluded when their definition is listed.
    #[must_use]
    pub fn with_ignored(mut self, ignored: Vec<QualifiedName>) -> Self {
        self.ignored = ignored;
        self
    }

    /// Replaces the traversal policy.
    #[must_use]
    pub fn with_policy(mut self, policy: TraversalPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Computes the single-level dependencies of one type: the types
    /// referenced by its own structural edges, with generic unwrapping,
    /// deduplicated in first-seen order. Does not recurse into the
    /// members of discovered types.
    #[must_use]
    pub fn dependencies(&self, root: &TypeRef, include_self: bool) -> Vec<DependencyNode> {
        let mut nodes = Vec::new();
        let mut seen = HashSet::new();
        self.collect(root, include_self, &mut nodes, &mut seen);

        if !include_self {
            if let Some(root_identity) = root.identity() {
                nodes.retain(|node| node.ty.identity() != Some(root_identity));
            }
        }
        nodes
    }

    /// Computes the full transitive closure of the given roots with a
    /// breadth-first worklist. The result maps each discovered identity
    /// to its reference, in discovery order; every type is expanded at
    /// most once.
    #[must_use]
    pub fn all_dependencies(&self, roots: &[TypeRef]) -> IndexMap<QualifiedName, TypeRef> {
        let mut accumulated: IndexMap<QualifiedName, TypeRef> = IndexMap::new();
        let mut expanded: HashSet<QualifiedName> = HashSet::new();
        let mut queue: VecDeque<TypeRef> = roots.iter().cloned().collect();

        while let Some(ty) = queue.pop_front() {
            if let Some(identity) = ty.identity() {
                if !expanded.insert(identity.clone()) {
                    continue;
                }
            }
            for node in self.dependencies(&ty, true) {
                let Some(identity) = node.ty.identity() else {
                    continue;
                };
                if !accumulated.contains_key(identity) {
                    accumulated.insert(identity.clone(), node.ty.clone());
                    queue.push_back(node.ty);
                }
            }
        }

        accumulated
    }

    /// Single-level expansion of one root: register the root (with
    /// generic-argument recursion) and walk its enabled edges.
    fn collect(
        &self,
        root: &TypeRef,
        include_self: bool,
        nodes: &mut Vec<DependencyNode>,
        seen: &mut HashSet<QualifiedName>,
    ) {
        match root {
            // Scalars and unbound parameters contribute nothing.
            TypeRef::Primitive(_) | TypeRef::Param(_) => return,
            // Shape wrappers expand as their element.
            TypeRef::Optional(inner) | TypeRef::Sequence(inner) | TypeRef::Array(inner) => {
                self.collect(inner, include_self, nodes, seen);
                return;
            }
            TypeRef::Instance { definition, args } => {
                // Generic arguments expand fully before the definition
                // itself is registered.
                for arg in args {
                    self.collect(arg, true, nodes, seen);
                }
                if include_self {
                    self.register_named(definition, nodes, seen);
                }
            }
            TypeRef::Named(qualified) => {
                if include_self {
                    self.register_named(qualified, nodes, seen);
                }
            }
        }

        let Some(decl) = self.catalog.resolve(root) else {
            return;
        };
        if !matches!(decl.kind, DeclKind::Class | DeclKind::Interface) {
            return;
        }

        if self.policy.base {
            if let Some(base) = &decl.base {
                self.register(base, nodes, seen);
            }
        }
        if self.policy.interfaces {
            for interface in &decl.interfaces {
                self.register(interface, nodes, seen);
            }
        }
        if self.policy.fields {
            for field in &decl.fields {
                self.register(&field.ty, nodes, seen);
            }
        }
        if self.policy.properties {
            for property in &decl.properties {
                self.register(&property.ty, nodes, seen);
            }
        }
        if self.policy.methods {
            for method in &decl.methods {
                for parameter in &method.parameters {
                    self.register(parameter, nodes, seen);
                }
                if let Some(return_type) = &method.return_type {
                    self.register(return_type, nodes, seen);
                }
            }
        }
    }

    /// Registers one edge target: unwraps shapes, recurses into generic
    /// arguments, skips scalars and unbound parameters. Never walks the
    /// target's own members.
    fn register(
        &self,
        ty: &TypeRef,
        nodes: &mut Vec<DependencyNode>,
        seen: &mut HashSet<QualifiedName>,
    ) {
        match ty {
            TypeRef::Primitive(_) | TypeRef::Param(_) => {}
            TypeRef::Optional(inner) | TypeRef::Sequence(inner) | TypeRef::Array(inner) => {
                self.register(inner, nodes, seen);
            }
            TypeRef::Instance { definition, args } => {
                for arg in args {
                    self.register(arg, nodes, seen);
                }
                self.register_named(definition, nodes, seen);
            }
            TypeRef::Named(qualified) => self.register_named(qualified, nodes, seen),
        }
    }

    fn register_named(
        &self,
        qualified: &QualifiedName,
        nodes: &mut Vec<DependencyNode>,
        seen: &mut HashSet<QualifiedName>,
    ) {
        if self.ignored.contains(qualified) || seen.contains(qualified) {
            return;
        }
        seen.insert(qualified.clone());
        nodes.push(DependencyNode {
            ty: TypeRef::Named(qualified.clone()),
            kind: TypeKind::of(self.catalog, qualified),
        });
    }
}
