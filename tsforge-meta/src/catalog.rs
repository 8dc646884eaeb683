//! Insertion-ordered type catalog.
//!
//! The catalog stores type declarations in the order they were added and
//! resolves qualified-name references. Iteration order is the insertion
//! order; downstream discovery and naming depend on it being stable.

use crate::types::{QualifiedName, TypeDecl, TypeRef};
use std::collections::HashMap;

/// Read-only store of type declarations, keyed by qualified name.
#[derive(Debug, Clone, Default)]
pub struct TypeCatalog {
    decls: Vec<TypeDecl>,
    index: HashMap<QualifiedName, usize>,
}

impl TypeCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a declaration to the catalog. A declaration with the same
    /// qualified name replaces the earlier one in the lookup index while
    /// keeping the original position.
    pub fn add_type(&mut self, decl: TypeDecl) {
        let name = decl.name.clone();
        if let Some(&existing) = self.index.get(&name) {
            self.decls[existing] = decl;
        } else {
            let position = self.decls.len();
            self.decls.push(decl);
            self.index.insert(name, position);
        }
    }

    /// Looks up a declaration by qualified name.
    #[must_use]
    pub fn get(&self, name: &QualifiedName) -> Option<&TypeDecl> {
        self.index.get(name).map(|&idx| &self.decls[idx])
    }

    /// Resolves the declaration a reference points at, if any. Closed
    /// generics resolve to their definition.
    #[must_use]
    pub fn resolve(&self, ty: &TypeRef) -> Option<&TypeDecl> {
        ty.identity().and_then(|qualified| self.get(qualified))
    }

    /// Returns true if a declaration with the given name exists.
    #[must_use]
    pub fn contains(&self, name: &QualifiedName) -> bool {
        self.index.contains_key(name)
    }

    /// Iterates declarations in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &TypeDecl> {
        self.decls.iter()
    }

    /// Iterates declarations of one namespace, in insertion order. Used
    /// for bulk root discovery.
    pub fn types_in_namespace<'a>(
        &'a self,
        namespace: &'a str,
    ) -> impl Iterator<Item = &'a TypeDecl> {
        self.decls
            .iter()
            .filter(move |decl| decl.name.namespace == namespace)
    }

    /// Returns the number of declarations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.decls.len()
    }

    /// Returns true if the catalog holds no declarations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }

    /// Mutable lookup by qualified name. Used by the documentation loader
    /// to attach doc lines.
    pub(crate) fn get_mut(&mut self, name: &QualifiedName) -> Option<&mut TypeDecl> {
        self.index.get(name).map(|&idx| &mut self.decls[idx])
    }
}

impl FromIterator<TypeDecl> for TypeCatalog {
    fn from_iter<I: IntoIterator<Item = TypeDecl>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for decl in iter {
            catalog.add_type(decl);
        }
        catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TypeDecl;

    fn sample_catalog() -> TypeCatalog {
        let mut catalog = TypeCatalog::new();
        catalog.add_type(TypeDecl::class("Api.Commands", "CreateUser"));
        catalog.add_type(TypeDecl::class("Api.Data", "UserData"));
        catalog.add_type(TypeDecl::enumeration("Api.Data", "Role", &["Admin", "Member"]));
        catalog
    }

    #[test]
    fn lookup_by_qualified_name() {
        let catalog = sample_catalog();
        assert!(catalog.contains(&QualifiedName::new("Api.Data", "UserData")));
        assert!(!catalog.contains(&QualifiedName::new("Api.Data", "Missing")));

        let decl = catalog.get(&QualifiedName::new("Api.Data", "Role")).unwrap();
        assert!(decl.is_enum());
    }

    #[test]
    fn iteration_preserves_insertion_order() {
        let catalog = sample_catalog();
        let names: Vec<&str> = catalog.iter().map(|d| d.name.name.as_str()).collect();
        assert_eq!(names, vec!["CreateUser", "UserData", "Role"]);
    }

    #[test]
    fn namespace_enumeration() {
        let catalog = sample_catalog();
        let data_types: Vec<&str> = catalog
            .types_in_namespace("Api.Data")
            .map(|d| d.name.name.as_str())
            .collect();
        assert_eq!(data_types, vec!["UserData", "Role"]);
    }

    #[test]
    fn resolve_follows_instance_definitions() {
        let mut catalog = sample_catalog();
        catalog.add_type(TypeDecl::class("Api", "Page").with_generic_params(&["T"]));

        let page_of_users = TypeRef::instance(
            QualifiedName::new("Api", "Page"),
            vec![TypeRef::named("Api.Data", "UserData")],
        );
        let decl = catalog.resolve(&page_of_users).unwrap();
        assert_eq!(decl.name.name, "Page");
    }

    #[test]
    fn replacement_keeps_position() {
        let mut catalog = sample_catalog();
        catalog.add_type(TypeDecl::class("Api.Data", "UserData").with_property("Id", TypeRef::int()));

        assert_eq!(catalog.len(), 3);
        let names: Vec<&str> = catalog.iter().map(|d| d.name.name.as_str()).collect();
        assert_eq!(names, vec!["CreateUser", "UserData", "Role"]);
        let decl = catalog.get(&QualifiedName::new("Api.Data", "UserData")).unwrap();
        assert_eq!(decl.properties.len(), 1);
    }
}
