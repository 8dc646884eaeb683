//! Type name resolution.
//!
//! Renders any type reference into its canonical TypeScript spelling.
//! The resolver is pure: no caches, no state beyond the catalog borrow,
//! and the same reference always renders to the same string.

use tsforge_meta::{TypeCatalog, TypeRef};

/// Display name used for the nullable wrapper when optionality is kept.
const NULLABLE_NAME: &str = "Nullable";

/// Renders type references into TypeScript type strings.
pub struct TypeNameResolver<'a> {
    catalog: &'a TypeCatalog,
}

impl<'a> TypeNameResolver<'a> {
    /// Creates a resolver over the given catalog.
    #[must_use]
    pub fn new(catalog: &'a TypeCatalog) -> Self {
        Self { catalog }
    }

    /// Renders a type reference.
    ///
    /// # Arguments
    /// * `ty` - the reference to render; `None` renders to the empty string
    /// * `erase_optionality` - when true, the nullable wrapper is dropped
    ///   and the underlying type renders bare (the caller marks the member
    ///   optional in its own syntax); when false the wrapper renders as a
    ///   `Nullable<...>` instantiation
    /// * `name_override` - replaces the simple name of the outermost named
    ///   reference, preserving generic arguments
    #[must_use]
    pub fn resolve(
        &self,
        ty: Option<&TypeRef>,
        erase_optionality: bool,
        name_override: Option<&str>,
    ) -> String {
        let Some(ty) = ty else {
            return String::new();
        };

        match ty {
            TypeRef::Optional(inner) => {
                if erase_optionality {
                    self.resolve(Some(inner), erase_optionality, None)
                } else {
                    format!(
                        "{NULLABLE_NAME}<{}>",
                        self.resolve(Some(inner), erase_optionality, None)
                    )
                }
            }
            TypeRef::Named(qualified) => {
                let name = name_override.unwrap_or(&qualified.name);
                match self.catalog.get(qualified) {
                    Some(decl) if decl.is_generic() => {
                        format!("{}<{}>", name, decl.generic_params.join(", "))
                    }
                    _ => name.to_string(),
                }
            }
            TypeRef::Sequence(element) => {
                format!("{}[]", self.resolve(Some(element), erase_optionality, None))
            }
            TypeRef::Instance { definition, args } => {
                let name = name_override.unwrap_or(&definition.name);
                let rendered: Vec<String> = args
                    .iter()
                    .map(|arg| self.resolve(Some(arg), erase_optionality, None))
                    .collect();
                format!("{}<{}>", name, rendered.join(", "))
            }
            TypeRef::Primitive(kind) => kind.script_name().to_string(),
            TypeRef::Array(element) => {
                format!("{}[]", self.resolve(Some(element), erase_optionality, None))
            }
            TypeRef::Param(symbol) => symbol.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tsforge_meta::{QualifiedName, TypeDecl};

    fn catalog_with_generics() -> TypeCatalog {
        let mut catalog = TypeCatalog::new();
        catalog.add_type(TypeDecl::class("Api", "Page").with_generic_params(&["T"]));
        catalog.add_type(TypeDecl::class("Api", "Pair").with_generic_params(&["TKey", "TValue"]));
        catalog.add_type(TypeDecl::class("Api", "User"));
        catalog
    }

    #[test]
    fn absent_reference_renders_empty() {
        let catalog = TypeCatalog::new();
        let resolver = TypeNameResolver::new(&catalog);
        assert_eq!(resolver.resolve(None, true, None), "");
    }

    #[test]
    fn optionality_is_erased_or_kept() {
        let catalog = TypeCatalog::new();
        let resolver = TypeNameResolver::new(&catalog);
        let nullable_int = TypeRef::optional(TypeRef::int());

        assert_eq!(resolver.resolve(Some(&nullable_int), true, None), "number");
        assert_eq!(
            resolver.resolve(Some(&nullable_int), false, None),
            "Nullable<number>"
        );
    }

    #[test]
    fn generic_definition_renders_parameter_symbols() {
        let catalog = catalog_with_generics();
        let resolver = TypeNameResolver::new(&catalog);

        let page = TypeRef::named("Api", "Page");
        assert_eq!(resolver.resolve(Some(&page), true, None), "Page<T>");

        let pair = TypeRef::named("Api", "Pair");
        assert_eq!(resolver.resolve(Some(&pair), true, None), "Pair<TKey, TValue>");
        assert_eq!(
            resolver.resolve(Some(&pair), true, Some("Mapping")),
            "Mapping<TKey, TValue>"
        );
    }

    #[test]
    fn sequence_shapes_collapse_to_arrays() {
        let catalog = catalog_with_generics();
        let resolver = TypeNameResolver::new(&catalog);

        let users = TypeRef::sequence(TypeRef::named("Api", "User"));
        assert_eq!(resolver.resolve(Some(&users), true, None), "User[]");

        let nested = TypeRef::sequence(TypeRef::sequence(TypeRef::int()));
        assert_eq!(resolver.resolve(Some(&nested), true, None), "number[][]");
    }

    #[test]
    fn closed_generics_compose_recursively() {
        let catalog = catalog_with_generics();
        let resolver = TypeNameResolver::new(&catalog);

        // Page<User[], Pair<Role[], number>> must render exactly.
        let ty = TypeRef::instance(
            QualifiedName::new("Api", "Page"),
            vec![
                TypeRef::array(TypeRef::named("Api", "User")),
                TypeRef::instance(
                    QualifiedName::new("Api", "Pair"),
                    vec![
                        TypeRef::array(TypeRef::named("Api", "Role")),
                        TypeRef::int(),
                    ],
                ),
            ],
        );
        assert_eq!(
            resolver.resolve(Some(&ty), true, None),
            "Page<User[], Pair<Role[], number>>"
        );
    }

    #[test]
    fn array_of_closed_generic_appends_suffix() {
        let catalog = catalog_with_generics();
        let resolver = TypeNameResolver::new(&catalog);

        let pages = TypeRef::array(TypeRef::instance(
            QualifiedName::new("Api", "Page"),
            vec![TypeRef::text()],
        ));
        assert_eq!(resolver.resolve(Some(&pages), true, None), "Page<string>[]");
    }

    #[test]
    fn primitive_spellings() {
        let catalog = TypeCatalog::new();
        let resolver = TypeNameResolver::new(&catalog);

        assert_eq!(resolver.resolve(Some(&TypeRef::int()), true, None), "number");
        assert_eq!(resolver.resolve(Some(&TypeRef::uuid()), true, None), "string");
        assert_eq!(
            resolver.resolve(Some(&TypeRef::timestamp()), true, None),
            "string"
        );
        assert_eq!(
            resolver.resolve(Some(&TypeRef::boolean()), true, None),
            "boolean"
        );
        assert_eq!(resolver.resolve(Some(&TypeRef::object()), true, None), "any");
    }

    #[test]
    fn arrays_of_primitives_and_complex_types() {
        let catalog = catalog_with_generics();
        let resolver = TypeNameResolver::new(&catalog);

        let ints = TypeRef::array(TypeRef::int());
        assert_eq!(resolver.resolve(Some(&ints), true, None), "number[]");

        let anys = TypeRef::array(TypeRef::object());
        assert_eq!(resolver.resolve(Some(&anys), true, None), "any[]");

        let users = TypeRef::array(TypeRef::named("Api", "User"));
        assert_eq!(resolver.resolve(Some(&users), true, None), "User[]");
    }

    #[test]
    fn standalone_parameter_renders_its_symbol() {
        let catalog = TypeCatalog::new();
        let resolver = TypeNameResolver::new(&catalog);
        let param = TypeRef::param("T");
        assert_eq!(resolver.resolve(Some(&param), true, None), "T");
    }

    #[test]
    fn resolution_is_referentially_transparent() {
        let catalog = catalog_with_generics();
        let resolver = TypeNameResolver::new(&catalog);
        let ty = TypeRef::instance(
            QualifiedName::new("Api", "Page"),
            vec![TypeRef::sequence(TypeRef::named("Api", "User"))],
        );

        let first = resolver.resolve(Some(&ty), true, None);
        let second = resolver.resolve(Some(&ty), true, None);
        assert_eq!(first, second);
        assert_eq!(first, "Page<User[]>");
    }

    #[test]
    fn unknown_named_reference_falls_back_to_simple_name() {
        let catalog = TypeCatalog::new();
        let resolver = TypeNameResolver::new(&catalog);
        let ty = TypeRef::named("Elsewhere", "Mystery");

        assert_eq!(resolver.resolve(Some(&ty), true, None), "Mystery");
        assert_eq!(resolver.resolve(Some(&ty), true, Some("Known")), "Known");
    }
}
