//! Type reference and declaration model.
//!
//! This module contains the data structures describing a reflected type
//! graph: qualified names, type reference values, and type declarations
//! with their members.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Namespace-qualified type name. The stable identity key of a declared
/// type throughout the system.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct QualifiedName {
    /// Namespace path, dot-separated (empty for the global namespace).
    pub namespace: String,
    /// Simple type name.
    pub name: String,
}

impl QualifiedName {
    /// Creates a qualified name from a namespace and a simple name.
    #[must_use]
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.namespace.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}.{}", self.namespace, self.name)
        }
    }
}

/// Scalar kinds of the host type system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimitiveKind {
    /// Signed integer of any width.
    SignedInt,
    /// Unsigned integer of any width.
    UnsignedInt,
    /// Floating-point number of any width.
    Float,
    /// Fixed-point decimal number.
    Decimal,
    /// Single character.
    Char,
    /// Character string.
    Text,
    /// Globally unique identifier.
    Uuid,
    /// Point-in-time value.
    Timestamp,
    /// Boolean.
    Bool,
    /// The universal root object type.
    Object,
}

impl PrimitiveKind {
    /// Returns true for integer and floating-point kinds.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(
            self,
            Self::SignedInt | Self::UnsignedInt | Self::Float | Self::Decimal
        )
    }

    /// Returns true for character, string and opaque-scalar kinds.
    #[must_use]
    pub const fn is_textual(&self) -> bool {
        matches!(self, Self::Char | Self::Text | Self::Uuid | Self::Timestamp)
    }

    /// Returns the TypeScript spelling of the primitive.
    #[must_use]
    pub const fn script_name(&self) -> &'static str {
        match self {
            Self::SignedInt | Self::UnsignedInt | Self::Float | Self::Decimal => "number",
            Self::Char | Self::Text | Self::Uuid | Self::Timestamp => "string",
            Self::Bool => "boolean",
            Self::Object => "any",
        }
    }
}

/// A reference to a type as it is used - by a member, a generic argument,
/// a base type or an interface list. References to declared types carry
/// only the qualified name and are resolved through the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeRef {
    /// Reference to a declared type.
    Named(QualifiedName),
    /// A scalar of the host type system.
    Primitive(PrimitiveKind),
    /// Nullable wrapper around an underlying type.
    Optional(Box<TypeRef>),
    /// Canonical collection shape (list, enumerable, queryable).
    Sequence(Box<TypeRef>),
    /// Array of an element type.
    Array(Box<TypeRef>),
    /// Closed generic instantiation of a declared generic definition.
    Instance {
        /// The generic type definition being instantiated.
        definition: QualifiedName,
        /// Concrete generic arguments, in declaration order.
        args: Vec<TypeRef>,
    },
    /// An unbound generic parameter symbol used standalone.
    Param(String),
}

impl TypeRef {
    /// Creates a reference to a declared type.
    #[must_use]
    pub fn named(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Named(QualifiedName::new(namespace, name))
    }

    /// Creates a closed generic instantiation reference.
    #[must_use]
    pub fn instance(definition: QualifiedName, args: Vec<TypeRef>) -> Self {
        Self::Instance { definition, args }
    }

    /// Wraps a type reference in the nullable shape.
    #[must_use]
    pub fn optional(inner: TypeRef) -> Self {
        Self::Optional(Box::new(inner))
    }

    /// Wraps a type reference in the canonical collection shape.
    #[must_use]
    pub fn sequence(element: TypeRef) -> Self {
        Self::Sequence(Box::new(element))
    }

    /// Wraps a type reference in the array shape.
    #[must_use]
    pub fn array(element: TypeRef) -> Self {
        Self::Array(Box::new(element))
    }

    /// Creates an unbound generic parameter reference.
    #[must_use]
    pub fn param(symbol: impl Into<String>) -> Self {
        Self::Param(symbol.into())
    }

    /// Signed integer scalar.
    #[must_use]
    pub const fn int() -> Self {
        Self::Primitive(PrimitiveKind::SignedInt)
    }

    /// String scalar.
    #[must_use]
    pub const fn text() -> Self {
        Self::Primitive(PrimitiveKind::Text)
    }

    /// Boolean scalar.
    #[must_use]
    pub const fn boolean() -> Self {
        Self::Primitive(PrimitiveKind::Bool)
    }

    /// Point-in-time scalar.
    #[must_use]
    pub const fn timestamp() -> Self {
        Self::Primitive(PrimitiveKind::Timestamp)
    }

    /// Globally unique identifier scalar.
    #[must_use]
    pub const fn uuid() -> Self {
        Self::Primitive(PrimitiveKind::Uuid)
    }

    /// The universal root object type.
    #[must_use]
    pub const fn object() -> Self {
        Self::Primitive(PrimitiveKind::Object)
    }

    /// Returns the qualified identity of the referenced declaration, if
    /// any. A closed generic collapses to its definition's identity.
    #[must_use]
    pub fn identity(&self) -> Option<&QualifiedName> {
        match self {
            Self::Named(qualified) => Some(qualified),
            Self::Instance { definition, .. } => Some(definition),
            _ => None,
        }
    }

    /// Returns true if this reference is a scalar of the host type system.
    #[must_use]
    pub const fn is_primitive(&self) -> bool {
        matches!(self, Self::Primitive(_))
    }

    /// Returns true if this is a closed generic instantiation.
    #[must_use]
    pub const fn is_instance(&self) -> bool {
        matches!(self, Self::Instance { .. })
    }
}

/// Classification of a type declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeclKind {
    /// Class type.
    Class,
    /// Interface type.
    Interface,
    /// Enumeration type.
    Enum,
    /// Structural value type.
    ValueType,
}

/// A field or property declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberDecl {
    /// Member name.
    pub name: String,
    /// Member type.
    pub ty: TypeRef,
    /// Documentation lines (empty when undocumented).
    pub docs: Vec<String>,
}

impl MemberDecl {
    /// Creates a member declaration.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            docs: Vec::new(),
        }
    }
}

/// A method declaration. Only the parameter and return types participate
/// in dependency discovery; bodies are never represented.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodDecl {
    /// Method name.
    pub name: String,
    /// Parameter types, in declaration order.
    pub parameters: Vec<TypeRef>,
    /// Return type (None for void).
    pub return_type: Option<TypeRef>,
}

impl MethodDecl {
    /// Creates a method declaration.
    #[must_use]
    pub fn new(name: impl Into<String>, parameters: Vec<TypeRef>, return_type: Option<TypeRef>) -> Self {
        Self {
            name: name.into(),
            parameters,
            return_type,
        }
    }
}

/// A type declaration in the catalog.
///
/// The implicit numeric discriminator field the host runtime injects into
/// enumerations is not represented; `enum_members` carries value names
/// only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeDecl {
    /// Qualified name. Immutable identity of the declaration.
    pub name: QualifiedName,
    /// Classification.
    pub kind: DeclKind,
    /// True for abstract classes.
    pub is_abstract: bool,
    /// Generic parameter symbols (empty for non-generic types).
    pub generic_params: Vec<String>,
    /// Base type (never the universal object root).
    pub base: Option<TypeRef>,
    /// Directly implemented interfaces.
    pub interfaces: Vec<TypeRef>,
    /// Declared properties.
    pub properties: Vec<MemberDecl>,
    /// Declared fields.
    pub fields: Vec<MemberDecl>,
    /// Declared methods.
    pub methods: Vec<MethodDecl>,
    /// Enumeration value names (enums only).
    pub enum_members: Vec<String>,
    /// Documentation lines (empty when undocumented).
    pub docs: Vec<String>,
}

impl TypeDecl {
    fn new(namespace: impl Into<String>, name: impl Into<String>, kind: DeclKind) -> Self {
        Self {
            name: QualifiedName::new(namespace, name),
            kind,
            is_abstract: false,
            generic_params: Vec::new(),
            base: None,
            interfaces: Vec::new(),
            properties: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
            enum_members: Vec::new(),
            docs: Vec::new(),
        }
    }

    /// Creates a class declaration.
    #[must_use]
    pub fn class(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(namespace, name, DeclKind::Class)
    }

    /// Creates an interface declaration.
    #[must_use]
    pub fn interface(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(namespace, name, DeclKind::Interface)
    }

    /// Creates a value-type declaration.
    #[must_use]
    pub fn value_type(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(namespace, name, DeclKind::ValueType)
    }

    /// Creates an enumeration declaration with its value names.
    #[must_use]
    pub fn enumeration(
        namespace: impl Into<String>,
        name: impl Into<String>,
        members: &[&str],
    ) -> Self {
        let mut decl = Self::new(namespace, name, DeclKind::Enum);
        decl.enum_members = members.iter().map(|m| (*m).to_string()).collect();
        decl
    }

    /// Marks the declaration abstract.
    #[must_use]
    pub fn abstract_type(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    /// Adds generic parameter symbols, making this a generic definition.
    #[must_use]
    pub fn with_generic_params(mut self, params: &[&str]) -> Self {
        self.generic_params = params.iter().map(|p| (*p).to_string()).collect();
        self
    }

    /// Sets the base type.
    #[must_use]
    pub fn with_base(mut self, base: TypeRef) -> Self {
        self.base = Some(base);
        self
    }

    /// Adds an implemented interface.
    #[must_use]
    pub fn with_interface(mut self, interface: TypeRef) -> Self {
        self.interfaces.push(interface);
        self
    }

    /// Adds a property.
    #[must_use]
    pub fn with_property(mut self, name: impl Into<String>, ty: TypeRef) -> Self {
        self.properties.push(MemberDecl::new(name, ty));
        self
    }

    /// Adds a field.
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, ty: TypeRef) -> Self {
        self.fields.push(MemberDecl::new(name, ty));
        self
    }

    /// Adds a method.
    #[must_use]
    pub fn with_method(mut self, method: MethodDecl) -> Self {
        self.methods.push(method);
        self
    }

    /// Returns true if this declaration is a generic definition.
    #[must_use]
    pub fn is_generic(&self) -> bool {
        !self.generic_params.is_empty()
    }

    /// Returns true if this declaration is an enumeration.
    #[must_use]
    pub const fn is_enum(&self) -> bool {
        matches!(self.kind, DeclKind::Enum)
    }

    /// Returns a reference value pointing at this declaration.
    #[must_use]
    pub fn type_ref(&self) -> TypeRef {
        TypeRef::Named(self.name.clone())
    }
}
