//! Prelude module for convenient imports.
//!
//! ```ignore
//! use tsforge::prelude::*;
//! ```

// Metadata types
pub use tsforge_meta::{
    DeclKind, DocIndex, MemberDecl, MetaError, MethodDecl, PrimitiveKind, QualifiedName,
    TypeCatalog, TypeDecl, TypeRef, load_xml_docs,
};

// Codegen types
pub use tsforge_codegen::{
    CodegenError, CollisionResolver, DependencyNode, DependencyResolver, EntityKind,
    GeneratorConfig, GeneratorEntity, GeneratorMember, ModelBuilder, TraversalPolicy,
    TypeKind, TypeNameResolver, build_model,
};

// Emit types
pub use tsforge_emit::{
    BuildFile, EmitConfig, EmitError, TypeScriptRenderer, build_separated_files,
    render_one_file, write_files,
};
