//! # TsForge Meta
//!
//! Reflected type metadata model for TsForge.
//!
//! This crate provides:
//! - Type reference values describing how a type is used (`TypeRef`)
//! - Type declarations describing what a type is (`TypeDecl`)
//! - An insertion-ordered type catalog with qualified-name lookup
//! - XML documentation loading and attachment
//!
//! Declarations reference each other by qualified name, resolved through
//! the catalog. Self-referential and mutually referential type graphs are
//! therefore plain data with no ownership cycles.

pub mod catalog;
pub mod docs;
pub mod error;
pub mod types;

pub use catalog::TypeCatalog;
pub use docs::{DocIndex, load_xml_docs};
pub use error::MetaError;
pub use types::{
    DeclKind, MemberDecl, MethodDecl, PrimitiveKind, QualifiedName, TypeDecl, TypeRef,
};
