//! # TsForge
//!
//! TsForge translates a reflected host type graph (classes, interfaces,
//! enums, generics) into collision-free TypeScript declarations.
//!
//! ## Pipeline
//!
//! ```ignore
//! use tsforge::prelude::*;
//!
//! let entities = build_model(&catalog, &commands, &[], &config)?;
//! let files = build_separated_files(&entities, &catalog, &emit_config);
//! write_files(&files, out_dir)?;
//! ```
//!
//! ## Crate Organization
//!
//! - [`meta`] - type references, declarations, catalogs, doc loading
//! - [`codegen`] - name resolution, dependency closure, entity model,
//!   collision-free naming
//! - [`emit`] - TypeScript rendering, file layout, file writing

pub mod prelude;

/// Type metadata model.
pub mod meta {
    pub use tsforge_meta::*;
}

/// Generator model core.
pub mod codegen {
    pub use tsforge_codegen::*;
}

/// TypeScript rendering and layout.
pub mod emit {
    pub use tsforge_emit::*;
}

// Re-export commonly used items at the crate root
pub use tsforge_codegen::{
    CodegenError, EntityKind, GeneratorConfig, GeneratorEntity, GeneratorMember, build_model,
};
pub use tsforge_emit::{EmitConfig, EmitError, build_separated_files, render_one_file, write_files};
pub use tsforge_meta::{QualifiedName, TypeCatalog, TypeDecl, TypeRef};
