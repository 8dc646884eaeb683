//! # TsForge Emit
//!
//! TypeScript rendering and file layout for TsForge.
//!
//! This crate provides:
//! - Declaration rendering for the frozen entity catalog
//! - One-file and one-file-per-type layouts with barrel files
//! - Import path computation across namespace directories
//! - Generated-file writing with a generation warning header

pub mod config;
pub mod declarations;
pub mod error;
pub mod files;
pub mod header;
pub mod imports;
pub mod layout;

pub use config::EmitConfig;
pub use declarations::TypeScriptRenderer;
pub use error::EmitError;
pub use files::write_files;
pub use header::generation_warning;
pub use imports::{ImportLine, module_path, namespace_dir, relative_prefix, render_imports};
pub use layout::{BuildFile, build_separated_files, render_one_file};
