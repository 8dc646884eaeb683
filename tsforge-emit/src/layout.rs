//! File layout.
//!
//! Two layouts are supported: a single aggregate file, and one file per
//! entity grouped into namespace directories with per-directory `api.ts`
//! barrel files and a root `index.ts`. Both are deterministic in entity
//! order.

use crate::config::EmitConfig;
use crate::declarations::TypeScriptRenderer;
use crate::header::generation_warning;
use crate::imports::{ImportLine, module_path, namespace_dir, render_imports};
use indexmap::IndexMap;
use std::collections::HashMap;
use tsforge_codegen::{DependencyResolver, EntityKind, GeneratorEntity, TraversalPolicy};
use tsforge_meta::{QualifiedName, TypeCatalog, TypeRef};

/// One generated file, with a path relative to the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildFile {
    /// Relative path, `/`-separated.
    pub path: String,
    /// File content.
    pub content: String,
}

/// Edges that show up in rendered declarations and therefore need
/// imports: base type, interfaces and member types.
const IMPORT_POLICY: TraversalPolicy = TraversalPolicy {
    interfaces: true,
    base: true,
    fields: false,
    properties: true,
    methods: false,
};

/// Renders the whole catalog into one aggregate file: the contract
/// interface first, then classes, enums and used types.
#[must_use]
pub fn render_one_file(entities: &[GeneratorEntity], config: &EmitConfig) -> String {
    let renderer = TypeScriptRenderer::new(config);
    let mut output = String::new();
    if config.include_header {
        output.push_str(&generation_warning());
    }
    output.push_str(&renderer.render_contract_interface());

    let phases: [&[EntityKind]; 3] = [
        &[EntityKind::Class, EntityKind::Interface],
        &[EntityKind::Enum],
        &[EntityKind::UsedReturnType],
    ];
    for kinds in phases {
        for entity in entities.iter().filter(|e| kinds.contains(&e.kind)) {
            output.push('\n');
            output.push_str(&renderer.render_entity(entity));
        }
    }
    output
}

/// Lays the catalog out as one file per entity plus barrel files.
///
/// Every entity lands in its namespace directory; each directory gets an
/// `api.ts` re-exporting its files, and the root `index.ts` re-exports
/// every `api.ts`. Import lines cover the entity's single-level
/// dependencies that are themselves part of the catalog, under their
/// collision-resolved names.
#[must_use]
pub fn build_separated_files(
    entities: &[GeneratorEntity],
    catalog: &TypeCatalog,
    config: &EmitConfig,
) -> Vec<BuildFile> {
    let renderer = TypeScriptRenderer::new(config);
    let resolver = DependencyResolver::new(catalog).with_policy(IMPORT_POLICY);
    let header = if config.include_header {
        generation_warning()
    } else {
        String::new()
    };
    let display_names: HashMap<&QualifiedName, &str> = entities
        .iter()
        .map(|entity| (&entity.identity, entity.name.as_str()))
        .collect();

    let mut files = Vec::new();
    files.push(BuildFile {
        path: format!("{}.ts", config.contract_name),
        content: format!("{header}{}", renderer.render_contract_interface()),
    });

    for entity in entities {
        let mut lines: Vec<ImportLine> = resolver
            .dependencies(&TypeRef::Named(entity.identity.clone()), false)
            .iter()
            .filter_map(|node| {
                let identity = node.ty.identity()?;
                let name = display_names.get(identity)?;
                Some(ImportLine {
                    name: (*name).to_string(),
                    path: module_path(&entity.namespace, &identity.namespace, name),
                })
            })
            .collect();
        if entity.kind == EntityKind::Class {
            lines.push(ImportLine {
                name: config.contract_name.clone(),
                path: module_path(&entity.namespace, "", &config.contract_name),
            });
        }

        let directory = namespace_dir(&entity.namespace);
        let path = if directory.is_empty() {
            format!("{}.ts", entity.name)
        } else {
            format!("{directory}/{}.ts", entity.name)
        };
        files.push(BuildFile {
            path,
            content: format!(
                "{header}{}{}",
                render_imports(&lines),
                renderer.render_entity(entity)
            ),
        });
    }

    // Barrels: one api.ts per directory, then the root index.ts.
    let mut groups: IndexMap<String, Vec<String>> = IndexMap::new();
    for file in &files {
        let (directory, stem) = match file.path.rsplit_once('/') {
            Some((directory, name)) => (directory.to_string(), name),
            None => (String::new(), file.path.as_str()),
        };
        let stem = stem.trim_end_matches(".ts").to_string();
        groups.entry(directory).or_default().push(stem);
    }

    for (directory, stems) in &groups {
        let content: String = stems
            .iter()
            .map(|stem| format!("export * from \"./{stem}\";\n"))
            .collect();
        let path = if directory.is_empty() {
            "api.ts".to_string()
        } else {
            format!("{directory}/api.ts")
        };
        files.push(BuildFile { path, content });
    }

    let index_content: String = groups
        .keys()
        .map(|directory| {
            if directory.is_empty() {
                "export * from \"./api\";\n".to_string()
            } else {
                format!("export * from \"./{directory}/api\";\n")
            }
        })
        .collect();
    files.push(BuildFile {
        path: "index.ts".to_string(),
        content: index_content,
    });

    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use tsforge_codegen::{GeneratorConfig, build_model};
    use tsforge_meta::TypeDecl;

    /// Catalog with a command, its response type in another namespace,
    /// and an enum the response uses.
    fn fixture() -> (TypeCatalog, Vec<GeneratorEntity>) {
        let mut catalog = TypeCatalog::new();
        catalog.add_type(TypeDecl::interface("Api", "IRequestCommand"));
        catalog.add_type(TypeDecl::interface("Api", "ICommand").with_generic_params(&["TResponse"]));
        catalog.add_type(TypeDecl::enumeration("Api.Data", "Role", &["Admin", "Member"]));
        catalog.add_type(
            TypeDecl::class("Api.Data", "UserData")
                .with_property("Role", TypeRef::named("Api.Data", "Role")),
        );
        catalog.add_type(
            TypeDecl::class("Api.Commands", "CreateUser")
                .with_interface(TypeRef::named("Api", "IRequestCommand"))
                .with_interface(TypeRef::instance(
                    QualifiedName::new("Api", "ICommand"),
                    vec![TypeRef::named("Api.Data", "UserData")],
                ))
                .with_property("UserName", TypeRef::text()),
        );

        let generator_config = GeneratorConfig {
            command_marker: Some(QualifiedName::new("Api", "IRequestCommand")),
            command_contract: Some(QualifiedName::new("Api", "ICommand")),
            ..GeneratorConfig::default()
        };
        let entities = build_model(
            &catalog,
            &[TypeRef::named("Api.Commands", "CreateUser")],
            &[],
            &generator_config,
        )
        .expect("Failed to build model");
        (catalog, entities)
    }

    fn no_header_config() -> EmitConfig {
        EmitConfig {
            include_header: false,
            ..EmitConfig::default()
        }
    }

    #[test]
    fn one_file_renders_every_entity_once() {
        let (_, entities) = fixture();
        let config = no_header_config();
        let output = render_one_file(&entities, &config);

        assert_eq!(output.matches("export class CreateUser").count(), 1);
        assert_eq!(output.matches("export interface UserData").count(), 1);
        assert_eq!(output.matches("export enum Role").count(), 1);
        // Commands come before used types.
        let class_at = output.find("export class CreateUser").unwrap();
        let data_at = output.find("export interface UserData").unwrap();
        assert!(class_at < data_at);
    }

    #[test]
    fn separated_layout_produces_entity_barrel_and_index_files() {
        let (catalog, entities) = fixture();
        let config = no_header_config();
        let files = build_separated_files(&entities, &catalog, &config);

        let paths: Vec<&str> = files.iter().map(|f| f.path.as_str()).collect();
        // 3 entities + contract + 3 api.ts (root, Api/Commands, Api/Data)
        // + index.ts
        assert_eq!(files.len(), 8, "paths were {paths:?}");
        assert!(paths.contains(&"ICommand.ts"));
        assert!(paths.contains(&"Api/Commands/CreateUser.ts"));
        assert!(paths.contains(&"Api/Data/UserData.ts"));
        assert!(paths.contains(&"Api/Data/Role.ts"));
        assert!(paths.contains(&"Api/Data/api.ts"));
        assert!(paths.contains(&"index.ts"));
    }

    #[test]
    fn command_files_import_dependencies_and_contract() {
        let (catalog, entities) = fixture();
        let config = no_header_config();
        let files = build_separated_files(&entities, &catalog, &config);

        let command = files
            .iter()
            .find(|f| f.path == "Api/Commands/CreateUser.ts")
            .expect("command file missing");
        assert!(command
            .content
            .contains("import { UserData } from \"../../Api/Data/UserData\";"));
        assert!(command
            .content
            .contains("import { ICommand } from \"../../ICommand\";"));
    }

    #[test]
    fn barrels_reexport_their_directory() {
        let (catalog, entities) = fixture();
        let config = no_header_config();
        let files = build_separated_files(&entities, &catalog, &config);

        let api = files
            .iter()
            .find(|f| f.path == "Api/Data/api.ts")
            .expect("api barrel missing");
        assert!(api.content.contains("export * from \"./UserData\";"));
        assert!(api.content.contains("export * from \"./Role\";"));

        let index = files.iter().find(|f| f.path == "index.ts").unwrap();
        assert!(index.content.contains("export * from \"./api\";"));
        assert!(index.content.contains("export * from \"./Api/Commands/api\";"));
        assert!(index.content.contains("export * from \"./Api/Data/api\";"));
    }

    #[test]
    fn layout_is_deterministic() {
        let (catalog, entities) = fixture();
        let config = no_header_config();
        let first = build_separated_files(&entities, &catalog, &config);
        let second = build_separated_files(&entities, &catalog, &config);
        assert_eq!(first, second);
    }
}
