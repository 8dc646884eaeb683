//! Example end-to-end generation run.
//!
//! Run with: `cargo run --example generate`

use tsforge::prelude::*;

/// Builds the catalog of a small command API: one command, its response
/// data in another namespace, and an enum the response uses.
fn sample_catalog() -> TypeCatalog {
    let mut catalog = TypeCatalog::new();
    catalog.add_type(TypeDecl::interface("Api", "IRequestCommand"));
    catalog.add_type(TypeDecl::interface("Api", "ICommand").with_generic_params(&["TResponse"]));
    catalog.add_type(TypeDecl::enumeration("Api.Data", "Role", &["Admin", "Member", "Guest"]));
    catalog.add_type(
        TypeDecl::class("Api.Data", "UserData")
            .with_property("Name", TypeRef::text())
            .with_property("Role", TypeRef::named("Api.Data", "Role"))
            .with_property("LastSeen", TypeRef::optional(TypeRef::timestamp())),
    );
    catalog.add_type(
        TypeDecl::class("Api.Commands", "CreateUser")
            .with_interface(TypeRef::named("Api", "IRequestCommand"))
            .with_interface(TypeRef::instance(
                QualifiedName::new("Api", "ICommand"),
                vec![TypeRef::named("Api.Data", "UserData")],
            ))
            .with_property("UserName", TypeRef::text())
            .with_property("Roles", TypeRef::sequence(TypeRef::named("Api.Data", "Role"))),
    );
    catalog
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let catalog = sample_catalog();
    let config = GeneratorConfig {
        command_marker: Some(QualifiedName::new("Api", "IRequestCommand")),
        command_contract: Some(QualifiedName::new("Api", "ICommand")),
        ..GeneratorConfig::default()
    };

    let commands: Vec<TypeRef> = catalog
        .types_in_namespace("Api.Commands")
        .map(TypeDecl::type_ref)
        .collect();
    let entities = build_model(&catalog, &commands, &[], &config)?;
    println!("Built {} entities:", entities.len());
    for entity in &entities {
        println!("  {:?} {} ({})", entity.kind, entity.name, entity.identity);
    }

    let emit_config = EmitConfig::default();
    let files = build_separated_files(&entities, &catalog, &emit_config);
    let out_dir = std::env::temp_dir().join("tsforge-example");
    write_files(&files, &out_dir)?;
    println!("Wrote {} files to {}", files.len(), out_dir.display());

    Ok(())
}
