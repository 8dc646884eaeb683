//! TypeScript declaration rendering.
//!
//! Turns frozen generator entities into literal TypeScript text. The
//! renderer never mutates the model; collision resolution has already
//! made every display name unique.

use crate::config::EmitConfig;
use tsforge_codegen::{EntityKind, GeneratorEntity, GeneratorMember};

/// Renders entities into TypeScript declarations.
pub struct TypeScriptRenderer<'a> {
    config: &'a EmitConfig,
}

impl<'a> TypeScriptRenderer<'a> {
    /// Creates a renderer with the given configuration.
    #[must_use]
    pub fn new(config: &'a EmitConfig) -> Self {
        Self { config }
    }

    /// Renders one entity declaration.
    #[must_use]
    pub fn render_entity(&self, entity: &GeneratorEntity) -> String {
        match entity.kind {
            EntityKind::Enum => self.render_enum(entity),
            EntityKind::Class => self.render_class(entity),
            EntityKind::Interface | EntityKind::UsedReturnType => self.render_interface(entity),
        }
    }

    /// Renders the command contract interface declaration.
    #[must_use]
    pub fn render_contract_interface(&self) -> String {
        format!(
            "export interface {}<TResponse> {{\n}}\n",
            self.config.contract_name
        )
    }

    fn render_enum(&self, entity: &GeneratorEntity) -> String {
        let mut output = render_docs(&entity.documentation, "");
        output.push_str(&format!("export enum {} {{\n", entity.name));
        for member in &entity.enum_members {
            output.push_str(&format!("    {member},\n"));
        }
        output.push_str("}\n");
        output
    }

    fn render_class(&self, entity: &GeneratorEntity) -> String {
        let mut output = render_docs(&entity.documentation, "");
        output.push_str(&format!("export class {}", signature(entity)));
        if !entity.base_type_name.is_empty() {
            output.push_str(&format!(" extends {}", entity.base_type_name));
        }
        if !entity.implemented_interfaces.is_empty() {
            output.push_str(&format!(
                " implements {}",
                entity.implemented_interfaces.join(", ")
            ));
        }
        output.push_str(" {\n");
        if !entity.json_type_name.is_empty() {
            output.push_str(&format!(
                "    readonly $type: string = \"{}\";\n",
                entity.json_type_name
            ));
        }
        for member in &entity.members {
            output.push_str(&member_line(member));
        }
        output.push_str("}\n");
        output
    }

    fn render_interface(&self, entity: &GeneratorEntity) -> String {
        let mut output = render_docs(&entity.documentation, "");
        output.push_str(&format!("export interface {}", signature(entity)));

        let mut parents: Vec<&str> = Vec::new();
        if !entity.base_type_name.is_empty() {
            parents.push(&entity.base_type_name);
        }
        parents.extend(entity.implemented_interfaces.iter().map(String::as_str));
        if !parents.is_empty() {
            output.push_str(&format!(" extends {}", parents.join(", ")));
        }

        output.push_str(" {\n");
        for member in &entity.members {
            output.push_str(&member_line(member));
        }
        output.push_str("}\n");
        output
    }
}

/// Entity name with its generic parameter list, if any.
fn signature(entity: &GeneratorEntity) -> String {
    if entity.generic_params.is_empty() {
        entity.name.clone()
    } else {
        format!("{}<{}>", entity.name, entity.generic_params.join(", "))
    }
}

fn member_line(member: &GeneratorMember) -> String {
    let type_name = if member.is_declared_as_generic {
        &member.generic_name
    } else {
        &member.type_name
    };
    let marker = if member.is_optional { "?" } else { "" };
    let mut line = render_docs(&member.docs, "    ");
    line.push_str(&format!("    {}{}: {};\n", member.name, marker, type_name));
    line
}

fn render_docs(lines: &[String], indent: &str) -> String {
    match lines {
        [] => String::new(),
        [single] => format!("{indent}/** {single} */\n"),
        many => {
            let mut output = format!("{indent}/**\n");
            for line in many {
                output.push_str(&format!("{indent} * {line}\n"));
            }
            output.push_str(&format!("{indent} */\n"));
            output
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tsforge_codegen::GeneratorEntity;
    use tsforge_meta::QualifiedName;

    fn renderer_fixture() -> EmitConfig {
        EmitConfig::default()
    }

    fn command_entity() -> GeneratorEntity {
        let mut entity = GeneratorEntity::new(
            EntityKind::Class,
            QualifiedName::new("Api.Commands", "CreateUser"),
        );
        entity.implemented_interfaces.push("ICommand<UserData>".to_string());
        entity.json_type_name = "Api.Commands.CreateUser".to_string();
        entity.members.push(GeneratorMember::new("UserName", "string"));
        let mut age = GeneratorMember::new("Age", "number");
        age.is_optional = true;
        entity.members.push(age);
        entity
    }

    #[test]
    fn class_renders_discriminator_and_optional_members() {
        let config = renderer_fixture();
        let renderer = TypeScriptRenderer::new(&config);

        let rendered = renderer.render_entity(&command_entity());
        assert_eq!(
            rendered,
            "export class CreateUser implements ICommand<UserData> {\n\
             \x20   readonly $type: string = \"Api.Commands.CreateUser\";\n\
             \x20   UserName: string;\n\
             \x20   Age?: number;\n\
             }\n"
        );
    }

    #[test]
    fn interface_combines_base_and_interfaces_into_extends() {
        let config = renderer_fixture();
        let renderer = TypeScriptRenderer::new(&config);

        let mut entity = GeneratorEntity::new(
            EntityKind::UsedReturnType,
            QualifiedName::new("Api.Data", "UserData"),
        );
        entity.base_type_name = "EntityBase".to_string();
        entity.implemented_interfaces.push("IEntity".to_string());
        entity.members.push(GeneratorMember::new("Name", "string"));

        let rendered = renderer.render_entity(&entity);
        assert_eq!(
            rendered,
            "export interface UserData extends EntityBase, IEntity {\n\
             \x20   Name: string;\n\
             }\n"
        );
    }

    #[test]
    fn generic_entity_renders_parameter_list() {
        let config = renderer_fixture();
        let renderer = TypeScriptRenderer::new(&config);

        let mut entity = GeneratorEntity::new(
            EntityKind::UsedReturnType,
            QualifiedName::new("Api", "Page"),
        );
        entity.generic_params.push("T".to_string());
        let mut items = GeneratorMember::new("Items", "T[]");
        items.is_declared_as_generic = true;
        items.generic_name = "T[]".to_string();
        entity.members.push(items);

        let rendered = renderer.render_entity(&entity);
        assert_eq!(
            rendered,
            "export interface Page<T> {\n\
             \x20   Items: T[];\n\
             }\n"
        );
    }

    #[test]
    fn enum_renders_member_list() {
        let config = renderer_fixture();
        let renderer = TypeScriptRenderer::new(&config);

        let mut entity =
            GeneratorEntity::new(EntityKind::Enum, QualifiedName::new("Api.Data", "Role"));
        entity.enum_members = vec!["Admin".to_string(), "Member".to_string()];

        let rendered = renderer.render_entity(&entity);
        assert_eq!(
            rendered,
            "export enum Role {\n\
             \x20   Admin,\n\
             \x20   Member,\n\
             }\n"
        );
    }

    #[test]
    fn documentation_renders_as_jsdoc() {
        let config = renderer_fixture();
        let renderer = TypeScriptRenderer::new(&config);

        let mut entity = command_entity();
        entity.documentation = vec!["Creates a user.".to_string()];
        let rendered = renderer.render_entity(&entity);
        assert!(rendered.starts_with("/** Creates a user. */\n"));

        entity.documentation = vec!["First.".to_string(), "Second.".to_string()];
        let rendered = renderer.render_entity(&entity);
        assert!(rendered.starts_with("/**\n * First.\n * Second.\n */\n"));
    }

    #[test]
    fn contract_interface_is_a_generic_marker() {
        let config = renderer_fixture();
        let renderer = TypeScriptRenderer::new(&config);
        assert_eq!(
            renderer.render_contract_interface(),
            "export interface ICommand<TResponse> {\n}\n"
        );
    }
}
