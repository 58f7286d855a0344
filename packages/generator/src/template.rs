//! Template engine for plugin source files using Handlebars.
//!
//! Each generated file kind has its own template and a plain context record.
//! Rendering is deterministic and has no side effects.

use handlebars::{Handlebars, handlebars_helper};
use serde::Serialize;

use crate::error::GenerateError;
use crate::layout::normalize_commands;
use crate::naming::{escape_java_string, escape_xml, handler_class_name, slugify};
use crate::types::CommandSpec;

pub const PLUGIN_VERSION: &str = "1.0.0";
pub const API_VERSION: &str = "1.20";
pub const PERMISSION_PREFIX: &str = "replix.";
pub const PERMISSION_MESSAGE: &str = "You don't have permission to use this command.";

/// Static contents of the generated `.gitignore`.
pub const IGNORE_RULES: &str = include_str!("../templates/gitignore");

const MANIFEST: &str = "manifest";
const MAIN_ENTRY: &str = "main_entry";
const COMMAND_HANDLER: &str = "command_handler";
const BUILD_DESCRIPTOR: &str = "build_descriptor";

handlebars_helper!(java_string: |s: str| escape_java_string(s));
handlebars_helper!(xml: |s: str| escape_xml(s));

#[derive(Debug, Serialize)]
struct ManifestCommand {
    name: String,
    has_description: bool,
    description: String,
    permission: String,
    permission_message: &'static str,
}

#[derive(Debug, Serialize)]
struct ManifestContext<'a> {
    name: &'a str,
    version: &'static str,
    api_version: &'static str,
    main_class: &'a str,
    description: &'a str,
    has_commands: bool,
    commands: Vec<ManifestCommand>,
}

#[derive(Debug, Serialize)]
struct MainCommand {
    name: String,
    class_name: String,
}

#[derive(Debug, Serialize)]
struct MainContext<'a> {
    package_name: &'a str,
    class_name: &'a str,
    enable_message: &'a str,
    /// Distinct handler classes, in first-use order.
    imports: Vec<String>,
    commands: Vec<MainCommand>,
}

#[derive(Debug, Serialize)]
struct CommandContext<'a> {
    package_name: &'a str,
    class_name: String,
    message: String,
}

#[derive(Debug, Serialize)]
struct BuildContext<'a> {
    group_id: &'a str,
    artifact_id: String,
    version: &'static str,
    name: &'a str,
    description: &'a str,
}

/// Renders the per-kind templates of a plugin project.
#[derive(Debug)]
pub struct TemplateEngine {
    handlebars: Handlebars<'static>,
}

impl TemplateEngine {
    /// Creates an engine with all built-in templates registered.
    ///
    /// # Errors
    ///
    /// Returns error if a built-in template fails to parse.
    pub fn new() -> Result<Self, GenerateError> {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(true);
        // Output is source code, not HTML.
        handlebars.register_escape_fn(handlebars::no_escape);
        handlebars.register_helper("java_string", Box::new(java_string));
        handlebars.register_helper("xml", Box::new(xml));

        let templates = [
            (MANIFEST, include_str!("../templates/plugin.yml.hbs")),
            (MAIN_ENTRY, include_str!("../templates/Main.java.hbs")),
            (COMMAND_HANDLER, include_str!("../templates/Command.java.hbs")),
            (BUILD_DESCRIPTOR, include_str!("../templates/pom.xml.hbs")),
        ];
        for (name, source) in templates {
            handlebars
                .register_template_string(name, source)
                .map_err(|e| {
                    GenerateError::Template(format!("Failed to register {name} template: {e}"))
                })?;
        }

        Ok(Self { handlebars })
    }

    fn render<T: Serialize>(&self, name: &str, context: &T) -> Result<String, GenerateError> {
        self.handlebars
            .render(name, context)
            .map_err(|e| GenerateError::Template(format!("Failed to render {name}: {e}")))
    }

    /// Renders `plugin.yml`.
    ///
    /// The command section header is emitted whenever `commands` is non-empty,
    /// even if every name is blank. Blank names are left out and repeated names
    /// appear once (see [`normalize_commands`]).
    pub fn render_manifest(
        &self,
        plugin_name: &str,
        main_class: &str,
        description: &str,
        commands: &[CommandSpec],
    ) -> Result<String, GenerateError> {
        let context = ManifestContext {
            name: plugin_name,
            version: PLUGIN_VERSION,
            api_version: API_VERSION,
            main_class,
            description: if description.is_empty() {
                plugin_name
            } else {
                description
            },
            has_commands: !commands.is_empty(),
            commands: normalize_commands(commands)
                .into_iter()
                .map(|cmd| {
                    let description = cmd.description.unwrap_or_default();
                    ManifestCommand {
                        permission: format!("{PERMISSION_PREFIX}{}", cmd.name),
                        name: cmd.name,
                        has_description: !description.is_empty(),
                        description,
                        permission_message: PERMISSION_MESSAGE,
                    }
                })
                .collect(),
        };
        self.render(MANIFEST, &context)
    }

    /// Renders the plugin entry class with its enable/disable hooks.
    pub fn render_main_entry(
        &self,
        package_name: &str,
        class_name: &str,
        description: &str,
        commands: &[CommandSpec],
    ) -> Result<String, GenerateError> {
        let commands: Vec<MainCommand> = normalize_commands(commands)
            .into_iter()
            .map(|cmd| MainCommand {
                class_name: handler_class_name(&cmd.name),
                name: cmd.name,
            })
            .collect();

        let mut imports: Vec<String> = Vec::with_capacity(commands.len());
        for cmd in &commands {
            if !imports.contains(&cmd.class_name) {
                imports.push(cmd.class_name.clone());
            }
        }

        let context = MainContext {
            package_name,
            class_name,
            enable_message: if description.is_empty() {
                class_name
            } else {
                description
            },
            imports,
            commands,
        };
        self.render(MAIN_ENTRY, &context)
    }

    /// Renders the executor class for one command.
    pub fn render_command_handler(
        &self,
        package_name: &str,
        command: &CommandSpec,
    ) -> Result<String, GenerateError> {
        let name = command.name.trim();
        let message = match command.description.as_deref() {
            Some(description) if !description.is_empty() => description.to_string(),
            _ => format!("/{name} executed!"),
        };
        let context = CommandContext {
            package_name,
            class_name: handler_class_name(name),
            message,
        };
        self.render(COMMAND_HANDLER, &context)
    }

    /// Renders the Maven `pom.xml`.
    pub fn render_build_descriptor(
        &self,
        package_name: &str,
        plugin_name: &str,
        description: &str,
    ) -> Result<String, GenerateError> {
        let context = BuildContext {
            group_id: package_name,
            artifact_id: slugify(plugin_name),
            version: PLUGIN_VERSION,
            name: plugin_name,
            description,
        };
        self.render(BUILD_DESCRIPTOR, &context)
    }
}
