use serde::{Deserialize, Serialize};

/// One command the generated plugin registers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CommandSpec {
    /// Command keyword. Also used to derive the handler class name.
    #[schema(example = "hello")]
    pub name: String,
    /// Usage string shown by the server. Stored but not rendered.
    #[serde(default)]
    #[schema(example = "/hello")]
    pub usage: Option<String>,
    /// Short description; doubles as the handler's reply message.
    #[serde(default)]
    #[schema(example = "Say hello")]
    pub description: Option<String>,
}

impl CommandSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            usage: None,
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Trimmed command name, or `None` when the name is blank.
    pub fn trimmed_name(&self) -> Option<&str> {
        let name = self.name.trim();
        (!name.is_empty()).then_some(name)
    }
}

fn default_api() -> String {
    "spigot".into()
}

/// Description of the plugin project to scaffold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct GenerateRequest {
    /// Human friendly plugin name.
    #[schema(example = "My Plugin")]
    pub plugin_name: String,
    /// Java package, e.g. `com.example.myplugin`.
    #[schema(example = "com.example.myplugin")]
    pub package_name: String,
    #[serde(default)]
    #[schema(example = "A friendly plugin")]
    pub description: String,
    /// Target server API (spigot/paper/bukkit).
    #[serde(default = "default_api")]
    #[schema(example = "spigot")]
    pub api: String,
    #[serde(default)]
    pub commands: Vec<CommandSpec>,
}

impl GenerateRequest {
    pub fn new(plugin_name: impl Into<String>, package_name: impl Into<String>) -> Self {
        Self {
            plugin_name: plugin_name.into(),
            package_name: package_name.into(),
            description: String::new(),
            api: default_api(),
            commands: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_command(mut self, command: CommandSpec) -> Self {
        self.commands.push(command);
        self
    }
}
