//! File layout of a generated plugin project.
//!
//! [`ProjectLayout`] is computed once per request and is the single source for
//! both the archive contents and the file list recorded alongside it.

use tracing::warn;

use crate::error::GenerateError;
use crate::naming::{handler_class_name, package_path};
use crate::types::{CommandSpec, GenerateRequest};

pub const MANIFEST_PATH: &str = "plugin.yml";
pub const BUILD_DESCRIPTOR_PATH: &str = "pom.xml";
pub const IGNORE_RULES_PATH: &str = ".gitignore";
pub const SOURCE_ROOT: &str = "src/main/java";
pub const MAIN_CLASS_NAME: &str = "Main";

/// What a planned file is rendered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Manifest,
    MainEntry,
    /// Index into [`ProjectLayout::commands`].
    CommandHandler(usize),
    BuildDescriptor,
    IgnoreRules,
}

impl FileKind {
    /// Whether the file is derived from the request (as opposed to fixed boilerplate).
    pub fn is_generated(&self) -> bool {
        matches!(
            self,
            FileKind::Manifest | FileKind::MainEntry | FileKind::CommandHandler(_)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
    pub path: String,
    pub kind: FileKind,
}

#[derive(Debug, Clone)]
pub struct ProjectLayout {
    package_name: String,
    commands: Vec<CommandSpec>,
    files: Vec<PlannedFile>,
}

/// Validate a dotted Java package name, returning it trimmed.
pub fn validate_package_name(raw: &str) -> Result<&str, GenerateError> {
    let package = raw.trim();
    if package.is_empty() || !package.contains('.') {
        return Err(GenerateError::InvalidPackageName(raw.to_string()));
    }
    Ok(package)
}

/// Trim command names, drop blank ones and merge entries with identical names.
///
/// A repeated name replaces the earlier entry in place: the later data wins,
/// the earlier position is kept. Names differing only in case stay distinct.
pub fn normalize_commands(commands: &[CommandSpec]) -> Vec<CommandSpec> {
    let mut normalized: Vec<CommandSpec> = Vec::with_capacity(commands.len());

    for cmd in commands {
        let Some(name) = cmd.trimmed_name() else {
            continue;
        };
        let trimmed = CommandSpec {
            name: name.to_string(),
            usage: cmd.usage.clone(),
            description: cmd.description.clone(),
        };

        match normalized.iter_mut().find(|existing| existing.name == name) {
            Some(existing) => *existing = trimmed,
            None => normalized.push(trimmed),
        }
    }

    normalized
}

impl ProjectLayout {
    /// Validate the request and compute the ordered list of archive entries.
    pub fn plan(request: &GenerateRequest) -> Result<Self, GenerateError> {
        let package_name = validate_package_name(&request.package_name)?.to_string();
        let commands = normalize_commands(&request.commands);
        let declared = request
            .commands
            .iter()
            .filter(|cmd| cmd.trimmed_name().is_some())
            .count();
        if declared > commands.len() {
            warn!(
                merged = declared - commands.len(),
                "Duplicate command names, keeping the later definitions"
            );
        }

        // One handler per class path; a later command with the same class wins.
        let mut handlers: Vec<(String, usize)> = Vec::with_capacity(commands.len());
        for (index, cmd) in commands.iter().enumerate() {
            let class_name = handler_class_name(&cmd.name);
            match handlers.iter_mut().find(|(existing, _)| *existing == class_name) {
                Some(slot) => {
                    warn!(
                        command = %cmd.name,
                        previous = %commands[slot.1].name,
                        handler = %class_name,
                        "Commands share a handler class, keeping the later definition"
                    );
                    slot.1 = index;
                }
                None => handlers.push((class_name, index)),
            }
        }

        let source_dir = format!("{SOURCE_ROOT}/{}", package_path(&package_name));

        let mut files = Vec::with_capacity(handlers.len() + 4);
        files.push(PlannedFile {
            path: MANIFEST_PATH.to_string(),
            kind: FileKind::Manifest,
        });
        files.push(PlannedFile {
            path: format!("{source_dir}/{MAIN_CLASS_NAME}.java"),
            kind: FileKind::MainEntry,
        });
        for (class_name, index) in handlers {
            files.push(PlannedFile {
                path: format!("{source_dir}/commands/{class_name}.java"),
                kind: FileKind::CommandHandler(index),
            });
        }
        files.push(PlannedFile {
            path: BUILD_DESCRIPTOR_PATH.to_string(),
            kind: FileKind::BuildDescriptor,
        });
        files.push(PlannedFile {
            path: IGNORE_RULES_PATH.to_string(),
            kind: FileKind::IgnoreRules,
        });

        Ok(Self {
            package_name,
            commands,
            files,
        })
    }

    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    /// Fully qualified name of the plugin entry class.
    pub fn main_class(&self) -> String {
        format!("{}.{MAIN_CLASS_NAME}", self.package_name)
    }

    /// Normalized commands (see [`normalize_commands`]).
    pub fn commands(&self) -> &[CommandSpec] {
        &self.commands
    }

    pub fn files(&self) -> &[PlannedFile] {
        &self.files
    }

    /// Paths of the request-derived files: manifest, main entry, then handlers.
    pub fn generated_paths(&self) -> Vec<String> {
        self.files
            .iter()
            .filter(|f| f.kind.is_generated())
            .map(|f| f.path.clone())
            .collect()
    }
}
