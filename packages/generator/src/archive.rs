use std::io::{Cursor, Write};

use tracing::debug;
use zip::CompressionMethod;
use zip::write::{SimpleFileOptions, ZipWriter};

use crate::error::GenerateError;
use crate::layout::{FileKind, MAIN_CLASS_NAME, ProjectLayout};
use crate::template::{IGNORE_RULES, TemplateEngine};
use crate::types::GenerateRequest;

/// A packaged plugin project.
#[derive(Debug, Clone)]
pub struct GeneratedArchive {
    /// Complete ZIP payload.
    pub bytes: Vec<u8>,
    /// Request-derived entries in write order (manifest, main entry, handlers).
    pub files: Vec<String>,
}

impl GeneratedArchive {
    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

/// Packages rendered plugin sources into a deflate-compressed ZIP archive.
#[derive(Debug)]
pub struct ArchiveBuilder {
    engine: TemplateEngine,
}

impl ArchiveBuilder {
    pub fn new() -> Result<Self, GenerateError> {
        Ok(Self {
            engine: TemplateEngine::new()?,
        })
    }

    pub fn engine(&self) -> &TemplateEngine {
        &self.engine
    }

    /// Build the archive for a request.
    ///
    /// Fails with [`GenerateError::InvalidPackageName`] before any rendering
    /// when the package name is empty or has no separator.
    pub fn build(&self, request: &GenerateRequest) -> Result<GeneratedArchive, GenerateError> {
        let layout = ProjectLayout::plan(request)?;

        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        // Fixed timestamp keeps the payload reproducible.
        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .last_modified_time(zip::DateTime::default());

        for file in layout.files() {
            let contents = self.render_file(file.kind, &layout, request)?;
            zip.start_file(file.path.as_str(), options)?;
            zip.write_all(contents.as_bytes())?;
        }

        let bytes = zip.finish()?.into_inner();
        debug!(
            package = layout.package_name(),
            entries = layout.files().len(),
            size = bytes.len(),
            "Built plugin archive"
        );

        Ok(GeneratedArchive {
            bytes,
            files: layout.generated_paths(),
        })
    }

    fn render_file(
        &self,
        kind: FileKind,
        layout: &ProjectLayout,
        request: &GenerateRequest,
    ) -> Result<String, GenerateError> {
        let package = layout.package_name();
        match kind {
            FileKind::Manifest => self.engine.render_manifest(
                &request.plugin_name,
                &layout.main_class(),
                &request.description,
                &request.commands,
            ),
            FileKind::MainEntry => self.engine.render_main_entry(
                package,
                MAIN_CLASS_NAME,
                &request.description,
                &request.commands,
            ),
            FileKind::CommandHandler(index) => self
                .engine
                .render_command_handler(package, &layout.commands()[index]),
            FileKind::BuildDescriptor => self.engine.render_build_descriptor(
                package,
                &request.plugin_name,
                &request.description,
            ),
            FileKind::IgnoreRules => Ok(IGNORE_RULES.to_string()),
        }
    }
}
