use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerateError {
    /// The package name is empty or has no `.` separator.
    #[error("package_name must be a valid Java package like com.example.plugin, got '{0}'")]
    InvalidPackageName(String),

    #[error("Template error: {0}")]
    Template(String),

    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
