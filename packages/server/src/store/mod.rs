mod error;
mod record;
mod traits;

pub mod database;
pub mod memory;
pub mod unavailable;

pub use database::DatabaseGenerationStore;
pub use error::StoreError;
pub use memory::MemoryGenerationStore;
pub use record::{GenerationMetadata, GenerationRecord, NewGeneration, StoreProbe};
pub use traits::{GenerationStore, parse_id};
pub use unavailable::UnavailableGenerationStore;
