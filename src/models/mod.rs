use serde::{Serialize, de::DeserializeOwned};

pub mod employee;
pub mod shift;
pub mod stats;
pub mod update;

// Re-export all models for easy importing
pub use employee::*;
pub use shift::*;
pub use stats::*;
pub use update::*;

/// A persisted row that can be edited field by field.
pub trait Record: Clone + Serialize {
    /// Partial form of the record sent to the backend.
    type Patch: Serialize + DeserializeOwned;

    fn id(&self) -> &str;
}
