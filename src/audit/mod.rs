pub mod logger;

pub use logger::{GenerationKind, GenerationLog};
