pub mod key_store;
pub mod settings;

pub use key_store::{FileKeyStore, KeyStore, KeyStoreError, MemoryKeyStore};
pub use settings::{Config, ConfigError, LLMConfig, UIConfig};
