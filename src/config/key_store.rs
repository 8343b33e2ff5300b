use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum KeyStoreError {
    #[error("Failed to access credential file: {0}")]
    Io(#[from] io::Error),

    #[error("Credential storage location not found")]
    LocationNotFound,
}

/// Durable home of the single API credential
pub trait KeyStore: Send + Sync {
    fn load(&self) -> Result<Option<String>, KeyStoreError>;
    fn save(&self, value: &str) -> Result<(), KeyStoreError>;
    fn clear(&self) -> Result<(), KeyStoreError>;
}

/// Stores the credential in a file readable only by the owner
pub struct FileKeyStore {
    path: PathBuf,
    env_fallback: Option<String>,
}

impl FileKeyStore {
    pub fn new() -> Result<Self, KeyStoreError> {
        Ok(Self::with_path(Self::default_path()?))
    }

    pub fn with_path<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            env_fallback: None,
        }
    }

    /// Read the credential from `var` while no credentials file exists
    pub fn with_env_fallback(mut self, var: impl Into<String>) -> Self {
        self.env_fallback = Some(var.into());
        self
    }

    /// ~/.config/sitecraft/credentials
    fn default_path() -> Result<PathBuf, KeyStoreError> {
        let home = std::env::var("HOME").map_err(|_| KeyStoreError::LocationNotFound)?;
        Ok(PathBuf::from(home)
            .join(".config")
            .join("sitecraft")
            .join("credentials"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replace the file contents; the file is created owner read/write only
    fn write_secret(&self, contents: &str) -> Result<(), KeyStoreError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }

        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }

        let mut file = options.open(&self.path)?;

        // mode() only applies on creation; tighten files saved earlier
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            file.set_permissions(fs::Permissions::from_mode(0o600))?;
        }

        file.write_all(contents.as_bytes())?;
        file.flush()?;
        Ok(())
    }

    fn env_value(&self) -> Option<String> {
        let var = self.env_fallback.as_ref()?;
        std::env::var(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }
}

impl KeyStore for FileKeyStore {
    fn load(&self) -> Result<Option<String>, KeyStoreError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => {
                let key = contents.trim();
                Ok((!key.is_empty()).then(|| key.to_string()))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(self.env_value()),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, value: &str) -> Result<(), KeyStoreError> {
        self.write_secret(value.trim())
    }

    /// Leave an empty file behind so the env fallback stays disabled
    fn clear(&self) -> Result<(), KeyStoreError> {
        self.write_secret("")
    }
}

/// Keeps the credential in memory for the life of the process
#[derive(Default)]
pub struct MemoryKeyStore {
    value: Mutex<Option<String>>,
}

impl MemoryKeyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: Mutex::new(Some(value.into())),
        }
    }

    fn slot(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        self.value.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl KeyStore for MemoryKeyStore {
    fn load(&self) -> Result<Option<String>, KeyStoreError> {
        Ok(self.slot().clone())
    }

    fn save(&self, value: &str) -> Result<(), KeyStoreError> {
        *self.slot() = Some(value.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), KeyStoreError> {
        *self.slot() = None;
        Ok(())
    }
}
