use crate::wizard::WebsiteOptions;
use chrono::Utc;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

const MAX_LOG_SIZE: u64 = 10 * 1024 * 1024; // 10MB

/// Which of the two model calls an entry records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationKind {
    Description,
    Code,
}

impl GenerationKind {
    fn as_str(self) -> &'static str {
        match self {
            GenerationKind::Description => "description",
            GenerationKind::Code => "code",
        }
    }
}

/// Append-only history of generation calls and credential changes
///
/// Never records the credential itself.
pub struct GenerationLog {
    log_path: PathBuf,
}

impl GenerationLog {
    /// Create a log at ~/.config/sitecraft/history.log
    pub fn new() -> std::io::Result<Self> {
        Self::with_path(Self::default_log_path()?)
    }

    /// Create a log at a custom path
    pub fn with_path<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let log_path = path.as_ref().to_path_buf();

        if let Some(parent) = log_path.parent() {
            fs::create_dir_all(parent)?;
        }

        Ok(Self { log_path })
    }

    fn default_log_path() -> std::io::Result<PathBuf> {
        let home = std::env::var("HOME").map_err(|_| {
            std::io::Error::new(std::io::ErrorKind::NotFound, "HOME environment variable not set")
        })?;

        Ok(PathBuf::from(home)
            .join(".config")
            .join("sitecraft")
            .join("history.log"))
    }

    /// Record a finished generation call
    ///
    /// `result` carries the length of the generated text, or the error shown
    /// to the user.
    pub fn log_generation(
        &self,
        kind: GenerationKind,
        options: &WebsiteOptions,
        result: Result<usize, &str>,
    ) -> std::io::Result<()> {
        let selection = format!(
            "type=\"{}\" style=\"{}\" colors=\"{}\" font=\"{}\" theme={}",
            options.site_type,
            options.style,
            options.colors.join(","),
            options.font,
            options.theme
        );

        let outcome = match result {
            Ok(chars) => format!("[ok] {} chars={}", selection, chars),
            Err(reason) => format!("[failed] {} reason=\"{}\"", selection, reason),
        };

        self.append(&format!("[{}] {}", kind.as_str(), outcome))
    }

    /// Record that the stored API key was dropped, and why
    pub fn log_credential_revoked(&self, reason: &str) -> std::io::Result<()> {
        self.append(&format!("[credential] [revoked] reason=\"{}\"", reason))
    }

    fn append(&self, entry: &str) -> std::io::Result<()> {
        self.rotate_if_needed()?;

        let timestamp = Utc::now().to_rfc3339();
        let user = std::env::var("USER").unwrap_or_else(|_| "unknown".to_string());
        let line = format!("[{}] [{}] {}\n", timestamp, user, entry);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)?;

        file.write_all(line.as_bytes())?;
        file.flush()?;

        Ok(())
    }

    /// Rotate log file if it exceeds MAX_LOG_SIZE
    fn rotate_if_needed(&self) -> std::io::Result<()> {
        if !self.log_path.exists() {
            return Ok(());
        }

        let metadata = fs::metadata(&self.log_path)?;
        if metadata.len() > MAX_LOG_SIZE {
            // Rotate: history.log -> history.log.1
            let backup_path = self.log_path.with_extension("log.1");
            fs::rename(&self.log_path, backup_path)?;
        }

        Ok(())
    }

    pub fn log_path(&self) -> &Path {
        &self.log_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn options() -> WebsiteOptions {
        WebsiteOptions {
            site_type: "Blog".to_string(),
            style: "Modern".to_string(),
            ..WebsiteOptions::default()
        }
    }

    #[test]
    fn test_create_logger_makes_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("nested").join("history.log");

        let logger = GenerationLog::with_path(&log_path).unwrap();
        assert_eq!(logger.log_path(), log_path);
        assert!(log_path.parent().unwrap().exists());
    }

    #[test]
    fn test_log_success_and_failure() {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("history.log");
        let logger = GenerationLog::with_path(&log_path).unwrap();

        logger.log_generation(GenerationKind::Description, &options(), Ok(120)).unwrap();
        logger
            .log_generation(GenerationKind::Code, &options(), Err("network timeout"))
            .unwrap();

        let content = fs::read_to_string(&log_path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("[description] [ok]"));
        assert!(lines[0].contains("type=\"Blog\""));
        assert!(lines[0].contains("chars=120"));
        assert!(lines[1].contains("[code] [failed]"));
        assert!(lines[1].contains("reason=\"network timeout\""));
    }

    #[test]
    fn test_log_credential_revoked() {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("history.log");
        let logger = GenerationLog::with_path(&log_path).unwrap();

        logger.log_credential_revoked("rejected by API").unwrap();

        let content = fs::read_to_string(&log_path).unwrap();
        assert!(content.contains("[credential] [revoked]"));
        assert!(content.contains("rejected by API"));
    }

    #[test]
    fn test_log_rotation() {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("history.log");
        let logger = GenerationLog::with_path(&log_path).unwrap();

        let huge = "x".repeat(MAX_LOG_SIZE as usize);
        logger.log_credential_revoked(&huge).unwrap();
        logger.log_credential_revoked("small").unwrap();

        assert!(log_path.with_extension("log.1").exists());
        assert!(fs::metadata(&log_path).unwrap().len() < MAX_LOG_SIZE);
    }
}
