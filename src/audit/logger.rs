//! Audit logger for the append-only activity log
//!
//! Each entry is written as a single JSON line and flushed immediately.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;

use crate::error::{HavenError, HavenResult};

use super::entry::{AuditEntry, EntityType};

/// Handles writing audit entries to the audit log file
///
/// The log file uses a line-delimited JSON format (JSONL).
pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    /// Create a new AuditLogger that writes to the specified path
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append an entry and flush
    pub fn log(&self, entry: &AuditEntry) -> HavenResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| HavenError::Io(format!("Failed to open audit log: {}", e)))?;

        let json = serde_json::to_string(entry)
            .map_err(|e| HavenError::Json(format!("Failed to serialize audit entry: {}", e)))?;

        writeln!(file, "{}", json)
            .map_err(|e| HavenError::Io(format!("Failed to write audit entry: {}", e)))?;

        file.flush()
            .map_err(|e| HavenError::Io(format!("Failed to flush audit log: {}", e)))?;

        Ok(())
    }

    /// Read all audit entries, oldest first
    pub fn read_all(&self) -> HavenResult<Vec<AuditEntry>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.log_path)
            .map_err(|e| HavenError::Io(format!("Failed to open audit log: {}", e)))?;

        let reader = BufReader::new(file);
        let mut entries = Vec::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| {
                HavenError::Io(format!("Failed to read audit log line {}: {}", line_num + 1, e))
            })?;

            if line.trim().is_empty() {
                continue;
            }

            let entry: AuditEntry = serde_json::from_str(&line).map_err(|e| {
                HavenError::Json(format!(
                    "Failed to parse audit entry at line {}: {}",
                    line_num + 1,
                    e
                ))
            })?;

            entries.push(entry);
        }

        Ok(entries)
    }

    /// Read the most recent N entries from the log
    pub fn read_recent(&self, count: usize) -> HavenResult<Vec<AuditEntry>> {
        let all_entries = self.read_all()?;
        let start = all_entries.len().saturating_sub(count);
        Ok(all_entries[start..].to_vec())
    }

    /// Rewrite the log without any entry about `entity_type`
    ///
    /// Lines that cannot be decoded or parsed are dropped too, since there is
    /// no way to tell what they describe; the lines after them are still
    /// kept. The log is replaced atomically.
    pub fn purge(&self, entity_type: EntityType) -> HavenResult<()> {
        if !self.log_path.exists() {
            return Ok(());
        }

        let raw = fs::read(&self.log_path)
            .map_err(|e| HavenError::Io(format!("Failed to read audit log: {}", e)))?;

        let kept: Vec<&str> = raw
            .split(|byte| *byte == b'\n')
            .filter_map(|line| std::str::from_utf8(line).ok())
            .filter(|line| {
                serde_json::from_str::<AuditEntry>(line)
                    .map(|entry| entry.entity_type != entity_type)
                    .unwrap_or(false)
            })
            .collect();

        let temp_path = self.log_path.with_extension("log.tmp");
        let temp = File::create(&temp_path)
            .map_err(|e| HavenError::Io(format!("Failed to create temp audit log: {}", e)))?;
        let mut writer = BufWriter::new(temp);
        for line in &kept {
            writeln!(writer, "{}", line)
                .map_err(|e| HavenError::Io(format!("Failed to write audit entry: {}", e)))?;
        }
        writer
            .flush()
            .map_err(|e| HavenError::Io(format!("Failed to flush audit log: {}", e)))?;
        writer
            .get_ref()
            .sync_all()
            .map_err(|e| HavenError::Io(format!("Failed to sync audit log: {}", e)))?;

        fs::rename(&temp_path, &self.log_path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            HavenError::Io(format!("Failed to replace audit log: {}", e))
        })?;

        Ok(())
    }
}
