//! Intent log: one JSON line per dispatched intent, written when debugging.

use crate::chat::{IntentOutcome, IntentRequest};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

/// Record of a single dispatched intent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntentLogRecord {
    pub record_id: Uuid,
    pub request_id: Uuid,
    pub intent: String,
    #[serde(default)]
    pub parameters: Map<String, Value>,
    pub outcome: IntentOutcome,
    pub turns: Vec<String>,
    pub logged_at: DateTime<Utc>,
}

impl IntentLogRecord {
    pub fn new(request: &IntentRequest, outcome: IntentOutcome, turns: Vec<String>) -> Self {
        Self {
            record_id: Uuid::new_v4(),
            request_id: request.request_id,
            intent: request.intent.clone(),
            parameters: request.parameters.clone(),
            outcome,
            turns,
            logged_at: Utc::now(),
        }
    }
}

/// File-backed JSONL log of intent records.
///
/// Clones share one append lock, so concurrent dispatches never interleave
/// within a line.
#[derive(Debug, Clone)]
pub struct IntentLog {
    path: PathBuf,
    append_lock: Arc<Mutex<()>>,
}

impl IntentLog {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        if !path.exists() {
            File::create(&path)
                .with_context(|| format!("Failed to create intent log {}", path.display()))?;
        }
        Ok(Self {
            path,
            append_lock: Arc::new(Mutex::new(())),
        })
    }

    pub fn append(&self, record: &IntentLogRecord) -> Result<()> {
        let mut line = serde_json::to_string(record)?;
        line.push('\n');
        let _guard = self
            .append_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("Failed to open intent log {}", self.path.display()))?;
        file
            .write_all(line.as_bytes())
            .with_context(|| format!("Failed to write intent log {}", self.path.display()))?;
        Ok(())
    }

    pub fn read_all(&self) -> Result<Vec<IntentLogRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let reader = BufReader::new(File::open(&self.path)?);
        let mut records = Vec::new();
        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let record: IntentLogRecord =
                serde_json::from_str(&line).with_context(|| "Failed parsing intent log")?;
            records.push(record);
        }
        Ok(records)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
