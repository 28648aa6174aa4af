//! Persisted Prompt Store
//!
//! CRUD over the list of named saved prompts. The whole record array
//! is the unit of persistence: every mutation rewrites the entire
//! serialized list back to the storage port.

use chrono::{SecondsFormat, Utc};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::models::saved_prompt::{SavedPromptDraft, SavedPromptRecord, SavedPromptUpdate};
use crate::storage::port::StoragePort;
use crate::utils::error::AppResult;

/// Storage key holding the serialized record array
pub const SAVED_PROMPTS_KEY: &str = "saved-prompts";

/// Store of saved prompt records over an injected storage port
#[derive(Debug)]
pub struct PersistedPromptStore<S: StoragePort> {
    port: S,
    records: Vec<SavedPromptRecord>,
}

impl<S: StoragePort> PersistedPromptStore<S> {
    /// Load the store from the port. A corrupt blob is treated as an
    /// empty list rather than an error, so bad storage never poisons
    /// initialization. Records persisted without an id get one
    /// assigned and the repaired list is written back.
    pub fn new(port: S) -> AppResult<Self> {
        let records = match port.get(SAVED_PROMPTS_KEY)? {
            Some(blob) => match serde_json::from_str::<Vec<SavedPromptRecord>>(&blob) {
                Ok(records) => records,
                Err(err) => {
                    warn!(error = %err, "corrupt saved-prompts blob, starting empty");
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        let mut store = Self { port, records };
        store.backfill_missing_ids()?;
        Ok(store)
    }

    fn backfill_missing_ids(&mut self) -> AppResult<()> {
        let mut repaired = false;
        let existing: Vec<String> = self.records.iter().map(|r| r.id.clone()).collect();
        for record in &mut self.records {
            if record.id.is_empty() {
                record.id = generate_id(&existing);
                repaired = true;
            }
        }
        if repaired {
            debug!("assigned ids to legacy saved prompts");
            self.persist()?;
        }
        Ok(())
    }

    fn persist(&mut self) -> AppResult<()> {
        let blob = serde_json::to_string(&self.records)?;
        self.port.set(SAVED_PROMPTS_KEY, &blob)
    }

    /// Append a new record and persist. Returns the generated id.
    pub fn save(&mut self, draft: SavedPromptDraft) -> AppResult<String> {
        let existing: Vec<String> = self.records.iter().map(|r| r.id.clone()).collect();
        let id = generate_id(&existing);

        let record = SavedPromptRecord {
            id: id.clone(),
            name: draft.name,
            prompt_text: draft.prompt_text,
            selected_techniques: draft.selected_techniques,
            base_prompt: draft.base_prompt,
            task_description: draft.task_description,
            output_format: draft.output_format,
            selected_templates: draft.selected_templates,
            template_fields: draft.template_fields,
            timestamp: now(),
        };

        debug!(id = %id, name = %record.name, "saving prompt");
        self.records.push(record);
        self.persist()?;
        Ok(id)
    }

    /// Shallow-merge a partial update into the record with `id`,
    /// refreshing its timestamp. Ok(false) if the id is unknown.
    pub fn update(&mut self, id: &str, update: SavedPromptUpdate) -> AppResult<bool> {
        let Some(record) = self.records.iter_mut().find(|r| r.id == id) else {
            return Ok(false);
        };
        record.apply_update(update);
        record.timestamp = now();
        self.persist()?;
        Ok(true)
    }

    /// Remove the record with `id`. Ok(false) if the id is unknown.
    pub fn delete(&mut self, id: &str) -> AppResult<bool> {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        if self.records.len() == before {
            return Ok(false);
        }
        debug!(id = %id, "deleted saved prompt");
        self.persist()?;
        Ok(true)
    }

    /// All records in insertion order
    pub fn list(&self) -> &[SavedPromptRecord] {
        &self.records
    }

    pub fn get(&self, id: &str) -> Option<&SavedPromptRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Case-sensitive name check. The store itself allows duplicate
    /// names; call sites use this to warn before saving.
    pub fn name_exists(&self, name: &str) -> bool {
        self.records.iter().any(|r| r.name == name)
    }
}

fn now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Time-based id with a random suffix, re-rolled on the (unlikely)
/// collision with an existing id
fn generate_id(existing: &[String]) -> String {
    loop {
        let suffix = Uuid::new_v4().simple().to_string();
        let id = format!("{}-{}", Utc::now().timestamp_millis(), &suffix[..8]);
        if !existing.iter().any(|e| e == &id) {
            return id;
        }
    }
}
