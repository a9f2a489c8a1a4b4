//! Repository Implementation

use crate::StorageError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::info;

/// One customer's stored assignment
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AssignmentRecord {
    pub customer_id: i64,
    /// 1-based group number
    pub cluster: u8,
}

/// Repository for segment assignments (in-memory)
pub struct Repository {
    /// Assignment per customer ID
    assignments: Mutex<HashMap<i64, u8>>,
}

impl Repository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self {
            assignments: Mutex::new(HashMap::new()),
        }
    }

    /// Replace the stored batch with a freshly computed one
    pub fn store_batch(&self, records: &[AssignmentRecord]) -> Result<(), StorageError> {
        let mut assignments = self
            .assignments
            .lock()
            .map_err(|e| StorageError::LockPoisoned(e.to_string()))?;
        assignments.clear();
        for record in records {
            assignments.insert(record.customer_id, record.cluster);
        }
        info!(customers = assignments.len(), "stored batch assignments");
        Ok(())
    }

    /// Look up one customer's group
    pub fn get_by_customer(&self, customer_id: i64) -> Result<AssignmentRecord, StorageError> {
        let assignments = self
            .assignments
            .lock()
            .map_err(|e| StorageError::LockPoisoned(e.to_string()))?;
        assignments
            .get(&customer_id)
            .map(|&cluster| AssignmentRecord {
                customer_id,
                cluster,
            })
            .ok_or(StorageError::NotFound)
    }

    /// IDs of every customer assigned to one of the given groups,
    /// sorted ascending for stable output.
    pub fn customers_in_clusters(&self, clusters: &[u8]) -> Result<Vec<i64>, StorageError> {
        let assignments = self
            .assignments
            .lock()
            .map_err(|e| StorageError::LockPoisoned(e.to_string()))?;
        let mut ids: Vec<i64> = assignments
            .iter()
            .filter(|(_, cluster)| clusters.contains(cluster))
            .map(|(&id, _)| id)
            .collect();
        ids.sort_unstable();
        Ok(ids)
    }

    /// Number of stored assignments
    pub fn assignment_count(&self) -> usize {
        self.assignments.lock().map(|a| a.len()).unwrap_or(0)
    }
}

impl Default for Repository {
    fn default() -> Self {
        Self::new()
    }
}
