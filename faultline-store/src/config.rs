//! Store configuration: the ledger key namespace
//!
//! Persisted state layout:
//!
//! - `{index_key}` -> JSON array of record ids
//! - `{record_prefix}{id}` -> record JSON object
//!
//! The defaults match the layout already in production; override only when
//! pointing the store at a differently-namespaced ledger.

/// Key namespace configuration for the record store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Well-known key under which the record id index is stored
    pub index_key: String,
    /// Prefix prepended to a record id to form its ledger key
    pub record_prefix: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            index_key: "fault_data_keys".to_string(),
            record_prefix: "fault_data_".to_string(),
        }
    }
}

impl StoreConfig {
    /// Ledger key for the record with the given id.
    pub fn record_key(&self, id: &str) -> String {
        format!("{}{}", self.record_prefix, id)
    }
}
