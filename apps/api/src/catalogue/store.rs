use std::collections::HashSet;

use crate::catalogue::CatalogueError;
use crate::models::career::CareerRecord;

/// Read-only career catalogue, populated once at startup.
#[derive(Debug)]
pub struct CatalogueStore {
    records: Vec<CareerRecord>,
}

impl CatalogueStore {
    /// Wraps loaded records, enforcing `nco_code` uniqueness.
    pub fn new(records: Vec<CareerRecord>) -> Result<Self, CatalogueError> {
        let mut seen = HashSet::new();
        for record in &records {
            if !seen.insert(record.nco_code.clone()) {
                return Err(CatalogueError::DuplicateNcoCode(record.nco_code.clone()));
            }
        }
        Ok(Self { records })
    }

    pub fn all(&self) -> &[CareerRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Index documents in record order, used to fit the vector index.
    pub fn documents(&self) -> Vec<String> {
        self.records.iter().map(CareerRecord::index_document).collect()
    }
}
