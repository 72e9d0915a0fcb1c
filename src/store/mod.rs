//! Typed records and in-memory repositories.
//!
//! The billing screens need simple create/update/delete over small record
//! sets. The core never depends on how records are stored; callers get a
//! [`Repository`] seam that an SQL or file backend can implement later,
//! plus an in-memory implementation good enough for a single-user desktop
//! session.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A customer record as edited on the customers screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub address: String,
    pub city: Option<String>,
    pub state_name: String,
    pub state_code: String,
    pub gstin: Option<String>,
    pub mobile: Option<String>,
}

/// A catalogue product as edited on the products screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub hsn_code: String,
    pub rate: Decimal,
    pub uom: String,
}

/// Anything storable in a repository.
pub trait Record {
    fn id(&self) -> &str;
}

impl Record for Customer {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Product {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Errors from repository operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("record '{0}' already exists")]
    Duplicate(String),

    #[error("record '{0}' not found")]
    NotFound(String),
}

/// Storage seam for a small record set.
pub trait Repository<T: Record> {
    fn list(&self) -> Vec<T>;
    fn get(&self, id: &str) -> Option<T>;
    fn create(&mut self, record: T) -> Result<(), StoreError>;
    fn update(&mut self, record: T) -> Result<(), StoreError>;
    fn delete(&mut self, id: &str) -> Result<(), StoreError>;
}

/// Vec-backed repository; record order is insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository<T> {
    records: Vec<T>,
}

impl<T: Record + Clone> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Seed with initial records, e.g. a product catalogue.
    pub fn with_records(records: Vec<T>) -> Self {
        Self { records }
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|r| r.id() == id)
    }
}

impl<T: Record + Clone> Repository<T> for InMemoryRepository<T> {
    fn list(&self) -> Vec<T> {
        self.records.clone()
    }

    fn get(&self, id: &str) -> Option<T> {
        self.records.iter().find(|r| r.id() == id).cloned()
    }

    fn create(&mut self, record: T) -> Result<(), StoreError> {
        if self.position(record.id()).is_some() {
            return Err(StoreError::Duplicate(record.id().to_string()));
        }
        self.records.push(record);
        Ok(())
    }

    fn update(&mut self, record: T) -> Result<(), StoreError> {
        match self.position(record.id()) {
            Some(i) => {
                self.records[i] = record;
                Ok(())
            }
            None => Err(StoreError::NotFound(record.id().to_string())),
        }
    }

    fn delete(&mut self, id: &str) -> Result<(), StoreError> {
        match self.position(id) {
            Some(i) => {
                self.records.remove(i);
                Ok(())
            }
            None => Err(StoreError::NotFound(id.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sheets() -> Product {
        Product {
            id: "1".into(),
            name: "MS CENTRING SHEETS".into(),
            description: None,
            hsn_code: "7308".into(),
            rate: dec!(73),
            uom: "Kgs".into(),
        }
    }

    fn jack() -> Product {
        Product {
            id: "4".into(),
            name: "U JACK".into(),
            description: None,
            hsn_code: "7308".into(),
            rate: dec!(150),
            uom: "Pcs".into(),
        }
    }

    #[test]
    fn create_list_get() {
        let mut repo = InMemoryRepository::new();
        repo.create(sheets()).unwrap();
        repo.create(jack()).unwrap();
        assert_eq!(repo.list().len(), 2);
        assert_eq!(repo.get("4").unwrap().name, "U JACK");
        assert!(repo.get("9").is_none());
    }

    #[test]
    fn create_rejects_duplicate_id() {
        let mut repo = InMemoryRepository::new();
        repo.create(sheets()).unwrap();
        assert_eq!(
            repo.create(sheets()),
            Err(StoreError::Duplicate("1".into()))
        );
    }

    #[test]
    fn update_replaces_in_place() {
        let mut repo = InMemoryRepository::with_records(vec![sheets(), jack()]);
        let mut p = sheets();
        p.rate = dec!(75);
        repo.update(p).unwrap();
        assert_eq!(repo.get("1").unwrap().rate, dec!(75));
        // order preserved
        assert_eq!(repo.list()[0].id, "1");
    }

    #[test]
    fn update_and_delete_unknown_fail() {
        let mut repo: InMemoryRepository<Product> = InMemoryRepository::new();
        assert_eq!(
            repo.update(sheets()),
            Err(StoreError::NotFound("1".into()))
        );
        assert_eq!(repo.delete("1"), Err(StoreError::NotFound("1".into())));
    }

    #[test]
    fn delete_removes() {
        let mut repo = InMemoryRepository::with_records(vec![sheets(), jack()]);
        repo.delete("1").unwrap();
        assert_eq!(repo.list().len(), 1);
        assert_eq!(repo.list()[0].id, "4");
    }
}
