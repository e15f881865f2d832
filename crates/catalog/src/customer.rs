use serde::{Deserialize, Serialize};

use orderdesk_core::{CustomerId, DomainError, DomainResult, Entity};

/// A customer on file. Immutable in the order-entry workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub phone: String,
    pub street: String,
    pub zip: String,
}

impl Customer {
    /// Create a new customer record with a fresh identifier.
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        street: impl Into<String>,
        zip: impl Into<String>,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(DomainError::validation("customer name must not be empty"));
        }
        Ok(Self {
            id: CustomerId::new(),
            name,
            phone: phone.into(),
            street: street.into(),
            zip: zip.into(),
        })
    }
}

impl Entity for Customer {
    type Id = CustomerId;

    fn id(&self) -> &CustomerId {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_name() {
        let err = Customer::new("", "555-555-5555", "hello st", "91770").unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn each_record_gets_a_distinct_id() {
        let a = Customer::new("Shirley Cho", "555-555-5555", "hello st", "91770").unwrap();
        let b = Customer::new("Shi C", "555-555-5554", "hello st", "91770").unwrap();
        assert_ne!(a.id, b.id);
    }
}
