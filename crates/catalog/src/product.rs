use serde::{Deserialize, Serialize};

use orderdesk_core::{Cents, DomainError, DomainResult, Entity, Upc};

/// Something we stock that a customer can order.
///
/// The UPC is the natural key; `units_in_stock` is structurally non-negative
/// and every decrement goes through checked arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub upc: Upc,
    pub name: String,
    pub manufacturer: String,
    pub model: String,
    /// List price in the smallest currency unit.
    pub unit_list_price: Cents,
    pub units_in_stock: u32,
}

impl Product {
    pub fn new(
        upc: Upc,
        name: impl Into<String>,
        manufacturer: impl Into<String>,
        model: impl Into<String>,
        unit_list_price: Cents,
        units_in_stock: u32,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(DomainError::validation("product name must not be empty"));
        }
        let manufacturer = manufacturer.into();
        if manufacturer.is_empty() {
            return Err(DomainError::validation("manufacturer must not be empty"));
        }
        Ok(Self {
            upc,
            name,
            manufacturer,
            model: model.into(),
            unit_list_price,
            units_in_stock,
        })
    }

    /// Whether the store-level in-stock listing includes this product
    /// (`units_in_stock != 0`).
    pub fn is_in_stock(&self) -> bool {
        self.units_in_stock != 0
    }

    /// Copy of this record with an absolute replacement stock count.
    pub fn with_stock(&self, units_in_stock: u32) -> Self {
        Self {
            units_in_stock,
            ..self.clone()
        }
    }
}

impl Entity for Product {
    type Id = Upc;

    fn id(&self) -> &Upc {
        &self.upc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hammer() -> Product {
        Product::new(
            Upc::new("076174517163").unwrap(),
            "16 oz. hickory hammer",
            "Stanely Tools",
            "1",
            Cents::new(997),
            50,
        )
        .unwrap()
    }

    #[test]
    fn in_stock_means_nonzero_units() {
        let product = hammer();
        assert!(product.is_in_stock());
        assert!(!product.with_stock(0).is_in_stock());
    }

    #[test]
    fn rejects_empty_name() {
        let err = Product::new(
            Upc::new("000000000001").unwrap(),
            "",
            "Waterfall Tools",
            "3",
            Cents::new(350),
            50,
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn with_stock_replaces_only_the_count() {
        let product = hammer();
        let updated = product.with_stock(40);
        assert_eq!(updated.units_in_stock, 40);
        assert_eq!(updated.upc, product.upc);
        assert_eq!(updated.unit_list_price, product.unit_list_price);
    }
}
