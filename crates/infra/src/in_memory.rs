use std::collections::HashMap;
use std::sync::RwLock;

use orderdesk_catalog::{Customer, Product};
use orderdesk_core::{CustomerId, OrderId, Upc};
use orderdesk_sales::{Order, OrderLine};

use crate::seed::SeedTarget;
use crate::store::{CatalogStore, StoreError};

/// In-memory catalog store for the demo binary and tests.
///
/// Customers keep insertion order; in-stock listings come back sorted by UPC.
/// Every write logs at debug level.
#[derive(Debug, Default)]
pub struct InMemoryCatalogStore {
    customers: RwLock<Vec<Customer>>,
    products: RwLock<HashMap<Upc, Product>>,
    orders: RwLock<HashMap<OrderId, Order>>,
    order_lines: RwLock<Vec<OrderLine>>,
}

impl InMemoryCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All placed order headers. Test/inspection support.
    pub fn orders(&self) -> Result<Vec<Order>, StoreError> {
        Ok(self.orders.read().map_err(poisoned)?.values().cloned().collect())
    }

    /// All persisted order lines, in write order. Test/inspection support.
    pub fn order_lines(&self) -> Result<Vec<OrderLine>, StoreError> {
        Ok(self.order_lines.read().map_err(poisoned)?.clone())
    }
}

fn poisoned<T>(_: std::sync::PoisonError<T>) -> StoreError {
    StoreError::Backend("store lock poisoned".to_string())
}

impl SeedTarget for InMemoryCatalogStore {
    fn insert_customer(&self, customer: Customer) -> Result<(), StoreError> {
        let mut customers = self.customers.write().map_err(poisoned)?;
        if customers.iter().any(|c| c.id == customer.id) {
            return Err(StoreError::Duplicate(format!("customer {}", customer.id)));
        }
        tracing::debug!(customer_id = %customer.id, name = %customer.name, "persisting customer");
        customers.push(customer);
        Ok(())
    }

    fn insert_product(&self, product: Product) -> Result<(), StoreError> {
        let mut products = self.products.write().map_err(poisoned)?;
        if products.contains_key(&product.upc) {
            return Err(StoreError::Duplicate(format!("product {}", product.upc)));
        }
        tracing::debug!(upc = %product.upc, name = %product.name, "persisting product");
        products.insert(product.upc.clone(), product);
        Ok(())
    }
}

impl CatalogStore for InMemoryCatalogStore {
    fn list_customers(&self) -> Result<Vec<Customer>, StoreError> {
        Ok(self.customers.read().map_err(poisoned)?.clone())
    }

    fn get_customer(&self, id: CustomerId) -> Result<Customer, StoreError> {
        self.customers
            .read()
            .map_err(poisoned)?
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("customer {id}")))
    }

    fn list_in_stock_products(&self) -> Result<Vec<Product>, StoreError> {
        let products = self.products.read().map_err(poisoned)?;
        let mut in_stock: Vec<Product> = products
            .values()
            .filter(|p| p.is_in_stock())
            .cloned()
            .collect();
        in_stock.sort_by(|a, b| a.upc.as_str().cmp(b.upc.as_str()));
        Ok(in_stock)
    }

    fn get_product(&self, upc: &Upc) -> Result<Product, StoreError> {
        self.products
            .read()
            .map_err(poisoned)?
            .get(upc)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("product {upc}")))
    }

    fn update_stock(&self, upc: &Upc, new_quantity: u32) -> Result<(), StoreError> {
        let mut products = self.products.write().map_err(poisoned)?;
        let product = products
            .get_mut(upc)
            .ok_or_else(|| StoreError::NotFound(format!("product {upc}")))?;
        tracing::debug!(%upc, from = product.units_in_stock, to = new_quantity, "persisting stock update");
        product.units_in_stock = new_quantity;
        Ok(())
    }

    fn insert_order(&self, order: &Order) -> Result<(), StoreError> {
        let mut orders = self.orders.write().map_err(poisoned)?;
        if orders.contains_key(&order.id) {
            return Err(StoreError::Duplicate(format!("order {}", order.id)));
        }
        tracing::debug!(order_id = %order.id, customer_id = %order.customer_id, "persisting order");
        orders.insert(order.id, order.clone());
        Ok(())
    }

    fn insert_order_line(&self, line: &OrderLine) -> Result<(), StoreError> {
        let mut lines = self.order_lines.write().map_err(poisoned)?;
        if lines
            .iter()
            .any(|l| l.order_id == line.order_id && l.upc == line.upc)
        {
            return Err(StoreError::Duplicate(format!(
                "order line ({}, {})",
                line.order_id, line.upc
            )));
        }
        tracing::debug!(order_id = %line.order_id, upc = %line.upc, quantity = line.quantity, "persisting order line");
        lines.push(line.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use orderdesk_core::Cents;

    fn product(upc: &str, stock: u32) -> Product {
        Product::new(
            Upc::new(upc).unwrap(),
            format!("product {upc}"),
            "Hardware Place",
            "10",
            Cents::new(420),
            stock,
        )
        .unwrap()
    }

    fn store_with_products(products: Vec<Product>) -> InMemoryCatalogStore {
        let store = InMemoryCatalogStore::new();
        for p in products {
            store.insert_product(p).unwrap();
        }
        store
    }

    #[test]
    fn in_stock_listing_is_sorted_by_upc() {
        let store = store_with_products(vec![
            product("076174517163", 50),
            product("000000000001", 50),
            product("022222222222", 50),
        ]);

        let upcs: Vec<String> = store
            .list_in_stock_products()
            .unwrap()
            .into_iter()
            .map(|p| p.upc.to_string())
            .collect();
        assert_eq!(upcs, ["000000000001", "022222222222", "076174517163"]);
    }

    #[test]
    fn in_stock_listing_excludes_zero_stock() {
        let store = store_with_products(vec![
            product("076174517163", 50),
            product("000000000001", 0),
        ]);

        let listed = store.list_in_stock_products().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].upc.as_str(), "076174517163");

        // The record itself is still retrievable by UPC.
        let spatula = store.get_product(&Upc::new("000000000001").unwrap()).unwrap();
        assert_eq!(spatula.units_in_stock, 0);
    }

    #[test]
    fn update_stock_sets_an_absolute_count() {
        let store = store_with_products(vec![product("076174517163", 50)]);
        let upc = Upc::new("076174517163").unwrap();

        store.update_stock(&upc, 40).unwrap();
        assert_eq!(store.get_product(&upc).unwrap().units_in_stock, 40);

        store.update_stock(&upc, 0).unwrap();
        assert!(store.list_in_stock_products().unwrap().is_empty());
    }

    #[test]
    fn customers_keep_insertion_order() {
        let store = InMemoryCatalogStore::new();
        let a = Customer::new("Shirley Cho", "555-555-5555", "hello st", "91770").unwrap();
        let b = Customer::new("Shi C", "555-555-5554", "hello st", "91770").unwrap();
        store.insert_customer(a.clone()).unwrap();
        store.insert_customer(b.clone()).unwrap();

        let listed = store.list_customers().unwrap();
        assert_eq!(listed, vec![a.clone(), b]);
        assert_eq!(store.get_customer(a.id).unwrap(), a);
    }

    #[test]
    fn duplicate_order_line_is_rejected() {
        let store = InMemoryCatalogStore::new();
        let customer = Customer::new("Shirley Cho", "555-555-5555", "hello st", "91770").unwrap();
        let order = Order::new(customer.id, Utc::now(), "Shirley");
        store.insert_order(&order).unwrap();

        let line = OrderLine {
            order_id: order.id,
            upc: Upc::new("076174517163").unwrap(),
            quantity: 10,
            unit_sale_price: Cents::new(997),
        };
        store.insert_order_line(&line).unwrap();
        let err = store.insert_order_line(&line).unwrap_err();
        assert!(matches!(err, StoreError::Duplicate(_)));
    }

    #[test]
    fn missing_records_report_not_found() {
        let store = InMemoryCatalogStore::new();
        let err = store.get_product(&Upc::new("076174517163").unwrap()).unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
        let err = store.get_customer(CustomerId::new()).unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }
}
