//! In-memory store for tests and dev.
//!
//! One mutex over the whole state makes every mutating method trivially
//! serializable, which is exactly the concurrency contract the trait
//! demands.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use restock_core::{EngineError, EngineResult, MovementId, ProductId};
use restock_inventory::{
    adjustment_for_edit, apply_kind, Movement, NewMovement, NewProduct, Product, ProductPatch,
};

use super::StockStore;

#[derive(Debug, Default)]
struct Inner {
    products: BTreeMap<i64, Product>,
    movements: Vec<Movement>,
    next_product_id: i64,
    next_movement_id: i64,
}

impl Inner {
    fn product_mut(&mut self, id: ProductId) -> EngineResult<&mut Product> {
        self.products
            .get_mut(&id.as_i64())
            .ok_or_else(|| EngineError::not_found(format!("product {id}")))
    }

    fn append_movement(&mut self, new: NewMovement) -> Movement {
        self.next_movement_id += 1;
        let movement = Movement {
            id: MovementId::new(self.next_movement_id),
            product_id: new.product_id,
            kind: new.kind,
            quantity: new.quantity,
            reason: new.reason,
            actor: new.actor,
            occurred_at: Utc::now(),
        };
        self.movements.push(movement.clone());
        movement
    }
}

#[derive(Debug, Default)]
pub struct InMemoryStockStore {
    inner: Mutex<Inner>,
}

impl InMemoryStockStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> EngineResult<std::sync::MutexGuard<'_, Inner>> {
        self.inner
            .lock()
            .map_err(|_| EngineError::persistence("store mutex poisoned"))
    }
}

#[async_trait]
impl StockStore for InMemoryStockStore {
    async fn get_product(&self, id: ProductId) -> EngineResult<Product> {
        let inner = self.lock()?;
        inner
            .products
            .get(&id.as_i64())
            .cloned()
            .ok_or_else(|| EngineError::not_found(format!("product {id}")))
    }

    async fn list_products(&self) -> EngineResult<Vec<Product>> {
        let inner = self.lock()?;
        Ok(inner.products.values().cloned().collect())
    }

    async fn create_product(&self, new: NewProduct) -> EngineResult<Product> {
        let mut inner = self.lock()?;
        inner.next_product_id += 1;
        let product = Product {
            id: ProductId::new(inner.next_product_id),
            name: new.name,
            category: new.category,
            stock: new.stock,
            minimum_stock: new.minimum_stock,
            price: new.price,
            cost: new.cost,
            supplier: new.supplier,
            annual_demand: new.annual_demand,
            created_at: Utc::now(),
        };
        inner.products.insert(product.id.as_i64(), product.clone());
        Ok(product)
    }

    async fn delete_product(&self, id: ProductId) -> EngineResult<()> {
        let mut inner = self.lock()?;
        if inner.products.remove(&id.as_i64()).is_none() {
            return Err(EngineError::not_found(format!("product {id}")));
        }
        // Movements stay behind as orphans.
        Ok(())
    }

    async fn update_product(
        &self,
        id: ProductId,
        patch: ProductPatch,
        actor: &str,
    ) -> EngineResult<(Product, Option<Movement>)> {
        let mut inner = self.lock()?;
        let product = inner.product_mut(id)?;

        let previous_stock = product.stock;
        patch.apply_to(product);
        let updated = product.clone();

        let movement = adjustment_for_edit(previous_stock, updated.stock).map(|(kind, quantity)| {
            inner.append_movement(NewMovement::edit_adjustment(id, kind, quantity, actor))
        });

        Ok((updated, movement))
    }

    async fn apply_movement(&self, movement: NewMovement) -> EngineResult<(Product, Movement)> {
        let mut inner = self.lock()?;
        let product = inner.product_mut(movement.product_id)?;

        // Rejection leaves both the product and the ledger untouched.
        product.stock = apply_kind(product.stock, movement.kind, movement.quantity)?;
        let updated = product.clone();
        let recorded = inner.append_movement(movement);

        Ok((updated, recorded))
    }

    async fn list_movements(&self) -> EngineResult<Vec<Movement>> {
        let inner = self.lock()?;
        Ok(inner.movements.clone())
    }
}
