//! The stock ledger: single authority for mutating on-hand stock.
//!
//! Every write path — movements, direct edits, system orders — funnels
//! through here, so the running-sum invariant (stock == initial stock +
//! Σ entries − Σ exits over non-rejected movements) holds no matter which
//! backend is underneath.

use std::sync::Arc;

use restock_core::{EngineResult, ProductId};
use restock_inventory::{Movement, NewMovement, NewProduct, Product, ProductPatch};

use crate::store::StockStore;

#[derive(Clone)]
pub struct StockLedger {
    store: Arc<dyn StockStore>,
}

impl StockLedger {
    pub fn new(store: Arc<dyn StockStore>) -> Self {
        Self { store }
    }

    pub async fn get_product(&self, id: ProductId) -> EngineResult<Product> {
        self.store.get_product(id).await
    }

    pub async fn list_products(&self) -> EngineResult<Vec<Product>> {
        self.store.list_products().await
    }

    pub async fn create_product(&self, new: NewProduct) -> EngineResult<Product> {
        let product = self.store.create_product(new).await?;
        tracing::info!(product_id = %product.id, stock = product.stock, "product created");
        Ok(product)
    }

    pub async fn delete_product(&self, id: ProductId) -> EngineResult<()> {
        self.store.delete_product(id).await?;
        tracing::info!(product_id = %id, "product deleted");
        Ok(())
    }

    pub async fn list_movements(&self) -> EngineResult<Vec<Movement>> {
        self.store.list_movements().await
    }

    /// Apply one entry/exit movement. Atomic: on success the stock update
    /// and exactly one appended movement are both visible; on rejection
    /// neither is.
    pub async fn record_movement(
        &self,
        movement: NewMovement,
    ) -> EngineResult<(Product, Movement)> {
        match self.store.apply_movement(movement).await {
            Ok((product, recorded)) => {
                tracing::info!(
                    product_id = %product.id,
                    kind = recorded.kind.as_str(),
                    quantity = recorded.quantity,
                    stock = product.stock,
                    "movement recorded"
                );
                Ok((product, recorded))
            }
            Err(err) => {
                tracing::warn!(error = %err, "movement rejected");
                Err(err)
            }
        }
    }

    /// Direct field edit, with the synthetic-movement policy applied by
    /// the store. Bypasses the insufficient-stock guard: the edited value
    /// is taken as the observed truth.
    pub async fn edit_product(
        &self,
        id: ProductId,
        patch: ProductPatch,
        actor: &str,
    ) -> EngineResult<(Product, Option<Movement>)> {
        let (product, movement) = self.store.update_product(id, patch, actor).await?;
        tracing::info!(
            product_id = %id,
            stock = product.stock,
            ledgered = movement.is_some(),
            "product edited"
        );
        Ok((product, movement))
    }

    /// Execute a replenishment order: an entry movement with reason
    /// "EOQ order" and actor "System". Never fails for insufficient stock.
    pub async fn execute_order(
        &self,
        id: ProductId,
        quantity: u32,
    ) -> EngineResult<(Product, Movement)> {
        self.record_movement(NewMovement::order(id, quantity)).await
    }
}
