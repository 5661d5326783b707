//! Storage collaborator contract.
//!
//! Mutating methods are atomic per product: the stock update and the
//! appended movement either both happen or neither does, and two
//! concurrent mutations against the same product never observe the same
//! "current stock". Reads are not linearized with writes; a slightly
//! stale listing is acceptable, callers re-read when they need fresher
//! data.

use async_trait::async_trait;

use restock_core::{EngineResult, ProductId};
use restock_inventory::{Movement, NewMovement, NewProduct, Product, ProductPatch};

pub mod in_memory;
pub mod postgres;

pub use in_memory::InMemoryStockStore;
pub use postgres::PostgresStockStore;

#[async_trait]
pub trait StockStore: Send + Sync {
    async fn get_product(&self, id: ProductId) -> EngineResult<Product>;

    async fn list_products(&self) -> EngineResult<Vec<Product>>;

    async fn create_product(&self, new: NewProduct) -> EngineResult<Product>;

    /// Delete a product. Its ledger movements are kept; reports tolerate
    /// the orphans.
    async fn delete_product(&self, id: ProductId) -> EngineResult<()>;

    /// Direct field edit. When the patch changes stock and the previous
    /// stock was non-zero, a synthetic movement (reason "manual
    /// adjustment", `actor` as supplied) is appended in the same atomic
    /// unit; the returned movement is that record. This path deliberately
    /// bypasses the insufficient-stock guard: an edit states an observed
    /// quantity, not an event.
    async fn update_product(
        &self,
        id: ProductId,
        patch: ProductPatch,
        actor: &str,
    ) -> EngineResult<(Product, Option<Movement>)>;

    /// Apply one movement: update stock per the ledger rules and append
    /// exactly one movement row, atomically. A rejected exit mutates
    /// nothing and appends nothing.
    async fn apply_movement(&self, movement: NewMovement) -> EngineResult<(Product, Movement)>;

    /// All movements in insertion order (ascending id).
    async fn list_movements(&self) -> EngineResult<Vec<Movement>>;
}
