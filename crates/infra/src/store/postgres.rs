//! Postgres-backed store.
//!
//! Runtime queries with explicit row mapping; no compile-time schema
//! checks. Mutations run in a transaction with `SELECT ... FOR UPDATE` on
//! the product row, which serializes concurrent mutations per product and
//! makes the stock update + movement append one atomic unit.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Postgres, Row, Transaction};

use restock_core::{EngineError, EngineResult, MovementId, ProductId};
use restock_inventory::{
    adjustment_for_edit, apply_kind, Movement, MovementKind, NewMovement, NewProduct, Product,
    ProductPatch,
};

use super::StockStore;

pub struct PostgresStockStore {
    pool: PgPool,
}

fn persistence(err: sqlx::Error) -> EngineError {
    EngineError::persistence(err.to_string())
}

fn to_u32(value: i64, column: &str) -> EngineResult<u32> {
    u32::try_from(value)
        .map_err(|_| EngineError::persistence(format!("{column} out of range: {value}")))
}

fn product_from_row(row: &PgRow) -> EngineResult<Product> {
    Ok(Product {
        id: ProductId::new(row.get::<i64, _>("id")),
        name: row.get("name"),
        category: row.get("category"),
        stock: to_u32(row.get("stock"), "stock")?,
        minimum_stock: to_u32(row.get("minimum_stock"), "minimum_stock")?,
        price: row.get("price"),
        cost: row.get("cost"),
        supplier: row.get("supplier"),
        annual_demand: row.get("annual_demand"),
        created_at: row.get("created_at"),
    })
}

fn movement_from_row(row: &PgRow) -> EngineResult<Movement> {
    let kind: String = row.get("kind");
    Ok(Movement {
        id: MovementId::new(row.get::<i64, _>("id")),
        product_id: ProductId::new(row.get::<i64, _>("product_id")),
        kind: kind
            .parse::<MovementKind>()
            .map_err(|_| EngineError::persistence(format!("unknown movement kind: {kind}")))?,
        quantity: to_u32(row.get("quantity"), "quantity")?,
        reason: row.get("reason"),
        actor: row.get("actor"),
        occurred_at: row.get("occurred_at"),
    })
}

impl PostgresStockStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn connect(database_url: &str) -> EngineResult<Self> {
        let pool = PgPool::connect(database_url).await.map_err(persistence)?;
        Ok(Self::new(pool))
    }

    /// Create the schema when it does not exist yet. Movements carry no
    /// foreign key on purpose: deleting a product leaves its history as
    /// tolerated orphans.
    pub async fn ensure_schema(&self) -> EngineResult<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS products (
                id            BIGSERIAL PRIMARY KEY,
                name          TEXT NOT NULL,
                category      TEXT NOT NULL,
                stock         BIGINT NOT NULL CHECK (stock >= 0),
                minimum_stock BIGINT NOT NULL CHECK (minimum_stock >= 0),
                price         DOUBLE PRECISION NOT NULL,
                cost          DOUBLE PRECISION NOT NULL,
                supplier      TEXT NOT NULL,
                annual_demand DOUBLE PRECISION NOT NULL,
                created_at    TIMESTAMPTZ NOT NULL DEFAULT now()
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(persistence)?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS movements (
                id          BIGSERIAL PRIMARY KEY,
                product_id  BIGINT NOT NULL,
                kind        TEXT NOT NULL CHECK (kind IN ('entry', 'exit')),
                quantity    BIGINT NOT NULL CHECK (quantity > 0),
                reason      TEXT NOT NULL,
                actor       TEXT NOT NULL,
                occurred_at TIMESTAMPTZ NOT NULL DEFAULT now()
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(persistence)?;

        Ok(())
    }

    async fn select_product_for_update(
        tx: &mut Transaction<'_, Postgres>,
        id: ProductId,
    ) -> EngineResult<Product> {
        let row = sqlx::query("SELECT * FROM products WHERE id = $1 FOR UPDATE")
            .bind(id.as_i64())
            .fetch_optional(&mut **tx)
            .await
            .map_err(persistence)?
            .ok_or_else(|| EngineError::not_found(format!("product {id}")))?;
        product_from_row(&row)
    }

    async fn insert_movement(
        tx: &mut Transaction<'_, Postgres>,
        new: &NewMovement,
    ) -> EngineResult<Movement> {
        let row = sqlx::query(
            r#"
            INSERT INTO movements (product_id, kind, quantity, reason, actor)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, product_id, kind, quantity, reason, actor, occurred_at
            "#,
        )
        .bind(new.product_id.as_i64())
        .bind(new.kind.as_str())
        .bind(i64::from(new.quantity))
        .bind(&new.reason)
        .bind(&new.actor)
        .fetch_one(&mut **tx)
        .await
        .map_err(persistence)?;
        movement_from_row(&row)
    }

    async fn write_product(
        tx: &mut Transaction<'_, Postgres>,
        product: &Product,
    ) -> EngineResult<()> {
        sqlx::query(
            r#"
            UPDATE products
            SET name = $1, category = $2, stock = $3, minimum_stock = $4,
                price = $5, cost = $6, supplier = $7, annual_demand = $8
            WHERE id = $9
            "#,
        )
        .bind(&product.name)
        .bind(&product.category)
        .bind(i64::from(product.stock))
        .bind(i64::from(product.minimum_stock))
        .bind(product.price)
        .bind(product.cost)
        .bind(&product.supplier)
        .bind(product.annual_demand)
        .bind(product.id.as_i64())
        .execute(&mut **tx)
        .await
        .map_err(persistence)?;
        Ok(())
    }
}

#[async_trait]
impl StockStore for PostgresStockStore {
    async fn get_product(&self, id: ProductId) -> EngineResult<Product> {
        let row = sqlx::query("SELECT * FROM products WHERE id = $1")
            .bind(id.as_i64())
            .fetch_optional(&self.pool)
            .await
            .map_err(persistence)?
            .ok_or_else(|| EngineError::not_found(format!("product {id}")))?;
        product_from_row(&row)
    }

    async fn list_products(&self) -> EngineResult<Vec<Product>> {
        let rows = sqlx::query("SELECT * FROM products ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(persistence)?;
        rows.iter().map(product_from_row).collect()
    }

    async fn create_product(&self, new: NewProduct) -> EngineResult<Product> {
        let row = sqlx::query(
            r#"
            INSERT INTO products
                (name, category, stock, minimum_stock, price, cost, supplier, annual_demand)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(&new.name)
        .bind(&new.category)
        .bind(i64::from(new.stock))
        .bind(i64::from(new.minimum_stock))
        .bind(new.price)
        .bind(new.cost)
        .bind(&new.supplier)
        .bind(new.annual_demand)
        .fetch_one(&self.pool)
        .await
        .map_err(persistence)?;
        product_from_row(&row)
    }

    async fn delete_product(&self, id: ProductId) -> EngineResult<()> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(persistence)?;
        if result.rows_affected() == 0 {
            return Err(EngineError::not_found(format!("product {id}")));
        }
        Ok(())
    }

    async fn update_product(
        &self,
        id: ProductId,
        patch: ProductPatch,
        actor: &str,
    ) -> EngineResult<(Product, Option<Movement>)> {
        let mut tx = self.pool.begin().await.map_err(persistence)?;

        let mut product = Self::select_product_for_update(&mut tx, id).await?;
        let previous_stock = product.stock;
        patch.apply_to(&mut product);
        Self::write_product(&mut tx, &product).await?;

        let movement = match adjustment_for_edit(previous_stock, product.stock) {
            Some((kind, quantity)) => Some(
                Self::insert_movement(
                    &mut tx,
                    &NewMovement::edit_adjustment(id, kind, quantity, actor),
                )
                .await?,
            ),
            None => None,
        };

        tx.commit().await.map_err(persistence)?;
        Ok((product, movement))
    }

    async fn apply_movement(&self, movement: NewMovement) -> EngineResult<(Product, Movement)> {
        let mut tx = self.pool.begin().await.map_err(persistence)?;

        let mut product = Self::select_product_for_update(&mut tx, movement.product_id).await?;
        // A rejection drops the transaction before anything is written.
        product.stock = apply_kind(product.stock, movement.kind, movement.quantity)?;

        sqlx::query("UPDATE products SET stock = $1 WHERE id = $2")
            .bind(i64::from(product.stock))
            .bind(product.id.as_i64())
            .execute(&mut *tx)
            .await
            .map_err(persistence)?;
        let recorded = Self::insert_movement(&mut tx, &movement).await?;

        tx.commit().await.map_err(persistence)?;
        Ok((product, recorded))
    }

    async fn list_movements(&self) -> EngineResult<Vec<Movement>> {
        let rows = sqlx::query("SELECT * FROM movements ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(persistence)?;
        rows.iter().map(movement_from_row).collect()
    }
}
