use serde::Deserialize;

use restock_inventory::{MovementKind, NewProduct, ProductPatch};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub stock: u32,
    #[serde(default)]
    pub minimum_stock: u32,
    pub price: f64,
    pub cost: f64,
    pub supplier: String,
    pub annual_demand: f64,
}

impl From<CreateProductRequest> for NewProduct {
    fn from(req: CreateProductRequest) -> Self {
        NewProduct {
            name: req.name,
            category: req.category,
            stock: req.stock,
            minimum_stock: req.minimum_stock,
            price: req.price,
            cost: req.cost,
            supplier: req.supplier,
            annual_demand: req.annual_demand,
        }
    }
}

/// Partial product edit. Unknown fields are rejected outright; only the
/// enumerated ones are editable.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub category: Option<String>,
    pub stock: Option<u32>,
    pub minimum_stock: Option<u32>,
    pub price: Option<f64>,
    pub cost: Option<f64>,
    pub supplier: Option<String>,
    pub annual_demand: Option<f64>,
    /// Identity recorded on the synthetic movement of a stock edit.
    pub actor: Option<String>,
}

impl UpdateProductRequest {
    pub fn into_patch(self) -> (ProductPatch, String) {
        let actor = self.actor.unwrap_or_else(|| "Admin".to_string());
        (
            ProductPatch {
                name: self.name,
                category: self.category,
                stock: self.stock,
                minimum_stock: self.minimum_stock,
                price: self.price,
                cost: self.cost,
                supplier: self.supplier,
                annual_demand: self.annual_demand,
            },
            actor,
        )
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateMovementRequest {
    pub product_id: i64,
    pub kind: MovementKind,
    pub quantity: u32,
    pub reason: Option<String>,
    pub actor: Option<String>,
}

/// Body of `POST /products/:id/order`. Without a quantity the advisor's
/// recommendation is used.
#[derive(Debug, Default, Deserialize)]
pub struct OrderRequest {
    pub quantity: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct BasicEoqRequest {
    pub demand: f64,
    pub order_cost: f64,
    pub holding_cost: f64,
}

#[derive(Debug, Deserialize)]
pub struct ShortageEoqRequest {
    pub demand: f64,
    pub order_cost: f64,
    pub holding_cost: f64,
    pub shortage_cost: f64,
}
