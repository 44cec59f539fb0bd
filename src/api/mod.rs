//! Data models and the backend trait for the foods REST API.
//!
//! The [`FoodApi`] trait is the seam between the dashboard and the network:
//! the real implementation lives in [`client`], tests substitute a simulated
//! backend.

pub mod client;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub use client::FoodApiClient;

/// A food record as stored by the backend.
///
/// `id` is assigned by the server on creation and never changes; every other
/// field is mutable through the update endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodRecord {
    pub id: i64,
    pub name: String,
    pub image: String,
    pub price: f64,
    pub available: bool,
}

/// A candidate record for creation. Carries no id; the server assigns one.
///
/// The `available` field holds whatever the form produced, but the create
/// operation always sends `true` to the backend regardless.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateFoodArgs {
    pub name: String,
    pub image: String,
    pub price: f64,
    pub available: bool,
}

/// A partial record carrying the fields to change on an existing food.
///
/// An `id` present here is ignored: updates are always keyed by the editing
/// target's original identifier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateFoodArgs {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub image: Option<String>,
    pub price: Option<f64>,
    pub available: Option<bool>,
}

impl UpdateFoodArgs {
    /// Merge this partial onto `current`, partial fields taking precedence.
    /// The result keeps `current.id` unconditionally.
    pub fn merge_onto(&self, current: &FoodRecord) -> FoodRecord {
        FoodRecord {
            id: current.id,
            name: self.name.clone().unwrap_or_else(|| current.name.clone()),
            image: self.image.clone().unwrap_or_else(|| current.image.clone()),
            price: self.price.unwrap_or(current.price),
            available: self.available.unwrap_or(current.available),
        }
    }
}

/// Errors produced by the foods backend client.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("backend returned status {status} for {operation}")]
    Status {
        operation: &'static str,
        status: reqwest::StatusCode,
    },
    #[error("{0}")]
    Backend(String),
}

/// The foods backend contract.
///
/// | operation | method | path        |
/// |-----------|--------|-------------|
/// | list      | GET    | /foods      |
/// | create    | POST   | /foods      |
/// | update    | PUT    | /foods/{id} |
/// | delete    | DELETE | /foods/{id} |
#[async_trait]
pub trait FoodApi: Send + Sync {
    /// Fetch the full collection, in server order.
    async fn list_foods(&self) -> Result<Vec<FoodRecord>, ApiError>;

    /// Create a food; the response carries the server-assigned id.
    async fn create_food(&self, args: &CreateFoodArgs) -> Result<FoodRecord, ApiError>;

    /// Replace the record with the given id; the response is the updated
    /// server representation.
    async fn update_food(&self, id: i64, food: &FoodRecord) -> Result<FoodRecord, ApiError>;

    /// Delete the record with the given id. The response body is ignored.
    async fn delete_food(&self, id: i64) -> Result<(), ApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_args_serialize_to_the_wire_shape() {
        let args = CreateFoodArgs {
            name: "Pie".to_string(),
            image: "pie.png".to_string(),
            price: 5.5,
            available: true,
        };

        let value = serde_json::to_value(&args).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "name": "Pie",
                "image": "pie.png",
                "price": 5.5,
                "available": true,
            })
        );
    }

    #[test]
    fn food_record_parses_the_backend_shape() {
        let body = r#"{"id":3,"name":"Cake","image":"cake.png","price":10,"available":false}"#;
        let record: FoodRecord = serde_json::from_str(body).unwrap();

        assert_eq!(
            record,
            FoodRecord {
                id: 3,
                name: "Cake".to_string(),
                image: "cake.png".to_string(),
                price: 10.0,
                available: false,
            }
        );
    }
}
