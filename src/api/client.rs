//! Reqwest-backed implementation of the foods REST contract.

use async_trait::async_trait;
use reqwest::StatusCode;

use super::{ApiError, CreateFoodArgs, FoodApi, FoodRecord};

/// HTTP client for the foods backend.
#[derive(Debug, Clone)]
pub struct FoodApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl FoodApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn foods_url(&self) -> String {
        format!("{}/foods", self.base_url)
    }

    fn food_url(&self, id: i64) -> String {
        format!("{}/foods/{}", self.base_url, id)
    }

    fn check(operation: &'static str, status: StatusCode) -> Result<(), ApiError> {
        if status.is_success() {
            Ok(())
        } else {
            Err(ApiError::Status { operation, status })
        }
    }
}

#[async_trait]
impl FoodApi for FoodApiClient {
    async fn list_foods(&self) -> Result<Vec<FoodRecord>, ApiError> {
        let response = self.http.get(self.foods_url()).send().await?;
        Self::check("list", response.status())?;
        Ok(response.json().await?)
    }

    async fn create_food(&self, args: &CreateFoodArgs) -> Result<FoodRecord, ApiError> {
        let response = self.http.post(self.foods_url()).json(args).send().await?;
        Self::check("create", response.status())?;
        Ok(response.json().await?)
    }

    async fn update_food(&self, id: i64, food: &FoodRecord) -> Result<FoodRecord, ApiError> {
        let response = self.http.put(self.food_url(id)).json(food).send().await?;
        Self::check("update", response.status())?;
        Ok(response.json().await?)
    }

    async fn delete_food(&self, id: i64) -> Result<(), ApiError> {
        let response = self.http.delete(self.food_url(id)).send().await?;
        Self::check("delete", response.status())
    }
}
