//! Category Service

use crate::api;
use crate::error::ApiError;
use crate::models::{Category, CategoryFilterDto, CreateCategoryDto, UpdateCategoryDto};

pub async fn get_all_categories(
    filter: Option<&CategoryFilterDto>,
) -> Result<Vec<Category>, ApiError> {
    let pairs = filter.map(CategoryFilterDto::to_query_pairs).unwrap_or_default();
    if pairs.is_empty() {
        api::get("/categories").await
    } else {
        api::get_query("/categories", &pairs).await
    }
}

pub async fn get_category_by_id(id: &str) -> Result<Category, ApiError> {
    api::get(&format!("/categories/{}", id)).await
}

pub async fn create_category(data: &CreateCategoryDto) -> Result<Category, ApiError> {
    api::post("/categories", data).await
}

pub async fn update_category(id: &str, data: &UpdateCategoryDto) -> Result<Category, ApiError> {
    api::patch(&format!("/categories/{}", id), data).await
}

pub async fn delete_category(id: &str) -> Result<(), ApiError> {
    api::delete(&format!("/categories/{}", id)).await
}
