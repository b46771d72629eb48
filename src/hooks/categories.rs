//! Category Hooks

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::cache;
use crate::error::{format_api_error, ApiError};
use crate::models::{Category, CategoryFilterDto, CreateCategoryDto, UpdateCategoryDto};
use crate::services::category as category_service;

#[derive(Clone, Copy)]
pub struct CategoriesHandle {
    pub categories: ReadSignal<Vec<Category>>,
    set_categories: WriteSignal<Vec<Category>>,
    pub is_loading: ReadSignal<bool>,
    pub error: ReadSignal<Option<String>>,
    set_reload: WriteSignal<u32>,
}

pub fn use_categories(filter: Signal<CategoryFilterDto>) -> CategoriesHandle {
    let (categories, set_categories) = signal(Vec::<Category>::new());
    let (is_loading, set_is_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);
    let (reload, set_reload) = signal(0u32);

    let filter = Memo::new(move |_| filter.get());
    let fetch_seq = StoredValue::new(0u64);

    Effect::new(move |_| {
        let current = filter.get();
        let _ = reload.get();
        let seq = fetch_seq.get_value() + 1;
        fetch_seq.set_value(seq);
        set_is_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            let result = category_service::get_all_categories(Some(&current)).await;
            if fetch_seq.get_value() != seq {
                return;
            }
            match result {
                Ok(data) => set_categories.set(data),
                Err(err) => set_error.set(Some(format_api_error(&err))),
            }
            set_is_loading.set(false);
        });
    });

    CategoriesHandle { categories, set_categories, is_loading, error, set_reload }
}

impl CategoriesHandle {
    pub async fn add_category(self, data: &CreateCategoryDto) -> Result<Category, ApiError> {
        let created = category_service::create_category(data).await?;
        self.set_categories.update(|categories| cache::prepend(categories, created.clone()));
        Ok(created)
    }

    pub async fn modify_category(
        self,
        id: &str,
        data: &UpdateCategoryDto,
    ) -> Result<Category, ApiError> {
        let updated = category_service::update_category(id, data).await?;
        self.set_categories
            .update(|categories| cache::replace_by_id(categories, updated.clone()));
        Ok(updated)
    }

    /// Deleting a category does not cascade: tasks keep their dangling
    /// reference until the server says otherwise.
    pub async fn remove_category(self, id: &str) -> Result<(), ApiError> {
        category_service::delete_category(id).await?;
        self.set_categories.update(|categories| cache::remove_by_id(categories, id));
        Ok(())
    }

    pub fn refetch(&self) {
        self.set_reload.update(|version| *version += 1);
    }
}

#[derive(Clone, Copy)]
pub struct CategoryHandle {
    pub category: ReadSignal<Option<Category>>,
    pub is_loading: ReadSignal<bool>,
    pub error: ReadSignal<Option<String>>,
}

pub fn use_category(id: Signal<String>) -> CategoryHandle {
    let (category, set_category) = signal(None::<Category>);
    let (is_loading, set_is_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);

    let id = Memo::new(move |_| id.get());

    Effect::new(move |_| {
        let current = id.get();
        if current.is_empty() {
            return;
        }
        set_is_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match category_service::get_category_by_id(&current).await {
                Ok(data) => set_category.set(Some(data)),
                Err(err) => set_error.set(Some(format_api_error(&err))),
            }
            set_is_loading.set(false);
        });
    });

    CategoryHandle { category, is_loading, error }
}
