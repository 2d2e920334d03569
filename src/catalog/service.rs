use super::model::{Product, ProductFilter, ProductId};
use super::repository::ProductRepository;
use crate::di::{Container, Injectable};
use crate::error::{CatalogError, Result};
use async_trait::async_trait;
use std::sync::Arc;

/// Product lookup capability the HTTP layer delegates to.
///
/// Implementations own every query policy (matching, ordering, bounds); the
/// controller forwards parameters unchanged and returns results verbatim.
#[async_trait]
pub trait ProductService: Send + Sync {
    async fn list_all(&self) -> Result<Vec<Product>>;

    async fn list_featured(&self) -> Result<Vec<Product>>;

    /// Fails with [`CatalogError::NotFound`] for an unknown id.
    async fn get_by_id(&self, id: ProductId) -> Result<Product>;

    async fn list_by_category(&self, category: &str) -> Result<Vec<Product>>;

    async fn search(&self, query: &str) -> Result<Vec<Product>>;

    async fn list_filtered(&self, filter: &ProductFilter) -> Result<Vec<Product>>;
}

/// Repository-backed [`ProductService`].
///
/// Categories match case-insensitively. Search is a case-insensitive
/// substring match over name, description and category. Price bounds are
/// inclusive and `min_rating` is a floor.
pub struct CatalogProductService {
    repository: Arc<dyn ProductRepository>,
}

impl Injectable for CatalogProductService {
    fn inject(container: &Container) -> Result<Self> {
        Ok(Self {
            repository: container.resolve_trait::<dyn ProductRepository>()?,
        })
    }
}

impl CatalogProductService {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    async fn select<P>(&self, predicate: P) -> Result<Vec<Product>>
    where
        P: Fn(&Product) -> bool + Send,
    {
        let mut products = self.repository.find_all().await?;
        products.retain(|product| predicate(product));
        Ok(products)
    }
}

fn same_category(product: &Product, category: &str) -> bool {
    product.category.eq_ignore_ascii_case(category.trim())
}

fn matches_filter(product: &Product, filter: &ProductFilter) -> bool {
    filter
        .category
        .as_deref()
        .is_none_or(|category| same_category(product, category))
        && filter.min_price.is_none_or(|min| product.price >= min)
        && filter.max_price.is_none_or(|max| product.price <= max)
        && filter.min_rating.is_none_or(|min| product.rating >= min)
}

#[async_trait]
impl ProductService for CatalogProductService {
    async fn list_all(&self) -> Result<Vec<Product>> {
        self.repository.find_all().await
    }

    async fn list_featured(&self) -> Result<Vec<Product>> {
        self.select(|product| product.featured).await
    }

    async fn get_by_id(&self, id: ProductId) -> Result<Product> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| CatalogError::not_found(format!("Product not found with id: {}", id)))
    }

    async fn list_by_category(&self, category: &str) -> Result<Vec<Product>> {
        self.select(|product| same_category(product, category)).await
    }

    async fn search(&self, query: &str) -> Result<Vec<Product>> {
        let needle = query.trim().to_lowercase();
        self.select(|product| {
            [&product.name, &product.description, &product.category]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .await
    }

    async fn list_filtered(&self, filter: &ProductFilter) -> Result<Vec<Product>> {
        if filter.is_unconstrained() {
            return self.list_all().await;
        }
        self.select(|product| matches_filter(product, filter)).await
    }
}
