#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use serde_json::Value;
use shopinow::app::build_router;
use shopinow::catalog::{Product, ProductController, ProductFilter, ProductId, ProductService};
use shopinow::{CatalogError, ContainerBuilder, Injectable, Result, async_trait};
use tower::ServiceExt;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    ListAll,
    ListFeatured,
    GetById(ProductId),
    ListByCategory(String),
    Search(String),
    ListFiltered(ProductFilter),
}

/// Canned `ProductService` that records every call it receives.
pub struct RecordingService {
    products: Vec<Product>,
    fail_with_internal: bool,
    calls: Mutex<Vec<Call>>,
}

impl RecordingService {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products,
            fail_with_internal: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail_with_internal: true,
            ..Self::new(Vec::new())
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) -> Result<()> {
        self.calls.lock().unwrap().push(call);
        if self.fail_with_internal {
            return Err(CatalogError::Internal("database unavailable".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ProductService for RecordingService {
    async fn list_all(&self) -> Result<Vec<Product>> {
        self.record(Call::ListAll)?;
        Ok(self.products.clone())
    }

    async fn list_featured(&self) -> Result<Vec<Product>> {
        self.record(Call::ListFeatured)?;
        Ok(self.products.iter().filter(|p| p.featured).cloned().collect())
    }

    async fn get_by_id(&self, id: ProductId) -> Result<Product> {
        self.record(Call::GetById(id))?;
        self.products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| CatalogError::not_found(format!("Product not found with id: {}", id)))
    }

    async fn list_by_category(&self, category: &str) -> Result<Vec<Product>> {
        self.record(Call::ListByCategory(category.to_string()))?;
        Ok(self.products.clone())
    }

    async fn search(&self, query: &str) -> Result<Vec<Product>> {
        self.record(Call::Search(query.to_string()))?;
        Ok(self.products.clone())
    }

    async fn list_filtered(&self, filter: &ProductFilter) -> Result<Vec<Product>> {
        self.record(Call::ListFiltered(filter.clone()))?;
        Ok(self.products.clone())
    }
}

pub struct Harness {
    pub router: Router,
    pub service: Arc<RecordingService>,
}

/// Wire a [`RecordingService`] behind the real controller and router.
pub fn harness(service: RecordingService) -> Harness {
    let mut container = ContainerBuilder::new()
        .register(service)
        .bind::<dyn ProductService, RecordingService, _>(|s| s as Arc<dyn ProductService>)
        .build();
    let controller = ProductController::inject(&container).expect("inject controller");
    container.register(controller);

    Harness {
        router: build_router(&container).expect("build router"),
        service: container.resolve::<RecordingService>().expect("resolve service"),
    }
}

pub fn product(id: i64, name: &str, category: &str, price: f64, featured: bool) -> Product {
    Product {
        id: ProductId(id),
        name: name.to_string(),
        description: format!("{name} description"),
        price,
        category: category.to_string(),
        image_url: None,
        rating: 4.0,
        stock: 5,
        featured,
    }
}

pub fn sample_products() -> Vec<Product> {
    vec![
        product(1, "Trail Shoes", "Footwear", 89.99, true),
        product(2, "Rain Jacket", "Apparel", 10.0, false),
        product(3, "Headlamp", "Gear", 24.5, true),
    ]
}

pub async fn get(router: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request");
    let response = router.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}
