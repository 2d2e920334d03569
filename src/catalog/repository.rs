use super::model::{Product, ProductId};
use crate::error::{CatalogError, Result};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::Path;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Product>>;
    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>>;
}

/// Immutable, id-ordered product snapshot.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    products: BTreeMap<ProductId, Product>,
}

impl InMemoryProductRepository {
    /// Build a snapshot, rejecting duplicate ids.
    pub fn new(products: Vec<Product>) -> Result<Self> {
        let mut by_id = BTreeMap::new();
        for product in products {
            let id = product.id;
            if by_id.insert(id, product).is_some() {
                return Err(CatalogError::validation(format!(
                    "Duplicate product id {}",
                    id
                )));
            }
        }
        Ok(Self { products: by_id })
    }

    /// Load a JSON array of products.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let seed_error = |message: String| CatalogError::SeedLoad {
            path: path.display().to_string(),
            message,
        };

        let raw = std::fs::read_to_string(path).map_err(|e| seed_error(e.to_string()))?;
        let products: Vec<Product> =
            serde_json::from_str(&raw).map_err(|e| seed_error(e.to_string()))?;
        let repository = Self::new(products).map_err(|e| seed_error(e.to_string()))?;

        tracing::info!(
            path = %path.display(),
            count = repository.len(),
            "loaded catalog seed"
        );
        Ok(repository)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_all(&self) -> Result<Vec<Product>> {
        Ok(self.products.values().cloned().collect())
    }

    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>> {
        Ok(self.products.get(&id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn product(id: i64, name: &str) -> Product {
        Product {
            id: ProductId(id),
            name: name.to_string(),
            description: String::new(),
            price: 1.0,
            category: "Misc".to_string(),
            image_url: None,
            rating: 0.0,
            stock: 0,
            featured: false,
        }
    }

    #[tokio::test]
    async fn test_find_all_is_ordered_by_id() {
        let repo = InMemoryProductRepository::new(vec![
            product(3, "c"),
            product(1, "a"),
            product(2, "b"),
        ])
        .unwrap();
        let ids: Vec<i64> = repo
            .find_all()
            .await
            .unwrap()
            .iter()
            .map(|p| p.id.0)
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let repo = InMemoryProductRepository::new(vec![product(5, "five")]).unwrap();
        assert_eq!(
            repo.find_by_id(ProductId(5)).await.unwrap().unwrap().name,
            "five"
        );
        assert!(repo.find_by_id(ProductId(6)).await.unwrap().is_none());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let err = InMemoryProductRepository::new(vec![product(1, "a"), product(1, "b")])
            .unwrap_err();
        assert!(matches!(err, CatalogError::Validation(_)));
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": 1, "name": "Mug", "price": 8.0, "category": "Kitchen"}}]"#
        )
        .unwrap();

        let repo = InMemoryProductRepository::from_json_file(file.path()).unwrap();
        assert_eq!(repo.len(), 1);
        assert!(!repo.is_empty());
    }

    #[test]
    fn test_empty_seed_is_allowed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[]").unwrap();

        let repo = InMemoryProductRepository::from_json_file(file.path()).unwrap();
        assert!(repo.is_empty());
        assert!(InMemoryProductRepository::default().is_empty());
    }

    #[test]
    fn test_from_json_file_reports_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = InMemoryProductRepository::from_json_file(file.path()).unwrap_err();
        match err {
            CatalogError::SeedLoad { path, .. } => {
                assert_eq!(path, file.path().display().to_string())
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_seed_file() {
        let err =
            InMemoryProductRepository::from_json_file("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, CatalogError::SeedLoad { .. }));
    }
}
