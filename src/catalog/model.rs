use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Integral catalog key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub i64);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Product record exposed at the API boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub stock: i32,
    #[serde(default)]
    pub featured: bool,
}

/// Optional narrowing criteria for the filtered listing.
///
/// A `None` field places no constraint on that dimension. Present but blank
/// query values (`minPrice=`) bind as `None`; other text binds as sent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFilter {
    #[serde(default, deserialize_with = "blank_as_none")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "parse_non_blank")]
    pub min_price: Option<f64>,
    #[serde(default, deserialize_with = "parse_non_blank")]
    pub max_price: Option<f64>,
    #[serde(default, deserialize_with = "parse_non_blank")]
    pub min_rating: Option<f64>,
}

impl ProductFilter {
    pub fn is_unconstrained(&self) -> bool {
        self.category.is_none()
            && self.min_price.is_none()
            && self.max_price.is_none()
            && self.min_rating.is_none()
    }
}

/// Query string of the search endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|value| !value.trim().is_empty()))
}

fn parse_non_blank<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    match blank_as_none(deserializer)? {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_product_wire_format() {
        let product = Product {
            id: ProductId(7),
            name: "Desk Lamp".into(),
            description: "Warm light".into(),
            price: 24.5,
            category: "Home".into(),
            image_url: None,
            rating: 4.2,
            stock: 12,
            featured: true,
        };
        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["featured"], true);
        assert!(value.get("imageUrl").is_none());
    }

    #[test]
    fn test_product_defaults_optional_fields() {
        let product: Product = serde_json::from_value(json!({
            "id": 1,
            "name": "Mug",
            "price": 8.0,
            "category": "Kitchen",
            "imageUrl": "https://cdn.example.com/mug.png"
        }))
        .unwrap();
        assert_eq!(product.stock, 0);
        assert!(!product.featured);
        assert_eq!(
            product.image_url.as_deref(),
            Some("https://cdn.example.com/mug.png")
        );
    }

    #[test]
    fn test_filter_from_query_string() {
        let filter: ProductFilter =
            parse_filter("category=Books&minPrice=10&maxPrice=10.5&minRating=4");
        assert_eq!(filter.category.as_deref(), Some("Books"));
        assert_eq!(filter.min_price, Some(10.0));
        assert_eq!(filter.max_price, Some(10.5));
        assert_eq!(filter.min_rating, Some(4.0));
    }

    #[test]
    fn test_blank_filter_values_are_absent() {
        let filter: ProductFilter = parse_filter("category=&minPrice=&maxPrice=%20");
        assert!(filter.is_unconstrained());
        assert_eq!(filter, ProductFilter::default());
    }

    #[test]
    fn test_category_binds_untrimmed() {
        let filter: ProductFilter = parse_filter("category=%20Gear&minRating=%204");
        assert_eq!(filter.category.as_deref(), Some(" Gear"));
        assert_eq!(filter.min_rating, Some(4.0));
    }

    #[test]
    fn test_zero_is_not_absent() {
        let filter: ProductFilter = parse_filter("minPrice=0");
        assert_eq!(filter.min_price, Some(0.0));
        assert!(!filter.is_unconstrained());
    }

    fn parse_filter(query: &str) -> ProductFilter {
        let uri: axum::http::Uri = format!("/api/products/filter?{query}").parse().unwrap();
        axum::extract::Query::<ProductFilter>::try_from_uri(&uri)
            .unwrap()
            .0
    }
}
