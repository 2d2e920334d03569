use crate::catalog::ProductId;
use crate::pipe::{Pipe, PipeError, PipeResult};
use async_trait::async_trait;

/// A pipe that parses a path segment into a [`ProductId`]
#[derive(Default)]
pub struct ParseIdPipe;

#[async_trait]
impl Pipe for ParseIdPipe {
    type Input = String;
    type Output = ProductId;

    async fn transform(&self, input: String) -> PipeResult<ProductId> {
        input
            .parse::<i64>()
            .map(ProductId)
            .map_err(|_| PipeError::Validation(format!("Invalid product id '{}'", input)))
    }
}

/// A pipe that rejects missing or blank text and passes the rest through as sent
pub struct RequiredTextPipe {
    field: &'static str,
}

impl RequiredTextPipe {
    pub fn new(field: &'static str) -> Self {
        Self { field }
    }
}

#[async_trait]
impl Pipe for RequiredTextPipe {
    type Input = Option<String>;
    type Output = String;

    async fn transform(&self, input: Option<String>) -> PipeResult<String> {
        match input {
            Some(text) if !text.trim().is_empty() => Ok(text),
            Some(_) => Err(PipeError::Validation(format!(
                "Parameter '{}' must not be blank",
                self.field
            ))),
            None => Err(PipeError::Validation(format!(
                "Required parameter '{}' is missing",
                self.field
            ))),
        }
    }
}
