//! Serialize/deserialize pair for the selection slot.
//!
//! The saved form is an ordered list of primitives: `[name, description,
//! price]` for a selection, or the empty list when nothing is selected.
//! Shape checks operate on [`Primitive`] values only, so any storage format
//! that can carry a list of primitives reuses them.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::catalog::Product;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Primitive {
    Bool(bool),
    Number(f64),
    Text(String),
    Null,
}

impl Primitive {
    fn kind(&self) -> &'static str {
        match self {
            Primitive::Bool(_) => "bool",
            Primitive::Number(_) => "number",
            Primitive::Text(_) => "text",
            Primitive::Null => "null",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SerializedForm(Vec<Primitive>);

impl SerializedForm {
    /// The "nothing selected" marker.
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn fields(&self) -> &[Primitive] {
        &self.0
    }
}

impl From<Vec<Primitive>> for SerializedForm {
    fn from(fields: Vec<Primitive>) -> Self {
        Self(fields)
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShapeError {
    #[error("expected 3 fields, found {0}")]
    WrongArity(usize),

    #[error("field {index} must be {expected}, found {found}")]
    WrongKind {
        index: usize,
        expected: &'static str,
        found: &'static str,
    },

    #[error("price is not a finite number")]
    NonFinitePrice,
}

pub fn serialize(selected: Option<&Product>) -> SerializedForm {
    match selected {
        Some(product) => SerializedForm(vec![
            Primitive::Text(product.name.clone()),
            Primitive::Text(product.description.clone()),
            Primitive::Number(product.price),
        ]),
        None => SerializedForm::empty(),
    }
}

/// Restores a selection. Malformed input yields `None`, never an error.
pub fn deserialize(form: &SerializedForm) -> Option<Product> {
    if form.is_empty() {
        return None;
    }
    match validate_fields(form.fields()) {
        Ok(product) => Some(product),
        Err(err) => {
            warn!(error = %err, "discarding malformed saved selection");
            None
        }
    }
}

pub fn validate_fields(fields: &[Primitive]) -> Result<Product, ShapeError> {
    let [name, description, price] = fields else {
        return Err(ShapeError::WrongArity(fields.len()));
    };
    let name = expect_text(0, name)?;
    let description = expect_text(1, description)?;
    let price = match price {
        Primitive::Number(value) if value.is_finite() => *value,
        Primitive::Number(_) => return Err(ShapeError::NonFinitePrice),
        other => {
            return Err(ShapeError::WrongKind {
                index: 2,
                expected: "number",
                found: other.kind(),
            })
        }
    };
    Ok(Product::new(name, description, price))
}

fn expect_text(index: usize, field: &Primitive) -> Result<&str, ShapeError> {
    match field {
        Primitive::Text(value) => Ok(value.as_str()),
        other => Err(ShapeError::WrongKind {
            index,
            expected: "text",
            found: other.kind(),
        }),
    }
}
