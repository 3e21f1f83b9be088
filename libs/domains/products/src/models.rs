use axum_helpers::validation::{ErrorBag, FieldError, ValidateChain};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Validation messages, in the order the rules are declared.
pub mod messages {
    pub const NAME_EMPTY: &str = "name cannot be empty";
    pub const PRICE_NOT_NUMERIC: &str = "price must be a number";
    pub const PRICE_EMPTY: &str = "price cannot be empty";
    pub const PRICE_NOT_POSITIVE: &str = "price must be greater than 0";
    pub const AVAILABILITY_NOT_BOOLEAN: &str = "availability must be a boolean";
}

/// Product entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Unique identifier, assigned by the store
    pub id: i32,
    /// Product name, never empty
    pub name: String,
    /// Unit price, always greater than 0
    pub price: f64,
    /// Whether the product is currently available
    pub availability: bool,
}

/// Success envelope wrapping every 2xx payload: `{"data": ...}`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Data<T> {
    pub data: T,
}

impl<T> Data<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Validated input for creating a product
#[derive(Debug, Clone, PartialEq)]
pub struct CreateProduct {
    pub name: String,
    pub price: f64,
}

/// Validated input for a full update
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateProduct {
    pub name: String,
    pub price: f64,
    pub availability: bool,
}

/// Raw create request body.
///
/// Fields are kept loosely typed so that a wrong type (a numeric name, a
/// boolean price) lands in the validation chain as a field error instead of
/// failing deserialization outright.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateProductPayload {
    /// Product name, required and non-empty
    #[schema(value_type = String, example = "Mouse - Gamer")]
    pub name: Option<Value>,
    /// Unit price, required and greater than 0
    #[schema(value_type = f64, example = 50.0)]
    pub price: Option<Value>,
}

/// Raw full-update request body.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateProductPayload {
    /// Product name, required and non-empty
    #[schema(value_type = String, example = "Mouse - Gamer")]
    pub name: Option<Value>,
    /// Unit price, required and greater than 0
    #[schema(value_type = f64, example = 50.0)]
    pub price: Option<Value>,
    /// Availability flag, required
    #[schema(value_type = bool, example = true)]
    pub availability: Option<Value>,
}

/// Non-empty string content of a field, if it holds one.
fn string_field(value: &Option<Value>) -> Option<&str> {
    match value {
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then_some(trimmed)
        }
        _ => None,
    }
}

/// Numeric content of a field: a JSON number, or a string holding one.
fn numeric_field(value: &Option<Value>) -> Option<f64> {
    match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// Whether the field is present with non-empty content.
fn present_field(value: &Option<Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.trim().is_empty(),
        Some(_) => true,
    }
}

/// Boolean content of a field, if it holds one.
fn boolean_field(value: &Option<Value>) -> Option<bool> {
    match value {
        Some(Value::Bool(b)) => Some(*b),
        _ => None,
    }
}

/// Run the shared name/price rules, pushing failures onto `bag` in
/// declaration order. A single field may fail several rules at once.
fn check_name_and_price(
    bag: &mut ErrorBag,
    name: &Option<Value>,
    price: &Option<Value>,
) -> (Option<String>, Option<f64>) {
    let name_value = string_field(name).map(str::to_string);
    bag.check("name", name_value.is_some(), messages::NAME_EMPTY);

    let price_value = numeric_field(price);
    bag.check("price", price_value.is_some(), messages::PRICE_NOT_NUMERIC);
    bag.check("price", present_field(price), messages::PRICE_EMPTY);
    bag.check(
        "price",
        price_value.is_some_and(|p| p > 0.0),
        messages::PRICE_NOT_POSITIVE,
    );

    (name_value, price_value)
}

impl ValidateChain for CreateProductPayload {
    type Valid = CreateProduct;

    fn validate(self) -> Result<CreateProduct, Vec<FieldError>> {
        let mut bag = ErrorBag::new();
        let (name, price) = check_name_and_price(&mut bag, &self.name, &self.price);
        bag.into_result()?;

        Ok(CreateProduct {
            name: name.unwrap_or_default(),
            price: price.unwrap_or_default(),
        })
    }
}

impl ValidateChain for UpdateProductPayload {
    type Valid = UpdateProduct;

    fn validate(self) -> Result<UpdateProduct, Vec<FieldError>> {
        let mut bag = ErrorBag::new();
        let (name, price) = check_name_and_price(&mut bag, &self.name, &self.price);

        let availability = boolean_field(&self.availability);
        bag.check(
            "availability",
            availability.is_some(),
            messages::AVAILABILITY_NOT_BOOLEAN,
        );
        bag.into_result()?;

        Ok(UpdateProduct {
            name: name.unwrap_or_default(),
            price: price.unwrap_or_default(),
            availability: availability.unwrap_or_default(),
        })
    }
}
