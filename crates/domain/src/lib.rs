//! Domain entities, field formatting and validation rules.

#![forbid(unsafe_code)]

mod formatter;
mod ingredient;
mod product;
mod product_validation;
mod validation;

pub use formatter::{
    DECIMAL_PLACES, format_amount, format_dollar_value, parse_decimal, trim_to_option, uppercase,
};
pub use ingredient::{
    INGREDIENT_ERROR_SEPARATOR, Ingredient, IngredientDraft, IngredientId, format_ingredient,
    validate_ingredient,
};
pub use product::{Allergen, Product, ProductClassification, ProductDraft, ProductId, ProductType};
pub use product_validation::{
    DUPLICATE_PRODUCT_NAME, calculate_sale_price, format_product, unique_name_conflict,
    validate_product,
};
pub use validation::FieldErrors;
