//! Product field checks, name uniqueness and sale price derivation.
//!
//! Each field check yields at most one message. Messages start with `-` and
//! are concatenated without a separator in a fixed field order.

use std::str::FromStr;

use larder_core::{AppError, AppResult};
use rust_decimal::Decimal;

use crate::formatter::{format_amount, parse_decimal, trim_to_option};
use crate::product::{Allergen, Product, ProductClassification, ProductDraft, ProductType};
use crate::validation::{FieldErrors, TextField};

/// Reported when another product already uses the requested name.
pub const DUPLICATE_PRODUCT_NAME: &str = "Product with matching name already exists.";

const DESCRIPTION_MAX_CHARS: usize = 100;
const NAME_MAX_CHARS: usize = 50;

/// Validates a product draft, reporting every failing field.
#[must_use]
pub fn validate_product(draft: &ProductDraft) -> FieldErrors {
    let mut errors = FieldErrors::new();
    errors.check(description_message(draft));
    errors.check(name_message(draft));
    errors.check(classification_message(draft));
    errors.check(type_message(draft));
    errors.check(cost_message(draft));
    errors.check(markup_message(draft));
    errors.check(ingredients_list_message(draft));
    errors.check(allergen_list_message(draft));
    errors
}

/// Returns the conflict message when `name` matches an existing product, ignoring case.
///
/// Callers editing a product exclude it from `existing` first.
pub fn unique_name_conflict<'a>(
    name: &str,
    existing: impl IntoIterator<Item = &'a Product>,
) -> Option<&'static str> {
    let wanted = name.to_lowercase();
    existing
        .into_iter()
        .any(|product| product.name().to_lowercase() == wanted)
        .then_some(DUPLICATE_PRODUCT_NAME)
}

/// Computes `cost * (1 + markup)` rounded to two places.
///
/// Fails with [`AppError::NumberFormat`] when cost or markup is absent or not
/// numeric, so it is only meaningful on drafts that passed validation.
pub fn calculate_sale_price(draft: &ProductDraft) -> AppResult<Decimal> {
    let cost = required_number(draft.cost.as_deref(), "cost")?;
    let markup = required_number(draft.markup.as_deref(), "markup")?;

    let price = Decimal::ONE
        .checked_add(markup)
        .and_then(|multiplier| cost.checked_mul(multiplier))
        .ok_or_else(|| {
            AppError::NumberFormat(format!(
                "sale price for cost '{cost}' and markup '{markup}' is out of range"
            ))
        })?;

    Ok(format_amount(price))
}

/// Builds the normalized product for a validated draft.
///
/// Cost and markup are rounded to two places and the sale price is derived.
/// Name and description are kept verbatim.
pub fn format_product(draft: ProductDraft) -> AppResult<Product> {
    let sale_price = calculate_sale_price(&draft)?;
    let cost = format_amount(required_number(draft.cost.as_deref(), "cost")?);
    let markup = format_amount(required_number(draft.markup.as_deref(), "markup")?);
    let classification = ProductClassification::from_str(required_text(
        draft.classification.as_ref(),
        "Classification",
    )?)?;
    let product_type =
        ProductType::from_str(required_text(draft.product_type.as_ref(), "Type")?)?;

    let allergen_list = draft
        .allergen_list
        .ok_or_else(|| AppError::Validation("-AllergenList is null.".to_owned()))?
        .iter()
        .map(|allergen| Allergen::from_str(allergen))
        .collect::<AppResult<Vec<_>>>()?;

    let (Some(description), Some(name), Some(ingredients_list)) =
        (draft.description, draft.name, draft.ingredients_list)
    else {
        return Err(AppError::Validation(
            "product is missing required fields".to_owned(),
        ));
    };

    Ok(Product {
        id: draft.id,
        active: draft.active,
        description,
        name,
        vendor_id: trim_to_option(draft.vendor_id),
        ingredients_list,
        classification,
        product_type,
        cost,
        markup,
        allergen_list,
        sale_price,
    })
}

fn required_number(value: Option<&str>, field: &str) -> AppResult<Decimal> {
    let value = value.ok_or_else(|| AppError::NumberFormat(format!("{field} is missing")))?;
    parse_decimal(value)
}

fn required_text<'a>(value: Option<&'a String>, field: &str) -> AppResult<&'a str> {
    value
        .map(String::as_str)
        .ok_or_else(|| AppError::Validation(format!("-{field} is null.")))
}

fn description_message(draft: &ProductDraft) -> Option<&'static str> {
    match TextField::of(draft.description.as_ref()) {
        TextField::Null => Some("-Description is null."),
        TextField::Empty => Some("-Description is empty."),
        TextField::Present(text) if text.chars().count() >= DESCRIPTION_MAX_CHARS => {
            Some("-Description must be less than 100 characters.")
        }
        TextField::Present(_) => None,
    }
}

fn name_message(draft: &ProductDraft) -> Option<&'static str> {
    match TextField::of(draft.name.as_ref()) {
        TextField::Null => Some("-Name is null."),
        TextField::Empty => Some("-Name is empty."),
        TextField::Present(text) if text.chars().count() >= NAME_MAX_CHARS => {
            Some("-Name must be less than 50 characters.")
        }
        TextField::Present(_) => None,
    }
}

fn classification_message(draft: &ProductDraft) -> Option<&'static str> {
    match TextField::of(draft.classification.as_ref()) {
        TextField::Null => Some("-Classification is null."),
        TextField::Empty => Some("-Classification is empty."),
        TextField::Present(text) => ProductClassification::from_str(text)
            .is_err()
            .then_some("-Classification must be Drink or Baked Good."),
    }
}

fn type_message(draft: &ProductDraft) -> Option<&'static str> {
    match TextField::of(draft.product_type.as_ref()) {
        TextField::Null => Some("-Type is null."),
        TextField::Empty => Some("-Type is empty."),
        TextField::Present(text) => ProductType::from_str(text)
            .is_err()
            .then_some("-Type must be Coffee, Tea, or Soda."),
    }
}

fn cost_message(draft: &ProductDraft) -> Option<&'static str> {
    match TextField::of(draft.cost.as_ref()) {
        TextField::Null => Some("-Cost is null."),
        TextField::Empty => Some("-Cost is empty."),
        TextField::Present(text) => {
            (!is_non_negative_number(text)).then_some("-Cost must be a number.")
        }
    }
}

fn markup_message(draft: &ProductDraft) -> Option<&'static str> {
    match TextField::of(draft.markup.as_ref()) {
        TextField::Null => Some("-Markup is null."),
        TextField::Empty => Some("-Markup is empty."),
        TextField::Present(text) => {
            (!is_non_negative_number(text)).then_some("-Markup must be a number.")
        }
    }
}

fn ingredients_list_message(draft: &ProductDraft) -> Option<&'static str> {
    match draft.ingredients_list.as_deref() {
        None => Some("-IngredientsList is null."),
        Some([]) => Some("-IngredientsList is empty."),
        Some(_) => None,
    }
}

fn allergen_list_message(draft: &ProductDraft) -> Option<&'static str> {
    let Some(allergens) = draft.allergen_list.as_deref() else {
        return Some("-AllergenList is null.");
    };

    allergens
        .iter()
        .any(|allergen| Allergen::from_str(allergen).is_err())
        .then_some("-AllergenList must contain: Diary, Soy, Gluten, or Nuts.")
}

fn is_non_negative_number(text: &str) -> bool {
    parse_decimal(text).is_ok_and(|value| value >= Decimal::ZERO)
}

#[cfg(test)]
mod tests;
