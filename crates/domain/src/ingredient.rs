use std::fmt::{Display, Formatter};

use larder_core::{AppError, AppResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::formatter::{format_amount, format_dollar_value, parse_decimal, uppercase};
use crate::validation::{FieldErrors, TextField};

/// Separator used when ingredient field errors are reported as one message.
pub const INGREDIENT_ERROR_SEPARATOR: &str = ", ";

/// Storage-assigned ingredient identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct IngredientId(i64);

impl IngredientId {
    /// Wraps a raw identifier value.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub fn as_i64(self) -> i64 {
        self.0
    }
}

impl Display for IngredientId {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// Ingredient candidate as supplied by a caller, before validation.
///
/// Absent fields are `None`; numeric fields keep their raw text so that
/// non-numeric input can be reported instead of rejected at decode time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngredientDraft {
    /// Identifier requested by the caller, if any.
    pub id: Option<IngredientId>,
    /// Whether the ingredient is in use.
    pub active: bool,
    /// Display name.
    pub name: Option<String>,
    /// Purchasing cost as decimal text.
    pub purchasing_cost: Option<String>,
    /// Purchased amount as decimal text.
    pub amount: Option<String>,
    /// Unit the amount is measured in.
    pub unit_of_measure: Option<String>,
    /// Free-form allergen labels.
    pub allergens: Vec<String>,
}

/// Validated ingredient with normalized fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    id: Option<IngredientId>,
    active: bool,
    name: String,
    purchasing_cost: Decimal,
    amount: Decimal,
    unit_of_measure: String,
    allergens: Vec<String>,
}

impl Ingredient {
    /// Returns the storage identifier, `None` until first save.
    #[must_use]
    pub fn id(&self) -> Option<IngredientId> {
        self.id
    }

    /// Returns whether the ingredient is active.
    #[must_use]
    pub fn active(&self) -> bool {
        self.active
    }

    /// Returns the ingredient name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns the purchasing cost rounded to two places.
    #[must_use]
    pub fn purchasing_cost(&self) -> Decimal {
        self.purchasing_cost
    }

    /// Returns the amount rounded to two places.
    #[must_use]
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the upper-cased unit of measure.
    #[must_use]
    pub fn unit_of_measure(&self) -> &str {
        self.unit_of_measure.as_str()
    }

    /// Returns allergen labels in caller order.
    #[must_use]
    pub fn allergens(&self) -> &[String] {
        self.allergens.as_slice()
    }

    /// Returns the same ingredient bound to the given identifier.
    #[must_use]
    pub fn with_id(mut self, id: IngredientId) -> Self {
        self.id = Some(id);
        self
    }
}

impl TryFrom<IngredientDraft> for Ingredient {
    type Error = AppError;

    fn try_from(draft: IngredientDraft) -> AppResult<Self> {
        let errors = validate_ingredient(&draft);
        if !errors.is_empty() {
            return Err(AppError::Validation(
                errors.joined(INGREDIENT_ERROR_SEPARATOR),
            ));
        }

        let (Some(name), Some(unit_of_measure), Some(purchasing_cost), Some(amount)) = (
            draft.name,
            draft.unit_of_measure,
            draft.purchasing_cost,
            draft.amount,
        ) else {
            return Err(AppError::Validation(
                "ingredient is missing required fields".to_owned(),
            ));
        };

        Ok(Self {
            id: draft.id,
            active: draft.active,
            name: name.trim().to_owned(),
            purchasing_cost: format_amount(parse_decimal(purchasing_cost.as_str())?),
            amount: format_amount(parse_decimal(amount.as_str())?),
            unit_of_measure: uppercase(unit_of_measure.trim()),
            allergens: draft.allergens,
        })
    }
}

/// Normalizes the fields of an ingredient draft.
///
/// Trims text, upper-cases the unit of measure and rounds numeric text that
/// parses. Values that do not parse are left untouched for validation to report.
#[must_use]
pub fn format_ingredient(mut draft: IngredientDraft) -> IngredientDraft {
    draft.name = draft.name.map(|name| name.trim().to_owned());
    draft.unit_of_measure = draft
        .unit_of_measure
        .map(|unit| uppercase(unit.trim()));
    draft.purchasing_cost = draft.purchasing_cost.map(format_numeric_text);
    draft.amount = draft.amount.map(format_numeric_text);
    draft
}

/// Validates an ingredient draft, reporting every failing field.
#[must_use]
pub fn validate_ingredient(draft: &IngredientDraft) -> FieldErrors {
    let mut errors = FieldErrors::new();
    errors.check(text_message("Name", draft.name.as_ref()));
    errors.check(text_message(
        "Unit of measure",
        draft.unit_of_measure.as_ref(),
    ));
    errors.check(numeric_message(
        "Purchasing cost",
        draft.purchasing_cost.as_deref(),
    ));
    errors.check(numeric_message("Amount", draft.amount.as_deref()));
    errors
}

fn format_numeric_text(value: String) -> String {
    format_dollar_value(value.as_str()).unwrap_or(value)
}

fn text_message(label: &str, value: Option<&String>) -> Option<String> {
    match TextField::of(value) {
        TextField::Null => Some(format!("{label} is null.")),
        TextField::Empty => Some(format!("{label} is empty.")),
        TextField::Present(_) => None,
    }
}

fn numeric_message(label: &str, value: Option<&str>) -> Option<String> {
    let Some(value) = value else {
        return Some(format!("{label} is null."));
    };

    match parse_decimal(value) {
        Err(_) => Some(format!("{label} must be a number.")),
        Ok(parsed) if parsed < Decimal::ZERO => Some(format!("{label} must not be negative.")),
        Ok(_) => None,
    }
}
