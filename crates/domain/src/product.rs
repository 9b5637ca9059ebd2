use std::fmt::{Display, Formatter};
use std::str::FromStr;

use larder_core::{AppError, AppResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::formatter::format_amount;
use crate::product_validation::{format_product, validate_product};

/// Storage-assigned product identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProductId(i64);

impl ProductId {
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

impl Display for ProductId {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// Product classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductClassification {
    /// Served as a beverage.
    Drink,
    /// Baked on premises.
    #[serde(rename = "Baked Good")]
    BakedGood,
}

impl ProductClassification {
    /// Returns the canonical label.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Drink => "Drink",
            Self::BakedGood => "Baked Good",
        }
    }
}

impl FromStr for ProductClassification {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Drink" => Ok(Self::Drink),
            "Baked Good" => Ok(Self::BakedGood),
            _ => Err(AppError::Validation(format!(
                "unknown product classification '{value}'"
            ))),
        }
    }
}

/// Product type. Parsing ignores case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductType {
    /// Coffee based.
    Coffee,
    /// Tea based.
    Tea,
    /// Carbonated soft drink.
    Soda,
}

impl ProductType {
    /// Returns the canonical label.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Coffee => "Coffee",
            Self::Tea => "Tea",
            Self::Soda => "Soda",
        }
    }
}

impl FromStr for ProductType {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "coffee" => Ok(Self::Coffee),
            "tea" => Ok(Self::Tea),
            "soda" => Ok(Self::Soda),
            _ => Err(AppError::Validation(format!(
                "unknown product type '{value}'"
            ))),
        }
    }
}

/// Allergen a product may declare. Parsing ignores case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Allergen {
    /// Milk and milk products.
    Dairy,
    /// Soybeans.
    Soy,
    /// Wheat and related grains.
    Gluten,
    /// Tree nuts and peanuts.
    Nuts,
}

impl Allergen {
    /// Returns the canonical label.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dairy => "Dairy",
            Self::Soy => "Soy",
            Self::Gluten => "Gluten",
            Self::Nuts => "Nuts",
        }
    }
}

impl FromStr for Allergen {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "dairy" => Ok(Self::Dairy),
            "soy" => Ok(Self::Soy),
            "gluten" => Ok(Self::Gluten),
            "nuts" => Ok(Self::Nuts),
            _ => Err(AppError::Validation(format!("unknown allergen '{value}'"))),
        }
    }
}

/// Product candidate as supplied by a caller, before validation.
///
/// The sale price is derived and therefore has no draft field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductDraft {
    /// Identifier requested by the caller, if any.
    pub id: Option<ProductId>,
    /// Whether the product is on sale.
    pub active: bool,
    /// Menu description.
    pub description: Option<String>,
    /// Display name, unique across products ignoring case.
    pub name: Option<String>,
    /// Supplier reference. Never validated.
    pub vendor_id: Option<String>,
    /// Ingredient names.
    pub ingredients_list: Option<Vec<String>>,
    /// Classification label.
    pub classification: Option<String>,
    /// Type label.
    pub product_type: Option<String>,
    /// Unit cost as decimal text.
    pub cost: Option<String>,
    /// Markup ratio as decimal text.
    pub markup: Option<String>,
    /// Allergen labels.
    pub allergen_list: Option<Vec<String>>,
}

/// Validated product with normalized prices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub(crate) id: Option<ProductId>,
    pub(crate) active: bool,
    pub(crate) description: String,
    pub(crate) name: String,
    pub(crate) vendor_id: Option<String>,
    pub(crate) ingredients_list: Vec<String>,
    pub(crate) classification: ProductClassification,
    pub(crate) product_type: ProductType,
    pub(crate) cost: Decimal,
    pub(crate) markup: Decimal,
    pub(crate) allergen_list: Vec<Allergen>,
    pub(crate) sale_price: Decimal,
}

impl Product {
    /// Returns the storage identifier, `None` until first save.
    #[must_use]
    pub fn id(&self) -> Option<ProductId> {
        self.id
    }

    /// Returns whether the product is active.
    #[must_use]
    pub fn active(&self) -> bool {
        self.active
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        self.description.as_str()
    }

    /// Returns the product name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns the vendor reference, if any.
    #[must_use]
    pub fn vendor_id(&self) -> Option<&str> {
        self.vendor_id.as_deref()
    }

    /// Returns ingredient names.
    #[must_use]
    pub fn ingredients_list(&self) -> &[String] {
        self.ingredients_list.as_slice()
    }

    /// Returns the classification.
    #[must_use]
    pub fn classification(&self) -> ProductClassification {
        self.classification
    }

    /// Returns the product type.
    #[must_use]
    pub fn product_type(&self) -> ProductType {
        self.product_type
    }

    /// Returns the cost rounded to two places.
    #[must_use]
    pub fn cost(&self) -> Decimal {
        self.cost
    }

    /// Returns the markup rounded to two places.
    #[must_use]
    pub fn markup(&self) -> Decimal {
        self.markup
    }

    /// Returns declared allergens.
    #[must_use]
    pub fn allergen_list(&self) -> &[Allergen] {
        self.allergen_list.as_slice()
    }

    /// Returns the derived sale price, `cost * (1 + markup)`.
    #[must_use]
    pub fn sale_price(&self) -> Decimal {
        self.sale_price
    }

    /// Returns the same product bound to the given identifier.
    #[must_use]
    pub fn with_id(mut self, id: ProductId) -> Self {
        self.id = Some(id);
        self
    }

    /// Returns the same product carrying a sale price derived earlier.
    ///
    /// Stored rows keep the price computed from the unrounded markup, which
    /// recomputing from the rounded markup would not reproduce.
    #[must_use]
    pub fn with_sale_price(mut self, sale_price: Decimal) -> Self {
        self.sale_price = format_amount(sale_price);
        self
    }
}

impl TryFrom<ProductDraft> for Product {
    type Error = AppError;

    fn try_from(draft: ProductDraft) -> AppResult<Self> {
        let errors = validate_product(&draft);
        if !errors.is_empty() {
            return Err(AppError::Validation(errors.concatenated()));
        }

        format_product(draft)
    }
}
