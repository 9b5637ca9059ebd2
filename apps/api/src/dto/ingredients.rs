use larder_domain::{Ingredient, IngredientDraft, IngredientId};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use ts_rs::TS;

use super::common::numeric_text;

/// Incoming payload for ingredient create/edit.
///
/// Every field may be omitted. Numeric fields accept numbers or strings.
#[derive(Debug, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/ingredient-request.ts"
)]
pub struct IngredientRequest {
    pub id: Option<i64>,
    #[serde(default)]
    pub active: bool,
    pub name: Option<String>,
    #[ts(type = "number | string | null")]
    pub purchasing_cost: Option<Value>,
    #[ts(type = "number | string | null")]
    pub amount: Option<Value>,
    pub unit_of_measure: Option<String>,
    pub allergens: Option<Vec<String>>,
}

/// API representation of an ingredient.
#[derive(Debug, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/ingredient-response.ts"
)]
pub struct IngredientResponse {
    pub id: Option<i64>,
    pub active: bool,
    pub name: String,
    pub purchasing_cost: String,
    pub amount: String,
    pub unit_of_measure: String,
    pub allergens: Vec<String>,
}

impl From<IngredientRequest> for IngredientDraft {
    fn from(request: IngredientRequest) -> Self {
        Self {
            id: request.id.map(IngredientId::new),
            active: request.active,
            name: request.name,
            purchasing_cost: request.purchasing_cost.map(numeric_text),
            amount: request.amount.map(numeric_text),
            unit_of_measure: request.unit_of_measure,
            allergens: request.allergens.unwrap_or_default(),
        }
    }
}

impl From<Ingredient> for IngredientResponse {
    fn from(ingredient: Ingredient) -> Self {
        Self {
            id: ingredient.id().map(IngredientId::as_i64),
            active: ingredient.active(),
            name: ingredient.name().to_owned(),
            purchasing_cost: ingredient.purchasing_cost().to_string(),
            amount: ingredient.amount().to_string(),
            unit_of_measure: ingredient.unit_of_measure().to_owned(),
            allergens: ingredient.allergens().to_vec(),
        }
    }
}
