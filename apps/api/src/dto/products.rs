use larder_domain::{Product, ProductDraft, ProductId};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use ts_rs::TS;

use super::common::numeric_text;

/// Incoming payload for product create/edit.
///
/// Every field may be omitted. Cost and markup accept numbers or strings.
#[derive(Debug, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/product-request.ts"
)]
pub struct ProductRequest {
    pub id: Option<i64>,
    #[serde(default)]
    pub active: bool,
    pub description: Option<String>,
    pub name: Option<String>,
    pub vendor_id: Option<String>,
    pub ingredients_list: Option<Vec<String>>,
    pub classification: Option<String>,
    #[serde(rename = "type")]
    pub product_type: Option<String>,
    #[ts(type = "number | string | null")]
    pub cost: Option<Value>,
    #[ts(type = "number | string | null")]
    pub markup: Option<Value>,
    pub allergen_list: Option<Vec<String>>,
}

/// API representation of a product.
#[derive(Debug, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/product-response.ts"
)]
pub struct ProductResponse {
    pub id: Option<i64>,
    pub active: bool,
    pub description: String,
    pub name: String,
    pub vendor_id: Option<String>,
    pub ingredients_list: Vec<String>,
    pub classification: String,
    #[serde(rename = "type")]
    pub product_type: String,
    pub cost: String,
    pub markup: String,
    pub sale_price: String,
    pub allergen_list: Vec<String>,
}

impl From<ProductRequest> for ProductDraft {
    fn from(request: ProductRequest) -> Self {
        Self {
            id: request.id.map(ProductId::new),
            active: request.active,
            description: request.description,
            name: request.name,
            vendor_id: request.vendor_id,
            ingredients_list: request.ingredients_list,
            classification: request.classification,
            product_type: request.product_type,
            cost: request.cost.map(numeric_text),
            markup: request.markup.map(numeric_text),
            allergen_list: request.allergen_list,
        }
    }
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id().map(ProductId::as_i64),
            active: product.active(),
            description: product.description().to_owned(),
            name: product.name().to_owned(),
            vendor_id: product.vendor_id().map(str::to_owned),
            ingredients_list: product.ingredients_list().to_vec(),
            classification: product.classification().as_str().to_owned(),
            product_type: product.product_type().as_str().to_owned(),
            cost: product.cost().to_string(),
            markup: product.markup().to_string(),
            sale_price: product.sale_price().to_string(),
            allergen_list: product
                .allergen_list()
                .iter()
                .map(|allergen| allergen.as_str().to_owned())
                .collect(),
        }
    }
}
