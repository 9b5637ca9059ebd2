use larder_core::{AppError, AppResult};
use larder_domain::{IngredientDraft, ProductDraft};
use tracing::info;

use crate::state::AppState;

struct SeedIngredient {
    name: &'static str,
    purchasing_cost: &'static str,
    amount: &'static str,
    unit_of_measure: &'static str,
    allergens: &'static [&'static str],
}

struct SeedProduct {
    name: &'static str,
    description: &'static str,
    classification: &'static str,
    product_type: &'static str,
    cost: &'static str,
    markup: &'static str,
    ingredients: &'static [&'static str],
    allergens: &'static [&'static str],
}

const SEED_INGREDIENTS: &[SeedIngredient] = &[
    SeedIngredient {
        name: "Espresso Beans",
        purchasing_cost: "18.50",
        amount: "2",
        unit_of_measure: "lb",
        allergens: &[],
    },
    SeedIngredient {
        name: "Whole Milk",
        purchasing_cost: "3.20",
        amount: "1",
        unit_of_measure: "gal",
        allergens: &["Dairy"],
    },
    SeedIngredient {
        name: "All-Purpose Flour",
        purchasing_cost: "4.75",
        amount: "5",
        unit_of_measure: "lb",
        allergens: &["Gluten"],
    },
    SeedIngredient {
        name: "Sliced Almonds",
        purchasing_cost: "9.99",
        amount: "1",
        unit_of_measure: "lb",
        allergens: &["Nuts"],
    },
];

const SEED_PRODUCTS: &[SeedProduct] = &[
    SeedProduct {
        name: "Latte",
        description: "Espresso with steamed whole milk",
        classification: "Drink",
        product_type: "Coffee",
        cost: "1.25",
        markup: "1.50",
        ingredients: &["Espresso Beans", "Whole Milk"],
        allergens: &["Dairy"],
    },
    SeedProduct {
        name: "Green Tea",
        description: "Loose leaf sencha",
        classification: "Drink",
        product_type: "Tea",
        cost: "0.40",
        markup: "3.00",
        ingredients: &["Sencha Leaves", "Water"],
        allergens: &[],
    },
    SeedProduct {
        name: "Almond Croissant",
        description: "Twice baked croissant with almond cream",
        classification: "Baked Good",
        product_type: "Coffee",
        cost: "1.10",
        markup: "2.00",
        ingredients: &["All-Purpose Flour", "Sliced Almonds", "Whole Milk"],
        allergens: &["Gluten", "Nuts", "Dairy"],
    },
];

/// Counts of records written by one seed run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub ingredients_created: usize,
    pub products_created: usize,
    pub skipped: usize,
}

/// Inserts the sample catalog through the services, skipping names already present.
pub async fn run(state: &AppState) -> AppResult<SeedSummary> {
    let mut summary = SeedSummary::default();

    for seed in SEED_INGREDIENTS {
        match state
            .ingredient_service
            .find_ingredients_by_name(seed.name)
            .await
        {
            Ok(_) => summary.skipped += 1,
            Err(AppError::NotFound(_)) => {
                state
                    .ingredient_service
                    .create_ingredient(ingredient_draft(seed))
                    .await?;
                summary.ingredients_created += 1;
            }
            Err(error) => return Err(error),
        }
    }

    for seed in SEED_PRODUCTS {
        match state.product_service.find_products_by_name(seed.name).await {
            Ok(_) => summary.skipped += 1,
            Err(AppError::NotFound(_)) => {
                state
                    .product_service
                    .create_product(product_draft(seed))
                    .await?;
                summary.products_created += 1;
            }
            Err(error) => return Err(error),
        }
    }

    info!(
        ingredients_created = summary.ingredients_created,
        products_created = summary.products_created,
        skipped = summary.skipped,
        storage = state.storage.as_str(),
        "sample catalog seeded"
    );

    Ok(summary)
}

fn labels(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_owned()).collect()
}

fn ingredient_draft(seed: &SeedIngredient) -> IngredientDraft {
    IngredientDraft {
        id: None,
        active: true,
        name: Some(seed.name.to_owned()),
        purchasing_cost: Some(seed.purchasing_cost.to_owned()),
        amount: Some(seed.amount.to_owned()),
        unit_of_measure: Some(seed.unit_of_measure.to_owned()),
        allergens: labels(seed.allergens),
    }
}

fn product_draft(seed: &SeedProduct) -> ProductDraft {
    ProductDraft {
        id: None,
        active: true,
        description: Some(seed.description.to_owned()),
        name: Some(seed.name.to_owned()),
        vendor_id: None,
        ingredients_list: Some(labels(seed.ingredients)),
        classification: Some(seed.classification.to_owned()),
        product_type: Some(seed.product_type.to_owned()),
        cost: Some(seed.cost.to_owned()),
        markup: Some(seed.markup.to_owned()),
        allergen_list: Some(labels(seed.allergens)),
    }
}
