use larder_core::AppError;

use crate::product::{Allergen, Product, ProductClassification, ProductDraft, ProductId, ProductType};

use super::{
    DUPLICATE_PRODUCT_NAME, allergen_list_message, calculate_sale_price, classification_message,
    cost_message, description_message, format_product, ingredients_list_message, markup_message,
    name_message, type_message, unique_name_conflict, validate_product,
};

fn sample_draft() -> ProductDraft {
    ProductDraft {
        id: Some(ProductId::new(1)),
        active: true,
        description: Some("Sample Description".to_owned()),
        name: Some("TestName".to_owned()),
        vendor_id: Some("5".to_owned()),
        ingredients_list: Some(vec!["Ingredient 1".to_owned(), "Ingredient 2".to_owned()]),
        classification: Some("Drink".to_owned()),
        product_type: Some("Soda".to_owned()),
        cost: Some("5.0".to_owned()),
        markup: Some("5.0".to_owned()),
        allergen_list: Some(vec!["dairy".to_owned(), "nuts".to_owned()]),
    }
}

fn sample_product(id: i64, name: &str) -> Product {
    let draft = ProductDraft {
        id: Some(ProductId::new(id)),
        name: Some(name.to_owned()),
        ..sample_draft()
    };
    Product::try_from(draft).unwrap_or_else(|_| unreachable!())
}

#[test]
fn description_checks() {
    let mut draft = sample_draft();
    assert_eq!(description_message(&draft), None);

    draft.description = None;
    assert_eq!(description_message(&draft), Some("-Description is null."));

    draft.description = Some(String::new());
    assert_eq!(description_message(&draft), Some("-Description is empty."));

    draft.description = Some("A".repeat(100));
    assert_eq!(
        description_message(&draft),
        Some("-Description must be less than 100 characters.")
    );

    draft.description = Some("A".repeat(99));
    assert_eq!(description_message(&draft), None);
}

#[test]
fn name_checks() {
    let mut draft = sample_draft();
    assert_eq!(name_message(&draft), None);

    draft.name = None;
    assert_eq!(name_message(&draft), Some("-Name is null."));

    draft.name = Some(String::new());
    assert_eq!(name_message(&draft), Some("-Name is empty."));

    draft.name = Some("A".repeat(50));
    assert_eq!(
        name_message(&draft),
        Some("-Name must be less than 50 characters.")
    );
}

#[test]
fn name_length_counts_characters_not_bytes() {
    let mut draft = sample_draft();
    draft.name = Some("é".repeat(49));
    assert_eq!(name_message(&draft), None);
}

#[test]
fn ingredients_list_checks() {
    let mut draft = sample_draft();
    assert_eq!(ingredients_list_message(&draft), None);

    draft.ingredients_list = None;
    assert_eq!(
        ingredients_list_message(&draft),
        Some("-IngredientsList is null.")
    );

    draft.ingredients_list = Some(Vec::new());
    assert_eq!(
        ingredients_list_message(&draft),
        Some("-IngredientsList is empty.")
    );
}

#[test]
fn classification_checks() {
    let mut draft = sample_draft();
    assert_eq!(classification_message(&draft), None);

    draft.classification = Some("Baked Good".to_owned());
    assert_eq!(classification_message(&draft), None);

    draft.classification = None;
    assert_eq!(
        classification_message(&draft),
        Some("-Classification is null.")
    );

    draft.classification = Some(String::new());
    assert_eq!(
        classification_message(&draft),
        Some("-Classification is empty.")
    );

    draft.classification = Some("Invalid Classification".to_owned());
    assert_eq!(
        classification_message(&draft),
        Some("-Classification must be Drink or Baked Good.")
    );
}

#[test]
fn type_checks_ignore_case() {
    let mut draft = sample_draft();
    assert_eq!(type_message(&draft), None);

    draft.product_type = Some("CoffeE".to_owned());
    assert_eq!(type_message(&draft), None);

    draft.product_type = Some("tEa".to_owned());
    assert_eq!(type_message(&draft), None);

    draft.product_type = None;
    assert_eq!(type_message(&draft), Some("-Type is null."));

    draft.product_type = Some(String::new());
    assert_eq!(type_message(&draft), Some("-Type is empty."));

    draft.product_type = Some("Invalid Type".to_owned());
    assert_eq!(
        type_message(&draft),
        Some("-Type must be Coffee, Tea, or Soda.")
    );
}

#[test]
fn cost_and_markup_checks() {
    let mut draft = sample_draft();
    assert_eq!(cost_message(&draft), None);
    assert_eq!(markup_message(&draft), None);

    draft.cost = None;
    draft.markup = None;
    assert_eq!(cost_message(&draft), Some("-Cost is null."));
    assert_eq!(markup_message(&draft), Some("-Markup is null."));

    draft.cost = Some(String::new());
    draft.markup = Some(String::new());
    assert_eq!(cost_message(&draft), Some("-Cost is empty."));
    assert_eq!(markup_message(&draft), Some("-Markup is empty."));

    draft.cost = Some("10.NotValid".to_owned());
    draft.markup = Some("-1".to_owned());
    assert_eq!(cost_message(&draft), Some("-Cost must be a number."));
    assert_eq!(markup_message(&draft), Some("-Markup must be a number."));
}

#[test]
fn allergen_list_checks() {
    let mut draft = sample_draft();
    assert_eq!(allergen_list_message(&draft), None);

    draft.allergen_list = Some(Vec::new());
    assert_eq!(allergen_list_message(&draft), None);

    draft.allergen_list = None;
    assert_eq!(
        allergen_list_message(&draft),
        Some("-AllergenList is null.")
    );

    draft.allergen_list = Some(vec!["Invalid 1".to_owned(), "Invalid 2".to_owned()]);
    assert_eq!(
        allergen_list_message(&draft),
        Some("-AllergenList must contain: Diary, Soy, Gluten, or Nuts.")
    );
}

#[test]
fn vendor_id_is_never_validated() {
    let mut draft = sample_draft();
    draft.vendor_id = None;
    assert!(validate_product(&draft).is_empty());
}

#[test]
fn all_null_draft_reports_every_field_in_order() {
    let errors = validate_product(&ProductDraft::default());
    assert_eq!(
        errors.concatenated(),
        "-Description is null.-Name is null.-Classification is null.-Type is null.-Cost is null.-Markup is null.-IngredientsList is null.-AllergenList is null."
    );
}

#[test]
fn valid_draft_has_no_errors() {
    assert_eq!(validate_product(&sample_draft()).concatenated(), "");
}

#[test]
fn sale_price_is_cost_times_one_plus_markup() {
    let price = calculate_sale_price(&sample_draft()).unwrap_or_else(|_| unreachable!());
    assert_eq!(price.to_string(), "30.00");

    let draft = ProductDraft {
        cost: Some("10.00".to_owned()),
        markup: Some("2.00".to_owned()),
        ..sample_draft()
    };
    let price = calculate_sale_price(&draft).unwrap_or_else(|_| unreachable!());
    assert_eq!(price.to_string(), "30.00");
}

#[test]
fn sale_price_rejects_non_numeric_cost() {
    let draft = ProductDraft {
        cost: Some("InvalidCost".to_owned()),
        ..sample_draft()
    };
    assert!(matches!(
        calculate_sale_price(&draft),
        Err(AppError::NumberFormat(_))
    ));

    let draft = ProductDraft {
        markup: None,
        ..sample_draft()
    };
    assert!(matches!(
        calculate_sale_price(&draft),
        Err(AppError::NumberFormat(_))
    ));
}

#[test]
fn format_product_normalizes_prices_and_labels() {
    let draft = ProductDraft {
        product_type: Some("sODA".to_owned()),
        cost: Some("2.5".to_owned()),
        markup: Some("0.333".to_owned()),
        vendor_id: Some("  ".to_owned()),
        ..sample_draft()
    };

    let product = format_product(draft).unwrap_or_else(|_| unreachable!());
    assert_eq!(product.name(), "TestName");
    assert_eq!(product.classification(), ProductClassification::Drink);
    assert_eq!(product.product_type(), ProductType::Soda);
    assert_eq!(product.cost().to_string(), "2.50");
    assert_eq!(product.markup().to_string(), "0.33");
    assert_eq!(product.sale_price().to_string(), "3.33");
    assert_eq!(product.allergen_list(), [Allergen::Dairy, Allergen::Nuts]);
    assert_eq!(product.vendor_id(), None);
}

#[test]
fn try_from_reports_concatenated_errors() {
    let draft = ProductDraft {
        name: Some(String::new()),
        cost: None,
        ..sample_draft()
    };

    assert_eq!(
        Product::try_from(draft),
        Err(AppError::Validation(
            "-Name is empty.-Cost is null.".to_owned()
        ))
    );
}

#[test]
fn unique_name_conflict_ignores_case() {
    let existing = vec![sample_product(1, "Basketball"), sample_product(2, "Football")];

    assert_eq!(
        unique_name_conflict("FOOTBALL", &existing),
        Some(DUPLICATE_PRODUCT_NAME)
    );
    assert_eq!(unique_name_conflict("Baseball", &existing), None);
}

#[test]
fn unique_name_conflict_skips_excluded_record() {
    let existing = vec![sample_product(1, "Latte"), sample_product(2, "Mocha")];
    let target = ProductId::new(1);

    let others = existing.iter().filter(|product| product.id() != Some(target));
    assert_eq!(unique_name_conflict("latte", others), None);
}
