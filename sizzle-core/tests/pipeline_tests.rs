//! End-to-end pipeline tests against the fake AI client.
//!
//! These exercise the full request -> prompt -> backend -> validation path
//! without network access.

use sizzle_core::ai::FakeClient;
use sizzle_core::{
    generate, DishNameRequest, GenerateError, IngredientsRequest, PreferencesRequest,
    RecipeRequest,
};

const CHICKEN_RECIPE: &str = r#"{
    "title": "Garlic Chicken with Tomatoes",
    "ingredients": ["500g chicken", "4 tomatoes", "2 onions", "3 cloves garlic"],
    "steps": ["Chop the onions and garlic", "Brown the chicken", "Add tomatoes and simmer"],
    "cookingTime": "40 minutes",
    "servings": "4"
}"#;

fn ingredients_request() -> RecipeRequest {
    RecipeRequest::Ingredients(IngredientsRequest {
        ingredients: "tomatoes, onions, chicken, garlic".to_string(),
        dietary_preference: None,
    })
}

#[tokio::test]
async fn well_formed_response_yields_recipe() {
    let client = FakeClient::with_response("tomatoes, onions, chicken, garlic", CHICKEN_RECIPE);

    let recipe = generate(&client, &ingredients_request()).await.unwrap();

    assert_eq!(recipe.title, "Garlic Chicken with Tomatoes");
    assert!(!recipe.ingredients.is_empty());
    assert!(!recipe.steps.is_empty());
    assert_eq!(recipe.servings, "4");
    assert!(recipe.difficulty.is_none());
    assert!(recipe.nutrition.is_none());
}

#[tokio::test]
async fn response_missing_steps_is_schema_violation() {
    let client = FakeClient::new().with_default_response(
        r#"{
            "title": "Mystery Dish",
            "ingredients": ["something"],
            "cookingTime": "10 minutes",
            "servings": "2"
        }"#,
    );

    let err = generate(&client, &ingredients_request()).await.unwrap_err();
    assert!(matches!(err, GenerateError::SchemaViolation(_)));
}

#[tokio::test]
async fn response_with_empty_ingredients_is_schema_violation() {
    let client = FakeClient::new().with_default_response(
        r#"{
            "title": "Air Soup",
            "ingredients": [],
            "steps": ["Serve"],
            "cookingTime": "1 minute",
            "servings": "1"
        }"#,
    );

    let err = generate(&client, &ingredients_request()).await.unwrap_err();
    match err {
        GenerateError::SchemaViolation(message) => assert!(message.contains("ingredients")),
        other => panic!("expected SchemaViolation, got {:?}", other),
    }
}

#[tokio::test]
async fn non_json_response_is_schema_violation() {
    let client =
        FakeClient::new().with_default_response("Sure! Here's a lovely recipe for you...");

    let err = generate(&client, &ingredients_request()).await.unwrap_err();
    assert!(matches!(err, GenerateError::SchemaViolation(_)));
}

#[tokio::test]
async fn backend_failure_is_backend_unavailable() {
    // No responses registered and no default: the fake fails like a dead API.
    let client = FakeClient::new();

    let err = generate(&client, &ingredients_request()).await.unwrap_err();
    assert!(matches!(err, GenerateError::BackendUnavailable(_)));
}

#[tokio::test]
async fn invalid_request_never_reaches_backend() {
    let client = FakeClient::new().with_default_response(CHICKEN_RECIPE);
    let request = RecipeRequest::Ingredients(IngredientsRequest {
        ingredients: "   ".to_string(),
        dietary_preference: None,
    });

    let err = generate(&client, &request).await.unwrap_err();

    assert!(matches!(err, GenerateError::InvalidRequest(_)));
    assert_eq!(client.call_count(), 0);
}

#[tokio::test]
async fn dish_request_scales_servings_through_the_prompt() {
    // The fake only answers when the rendered prompt carries the scaling
    // instruction for six people, so a match proves the prompt contract.
    let client = FakeClient::with_response(
        "serve exactly 6 people",
        r#"{
            "title": "Chicken Biryani",
            "ingredients": ["1.5 kg basmati rice", "1.2 kg chicken"],
            "steps": ["Parboil the rice", "Layer with chicken masala", "Steam on low heat"],
            "cookingTime": "90 minutes",
            "servings": "6"
        }"#,
    );
    let request = RecipeRequest::DishName(DishNameRequest {
        dish_name: "Chicken Biryani".to_string(),
        servings: Some("6".to_string()),
        dietary_preference: None,
    });

    let recipe = generate(&client, &request).await.unwrap();
    assert_eq!(recipe.servings, "6");
}

#[tokio::test]
async fn preferences_request_returns_difficulty_and_nutrition() {
    let client = FakeClient::with_response(
        "nutritional information",
        r#"{
            "title": "Vegetable Fried Rice",
            "ingredients": ["2 cups rice", "1 cup mixed vegetables"],
            "steps": ["Cook rice", "Stir-fry vegetables", "Combine"],
            "cookingTime": "25 minutes",
            "servings": "2",
            "difficulty": "Easy",
            "nutrition": {"calories": "320", "protein": "8g", "carbs": "60g", "fat": "6g"}
        }"#,
    );
    let request = RecipeRequest::IngredientsWithPreferences(PreferencesRequest {
        ingredients: "rice, mixed vegetables".to_string(),
        servings: Some("2".to_string()),
        difficulty: Some("Easy".to_string()),
        include_nutrition: true,
        ..Default::default()
    });

    let recipe = generate(&client, &request).await.unwrap();
    assert_eq!(recipe.difficulty.as_deref(), Some("Easy"));
    assert_eq!(recipe.nutrition.unwrap().calories, "320");
}
