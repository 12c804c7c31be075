use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;
use sizzle_core::ai::OpenRouterClient;
use sizzle_core::{
    generate, DishNameRequest, GeneratedRecipe, IngredientsRequest, PreferencesRequest,
    RecipeRequest,
};
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "sizzle")]
#[command(about = "Generate recipes with an LLM", long_about = None)]
struct Cli {
    /// Print the recipe record as JSON instead of formatted text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a recipe from ingredients on hand
    Ingredients {
        /// Comma-separated list of ingredients
        ingredients: String,
        /// Dietary preference (e.g., vegan, gluten-free, keto)
        #[arg(long)]
        dietary_preference: Option<String>,
    },
    /// Generate a recipe from ingredients with preferences
    Preferences {
        /// Comma-separated list of ingredients
        ingredients: String,
        /// Cuisine type (e.g., Italian, Mexican)
        #[arg(long)]
        cuisine: Option<String>,
        /// Meal type (e.g., Breakfast, Dinner)
        #[arg(long)]
        meal_type: Option<String>,
        /// Dietary restrictions (e.g., vegan, gluten-free)
        #[arg(long)]
        dietary_restrictions: Option<String>,
        /// Maximum cooking time in minutes
        #[arg(long)]
        cook_time: Option<String>,
        /// Number of servings
        #[arg(long)]
        servings: Option<String>,
        /// Difficulty level (e.g., Easy, Medium, Hard)
        #[arg(long)]
        difficulty: Option<String>,
        /// Include estimated nutrition information
        #[arg(long)]
        nutrition: bool,
    },
    /// Generate a recipe for a named dish
    Dish {
        /// Name of the dish (e.g., "Chicken Biryani")
        dish_name: String,
        /// Number of servings
        #[arg(long)]
        servings: Option<String>,
        /// Dietary preference (e.g., vegan, gluten-free, keto)
        #[arg(long)]
        dietary_preference: Option<String>,
    },
}

/// A generated recipe decorated for storage: unique id plus an echo of the
/// request that produced it.
#[derive(Serialize)]
struct RecipeRecord {
    id: String,
    request: RecipeRequest,
    recipe: GeneratedRecipe,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let request = match cli.command {
        Commands::Ingredients {
            ingredients,
            dietary_preference,
        } => RecipeRequest::Ingredients(IngredientsRequest {
            ingredients,
            dietary_preference,
        }),
        Commands::Preferences {
            ingredients,
            cuisine,
            meal_type,
            dietary_restrictions,
            cook_time,
            servings,
            difficulty,
            nutrition,
        } => RecipeRequest::IngredientsWithPreferences(PreferencesRequest {
            ingredients,
            cuisine,
            meal_type,
            dietary_restrictions,
            cook_time,
            servings,
            difficulty,
            include_nutrition: nutrition,
        }),
        Commands::Dish {
            dish_name,
            servings,
            dietary_preference,
        } => RecipeRequest::DishName(DishNameRequest {
            dish_name,
            servings,
            dietary_preference,
        }),
    };

    let client = OpenRouterClient::from_env()?;
    let recipe = generate(&client, &request).await?;

    let record = RecipeRecord {
        id: Uuid::new_v4().to_string(),
        request,
        recipe,
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        print_recipe(&record);
    }

    Ok(())
}

fn print_recipe(record: &RecipeRecord) {
    let recipe = &record.recipe;

    println!("{}", recipe.title);
    println!("{}", "=".repeat(recipe.title.len()));
    println!();
    println!("Servings: {}", recipe.servings);
    println!("Cooking time: {}", recipe.cooking_time);
    if let Some(difficulty) = &recipe.difficulty {
        println!("Difficulty: {}", difficulty);
    }
    println!();
    println!("Ingredients:");
    for ingredient in &recipe.ingredients {
        println!("  - {}", ingredient);
    }
    println!();
    println!("Steps:");
    for (n, step) in recipe.steps.iter().enumerate() {
        println!("  {}. {}", n + 1, step);
    }
    if let Some(nutrition) = &recipe.nutrition {
        println!();
        println!("Nutrition (estimated, per serving):");
        println!("  Calories: {}", nutrition.calories);
        println!("  Protein:  {}", nutrition.protein);
        println!("  Carbs:    {}", nutrition.carbs);
        println!("  Fat:      {}", nutrition.fat);
    }
    println!();
    println!("Saved as {}", record.id);
}
