use log::debug;
use recipe_finder::{FinderConfig, Recipe, RecipeFinder};
use std::env;
use std::error::Error;
use std::process::ExitCode;

const USAGE: &str = "Usage: recipe-finder <command>

Commands:
  search <ingredients...>   Search recipes and cache the results
  show <slug>               Show one cached result
  list                      List cached results with their slugs
  reset                     Clear cached results";

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    match run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &[String]) -> Result<(), Box<dyn Error>> {
    let (command, rest) = args.split_first().ok_or(USAGE)?;
    if matches!(command.as_str(), "help" | "-h" | "--help") {
        println!("{}", USAGE);
        return Ok(());
    }

    let config = FinderConfig::load()?;
    debug!("Using session directory {}", config.session_dir.display());
    let finder = RecipeFinder::builder()
        .session_dir(config.session_dir.clone())
        .config(config)
        .build()?;

    match command.as_str() {
        "search" => {
            let records = finder.search(&rest.join(" ")).await?;
            for (index, recipe) in records.iter().enumerate() {
                println!("{}  {}", RecipeFinder::build_slug(&recipe.title, index), recipe.title);
            }
        }
        "show" => {
            let slug = rest.first().ok_or("Usage: recipe-finder show <slug>")?;
            print_recipe(&finder.resolve(slug)?);
        }
        "list" => {
            for (slug, recipe) in finder.entries()? {
                println!("{}  {}", slug, recipe.title);
            }
        }
        "reset" => {
            finder.reset();
            println!("Search results cleared");
        }
        other => return Err(format!("Unknown command '{}'\n\n{}", other, USAGE).into()),
    }

    Ok(())
}

fn print_recipe(recipe: &Recipe) {
    println!("{}", recipe.title);
    if let Some(source) = &recipe.source_name {
        println!("from {}", source);
    }
    println!();

    if let Some(servings) = recipe.servings {
        println!("servings: {}", servings);
    }
    if let Some(minutes) = recipe.total_time_minutes {
        println!("total time: {} minutes", minutes);
    }
    if let Some(calories) = recipe.calories {
        println!("calories: {:.0}", calories);
    }
    for (label, tags) in [
        ("cuisine", &recipe.cuisine_types),
        ("meal", &recipe.meal_types),
        ("dish", &recipe.dish_types),
    ] {
        if !tags.is_empty() {
            println!("{}: {}", label, tags.join(", "));
        }
    }

    if !recipe.ingredient_lines.is_empty() {
        println!("\nIngredients:");
        for line in &recipe.ingredient_lines {
            println!("  - {}", line);
        }
    }

    println!("\nimage: {}", recipe.image_url);
    if !recipe.source_url.is_empty() {
        println!("full recipe: {}", recipe.source_url);
    }
}
