use chrono::DateTime;
use clap::{Parser, Subcommand};
use dough_core::*;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "dough")]
#[command(about = "Pizza dough recipe calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override yeast dataset CSV path
    #[arg(long, global = true)]
    dataset: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a dough recipe (default)
    Recipe(RecipeArgs),

    /// List the temperatures available in the yeast dataset
    Series {
        /// Temperature unit (celsius, fahrenheit)
        #[arg(long, value_parser = parse_unit)]
        unit: Option<TemperatureUnit>,
    },
}

#[derive(clap::Args, Default)]
struct RecipeArgs {
    /// Number of dough balls
    #[arg(long)]
    count: Option<u32>,

    /// Weight of one dough ball in grams
    #[arg(long)]
    weight: Option<f64>,

    /// Water as a percentage of flour
    #[arg(long)]
    hydration: Option<f64>,

    /// Salt as a percentage of flour
    #[arg(long)]
    salt: Option<f64>,

    /// Fermentation temperature
    #[arg(long, allow_negative_numbers = true)]
    temperature: Option<f64>,

    /// Temperature unit (celsius, fahrenheit)
    #[arg(long, value_parser = parse_unit)]
    unit: Option<TemperatureUnit>,

    /// Fermentation time in hours
    #[arg(long, conflicts_with = "ready_at", allow_negative_numbers = true)]
    hours: Option<i64>,

    /// When the dough should be ready (RFC 3339, e.g. 2024-05-02T19:00:00+02:00)
    #[arg(long)]
    ready_at: Option<String>,

    /// Print the recipe as JSON
    #[arg(long)]
    json: bool,
}

fn parse_unit(s: &str) -> std::result::Result<TemperatureUnit, String> {
    s.parse().map_err(|e: Error| e.to_string())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Keep stdout clean for the recipe unless asked otherwise
    dough_core::logging::init_with_level(if cli.verbose { "debug" } else { "warn" });

    let config = Config::load()?;
    let dataset = cli
        .dataset
        .unwrap_or_else(|| config.data.dataset_path.clone());

    match cli.command {
        Some(Commands::Recipe(args)) => cmd_recipe(&dataset, args, &config),
        Some(Commands::Series { unit }) => cmd_series(&dataset, unit, &config),
        None => {
            // Default to "recipe" command
            cmd_recipe(&dataset, RecipeArgs::default(), &config)
        }
    }
}

fn cmd_recipe(dataset: &Path, args: RecipeArgs, config: &Config) -> Result<()> {
    let input = build_input(&args, config)?.validate()?;

    let cache = IndexCache::new(load_yeast_records(dataset)?);
    let index = cache.get(input.temperature.unit);
    let recipe = compute_recipe(index, &input)?;

    if args.json {
        let output = serde_json::json!({
            "input": &input,
            "recipe": &recipe,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        display_recipe(&input, &recipe);
    }

    Ok(())
}

/// Merge command line overrides into the configured defaults
fn build_input(args: &RecipeArgs, config: &Config) -> Result<DoughInput> {
    let mut input = config.defaults.to_input();

    if let Some(unit) = args.unit {
        input = match args.temperature {
            // Explicit value is already in the requested unit
            Some(_) => DoughInput {
                temperature: Temperature::new(unit, input.temperature.value),
                ..input
            },
            None => input.with_unit(unit),
        };
    }

    if let Some(count) = args.count {
        input.count = count;
    }
    if let Some(weight) = args.weight {
        input.weight = weight;
    }
    if let Some(hydration) = args.hydration {
        input.hydration = hydration;
    }
    if let Some(salt) = args.salt {
        input.salt_percentage = salt;
    }
    if let Some(value) = args.temperature {
        input.temperature.value = value;
    }

    if let Some(hours) = args.hours {
        input.hours = hours;
    } else if let Some(ref ready_at) = args.ready_at {
        let ready_at = DateTime::parse_from_rfc3339(ready_at)
            .map_err(|e| Error::InvalidInput(format!("invalid ready-at time: {}", e)))?;
        let now = chrono::Local::now().with_timezone(ready_at.offset());
        input.hours = hours_until(&ready_at, &now)?;
        tracing::debug!("Dough ready at {} is {} hours away", ready_at, input.hours);
    }

    Ok(input)
}

fn cmd_series(dataset: &Path, unit: Option<TemperatureUnit>, config: &Config) -> Result<()> {
    let unit = unit.unwrap_or(config.defaults.unit);
    let records = load_yeast_records(dataset)?;
    let index = YeastModelIndex::build(&records, unit);

    if index.is_empty() {
        println!("No fermentation data in {}", dataset.display());
        return Ok(());
    }

    println!("{} temperatures ({}):", index.len(), unit);
    for series in index.series() {
        let (min_hours, max_hours) = series.hours_range().unwrap_or_default();
        println!(
            "  {:>5}{}  {:>3} samples  {}h - {}h",
            series.temperature,
            unit.symbol(),
            series.samples.len(),
            min_hours,
            max_hours
        );
    }

    Ok(())
}

fn format_number(value: f64, digits: usize) -> String {
    format!("{:.*}", digits, value)
}

fn display_recipe(input: &ValidatedDoughInput, recipe: &DoughRecipe) {
    println!("\n╭─────────────────────────────────────────╮");
    println!("│  Your custom dough recipe");
    println!("╰─────────────────────────────────────────╯");
    println!();
    println!(
        "  {} x {}g dough balls, {}% hydration, {}% salt",
        input.count, input.weight, input.hydration, input.salt_percentage
    );
    println!("  Fermenting {} hours at {}", input.hours, input.temperature);
    println!();
    println!("  Flour: {}g", format_number(recipe.flour, 0));
    println!("  Water: {}ml", format_number(recipe.water, 0));
    println!("  Salt:  {}g", format_number(recipe.salt, 1));
    println!(
        "  Yeast: {}g fresh / {}g instant dry / {}g active dry",
        format_number(recipe.yeast.cy, 3),
        format_number(recipe.yeast.idy, 3),
        format_number(recipe.yeast.ady, 3)
    );
    println!();
}
