use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use ecomap_core::{
    facets, filter, graph, stats, Category, EntityStore, FilterState, FundingStage, TeamSize,
};

#[derive(Parser, Debug)]
#[command(name = "ecomap", about = "Startup-ecosystem map data CLI")]
struct Cli {
    /// Path to the dataset directory (one JSON file per category)
    #[arg(long, global = true, default_value = "data/entities")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug, Default)]
struct FilterArgs {
    /// Case-insensitive search over name, description and tags
    #[arg(long)]
    search: Option<String>,
    /// Category filter (repeatable)
    #[arg(long = "category")]
    categories: Vec<Category>,
    /// Tag / subcategory filter (repeatable)
    #[arg(long = "tag")]
    tags: Vec<String>,
    /// District filter (repeatable)
    #[arg(long = "district")]
    districts: Vec<String>,
    /// Funding stage filter, startups only (repeatable)
    #[arg(long = "stage")]
    stages: Vec<FundingStage>,
    /// Team size bracket filter (repeatable)
    #[arg(long = "team-size")]
    team_sizes: Vec<TeamSize>,
}

impl FilterArgs {
    fn into_state(self) -> FilterState {
        FilterState {
            search: self.search.unwrap_or_default(),
            categories: self.categories,
            subcategories: self.tags,
            districts: self.districts,
            funding_stages: self.stages,
            team_sizes: self.team_sizes,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print aggregate ecosystem stats as JSON.
    Stats {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// List the entities matching the given filters.
    Filter {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Project the (optionally filtered) collection to graph JSON.
    Graph {
        #[command(flatten)]
        filters: FilterArgs,
        /// Write the graph JSON to this file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Print the tag and district filter options.
    Facets,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let store = EntityStore::load_dir(&cli.data_dir)?;

    match cli.command {
        Commands::Stats { filters } => cmd_stats(&store, filters.into_state())?,
        Commands::Filter { filters } => cmd_filter(&store, filters.into_state()),
        Commands::Graph { filters, out } => cmd_graph(&store, filters.into_state(), out)?,
        Commands::Facets => cmd_facets(&store),
    }

    Ok(())
}

fn cmd_stats(store: &EntityStore, state: FilterState) -> anyhow::Result<()> {
    let visible = filter::apply(&store.all(), &state);
    let stats = stats::aggregate(&visible);
    println!("{}", serde_json::to_string_pretty(&stats)?);
    Ok(())
}

fn cmd_filter(store: &EntityStore, state: FilterState) {
    let visible = filter::apply(&store.all(), &state);
    for entity in &visible {
        println!("{}\t{}\t{}", entity.id, entity.category, entity.name);
    }
    eprintln!("{} of {} entities match", visible.len(), store.len());
}

fn cmd_graph(store: &EntityStore, state: FilterState, out: Option<PathBuf>) -> anyhow::Result<()> {
    let visible = filter::apply(&store.all(), &state);
    let data = graph::project(&visible);
    let json = serde_json::to_string_pretty(&data)?;
    match out {
        Some(path) => std::fs::write(path, json)?,
        None => println!("{json}"),
    }
    Ok(())
}

fn cmd_facets(store: &EntityStore) {
    let all = store.all();
    println!("tags:");
    for tag in facets::all_tags(&all) {
        println!("  {tag}");
    }
    println!("districts:");
    for district in facets::all_districts(&all) {
        println!("  {district}");
    }
}
