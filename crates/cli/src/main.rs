use anyhow::{Context, Result, anyhow, bail};
use clap::{Parser, Subcommand};
use colored::Colorize;
use ebookery_catalog::{CatalogIndex, CatalogItem};
use ebookery_filter::{SearchCriteria, SearchField, apply, set_criteria_field};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// eBookery - e-book catalog search
#[derive(Parser)]
#[command(name = "ebookery")]
#[command(about = "Search and browse an eBookery catalog", long_about = None)]
struct Cli {
    /// Directory holding ebooks.json and (optionally) sections.json
    #[arg(short, long, default_value = "data/catalog")]
    catalog_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter the catalog (case-insensitive substring match on each field)
    Search {
        /// Text the title must contain
        #[arg(long, default_value = "")]
        title: String,

        /// Text at least one author name must contain
        #[arg(long, default_value = "")]
        author: String,

        /// Text the section name must contain
        #[arg(long, default_value = "")]
        section: String,

        /// Maximum number of results to print
        #[arg(long, default_value = "20")]
        limit: usize,
    },

    /// List sections and how many e-books each holds
    Sections,

    /// Show a single e-book
    Show {
        /// E-book id
        #[arg(long)]
        id: String,
    },

    /// Time the filter against random criteria drawn from the catalog
    Benchmark {
        /// Number of searches to run
        #[arg(long, default_value = "1000")]
        iterations: usize,
    },
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let start = Instant::now();
    let index = CatalogIndex::load_from_dir(&cli.catalog_dir).with_context(|| {
        format!("Failed to load catalog from {}", cli.catalog_dir.display())
    })?;
    tracing::debug!("Catalog loaded in {:?}", start.elapsed());

    match cli.command {
        Commands::Search {
            title,
            author,
            section,
            limit,
        } => handle_search(&index, title, author, section, limit)?,
        Commands::Sections => handle_sections(&index),
        Commands::Show { id } => handle_show(&index, &id)?,
        Commands::Benchmark { iterations } => handle_benchmark(&index, iterations)?,
    }

    Ok(())
}

/// Handle the 'search' command
fn handle_search(
    index: &CatalogIndex,
    title: String,
    author: String,
    section: String,
    limit: usize,
) -> Result<()> {
    let mut criteria = SearchCriteria::new();
    for (field, value) in [
        (SearchField::Title, title),
        (SearchField::AuthorNames, author),
        (SearchField::SectionName, section),
    ] {
        criteria = set_criteria_field(&criteria, field.as_str(), value)?;
    }

    let view = apply(index.items(), &criteria);

    let active = criteria
        .active_fields()
        .into_iter()
        .map(|field| format!("{}~{:?}", field, criteria.get(field)))
        .collect::<Vec<_>>();
    let header = if active.is_empty() {
        "All e-books".to_string()
    } else {
        format!("E-books matching {}", active.join(" and "))
    };
    println!(
        "{} ({} of {})",
        header.bold().blue(),
        view.len(),
        index.items().len()
    );

    if view.is_empty() {
        println!("No eBooks available.");
        return Ok(());
    }
    for (rank, item) in view.iter().take(limit).enumerate() {
        println!("{}. {}", (rank + 1).to_string().green(), describe(item));
    }
    if view.len() > limit {
        println!("... and {} more", view.len() - limit);
    }
    Ok(())
}

/// Handle the 'sections' command
fn handle_sections(index: &CatalogIndex) {
    println!("{}", "Sections:".bold().blue());
    for section in index.sections() {
        let count = index.get_items_by_section(&section.id).len();
        match &section.description {
            Some(description) => println!(
                "{}{} ({} e-books) - {}",
                "• ".green(),
                section.name,
                count,
                description
            ),
            None => println!("{}{} ({} e-books)", "• ".green(), section.name, count),
        }
    }
    let uncategorized = index.uncategorized_items().len();
    if uncategorized > 0 {
        println!("{}Uncategorized ({} e-books)", "• ".yellow(), uncategorized);
    }
}

/// Handle the 'show' command
fn handle_show(index: &CatalogIndex, id: &str) -> Result<()> {
    let item = index
        .get_item(id)
        .ok_or_else(|| anyhow!("E-book {} not found", id))?;

    println!("{}", item.title.bold().blue());
    println!("{}Id: {}", "• ".green(), item.id);
    println!("{}Authors: {}", "• ".green(), item.author_names.join(", "));
    println!(
        "{}Section: {}",
        "• ".green(),
        item.section_name().unwrap_or("N/A")
    );
    if let Some(content) = &item.content {
        println!("{}Content: {}", "• ".cyan(), content);
    }
    Ok(())
}

/// Handle the 'benchmark' command
fn handle_benchmark(index: &CatalogIndex, iterations: usize) -> Result<()> {
    if index.items().is_empty() {
        bail!("Cannot benchmark an empty catalog");
    }
    if iterations == 0 {
        bail!("Need at least one iteration");
    }

    let mut rng = rand::rng();
    let mut timings: Vec<Duration> = Vec::with_capacity(iterations);
    let mut total_matches = 0usize;

    for _ in 0..iterations {
        let criteria = random_criteria(index.items(), &mut rng);
        let start = Instant::now();
        let view = apply(index.items(), &criteria);
        timings.push(start.elapsed());
        total_matches += view.len();
    }

    let total_time: Duration = timings.iter().sum();
    let avg_latency = total_time / (timings.len() as u32);
    timings.sort();
    let p50 = timings[timings.len() / 2];
    let p95 = timings[((timings.len() as f32 * 0.95) as usize).min(timings.len() - 1)];
    let p99 = timings[((timings.len() as f32 * 0.99) as usize).min(timings.len() - 1)];
    let throughput = iterations as f32 / total_time.as_secs_f32().max(f32::EPSILON);

    println!("Benchmark results ({} e-books):", index.items().len());
    println!("Total time: {:?}", total_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", p50);
    println!("P95 latency: {:?}", p95);
    println!("P99 latency: {:?}", p99);
    println!("Average matches: {:.1}", total_matches as f32 / iterations as f32);
    println!("Throughput: {:.2} searches/second", throughput);

    Ok(())
}

/// Pick a short fragment of a random item's field as the search text
fn random_criteria(items: &[CatalogItem], rng: &mut impl Rng) -> SearchCriteria {
    let Some(item) = items.choose(rng) else {
        return SearchCriteria::new();
    };
    let Some(&field) = SearchField::ALL.choose(rng) else {
        return SearchCriteria::new();
    };

    let source = match field {
        SearchField::Title => Some(item.title.as_str()),
        SearchField::AuthorNames => item.author_names.choose(rng).map(String::as_str),
        SearchField::SectionName => item.section_name(),
    };
    let fragment = match source {
        Some(text) if !text.is_empty() => {
            let chars = text.chars().count();
            let len = rng.random_range(1..=chars.min(4));
            let start = rng.random_range(0..=chars - len);
            text.chars().skip(start).take(len).collect()
        }
        _ => String::new(),
    };

    SearchCriteria::new().with_field(field, fragment)
}

/// One-line summary of an e-book
fn describe(item: &CatalogItem) -> String {
    format!(
        "{} by {} [{}] ({})",
        item.title,
        item.author_names.join(", "),
        item.section_name().unwrap_or("N/A"),
        item.id
    )
}
