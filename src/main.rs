use analytics::{format_lift, format_money};
use analyzer::{ItemView, PortfolioView};
use anyhow::Context;
use clap::{Parser, Subcommand};
use comfy_table::{Table, presets::UTF8_FULL};
use configuration::{Config, DEFAULT_CONFIG_FILE, init_tracing, load_config};
use core_types::JoinKey;
use dataset::Dataset;
use std::path::PathBuf;

/// The main entry point for the promo insight dashboard.
fn main() -> anyhow::Result<()> {
    // Optional: a .env file may carry PROMO_* overrides.
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    let config = load_config(&cli.config)
        .with_context(|| format!("Failed to load configuration from {:?}", cli.config))?;
    // Held until exit so a file logger flushes.
    let _log_guard = init_tracing(&config.logging)?;

    let dataset = Dataset::load(&config.data).context("Failed to load the promo and sales tables")?;

    // Execute the appropriate command
    match cli.command {
        Commands::Summary(args) => handle_summary(args, &config, &dataset),
        Commands::Item(args) => handle_item(args, &config, &dataset),
        Commands::Items => {
            for name in dataset.item_names() {
                println!("{}", name);
            }
            Ok(())
        }
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Promotion performance for retail merchandising: profit versus lift per item.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show every item's average profit and lift, plus the highlighted stars and risks.
    Summary(SummaryArgs),
    /// Show one item's promotions, daily sales and recommendation.
    Item(ItemArgs),
    /// List the item names accepted by `item --name`.
    Items,
}

#[derive(Parser)]
struct SummaryArgs {
    /// Only include items with at least this many promotions.
    #[arg(long)]
    min_promos: Option<usize>,

    /// Print the view as JSON instead of tables.
    #[arg(long)]
    json: bool,
}

#[derive(Parser)]
struct ItemArgs {
    /// The item's display name, exactly as listed by `items`.
    #[arg(long)]
    name: String,

    /// How to match the item to its promotions. Defaults to the configured key.
    #[arg(long, value_enum)]
    join_key: Option<JoinKey>,

    /// Print the view as JSON instead of tables.
    #[arg(long)]
    json: bool,
}

// ==============================================================================
// Command Logic
// ==============================================================================

fn handle_summary(args: SummaryArgs, config: &Config, dataset: &Dataset) -> anyhow::Result<()> {
    let requested = args
        .min_promos
        .unwrap_or(config.highlights.default_min_promos);
    let mut view = PortfolioView::build(dataset, &config.highlights, requested);

    // Keep the threshold inside the range the data supports.
    let upper = view.min_promos_range.1;
    if requested > upper {
        tracing::warn!(requested, upper, "Minimum promotions exceeds the largest count; clamping.");
        view = PortfolioView::build(dataset, &config.highlights, upper);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    println!("Item Profit vs Lift Analysis");
    println!(
        "Minimum # of promotions: {} (range {}-{})",
        view.min_promos, view.min_promos_range.0, view.min_promos_range.1
    );

    let mut scatter = Table::new();
    scatter.load_preset(UTF8_FULL).set_header(vec![
        "UPC",
        "Item",
        "Avg Profit Diff",
        "Avg Lift",
        "Total Revenue",
        "Total Profit",
        "Promos",
        "Quadrant",
    ]);
    for item in &view.filtered {
        scatter.add_row(vec![
            item.upc.clone(),
            item.item_name.clone(),
            format_money(item.avg_profit),
            format_lift(item.avg_lift),
            format_money(item.total_revenue),
            format_money(item.total_profit),
            item.promo_count.to_string(),
            item.classification().to_string(),
        ]);
    }
    println!("{scatter}");

    if let (Some(profit), Some(lift)) = (view.profit_domain, view.lift_domain) {
        println!(
            "Profit axis: {} to {}   Lift axis: {} to {}",
            format_money(profit.min),
            format_money(profit.max),
            format_lift(lift.min),
            format_lift(lift.max)
        );
    }

    if view.highlights.is_empty() {
        println!("No items qualify as stars or risks at this threshold.");
        return Ok(());
    }

    let mut highlights = Table::new();
    highlights
        .load_preset(UTF8_FULL)
        .set_header(vec!["Quadrant", "Item", "Avg Profit Diff", "Avg Lift", "Guidance"]);
    for highlight in &view.highlights {
        highlights.add_row(vec![
            highlight.classification.to_string(),
            highlight.item.item_name.clone(),
            format_money(highlight.item.avg_profit),
            format_lift(highlight.item.avg_lift),
            highlight.classification.guidance().to_string(),
        ]);
    }
    println!("{highlights}");

    Ok(())
}

fn handle_item(args: ItemArgs, config: &Config, dataset: &Dataset) -> anyhow::Result<()> {
    let join_key = args.join_key.unwrap_or(config.data.join_key);
    let view = ItemView::build(dataset, &args.name, join_key);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    println!("Promotion Periods with Metrics: {}", view.item_name);
    if view.has_promotions() {
        let mut promos = Table::new();
        promos.load_preset(UTF8_FULL).set_header(vec![
            "UPC",
            "Period",
            "Start",
            "End",
            "Days",
            "Revenue",
            "Prior Revenue",
            "Lift",
            "Profit",
            "Prior Profit",
            "Profit Diff",
        ]);
        for promo in &view.promotions {
            promos.add_row(vec![
                promo.upc.clone(),
                promo.sale_period.to_string(),
                promo.promo_start.to_string(),
                promo.promo_end.to_string(),
                promo.promo_length.to_string(),
                format_money(promo.promo_revenue),
                format_money(promo.preceding_non_promo_revenue),
                format_lift(promo.lift),
                format_money(promo.promo_profit),
                format_money(promo.preceding_non_promo_profit),
                format_money(promo.profit_difference),
            ]);
        }
        println!("{promos}");
    } else {
        println!("No promotions found for this item.");
    }

    match view.recommendation.classification() {
        Some(classification) => println!("Recommendation ({}): {}", classification, view.recommendation.text()),
        None => println!("Recommendation: {}", view.recommendation.text()),
    }

    println!("Units Sold Over Time");
    let mut sales = Table::new();
    sales
        .load_preset(UTF8_FULL)
        .set_header(vec!["Date", "Units Sold", "Price", "Regular Price", "On Promo"]);
    for day in &view.sales {
        let on_promo = view
            .promo_windows
            .iter()
            .any(|w| w.start <= day.sale_date && day.sale_date <= w.end);
        sales.add_row(vec![
            day.sale_date.to_string(),
            day.items_sold.normalize().to_string(),
            format_money(day.current_price),
            format_money(day.regular_price),
            (if on_promo { "yes" } else { "" }).to_string(),
        ]);
    }
    println!("{sales}");

    Ok(())
}
