//! edusearch search - Search across all content sources
//!
//! Builds a `SearchQuery` from the command line, loads a library
//! snapshot and runs the relevance pipeline over it.

use std::path::PathBuf;

use clap::Args;
use colored::Colorize;
use itertools::Itertools;

use crate::app::AppContext;
use crate::cli::output::truncate_str;
use crate::error::Result;
use crate::search::{self, SearchQuery, SearchResult, SortBy, SortOrder, SourceType};

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search text (omit to browse with filters only)
    #[arg(default_value = "")]
    pub query: String,

    /// Restrict to source types (content, scheme, weekly-plan, file, lesson, quiz)
    #[arg(long = "type", short = 't', value_enum, value_delimiter = ',')]
    pub types: Vec<SourceType>,

    /// Filter by level display name (e.g. "Level I")
    #[arg(long)]
    pub level: Vec<String>,

    /// Filter by subject display name (e.g. "Mathematics")
    #[arg(long)]
    pub subject: Vec<String>,

    /// Filter by education system (anglophone, francophone)
    #[arg(long)]
    pub system: Vec<String>,

    /// Filter by author
    #[arg(long)]
    pub author: Vec<String>,

    /// Sort key (default from config: relevance)
    #[arg(long, value_enum)]
    pub sort: Option<SortBy>,

    /// Sort polarity (default from config: descending)
    #[arg(long, value_enum)]
    pub order: Option<SortOrder>,

    /// Maximum number of results (0 = unlimited)
    #[arg(long, short)]
    pub limit: Option<usize>,

    /// Library directory (overrides config)
    #[arg(long)]
    pub library: Option<PathBuf>,
}

pub fn run(ctx: &AppContext, args: &SearchArgs) -> Result<()> {
    let query = SearchQuery::new()
        .text(args.query.clone())
        .types(args.types.clone())
        .levels(args.level.clone())
        .subjects(args.subject.clone())
        .systems(args.system.clone())
        .authors(args.author.clone())
        .sort_by(args.sort.unwrap_or(ctx.config.search.default_sort))
        .sort_order(args.order.unwrap_or(ctx.config.search.default_order));

    let sources = ctx.library(args.library.as_ref()).load()?;
    let mut results = search::search(&query, &sources);

    let limit = args.limit.unwrap_or(ctx.config.search.default_limit);
    if limit > 0 {
        results.truncate(limit);
    }

    display_results(ctx, &query, &results)
}

fn display_results(ctx: &AppContext, query: &SearchQuery, results: &[SearchResult]) -> Result<()> {
    if ctx.format.is_machine_readable() {
        let envelope = serde_json::json!({
            "status": "ok",
            "query": query,
            "count": results.len(),
            "results": results,
        });
        println!("{}", serde_json::to_string_pretty(&envelope)?);
        return Ok(());
    }

    let colors = ctx.format.use_colors();

    if query.is_blank() {
        println!("Nothing to search: give some text or at least one filter.");
        println!();
        println!("Try:");
        println!("  edusearch search fractions");
        println!("  edusearch search --type quiz --subject Mathematics");
        return Ok(());
    }

    if results.is_empty() {
        let text = query.trimmed_text();
        if colors {
            println!("{} No results for '{}'", "!".yellow(), text.cyan());
        } else {
            println!("! No results for '{text}'");
        }
        println!();
        println!("Try:");
        println!("  - Using different keywords");
        println!("  - Removing filters (--type, --level, --subject, --system, --author)");
        return Ok(());
    }

    if colors {
        println!(
            "{} results for '{}':",
            results.len().to_string().bold(),
            query.trimmed_text().cyan()
        );
    } else {
        println!("{} results for '{}':", results.len(), query.trimmed_text());
    }
    println!();

    for (i, result) in results.iter().enumerate() {
        print_result(i, result, colors);
    }

    Ok(())
}

fn print_result(index: usize, result: &SearchResult, colors: bool) {
    let rank = format!("{}.", index + 1);
    let source = result.source_type.as_str();

    if colors {
        let source_colored = match result.source_type {
            SourceType::Content => source.blue(),
            SourceType::Scheme | SourceType::WeeklyPlan | SourceType::Curriculum => source.green(),
            SourceType::File => source.yellow(),
            SourceType::Lesson => source.magenta(),
            SourceType::Quiz => source.cyan(),
        };
        println!("{:4} {} {}", rank.dimmed(), result.title.bold(), source_colored);
        println!(
            "     {} (score: {})",
            result.id.dimmed(),
            result.relevance_score
        );
    } else {
        println!("{:4} {} {}", rank, result.title, source);
        println!("     {} (score: {})", result.id, result.relevance_score);
    }

    let desc = truncate_str(&result.description, 77);
    let suffix = if result.description.chars().count() > 77 {
        "..."
    } else {
        ""
    };
    if colors {
        println!("     {}{}", desc.dimmed(), suffix);
    } else {
        println!("     {desc}{suffix}");
    }

    if !result.matched_fields.is_empty() {
        let fields = result.matched_fields.iter().join(", ");
        if colors {
            println!("     matched: {}", fields.dimmed());
        } else {
            println!("     matched: {fields}");
        }
    }

    println!();
}
