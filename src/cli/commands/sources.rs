//! edusearch sources - Show per-source record counts for a library.

use std::path::PathBuf;

use clap::Args;
use colored::Colorize;

use crate::app::AppContext;
use crate::error::Result;

#[derive(Args, Debug)]
pub struct SourcesArgs {
    /// Library directory (overrides config)
    #[arg(long)]
    pub library: Option<PathBuf>,
}

pub fn run(ctx: &AppContext, args: &SourcesArgs) -> Result<()> {
    let library = ctx.library(args.library.as_ref());
    let sources = library.load()?;

    let counts = [
        ("content", sources.content.len()),
        ("scheme", sources.schemes.len()),
        ("weekly-plan", sources.weekly_plans.len()),
        ("file", sources.files.len()),
        ("lesson", sources.lessons.len()),
        ("quiz", sources.quizzes.len()),
    ];

    if ctx.format.is_machine_readable() {
        let envelope = serde_json::json!({
            "status": "ok",
            "library": library.root(),
            "total": sources.len(),
            "sources": counts
                .iter()
                .map(|(name, count)| serde_json::json!({"type": name, "count": count}))
                .collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&envelope)?);
        return Ok(());
    }

    if ctx.format.use_colors() {
        println!("Library: {}", library.root().display().to_string().bold());
    } else {
        println!("Library: {}", library.root().display());
    }
    println!();
    for (name, count) in counts {
        println!("  {name:<12} {count}");
    }
    println!();
    println!("  {:<12} {}", "total", sources.len());

    Ok(())
}
