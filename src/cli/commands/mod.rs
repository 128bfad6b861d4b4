//! Command handlers.

use crate::app::AppContext;
use crate::error::Result;

use super::Commands;

pub mod search;
pub mod sources;

pub fn run(ctx: &AppContext, command: &Commands) -> Result<()> {
    match command {
        Commands::Search(args) => search::run(ctx, args),
        Commands::Sources(args) => sources::run(ctx, args),
    }
}
