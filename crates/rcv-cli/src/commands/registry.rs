use anyhow::Context;
use serde::Serialize;

use rcv_content::registry::{self, RegistryPage};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::RegistryCommands;
use crate::commands::shared::limit::take;
use crate::output::output;

#[derive(Debug, Serialize)]
struct PageDetail {
    page: &'static RegistryPage,
    related: Vec<&'static RegistryPage>,
    dependencies: Vec<&'static RegistryPage>,
}

/// Handle `rcv registry`. Everything here reads the compiled-in registry.
pub fn handle(action: &RegistryCommands, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        RegistryCommands::Search { query } => output(&registry::search(query), flags.format),
        RegistryCommands::Page { id } => {
            let page = registry::page_by_id(id)
                .or_else(|| registry::page_by_route(id))
                .with_context(|| format!("no registry page '{id}'"))?;
            let detail = PageDetail {
                page,
                related: registry::related_pages(page.id),
                dependencies: registry::page_dependencies(page.id),
            };
            output(&detail, flags.format)
        }
        RegistryCommands::Story { id } => {
            let story = registry::story_by_id(id).with_context(|| format!("no story '{id}'"))?;
            output(story, flags.format)
        }
        RegistryCommands::Category { category } => output(
            &take(registry::pages_by_category(*category), listing_limit(flags)),
            flags.format,
        ),
        RegistryCommands::Status { status } => output(
            &take(registry::pages_by_status(*status), listing_limit(flags)),
            flags.format,
        ),
        RegistryCommands::Stats => output(&registry::stats(), flags.format),
    }
}

/// The registry is small, so listings are unbounded unless `--limit` is given.
fn listing_limit(flags: &GlobalFlags) -> u32 {
    flags.limit.unwrap_or(u32::MAX)
}
