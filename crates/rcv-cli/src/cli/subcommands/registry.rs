use clap::Subcommand;
use rcv_content::registry::{Category, Status};

/// Command-centre registry commands.
#[derive(Clone, Debug, Subcommand)]
pub enum RegistryCommands {
    /// Search pages and stories.
    Search { query: String },
    /// A page with its related pages and dependencies.
    Page { id: String },
    /// A story by ID, e.g. ST42.
    Story { id: String },
    /// Pages in a category.
    Category { category: Category },
    /// Pages with a status.
    Status { status: Status },
    /// Totals by category and status.
    Stats,
}
