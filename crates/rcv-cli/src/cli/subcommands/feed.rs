use clap::Subcommand;

/// Feed queue commands.
#[derive(Clone, Debug, Subcommand)]
pub enum FeedCommands {
    /// Pull the next items through the feed function.
    Pull {
        /// Restrict to these content types.
        #[arg(long)]
        content_type: Vec<String>,
    },
    /// Due, unsurfaced queue items.
    Queue,
    /// Poll the feed on an interval.
    Watch {
        /// Seconds between polls (minimum 1).
        #[arg(long, default_value_t = 30)]
        interval: u64,
        /// Stop after this many polls (at least 1).
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        ticks: Option<u32>,
        #[arg(long)]
        content_type: Vec<String>,
    },
}
