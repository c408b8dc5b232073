use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{ColorMode, GlobalFlags, OutputFormat, ProgressMode};
pub use root_commands::Commands;

/// Top-level CLI parser for the `rcv` binary.
#[derive(Debug, Parser)]
#[command(
    name = "rcv",
    version,
    about = "Recoverlution toolbox: asset governance, backend reads, and site content"
)]
pub struct Cli {
    /// Command to run. Without one, runs the asset sync sequence.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Max results to return
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Colorize table output: auto, always, never
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorMode,

    /// Show progress bars: auto, on, off
    #[arg(long, global = true, default_value = "auto")]
    pub progress: ProgressMode,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            verbose: self.verbose,
            color: self.color,
            progress: self.progress,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use rcv_core::enums::ImageFormat;

    use super::subcommands::{AssetsCommands, FeedCommands, GovernanceCommands};
    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_is_allowed() {
        let cli = Cli::try_parse_from(["rcv"]).expect("cli should parse");
        assert!(cli.command.is_none());
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "rcv", "--format", "table", "--limit", "10", "--verbose", "sync",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert_eq!(cli.limit, Some(10));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Some(Commands::Sync)));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["rcv", "registry", "stats", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        assert!(Cli::try_parse_from(["rcv", "--format", "xml", "sync"]).is_err());
    }

    #[test]
    fn governance_preview_args() {
        let cli = Cli::try_parse_from([
            "rcv",
            "governance",
            "preview",
            "flowstate",
            "--type",
            "image",
            "--dimension",
            "16:9",
        ])
        .expect("cli should parse");
        let Some(Commands::Governance {
            action:
                GovernanceCommands::Preview {
                    style,
                    asset_type,
                    dimension,
                },
        }) = cli.command
        else {
            panic!("expected governance preview");
        };
        assert_eq!(style, "flowstate");
        assert_eq!(asset_type.as_deref(), Some("image"));
        assert_eq!(dimension.as_deref(), Some("16:9"));
    }

    #[test]
    fn asset_query_collects_repeated_tags() {
        let cli = Cli::try_parse_from([
            "rcv", "assets", "query", "--tag", "flow", "--tag", "calm", "--offset", "20",
        ])
        .expect("cli should parse");
        let Some(Commands::Assets {
            action: AssetsCommands::Query(args),
        }) = cli.command
        else {
            panic!("expected assets query");
        };
        assert_eq!(args.tag, vec!["flow", "calm"]);
        assert_eq!(args.offset, Some(20));
    }

    #[test]
    fn asset_url_parses_image_format() {
        let cli = Cli::try_parse_from([
            "rcv", "assets", "url", "brand/a.png", "--image-format", "webp", "--width", "800",
        ])
        .expect("cli should parse");
        let Some(Commands::Assets {
            action: AssetsCommands::Url(args),
        }) = cli.command
        else {
            panic!("expected assets url");
        };
        assert_eq!(args.image_format, Some(ImageFormat::Webp));
        assert_eq!(args.width, Some(800));
        assert!(Cli::try_parse_from(["rcv", "assets", "url", "a.png", "--image-format", "gif"]).is_err());
    }

    #[test]
    fn feed_watch_defaults() {
        let cli = Cli::try_parse_from(["rcv", "feed", "watch"]).expect("cli should parse");
        let Some(Commands::Feed {
            action: FeedCommands::Watch { interval, ticks, .. },
        }) = cli.command
        else {
            panic!("expected feed watch");
        };
        assert_eq!(interval, 30);
        assert_eq!(ticks, None);
    }

    #[test]
    fn feed_watch_ticks_must_be_positive() {
        let cli = Cli::try_parse_from(["rcv", "feed", "watch", "--ticks", "2"])
            .expect("cli should parse");
        let Some(Commands::Feed {
            action: FeedCommands::Watch { ticks, .. },
        }) = cli.command
        else {
            panic!("expected feed watch");
        };
        assert_eq!(ticks, Some(2));

        assert!(Cli::try_parse_from(["rcv", "feed", "watch", "--ticks", "0"]).is_err());
    }

    #[test]
    fn trust_requires_three_choices_in_range() {
        let cli = Cli::try_parse_from(["rcv", "trust", "3", "1", "1", "--recognized", "false"])
            .expect("cli should parse");
        let Some(Commands::Trust(args)) = cli.command else {
            panic!("expected trust");
        };
        assert_eq!(args.choices, vec![3, 1, 1]);
        assert_eq!(args.recognized, Some(false));

        assert!(Cli::try_parse_from(["rcv", "trust", "1", "2"]).is_err());
        assert!(Cli::try_parse_from(["rcv", "trust", "1", "2", "5"]).is_err());
    }
}
