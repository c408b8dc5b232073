use std::time::Duration;

use rcv_core::requests::FeedPullRequest;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::FeedCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `rcv feed`.
pub async fn handle(
    action: &FeedCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let backend = ctx.backend()?;
    match action {
        FeedCommands::Pull { content_type } => {
            let items = backend
                .feed_pull(&pull_request(flags.limit, content_type))
                .await?;
            output(&items, flags.format)
        }
        FeedCommands::Queue => output(&backend.fetch_feed_queue(flags.limit).await?, flags.format),
        FeedCommands::Watch {
            interval,
            ticks,
            content_type,
        } => {
            let mut poller = backend.watch_feed(
                pull_request(flags.limit, content_type),
                Duration::from_secs(*interval),
            );
            let mut seen = 0u32;
            loop {
                tokio::select! {
                    tick = poller.recv() => {
                        let Some(tick) = tick else { break };
                        match tick {
                            Ok(items) => output(&items, flags.format)?,
                            Err(error) => tracing::warn!(%error, "feed poll failed; will retry"),
                        }
                        seen += 1;
                        if ticks.is_some_and(|max| seen >= max) {
                            break;
                        }
                    }
                    _ = tokio::signal::ctrl_c() => {
                        tracing::info!("stopping feed watch");
                        break;
                    }
                }
            }
            poller.stop();
            Ok(())
        }
    }
}

fn pull_request(limit: Option<u32>, content_types: &[String]) -> FeedPullRequest {
    FeedPullRequest {
        limit,
        content_types: (!content_types.is_empty()).then(|| content_types.to_vec()),
    }
}
