use std::path::Path;

use serde::Serialize;

use rcv_content::seen::{SeenFlags, TRUST_EXPERIENCE};
use rcv_content::trust_flow::{TrustFlow, TrustPattern, TrustResponse};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::TrustArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct TrustOutcome {
    responses: Vec<TrustResponse>,
    pattern: &'static TrustPattern,
    recognized: bool,
    /// True when this is the first completed run for the data directory.
    first_time: bool,
}

/// Handle `rcv trust`: walk the three moments non-interactively and record the visit.
pub fn handle(args: &TrustArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let recognized = args.recognized.unwrap_or(true);
    let (responses, pattern) = walk(&args.choices, recognized)?;
    let first_time = mark_visit(&ctx.data_dir()?)?;
    output(
        &TrustOutcome {
            responses,
            pattern,
            recognized,
            first_time,
        },
        flags.format,
    )
}

/// Choices are one-based as typed on the command line.
fn walk(
    choices: &[u8],
    recognized: bool,
) -> anyhow::Result<(Vec<TrustResponse>, &'static TrustPattern)> {
    let mut flow = TrustFlow::new();
    flow.begin()?;
    for &choice in choices {
        let index = usize::from(choice.saturating_sub(1));
        flow.respond(index)?;
    }
    let pattern = flow.reflect()?;
    flow.recognize(recognized)?;
    flow.go_deeper()?;
    Ok((flow.responses().to_vec(), pattern))
}

fn mark_visit(data_dir: &Path) -> anyhow::Result<bool> {
    let mut seen = SeenFlags::load_in(data_dir)?;
    let first_time = seen.mark_seen(TRUST_EXPERIENCE);
    if first_time {
        seen.save()?;
        tracing::debug!(path = %seen.path().display(), "recorded first trust experience");
    }
    Ok(first_time)
}

#[cfg(test)]
mod tests {
    use super::{mark_visit, walk};

    #[test]
    fn walk_collects_three_responses() {
        let (responses, pattern) = walk(&[1, 1, 1], true).unwrap();
        assert_eq!(responses.len(), 3);
        assert!(!pattern.name.is_empty());
    }

    #[test]
    fn visit_is_first_only_once() {
        let dir = tempfile::tempdir().unwrap();
        assert!(mark_visit(dir.path()).unwrap());
        assert!(!mark_visit(dir.path()).unwrap());
    }
}
