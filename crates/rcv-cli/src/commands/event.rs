use serde::Serialize;
use serde_json::{Map, Value};

use rcv_core::requests::EventRecord;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::EventArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct EventLogged<'a> {
    logged: bool,
    event_type: &'a str,
}

/// Handle `rcv event`.
pub async fn handle(args: &EventArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let event = EventRecord {
        event_type: args.event_type.clone(),
        payload: parse_payload(args.payload.as_deref())?,
    };
    ctx.backend()?.log_event(&event).await?;
    output(
        &EventLogged {
            logged: true,
            event_type: &args.event_type,
        },
        flags.format,
    )
}

fn parse_payload(raw: Option<&str>) -> anyhow::Result<Map<String, Value>> {
    let Some(raw) = raw else {
        return Ok(Map::new());
    };
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => anyhow::bail!("--payload must be a JSON object, got {other}"),
        Err(error) => anyhow::bail!("invalid --payload JSON: {error}"),
    }
}
