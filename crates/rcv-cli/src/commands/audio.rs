use serde::Serialize;

use rcv_core::requests::{
    DeleteAudioRequest, GenerateUploadUrlRequest, RenameAudioRequest, SignDownloadUrlRequest,
};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AudioCommands;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct AudioChange<'a> {
    action: &'static str,
    object: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    renamed_to: Option<&'a str>,
}

/// Handle `rcv audio`.
pub async fn handle(
    action: &AudioCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let backend = ctx.backend()?;
    match action {
        AudioCommands::List { prefix } => {
            output(&backend.list_user_audio(prefix).await?, flags.format)
        }
        AudioCommands::Rename { from, to } => {
            backend
                .rename_user_audio(&RenameAudioRequest {
                    from: from.clone(),
                    to: to.clone(),
                })
                .await?;
            output(
                &AudioChange {
                    action: "renamed",
                    object: from,
                    renamed_to: Some(to),
                },
                flags.format,
            )
        }
        AudioCommands::Delete { object } => {
            backend
                .delete_user_audio(&DeleteAudioRequest {
                    object: object.clone(),
                })
                .await?;
            output(
                &AudioChange {
                    action: "deleted",
                    object,
                    renamed_to: None,
                },
                flags.format,
            )
        }
        AudioCommands::Sign {
            bucket,
            object,
            expires_in,
        } => {
            let signed = backend
                .sign_download_url(&SignDownloadUrlRequest {
                    bucket: bucket.clone(),
                    object: object.clone(),
                    expires_in: *expires_in,
                })
                .await?;
            output(&signed, flags.format)
        }
        AudioCommands::UploadUrl {
            bucket,
            object,
            content_type,
            expires_in,
        } => {
            let upload = backend
                .generate_upload_url(&GenerateUploadUrlRequest {
                    bucket: bucket.clone(),
                    object: object.clone(),
                    content_type: content_type.clone(),
                    expires_in: *expires_in,
                })
                .await?;
            output(&upload, flags.format)
        }
    }
}
