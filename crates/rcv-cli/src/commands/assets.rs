use serde::Serialize;

use rcv_core::entities::StorageAsset;
use rcv_core::options::{AssetQuery, AssetUrlOptions};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{AssetQueryArgs, AssetUrlArgs, AssetsCommands};
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

#[derive(Debug, Serialize)]
struct AssetListResponse {
    assets: Vec<StorageAsset>,
}

#[derive(Debug, Serialize)]
struct AssetUrlResponse {
    path: String,
    bucket: String,
    cdn: bool,
    url: String,
}

/// Handle `rcv assets`.
pub async fn handle(
    action: &AssetsCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        AssetsCommands::Facets => {
            let backend = ctx.backend()?;
            let spinner = Progress::spinner("loading asset facets");
            let facets = backend.get_asset_facets().await;
            spinner.finish_clear();
            output(&facets?, flags.format)
        }
        AssetsCommands::Query(args) => {
            let query = asset_query(args, effective_limit(flags.limit, ctx.default_limit()));
            let assets = ctx.backend()?.query_storage_assets(&query).await?;
            output(&AssetListResponse { assets }, flags.format)
        }
        AssetsCommands::Hero { style } => {
            let assets = ctx
                .backend()?
                .get_hero_assets(style.as_deref(), flags.limit)
                .await?;
            output(&AssetListResponse { assets }, flags.format)
        }
        AssetsCommands::Context { name } => {
            let assets = ctx
                .backend()?
                .get_assets_for_context(name, flags.limit)
                .await?;
            output(&AssetListResponse { assets }, flags.format)
        }
        AssetsCommands::Url(args) => {
            let urls = ctx.asset_urls()?;
            let url = urls.object_url(&args.path, &args.bucket, &url_options(args));
            output(
                &AssetUrlResponse {
                    path: args.path.clone(),
                    bucket: args.bucket.clone(),
                    cdn: urls.uses_cdn(),
                    url,
                },
                flags.format,
            )
        }
    }
}

fn asset_query(args: &AssetQueryArgs, limit: u32) -> AssetQuery {
    AssetQuery {
        style: args.style.clone(),
        dimension: args.dimension.clone(),
        asset_type: args.asset_type.clone(),
        search: args.search.clone(),
        tags: args.tag.clone(),
        limit: Some(limit),
        offset: args.offset,
    }
}

fn url_options(args: &AssetUrlArgs) -> AssetUrlOptions {
    AssetUrlOptions {
        version: args.asset_version.clone(),
        width: args.width,
        height: args.height,
        format: args.image_format,
        quality: args.quality,
    }
}
