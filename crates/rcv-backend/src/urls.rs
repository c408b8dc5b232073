//! Public asset URL derivation. Pure string construction, no I/O.
//!
//! - no CDN: `{backend}/storage/v1/object/public/{bucket}/{path}`
//! - CDN: `{cdn}/{path}` with optional `v`, `width`, `height`, `format`,
//!   `quality` query parameters, in that order
//!
//! An empty path always yields an empty string.

use rcv_core::entities::StorageAsset;
use rcv_core::enums::ImageFormat;
use rcv_core::options::AssetUrlOptions;
use rcv_core::responses::FallbackImageUrls;

/// Bucket used when the caller does not name one.
pub const DEFAULT_BUCKET: &str = "assets";

/// URL builder bound to one backend and an optional CDN.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetUrls {
    backend_url: String,
    cdn_base: Option<String>,
}

impl AssetUrls {
    /// Trailing slashes on either base are ignored.
    #[must_use]
    pub fn new(backend_url: &str, cdn_base: Option<&str>) -> Self {
        Self {
            backend_url: backend_url.trim_end_matches('/').to_string(),
            cdn_base: cdn_base
                .map(|c| c.trim_end_matches('/').to_string())
                .filter(|c| !c.is_empty()),
        }
    }

    /// Whether URLs go through the CDN.
    #[must_use]
    pub const fn uses_cdn(&self) -> bool {
        self.cdn_base.is_some()
    }

    /// Build the public URL for `path` in `bucket`.
    #[must_use]
    pub fn object_url(&self, path: &str, bucket: &str, options: &AssetUrlOptions) -> String {
        if path.is_empty() {
            return String::new();
        }
        let Some(cdn) = &self.cdn_base else {
            let bucket = if bucket.is_empty() { DEFAULT_BUCKET } else { bucket };
            return format!(
                "{}/storage/v1/object/public/{bucket}/{path}",
                self.backend_url
            );
        };

        let mut url = format!("{cdn}/{path}");
        let params = cdn_params(options);
        if !params.is_empty() {
            url.push('?');
            url.push_str(&params.join("&"));
        }
        url
    }

    /// Public URL for a catalogued asset.
    #[must_use]
    pub fn asset_url(&self, asset: &StorageAsset, options: &AssetUrlOptions) -> String {
        self.object_url(asset.object_path(), &asset.bucket_id, options)
    }

    /// One webp URL per breakpoint width.
    #[must_use]
    pub fn responsive_image_urls(&self, asset: &StorageAsset, breakpoints: &[u32]) -> Vec<String> {
        breakpoints
            .iter()
            .map(|&width| {
                let options = AssetUrlOptions {
                    width: Some(width),
                    format: Some(ImageFormat::Webp),
                    ..AssetUrlOptions::default()
                };
                self.asset_url(asset, &options)
            })
            .collect()
    }

    /// webp, avif, and untransformed URLs for progressive fallbacks.
    #[must_use]
    pub fn fallback_image_urls(&self, asset: &StorageAsset) -> FallbackImageUrls {
        FallbackImageUrls {
            webp: self.asset_url(asset, &AssetUrlOptions::format(ImageFormat::Webp)),
            avif: self.asset_url(asset, &AssetUrlOptions::format(ImageFormat::Avif)),
            original: self.asset_url(asset, &AssetUrlOptions::default()),
        }
    }
}

fn cdn_params(options: &AssetUrlOptions) -> Vec<String> {
    let mut params = Vec::new();
    if let Some(version) = options.version.as_deref().filter(|v| !v.is_empty()) {
        params.push(format!("v={}", urlencoding::encode(version)));
    }
    if let Some(width) = options.width.filter(|w| *w > 0) {
        params.push(format!("width={width}"));
    }
    if let Some(height) = options.height.filter(|h| *h > 0) {
        params.push(format!("height={height}"));
    }
    if let Some(format) = options.format {
        params.push(format!("format={format}"));
    }
    if let Some(quality) = options.quality.filter(|q| *q > 0) {
        params.push(format!("quality={quality}"));
    }
    params
}
