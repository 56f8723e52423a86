use crate::error::Result;
use crate::types::{ImageAsset, ImageAssetKind};
use std::path::{Path, PathBuf};

/// What the remote API needs to render or serve an asset
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadTarget<'a> {
    /// Export a node (vector shapes) by node id
    Node(&'a str),
    /// Fetch an image fill by its image reference
    ImageRef(&'a str),
}

impl ImageAsset {
    pub fn download_target(&self) -> DownloadTarget<'_> {
        match (self.kind, self.image_ref.as_deref()) {
            (ImageAssetKind::Fill, Some(image_ref)) => DownloadTarget::ImageRef(image_ref),
            _ => DownloadTarget::Node(&self.node_id),
        }
    }
}

/// Fetches one image and stores it locally
///
/// Implemented by the network layer; the simplifier never performs I/O itself.
pub trait ImageFetcher {
    /// # Returns
    /// * `Ok(Some(path))` - Where the image was written
    /// * `Ok(None)` - If the remote side has no image for this target
    /// * `Err(SimplifyError)` - If the fetch or write failed
    fn fetch(&self, target: &DownloadTarget<'_>, file_name: &str, dir: &Path) -> Result<Option<PathBuf>>;
}

/// A successfully fetched asset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadedAsset {
    pub node_id: String,
    pub path: PathBuf,
}

/// Fetch every asset, skipping the ones that are missing or fail
///
/// One bad asset never fails the batch; misses and errors are logged.
pub fn download_image_assets(
    fetcher: &dyn ImageFetcher,
    assets: &[ImageAsset],
    dir: &Path,
) -> Vec<DownloadedAsset> {
    let mut downloaded = Vec::with_capacity(assets.len());

    for asset in assets {
        let target = asset.download_target();
        match fetcher.fetch(&target, &asset.file_name, dir) {
            Ok(Some(path)) => downloaded.push(DownloadedAsset {
                node_id: asset.node_id.clone(),
                path,
            }),
            Ok(None) => tracing::warn!(node_id = %asset.node_id, ?target, "no image available, skipping"),
            Err(err) => tracing::warn!(node_id = %asset.node_id, ?target, %err, "image download failed, skipping"),
        }
    }

    downloaded
}
