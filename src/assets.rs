use crate::error::GameError;
use rust_embed::RustEmbed;
use std::borrow::Cow;

#[derive(RustEmbed)]
#[folder = "assets/"]
pub struct Asset;

pub fn get_asset_bytes(name: &str) -> Option<Cow<'static, [u8]>> {
    Asset::get(name).map(|f| f.data)
}

/// Like `get_asset_bytes`, but a missing asset is a startup error
pub fn require_asset(name: &str) -> Result<Cow<'static, [u8]>, GameError> {
    get_asset_bytes(name).ok_or_else(|| GameError::AssetNotFound(name.to_string()))
}
