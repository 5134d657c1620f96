// Image whose source follows the active theme

use crate::tokens::ThemeHandle;
use shared::ThemedAsset;
use zoon::*;

pub fn themed_image(
    asset: &ThemedAsset,
    description: impl Into<String>,
    theme: &ThemeHandle,
) -> impl Element {
    let asset = asset.clone();
    Image::new()
        .url_signal(
            theme
                .signal()
                .map(move |theme| asset.for_theme(theme).to_string()),
        )
        .description(description.into())
}
