use layer_style_model::{LayerStyle, StylePatch};

use crate::key::LayerKey;

/// Receives every committed style change, after the store holds the new style.
pub trait StyleSubscriber {
    /// Called once per non-empty commit with the patch and the merged style.
    ///
    /// # Errors
    /// An error is reported to whoever committed the change. The style stays committed.
    fn style_changed(
        &mut self,
        key: LayerKey,
        patch: &StylePatch,
        style: &LayerStyle,
    ) -> anyhow::Result<()>;
}

impl<F> StyleSubscriber for F
where
    F: FnMut(LayerKey, &StylePatch, &LayerStyle) -> anyhow::Result<()>,
{
    fn style_changed(
        &mut self,
        key: LayerKey,
        patch: &StylePatch,
        style: &LayerStyle,
    ) -> anyhow::Result<()> {
        self(key, patch, style)
    }
}
