//! Owning store for layers and their styles.

use std::collections::HashMap;

use anyhow::{Context as _, Result, anyhow};
use layer_patch::build_patch;
use layer_position::paint_order;
use layer_style_attr::patch_from_style_attribute;
use layer_style_model::{LayerStyle, StyleField, StylePatch, apply};
use log::{debug, warn};
use serde::Serialize;
use tracing::debug_span;

use crate::key::LayerKey;
use crate::subscriber::StyleSubscriber;

/// A positionable element of the canvas. Owns exactly one style.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Layer {
    pub key: LayerKey,
    pub parent: LayerKey,
    pub name: String,
    pub style: LayerStyle,
}

/// Holds every layer of a canvas and is the only place styles are replaced.
///
/// All mutation is synchronous; edits are merged in call order, last write wins per field.
pub struct LayerStore {
    layers: HashMap<LayerKey, Layer>,
    /// Children per parent in insertion order (the root included).
    children: HashMap<LayerKey, Vec<LayerKey>>,
    next_key: u64,
    subscribers: Vec<Box<dyn StyleSubscriber>>,
}

impl Default for LayerStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LayerStore {
    pub fn new() -> Self {
        let mut children = HashMap::new();
        children.insert(LayerKey::ROOT, Vec::new());
        Self {
            layers: HashMap::new(),
            children,
            next_key: 1,
            subscribers: Vec::new(),
        }
    }

    /// Number of layers (the root is not counted).
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn layer(&self, key: LayerKey) -> Option<&Layer> {
        self.layers.get(&key)
    }

    pub fn style(&self, key: LayerKey) -> Option<&LayerStyle> {
        self.layers.get(&key).map(|layer| &layer.style)
    }

    /// Children of `parent` in insertion order.
    pub fn children(&self, parent: LayerKey) -> &[LayerKey] {
        self.children.get(&parent).map_or(&[], Vec::as_slice)
    }

    /// Register a subscriber for committed style changes.
    pub fn subscribe(&mut self, subscriber: Box<dyn StyleSubscriber>) {
        self.subscribers.push(subscriber);
    }

    /// Create a layer with the default style under `parent`.
    ///
    /// # Errors
    /// Returns an error if `parent` is neither the root nor an existing layer.
    pub fn insert_layer(&mut self, parent: LayerKey, name: impl Into<String>) -> Result<LayerKey> {
        self.insert_layer_with_style(parent, name, LayerStyle::default())
    }

    /// Create a layer with an initial style under `parent`.
    ///
    /// # Errors
    /// Returns an error if `parent` is neither the root nor an existing layer.
    pub fn insert_layer_with_style(
        &mut self,
        parent: LayerKey,
        name: impl Into<String>,
        style: LayerStyle,
    ) -> Result<LayerKey> {
        let Some(siblings) = self.children.get_mut(&parent) else {
            return Err(anyhow!("cannot insert under unknown parent {parent}"));
        };
        let key = LayerKey(self.next_key);
        self.next_key = self.next_key.wrapping_add(1);
        siblings.push(key);
        self.children.insert(key, Vec::new());
        let name = name.into();
        debug!("inserted {key} ({name:?}) under {parent}");
        self.layers.insert(
            key,
            Layer {
                key,
                parent,
                name,
                style,
            },
        );
        Ok(key)
    }

    /// Remove a layer together with its descendants; their styles go with them.
    ///
    /// Returns the removed keys, the requested layer first.
    ///
    /// # Errors
    /// Returns an error for the root or an unknown key.
    pub fn remove_layer(&mut self, key: LayerKey) -> Result<Vec<LayerKey>> {
        if key.is_root() {
            return Err(anyhow!("the canvas root cannot be removed"));
        }
        let parent = self
            .layers
            .get(&key)
            .map(|layer| layer.parent)
            .ok_or_else(|| anyhow!("cannot remove unknown {key}"))?;
        if let Some(siblings) = self.children.get_mut(&parent) {
            siblings.retain(|sibling| *sibling != key);
        }
        let mut removed = Vec::new();
        let mut pending = vec![key];
        while let Some(next) = pending.pop() {
            if let Some(descendants) = self.children.remove(&next) {
                pending.extend(descendants.into_iter().rev());
            }
            self.layers.remove(&next);
            removed.push(next);
        }
        debug!("removed {} layer(s) starting at {key}", removed.len());
        Ok(removed)
    }

    /// Merge `patch` into the style of `key` and notify subscribers.
    ///
    /// An empty patch changes nothing and notifies nobody.
    ///
    /// # Errors
    /// Returns an error for an unknown layer (nothing changes), or the first subscriber error
    /// (the new style is already stored).
    pub fn commit(&mut self, key: LayerKey, patch: &StylePatch) -> Result<&LayerStyle> {
        let _span = debug_span!("commit", layer = key.0).entered();
        let layer = self
            .layers
            .get_mut(&key)
            .ok_or_else(|| anyhow!("cannot edit unknown {key}"))?;
        if patch.is_empty() {
            return Ok(&layer.style);
        }
        layer.style = apply(&layer.style, patch);
        debug!("{key} style now {:?}", layer.style);

        let mut first_error = None;
        for subscriber in &mut self.subscribers {
            if let Err(error) = subscriber.style_changed(key, patch, &layer.style) {
                warn!("style subscriber failed for {key}: {error:#}");
                first_error.get_or_insert(error);
            }
        }
        match first_error {
            Some(error) => Err(error.context(format!("notifying subscribers about {key}"))),
            None => Ok(&layer.style),
        }
    }

    /// Apply raw control text entered into `field` of layer `key`.
    ///
    /// # Errors
    /// A rejected edit ([`layer_patch::PatchError`], e.g. an unknown position mode) leaves the
    /// style unchanged and is returned with context; otherwise as [`LayerStore::commit`].
    pub fn edit(&mut self, key: LayerKey, field: &StyleField, raw_text: &str) -> Result<&LayerStyle> {
        if !self.layers.contains_key(&key) {
            return Err(anyhow!("cannot edit unknown {key}"));
        }
        let patch = build_patch(field, raw_text)
            .with_context(|| format!("rejected {field} edit on {key}"))?;
        self.commit(key, &patch)
    }

    /// Like [`LayerStore::edit`], naming the field the way a control does (`zIndex`, `top`).
    ///
    /// # Errors
    /// As [`LayerStore::edit`]; a blank field name is rejected.
    pub fn edit_named(&mut self, key: LayerKey, field_name: &str, raw_text: &str) -> Result<&LayerStyle> {
        let field = StyleField::parse(field_name)
            .ok_or(layer_patch::PatchError::EmptyField)
            .with_context(|| format!("rejected edit on {key}"))?;
        self.edit(key, &field, raw_text)
    }

    /// Merge inline `style="..."` text into layer `key`.
    ///
    /// # Errors
    /// As [`LayerStore::commit`].
    pub fn import_style_attribute(&mut self, key: LayerKey, text: &str) -> Result<&LayerStyle> {
        let patch = patch_from_style_attribute(text);
        self.commit(key, &patch)
    }

    /// Children of `parent` in paint order: ascending z-index, ties in insertion order.
    pub fn paint_order(&self, parent: LayerKey) -> Vec<LayerKey> {
        paint_order(self.children(parent).iter().filter_map(|child| {
            self.layers
                .get(child)
                .map(|layer| (*child, layer.style.z_index))
        }))
    }

    /// Layers in depth-first insertion order.
    pub fn layers(&self) -> Vec<&Layer> {
        let mut out = Vec::with_capacity(self.layers.len());
        let mut pending: Vec<LayerKey> = self.children(LayerKey::ROOT).iter().rev().copied().collect();
        while let Some(key) = pending.pop() {
            if let Some(layer) = self.layers.get(&key) {
                out.push(layer);
            }
            pending.extend(self.children(key).iter().rev().copied());
        }
        out
    }

    /// All layers as pretty JSON, depth-first in insertion order.
    ///
    /// # Errors
    /// Forwarded from `serde_json`.
    pub fn snapshot_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.layers()).context("failed to serialize layer snapshot")
    }
}
