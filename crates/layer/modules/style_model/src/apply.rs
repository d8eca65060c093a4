use layer_position::Side;
use log::trace;

use crate::patch::StylePatch;
use crate::style::LayerStyle;

/// Merge `patch` into `current`, returning the next style.
///
/// Keys present in the patch take the patch value verbatim; every other key keeps its
/// current value. `current` is never mutated. The patch is assumed to be well formed
/// (see `layer_patch`); no re-validation happens here.
pub fn apply(current: &LayerStyle, patch: &StylePatch) -> LayerStyle {
    let mut next = current.clone();
    if let Some(position) = patch.position {
        next.position = position;
    }
    for side in Side::ALL {
        if let Some(inset) = patch.inset(side) {
            *next.inset_mut(side) = inset.clone();
        }
    }
    if let Some(z_index) = patch.z_index {
        next.z_index = z_index;
    }
    for (name, value) in &patch.extra {
        if value.is_empty() {
            next.extra.remove(name);
        } else {
            next.extra.insert(name.clone(), value.clone());
        }
    }
    trace!("applied patch touching {:?}", patch.fields());
    next
}
