use std::cell::RefCell;
use std::rc::Rc;

use anyhow::anyhow;
use layer::{
    Inset, LayerKey, LayerStore, LayerStyle, Position, Side, StyleField, StylePatch,
    StyleSubscriber,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

type Log = Rc<RefCell<Vec<(LayerKey, Vec<StyleField>, LayerStyle)>>>;

struct Recorder {
    log: Log,
}

impl StyleSubscriber for Recorder {
    fn style_changed(
        &mut self,
        key: LayerKey,
        patch: &StylePatch,
        style: &LayerStyle,
    ) -> anyhow::Result<()> {
        self.log.borrow_mut().push((key, patch.fields(), style.clone()));
        Ok(())
    }
}

fn recording_store() -> (LayerStore, Log) {
    let log: Log = Rc::default();
    let mut store = LayerStore::new();
    store.subscribe(Box::new(Recorder {
        log: Rc::clone(&log),
    }));
    (store, log)
}

#[test]
fn subscribers_see_each_commit() -> anyhow::Result<()> {
    init_logging();
    let (mut store, log) = recording_store();
    let key = store.insert_layer(LayerKey::ROOT, "headline")?;

    store.edit_named(key, "top", "12")?;
    store.edit_named(key, "zIndex", "3")?;

    let entries = log.borrow();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].1, vec![StyleField::Inset(Side::Top)]);
    assert_eq!(entries[1].1, vec![StyleField::ZIndex]);
    assert_eq!(entries[1].2.top, Inset::Length(12.0));
    assert_eq!(entries[1].2.z_index, 3);
    Ok(())
}

#[test]
fn rejected_and_empty_edits_do_not_notify() -> anyhow::Result<()> {
    init_logging();
    let (mut store, log) = recording_store();
    let key = store.insert_layer(LayerKey::ROOT, "cta")?;

    assert!(store.edit_named(key, "position", "center").is_err());
    assert!(store.edit_named(key, " ", "1").is_err());
    store.commit(key, &StylePatch::default())?;

    assert!(log.borrow().is_empty());
    assert_eq!(store.style(key), Some(&LayerStyle::default()));
    Ok(())
}

#[test]
fn unknown_layers_are_errors() {
    let (mut store, log) = recording_store();
    assert!(store.commit(LayerKey(99), &StylePatch::with_z_index(1)).is_err());
    assert!(store.edit_named(LayerKey(99), "top", "1").is_err());
    assert!(log.borrow().is_empty());
}

#[test]
fn closure_subscribers_and_failures() -> anyhow::Result<()> {
    init_logging();
    let mut store = LayerStore::new();
    let seen = Rc::new(RefCell::new(0_u32));
    let counter = Rc::clone(&seen);
    store.subscribe(Box::new(
        move |_key: LayerKey, _patch: &StylePatch, _style: &LayerStyle| -> anyhow::Result<()> {
            *counter.borrow_mut() += 1;
            Ok(())
        },
    ));
    store.subscribe(Box::new(
        |_key: LayerKey, _patch: &StylePatch, style: &LayerStyle| -> anyhow::Result<()> {
            if style.position == Position::Sticky {
                return Err(anyhow!("sticky layers are not previewable"));
            }
            Ok(())
        },
    ));

    let key = store.insert_layer(LayerKey::ROOT, "nav")?;
    store.edit(key, &StyleField::Position, "fixed")?;
    let result = store.edit(key, &StyleField::Position, "sticky");

    assert!(result.is_err(), "the failing subscriber must be reported");
    assert_eq!(*seen.borrow(), 2, "every subscriber still runs");
    assert_eq!(
        store.style(key).map(|style| style.position),
        Some(Position::Sticky),
        "the commit itself is kept"
    );
    Ok(())
}

#[test]
fn same_tick_edits_apply_in_delivery_order() -> anyhow::Result<()> {
    let mut store = LayerStore::new();
    let key = store.insert_layer(LayerKey::ROOT, "image")?;
    let batch = StylePatch::with_z_index(5)
        .then(&StylePatch::with_inset(Side::Left, Inset::Length(2.0)))
        .then(&StylePatch::with_z_index(9));
    let style = store.commit(key, &batch)?;
    assert_eq!(style.z_index, 9);
    assert_eq!(style.left, Inset::Length(2.0));
    Ok(())
}

#[test]
fn style_attribute_import_and_snapshot() -> anyhow::Result<()> {
    init_logging();
    let mut store = LayerStore::new();
    let key = store.insert_layer(LayerKey::ROOT, "badge")?;
    store.import_style_attribute(key, "position: absolute; right: 8px; z-index: 2; color: red")?;

    let style = store.style(key).cloned().unwrap_or_default();
    assert_eq!(
        layer::style_attr::to_style_attribute(&style),
        "position: absolute; right: 8px; z-index: 2; color: red"
    );

    let snapshot: serde_json::Value = serde_json::from_str(&store.snapshot_json()?)?;
    assert_eq!(
        snapshot,
        serde_json::json!([{
            "key": 1,
            "parent": 0,
            "name": "badge",
            "style": {
                "position": "absolute",
                "top": null,
                "right": 8.0,
                "bottom": null,
                "left": null,
                "zIndex": 2,
                "extra": { "color": "red" }
            }
        }])
    );
    Ok(())
}

#[test]
fn serialized_style_cannot_smuggle_declarations() -> anyhow::Result<()> {
    init_logging();
    let mut store = LayerStore::new();
    let source = store.insert_layer(LayerKey::ROOT, "caption")?;
    store.edit_named(source, "color", "red; z-index: 99")?;
    store.edit_named(source, "top", "1px; position: fixed")?;
    store.edit_named(source, "left", "6")?;

    let style = store.style(source).cloned().unwrap_or_default();
    assert_eq!(style.extra.get("color").map(String::as_str), Some("red; z-index: 99"));
    let text = layer::style_attr::to_style_attribute(&style);
    assert_eq!(text, "position: relative; left: 6px; z-index: 0");

    let copy = store.insert_layer(LayerKey::ROOT, "caption copy")?;
    let imported = store.import_style_attribute(copy, &text)?;
    assert_eq!(imported.z_index, 0);
    assert_eq!(imported.position, Position::Relative);
    assert_eq!(imported.top, Inset::Auto);
    assert_eq!(imported.left, Inset::Length(6.0));
    assert!(imported.extra.is_empty());
    Ok(())
}
