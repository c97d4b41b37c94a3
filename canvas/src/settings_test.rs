use super::*;

fn engine(width: u32, height: u32) -> BoxEngine {
    BoxEngine::new(CanvasDimensions::new(width, height))
}

// =============================================================
// project
// =============================================================

#[test]
fn bounds_follow_floored_canvas() {
    let view = project(&engine(700, 512), StrokeHistory::<()>::empty());
    assert_eq!(view.width_bounds, ControlBounds { min: 64, max: 640, step: 64 });
    assert_eq!(view.height_bounds, ControlBounds { min: 64, max: 512, step: 64 });
}

#[test]
fn reset_buttons_disabled_at_canvas_extent() {
    let mut e = engine(512, 512);
    let view = project(&e, StrokeHistory::<()>::empty());
    assert!(view.reset_width_disabled);
    assert!(view.reset_height_disabled);

    e.resize_width(128.0);
    let view = project(&e, StrokeHistory::<()>::empty());
    assert!(!view.reset_width_disabled);
    assert!(view.reset_height_disabled);
}

#[test]
fn hidden_box_disables_every_control() {
    let mut e = engine(512, 512);
    e.resize_width(128.0);
    e.resize_height(128.0);
    e.set_show(false);
    let view = project(&e, StrokeHistory::<()>::empty());
    assert!(view.controls_disabled);
    assert!(view.reset_width_disabled);
    assert!(view.reset_height_disabled);
}

#[test]
fn history_depths_are_reported() {
    let past = [1, 2, 3];
    let future = [4];
    let view = project(&engine(512, 512), StrokeHistory::new(&past, &future));
    assert_eq!(view.undo_depth, 3);
    assert_eq!(view.redo_depth, 1);
}

// =============================================================
// ProjectionCache
// =============================================================

#[test]
fn cache_starts_empty() {
    let cache = ProjectionCache::<BoxSettingsView>::new();
    assert!(cache.get().is_none());
}

#[test]
fn cache_ignores_structurally_equal_views() {
    let e = engine(512, 512);
    let mut cache = ProjectionCache::new();
    assert!(cache.refresh(project(&e, StrokeHistory::<()>::empty())));
    assert!(!cache.refresh(project(&e, StrokeHistory::<()>::empty())));
}

#[test]
fn cache_replaces_changed_views() {
    let mut e = engine(512, 512);
    let mut cache = ProjectionCache::new();
    cache.refresh(project(&e, StrokeHistory::<()>::empty()));
    e.toggle_lock();
    assert!(cache.refresh(project(&e, StrokeHistory::<()>::empty())));
    assert!(cache.get().is_some_and(|v| v.locked));
}
