//! Integration tests for the component capabilities
//!
//! Only the public API is visible here: internal components are reached
//! through the factory and used as `dyn InternalComponent`.

use game_engine::game::component::{
    create_internal_component, ComponentRegistry, InternalComponent, Updatable,
};
use game_engine::game::ui::{self, Button, Panel};

/// Accumulates whole seconds, like a game clock
struct Clock {
    seconds: i32,
}

impl Updatable for Clock {
    fn update(&mut self, delta_time: f32) {
        self.seconds += delta_time as i32;
    }

    fn is_active(&self) -> bool {
        true
    }
}

fn update_twice(component: &mut dyn Updatable) {
    component.update(1.0);
    component.update(2.5);
}

#[test]
fn test_fresh_component_is_inactive() {
    let component = create_internal_component();
    assert!(!component.is_active());
}

#[test]
fn test_component_lifecycle_via_base_handle() {
    let mut component: Box<dyn InternalComponent> = create_internal_component();
    component.initialize();
    assert!(component.is_active());
    component.shutdown();
    assert!(!component.is_active());
    component.shutdown();
    assert!(!component.is_active());
}

#[test]
fn test_component_moves_between_owners() {
    let mut component = create_internal_component();
    component.initialize();

    let moved = component;
    let owners = vec![moved];
    assert!(owners[0].is_active());
}

#[test]
fn test_updatable_used_uniformly() {
    let mut clock = Clock { seconds: 0 };
    let mut internal = create_internal_component();

    update_twice(&mut clock);
    update_twice(&mut internal);

    assert_eq!(clock.seconds, 3);
    assert!(!internal.is_active());
}

#[test]
fn test_registry_of_mixed_components() {
    let mut registry: ComponentRegistry = ComponentRegistry::new();
    let clock = registry.insert(Box::new(Clock { seconds: 0 }));
    let internal = registry.insert(Box::new(create_internal_component()));

    assert_eq!(registry.update_all(1.0), 1);
    assert_eq!(registry.active_count(), 1);
    assert!(registry.get(clock).unwrap().is_active());
    assert!(!registry.get(internal).unwrap().is_active());
}

#[test]
fn test_ui_renderer_placeholder() {
    let mut renderer = ui::Renderer::new();
    renderer.render_panel(&Panel::new("HUD"));
    renderer.render_button(&Button::new("Pause"));
    renderer.render_text("FPS 60", 4, 4);
    assert_eq!(renderer.stats().total(), 3);
}
