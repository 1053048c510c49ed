/// UI renderer placeholder for 2D interface elements

use crate::engine_trace;

/// Named button handle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    label: String,
}

impl Button {
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into() }
    }

    pub fn name(&self) -> &str {
        &self.label
    }
}

/// Named panel handle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    title: String,
}

impl Panel {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into() }
    }

    pub fn name(&self) -> &str {
        &self.title
    }
}

/// UI draw command counters since creation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiRendererStats {
    pub texts: u32,
    pub buttons: u32,
    pub panels: u32,
}

impl UiRendererStats {
    pub fn total(&self) -> u32 {
        self.texts.saturating_add(self.buttons).saturating_add(self.panels)
    }
}

#[derive(Debug, Default)]
struct UiContext {
    stats: UiRendererStats,
}

/// Renderer for 2D interface elements
#[derive(Debug, Default)]
pub struct Renderer {
    ui_context: UiContext,
}

impl Renderer {
    const SOURCE: &'static str = "game_engine::ui::Renderer";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn render_text(&mut self, text: &str, x: i32, y: i32) {
        engine_trace!(Self::SOURCE, "render_text({:?}) at ({}, {})", text, x, y);
        self.ui_context.stats.texts = self.ui_context.stats.texts.saturating_add(1);
    }

    pub fn render_button(&mut self, button: &Button) {
        engine_trace!(Self::SOURCE, "render_button('{}')", button.name());
        self.ui_context.stats.buttons = self.ui_context.stats.buttons.saturating_add(1);
    }

    pub fn render_panel(&mut self, panel: &Panel) {
        engine_trace!(Self::SOURCE, "render_panel('{}')", panel.name());
        self.ui_context.stats.panels = self.ui_context.stats.panels.saturating_add(1);
    }

    pub fn stats(&self) -> UiRendererStats {
        self.ui_context.stats
    }
}
