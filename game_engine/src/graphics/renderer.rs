/// 3D renderer placeholder
///
/// Accepts mesh and shader handles and records what was submitted.
/// Nothing is drawn.

use crate::engine_trace;

/// Named mesh handle (no geometry)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mesh {
    name: String,
}

impl Mesh {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Named shader handle (no bytecode)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shader {
    name: String,
}

impl Shader {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Renderer statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RendererStats {
    /// Meshes submitted since the last clear
    pub draw_calls: u32,
    /// Number of clears since creation
    pub clears: u32,
}

/// Backend state, never exposed
#[derive(Debug, Default)]
struct RenderContext {
    bound_shader: Option<String>,
    stats: RendererStats,
}

/// Low-level renderer for 3D objects
#[derive(Debug, Default)]
pub struct Renderer {
    context: RenderContext,
}

impl Renderer {
    const SOURCE: &'static str = "game_engine::graphics::Renderer";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn render_mesh(&mut self, mesh: &Mesh) {
        engine_trace!(Self::SOURCE, "render_mesh('{}') with shader {:?}",
            mesh.name(), self.context.bound_shader);
        self.context.stats.draw_calls = self.context.stats.draw_calls.saturating_add(1);
    }

    pub fn set_shader(&mut self, shader: &Shader) {
        engine_trace!(Self::SOURCE, "set_shader('{}')", shader.name());
        self.context.bound_shader = Some(shader.name().to_string());
    }

    /// Start a new frame: resets the per-frame draw counter
    pub fn clear(&mut self) {
        engine_trace!(Self::SOURCE, "clear()");
        self.context.stats.draw_calls = 0;
        self.context.stats.clears = self.context.stats.clears.saturating_add(1);
    }

    /// Name of the shader bound by the last `set_shader()`
    pub fn bound_shader(&self) -> Option<&str> {
        self.context.bound_shader.as_deref()
    }

    pub fn stats(&self) -> RendererStats {
        self.context.stats
    }
}
