/// CommandBuffer - recorded frame commands, in submission order.
///
/// Recording is backend-agnostic: the pipeline receiving the buffer
/// translates each `Command` into its own API calls.

use std::sync::Arc;
use crate::light::GpuLightRecord;
use crate::registry::DrawData;
use crate::resource::Material;

/// A single recorded command
#[derive(Debug, Clone)]
pub enum Command {
    /// Replace the frame's light buffer
    UploadLights(Vec<GpuLightRecord>),
    /// Bind a material's pipeline and parameters for the draws that follow
    BindMaterial(Arc<Material>),
    /// Issue one draw call with the bound material
    Draw(DrawData),
}

#[derive(Debug, Clone, Default)]
pub struct CommandBuffer {
    commands: Vec<Command>,
    draw_count: usize,
    material_bind_count: usize,
}

impl CommandBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn upload_lights(&mut self, records: Vec<GpuLightRecord>) {
        self.commands.push(Command::UploadLights(records));
    }

    pub fn bind_material(&mut self, material: Arc<Material>) {
        self.material_bind_count += 1;
        self.commands.push(Command::BindMaterial(material));
    }

    pub fn draw(&mut self, draw: DrawData) {
        self.draw_count += 1;
        self.commands.push(Command::Draw(draw));
    }

    /// Recorded commands, in recording order
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn draw_count(&self) -> usize {
        self.draw_count
    }

    pub fn material_bind_count(&self) -> usize {
        self.material_bind_count
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Drop all commands, keeping the allocation for the next frame
    pub fn reset(&mut self) {
        self.commands.clear();
        self.draw_count = 0;
        self.material_bind_count = 0;
    }
}
