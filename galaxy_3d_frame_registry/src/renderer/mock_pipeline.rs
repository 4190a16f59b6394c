/// Mock pipeline for unit tests (no GPU required)
///
/// Records every submitted command buffer and backbuffer resize so tests
/// can assert on what the drawer produced.

use crate::error::{Error, Result};
use super::command_buffer::CommandBuffer;
use super::pipeline::RenderPipeline;

#[derive(Debug, Default)]
pub struct MockPipeline {
    pub submitted: Vec<CommandBuffer>,
    pub backbuffer_size: Option<(u32, u32)>,
    /// When set, `submit` fails with this message
    pub fail_submit: Option<String>,
}

impl MockPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(message: &str) -> Self {
        Self {
            fail_submit: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn last(&self) -> Option<&CommandBuffer> {
        self.submitted.last()
    }
}

impl RenderPipeline for MockPipeline {
    fn submit(&mut self, commands: CommandBuffer) -> Result<()> {
        if let Some(message) = &self.fail_submit {
            return Err(Error::SubmissionFailed(message.clone()));
        }
        self.submitted.push(commands);
        Ok(())
    }

    fn resize_backbuffer(&mut self, width: u32, height: u32) -> Result<()> {
        if width == 0 || height == 0 {
            return Err(Error::SubmissionFailed(format!(
                "invalid backbuffer size {}x{}", width, height
            )));
        }
        self.backbuffer_size = Some((width, height));
        Ok(())
    }
}
