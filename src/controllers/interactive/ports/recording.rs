use crate::controllers::interactive::ports::{
    ComputeStagePort, DisplayStagePort, PendingWrites, RenderTargetPort, VisibleWrites,
};
use crate::core::data::framebuffer_size::FramebufferSize;
use crate::core::fractals::FractalKinds;
use crate::core::render::{FrameUniforms, WorkgroupCount};
use crate::core::resolution::RenderTarget;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    UseProgram(FractalKinds),
    UploadUniforms(FrameUniforms),
    Dispatch(WorkgroupCount),
    MemoryBarrier,
    DrawQuad,
    Reallocate(RenderTarget),
    SetViewport(FramebufferSize),
}

/// Records every port call in order.
#[derive(Debug, Default)]
pub(crate) struct RecordingBackend {
    pub calls: Vec<Call>,
}

impl RecordingBackend {
    pub fn take(&mut self) -> Vec<Call> {
        std::mem::take(&mut self.calls)
    }

    pub fn last_uniforms(&self) -> Option<FrameUniforms> {
        self.calls.iter().rev().find_map(|call| match call {
            Call::UploadUniforms(uniforms) => Some(*uniforms),
            _ => None,
        })
    }
}

impl ComputeStagePort for RecordingBackend {
    fn use_program(&mut self, kind: FractalKinds) {
        self.calls.push(Call::UseProgram(kind));
    }

    fn upload_uniforms(&mut self, uniforms: &FrameUniforms) {
        self.calls.push(Call::UploadUniforms(*uniforms));
    }

    fn dispatch(&mut self, groups: WorkgroupCount) -> PendingWrites {
        self.calls.push(Call::Dispatch(groups));
        PendingWrites::new(groups)
    }

    fn memory_barrier(&mut self, writes: PendingWrites) -> VisibleWrites {
        self.calls.push(Call::MemoryBarrier);
        writes.into_visible()
    }
}

impl DisplayStagePort for RecordingBackend {
    fn draw_quad(&mut self, _writes: VisibleWrites) {
        self.calls.push(Call::DrawQuad);
    }
}

impl RenderTargetPort for RecordingBackend {
    fn reallocate(&mut self, target: RenderTarget) {
        self.calls.push(Call::Reallocate(target));
    }

    fn set_viewport(&mut self, framebuffer: FramebufferSize) {
        self.calls.push(Call::SetViewport(framebuffer));
    }
}
