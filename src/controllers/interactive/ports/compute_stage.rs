use crate::core::fractals::FractalKinds;
use crate::core::render::{FrameUniforms, WorkgroupCount};

/// Writes of a compute dispatch that the display stage may not read yet.
///
/// Only [`ComputeStagePort::memory_barrier`] turns this into
/// [`VisibleWrites`], so a frame cannot be drawn without passing the barrier.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "the dispatch must be followed by a memory barrier"]
pub struct PendingWrites {
    groups: WorkgroupCount,
}

/// Compute results that are safe to sample.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "visible writes should be drawn"]
pub struct VisibleWrites {
    groups: WorkgroupCount,
}

impl PendingWrites {
    /// Called by a backend's `dispatch` once the work has been submitted.
    pub(crate) fn new(groups: WorkgroupCount) -> Self {
        Self { groups }
    }

    #[must_use]
    pub fn groups(&self) -> WorkgroupCount {
        self.groups
    }

    /// Called by a backend's `memory_barrier` after the ordering point has
    /// been inserted.
    pub(crate) fn into_visible(self) -> VisibleWrites {
        VisibleWrites {
            groups: self.groups,
        }
    }
}

impl VisibleWrites {
    #[must_use]
    pub fn groups(&self) -> WorkgroupCount {
        self.groups
    }
}

pub trait ComputeStagePort {
    fn use_program(&mut self, kind: FractalKinds);

    fn upload_uniforms(&mut self, uniforms: &FrameUniforms);

    fn dispatch(&mut self, groups: WorkgroupCount) -> PendingWrites;

    fn memory_barrier(&mut self, writes: PendingWrites) -> VisibleWrites;
}
