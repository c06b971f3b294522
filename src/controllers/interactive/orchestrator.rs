use crate::config::RenderConfig;
use crate::controllers::interactive::data::ExplorerState;
use crate::controllers::interactive::ports::{ComputeStagePort, DisplayStagePort};
use crate::core::render::{FrameUniforms, WORKGROUP_SIZE, WorkgroupCount};
use crate::core::resolution::RenderTarget;

/// Issues one frame: program, uniforms, dispatch, barrier, draw.
///
/// Holds no per-frame state; everything is recomputed from the explorer state
/// and the current render target.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RenderOrchestrator {
    max_iterations: u32,
    log_scale_max_iterations: u32,
    group_size: u32,
}

impl Default for RenderOrchestrator {
    fn default() -> Self {
        Self::new(&RenderConfig::default())
    }
}

impl RenderOrchestrator {
    #[must_use]
    pub fn new(config: &RenderConfig) -> Self {
        Self {
            max_iterations: config.max_iterations,
            log_scale_max_iterations: config.log_scale_max_iterations,
            group_size: WORKGROUP_SIZE,
        }
    }

    #[must_use]
    pub fn frame_uniforms(&self, state: &ExplorerState, target: &RenderTarget) -> FrameUniforms {
        let toggles = &state.toggles;

        FrameUniforms {
            resolution: (target.h_res, target.v_res),
            seed: toggles.fractal.uses_seed().then_some(state.seed),
            blackout_interior: toggles.interior_black,
            use_log_scale: toggles.log_scale,
            ll_window_pos: state.viewport.lower_left_corner(),
            window_size: state.viewport.size(),
            max_iterations: if toggles.log_scale {
                self.log_scale_max_iterations
            } else {
                self.max_iterations
            },
        }
    }

    pub fn render_frame<B>(&self, backend: &mut B, state: &ExplorerState, target: &RenderTarget)
    where
        B: ComputeStagePort + DisplayStagePort,
    {
        let uniforms = self.frame_uniforms(state, target);
        let groups = WorkgroupCount::covering(target, self.group_size);

        backend.use_program(state.toggles.fractal);
        backend.upload_uniforms(&uniforms);
        let pending = backend.dispatch(groups);
        let visible = backend.memory_barrier(pending);
        backend.draw_quad(visible);
    }
}
