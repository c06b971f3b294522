use crate::core::resolution::RenderTarget;

/// Local work-group edge length of both compute kernels (`@workgroup_size(16, 16)`).
pub const WORKGROUP_SIZE: u32 = 16;

/// Number of work-groups per axis for one compute dispatch.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct WorkgroupCount {
    pub x: u32,
    pub y: u32,
}

impl WorkgroupCount {
    /// Rounds up so that every texel of `target` is covered even when the
    /// resolution is not a multiple of `group_size`. Kernels discard the
    /// invocations that fall outside the target.
    #[must_use]
    pub fn covering(target: &RenderTarget, group_size: u32) -> Self {
        let group_size = group_size.max(1);

        Self {
            x: target.h_res.div_ceil(group_size),
            y: target.v_res.div_ceil(group_size),
        }
    }

    #[must_use]
    pub const fn total(&self) -> u64 {
        self.x as u64 * self.y as u64
    }
}
