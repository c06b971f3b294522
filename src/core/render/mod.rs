pub mod uniforms;
pub mod workgroups;

pub use uniforms::FrameUniforms;
pub use workgroups::{WORKGROUP_SIZE, WorkgroupCount};
