use crate::controllers::interactive::ports::compute_stage::VisibleWrites;

pub trait DisplayStagePort {
    /// Draws the full-window quad sampling the texture the compute stage just
    /// wrote.
    fn draw_quad(&mut self, writes: VisibleWrites);
}
