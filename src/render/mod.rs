/// Backend trait, frame type and factory.
pub mod backend;
/// `vello_cpu` rasterizer for draw lists.
pub mod cpu;
