pub mod frozen_graph;
pub mod sdf_arena;
pub mod sdf_base;
pub mod sdf_index;
pub mod sdf_node;
pub mod shape;
