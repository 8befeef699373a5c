pub mod path_tracer;
pub mod ray;
pub mod ray_marcher;
