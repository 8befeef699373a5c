pub mod material;
pub mod material_index;
pub mod materials_warehouse;
pub mod scattering;
