use crate::material::material::Material;
use crate::material::material_index::MaterialIndex;

#[derive(Clone, Debug, Default)]
pub struct MaterialsWarehouse {
    materials: Vec<Material>,
}

impl MaterialsWarehouse {
    #[must_use]
    pub fn new() -> Self {
        Self { materials: Vec::new() }
    }

    #[must_use]
    pub fn add(&mut self, target: &Material) -> MaterialIndex {
        self.materials.push(*target);
        MaterialIndex(self.materials.len() - 1)
    }

    #[must_use]
    pub fn get(&self, index: MaterialIndex) -> Option<&Material> {
        self.materials.get(index.0)
    }

    #[must_use]
    pub fn contains(&self, index: MaterialIndex) -> bool {
        index.0 < self.materials.len()
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.materials.len()
    }

    #[must_use]
    pub(crate) fn at(&self, index: MaterialIndex) -> &Material {
        &self.materials[index.0]
    }
}
