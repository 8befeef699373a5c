use derive_more::Display;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Display)]
#[display("material #{_0}")]
pub struct MaterialIndex(pub usize);

impl From<usize> for MaterialIndex {
    fn from(value: usize) -> Self {
        MaterialIndex(value)
    }
}
