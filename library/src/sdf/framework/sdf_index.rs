use derive_more::Display;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Display)]
#[display("sdf #{_0}")]
pub struct SdfIndex(pub usize);

impl From<usize> for SdfIndex {
    fn from(value: usize) -> Self {
        SdfIndex(value)
    }
}
