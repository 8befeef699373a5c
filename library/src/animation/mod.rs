pub mod animated;
pub mod keyframeable;
pub mod placement;
pub mod track;
