pub mod composition;
pub mod framework;
pub mod modifier;
pub mod object;
