pub mod goal;
pub mod timeline;
pub mod totals;
