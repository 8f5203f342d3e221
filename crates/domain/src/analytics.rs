pub mod sort;

pub use sort::sort_latest_first;
