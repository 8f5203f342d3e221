pub mod allow_list;
pub mod filters;

pub use allow_list::ExtensionAllowList;
pub use filters::{FilterPipeline, RecordFilter};
