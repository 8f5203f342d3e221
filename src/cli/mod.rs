mod args;
mod value_enum;

pub use args::{Args, Command, ScanArgs};
pub use value_enum::CliOutputFormat;
