pub mod ignore_rules;

pub use ignore_rules::is_ignored;
