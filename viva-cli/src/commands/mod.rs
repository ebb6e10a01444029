mod report;
mod serve;

pub use report::report;
pub use serve::serve;
