pub mod builder;
pub mod snapshot;
pub mod stems;
