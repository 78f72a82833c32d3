pub mod fuzzy;
pub mod prefix;
