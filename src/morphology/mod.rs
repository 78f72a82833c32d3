pub mod decomposer;
pub mod shapes;
