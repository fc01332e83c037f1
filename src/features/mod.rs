pub mod debate;
pub mod generation;
pub mod nlp;
