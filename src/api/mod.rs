pub mod distance_matrix;
pub mod service;
