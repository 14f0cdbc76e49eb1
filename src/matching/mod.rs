pub mod scoring;
pub mod segmentation;
pub mod tokenization;
