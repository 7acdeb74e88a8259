pub mod huggingface;
pub mod scorer;
