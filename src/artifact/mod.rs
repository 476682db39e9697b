//! Artifact generation: turning extracted content into files on disk

pub mod image;
pub mod text;
