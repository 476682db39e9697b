mod image_tests;
mod metadata_tests;
