pub mod file_utils;
pub mod image_utils;
