pub mod landing;
pub mod quiz;
