pub mod daily;
pub mod filtering;
pub(crate) mod frames;
pub mod reducer;
pub mod wind;
