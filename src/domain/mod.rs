pub mod geo;
pub mod place;
pub mod feedback;
