pub mod errors;
pub mod html;
pub mod shutdown;
