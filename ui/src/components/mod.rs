pub mod backdrop;
pub mod hero;

pub use hero::Hero;
