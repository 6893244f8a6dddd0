pub mod decode;
pub mod film;

pub use decode::{decode_film, decode_films};
pub use film::Film;
