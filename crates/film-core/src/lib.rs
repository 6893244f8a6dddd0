pub mod loader;
pub mod state;

pub use loader::FilmLoader;
pub use state::LoadState;
