//! # Data Loader Crate
//!
//! This crate loads the TMDB movie catalog snapshot into memory.
//!
//! ## Main Components
//!
//! - **types**: `MovieRecord`, `Catalog` and the name-list decoder
//! - **parser**: Parse the CSV snapshot into records
//! - **index**: Loading entry point and title / overview lookups
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::Catalog;
//! use std::path::Path;
//!
//! let catalog = Catalog::load_from_file(Path::new("data/tmdb_5000_movies.csv"))?;
//!
//! if let Some((index, movie)) = catalog.find_by_title("avatar") {
//!     println!("#{index}: {} ({})", movie.title, movie.genre_names().join(", "));
//! }
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use types::{decode_names, Catalog, CatalogIndex, MovieRecord};
