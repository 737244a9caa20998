// Biblioteca raíz del crate `nthmin`.
// Flujo: ruta de archivo -> excel (extracción) -> selection (heap) -> respuesta HTTP.
pub mod config;
pub mod error;
pub mod excel;
pub mod selection;
pub mod server;
pub mod service;

pub use error::{Error, Result};
pub use selection::find_nth_minimum;
pub use service::NthMinimumService;

/// Ejecuta el servidor HTTP (reexport para facilitar uso desde `main`)
pub use server::run_server;
