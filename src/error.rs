//! Tipos de error comunes del servicio.
//!
//! Todas las variantes se recuperan en el borde HTTP y se responden como
//! `400 Bad Request` (ver `server`); ninguna es fatal para el proceso.

use thiserror::Error;

/// Resultado común para las operaciones del crate
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Rango N fuera de [1, M] o colección vacía entregada al selector
    #[error("{0}")]
    InvalidArgument(String),

    /// La planilla se leyó pero ninguna celda de la columna A dio un entero
    #[error("No valid numbers found in the file")]
    NoValidData,

    /// El archivo indicado no existe
    #[error("File not found: {0}")]
    NotFound(String),

    /// El archivo existe pero no se pudo abrir como planilla
    #[error("Failed to read spreadsheet '{path}': {source}")]
    Spreadsheet {
        path: String,
        #[source]
        source: calamine::Error,
    },

    /// Fallo inesperado (p. ej. la tarea bloqueante no terminó)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    pub fn rank_out_of_range(len: usize) -> Self {
        Error::InvalidArgument(format!("N must be between 1 and {}", len))
    }
}
