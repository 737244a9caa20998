//! Módulo `excel`: extracción de la columna numérica desde planillas.
//!
//! Submódulos:
//! - `io`: conversión de celdas y lectura de la primera columna con calamine
//!
//! El resto del crate sólo ve el trait `NumberSource`, de modo que el
//! selector y el servicio se pueden probar sin tocar disco.

/// Helpers de lectura de planillas (calamine)
mod io;

pub use io::{cell_to_integer, read_first_column};

use std::path::Path;

use crate::error::{Error, Result};

/// Fuente de números: `extract(path) -> Vec<i64> | error`.
pub trait NumberSource: Send + Sync {
    fn extract(&self, path: &Path) -> Result<Vec<i64>>;
}

/// Implementación real sobre archivos `.xlsx`/`.xlsm`/`.xls`/`.ods`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExcelNumberSource;

impl NumberSource for ExcelNumberSource {
    fn extract(&self, path: &Path) -> Result<Vec<i64>> {
        if !path.is_file() {
            return Err(Error::NotFound(path.display().to_string()));
        }

        let numbers = read_first_column(path)?;
        if numbers.is_empty() {
            return Err(Error::NoValidData);
        }
        Ok(numbers)
    }
}
