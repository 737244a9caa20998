//! Orquestación: extrae los números de la planilla, valida N y delega en
//! el selector.

use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::error::{Error, Result};
use crate::excel::{ExcelNumberSource, NumberSource};
use crate::selection::find_nth_minimum;

#[derive(Clone)]
pub struct NthMinimumService {
    source: Arc<dyn NumberSource>,
}

impl NthMinimumService {
    pub fn new(source: Arc<dyn NumberSource>) -> Self {
        NthMinimumService { source }
    }

    /// Servicio respaldado por archivos Excel reales.
    pub fn excel() -> Self {
        NthMinimumService::new(Arc::new(ExcelNumberSource))
    }

    /// Busca el N-ésimo mínimo en la columna A de `file_path`.
    ///
    /// N llega con signo desde la query string: valores negativos o cero
    /// se rechazan con el mismo mensaje que uno demasiado grande. Los
    /// errores de lectura tienen precedencia sobre la validación de N.
    pub fn find_nth_minimum<P: AsRef<Path>>(&self, file_path: P, n: i64) -> Result<i64> {
        let file_path = file_path.as_ref();
        let numbers = self.source.extract(file_path)?;
        debug!(path = %file_path.display(), count = numbers.len(), "numbers extracted");

        let rank = match usize::try_from(n) {
            Ok(r) if r >= 1 && r <= numbers.len() => r,
            _ => return Err(Error::rank_out_of_range(numbers.len())),
        };

        let result = find_nth_minimum(&numbers, rank)?;
        debug!(n = rank, result, "nth minimum selected");
        Ok(result)
    }
}
