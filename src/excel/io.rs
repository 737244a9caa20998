use calamine::{open_workbook_auto, Data, Reader};
use std::path::Path;

use crate::error::{Error, Result};

/// Convierte una celda de calamine a entero, o `None` si no representa uno.
///
/// - `Int` se usa tal cual
/// - `Float` y `DateTime` se truncan hacia cero (las fechas son su número serial)
/// - `String` se parsea como entero base 10; si falla, la celda se ignora
/// - el resto (`Empty`, `Bool`, `Error`, ISO) se ignora
pub fn cell_to_integer(c: &Data) -> Option<i64> {
    match c {
        Data::Int(i) => Some(*i),
        Data::Float(f) => Some(f.trunc() as i64),
        Data::DateTime(dt) => Some(dt.as_f64().trunc() as i64),
        Data::String(s) => s.parse::<i64>().ok(),
        Data::Bool(_) => None,
        Data::Empty => None,
        Data::Error(_) => None,
        Data::DateTimeIso(_) => None,
        Data::DurationIso(_) => None,
    }
}

/// Lee la columna A de la primera hoja, de arriba hacia abajo, y devuelve
/// los enteros válidos. Filas sin celda en la columna A se omiten.
///
/// El workbook (y su handle de archivo) se libera al salir de la función,
/// también en los caminos de error.
pub fn read_first_column<P: AsRef<Path>>(path: P) -> Result<Vec<i64>> {
    let path = path.as_ref();
    let spreadsheet_err = |source: calamine::Error| Error::Spreadsheet {
        path: path.display().to_string(),
        source,
    };

    let mut workbook = open_workbook_auto(path).map_err(spreadsheet_err)?;

    let range = match workbook.worksheet_range_at(0) {
        Some(r) => r.map_err(spreadsheet_err)?,
        None => {
            return Err(spreadsheet_err(calamine::Error::Msg(
                "workbook has no sheets",
            )))
        }
    };

    let (start, end) = match (range.start(), range.end()) {
        (Some(s), Some(e)) => (s, e),
        // hoja sin celdas
        _ => return Ok(Vec::new()),
    };

    // coordenadas absolutas: (fila, columna); la columna A es 0
    let mut numbers = Vec::new();
    for row in start.0..=end.0 {
        if let Some(value) = range.get_value((row, 0)).and_then(cell_to_integer) {
            numbers.push(value);
        }
    }
    Ok(numbers)
}
