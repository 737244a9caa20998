// Helpers compartidos por los tests: generación de planillas .xlsx reales.
#![allow(dead_code)]

use std::path::{Path, PathBuf};

/// Valor a escribir en una celda de la columna A
pub enum Cell {
    Num(f64),
    Text(&'static str),
    /// fila sin celda en la columna A (se escribe algo en la B)
    Skip,
}

/// Escribe `cells` en la columna A (fila 1 en adelante) de la primera hoja.
pub fn write_column(dir: &Path, name: &str, cells: &[Cell]) -> PathBuf {
    let mut book = umya_spreadsheet::new_file();
    let sheet = book.get_sheet_mut(&0).unwrap();
    for (i, cell) in cells.iter().enumerate() {
        let row = i + 1;
        match cell {
            Cell::Num(v) => {
                sheet.get_cell_mut(format!("A{}", row).as_str()).set_value_number(*v);
            }
            // set_value_string: el texto queda como string aunque parezca número
            Cell::Text(s) => {
                sheet.get_cell_mut(format!("A{}", row).as_str()).set_value_string(*s);
            }
            Cell::Skip => {
                sheet.get_cell_mut(format!("B{}", row).as_str()).set_value_number(99.0);
            }
        }
    }
    let path = dir.join(name);
    umya_spreadsheet::writer::xlsx::write(&book, &path).unwrap();
    path
}
