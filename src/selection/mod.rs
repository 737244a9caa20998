//! Selección del N-ésimo mínimo sin ordenar la colección completa.
//!
//! Se mantiene un max-heap de tamaño N mientras se recorren los M valores:
//! tiempo O(M log N), memoria auxiliar O(N).
//!
//! ```
//! use nthmin::selection::find_nth_minimum;
//!
//! let numbers = [5, 3, 8, 1, 9, 2];
//! assert_eq!(find_nth_minimum(&numbers, 3).unwrap(), 3);
//! ```

mod heap;

pub use heap::BoundedMaxHeap;

use crate::error::{Error, Result};

/// Devuelve el N-ésimo menor valor de `values` (N es 1-based).
///
/// Los duplicados cuentan por separado: para `[5, 3, 3, 8, 1]` y `n = 3`
/// el resultado es `3`.
///
/// # Errores
/// `InvalidArgument` si `values` está vacío o si `n` no está en `[1, values.len()]`.
pub fn find_nth_minimum<T: Ord + Copy>(values: &[T], n: usize) -> Result<T> {
    if values.is_empty() {
        return Err(Error::InvalidArgument(
            "Numbers collection cannot be null or empty".to_string(),
        ));
    }
    if n == 0 || n > values.len() {
        return Err(Error::rank_out_of_range(values.len()));
    }

    let (seed, rest) = values.split_at(n);
    // n >= 1: la semilla nunca está vacía
    let mut heap = BoundedMaxHeap::heapify(seed.to_vec());

    for &value in rest {
        heap.offer(value);
    }

    Ok(heap.peek())
}
