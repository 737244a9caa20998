//! Max-heap de capacidad fija sobre un arreglo plano.
//!
//! Guarda los N valores más pequeños vistos hasta ahora; la raíz (índice 0)
//! es siempre el mayor de ellos, es decir, el candidato a N-ésimo mínimo.

/// Heap acotado usado por `find_nth_minimum`. La capacidad queda fijada por
/// la semilla y nunca cambia.
#[derive(Debug, Clone)]
pub struct BoundedMaxHeap<T> {
    items: Vec<T>,
}

impl<T: Ord + Copy> BoundedMaxHeap<T> {
    /// Construye el heap a partir de los primeros N valores (heapify bottom-up, O(N)).
    /// Devuelve `None` si la semilla viene vacía.
    pub fn from_seed(seed: Vec<T>) -> Option<Self> {
        if seed.is_empty() {
            return None;
        }
        Some(BoundedMaxHeap::heapify(seed))
    }

    /// Igual que `from_seed` pero la semilla debe venir no vacía.
    pub(crate) fn heapify(seed: Vec<T>) -> Self {
        debug_assert!(!seed.is_empty(), "heap seed must not be empty");
        let mut heap = BoundedMaxHeap { items: seed };
        let size = heap.items.len();
        for i in (0..size / 2).rev() {
            heap.sift_down(i);
        }
        heap
    }

    /// Ofrece un valor nuevo: si es estrictamente menor que la raíz la
    /// reemplaza y restaura el invariante. Devuelve `true` si el heap cambió.
    pub fn offer(&mut self, value: T) -> bool {
        if value < self.items[0] {
            self.items[0] = value;
            self.sift_down(0);
            true
        } else {
            false
        }
    }

    /// Raíz actual: el mayor de los N menores valores vistos.
    pub fn peek(&self) -> T {
        self.items[0]
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Consume el heap devolviendo el arreglo en orden de heap (no ordenado).
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    // Versión iterativa del sift-down: baja el elemento `i` mientras algún
    // hijo dentro de [0, len) sea mayor.
    fn sift_down(&mut self, mut i: usize) {
        let size = self.items.len();
        loop {
            let left = 2 * i + 1;
            let right = 2 * i + 2;
            let mut largest = i;

            if left < size && self.items[left] > self.items[largest] {
                largest = left;
            }
            if right < size && self.items[right] > self.items[largest] {
                largest = right;
            }
            if largest == i {
                break;
            }
            self.items.swap(i, largest);
            i = largest;
        }
    }
}
