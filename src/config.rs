//! Configuración del servidor leída desde variables de entorno (y `.env`
//! si existe).
//!
//! - `NTHMIN_BIND`: dirección de escucha (por defecto `127.0.0.1:8080`)
//! - `NTHMIN_WORKERS`: cantidad de workers de actix (por defecto, núcleos disponibles)

use std::env;

use tracing::warn;

pub const DEFAULT_BIND: &str = "127.0.0.1:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub workers: usize,
}

// load .env if present
fn load_dotenv() {
    let _ = dotenv::dotenv();
}

impl ServerConfig {
    pub fn from_env() -> Self {
        load_dotenv();
        ServerConfig::from_lookup(|key| env::var(key).ok())
    }

    /// Construye la configuración a partir de una función de búsqueda de
    /// variables (útil en tests para no depender del entorno real).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = match lookup("NTHMIN_BIND") {
            Some(b) if !b.trim().is_empty() => b.trim().to_string(),
            _ => DEFAULT_BIND.to_string(),
        };

        let default_workers = std::cmp::max(1, num_cpus::get());
        let workers = match lookup("NTHMIN_WORKERS") {
            Some(w) => match w.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    warn!(
                        value = %w,
                        default = default_workers,
                        "invalid NTHMIN_WORKERS, using default"
                    );
                    default_workers
                }
            },
            None => default_workers,
        };

        ServerConfig { bind_addr, workers }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig::from_lookup(|_| None)
    }
}
