//! # Errores del Servidor
//! src/error.rs
//!
//! Errores estructurados de la fase de setup y del accept, para que el
//! caller (por ejemplo un harness de tests) pueda afirmar sobre el modo de
//! fallo en vez de raspar texto impreso. Los errores de lectura/escritura
//! sobre una conexión individual se quedan como `std::io::Error` y el bucle
//! los absorbe.

use thiserror::Error;

/// Alias de Result para las operaciones del servidor
pub type Result<T> = std::result::Result<T, ServerError>;

/// Errores fatales del servidor
#[derive(Debug, Error)]
pub enum ServerError {
    /// Configuración inválida (backlog o buffer fuera de rango)
    #[error("invalid configuration: {0}")]
    Config(String),

    /// La dirección host:port no se pudo resolver
    #[error("invalid address: {0}")]
    Address(String),

    /// No se pudo crear el socket
    #[error("socket error: {0}")]
    Socket(#[source] std::io::Error),

    /// Falló el bind sobre la dirección indicada (típicamente ocupada)
    #[error("bind error on {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// El socket no pudo pasar a estado listening
    #[error("listen error: {0}")]
    Listen(#[source] std::io::Error),

    /// Falló el accept; con la política fatal el servidor se detiene
    #[error("accept error: {0}")]
    Accept(#[source] std::io::Error),
}
