//! # Hello Server
//! src/lib.rs
//!
//! Servidor HTTP/1.0 minimalista que responde `Hello` a toda conexión,
//! implementado con I/O bloqueante en una sola hebra: el patrón
//! aceptar/leer/responder/cerrar en su forma más simple. Lo que envíe el
//! cliente se descarta sin parsear.
//!
//! ## Arquitectura
//!
//! El servidor está dividido en módulos especializados:
//! - `http`: Construcción de la respuesta HTTP/1.0 fija
//! - `server`: Bucle TCP de aceptar y responder
//! - `config`: Configuración por CLI y variables de entorno
//! - `error`: Errores estructurados de setup y accept
//!
//! ## Ejemplo de uso
//!
//! ```no_run
//! use hello_server::server::Server;
//! use hello_server::config::Config;
//!
//! let config = Config::default();
//! let mut server = Server::new(config);
//! server.run().expect("Error al iniciar servidor");
//! ```

pub mod config;
pub mod error;
pub mod http;
pub mod server;
