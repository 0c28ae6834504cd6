//! # Módulo HTTP
//!
//! Este módulo construye la respuesta HTTP/1.0 fija del servidor. No hay
//! parsing de requests: los bytes que envíe el cliente se descartan sin
//! interpretarlos, así que solo existe el lado de salida del protocolo.
//!
//! ## Especificación HTTP/1.0
//!
//! El protocolo HTTP/1.0 (RFC 1945) es más simple que HTTP/1.1:
//! - No requiere el header `Host`
//! - No tiene chunked transfer encoding
//! - No mantiene conexiones persistentes: el body se delimita cerrando la
//!   conexión, por eso la respuesta fija no lleva `Content-Length`
//!
//! ### Formato de la respuesta fija
//!
//! ```text
//! HTTP/1.0 200 OK\r\n
//! Content-Type: text/html\r\n
//! \r\n
//! Hello\r\n
//! ```

pub mod response;  // Construcción de HTTP responses
pub mod status;    // Códigos de estado HTTP

// Re-exportamos los tipos principales para facilitar su uso
// Esto permite usar `http::Response` en vez de `http::response::Response`
pub use response::Response;
pub use status::StatusCode;
