//! # Configuración del Servidor
//! src/config.rs
//!
//! Este módulo define la configuración del servidor de respuesta fija con
//! soporte para argumentos CLI y variables de entorno. Los valores por
//! defecto reproducen las constantes del servidor original (puerto 80,
//! todas las interfaces, backlog 50, buffer de 2048 bytes).
//!
//! ## Ejemplos de uso
//!
//! ### CLI
//! ```bash
//! ./hello_server --port 8080 --backlog 5
//! ```
//!
//! ### Variables de entorno
//! ```bash
//! HTTP_PORT=8080 HTTP_HOST=127.0.0.1 ./hello_server
//! ```

use clap::Parser;

/// Configuración del servidor HTTP/1.0 de respuesta fija
#[derive(Debug, Clone, Parser)]
#[command(name = "hello_server")]
#[command(about = "Servidor HTTP/1.0 que responde 'Hello' a toda conexión")]
#[command(version = "0.1.0")]
pub struct Config {
    /// Puerto en el que escucha el servidor (0 = puerto efímero)
    #[arg(short, long, default_value = "80", env = "HTTP_PORT")]
    pub port: u16,

    /// Host/IP en el que escucha
    #[arg(long, default_value = "0.0.0.0", env = "HTTP_HOST")]
    pub host: String,

    /// Cola de conexiones pendientes (backlog de listen)
    #[arg(long, default_value = "50", env = "BACKLOG")]
    pub backlog: i32,

    /// Tamaño del buffer de lectura en bytes (el contenido se descarta)
    #[arg(long = "read-buffer-size", default_value = "2048", env = "READ_BUFFER_SIZE")]
    pub read_buffer_size: usize,
}

impl Config {
    /// Crea una nueva configuración parseando argumentos CLI
    ///
    /// # Ejemplo
    /// ```
    /// use hello_server::config::Config;
    ///
    /// let config = Config::new();
    /// println!("Server listening on {}", config.address());
    /// ```
    pub fn new() -> Self {
        Config::parse()
    }

    /// Obtiene la dirección completa para bind (host:port)
    ///
    /// # Ejemplo
    /// ```
    /// use hello_server::config::Config;
    ///
    /// let config = Config::default();
    /// assert_eq!(config.address(), "0.0.0.0:80");
    /// ```
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Valida la configuración
    ///
    /// Retorna errores si hay valores inválidos. El puerto 0 es válido:
    /// pide un puerto efímero al kernel (útil en tests).
    pub fn validate(&self) -> Result<(), String> {
        if self.backlog < 1 {
            return Err("Backlog must be >= 1".to_string());
        }
        if self.read_buffer_size == 0 {
            return Err("Read buffer size must be >= 1".to_string());
        }
        Ok(())
    }

    /// Imprime un resumen de la configuración
    pub fn print_summary(&self) {
        println!("╔══════════════════════════════════════════════╗");
        println!("║        Hello Server - Configuración          ║");
        println!("╚══════════════════════════════════════════════╝");
        println!();
        println!("🌐 Red:");
        println!("   Address:      {}", self.address());
        println!("   Backlog:      {}", self.backlog);
        println!();
        println!("📥 Lectura:");
        println!("   Buffer:       {} bytes (el contenido se descarta)", self.read_buffer_size);
        println!();
        println!("═══════════════════════════════════════════════");
        println!();
    }
}

impl Default for Config {
    /// Configuración por defecto: las constantes del servidor original
    fn default() -> Self {
        Self {
            port: 80,
            host: "0.0.0.0".to_string(),
            backlog: 50,
            read_buffer_size: 2048,
        }
    }
}
