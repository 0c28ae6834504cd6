//! # Hello Server - Entry Point
//! src/main.rs
//!
//! Punto de entrada del servidor HTTP/1.0 de respuesta fija.
//!
//! El proceso termina con código 1 ante cualquier fallo de setup o de
//! accept. La terminación normal es externa (señal).

use hello_server::config::Config;
use hello_server::server::Server;

fn main() {
    tracing_subscriber::fmt::init();

    println!("=================================");
    println!("  Hello Server HTTP/1.0");
    println!("=================================\n");

    // Crear configuración (CLI + env, con los valores canónicos por defecto)
    let config = Config::new();
    config.print_summary();

    // Crear el servidor con la respuesta fija
    let mut server = Server::new(config);

    // Iniciar el servidor (esto bloqueará el thread)
    if let Err(e) = server.run() {
        eprintln!("💥 Error fatal: {}", e);
        std::process::exit(1);
    }
}
