//! Tests de integración para el servidor de respuesta fija
//! tests/integration_test.rs
//!
//! Cada test levanta su propio servidor en un puerto efímero
//! (127.0.0.1:0), así los tests no compiten por un puerto fijo ni
//! requieren un proceso externo corriendo.

use hello_server::config::Config;
use hello_server::error::ServerError;
use hello_server::server::Server;
use std::io::{Read, Write};
use std::net::{Shutdown, SocketAddr, TcpStream};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// La respuesta que debe recibir todo cliente, byte a byte
const HELLO: &[u8] = b"HTTP/1.0 200 OK\r\nContent-Type: text/html\r\n\r\nHello\r\n";

/// Helper: configuración de test (loopback + puerto efímero)
fn test_config() -> Config {
    let mut config = Config::default();
    config.host = "127.0.0.1".to_string();
    config.port = 0;
    config
}

/// Helper: levanta un servidor que atiende exactamente `connections` conexiones
fn spawn_server(connections: usize) -> (SocketAddr, JoinHandle<()>) {
    let mut server = Server::new(test_config());
    let addr = server.bind().expect("bind failed");
    let handle = thread::spawn(move || {
        for _ in 0..connections {
            server.serve_one().expect("serve_one failed");
        }
    });
    (addr, handle)
}

/// Helper: conecta, envía `request`, cierra el lado de escritura y lee la
/// respuesta completa
fn exchange(addr: SocketAddr, request: &[u8]) -> Vec<u8> {
    let mut stream = TcpStream::connect(addr).expect("connect failed");
    stream
        .set_read_timeout(Some(Duration::from_secs(5)))
        .unwrap();
    stream
        .set_write_timeout(Some(Duration::from_secs(5)))
        .unwrap();

    if !request.is_empty() {
        stream.write_all(request).expect("write failed");
    }
    stream.shutdown(Shutdown::Write).expect("shutdown failed");

    let mut response = Vec::new();
    stream.read_to_end(&mut response).expect("read failed");
    response
}

#[test]
fn test_empty_request_gets_fixed_response() {
    // Escenario A: el cliente no envía nada y aun así recibe la respuesta
    let (addr, handle) = spawn_server(1);
    assert_eq!(exchange(addr, b""), HELLO);
    handle.join().unwrap();
}

#[test]
fn test_large_request_gets_fixed_response() {
    // Escenario B: 2000 bytes arbitrarios; ni el contenido ni el tamaño de
    // la entrada afectan la salida
    let (addr, handle) = spawn_server(1);
    let request = vec![b'x'; 2000];
    assert_eq!(exchange(addr, &request), HELLO);
    handle.join().unwrap();
}

#[test]
fn test_http_request_gets_fixed_response() {
    let (addr, handle) = spawn_server(1);
    assert_eq!(exchange(addr, b"GET /cualquier/ruta HTTP/1.0\r\n\r\n"), HELLO);
    handle.join().unwrap();
}

#[test]
fn test_request_content_does_not_affect_response() {
    let (addr, handle) = spawn_server(3);
    assert_eq!(exchange(addr, b"\x00\x01\x02\x03garbage"), HELLO);
    assert_eq!(exchange(addr, b"POST / HTTP/1.1\r\nHost: x\r\n\r\nbody"), HELLO);
    assert_eq!(exchange(addr, b"no es http"), HELLO);
    handle.join().unwrap();
}

#[test]
fn test_hundreds_of_sequential_connections() {
    let total = 300;
    let (addr, handle) = spawn_server(total);
    for i in 0..total {
        let response = exchange(addr, b"GET / HTTP/1.0\r\n\r\n");
        assert_eq!(response, HELLO, "la conexión {} recibió otra respuesta", i);
    }
    handle.join().unwrap();
}

#[test]
fn test_client_that_closes_immediately_does_not_break_the_loop() {
    // Escenario C: conectar y cerrar sin leer no debe tumbar ni colgar el
    // servidor
    let (addr, handle) = spawn_server(2);
    drop(TcpStream::connect(addr).expect("connect failed"));
    assert_eq!(exchange(addr, b"GET / HTTP/1.0\r\n\r\n"), HELLO);
    handle.join().unwrap();
}

#[test]
fn test_bind_fails_while_port_is_taken() {
    let mut first = Server::new(test_config());
    let addr = first.bind().expect("first bind failed");

    let mut config = test_config();
    config.port = addr.port();
    let mut second = Server::new(config);
    match second.bind() {
        Err(ServerError::Bind { .. }) => {}
        other => panic!("expected bind error, got {:?}", other),
    }
}

#[test]
fn test_port_rebindable_after_shutdown() {
    let mut config = test_config();
    let mut first = Server::new(config.clone());
    let addr = first.bind().expect("first bind failed");
    drop(first);

    config.port = addr.port();
    let mut second = Server::new(config);
    second.bind().expect("rebind after shutdown failed");
}
