//! # Servidor TCP de Respuesta Fija
//! src/server/tcp.rs
//!
//! Implementación del bucle aceptar/responder: una sola hebra, I/O
//! bloqueante, una conexión a la vez. Los clientes que lleguen mientras se
//! atiende una conexión esperan en el backlog del kernel y se sirven en
//! orden FIFO.
//!
//! No hay timeouts de lectura ni de escritura: un cliente silencioso puede
//! detener el bucle indefinidamente (limitación conocida del diseño).

use crate::config::Config;
use crate::error::{Result, ServerError};
use crate::http::Response;
use socket2::{Domain, Protocol, Socket, Type};
use std::io::{Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream, ToSocketAddrs};
use tracing::{debug, info, warn};

/// Servidor HTTP/1.0 de respuesta fija
///
/// Dos estados posibles: `Listening` (bloqueado en accept) y `Handling`
/// (atendiendo una conexión). `Handling` siempre vuelve a `Listening`; no
/// hay estado terminal salvo un fallo fatal de setup o de accept.
pub struct Server {
    config: Config,
    /// Respuesta precomputada; inmutable y reutilizada por todas las
    /// conexiones (nunca hay más de una activa)
    payload: Vec<u8>,
    listener: Option<TcpListener>,
}

impl Server {
    /// Crea un servidor con la respuesta canónica (`Hello`)
    pub fn new(config: Config) -> Self {
        Self::with_response(config, Response::hello())
    }

    /// Crea un servidor con una respuesta arbitraria
    ///
    /// La respuesta se serializa una sola vez; después no se vuelve a tocar.
    pub fn with_response(config: Config, response: Response) -> Self {
        Self {
            config,
            payload: response.to_bytes(),
            listener: None,
        }
    }

    /// Fase de setup: socket → SO_REUSEADDR → bind → listen
    ///
    /// Retorna la dirección local efectiva, que con puerto 0 es el puerto
    /// efímero que asignó el kernel. Cualquier fallo es fatal: no hay retry
    /// y no queda ningún socket escuchando.
    pub fn bind(&mut self) -> Result<SocketAddr> {
        self.config.validate().map_err(ServerError::Config)?;

        let address = self.config.address();
        let addr = address
            .to_socket_addrs()
            .ok()
            .and_then(|mut addrs| addrs.next())
            .ok_or_else(|| ServerError::Address(address.clone()))?;

        let socket = Socket::new(Domain::for_address(addr), Type::STREAM, Some(Protocol::TCP))
            .map_err(ServerError::Socket)?;
        // SO_REUSEADDR: permite rebind inmediato tras un reinicio, aunque la
        // dirección siga en TIME_WAIT
        socket.set_reuse_address(true).map_err(ServerError::Socket)?;
        socket.bind(&addr.into()).map_err(|source| ServerError::Bind {
            addr: address.clone(),
            source,
        })?;
        socket
            .listen(self.config.backlog)
            .map_err(ServerError::Listen)?;

        let listener: TcpListener = socket.into();
        let local = listener.local_addr().map_err(ServerError::Socket)?;
        info!("servidor escuchando en {}", local);

        self.listener = Some(listener);
        Ok(local)
    }

    /// Dirección local del listener, si ya hubo bind
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.listener.as_ref().and_then(|l| l.local_addr().ok())
    }

    /// Bytes exactos que se envían a cada conexión
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Atiende exactamente una conexión (una iteración del bucle)
    ///
    /// Bloquea hasta que llegue un cliente. Los errores de lectura y
    /// escritura sobre la conexión se absorben; solo un fallo del accept se
    /// retorna al caller.
    pub fn serve_one(&mut self) -> Result<()> {
        if self.listener.is_none() {
            self.bind()?;
        }
        let listener = self.listener.as_ref().unwrap();

        let (stream, peer) = listener.accept().map_err(ServerError::Accept)?;
        debug!("conexión aceptada desde {}", peer);

        if let Err(e) =
            Self::handle_connection(stream, &self.payload, self.config.read_buffer_size)
        {
            // La conexión ya quedó cerrada; el bucle sigue con el próximo accept
            warn!("error al responder a {}: {}", peer, e);
        }
        Ok(())
    }

    /// Bucle de servicio: acepta y responde indefinidamente
    ///
    /// Hace bind si todavía no se hizo. Solo retorna con error (fallo de
    /// setup o de accept, política fatal); la terminación normal del proceso
    /// es externa.
    pub fn run(&mut self) -> Result<()> {
        if self.listener.is_none() {
            self.bind()?;
        }
        loop {
            self.serve_one()?;
        }
    }

    /// Atiende una conexión ya aceptada: leer, descartar, responder, cerrar
    fn handle_connection(
        mut stream: TcpStream,
        payload: &[u8],
        buffer_size: usize,
    ) -> std::io::Result<()> {
        // Una sola lectura acotada; ni el contenido ni un fallo de lectura
        // cambian la respuesta
        let mut buffer = vec![0u8; buffer_size];
        let _ = stream.read(&mut buffer);

        stream.write_all(payload)?;
        stream.flush()?;
        Ok(())
        // `stream` se cierra aquí incondicionalmente (drop)
    }
}
