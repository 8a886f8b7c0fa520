//! Bundle delivery server.

mod lifecycle;
mod route;

use crate::{
    bundle::{Combiner, Served, respond_text},
    config::Config,
    core::is_shutdown,
    debug, log,
};
use anyhow::{Context, Result};
use std::path::PathBuf;
use std::sync::Arc;
use tiny_http::{Request, Server};

/// Worker threads handling requests.
const REQUEST_THREADS: usize = 4;

/// Bound server ready to accept requests
pub struct BoundServer {
    server: Arc<Server>,
}

/// Bind the HTTP server without starting the request loop
pub fn bind_server(config: &Config) -> Result<BoundServer> {
    let (server, addr) = lifecycle::bind_with_retry(config.serve.interface, config.serve.port)?;
    let server = Arc::new(server);
    lifecycle::register_server_for_shutdown(Arc::clone(&server));

    log!("serve"; "http://{}", addr);
    debug!("serve"; "root {}", config.serve.root.display());

    Ok(BoundServer { server })
}

impl BoundServer {
    /// Start the request loop (blocking until shutdown).
    pub fn run(self, combiner: Combiner, root: PathBuf) -> Result<()> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(REQUEST_THREADS)
            .build()
            .context("failed to create request thread pool")?;
        let handler = Arc::new(Handler { combiner, root });

        for request in self.server.incoming_requests() {
            let handler = Arc::clone(&handler);
            pool.spawn(move || {
                if let Err(e) = handler.handle(request) {
                    log!("serve"; "request error: {e:#}");
                }
            });
        }
        Ok(())
    }
}

/// Start the delivery server for `config`.
pub fn serve(config: &Config) -> Result<()> {
    let combiner = Combiner::new(&config.bundle).with_context(|| {
        format!(
            "Failed to prepare output directory {}",
            config.bundle.output_dir.display()
        )
    })?;
    let bound = bind_server(config)?;
    bound.run(combiner, config.serve.root.clone())
}

/// Shared per-request state.
struct Handler {
    combiner: Combiner,
    root: PathBuf,
}

impl Handler {
    /// Handle a single HTTP request
    fn handle(&self, request: Request) -> Result<Served> {
        if is_shutdown() {
            return respond_text(request, 503, "503 Service Unavailable");
        }

        match route::parse(request.method(), request.url()) {
            Ok(route) => {
                let files = route.resolve(&self.root);
                debug!("serve"; "{} {} file(s)", route.kind, files.len());
                self.combiner
                    .combine_and_serve(request, &files, route.kind)
            }
            Err(e) => {
                debug!("serve"; "{} {}", e.status(), request.url());
                respond_text(request, e.status(), &e.to_string())
            }
        }
    }
}
