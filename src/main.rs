use std::sync::Arc;

use acidserve::config::Config;
use acidserve::logger;
use acidserve::server::{signal, Server, SignalHandler};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = Config::load()?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: Config) -> Result<(), Box<dyn std::error::Error>> {
    // A failed bind is fatal: propagate and exit non-zero with the cause
    let server = Server::bind(&cfg)?;
    let addr = server.local_addr()?;

    let signals = Arc::new(SignalHandler::new());
    signal::spawn_signal_listener(Arc::clone(&signals));

    logger::log_server_start(&addr, server.root());

    server.run(Arc::clone(&signals.shutdown)).await;

    logger::log_server_stopped();
    Ok(())
}
