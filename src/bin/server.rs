use std::{
    fs::OpenOptions,
    net::{IpAddr, SocketAddr},
    path::PathBuf,
    process::ExitCode,
    sync::Arc,
};

use axum::{
    Router,
    extract::{MatchedPath, Request},
    middleware,
};
use axum_server::Handle;
use clap::Parser;
use tower_http::trace::TraceLayer;

#[cfg(debug_assertions)]
use tower_livereload::LiveReloadLayer;

use tracing_subscriber::{EnvFilter, Layer, filter, layer::SubscriberExt, util::SubscriberInitExt};

use ledger_rs::{AppState, build_router, graceful_shutdown, logging_middleware};

/// The web server for ledger_rs.
///
/// Transactions are kept in memory and start from a few sample transactions
/// every time the server starts.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The IP address to listen on.
    #[arg(long, default_value = "0.0.0.0")]
    host: IpAddr,

    /// The port to serve the app from.
    #[arg(short, long, default_value_t = 5000)]
    port: u16,

    /// File path to append debug level logs to.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(error) = setup_logging(args.log_file.as_ref()) {
        eprintln!("Could not set up logging: {error}");
        return ExitCode::FAILURE;
    }

    let addr = SocketAddr::from((args.host, args.port));

    let handle = Handle::new();
    tokio::spawn(graceful_shutdown(handle.clone()));

    let router = add_tracing_layer(build_router(AppState::default()))
        .layer(middleware::from_fn(logging_middleware));

    #[cfg(debug_assertions)]
    let router = router.layer(LiveReloadLayer::new());

    tracing::info!("HTTP server listening on {}", addr);
    if let Err(error) = axum_server::bind(addr)
        .handle(handle)
        .serve(router.into_make_service())
        .await
    {
        tracing::error!("Server stopped with an error: {error}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

/// Log to stdout, and at the debug level to `log_file` if one is given.
///
/// The stdout filter is read from `RUST_LOG`, defaulting to `info`.
fn setup_logging(log_file: Option<&PathBuf>) -> std::io::Result<()> {
    let stdout_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let stdout_log = tracing_subscriber::fmt::layer()
        .pretty()
        .with_filter(stdout_filter);

    let debug_log = match log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;

            Some(
                tracing_subscriber::fmt::layer()
                    .pretty()
                    .with_ansi(false)
                    .with_writer(Arc::new(file))
                    .with_filter(filter::LevelFilter::DEBUG),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(stdout_log)
        .with(debug_log)
        .init();

    Ok(())
}

fn add_tracing_layer(router: Router) -> Router {
    let tracing_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request| {
            let method = req.method();
            let uri = req.uri();

            let matched_path = req
                .extensions()
                .get::<MatchedPath>()
                .map(|matched_path| matched_path.as_str());

            tracing::debug_span!("request", %method, %uri, matched_path)
        })
        // Errors are logged where they occur, so skip the default logging of 5xx responses.
        .on_failure(());

    router.layer(tracing_layer)
}
