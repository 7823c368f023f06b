//! Fair insurance quote server.
//!
//! Serves two routes:
//!
//! - `GET /` — plain-text liveness message.
//! - `POST /api/quote` — accepts `{model, year, city, accidents, driver_age}` (numbers may be
//!   strings) and answers with `{fair_price, offers}`, one offer per company.
//!
//! Every request is priced independently; the server keeps no state between requests.
//!
//! Usage example (CLI):
//! ```bash
//! PORT=3000 insurance_server --host 127.0.0.1
//! ```
#![warn(missing_docs)]
use clap::Parser;
use insurance_server::ServerError;
use insurance_server::config::Args;
use insurance_server::create_router;
use log::info;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    dotenvy::dotenv().ok();
    init_logger();
    let args = Args::parse();

    let bind_addr = args.bind_addr()?;
    let listener = TcpListener::bind(bind_addr).await?;
    info!("Backend listening on {}", listener.local_addr()?);

    axum::serve(listener, create_router()).await?;
    Ok(())
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
