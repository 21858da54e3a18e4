pub mod routes;
pub mod state;

use std::{net::SocketAddr, path::PathBuf};

use axum::Router;
use clap::Parser;
use color_eyre::eyre;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use bulletin_domain::Exchange;

use crate::state::AppState;

#[derive(Debug, Parser)]
#[command(
	version = bulletin_cli::VERSION,
	rename_all = "kebab",
	styles = bulletin_cli::styles(),
)]
pub struct Args {
	#[arg(long, short = 'c', value_name = "FILE")]
	pub config: PathBuf,
}

pub async fn run(args: Args) -> color_eyre::Result<()> {
	let config = bulletin_config::load(&args.config)?;

	init_tracing(&config)?;

	let (http_addr, admin_addr) = bind_addrs(&config)?;
	let state = AppState::new(config)?;
	let corpus = state.service.corpus();

	tracing::info!(
		config = %args.config.display(),
		announcements = corpus.len(),
		hongkong = corpus.entries(Exchange::HongKong).len(),
		shenzhen = corpus.entries(Exchange::Shenzhen).len(),
		invalid_timestamps = corpus.invalid_timestamps(),
		"Corpus ready."
	);

	let public = serve("public", http_addr, routes::router(state.clone()));
	let admin = serve("admin", admin_addr, routes::admin_router(state));

	tokio::try_join!(public, admin)?;

	Ok(())
}

/// Parses the listen addresses. The admin listener is always loopback; the public one is
/// loopback unless `security.bind_localhost_only` is off.
pub fn bind_addrs(
	config: &bulletin_config::Config,
) -> color_eyre::Result<(SocketAddr, SocketAddr)> {
	let http_addr: SocketAddr = config.service.http_bind.parse()?;
	let admin_addr: SocketAddr = config.service.admin_bind.parse()?;

	if config.security.bind_localhost_only && !http_addr.ip().is_loopback() {
		return Err(eyre::eyre!(
			"service.http_bind must be a loopback address when bind_localhost_only is set."
		));
	}
	if !admin_addr.ip().is_loopback() {
		return Err(eyre::eyre!("service.admin_bind must be a loopback address."));
	}

	Ok((http_addr, admin_addr))
}

async fn serve(name: &'static str, addr: SocketAddr, app: Router) -> color_eyre::Result<()> {
	let listener = TcpListener::bind(addr).await?;

	tracing::info!(listener = name, addr = %listener.local_addr()?, "Listening.");

	axum::serve(listener, app).await?;

	Ok(())
}

fn init_tracing(config: &bulletin_config::Config) -> color_eyre::Result<()> {
	let filter =
		EnvFilter::try_new(&config.service.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

	tracing_subscriber::fmt().with_env_filter(filter).try_init().map_err(|err| eyre::eyre!(err))?;

	Ok(())
}
