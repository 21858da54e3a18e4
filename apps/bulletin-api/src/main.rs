use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;

	let args = bulletin_api::Args::parse();

	bulletin_api::run(args).await
}
