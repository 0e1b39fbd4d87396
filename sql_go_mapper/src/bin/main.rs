use env_logger::Env;
use log::info;
use sql_go_mapper::Opt;
use structopt::StructOpt;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
	let opt = Opt::from_args();

	let level = if opt.debug { "debug" } else { "info" };
	env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

	let written = sql_go_mapper::run(&opt).await?;
	info!("generated {} file(s)", written.len());
	Ok(())
}
