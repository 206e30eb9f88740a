mod argg;
mod batch;
mod dispatcher;
mod piped_args;
mod task_executor;

use crate::argg::Argg;
use crate::task_executor::TaskExecutor;
use clap::Parser;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    let argg = Argg::parse();

    // self init
    let _guard = try_init(argg.debug)?;
    tracing::info!("{:#?}", argg);

    let piped_args = piped_args::read_piped_args(std::io::stdin().lock())?;
    tracing::debug!("read {} piped args", piped_args.len());

    let template = argg.template();
    let tasks = batch::split_by_n(piped_args, argg.batch_size())
        .into_iter()
        .map(|batch| TaskExecutor::new(&template, batch))
        .collect::<Vec<_>>();

    let reports = dispatcher::dispatch(tasks, argg.parallel).await?;

    // invocation failures are reported, never propagated into the exit code
    reports
        .iter()
        .filter(|report| !report.is_success())
        .for_each(|report| eprintln!("{}", report));

    Ok(())
}

fn try_init(debug: bool) -> color_eyre::Result<Option<WorkerGuard>> {
    color_eyre::install()?;

    if !debug {
        return Ok(None);
    }

    let filter = EnvFilter::new("info").add_directive("argg=debug".parse()?);

    let current_dir = std::env::current_dir()?;
    let file_appender = tracing_appender::rolling::daily(current_dir.join("logs"), "argg");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer().with_writer(non_blocking);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();

    Ok(Some(guard))
}
