use clap::Parser;
use vscch_lib::CliArgs;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    vscch_lib::run_app(args).await
}
