use algow::type_of;
use algow::types::Context;
use tracing_subscriber::EnvFilter;

const INPUT: &str = "(x.x z) y";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_target(false)
        .without_time()
        .init();

    let source = std::env::args().nth(1).unwrap_or_else(|| INPUT.to_string());
    let ty = type_of(&source, &Context::prelude())?;
    println!("{}", ty);

    Ok(())
}
