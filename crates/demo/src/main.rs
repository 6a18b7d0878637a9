use catalog_demo::{report, seed::SeedSource};

fn main() -> anyhow::Result<()> {
    catalog_observability::init();

    let source = SeedSource::resolve(std::env::args().nth(1), std::env::var("CATALOG_SEED").ok());
    match &source {
        SeedSource::BuiltIn => tracing::info!("no seed file given; using built-in catalog"),
        SeedSource::File(path) => tracing::info!(path = %path.display(), "loading seed file"),
    }

    let categories = source.load()?;
    tracing::info!(categories = categories.len(), "catalog loaded");

    println!("{}", report::render(&categories));
    println!();
    println!("{}", report::zero_quantity_check());

    Ok(())
}
