//! `brands` command: print the configured brand catalog.

use cafescout_core::AppConfig;

pub(crate) fn run_list_brands(config: &AppConfig) -> anyhow::Result<()> {
    let catalog = cafescout_core::load_brands(&config.brands_path)?;

    println!(
        "{} configured brands ({}):",
        catalog.brands.len(),
        config.brands_path.display()
    );
    for brand in &catalog.brands {
        let key = brand.osm_brand();
        if key == brand.name {
            println!("  {:<20} {}", brand.slug(), brand.name);
        } else {
            println!("  {:<20} {} (brand tag: {key})", brand.slug(), brand.name);
        }
    }
    Ok(())
}
