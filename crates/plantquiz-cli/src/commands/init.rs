//! The `plantquiz init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("plantquiz.toml").exists() {
        println!("plantquiz.toml already exists, skipping.");
    } else {
        std::fs::write("plantquiz.toml", SAMPLE_CONFIG)?;
        println!("Created plantquiz.toml");
    }

    std::fs::create_dir_all("data")?;
    let catalog_path = std::path::Path::new("data/plants.csv");
    if catalog_path.exists() {
        println!("data/plants.csv already exists, skipping.");
    } else {
        std::fs::write(catalog_path, EXAMPLE_CATALOG)?;
        println!("Created data/plants.csv");
    }

    println!("\nNext steps:");
    println!("  1. Add your own plants to data/plants.csv");
    println!("  2. Put photos in cache/images/<scientific_name>/ (e.g. cache/images/quercus_robur/)");
    println!("  3. Run: plantquiz validate --catalog data/plants.csv");
    println!("  4. Run: plantquiz play");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# plantquiz configuration

catalog = "data/plants.csv"
data_dir = "cache"
images_dir = "cache/images"

# Minimum similarity (0-100) for an answer to count
threshold = 85
# Extra photos the user may request per question
max_image_refreshes = 2
"#;

const EXAMPLE_CATALOG: &str = "\
scientific_name,accepted_common_names
Quercus robur,zomereik;gewone eik
Fagus sylvatica,beuk;gewone beuk
Acer campestre,Spaanse aak;veldesdoorn
Tilia x europaea,Hollandse linde
Betula pendula,ruwe berk
";
