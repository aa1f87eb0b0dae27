//! Generate three ad variations for a product photo.
//!
//! Run with: `cargo run --example generate_ad -- product.jpg`
//!
//! Requires `GEMINI_API_KEY` (or `GOOGLE_API_KEY`) environment variable.

use adgenius::{AdConfiguration, AdGenerator, AdStyle, EnvCredentials, GeminiProvider, ImageData};

#[tokio::main]
async fn main() -> adgenius::Result<()> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "product.jpg".to_string());

    let provider = GeminiProvider::builder().build()?;
    let generator = AdGenerator::new(provider, EnvCredentials);

    let config = AdConfiguration::new()
        .with_style(AdStyle::Ecommerce)
        .with_price("29.99");
    let product = ImageData::from_path(&path)?;

    let images = generator.generate_images(product, &config).await?;
    for image in &images {
        let file_name = image.default_file_name();
        image.save(&file_name)?;
        println!(
            "Variation {}: {} ({} bytes, {:?})",
            image.variation,
            file_name,
            image.size(),
            image.format
        );
    }
    println!("Generated {} of 3 variations", images.len());

    Ok(())
}
