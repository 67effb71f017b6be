use image::GrayImage;
use image_variant::{EncoderChain, Variant};
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let output_dir = Path::new("tmp");
    std::fs::create_dir_all(output_dir)?;

    let img = GrayImage::from_fn(256, 64, |x, _| image::Luma([x as u8]));
    let stem = output_dir.join("gradient");
    let encoders = EncoderChain::default();

    for variant in Variant::all() {
        let out = variant.render(&img);
        match encoders.save(&out, &stem, *variant) {
            Some(path) => println!("✓ Generated {}", path.display()),
            None => println!("✗ {} kept in memory only", variant),
        }
    }

    println!("\n✓ All variants generated!");
    println!("  Images saved to: tmp/");

    Ok(())
}
