// Minimal end-to-end check: synthesize a few panels in memory and render a GIF

use std::io::Cursor;

use image::{DynamicImage, ImageOutputFormat, Rgb, RgbImage};
use panel_animator::{
    frames::{natural_cmp, SourceImage},
    AnimationEngine, Config, OutputFormat,
};

fn panel(width: u32, height: u32, step: u32) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    let image = RgbImage::from_fn(width, height, |x, y| {
        let on = (x / 8 + y / 8 + step) % 2 == 0;
        if on { Rgb([255, 140, 0]) } else { Rgb([18, 18, 18]) }
    });

    let mut buf = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(image).write_to(&mut buf, ImageOutputFormat::Png)?;
    Ok(buf.into_inner())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🎞️  Testing Panel-Animator Core Functionality");

    // Test 1: Natural ordering
    println!("\n1. Testing natural ordering...");
    let mut names = vec!["panel10", "panel2", "panel1"];
    names.sort_by(|a, b| natural_cmp(a, b));
    println!("   Sorted: {:?}", names);
    assert_eq!(names, vec!["panel1", "panel2", "panel10"]);

    // Test 2: Sources with mismatched sizes, uploaded out of order
    println!("\n2. Building source panels...");
    let sources = vec![
        SourceImage::new("panel10.png", panel(96, 64, 1)?),
        SourceImage::new("panel2.png", panel(120, 80, 0)?),
        SourceImage::new("panel1.png", panel(64, 64, 1)?),
    ];
    println!("   Created {} panels", sources.len());

    // Test 3: Render
    println!("\n3. Rendering GIF...");
    let engine = AnimationEngine::new(Config::default())?;
    let output = engine.render(sources, 4, OutputFormat::Gif)?;
    println!("   ✅ {} bytes ({})", output.len(), output.content_type());

    match std::fs::write("minimal_test_output.gif", output.bytes()) {
        Ok(()) => println!("   📁 Output saved to: minimal_test_output.gif"),
        Err(e) => println!("   ⚠️  Could not save file: {}", e),
    }

    println!("\n🎉 All checks passed!");
    Ok(())
}
