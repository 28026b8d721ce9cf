use std::env;
use std::path::PathBuf;

use color_eyre::eyre::{eyre, Result};

use rene::dataset::{DatasetConfig, ReneDataset};

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = env::args().collect::<Vec<String>>();
    let root = PathBuf::from(
        args.get(1)
            .map(|arg| arg.as_str())
            .ok_or_else(|| eyre!("usage: browse <dataset-root> [out.png]"))?,
    );
    let out_path = PathBuf::from(args.get(2).map(|arg| arg.as_str()).unwrap_or("sample.png"));

    let rene = ReneDataset::build(&root, DatasetConfig::default())?;
    println!("scenes: {}", rene.num_scenes());
    for name in rene.scene_names() {
        let num_lights = rene.num_lights(name)?;
        let num_cameras = match num_lights {
            0 => 0,
            _ => rene.num_cameras(name, 0)?,
        };
        println!("  {}: {} lightsets x {} cameras", name, num_lights, num_cameras);
    }

    if let Some(&name) = rene.scene_names().first() {
        let value = rene.get(name, 0, 0, "image")?;
        let image = value
            .as_image()
            .ok_or_else(|| eyre!("'image' item is not an image"))?;
        image.save(&out_path)?;
        println!("wrote first view of '{}' to {}", name, out_path.display());
    }

    Ok(())
}
