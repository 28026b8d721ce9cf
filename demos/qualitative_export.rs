use std::env;
use std::fs;
use std::path::PathBuf;

use color_eyre::eyre::{eyre, Result};
use image::imageops::{self, FilterType};

use rene::qualitative::{QualitativeDataset, EASYTEST, HARDTEST};

const ITEMS: [&str; 5] = ["gt", "image", "shadows", "depth", "$diff|image,gt"];
const EASY_INDICES: [usize; 3] = [33, 67, 101];
const HARD_INDICES: [usize; 3] = [0, 4, 8];

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = env::args().collect::<Vec<String>>();
    let input_folder = PathBuf::from(
        args.get(1)
            .map(|arg| arg.as_str())
            .ok_or_else(|| eyre!("usage: qualitative_export <input-folder> <output-folder> [height]"))?,
    );
    let output_folder = PathBuf::from(
        args.get(2)
            .map(|arg| arg.as_str())
            .ok_or_else(|| eyre!("usage: qualitative_export <input-folder> <output-folder> [height]"))?,
    );
    let target_height = args
        .get(3)
        .map(|arg| arg.parse::<u32>())
        .transpose()?
        .unwrap_or(300);

    fs::create_dir_all(&output_folder)?;
    let qualitatives = QualitativeDataset::new(&input_folder)?;

    for object_name in qualitatives.objects_names() {
        for (split, indices) in &[(EASYTEST, &EASY_INDICES), (HARDTEST, &HARD_INDICES)] {
            for &idx in indices.iter() {
                println!(
                    "{} {} {} ({} indexed)",
                    object_name,
                    split,
                    idx,
                    qualitatives.num_items(object_name, split)?
                );
                let stack = qualitatives.get_stack(object_name, split, idx, &ITEMS)?;

                let width = stack.width() * target_height / stack.height();
                let resized = imageops::resize(&stack, width, target_height, FilterType::CatmullRom);

                let output_path = output_folder
                    .join(format!("{}_{}_{}_{}.png", split, object_name, idx, target_height));
                resized.save(&output_path)?;
                println!("{}", output_path.display());
            }
        }
    }

    Ok(())
}
