use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use log::info;

use crate::cascade::{self, FaceCascade};
use crate::cli::ModeExtend;
use crate::config::Opts;
use crate::utils;

/// 单图模式：检测一张图片，保存标注副本并展示，任意按键后关闭
#[derive(Debug, Clone)]
pub struct SingleCommand {
    pub image: PathBuf,
}

impl ModeExtend for SingleCommand {
    fn run(&self, opts: &Opts, cascade: &mut FaceCascade) -> Result<()> {
        let image = match utils::imread(&self.image) {
            Ok(image) => image,
            Err(_) => {
                println!("O caminho da imagem não foi encontrado: {}", self.image.display());
                return Ok(());
            }
        };
        let gray = utils::to_gray(&image)?;
        let (annotated, count) = cascade::annotate_image(cascade, &gray, &opts.detect)?;

        println!("Quantidade de faces: {}", count);

        let output = utils::output_path(&self.image, &opts.detect.output_dir);
        if let Some(parent) = output.parent() {
            fs::create_dir_all(parent)?;
        }
        utils::imwrite(&output, &annotated)?;
        info!("annotated image saved to {}", output.display());

        utils::imshow_wait("Faces", &annotated)?;
        Ok(())
    }
}
