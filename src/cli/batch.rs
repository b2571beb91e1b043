use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use log::{debug, info};
use walkdir::WalkDir;

use crate::cascade::{self, FaceCascade};
use crate::cli::ModeExtend;
use crate::config::Opts;
use crate::utils;

// 批量分支沿用原版无重音的消息变体，与 cli::mod 的 INVALID_INPUT 刻意不同，不要合并
const INVALID_ENTRY: &str = "Entrada invalida. \nCertifique-se de fornecer um arquivo de \
                             imagem valido ou o caminho para uma pasta contendo imagens.";

/// 批量模式：处理文件夹内的全部图片，结果写入其下的输出目录
#[derive(Debug, Clone)]
pub struct BatchCommand {
    pub dir: PathBuf,
}

impl ModeExtend for BatchCommand {
    fn run(&self, opts: &Opts, cascade: &mut FaceCascade) -> Result<()> {
        let out_dir = self.dir.join(&opts.detect.output_dir);
        let entries = scan_folder(&self.dir, &opts.detect.output_dir);
        info!("scanning {}: {} entries", self.dir.display(), entries.len());

        for (path, accepted) in entries {
            if !accepted {
                debug!("skipping {}", path.display());
                println!("{}", INVALID_ENTRY);
                continue;
            }
            // 单张图片失败不影响其余图片
            if let Err(e) = process_image(&path, &out_dir, opts, cascade) {
                eprintln!("[ERR] {}: {}", path.display(), e);
            }
        }
        Ok(())
    }
}

/// 列出目录的直接子项（按文件名排序），并按批量模式的大小写敏感
/// 后缀规则标记是否接受。输出目录本身被排除，保证重复运行幂等
pub fn scan_folder(dir: &Path, output_dir: &str) -> Vec<(PathBuf, bool)> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            !(entry.file_type().is_dir() && entry.file_name() == std::ffi::OsStr::new(output_dir))
        })
        .map(|entry| {
            let accepted = utils::has_image_suffix(&entry.file_name().to_string_lossy());
            (entry.into_path(), accepted)
        })
        .collect()
}

fn process_image(
    path: &Path,
    out_dir: &Path,
    opts: &Opts,
    cascade: &mut FaceCascade,
) -> Result<()> {
    let image = match utils::imread(path) {
        Ok(image) => image,
        Err(_) => {
            println!("O caminho da imagem não foi encontrado: {}", path.display());
            return Ok(());
        }
    };
    let gray = utils::to_gray(&image)?;
    let (annotated, count) = cascade::annotate_image(cascade, &gray, &opts.detect)?;

    let name = path.file_name().unwrap_or_default();
    println!("Quantidade de faces em {} : {}", name.to_string_lossy(), count);

    fs::create_dir_all(out_dir)?;
    utils::imwrite(&out_dir.join(name), &annotated)?;
    Ok(())
}
