use std::io::Write;
use std::path::{Path, PathBuf};

use opencv::core::Vector;
use opencv::prelude::*;
use opencv::{highgui, imgcodecs, imgproc};

/// 接受的图片后缀
pub const IMAGE_SUFFIXES: [&str; 3] = ["jpg", "jpeg", "png"];

/// 判断文件名是否为图片，后缀大小写敏感（批量模式使用）
pub fn has_image_suffix(name: &str) -> bool {
    IMAGE_SUFFIXES.iter().any(|suf| name.ends_with(&format!(".{}", suf)))
}

/// 判断路径是否为图片，后缀大小写不敏感（单图模式使用）
pub fn has_image_suffix_ci(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| IMAGE_SUFFIXES.contains(&ext.as_str()))
}

/// 计算标注结果的保存路径：`<父目录>/<输出目录名>/<文件名>`
pub fn output_path(image: &Path, output_dir: &str) -> PathBuf {
    let parent = image.parent().unwrap_or_else(|| Path::new(""));
    let name = image.file_name().unwrap_or_default();
    parent.join(output_dir).join(name)
}

pub fn imread(path: &Path) -> anyhow::Result<Mat> {
    let img = imgcodecs::imread(&path.to_string_lossy(), imgcodecs::IMREAD_COLOR)?;
    if img.empty() {
        anyhow::bail!("failed to read image: {}", path.display());
    }
    Ok(img)
}

pub fn to_gray(img: &Mat) -> opencv::Result<Mat> {
    let mut gray = Mat::default();
    imgproc::cvt_color_def(img, &mut gray, imgproc::COLOR_BGR2GRAY)?;
    Ok(gray)
}

/// 写出图片。OpenCV 对不可写的目标只返回 false，这里将其转为错误
pub fn imwrite(path: &Path, img: &Mat) -> anyhow::Result<()> {
    let flags = Vector::<i32>::new();
    if !imgcodecs::imwrite(&path.to_string_lossy(), img, &flags)? {
        anyhow::bail!("failed to write image: {}", path.display());
    }
    Ok(())
}

/// 展示图片并等待任意按键，随后关闭窗口
pub fn imshow_wait(winname: &str, img: &Mat) -> opencv::Result<()> {
    highgui::imshow(winname, img)?;
    highgui::wait_key(0)?;
    highgui::destroy_all_windows()
}

/// 读取一行用户输入并去除首尾空白，stdin 关闭时报错
pub fn read_line(prompt: &str) -> anyhow::Result<String> {
    print!("{}", prompt);
    std::io::stdout().flush()?;
    let mut line = String::new();
    if std::io::stdin().read_line(&mut line)? == 0 {
        anyhow::bail!("stdin closed");
    }
    Ok(line.trim().to_owned())
}
