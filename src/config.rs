use std::path::{Path, PathBuf};

use clap::Parser;

use crate::cli::*;
use crate::utils;

#[derive(Parser, Debug, Clone)]
#[command(name = "facescan", version)]
pub struct Opts {
    /// Haar Cascade 分类器数据文件路径
    #[arg(short, long, default_value = "haarcascade_frontalface_default.xml")]
    pub cascade: PathBuf,
    /// 摄像头设备序号
    #[arg(long, value_name = "N", default_value_t = 0)]
    pub camera: i32,
    #[command(flatten)]
    pub detect: DetectOptions,
}

#[derive(Parser, Debug, Clone)]
pub struct DetectOptions {
    /// 静态图片模式的多尺度扫描步长
    #[arg(long, value_name = "SCALE", default_value_t = 1.09)]
    pub scale_factor: f64,
    /// 视频模式的多尺度扫描步长
    #[arg(long, value_name = "SCALE", default_value_t = 1.08)]
    pub video_scale_factor: f64,
    /// 保留检测结果所需的最少邻居投票数
    #[arg(long, value_name = "N", default_value_t = 5)]
    pub min_neighbors: i32,
    /// 最小人脸尺寸（像素），仅视频模式生效
    #[arg(long, value_name = "PX", default_value_t = 35)]
    pub min_face_size: i32,
    /// 标注结果的输出目录名
    #[arg(long, value_name = "DIR", default_value = "saida")]
    pub output_dir: String,
}

/// 一行用户输入对应的操作模式
#[derive(Debug, Clone)]
pub enum Mode {
    /// 退出程序
    Exit,
    /// 摄像头实时检测
    Video(VideoCommand),
    /// 处理文件夹内的全部图片
    Batch(BatchCommand),
    /// 处理单张图片
    Single(SingleCommand),
    /// 无法识别的输入
    Invalid(String),
}

impl Mode {
    /// 解析一行（已去除首尾空白的）用户输入
    ///
    /// 哨兵词必须完全匹配；目录判断优先于图片后缀判断。单图模式的
    /// 文件不要求存在，读取失败时才会报告
    pub fn parse(input: &str) -> Mode {
        match input {
            "sair" => Mode::Exit,
            "video" => Mode::Video(VideoCommand),
            _ => {
                let path = Path::new(input);
                if path.is_dir() {
                    Mode::Batch(BatchCommand { dir: path.to_path_buf() })
                } else if utils::has_image_suffix_ci(path) {
                    Mode::Single(SingleCommand { image: path.to_path_buf() })
                } else {
                    Mode::Invalid(input.to_owned())
                }
            }
        }
    }
}
