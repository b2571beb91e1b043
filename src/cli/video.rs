use anyhow::{Result, bail};
use log::{debug, info};
use opencv::prelude::*;
use opencv::{highgui, videoio};

use crate::cascade::{self, FaceCascade};
use crate::cli::ModeExtend;
use crate::config::Opts;

/// 退出实时检测的按键
const STOP_KEY: i32 = 's' as i32;

const WINDOW_NAME: &str = "Video WebCamera";

/// 视频模式：逐帧检测摄像头画面，按 s 键退出
#[derive(Debug, Clone)]
pub struct VideoCommand;

impl ModeExtend for VideoCommand {
    fn run(&self, opts: &Opts, cascade: &mut FaceCascade) -> Result<()> {
        let mut camera = videoio::VideoCapture::new(opts.camera, videoio::CAP_ANY)?;
        info!("capturing from camera {}", opts.camera);

        let result = capture_loop(&mut camera, opts, cascade);

        camera.release()?;
        highgui::destroy_all_windows()?;
        result
    }
}

fn capture_loop(
    camera: &mut videoio::VideoCapture,
    opts: &Opts,
    cascade: &mut FaceCascade,
) -> Result<()> {
    loop {
        let mut frame = Mat::default();
        if !camera.read(&mut frame)? || frame.empty() {
            bail!("camera {} returned an empty frame", opts.camera);
        }

        let (annotated, count) = cascade::annotate_frame(cascade, &frame, &opts.detect)?;
        debug!("faces in frame: {}", count);

        highgui::imshow(WINDOW_NAME, &annotated)?;
        if highgui::wait_key(1)? == STOP_KEY {
            return Ok(());
        }
    }
}
