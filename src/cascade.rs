use std::path::Path;

use anyhow::{Context, Result, bail};
use opencv::core::{Point, Rect, Scalar, Size, Vector};
use opencv::prelude::*;
use opencv::{imgproc, objdetect};

use crate::config::DetectOptions;
use crate::utils;

/// 预训练 Haar Cascade 分类器的包装，进程内加载一次、顺序使用
pub struct FaceCascade {
    inner: objdetect::CascadeClassifier,
}

impl FaceCascade {
    /// 从文件加载分类器，文件缺失或内容为空时报错
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            bail!("cascade file not found: {}", path.display());
        }
        let inner = objdetect::CascadeClassifier::new(&path.to_string_lossy())
            .with_context(|| format!("failed to load cascade: {}", path.display()))?;
        if inner.empty()? {
            bail!("cascade file is not a valid classifier: {}", path.display());
        }
        Ok(Self { inner })
    }

    /// 对灰度图做多尺度扫描，返回检测到的人脸矩形
    pub fn detect(
        &mut self,
        gray: &Mat,
        scale_factor: f64,
        min_neighbors: i32,
        min_size: Size,
    ) -> opencv::Result<Vector<Rect>> {
        let mut faces = Vector::new();
        self.inner.detect_multi_scale(
            gray,
            &mut faces,
            scale_factor,
            min_neighbors,
            0,
            min_size,
            Size::default(),
        )?;
        Ok(faces)
    }
}

/// 在图片副本上为每个人脸绘制矩形，原图不会被修改
pub fn draw_faces(
    img: &Mat,
    faces: &Vector<Rect>,
    color: Scalar,
    thickness: i32,
) -> opencv::Result<Mat> {
    let mut output = img.try_clone()?;
    for face in faces.iter() {
        imgproc::rectangle(&mut output, face, color, thickness, imgproc::LINE_8, 0)?;
    }
    Ok(output)
}

/// 静态图片共用的检测入口：返回标注副本与人脸数量
///
/// 静态路径不限制最小人脸尺寸，该限制仅在视频路径生效
pub fn annotate_image(
    cascade: &mut FaceCascade,
    gray: &Mat,
    opts: &DetectOptions,
) -> Result<(Mat, usize)> {
    let faces = cascade.detect(gray, opts.scale_factor, opts.min_neighbors, Size::default())?;
    let annotated = draw_faces(gray, &faces, Scalar::new(0., 0., 255., 0.), 5)?;
    Ok((annotated, faces.len()))
}

/// 视频帧检测入口：在彩色帧上绘制矩形，并叠加当前人脸计数
pub fn annotate_frame(
    cascade: &mut FaceCascade,
    frame: &Mat,
    opts: &DetectOptions,
) -> Result<(Mat, usize)> {
    let gray = utils::to_gray(frame)?;
    let min_size = Size::new(opts.min_face_size, opts.min_face_size);
    let faces = cascade.detect(&gray, opts.video_scale_factor, opts.min_neighbors, min_size)?;
    let mut output = draw_faces(frame, &faces, Scalar::new(255., 0., 0., 0.), 2)?;
    // 与原行为一致：没有检测到人脸时不绘制计数
    if !faces.is_empty() {
        imgproc::put_text(
            &mut output,
            &format!("Quantidade de Faces:{}", faces.len()),
            Point::new(10, 450),
            imgproc::FONT_HERSHEY_SIMPLEX,
            1.0,
            Scalar::new(0., 255., 0., 0.),
            2,
            imgproc::LINE_AA,
            false,
        )?;
    }
    Ok((output, faces.len()))
}
