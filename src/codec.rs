//! # 文件级编解码模块
//!
//! 在图像文件与隐写核心之间衔接：读取图像并转换为 RGB，写入无损格式的结果图像。

use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::{ImageFormat, ImageReader, RgbImage};
use tempfile::{Builder, NamedTempFile};

use crate::error::StegoError;
use crate::steganography::{decode_image, encode_image};

/// 可以安全保存最低位数据的输出格式。
const LOSSLESS_FORMATS: [ImageFormat; 5] = [
    ImageFormat::Png,
    ImageFormat::Bmp,
    ImageFormat::Tiff,
    ImageFormat::Qoi,
    ImageFormat::WebP,
];

/// 会量化或压缩像素值、从而破坏最低位的格式。
const LOSSY_FORMATS: [ImageFormat; 3] = [ImageFormat::Jpeg, ImageFormat::Gif, ImageFormat::Avif];

/// 打开图像并转换为 8 bit RGB，丢弃 alpha 通道与调色板。
///
/// 格式优先根据文件内容判断，因此扩展名不符的图像也能被读取。
fn open_rgb(path: &Path) -> Result<RgbImage, StegoError> {
    Ok(ImageReader::open(path)?.with_guessed_format()?.decode()?.to_rgb8())
}

/// 根据输出路径的扩展名确定格式。没有或无法识别的扩展名一律按 PNG 写出。
///
/// # Errors
///
/// * 扩展名对应有损格式 (如 JPEG) 时返回 [`StegoError::LossyFormat`]。
/// * 其余未启用写出的格式 (如 TGA) 返回 [`StegoError::UnsupportedFormat`]。
pub fn output_format(path: &Path) -> Result<ImageFormat, StegoError> {
    match ImageFormat::from_path(path) {
        Ok(format) if LOSSLESS_FORMATS.contains(&format) => Ok(format),
        Ok(format) if LOSSY_FORMATS.contains(&format) => {
            Err(StegoError::LossyFormat(format!("{format:?}")))
        }
        Ok(format) => Err(StegoError::UnsupportedFormat(format!("{format:?}"))),
        Err(_) => Ok(ImageFormat::Png),
    }
}

/// 在 `dir` 中创建暂存文件，权限与普通保存一致：
/// 目标已存在时沿用其权限，否则按 umask 取默认值。
fn stage_in(dir: &Path, output: &Path) -> Result<NamedTempFile, StegoError> {
    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    let staged = builder.tempfile_in(dir)?;

    if let Ok(existing) = fs::metadata(output) {
        staged.as_file().set_permissions(existing.permissions())?;
    }

    Ok(staged)
}

/// 将消息隐藏到 `source` 图像中，并把结果写到 `output`。
///
/// 源文件不会被修改。结果先写入 `output` 所在目录的临时文件，完成后再整体替换
/// `output`，因此任何失败都不会留下残缺的输出文件。
///
/// # Errors
///
/// * 无法打开或解码源图像。
/// * 消息含有多字节字符，或超出图像容量。
/// * 输出格式为有损或不支持的格式，或写入失败。
pub fn encode(source: &Path, message: &str, output: &Path) -> Result<(), StegoError> {
    let format = output_format(output)?;
    let mut image = open_rgb(source)?;

    encode_image(&mut image, message)?;

    let dir = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut staged = stage_in(dir, output)?;
    {
        let mut writer = BufWriter::new(staged.as_file_mut());
        image.write_to(&mut writer, format)?;
        writer.flush()?;
    }
    staged.persist(output).map_err(|e| e.error)?;

    log::debug!("Wrote {:?} image to {}", format, output.display());
    Ok(())
}

/// 从图像文件中提取隐藏的消息。
///
/// # Errors
///
/// * 无法打开或解码图像。
/// * 长度字段缺失或无效。
pub fn try_decode(path: &Path) -> Result<String, StegoError> {
    decode_image(&open_rgb(path)?)
}

/// 从图像文件中提取隐藏的消息，任何失败都转换为诊断字符串返回。
pub fn decode(path: &Path) -> String {
    try_decode(path).unwrap_or_else(|e| e.to_string())
}
