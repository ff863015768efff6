//! # 错误类型模块
//!
//! 定义隐写核心可能返回的所有错误。`Display` 的输出即面向用户的诊断信息。

use std::io;
use thiserror::Error;

/// 编码与解码过程中的错误。
#[derive(Debug, Error)]
pub enum StegoError {
    /// 消息加上 32 bit 长度头超出了图像的 LSB 容量。
    #[error("Error: Message too long for the given image! Required: {required} bits, Available: {available} bits")]
    Capacity { required: usize, available: usize },

    /// 长度字段为 0 或大于图像所能容纳的比特数。
    #[error("Error: Invalid message length detected.")]
    InvalidLength { declared: u32, max: usize },

    /// 图像通道数不足 32，无法读出长度字段。
    #[error(
        "Error: Couldn't determine message length. This image may not contain a hidden message."
    )]
    MissingLength,

    /// 字符码点超出单字节范围。
    #[error("Error: Character {character:?} at index {index} cannot be encoded as a single byte.")]
    UnsupportedCharacter { character: char, index: usize },

    /// 输出路径指向有损格式，LSB 数据会被破坏。
    #[error("Error: Output format {0} is lossy and would destroy the hidden message.")]
    LossyFormat(String),

    /// 输出路径指向本工具无法写出的格式。
    #[error("Error: Output format {0} is not supported; use PNG, BMP, TIFF, QOI or WebP.")]
    UnsupportedFormat(String),

    #[error("Error processing image: {0}")]
    Image(#[from] image::ImageError),

    #[error("Error processing image: {0}")]
    Io(#[from] io::Error),
}
