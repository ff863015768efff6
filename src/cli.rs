//! # 命令行接口模块
//!
//! 使用 `clap` 定义了程序的命令行结构，包括子命令和参数。
//! 所有参数均为可选：未提供的值会在运行时逐行提示用户输入。

use clap::Parser;
use std::path::PathBuf;

/// 一款基于 LSB (最低有效位) 隐写术的命令行工具，用于在无损格式图像 (如 PNG, BMP) 的 RGB 通道中隐藏或提取文本。
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "一款基于 LSB (最低有效位) 隐写术的命令行工具，用于在无损格式图像 (如 PNG, BMP) 的 RGB 通道中隐藏或提取文本。"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令：encode (隐藏) 和 decode (提取)。
#[derive(Parser, Debug)]
pub enum Commands {
    /// 将一段文本隐藏到图像中，结果以无损格式保存。
    Encode(EncodeArgs),

    /// 从经过隐写的图像中提取隐藏的文本。
    Decode(DecodeArgs),
}

/// 'encode' 命令所需的参数。
#[derive(Parser, Debug, Default)]
pub struct EncodeArgs {
    /// 用于隐写的输入图像文件路径。
    #[arg(short, long)]
    pub image: Option<PathBuf>,

    /// 隐写完成后，保存结果图像的输出路径。
    #[arg(short, long)]
    pub dest: Option<PathBuf>,

    /// 要隐藏的文本。
    #[arg(short, long)]
    pub message: Option<String>,
}

/// 'decode' 命令所需的参数。
#[derive(Parser, Debug, Default)]
pub struct DecodeArgs {
    /// 已隐藏文本数据的图像文件路径。
    #[arg(short, long)]
    pub image: Option<PathBuf>,
}
