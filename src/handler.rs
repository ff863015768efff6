//! # 命令处理逻辑模块
//!
//! 包含处理 `encode` 和 `decode` 子命令的高级业务逻辑。
//! 本模块负责补全缺失的参数、调用文件级编解码函数以及向用户报告结果。

use crate::cli::{DecodeArgs, EncodeArgs};
use crate::codec::{decode, encode};
use crate::error::StegoError;
use crate::prompt::value_or_prompt;
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

/// 处理 'Encode' 命令的执行逻辑。
///
/// 依次补全输入图像、输出图像和消息文本，调用 [`encode`] 隐藏消息，
/// 成功后向 `output` 写出确认信息。
///
/// # Arguments
///
/// * `args` - 命令行提供的参数，缺失的字段会通过 `input` 询问。
/// * `input` - 交互输入流。
/// * `output` - 提示语与结果的输出流。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取交互输入。
/// * 无法打开源图像或写入目标图像。
/// * 消息超出图像容量，或含有无法用单字节表示的字符。
pub fn handle_encode<R: BufRead, W: Write>(
    args: EncodeArgs,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    let image: PathBuf = value_or_prompt(args.image, input, output, "Enter input image filename: ")?;
    let dest: PathBuf = value_or_prompt(args.dest, input, output, "Enter output image filename: ")?;
    let message: String =
        value_or_prompt(args.message, input, output, "Enter the message to hide: ")?;

    encode(&image, &message, &dest).map_err(|e| describe_failure(e, &image, &dest))?;

    writeln!(
        output,
        "Message successfully hidden in {}",
        dest.to_string_lossy().green().bold()
    )
    .context("Unable to write confirmation")?;

    Ok(())
}

/// 处理 'Decode' 命令的执行逻辑。
///
/// 补全图像路径后调用 [`decode`]，并将结果 (或诊断信息) 包在边框中写出。
///
/// # Errors
///
/// 仅在交互输入或输出失败时返回错误；图像本身的问题以诊断文本的形式输出。
pub fn handle_decode<R: BufRead, W: Write>(
    args: DecodeArgs,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    let image: PathBuf =
        value_or_prompt(args.image, input, output, "Enter the encoded image filename: ")?;

    let message = decode(&image);

    write!(
        output,
        "\n===== EXTRACTED MESSAGE =====\n{message}\n============================\n\n"
    )
    .context("Unable to write extracted message")?;

    Ok(())
}

/// 为文件访问类错误补充路径信息，其余错误原样保留。
fn describe_failure(error: StegoError, image: &Path, dest: &Path) -> anyhow::Error {
    match error {
        StegoError::Image(_) | StegoError::Io(_) => {
            let context = format!(
                "Unable to hide the message from {} into {}",
                image.to_string_lossy().red().bold(),
                dest.to_string_lossy().red().bold()
            );
            anyhow::Error::new(error).context(context)
        }
        other => other.into(),
    }
}
