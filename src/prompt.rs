//! # 交互输入模块
//!
//! 命令行缺少参数时，从输入流逐行读取。

use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// 输出提示语并读取一行输入，去掉行尾的 `\n` 或 `\r\n`。
///
/// # Errors
///
/// 写出提示语失败、读取失败，或输入流已结束时返回错误。
pub fn prompt<R: BufRead, W: Write>(reader: &mut R, writer: &mut W, label: &str) -> Result<String> {
    write!(writer, "{label}").context("Unable to write prompt")?;
    writer.flush().context("Unable to flush prompt")?;

    let mut line = String::new();
    let read = reader
        .read_line(&mut line)
        .context("Unable to read from standard input")?;
    anyhow::ensure!(read > 0, "Input ended before a value for {:?} was given", label.trim());

    let trimmed = line.strip_suffix('\n').unwrap_or(&line);
    let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
    Ok(trimmed.to_owned())
}

/// 若 `value` 已提供则直接返回，否则通过 [`prompt`] 询问用户。
pub fn value_or_prompt<T, R, W>(
    value: Option<T>,
    reader: &mut R,
    writer: &mut W,
    label: &str,
) -> Result<T>
where
    T: From<String>,
    R: BufRead,
    W: Write,
{
    match value {
        Some(v) => Ok(v),
        None => prompt(reader, writer, label).map(T::from),
    }
}
