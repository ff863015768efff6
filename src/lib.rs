//! # lsb_text 库
//!
//! 本库包含 LSB 文本隐写工具的核心逻辑：比特帧格式、像素最低位读写、
//! 解码噪声裁剪，以及面向命令行的参数补全与结果输出。

// 声明库包含的所有模块。

pub mod bits;
pub mod cli;
pub mod codec;
pub mod constants;
pub mod error;
pub mod handler;
pub mod prompt;
pub mod steganography;
pub mod trimmer;

pub use codec::{decode, encode, try_decode};
pub use error::StegoError;
