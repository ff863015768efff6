//! # 隐写核心模块
//!
//! 在 RGB 像素缓冲区的最低有效位中写入与读取比特流。
//! 像素缓冲区按行优先 (自上而下、自左向右) 排列，每个像素依次为 R、G、B。

use image::RgbImage;

use crate::bits::{BitStream, bits_to_length, bits_to_text, length_to_bits, text_to_bits};
use crate::constants::LENGTH_FIELD_BITS;
use crate::error::StegoError;
use crate::trimmer::find_message_end;

/// 用 `bits` 依次替换 `pix` 中各字节的最低位，超出比特流的字节保持不变。
///
/// # Errors
///
/// 比特数超过缓冲区长度时返回 [`StegoError::Capacity`]，缓冲区不会被修改。
pub fn embed_bits(pix: &mut [u8], bits: &[bool]) -> Result<(), StegoError> {
    if bits.len() > pix.len() {
        return Err(StegoError::Capacity {
            required: bits.len(),
            available: pix.len(),
        });
    }

    for (byte, &bit) in pix.iter_mut().zip(bits) {
        *byte = (*byte & 0xFE) | bit as u8;
    }

    Ok(())
}

/// 从 `offset` 开始读取至多 `count` 个最低位；缓冲区耗尽时提前停止。
pub fn extract_bits(pix: &[u8], offset: usize, count: usize) -> BitStream {
    pix.iter()
        .skip(offset)
        .take(count)
        .map(|&byte| byte & 1 == 1)
        .collect()
}

/// 图像可承载的消息比特数上限 (扣除长度字段)。
pub fn payload_capacity(image: &RgbImage) -> usize {
    image.as_raw().len().saturating_sub(LENGTH_FIELD_BITS)
}

/// 将消息写入图像的像素最低位，返回写入的总比特数 (含长度字段)。
///
/// # Errors
///
/// * 消息含有无法用单字节表示的字符。
/// * 长度字段加消息超出图像容量。
pub fn encode_image(image: &mut RgbImage, message: &str) -> Result<usize, StegoError> {
    let payload = text_to_bits(message)?;
    let available = image.as_raw().len();
    let required = LENGTH_FIELD_BITS + payload.len();

    let declared = u32::try_from(payload.len()).map_err(|_| StegoError::Capacity {
        required,
        available,
    })?;

    let mut stream = Vec::with_capacity(required);
    stream.extend(length_to_bits(declared));
    stream.extend(payload);

    embed_bits(image, &stream)?;
    log::debug!(
        "Embedded {} payload bits ({} total) into {} channels",
        declared,
        stream.len(),
        available
    );

    Ok(stream.len())
}

/// 从图像中提取消息，并裁剪掉末尾的噪声。
///
/// # Errors
///
/// * 图像通道数不足以容纳长度字段。
/// * 长度字段为 0 或超出图像容量。
pub fn decode_image(image: &RgbImage) -> Result<String, StegoError> {
    let pix = image.as_raw();
    if pix.len() < LENGTH_FIELD_BITS {
        return Err(StegoError::MissingLength);
    }

    let declared = bits_to_length(&extract_bits(pix, 0, LENGTH_FIELD_BITS));
    let max = payload_capacity(image);
    if declared == 0 || declared as usize > max {
        log::warn!("Rejected length field {declared} (maximum {max} bits)");
        return Err(StegoError::InvalidLength { declared, max });
    }

    let payload = extract_bits(pix, LENGTH_FIELD_BITS, declared as usize);
    let text = bits_to_text(&payload);
    log::debug!(
        "Read {} payload bits, {} printable characters",
        payload.len(),
        text.len()
    );

    Ok(find_message_end(&text).to_owned())
}
