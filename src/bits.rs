//! # 比特帧模块
//!
//! 负责文本与比特流之间的相互转换，以及 32 bit 长度字段的打包与解包。
//! 编码器与解码器共用这里的格式定义。

use crate::constants::{ACCEPTED_WHITESPACE, BITS_PER_CHAR, LENGTH_FIELD_BITS};
use crate::error::StegoError;

/// 比特流：每个元素对应一个颜色通道字节的最低位。
pub type BitStream = Vec<bool>;

/// 将文本转换为比特流，每个字符以 8 bit 大端形式输出。
///
/// # Errors
///
/// 若某个字符的码点大于 255，返回 [`StegoError::UnsupportedCharacter`]。
pub fn text_to_bits(message: &str) -> Result<BitStream, StegoError> {
    let mut bits = Vec::with_capacity(message.chars().count() * BITS_PER_CHAR);

    for (index, character) in message.chars().enumerate() {
        let byte = u8::try_from(u32::from(character))
            .map_err(|_| StegoError::UnsupportedCharacter { character, index })?;
        bits.extend((0..BITS_PER_CHAR).rev().map(|shift| (byte >> shift) & 1 == 1));
    }

    Ok(bits)
}

/// 判断解码得到的字节是否属于消息文本。
pub fn is_printable(byte: u8) -> bool {
    (32..=126).contains(&byte) || ACCEPTED_WHITESPACE.contains(&byte)
}

/// 将比特流还原为文本。
///
/// 末尾不足 8 bit 的部分被直接丢弃；遇到第一个不可打印的字节即停止，
/// 这通常意味着长度字段越过了真实消息，读到了像素噪声。
pub fn bits_to_text(bits: &[bool]) -> String {
    bits.chunks_exact(BITS_PER_CHAR)
        .map(|chunk| chunk.iter().fold(0u8, |acc, &bit| (acc << 1) | bit as u8))
        .take_while(|&byte| is_printable(byte))
        .map(char::from)
        .collect()
}

/// 将长度编码为 32 bit 大端比特序列。
pub fn length_to_bits(length: u32) -> [bool; LENGTH_FIELD_BITS] {
    let mut bits = [false; LENGTH_FIELD_BITS];
    for (i, bit) in bits.iter_mut().enumerate() {
        *bit = (length >> (LENGTH_FIELD_BITS - 1 - i)) & 1 == 1;
    }
    bits
}

/// 将最多 32 个比特按大端顺序解析为长度。
pub fn bits_to_length(bits: &[bool]) -> u32 {
    bits.iter()
        .take(LENGTH_FIELD_BITS)
        .fold(0u32, |acc, &bit| (acc << 1) | bit as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits(pattern: &str) -> BitStream {
        pattern.chars().map(|c| c == '1').collect()
    }

    #[test]
    fn text_is_emitted_msb_first() {
        let encoded = text_to_bits("A\t").unwrap();
        assert_eq!(encoded, bits("0100000100001001"));
    }

    #[test]
    fn latin1_is_accepted_but_wide_chars_are_rejected() {
        assert_eq!(text_to_bits("é").unwrap(), bits("11101001"));

        match text_to_bits("ok 中") {
            Err(StegoError::UnsupportedCharacter { character, index }) => {
                assert_eq!(character, '中');
                assert_eq!(index, 3);
            }
            other => panic!("expected UnsupportedCharacter, got {other:?}"),
        }
    }

    #[test]
    fn incomplete_trailing_chunk_is_dropped() {
        let mut stream = text_to_bits("hi").unwrap();
        stream.extend([true, false, true]);
        assert_eq!(bits_to_text(&stream), "hi");
    }

    #[test]
    fn decoding_stops_at_first_non_printable_byte() {
        let mut stream = text_to_bits("ab\r\n\tc").unwrap();
        stream.extend(bits("00000001"));
        stream.extend(text_to_bits("zz").unwrap());
        assert_eq!(bits_to_text(&stream), "ab\r\n\tc");

        // 127 (DEL) 与 128 以上的字节同样终止解码
        assert_eq!(bits_to_text(&bits("01111111")), "");
        assert_eq!(bits_to_text(&bits("11101001")), "");
    }

    #[test]
    fn length_field_is_big_endian() {
        let field = length_to_bits(0x8000_0001);
        assert!(field[0]);
        assert!(field[31]);
        assert_eq!(field.iter().filter(|&&b| b).count(), 2);

        assert_eq!(bits_to_length(&length_to_bits(88)), 88);
        assert_eq!(bits_to_length(&length_to_bits(u32::MAX)), u32::MAX);
        assert_eq!(bits_to_length(&bits("101")), 5);
    }
}
