//! # 噪声裁剪模块
//!
//! 长度字段与可打印字符截断都只是启发式手段，解码结果末尾仍可能混入
//! 恰好可打印的噪声字符。本模块尝试在一个合理的句子边界处截断文本。
//!
//! 已知局限：若噪声恰好"像"自然语言，会裁剪不足；若原消息在句中结束而
//! 前面存在标点，则可能裁剪过度。

use crate::constants::{ENTROPY_THRESHOLD, MESSAGE_TERMINATORS};

/// 判断两个相邻字符在普通文本中是否常见。
pub fn is_common_pair(first: char, second: char) -> bool {
    match first {
        ' ' => second.is_alphanumeric() || ".,!?".contains(second),
        c if c.is_alphabetic() => {
            second.is_alphabetic() || second == ' ' || ".,!?:;".contains(second)
        }
        c if c.is_ascii_digit() => second.is_ascii_digit() || second == ' ' || ".,".contains(second),
        c if ".!?:;,".contains(c) => second == ' ',
        _ => false,
    }
}

/// 判断文本是否具有随机噪声的特征。
///
/// 空串与单个字符没有可比较的字符对，均不视为高熵。
pub fn has_high_entropy(text: &str) -> bool {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() < 2 {
        return false;
    }

    let unusual = chars
        .windows(2)
        .filter(|pair| !is_common_pair(pair[0], pair[1]))
        .count();

    unusual as f64 / (chars.len() - 1) as f64 > ENTROPY_THRESHOLD
}

/// 从末尾向前寻找结尾标点，若其后为空或为噪声，则在该标点处截断。
///
/// 首字符不参与判断，以标点开头的文本不会被截成单个标点。
/// 找不到满足条件的标点时原样返回。
pub fn find_message_end(text: &str) -> &str {
    for (index, character) in text.char_indices().rev() {
        if index == 0 || !MESSAGE_TERMINATORS.contains(&character) {
            continue;
        }

        let end = index + character.len_utf8();
        let following = &text[end..];
        if following.is_empty() || has_high_entropy(following) {
            log::debug!("Trimmed {} trailing bytes after {:?}", following.len(), character);
            return &text[..end];
        }
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_pairs() {
        assert!(is_common_pair(' ', 'a'));
        assert!(is_common_pair(' ', '7'));
        assert!(is_common_pair(' ', ','));
        assert!(is_common_pair('a', ';'));
        assert!(is_common_pair('Z', ' '));
        assert!(is_common_pair('4', '2'));
        assert!(is_common_pair('4', ','));
        assert!(is_common_pair(';', ' '));

        assert!(!is_common_pair(' ', ' '));
        assert!(!is_common_pair('a', '1'));
        assert!(!is_common_pair('4', 'x'));
        assert!(!is_common_pair('4', '!'));
        assert!(!is_common_pair('.', 'a'));
        assert!(!is_common_pair('#', ' '));
    }

    #[test]
    fn entropy_of_short_and_natural_text() {
        assert!(!has_high_entropy(""));
        assert!(!has_high_entropy("#"));
        assert!(!has_high_entropy(" and then some words"));
        assert!(has_high_entropy("qz9#"));
        assert!(has_high_entropy("}{~`"));
    }

    #[test]
    fn entropy_threshold_is_strict() {
        // 5 个字符对中 2 个不常见：0.4 不大于阈值
        assert!(!has_high_entropy("abcd#!"));
        // 4 个字符对中 2 个不常见：0.5
        assert!(has_high_entropy("abc#!"));
    }

    #[test]
    fn trims_garbage_after_terminator() {
        assert_eq!(find_message_end("Hello.qz9#"), "Hello.");
        assert_eq!(find_message_end("Hello."), "Hello.");
        assert_eq!(find_message_end("Is it? Yes!}{~`"), "Is it? Yes!");
    }

    #[test]
    fn keeps_text_without_terminators() {
        assert_eq!(find_message_end("no punctuation here"), "no punctuation here");
        assert_eq!(find_message_end(""), "");
    }

    #[test]
    fn keeps_natural_text_after_terminator() {
        let text = "First sentence. second part without a stop";
        assert_eq!(find_message_end(text), text);
    }

    #[test]
    fn continues_scanning_past_rejected_terminators() {
        // 最后一个 '.' 后面是自然文本，继续向前找到 '!'，其后整体为噪声
        assert_eq!(find_message_end("Done!#~.y ab"), "Done!");
    }

    #[test]
    fn terminator_at_start_is_ignored() {
        assert_eq!(find_message_end(":}{~`"), ":}{~`");
        assert_eq!(find_message_end("?xq#~"), "?xq#~");
        assert_eq!(find_message_end("!"), "!");
        // 第二个字符起的标点照常生效
        assert_eq!(find_message_end("a?xq#~"), "a?");
    }
}
