/// 长度字段占用的比特数。
/// 长度以大端 `u32` 存储，每个颜色通道字节的最低位存放 1 bit，
/// 因此需要 32 个通道字节来隐藏长度。
pub const LENGTH_FIELD_BITS: usize = 32;

/// 每个字符占用的比特数。
/// 字符的码点必须能用单个字节表示 (0..=255)。
pub const BITS_PER_CHAR: usize = 8;

/// 每个像素可用于隐写的颜色通道数 (R, G, B)。
pub const CHANNELS_PER_PIXEL: usize = 3;

/// 解码时除可打印 ASCII (32..=126) 外仍然接受的空白字节：制表符、换行、回车。
pub const ACCEPTED_WHITESPACE: [u8; 3] = [9, 10, 13];

/// 被视为消息自然结尾的标点。
pub const MESSAGE_TERMINATORS: [char; 5] = ['.', '!', '?', ':', ';'];

/// 不常见字符对所占比例超过该阈值时，文本被判定为随机噪声。
pub const ENTROPY_THRESHOLD: f64 = 0.4;
