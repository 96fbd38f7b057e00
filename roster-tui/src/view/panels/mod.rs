//! 面板视图

pub mod form;
pub mod records;

use unicode_width::UnicodeWidthChar;

/// 取文本末尾能放进 `width` 列的部分（输入框光标总在末尾）
pub fn tail_fit(text: &str, width: usize) -> &str {
    let mut used = 0;
    let mut start = text.len();
    for (idx, ch) in text.char_indices().rev() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        start = idx;
    }
    &text[start..]
}
