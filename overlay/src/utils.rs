//! Text and colour helpers shared by the overlay driver

use examine_types::Color;

/// Greedy word wrap at `columns` characters. Words longer than a line are
/// kept whole on their own line. Existing line breaks are preserved.
pub fn wrap_text(text: &str, columns: usize) -> Vec<String> {
    let columns = columns.max(1);
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut line = String::new();
        let mut width = 0;
        for word in paragraph.split_whitespace() {
            let word_width = word.chars().count();
            if width > 0 && width + 1 + word_width > columns {
                lines.push(std::mem::take(&mut line));
                width = 0;
            }
            if width > 0 {
                line.push(' ');
                width += 1;
            }
            line.push_str(word);
            width += word_width;
        }
        lines.push(line);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Multiply `opacity` into the alpha channel
#[inline]
pub fn apply_opacity(color: Color, opacity: f32) -> Color {
    let mut color = color;
    color[3] = (color[3] as f32 * opacity.clamp(0.0, 1.0)).round() as u8;
    color
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_text() {
        let lines = wrap_text("The soil has been treated with supercompost.", 20);
        assert_eq!(lines, ["The soil has been", "treated with", "supercompost."]);
    }

    #[test]
    fn test_wrap_keeps_long_words_whole() {
        let lines = wrap_text("Ahrim's robeskirt (undamaged)", 5);
        assert_eq!(lines, ["Ahrim's", "robeskirt", "(undamaged)"]);
    }

    #[test]
    fn test_wrap_short_text_and_empty() {
        assert_eq!(wrap_text("A tree.", 30), ["A tree."]);
        assert_eq!(wrap_text("", 30), [""]);
    }

    #[test]
    fn test_apply_opacity() {
        assert_eq!(apply_opacity([70, 61, 50, 156], 0.5), [70, 61, 50, 78]);
        assert_eq!(apply_opacity([255, 255, 255, 255], 1.0), [255, 255, 255, 255]);
        assert_eq!(apply_opacity([255, 255, 255, 255], 0.0), [255, 255, 255, 0]);
    }
}
