use super::Font;

/// Greedy word wrap of `text` into lines no wider than `max_width` pixels.
///
/// Newlines always break. Tabs expand to `indent` spaces. A word wider than
/// the column is placed on a line of its own rather than split or dropped.
pub fn wrap(font: &Font, text: &str, max_width: f64, indent: usize) -> Vec<String> {
    let tab = " ".repeat(indent);
    text.split('\n')
        .flat_map(|paragraph| wrap_paragraph(font, &paragraph.replace('\t', &tab), max_width))
        .collect()
}

fn wrap_paragraph(font: &Font, paragraph: &str, max_width: f64) -> Vec<String> {
    let space = font.text_width(" ");
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut width = 0.0;

    for (i, word) in paragraph.split(' ').enumerate() {
        let word_width = font.text_width(word);
        if i == 0 {
            line.push_str(word);
            width = word_width;
            continue;
        }
        if width + space + word_width > max_width {
            lines.push(std::mem::take(&mut line));
            line.push_str(word);
            width = word_width;
        } else {
            line.push(' ');
            line.push_str(word);
            width += space + word_width;
        }
    }
    lines.push(line);
    lines
}
