//! Built-in big-digit font

use super::Renderer;

const GLYPH_ROWS: usize = 5;

/// 3x5 bitmaps for the characters a time string can contain
fn glyph(c: char) -> [&'static str; GLYPH_ROWS] {
    match c {
        '0' => ["###", "# #", "# #", "# #", "###"],
        '1' => [" # ", "## ", " # ", " # ", "###"],
        '2' => ["###", "  #", "###", "#  ", "###"],
        '3' => ["###", "  #", "###", "  #", "###"],
        '4' => ["# #", "# #", "###", "  #", "  #"],
        '5' => ["###", "#  ", "###", "  #", "###"],
        '6' => ["###", "#  ", "###", "# #", "###"],
        '7' => ["###", "  #", "  #", "  #", "  #"],
        '8' => ["###", "# #", "###", "# #", "###"],
        '9' => ["###", "# #", "###", "  #", "###"],
        ':' => [" ", "#", " ", "#", " "],
        _ => ["   "; GLYPH_ROWS],
    }
}

/// Draws text with the built-in font, every lit pixel as `pixel`.
///
/// Each pixel becomes `scale` cells wide (times the pixel's own width) and
/// `scale` rows tall; glyphs are separated by one blank pixel column.
#[derive(Debug, Clone, Copy)]
pub struct GlyphRenderer {
    pixel: &'static str,
}

impl GlyphRenderer {
    pub fn new(pixel: &'static str) -> Self {
        Self { pixel }
    }
}

impl Renderer for GlyphRenderer {
    fn render(&self, text: &str, scale: u32) -> String {
        let scale = scale.max(1) as usize;
        let blank = " ".repeat(self.pixel.chars().count());
        let on = self.pixel.repeat(scale);
        let off = blank.repeat(scale);

        let glyphs: Vec<_> = text.chars().map(glyph).collect();
        let mut lines = Vec::with_capacity(GLYPH_ROWS * scale);

        for row in 0..GLYPH_ROWS {
            let mut line = String::new();
            for (index, bitmap) in glyphs.iter().enumerate() {
                if index > 0 {
                    line.push_str(&off);
                }
                for bit in bitmap[row].chars() {
                    line.push_str(if bit == '#' { &on } else { &off });
                }
            }
            let line = line.trim_end().to_string();
            lines.extend(std::iter::repeat(line).take(scale));
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_five_rows_at_scale_one() {
        let art = GlyphRenderer::new("#").render("10", 1);
        let lines: Vec<_> = art.lines().collect();
        assert_eq!(
            lines,
            vec![" #  ###", "##  # #", " #  # #", " #  # #", "### ###"]
        );
    }

    #[test]
    fn scale_multiplies_height_and_width() {
        let renderer = GlyphRenderer::new("█");
        let small = renderer.render("8", 1);
        let large = renderer.render("8", 3);

        assert_eq!(small.lines().count(), 5);
        assert_eq!(large.lines().count(), 15);
        assert_eq!(small.lines().next().unwrap().chars().count(), 3);
        assert_eq!(large.lines().next().unwrap().chars().count(), 9);
    }

    #[test]
    fn full_time_string_has_uniform_height() {
        let art = GlyphRenderer::new("█").render("12:34:56", 2);
        assert_eq!(art.lines().count(), 10);
        assert!(art.contains('█'));
    }
}
