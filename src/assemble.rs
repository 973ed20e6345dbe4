//! Folding a glyph grid into newline-delimited text.
use crate::image::{Grid, ImageView};

pub type GlyphGrid = Grid<char>;

/// Concatenate each row's glyphs and terminate every row, the last included,
/// with `\n`.
pub fn assemble(glyphs: &GlyphGrid) -> String {
    let mut out = String::with_capacity(glyphs.h * (glyphs.w * 3 + 1));
    for row in glyphs.rows() {
        out.extend(row.iter());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_end_with_newlines() {
        let glyphs = Grid {
            w: 2,
            h: 2,
            data: vec!['a', 'b', 'c', 'd'],
        };
        assert_eq!(assemble(&glyphs), "ab\ncd\n");
    }

    #[test]
    fn multibyte_glyphs_count_once_per_cell() {
        let glyphs = Grid::filled(4, 3, '█');
        let text = assemble(&glyphs);
        assert_eq!(text.matches('\n').count(), 3);
        assert!(text.lines().all(|line| line.chars().count() == 4));
    }

    #[test]
    fn empty_grid_is_empty_text() {
        assert_eq!(assemble(&Grid::new(0, 0)), "");
    }
}
