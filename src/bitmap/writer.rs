pub mod glyph_table;
