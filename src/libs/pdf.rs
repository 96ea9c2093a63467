//! Minimal tabular PDF writer.
//!
//! Draws a titled, paginated table with the built-in Helvetica font.
//! Cells may span several lines (`\n`) and long lines are wrapped to the
//! column width. The header row is repeated on every page. Only ASCII is
//! drawn; other characters are replaced with `?`.

use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Average Helvetica glyph width as a fraction of the font size.
const GLYPH_WIDTH: f32 = 0.5;

pub struct PdfTable {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    font_id: Ref,
    page_refs: Vec<Ref>,
    next_id: i32,

    page_w: f32,
    page_h: f32,
    margin: f32,
    cell_pad: f32,

    font_size: f32,
    header_font_size: f32,
    title_font_size: f32,
}

impl Default for PdfTable {
    fn default() -> Self {
        Self::landscape()
    }
}

impl PdfTable {
    /// An empty document with A4 landscape pages.
    pub fn landscape() -> Self {
        let mut pdf = Pdf::new();
        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);
        pdf.type1_font(font_id).base_font(Name(b"Helvetica"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            font_id,
            page_refs: Vec::new(),
            next_id: 4,

            page_w: 842.0,
            page_h: 595.0,
            margin: 36.0,
            cell_pad: 3.0,

            font_size: 9.0,
            header_font_size: 10.0,
            title_font_size: 18.0,
        }
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    fn line_h(&self, size: f32) -> f32 {
        size * 1.25
    }

    fn new_page(&mut self) -> (Ref, Content) {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();
        self.page_refs.push(page_id);

        let mut page = self.pdf.page(page_id);
        page.parent(self.pages_id)
            .media_box(Rect::new(0.0, 0.0, self.page_w, self.page_h))
            .contents(content_id);
        page.resources().fonts().pair(Name(b"F1"), self.font_id);

        (content_id, Content::new())
    }

    fn finish_page(&mut self, content_id: Ref, content: Content) {
        self.pdf.stream(content_id, &content.finish());
    }

    fn draw_text(content: &mut Content, x: f32, y: f32, size: f32, text: &str) {
        let text = ascii_only(text);
        content.begin_text();
        content.set_font(Name(b"F1"), size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(Str(text.as_bytes()));
        content.end_text();
    }

    fn fill_rect(content: &mut Content, rect: (f32, f32, f32, f32), rgb: (f32, f32, f32)) {
        content.save_state();
        content.set_fill_rgb(rgb.0, rgb.1, rgb.2);
        content.rect(rect.0, rect.1, rect.2, rect.3);
        content.fill_nonzero();
        content.restore_state();
    }

    fn stroke_rect(content: &mut Content, x: f32, y: f32, w: f32, h: f32) {
        content.save_state();
        content.set_stroke_rgb(0.17, 0.24, 0.31);
        content.set_line_width(0.5);
        content.rect(x, y, w, h);
        content.stroke();
        content.restore_state();
    }

    /// Column widths from the widest line of each column, scaled down to
    /// fit the printable width.
    fn column_widths(&self, headers: &[&str], rows: &[Vec<String>]) -> Vec<f32> {
        let char_w = self.font_size * GLYPH_WIDTH;
        let mut widths: Vec<f32> = headers
            .iter()
            .map(|h| h.chars().count() as f32 * self.header_font_size * GLYPH_WIDTH)
            .collect();

        for row in rows {
            for (i, cell) in row.iter().enumerate().take(widths.len()) {
                let longest = cell.lines().map(|l| l.chars().count()).max().unwrap_or(0);
                widths[i] = widths[i].max(longest as f32 * char_w);
            }
        }
        for w in &mut widths {
            *w += 2.0 * self.cell_pad;
        }

        let total: f32 = widths.iter().sum();
        let max = self.page_w - 2.0 * self.margin;
        if total > max {
            let scale = max / total;
            for w in &mut widths {
                *w *= scale;
            }
        }
        widths
    }

    /// Splits each cell into the lines that fit its column.
    fn layout_row(&self, row: &[String], widths: &[f32], size: f32) -> Vec<Vec<String>> {
        widths
            .iter()
            .enumerate()
            .map(|(i, w)| {
                let max_chars = ((w - 2.0 * self.cell_pad) / (size * GLYPH_WIDTH)).floor().max(1.0) as usize;
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                cell.lines().flat_map(|line| wrap(line, max_chars)).collect()
            })
            .collect()
    }

    fn row_height(&self, cells: &[Vec<String>], size: f32) -> f32 {
        let lines = cells.iter().map(Vec::len).max().unwrap_or(1).max(1);
        lines as f32 * self.line_h(size) + 2.0 * self.cell_pad
    }

    fn draw_row(&self, content: &mut Content, top: f32, widths: &[f32], cells: &[Vec<String>], size: f32) -> f32 {
        let height = self.row_height(cells, size);
        let mut x = self.margin;
        for (w, lines) in widths.iter().zip(cells) {
            let mut baseline = top - self.cell_pad - size;
            for line in lines {
                Self::draw_text(content, x + self.cell_pad, baseline, size, line);
                baseline -= self.line_h(size);
            }
            Self::stroke_rect(content, x, top - height, *w, height);
            x += w;
        }
        height
    }

    fn draw_header(&self, content: &mut Content, top: f32, widths: &[f32], header: &[Vec<String>]) -> f32 {
        let height = self.row_height(header, self.header_font_size);
        let width: f32 = widths.iter().sum();
        Self::fill_rect(content, (self.margin, top - height, width, height), (0.82, 0.86, 0.92));
        self.draw_row(content, top, widths, header, self.header_font_size)
    }

    fn draw_footer(&self, content: &mut Content, page: usize) {
        let label = format!("Page {}", page);
        Self::draw_text(content, self.page_w - self.margin - 40.0, self.margin / 2.0, self.font_size, &label);
    }

    /// Writes `rows` under `headers`, starting on a new page.
    ///
    /// The first page carries `title` and `subtitle`. A page break is only
    /// taken between rows; a single row taller than a page is drawn as is.
    pub fn write_table(&mut self, title: &str, subtitle: &str, headers: &[&str], rows: &[Vec<String>]) {
        let widths = self.column_widths(headers, rows);
        let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
        let header = self.layout_row(&header_cells, &widths, self.header_font_size);
        let bottom = self.margin;

        let mut page = 1;
        let (mut content_id, mut content) = self.new_page();
        let mut top = self.page_h - self.margin;
        Self::draw_text(&mut content, self.margin, top - self.title_font_size, self.title_font_size, title);
        top -= self.title_font_size + 6.0;
        Self::draw_text(&mut content, self.margin, top - self.font_size, self.font_size, subtitle);
        top -= self.font_size + 10.0;
        top -= self.draw_header(&mut content, top, &widths, &header);
        let mut rows_on_page = 0;

        for (i, row) in rows.iter().enumerate() {
            let cells = self.layout_row(row, &widths, self.font_size);
            let height = self.row_height(&cells, self.font_size);

            if top - height < bottom && rows_on_page > 0 {
                self.draw_footer(&mut content, page);
                self.finish_page(content_id, content);
                page += 1;
                (content_id, content) = self.new_page();
                top = self.page_h - self.margin;
                top -= self.draw_header(&mut content, top, &widths, &header);
                rows_on_page = 0;
            }

            if i % 2 == 1 {
                let width: f32 = widths.iter().sum();
                Self::fill_rect(&mut content, (self.margin, top - height, width, height), (0.95, 0.95, 0.95));
            }
            top -= self.draw_row(&mut content, top, &widths, &cells, self.font_size);
            rows_on_page += 1;
        }

        self.draw_footer(&mut content, page);
        self.finish_page(content_id, content);
    }

    pub fn page_count(&self) -> usize {
        self.page_refs.len()
    }

    /// Serializes the document.
    pub fn finish(mut self) -> Vec<u8> {
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        let count = self.page_refs.len() as i32;
        self.pdf.pages(self.pages_id).count(count).kids(self.page_refs.iter().copied());
        self.pdf.finish()
    }

    pub fn save(self, path: &Path) -> std::io::Result<()> {
        let bytes = self.finish();
        let mut file = File::create(path)?;
        file.write_all(&bytes)?;
        Ok(())
    }
}

/// Replaces characters outside printable ASCII with `?`.
fn ascii_only(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_ascii() && !c.is_ascii_control() { c } else { '?' })
        .collect()
}

/// Greedy word wrap; words longer than `width` are split.
fn wrap(line: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in line.split(' ') {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let rest = word.split_off(width);
            lines.push(word.into_iter().collect());
            word = rest;
        }
        let word_len = word.len();
        let word: String = word.into_iter().collect();
        let current_len = current.chars().count();
        let needed = if current.is_empty() { word_len } else { current_len + 1 + word_len };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(&word);
    }
    lines.push(current);
    lines
}
