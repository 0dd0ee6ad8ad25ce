use crate::grid::{format_alpha, Cell, Color, Grid, Panel, Row};
use std::path::Path;

const BORDER: Color = Color::new(0, 0, 0, 0.1);
const TITLE_FONT_SIZE: u32 = 13;
const TITLE_INDENT: f64 = 8.0;

pub fn generate_string(grid: &Grid) -> String {
    let mut generator = Generator::new(grid);
    generator.generate();
    generator.buffer
}

pub fn render_from_string(svg_content: &str, path: &Path) -> Result<(), String> {
    std::fs::write(path, svg_content).map_err(|e| e.to_string())
}

struct Generator<'a> {
    grid: &'a Grid,
    buffer: String,
}

impl<'a> Generator<'a> {
    fn new(grid: &'a Grid) -> Self {
        Self {
            grid,
            buffer: String::new(),
        }
    }

    fn generate(&mut self) {
        let (width, height) = self.grid.dimensions();
        self.start_svg(width, height);
        self.add_background();

        let x = self.grid.padding as f64;
        let mut y = self.grid.padding as f64;
        for (index, panel) in self.grid.panels.iter().enumerate() {
            self.plot_panel(panel, x, y);
            y += panel.height() as f64;
            if index + 1 != self.grid.panels.len() {
                y += self.grid.panel_spacing as f64;
            }
        }

        self.end_svg();
    }

    fn plot_panel(&mut self, panel: &Panel, x: f64, y: f64) {
        let width = self.grid.panel_width(panel) as f64;
        let title_height = panel.title_height as f64;

        self.add_rect((x, y), (width, title_height), None);
        let point = format!("x=\"{}\" y=\"{}\"", x + TITLE_INDENT, y + title_height / 2.0);
        let style = format!(
            "font-family=\"{}\" font-style=\"italic\" font-size=\"{}px\" opacity=\"0.8\" dominant-baseline=\"central\"",
            escape(&self.grid.font_family),
            TITLE_FONT_SIZE
        );
        self.push_line(&format!("<text {} {}>{}</text>", point, style, escape(&panel.title)));

        let mut row_y = y + title_height;
        for row in &panel.rows {
            self.plot_row(row, x, row_y);
            row_y += row.height as f64;
        }
    }

    fn plot_row(&mut self, row: &Row, x: f64, y: f64) {
        let cell_width = self.grid.cell_width as f64;
        let height = row.height as f64;
        let mut x_cur = x;
        for cell in &row.cells {
            self.add_rect((x_cur, y), (cell_width, height), cell.fill.as_ref());
            if !cell.label.is_empty() {
                self.add_label((x_cur + cell_width / 2.0, y + height / 2.0), cell);
            }
            x_cur += cell_width;
        }
    }

    fn add_rect(&mut self, pos: (f64, f64), dims: (f64, f64), fill: Option<&Color>) {
        let (x, y) = pos;
        let (w, h) = dims;

        let pos = format!("x=\"{}\" y=\"{}\"", x, y);
        let dim = format!("height=\"{}\" width=\"{}\"", h, w);
        let fill = match fill {
            Some(color) => format!(
                "fill=\"{}\" fill-opacity=\"{}\"",
                color.rgb(),
                format_alpha(color.alpha)
            ),
            None => "fill=\"none\"".to_string(),
        };
        let stroke = format!(
            "stroke=\"{}\" stroke-opacity=\"{}\" stroke-width=\"1\"",
            BORDER.rgb(),
            format_alpha(BORDER.alpha)
        );

        self.push_line(&format!("<rect {} {} {} {} />", pos, dim, fill, stroke));
    }

    fn add_label(&mut self, center: (f64, f64), cell: &Cell) {
        let point = format!("x=\"{}\" y=\"{}\"", center.0, center.1);
        let weight = if cell.bold { "bold" } else { "normal" };
        let style = format!(
            "font-family=\"{}\" font-weight=\"{}\" font-size=\"{}px\" opacity=\"{}\" text-anchor=\"middle\" dominant-baseline=\"central\"",
            escape(&self.grid.font_family),
            weight,
            cell.font_size,
            format_alpha(cell.label_opacity)
        );
        self.push_line(&format!("<text {} {}>{}</text>", point, style, escape(&cell.label)));
    }

    fn start_svg(&mut self, width: u32, height: u32) {
        self.push_line(r#"<?xml version="1.0"?>"#);
        let line = r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" "#;
        self.buffer.push_str(line);
        self.push_line(&format!("width=\"{}\" height=\"{}\">", width, height));
    }

    fn end_svg(&mut self) {
        self.push_line("</svg>");
    }

    fn add_background(&mut self) {
        self.push_line(r#"<rect width="100%" height="100%" fill="white"/>"#);
    }

    fn push_line(&mut self, line: &str) {
        self.buffer.push_str(line);
        self.buffer.push('\n');
    }
}

pub(crate) fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Cell, Panel, Row};

    fn make_grid() -> Grid {
        let mut grid = Grid::new(32);
        grid.panels.push(Panel {
            title: "S1: AT".to_string(),
            title_height: 28,
            rows: vec![
                Row {
                    height: 48,
                    cells: vec![
                        Cell::new(Some(Color::new(181, 216, 206, 0.82)), "80.0"),
                        Cell::new(None, ""),
                    ],
                },
            ],
        });
        grid
    }

    #[test]
    fn test_generate_string_structure() {
        let svg = generate_string(&make_grid());
        assert!(svg.starts_with("<?xml version=\"1.0\"?>"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains("width=\"664\" height=\"100\">"));
        // background, title, two cells
        assert_eq!(svg.matches("<rect").count(), 4);
        assert!(svg.contains("fill=\"rgb(181, 216, 206)\" fill-opacity=\"0.82\""));
        assert!(svg.contains(">80.0</text>"));
        assert!(svg.contains(">S1: AT</text>"));
    }

    #[test]
    fn test_empty_labels_are_not_drawn() {
        let svg = generate_string(&make_grid());
        assert_eq!(svg.matches("<text").count(), 2);
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("a<b>&\"c'"), "a&lt;b&gt;&amp;&quot;c&apos;");
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_title_is_escaped() {
        let mut grid = make_grid();
        grid.panels[0].title = "id<1>".to_string();
        let svg = generate_string(&grid);
        assert!(svg.contains(">id&lt;1&gt;</text>"));
    }
}
