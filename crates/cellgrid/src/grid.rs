use std::fmt;

/// An sRGB color with an opacity in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub alpha: f64,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8, alpha: f64) -> Self {
        Self { r, g, b, alpha }
    }

    pub fn with_alpha(self, alpha: f64) -> Self {
        Self { alpha, ..self }
    }

    pub fn rgb(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(
            formatter,
            "rgba({}, {}, {}, {})",
            self.r,
            self.g,
            self.b,
            format_alpha(self.alpha)
        )
    }
}

/// Formats an opacity with at most three decimals and no trailing zeros.
pub(crate) fn format_alpha(alpha: f64) -> String {
    let formatted = format!("{:.3}", alpha);
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub fill: Option<Color>,
    pub label: String,
    pub font_size: u32,
    pub bold: bool,
    pub label_opacity: f64,
}

impl Cell {
    pub fn new(fill: Option<Color>, label: impl Into<String>) -> Self {
        Self {
            fill,
            label: label.into(),
            font_size: 12,
            bold: true,
            label_opacity: 1.0,
        }
    }

    pub fn font_size(mut self, font_size: u32) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    pub fn label_opacity(mut self, opacity: f64) -> Self {
        self.label_opacity = opacity;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub height: u32,
    pub cells: Vec<Cell>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub title: String,
    pub title_height: u32,
    pub rows: Vec<Row>,
}

impl Panel {
    pub fn num_columns(&self) -> usize {
        self.rows.iter().map(|row| row.cells.len()).max().unwrap_or(0)
    }

    pub fn height(&self) -> u32 {
        self.title_height + self.rows.iter().map(|row| row.height).sum::<u32>()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    pub cell_width: u32,
    pub min_panel_width: u32,
    pub panel_spacing: u32,
    pub padding: u32,
    pub font_family: String,
    pub panels: Vec<Panel>,
}

impl Grid {
    pub fn new(cell_width: u32) -> Self {
        Self {
            cell_width,
            min_panel_width: 640,
            panel_spacing: 16,
            padding: 12,
            font_family: "monospace".to_string(),
            panels: Vec::new(),
        }
    }

    pub fn set_font_family(&mut self, font_family: &str) {
        self.font_family = font_family.to_string();
    }

    pub fn panel_width(&self, panel: &Panel) -> u32 {
        (panel.num_columns() as u32 * self.cell_width).max(self.min_panel_width)
    }

    pub fn dimensions(&self) -> (u32, u32) {
        let width = self
            .panels
            .iter()
            .map(|panel| self.panel_width(panel))
            .max()
            .unwrap_or(self.min_panel_width);
        let panels_height: u32 = self.panels.iter().map(|panel| panel.height()).sum();
        let spacing = self.panel_spacing * self.panels.len().saturating_sub(1) as u32;
        (
            width + 2 * self.padding,
            panels_height + spacing + 2 * self.padding,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_panel(columns: usize) -> Panel {
        Panel {
            title: "S1: ACGT".to_string(),
            title_height: 28,
            rows: vec![
                Row {
                    height: 36,
                    cells: (0..columns).map(|i| Cell::new(None, (i + 1).to_string())).collect(),
                },
                Row {
                    height: 48,
                    cells: (0..columns).map(|_| Cell::new(None, "")).collect(),
                },
            ],
        }
    }

    #[test]
    fn test_color_display() {
        let color = Color::new(181, 216, 206, 0.8 * 0.9 + 0.1);
        assert_eq!(color.to_string(), "rgba(181, 216, 206, 0.82)");
        assert_eq!(color.with_alpha(1.0).to_string(), "rgba(181, 216, 206, 1)");
        assert_eq!(color.rgb(), "rgb(181, 216, 206)");
    }

    #[test]
    fn test_format_alpha() {
        assert_eq!(format_alpha(0.1), "0.1");
        assert_eq!(format_alpha(0.0), "0");
        assert_eq!(format_alpha(0.12345), "0.123");
    }

    #[test]
    fn test_panel_geometry() {
        let panel = make_panel(4);
        assert_eq!(panel.num_columns(), 4);
        assert_eq!(panel.height(), 28 + 36 + 48);
    }

    #[test]
    fn test_grid_dimensions_use_min_width() {
        let mut grid = Grid::new(32);
        grid.panels.push(make_panel(4));
        grid.panels.push(make_panel(2));
        assert_eq!(grid.dimensions(), (640 + 24, 2 * 112 + 16 + 24));
    }

    #[test]
    fn test_grid_dimensions_wide_panel() {
        let mut grid = Grid::new(32);
        grid.panels.push(make_panel(30));
        assert_eq!(grid.dimensions(), (960 + 24, 112 + 24));
    }
}
