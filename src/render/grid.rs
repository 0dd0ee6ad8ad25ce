use crate::correlate::LocusTable;
use cellgrid::{Cell, Grid, Panel, Row};

/// Row heights and cell width of a rendered table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    pub cell_width: u32,
    pub title_height: u32,
    pub number_height: u32,
    pub base_height: u32,
    pub prediction_height: u32,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            cell_width: 32,
            title_height: 28,
            number_height: 36,
            base_height: 48,
            prediction_height: 48,
        }
    }
}

/// One panel per table: title, position numbers, bases, predictions.
pub fn build_grid(tables: &[LocusTable], layout: &GridLayout) -> Grid {
    let mut grid = Grid::new(layout.cell_width);
    grid.panels = tables
        .iter()
        .map(|table| build_panel(table, layout))
        .collect();
    grid
}

fn build_panel(table: &LocusTable, layout: &GridLayout) -> Panel {
    let numbers = table
        .positions
        .iter()
        .map(|pos| {
            Cell::new(None, pos.number.to_string())
                .bold(false)
                .label_opacity(0.7)
        })
        .collect();

    let bases = table
        .positions
        .iter()
        .map(|pos| Cell::new(pos.base.color, pos.base.symbol.to_string()).font_size(14))
        .collect();

    let predictions = table
        .positions
        .iter()
        .map(|pos| Cell::new(pos.prediction.fill, pos.prediction.label.clone()))
        .collect();

    Panel {
        title: table.title(),
        title_height: layout.title_height,
        rows: vec![
            Row {
                height: layout.number_height,
                cells: numbers,
            },
            Row {
                height: layout.base_height,
                cells: bases,
            },
            Row {
                height: layout.prediction_height,
                cells: predictions,
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::correlate::{base_color, correlate, Base};
    use crate::parse::{LocusRecord, PredictionRecord};

    #[test]
    fn test_build_grid() {
        let loci = vec![LocusRecord::new("S1", "AT"), LocusRecord::new("S2", "G")];
        let predictions = vec![PredictionRecord::new("S1", 0, 0.8)];
        let tables = correlate(&loci, &predictions);
        let grid = build_grid(&tables, &GridLayout::default());

        assert_eq!(grid.cell_width, 32);
        assert_eq!(grid.panels.len(), 2);

        let panel = &grid.panels[0];
        assert_eq!(panel.title, "S1: AT");
        assert_eq!(panel.rows.len(), 3);
        assert_eq!(panel.height(), 28 + 36 + 48 + 48);

        let numbers: Vec<_> = panel.rows[0].cells.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(numbers, vec!["1", "2"]);
        assert!(panel.rows[0].cells.iter().all(|c| c.fill.is_none() && !c.bold));

        assert_eq!(panel.rows[1].cells[1].label, "T");
        assert_eq!(panel.rows[1].cells[1].fill, Some(base_color(Base::T, 1.0)));
        assert_eq!(panel.rows[1].cells[1].font_size, 14);

        assert_eq!(panel.rows[2].cells[0].label, "80.0");
        assert!(panel.rows[2].cells[0].fill.is_some());
        assert_eq!(panel.rows[2].cells[1].label, "");
        assert_eq!(panel.rows[2].cells[1].fill, None);
    }

    #[test]
    fn test_build_grid_custom_cell_width() {
        let loci = vec![LocusRecord::new("S1", "A")];
        let predictions = vec![PredictionRecord::new("S1", 0, 0.1)];
        let layout = GridLayout {
            cell_width: 20,
            ..GridLayout::default()
        };
        let grid = build_grid(&correlate(&loci, &predictions), &layout);
        assert_eq!(grid.cell_width, 20);
    }
}
