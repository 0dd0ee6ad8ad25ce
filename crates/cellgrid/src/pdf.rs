use crate::prepare_svg_tree;
use std::path::Path;
use svg2pdf::{ConversionOptions, PageOptions};

pub fn render_from_string(svg_content: &str, path: &Path) -> Result<(), String> {
    let tree = prepare_svg_tree(svg_content.as_bytes())?;
    let pdf = svg2pdf::to_pdf(&tree, ConversionOptions::default(), PageOptions::default())
        .map_err(|e| format!("Failed to convert SVG to PDF for {}: {e}", path.display()))?;
    std::fs::write(path, pdf).map_err(|e| format!("Failed to write PDF {}: {}", path.display(), e))?;
    Ok(())
}
