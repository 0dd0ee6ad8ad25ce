use crate::{pdf, png, svg, Grid};
use std::path::Path;

pub fn generate(grid: &Grid, path: &Path) -> Result<(), String> {
    if let Some(extension) = path.extension().and_then(|ext| ext.to_str()) {
        let svg_content = svg::generate_string(grid);
        match FileType::from_extension(extension) {
            Some(FileType::Svg) => svg::render_from_string(&svg_content, path),
            Some(FileType::Png) => png::render_from_string(&svg_content, path),
            Some(FileType::Pdf) => pdf::render_from_string(&svg_content, path),
            Some(FileType::Html) => render_html(&svg_content, path),
            None => Err(format!("Unsupported file extension: {extension:?}")),
        }
    } else {
        Err(format!("Failed to get extension from path: {path:?}"))
    }
}

fn render_html(svg_content: &str, path: &Path) -> Result<(), String> {
    let body = svg_content
        .strip_prefix(r#"<?xml version="1.0"?>"#)
        .unwrap_or(svg_content)
        .trim_start();
    let page = format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n</head>\n<body>\n{}</body>\n</html>\n",
        body
    );
    std::fs::write(path, page).map_err(|e| e.to_string())
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum FileType {
    Svg,
    Png,
    Pdf,
    Html,
}

impl FileType {
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_lowercase().as_str() {
            "svg" => Some(FileType::Svg),
            "png" => Some(FileType::Png),
            "pdf" => Some(FileType::Pdf),
            "html" | "htm" => Some(FileType::Html),
            _ => None,
        }
    }
}
