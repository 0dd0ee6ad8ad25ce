use crate::prepare_svg_tree;
use std::path::Path;

pub fn render_from_string(svg_content: &str, path: &Path) -> Result<(), String> {
    let tree = prepare_svg_tree(svg_content.as_bytes())?;
    let size = tree.size().to_int_size();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size.width(), size.height()).ok_or_else(|| {
        format!(
            "Unable to allocate a {}x{} image for {}",
            size.width(),
            size.height(),
            path.display()
        )
    })?;
    resvg::render(&tree, usvg::Transform::identity(), &mut pixmap.as_mut());
    pixmap
        .save_png(path)
        .map_err(|e| format!("Failed to write PNG {}: {}", path.display(), e))
}
