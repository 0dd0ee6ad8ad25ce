use super::build_tables;
use crate::cli::PlotArgs;
use crate::render::{build_grid, GridLayout};
use crate::session::load_inputs;
use crate::utils::Result;
use cellgrid::generate_image;
use std::path::Path;

pub fn plot(args: PlotArgs) -> Result<()> {
    let session = load_inputs(
        &args.input.predictions_path,
        &args.input.loci_path,
        args.input.strict,
    )?;
    let tables = build_tables(&session, args.locus_id.as_deref(), args.num_threads)?;

    let layout = GridLayout {
        cell_width: args.cell_width,
        ..GridLayout::default()
    };
    let mut grid = build_grid(&tables, &layout);
    if let Some(font_family) = args.font_family {
        grid.set_font_family(&font_family);
    }

    generate_image(&grid, Path::new(&args.output_path))?;
    log::info!("Plotted {} table(s) to {}", tables.len(), args.output_path);
    Ok(())
}
