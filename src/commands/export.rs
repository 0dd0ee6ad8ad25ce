use super::build_tables;
use crate::cli::ExportArgs;
use crate::render::write_tsv;
use crate::session::load_inputs;
use crate::utils::Result;
use std::fs::File;
use std::io::{self, BufWriter};

pub fn export(args: ExportArgs) -> Result<()> {
    let session = load_inputs(
        &args.input.predictions_path,
        &args.input.loci_path,
        args.input.strict,
    )?;
    let tables = build_tables(&session, args.locus_id.as_deref(), args.num_threads)?;

    match &args.output_path {
        Some(path) => {
            let file = File::create(path).map_err(|e| format!("{}: {}", path, e))?;
            write_tsv(&mut BufWriter::new(file), &tables)?;
            log::info!("Exported {} table(s) to {}", tables.len(), path);
        }
        None => {
            let stdout = io::stdout();
            write_tsv(&mut stdout.lock(), &tables)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::InputArgs;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_export_to_file() {
        let mut predictions = NamedTempFile::new().unwrap();
        write!(predictions, "header\n0,S1,1,_,_,0.873\n0,S1,oops,_,_,0.1\n").unwrap();

        let mut loci = NamedTempFile::new().unwrap();
        let mut fields: Vec<String> = (0..22).map(|i| format!("c{}", i)).collect();
        fields.push("S1".to_string());
        fields.push("CT".to_string());
        write!(loci, "header\n{}\n", fields.join(",")).unwrap();

        let output = NamedTempFile::new().unwrap();
        let args = ExportArgs {
            input: InputArgs {
                predictions_path: predictions.path().to_path_buf(),
                loci_path: loci.path().to_path_buf(),
                strict: false,
            },
            output_path: Some(output.path().to_string_lossy().to_string()),
            locus_id: None,
            num_threads: 1,
        };
        export(args).unwrap();

        let content = std::fs::read_to_string(output.path()).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "S1\t1\tC\tT\t.\t.\t.");
        assert_eq!(lines[2], "S1\t2\tT\tC\t0.873\t87.3\trgba(243, 233, 166, 0.886)");
    }
}
