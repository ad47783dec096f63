//! Batch conversion of table files into JSON-LD documents
//!
//! Each input is loaded, transformed and written independently; a failure on
//! one file is recorded and the batch moves on to the next.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::diagnostics::DiagnosticSink;
use crate::document::Document;
use crate::error::ConvertError;
use crate::loader::{is_supported, TableLoader};
use crate::transform::transform;
use crate::vocab::DEFAULT_BASE_URI;

/// Suffix appended to the input's stem to name the output file
pub const OUTPUT_SUFFIX: &str = "_complete.jsonld";

/// Default output folder, relative to the working directory
pub const DEFAULT_OUTPUT_DIR: &str = "result";

/// Options for batch conversion
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Namespace bound to the `ex` prefix, used verbatim
    pub base_uri: String,
    /// Folder receiving the output documents; created if missing
    pub output_dir: PathBuf,
    /// Pretty-print with two-space indentation
    pub pretty: bool,
    pub suffix: String,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            base_uri: DEFAULT_BASE_URI.to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            pretty: true,
            suffix: OUTPUT_SUFFIX.to_string(),
        }
    }
}

/// A successfully converted input
#[derive(Debug, Clone)]
pub struct ConvertedFile {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Number of nodes written
    pub records: usize,
}

/// An input that could not be converted
#[derive(Debug, Clone)]
pub struct FailedFile {
    pub input: PathBuf,
    pub reason: String,
}

/// Outcome of a batch
#[derive(Debug, Default)]
pub struct BatchSummary {
    pub total: usize,
    pub succeeded: Vec<ConvertedFile>,
    pub failed: Vec<FailedFile>,
}

impl BatchSummary {
    pub fn success_count(&self) -> usize {
        self.succeeded.len()
    }

    pub fn failure_count(&self) -> usize {
        self.failed.len()
    }

    pub fn all_succeeded(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Output file name for an input: `<stem><suffix>`
///
/// "data/Toko A.xlsx" -> "Toko A_complete.jsonld"
pub fn output_file_name(input: &Path, suffix: &str) -> String {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    format!("{}{}", stem, suffix)
}

/// List the supported table files directly inside a directory, sorted
pub fn discover_inputs(dir: &Path) -> Result<Vec<PathBuf>, ConvertError> {
    if !dir.is_dir() {
        return Err(ConvertError::InvalidPath(dir.to_path_buf()));
    }

    let mut inputs = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && is_supported(&path) {
            inputs.push(path);
        }
    }
    inputs.sort();
    Ok(inputs)
}

/// Write a document as UTF-8 JSON; non-ASCII text is written unescaped
pub fn write_document(document: &Document, path: &Path, pretty: bool) -> Result<(), ConvertError> {
    let write_error = |source: std::io::Error| ConvertError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_error)?;
    let mut writer = BufWriter::new(file);
    if pretty {
        serde_json::to_writer_pretty(&mut writer, document)?;
    } else {
        serde_json::to_writer(&mut writer, document)?;
    }
    writer.flush().map_err(write_error)?;
    Ok(())
}

/// Convert a single input file and write its document
pub fn convert_file(
    input: &Path,
    loader: &dyn TableLoader,
    options: &BatchOptions,
    sink: &dyn DiagnosticSink,
) -> Result<ConvertedFile, ConvertError> {
    sink.emit(&format!("Reading file: {}", display_name(input)));
    let table = loader.load(input)?;
    sink.emit(&format!(
        "Read {} rows, {} columns",
        table.len(),
        table.columns().len()
    ));

    let document = transform(&table, &options.base_uri, sink);
    debug!(
        input = %input.display(),
        rows = table.len(),
        records = document.len(),
        "transformed table"
    );

    if !options.output_dir.exists() {
        fs::create_dir_all(&options.output_dir).map_err(|source| ConvertError::Write {
            path: options.output_dir.clone(),
            source,
        })?;
        sink.emit(&format!(
            "Created output folder '{}'",
            options.output_dir.display()
        ));
    }

    let output = options
        .output_dir
        .join(output_file_name(input, &options.suffix));
    write_document(&document, &output, options.pretty)?;

    sink.emit(&format!("JSON-LD saved: {}", output.display()));
    sink.emit(&format!("Total records: {}", document.len()));

    Ok(ConvertedFile {
        input: input.to_path_buf(),
        output,
        records: document.len(),
    })
}

/// Convert every input in order, continuing past failures
pub fn convert_batch(
    inputs: &[PathBuf],
    loader: &dyn TableLoader,
    options: &BatchOptions,
    sink: &dyn DiagnosticSink,
) -> BatchSummary {
    let mut summary = BatchSummary {
        total: inputs.len(),
        ..Default::default()
    };

    for (i, input) in inputs.iter().enumerate() {
        sink.emit(&format!(
            "Processing file {}/{}: {}",
            i + 1,
            inputs.len(),
            display_name(input)
        ));

        match convert_file(input, loader, options, sink) {
            Ok(converted) => {
                sink.emit(&format!(
                    "SUCCESS: {} -> {}",
                    display_name(input),
                    display_name(&converted.output)
                ));
                summary.succeeded.push(converted);
            }
            Err(e) => {
                sink.emit_error(&format!("FAILED: {}: {}", display_name(input), e));
                summary.failed.push(FailedFile {
                    input: input.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    sink.emit(&format!(
        "Conversion finished: {}/{} succeeded, {} failed, output in {}",
        summary.success_count(),
        summary.total,
        summary.failure_count(),
        options.output_dir.display()
    ));

    summary
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{CollectingSink, NoOpSink};
    use crate::loader::FileLoader;
    use serde_json::{json, Value};

    fn options_in(dir: &Path) -> BatchOptions {
        BatchOptions {
            output_dir: dir.join("result"),
            ..Default::default()
        }
    }

    fn write_csv(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_output_file_name() {
        assert_eq!(
            output_file_name(Path::new("dir/Toko A.xlsx"), OUTPUT_SUFFIX),
            "Toko A_complete.jsonld"
        );
        assert_eq!(
            output_file_name(Path::new("toko.v2.csv"), ".jsonld"),
            "toko.v2.jsonld"
        );
    }

    #[test]
    fn test_default_options() {
        let options = BatchOptions::default();
        assert_eq!(options.base_uri, "http://example.org/data/");
        assert_eq!(options.output_dir, PathBuf::from("result"));
        assert!(options.pretty);
    }

    #[test]
    fn test_discover_inputs() {
        let dir = tempfile::tempdir().unwrap();
        write_csv(dir.path(), "b.csv", "a\n1\n");
        write_csv(dir.path(), "a.xlsx", "");
        write_csv(dir.path(), "notes.txt", "");
        fs::create_dir(dir.path().join("nested.csv")).unwrap();

        let inputs = discover_inputs(dir.path()).unwrap();
        let names: Vec<String> = inputs.iter().map(|p| display_name(p)).collect();
        assert_eq!(names, vec!["a.xlsx", "b.csv"]);

        assert!(discover_inputs(&dir.path().join("missing")).is_err());
    }

    #[test]
    fn test_convert_file_writes_document() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_csv(
            dir.path(),
            "toko.csv",
            "Nama Barang,Harga Barang,Lokasi\nKopi Gayo,85000,Banda Aceh\n,,\nSambal Bu Rudy,42.5,Surabaya\n",
        );
        let options = options_in(dir.path());
        let sink = CollectingSink::new();

        let converted = convert_file(&input, &FileLoader, &options, &sink).unwrap();

        assert_eq!(converted.records, 2);
        assert_eq!(converted.output, dir.path().join("result/toko_complete.jsonld"));
        assert!(sink.contains("Read 3 rows, 3 columns"));
        assert!(sink.contains("Created output folder"));
        assert!(sink.contains("Total records: 2"));

        let written: Value =
            serde_json::from_str(&fs::read_to_string(&converted.output).unwrap()).unwrap();
        assert_eq!(written["@context"]["ex"], "http://example.org/data/");
        assert_eq!(
            written["@graph"][1],
            json!({
                "@id": "ex:record_2",
                "@type": "schema:Product",
                "schema:position": 2,
                "schema:name": {"@value": "Sambal Bu Rudy", "@type": "xsd:string"},
                "schema:price": {"@value": 42.5, "@type": "xsd:decimal"},
                "schema:location": {"@value": "Surabaya", "@type": "xsd:string"}
            })
        );
    }

    #[test]
    fn test_convert_file_keeps_non_ascii() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_csv(dir.path(), "kafe.csv", "Detail\nKopi susu gula aren ☕\n");
        let options = options_in(dir.path());

        let converted = convert_file(&input, &FileLoader, &options, &NoOpSink).unwrap();
        let text = fs::read_to_string(converted.output).unwrap();
        assert!(text.contains("Kopi susu gula aren ☕"));
    }

    #[test]
    fn test_batch_continues_past_failures() {
        let dir = tempfile::tempdir().unwrap();
        let good = write_csv(dir.path(), "good.csv", "Stok\n5\n");
        let missing = dir.path().join("missing.xlsx");
        let options = options_in(dir.path());
        let sink = CollectingSink::new();

        let summary = convert_batch(&[missing, good], &FileLoader, &options, &sink);

        assert_eq!(summary.total, 2);
        assert_eq!(summary.success_count(), 1);
        assert_eq!(summary.failure_count(), 1);
        assert!(!summary.all_succeeded());
        assert_eq!(summary.failed[0].input, dir.path().join("missing.xlsx"));
        assert!(dir.path().join("result/good_complete.jsonld").is_file());
        assert!(!dir.path().join("result/missing_complete.jsonld").exists());

        assert!(sink.contains("Processing file 1/2: missing.xlsx"));
        assert!(sink.contains("FAILED: missing.xlsx"));
        assert!(sink.contains("SUCCESS: good.csv -> good_complete.jsonld"));
        assert!(sink.contains("1/2 succeeded"));
        assert_eq!(sink.error_count(), 1);
    }

    #[test]
    fn test_write_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_csv(dir.path(), "toko.csv", "Stok\n5\n");
        // a regular file where the output folder should be
        let blocker = dir.path().join("result");
        fs::write(&blocker, "").unwrap();
        let options = BatchOptions {
            output_dir: blocker.join("nested"),
            ..Default::default()
        };

        let result = convert_file(&input, &FileLoader, &options, &NoOpSink);
        assert!(matches!(result, Err(ConvertError::Write { .. })));
    }

    #[test]
    fn test_empty_batch() {
        let dir = tempfile::tempdir().unwrap();
        let summary = convert_batch(&[], &FileLoader, &options_in(dir.path()), &NoOpSink);
        assert_eq!(summary.total, 0);
        assert!(summary.all_succeeded());
    }
}
