use std::io::{self, Write};

use anyhow::Error;

use crate::util::text::wrap;

#[rustfmt::skip]
pub fn print_error(err: &Error) {
    let mut stderr = io::stderr().lock();

    let _ = writeln!(stderr);
    let _ = writeln!(stderr, "   ╔══════════════════════════════════════════════════════════════╗");
    let _ = writeln!(stderr, "   ║  ✗ Error                                                     ║");
    let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");

    for line in wrap(&err.to_string(), 59) {
        let _ = writeln!(stderr, "   ║  {:<59} ║", line);
    }

    for cause in err.chain().skip(1) {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Caused by:                                                  ║");
        for line in wrap(&cause.to_string(), 57) {
            let _ = writeln!(stderr, "   ║    {:<57} ║", line);
        }
    }

    let hints = HintCollector::collect(err);
    if !hints.is_empty() {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Hints:                                                      ║");
        for hint in hints {
            let wrapped = wrap(&hint, 55);
            if let Some((first, rest)) = wrapped.split_first() {
                let _ = writeln!(stderr, "   ║    • {:<55} ║", first);
                for line in rest {
                    let _ = writeln!(stderr, "   ║      {:<55} ║", line);
                }
            }
        }
    }

    let _ = writeln!(stderr, "   ╚══════════════════════════════════════════════════════════════╝");
    let _ = writeln!(stderr);
}

#[derive(Default)]
struct HintCollector {
    hints: Vec<String>,
}

impl HintCollector {
    fn collect(err: &Error) -> Vec<String> {
        let mut collector = Self::default();

        collector.collect_generate_hints(err);
        collector.collect_load_hints(err);
        collector.collect_symbol_hints(err);

        collector.hints
    }

    fn add(&mut self, hint: impl Into<String>) {
        self.hints.push(hint.into());
    }

    fn collect_generate_hints(&mut self, err: &Error) {
        use periodic_table::GenerateError;

        let Some(gen_err) = err.downcast_ref::<GenerateError>() else {
            return;
        };

        match gen_err {
            GenerateError::Io { path, source } => {
                self.collect_std_io_hints(source);
                if path.extension().is_some_and(|ext| ext == "rs") {
                    self.add("The destination directory must exist before generating");
                    self.add("Choose another directory with -d/--dest");
                } else {
                    self.add("Point -s/--source at the directory holding the JSON datasets");
                }
            }

            GenerateError::Json { path, source } => {
                self.add(format!(
                    "'{}' is not valid JSON (line {}, column {})",
                    file_name(path),
                    source.line(),
                    source.column()
                ));
                self.add("No module was written for this dataset or any after it");
            }
        }
    }

    fn collect_load_hints(&mut self, err: &Error) {
        use periodic_table::LoadError;

        let Some(load_err) = err.downcast_ref::<LoadError>() else {
            return;
        };

        match load_err {
            LoadError::Io { source, .. } => {
                self.collect_std_io_hints(source);
                self.add("--data must name a directory containing all three JSON datasets");
                self.add("Omit --data to use the datasets built into ptgen");
            }

            LoadError::Json { path, source } => {
                self.add(format!(
                    "'{}' failed at line {}, column {}",
                    file_name(path),
                    source.line(),
                    source.column()
                ));
                if source.is_data() {
                    self.add("The file is valid JSON but its shape does not match the dataset");
                }
            }

            LoadError::WorkingDirectory(_) => {
                self.add("The current directory may have been removed");
                self.add("Pass an explicit --data directory instead");
            }
        }
    }

    fn collect_symbol_hints(&mut self, err: &Error) {
        use periodic_table::InvalidSymbolError;

        if err.downcast_ref::<InvalidSymbolError>().is_some() {
            self.add("Symbols are matched case-insensitively (\"fe\" and \"Fe\" both work)");
            self.add("Element names such as \"Iron\" are not accepted here");
        }
    }

    fn collect_std_io_hints(&mut self, source: &io::Error) {
        use io::ErrorKind;

        match source.kind() {
            ErrorKind::NotFound => {
                self.add("File or directory not found");
            }

            ErrorKind::PermissionDenied => {
                self.add("Permission denied accessing the file");
                self.add("Check file permissions with `ls -la`");
            }

            ErrorKind::IsADirectory => {
                self.add("A directory exists where a file was expected");
            }

            ErrorKind::InvalidData => {
                self.add("File is not valid UTF-8");
            }

            ErrorKind::WriteZero | ErrorKind::StorageFull => {
                self.add("Failed to write data (disk full?)");
            }

            _ => {
                self.add("I/O operation failed");
            }
        }
    }
}

fn file_name(path: &std::path::Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
