use std::{
    fs,
    io::{self, Cursor, Write},
};

use min::{interpreter::evaluator::core::Interpreter, run};
use walkdir::WalkDir;

/// Discards everything written to it, so demo scripts can print freely.
struct NullWriter;

impl Write for NullWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn demo_scripts_run_cleanly() {
    let mut count = 0;

    for entry in
        WalkDir::new("demos").into_iter()
                             .filter_map(Result::ok)
                             .filter(|e| e.path().extension().is_some_and(|ext| ext == "min"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;

        let mut interpreter =
            Interpreter::with_io(Box::new(NullWriter), Box::new(Cursor::new(Vec::new())));
        if let Err(e) = run(&mut interpreter, &source, false) {
            panic!("Demo script {path:?} failed:\n{e}");
        }
    }

    assert!(count > 0, "No demo scripts found in demos/");
}
