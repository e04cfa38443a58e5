use std::io::{self, BufWriter};

use slice_growth::demo::Demo;
use slice_growth::report::WriterReport;

fn main() -> io::Result<()> {
    let mut report = WriterReport::new(BufWriter::new(io::stdout().lock()));
    Demo::default().run(&mut report)?;
    report.flush()
}
