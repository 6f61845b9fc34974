use std::io::Write;
use std::path::Path;

use simulator::schedule::Residue;
use simulator::system::Statistics;
use simulator::{Result, Setup};

mod csv;
mod database;
mod null;

use self::csv::Csv;
use self::database::Database;
use self::null::Null;

pub trait Output {
    fn next(&mut self, setup: &Setup, statistics: &Statistics) -> Result<()>;
}

pub fn new<T: AsRef<Path>>(output: Option<T>) -> Result<Box<dyn Output>> {
    let output = match output {
        Some(output) => output,
        _ => return Ok(Box::new(Null)),
    };
    let path = output.as_ref();
    let output: Box<dyn Output> = match path.extension().and_then(|extension| extension.to_str()) {
        Some("db") | Some("sqlite") | Some("sqlite3") => Box::new(Database::new(path)?),
        _ => Box::new(Csv::new(path)?),
    };
    Ok(output)
}

/// Write the processes left in the ready queue as CSV.
pub fn residue<W: Write>(writer: W, residue: &[Residue]) -> Result<()> {
    let mut writer = ::csv::Writer::from_writer(writer);
    ok!(writer.write_record(&["Id", "Arrival", "Burst", "Remaining", "Served", "Waited"]));
    for residue in residue {
        ok!(writer.write_record(&[
            residue.id.to_string(), residue.arrival.to_string(), residue.burst.to_string(),
            residue.remaining.to_string(), residue.served.to_string(), residue.waited.to_string(),
        ]));
    }
    ok!(writer.flush());
    Ok(())
}
