use std::fs::{File, OpenOptions};
use std::path::Path;

use csv::{Writer, WriterBuilder};

use simulator::system::Statistics;
use simulator::{Result, Setup};

use crate::output::Output;

const HEADER: [&str; 6] = [
    "Lambda", "Average Turnaround", "Throughput", "CPU Utilization",
    "Average # of processes in Ready Queue", "Average Waiting Time",
];

pub struct Csv {
    writer: Writer<File>,
}

impl Csv {
    pub fn new<T: AsRef<Path>>(path: T) -> Result<Csv> {
        let file = ok!(OpenOptions::new().create(true).append(true).open(path));
        let empty = ok!(file.metadata()).len() == 0;
        let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
        if empty {
            ok!(writer.write_record(&HEADER));
            ok!(writer.flush());
        }
        Ok(Csv { writer: writer })
    }
}

impl Output for Csv {
    fn next(&mut self, setup: &Setup, statistics: &Statistics) -> Result<()> {
        ok!(self.writer.write_record(&[
            setup.lambda.to_string(), statistics.turnaround.to_string(),
            statistics.throughput.to_string(), statistics.utilization.to_string(),
            statistics.queue_length.to_string(), statistics.waiting.to_string(),
        ]));
        ok!(self.writer.flush());
        Ok(())
    }
}
