use std::io::Write;

use log::{Level, Log, Metadata, Record};

pub struct Terminal(pub Level);

impl Log for Terminal {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.0
    }

    #[allow(unused_must_use)]
    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        match term::stdout() {
            Some(mut output) => {
                if record.level() < Level::Info {
                    output.fg(term::color::RED);
                } else {
                    output.fg(term::color::GREEN);
                }
                write!(output, "{:>12}", record.target());
                output.reset();
                writeln!(output, " {}", record.args());
            },
            _ => println!("{:>12} {}", record.target(), record.args()),
        }
    }

    fn flush(&self) {}
}
