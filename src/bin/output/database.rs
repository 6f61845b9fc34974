use sqlite::{Connection, State, Statement};
use std::mem;
use std::path::Path;

use simulator::system::Statistics;
use simulator::{Result, Setup};

use crate::output::Output;

const COLUMNS: [&str; 12] = [
    "scheduler", "lambda", "service", "quantum", "seed", "completed",
    "time", "turnaround", "throughput", "utilization", "queue_length", "waiting",
];

pub struct Database {
    statement: Statement<'static>,
    #[allow(dead_code)]
    connection: Connection,
}

impl Database {
    pub fn new<T: AsRef<Path>>(path: T) -> Result<Database> {
        use sql::prelude::*;

        let connection = ok!(Connection::open(path));

        ok!(connection.execute({
            ok!(create_table("statistics").if_not_exists().columns(&[
                "scheduler".integer().not_null(), "lambda".float().not_null(),
                "service".float().not_null(), "quantum".float(),
                "seed".integer().not_null(), "completed".integer().not_null(),
                "time".float().not_null(), "turnaround".float().not_null(),
                "throughput".float().not_null(), "utilization".float().not_null(),
                "queue_length".float().not_null(), "waiting".float().not_null(),
            ]).compile())
        }));

        let statement = {
            let statement = ok!(connection.prepare({
                ok!(insert_into("statistics").columns(&COLUMNS).compile())
            }));
            unsafe { mem::transmute::<sqlite::Statement<'_>, sqlite::Statement<'static>>(statement) }
        };

        Ok(Database { statement: statement, connection: connection })
    }
}

impl Output for Database {
    fn next(&mut self, setup: &Setup, statistics: &Statistics) -> Result<()> {
        let quantum = if setup.quantum.is_finite() { Some(setup.quantum) } else { None };
        let statement = &mut self.statement;
        ok!(statement.reset());
        ok!(statement.bind((1, setup.scheduler)));
        ok!(statement.bind((2, setup.lambda)));
        ok!(statement.bind((3, setup.service)));
        ok!(statement.bind((4, quantum)));
        ok!(statement.bind((5, setup.seed as i64)));
        ok!(statement.bind((6, statistics.completed as i64)));
        ok!(statement.bind((7, statistics.time)));
        ok!(statement.bind((8, statistics.turnaround)));
        ok!(statement.bind((9, statistics.throughput)));
        ok!(statement.bind((10, statistics.utilization)));
        ok!(statement.bind((11, statistics.queue_length)));
        ok!(statement.bind((12, statistics.waiting)));
        if State::Done != ok!(statement.next()) {
            raise!("failed to write into the database");
        }
        Ok(())
    }
}
