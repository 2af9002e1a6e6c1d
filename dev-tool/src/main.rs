use std::process::exit;

use anyhow::Error;
use structopt::StructOpt;

use crate::exit_code::FATAL_ERROR;

mod exit_code;
mod grade;
mod inspect;
mod table;
mod utils;

/// Tooling for grading user interactions.
#[derive(StructOpt, Debug)]
enum CommandArgs {
    Grade(grade::GradeCmd),
    Inspect(inspect::InspectCmd),
}

impl CommandArgs {
    fn run(self) -> Result<i32, Error> {
        match self {
            CommandArgs::Grade(cmd) => cmd.run(),
            CommandArgs::Inspect(cmd) => cmd.run(),
        }
    }
}

fn main() {
    env_logger::init();

    let exit_code = match CommandArgs::from_args().run() {
        Ok(exit_code) => exit_code,
        Err(error) => {
            eprintln!("{:?}", error);
            FATAL_ERROR
        }
    };

    exit(exit_code);
}
