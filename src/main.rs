use colored::Colorize;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use subnet_difference::error::SubnetError;
use subnet_difference::output::render_report;

fn main() {
    // Do as little as possible in main.rs as it can't contain any tests
    init_logging();
    log::info!("#Start main()");

    let args: Vec<String> = std::env::args().collect();
    let (program, subnet_args) = match args.split_first() {
        Some((program, rest)) => (program.as_str(), rest),
        None => ("subnet-difference", &args[..]),
    };

    match subnet_difference::run(program, subnet_args) {
        Ok(report) => print!("{}", render_report(&report)),
        Err(err @ SubnetError::Usage { .. }) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
        Err(err) => {
            eprintln!("{} {err}", "ERROR:".red());
            std::process::exit(1);
        }
    }
}

// Use log4rs.yml when present, otherwise log warnings to stderr so
// stdout stays reserved for the report.
fn init_logging() {
    if log4rs::init_file("log4rs.yml", Default::default()).is_ok() {
        return;
    }
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{h({l})} {m}{n}")))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))
        .expect("Error building log4rs config");
    log4rs::init_config(config).expect("Error initializing log4rs");
}
