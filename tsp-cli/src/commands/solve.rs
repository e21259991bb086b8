#[cfg(test)]
#[path = "../../tests/unit/commands/solve_test.rs"]
mod solve_test;

use super::*;

use std::io::BufReader;
use tsp_cli::extensions::solve::config::*;
use tsp_cli::extensions::solve::formats::{OUTPUT_FORMAT_NAMES, write_solution};
use tsp_cli::read_tsplib_matrix;

const ALGORITHM_ARG_NAME: &str = "ALGORITHM";
const PROBLEM_ARG_NAME: &str = "PROBLEM";
const ITERATIONS_ARG_NAME: &str = "max-iterations";
const AGENTS_ARG_NAME: &str = "agents";
const ALPHA_ARG_NAME: &str = "alpha";
const BETA_ARG_NAME: &str = "beta";
const RHO_ARG_NAME: &str = "rho";
const Q_ARG_NAME: &str = "q";
const TIME_ARG_NAME: &str = "max-time";
const RANDOM_SEED_ARG_NAME: &str = "seed";
const THREADS_ARG_NAME: &str = "threads";
const ROUNDED_ARG_NAME: &str = "rounded";
const CONFIG_ARG_NAME: &str = "config";
const OUT_RESULT_ARG_NAME: &str = "out-result";
const OUT_FORMAT_ARG_NAME: &str = "format";
const LOG_ARG_NAME: &str = "log";

pub fn get_solve_app() -> Command {
    Command::new("solve")
        .about("Solves symmetric Traveling Salesman Problem given in TSPLIB format")
        .arg(
            Arg::new(ALGORITHM_ARG_NAME)
                .help("Specifies the algorithm to use")
                .required(true)
                .value_parser(ALGORITHM_NAMES.to_vec())
                .index(1),
        )
        .arg(Arg::new(PROBLEM_ARG_NAME).help("Sets the problem file to use").required(true).index(2))
        .arg(
            Arg::new(ITERATIONS_ARG_NAME)
                .help("Specifies maximum number of iterations (epochs, generations)")
                .short('n')
                .long(ITERATIONS_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(AGENTS_ARG_NAME)
                .help("Specifies amount of agents: ants, bees or individuals")
                .short('a')
                .long(AGENTS_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(ALPHA_ARG_NAME)
                .help("Specifies pheromone influence of ant colony")
                .long(ALPHA_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(BETA_ARG_NAME)
                .help("Specifies distance influence of ant colony")
                .long(BETA_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(RHO_ARG_NAME)
                .help("Specifies pheromone evaporation rate of ant colony, should be in (0, 1)")
                .long(RHO_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(Q_ARG_NAME)
                .help("Specifies pheromone deposit scale of ant colony")
                .long(Q_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(TIME_ARG_NAME)
                .help("Specifies max time algorithm run in seconds, checked between iterations")
                .short('t')
                .long(TIME_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(RANDOM_SEED_ARG_NAME)
                .help("Specifies randomization seed to avoid stochastic behavior")
                .short('s')
                .long(RANDOM_SEED_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(THREADS_ARG_NAME)
                .help("Specifies amount of threads used to run agents")
                .long(THREADS_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(ROUNDED_ARG_NAME)
                .help("Specifies whether distances are rounded to the nearest integer")
                .long(ROUNDED_ARG_NAME)
                .required(false)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .help("Specifies path to algorithm configuration file, command line arguments take precedence")
                .short('c')
                .long(CONFIG_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to file for result output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUT_FORMAT_ARG_NAME)
                .help("Specifies result output format")
                .long(OUT_FORMAT_ARG_NAME)
                .required(false)
                .default_value("tour")
                .value_parser(OUTPUT_FORMAT_NAMES.to_vec()),
        )
        .arg(
            Arg::new(LOG_ARG_NAME)
                .help("Specifies whether default logging is enabled")
                .long(LOG_ARG_NAME)
                .required(false)
                .action(ArgAction::SetTrue),
        )
}

/// Runs solver commands.
pub fn run_solve(
    matches: &ArgMatches,
    out_writer_func: fn(Option<File>) -> BufWriter<Box<dyn Write>>,
) -> Result<(), String> {
    // required
    let algorithm = get_required_value(matches, ALGORITHM_ARG_NAME)?;
    let problem_path = get_required_value(matches, PROBLEM_ARG_NAME)?;
    let problem_file = open_file(problem_path, "problem");

    // optional
    let is_rounded = matches.get_flag(ROUNDED_ARG_NAME);
    let out_format = matches.get_one::<String>(OUT_FORMAT_ARG_NAME).map_or("tour", |format| format.as_str());
    let config = get_config(matches, algorithm)?;

    let (name, matrix) = read_tsplib_matrix(BufReader::new(problem_file), is_rounded)
        .map_err(|err| format!("cannot read tsplib problem from '{problem_path}': '{err}'"))?;

    let solution = create_optimizer_from_config(algorithm, &config)?
        .optimize(&matrix)
        .map_err(|err| format!("cannot find any solution: '{err}'"))?;

    let out_result = matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out solution"));

    write_solution(out_format, name.as_str(), &solution, out_writer_func(out_result))
}

/// Creates a config from the config file, if specified, overriding its values with command line arguments.
fn get_config(matches: &ArgMatches, algorithm: &str) -> Result<Config, String> {
    let mut config = match matches.get_one::<String>(CONFIG_ARG_NAME) {
        Some(path) => read_config(BufReader::new(open_file(path, "config")))?,
        None => Config::default(),
    };

    if let Some(max_iterations) = parse_int_value::<usize>(matches, ITERATIONS_ARG_NAME, "max iterations")? {
        config.termination.get_or_insert_with(Default::default).max_iterations = Some(max_iterations);
    }

    if let Some(max_time) = parse_int_value::<usize>(matches, TIME_ARG_NAME, "max time")? {
        config.termination.get_or_insert_with(Default::default).max_time = Some(max_time);
    }

    if let Some(agents) = parse_int_value::<usize>(matches, AGENTS_ARG_NAME, "agents")? {
        match algorithm {
            "aco" => config.aco.get_or_insert_with(Default::default).ants = Some(agents),
            "bees" => config.bees.get_or_insert_with(Default::default).bees = Some(agents),
            _ => config.genetic.get_or_insert_with(Default::default).population = Some(agents),
        }
    }

    let alpha = parse_float_value::<f64>(matches, ALPHA_ARG_NAME, "alpha")?;
    let beta = parse_float_value::<f64>(matches, BETA_ARG_NAME, "beta")?;
    let rho = parse_float_value::<f64>(matches, RHO_ARG_NAME, "rho")?;
    let q = parse_float_value::<f64>(matches, Q_ARG_NAME, "q")?;

    if alpha.is_some() || beta.is_some() || rho.is_some() || q.is_some() {
        let aco = config.aco.get_or_insert_with(Default::default);
        aco.alpha = alpha.or(aco.alpha);
        aco.beta = beta.or(aco.beta);
        aco.rho = rho.or(aco.rho);
        aco.q = q.or(aco.q);
    }

    if let Some(seed) = parse_int_value::<u64>(matches, RANDOM_SEED_ARG_NAME, "seed")? {
        config.environment.get_or_insert_with(Default::default).seed = Some(seed);
    }

    if let Some(threads) = parse_int_value::<usize>(matches, THREADS_ARG_NAME, "threads")? {
        config.environment.get_or_insert_with(Default::default).threads = Some(threads);
    }

    if matches.get_flag(LOG_ARG_NAME) {
        config.telemetry.get_or_insert_with(Default::default).logging = Some(LoggingConfig { enabled: true });
    }

    Ok(config)
}

fn get_required_value<'a>(matches: &'a ArgMatches, arg_name: &str) -> Result<&'a str, String> {
    matches
        .get_one::<String>(arg_name)
        .map(|value| value.as_str())
        .ok_or_else(|| format!("'{arg_name}' is not specified"))
}
