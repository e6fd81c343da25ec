use clap::Parser;
use gridquest::{
    search::{validate, RunSummary, Verbosity},
    Agent, Cell, Config, Grid, SearchEngineName, SearchPlanner, StateSpace,
};
use std::{error::Error, path::PathBuf, process::ExitCode};
use tracing::{error, info};

#[derive(Parser)]
#[command(version)]
/// Plan a route across a grid of walls, coins and trash.
struct Cli {
    #[arg(help = "The grid file; a blank grid of the configured size if omitted")]
    grid: Option<PathBuf>,
    #[arg(help = "The TOML config file", short = 'c', long = "config", id = "CONFIG")]
    config: Option<PathBuf>,
    #[arg(
        value_enum,
        help = "The search engine to use, overrides the config",
        short = 'e',
        long = "engine",
        id = "ENGINE"
    )]
    search_engine_name: Option<SearchEngineName>,
    #[arg(
        help = "The maximum number of moves",
        short = 's',
        long = "step-limit",
        id = "STEP_LIMIT"
    )]
    step_limit: Option<usize>,
    #[arg(
        help = "The reward for picking up a coin",
        long = "coin-reward",
        allow_negative_numbers = true
    )]
    coin_reward: Option<i64>,
    #[arg(
        help = "The reward for picking up trash",
        long = "trash-reward",
        allow_negative_numbers = true
    )]
    trash_reward: Option<i64>,
    #[arg(help = "Seed of the stochastic engines", long = "seed")]
    seed: Option<u64>,
    #[arg(help = "Run every search engine in turn", long = "all")]
    all: bool,
    #[arg(
        value_enum,
        help = "The verbosity level, overrides the config",
        short = 'v',
        long = "verbosity",
        id = "VERBOSITY"
    )]
    verbosity: Option<Verbosity>,
    #[arg(help = "Whether to use coloured output", long = "colour")]
    colour: bool,
}

impl Cli {
    /// Load the config file, if any, and apply the command line overrides.
    fn config(&self) -> Result<Config, Box<dyn Error>> {
        let mut config = match &self.config {
            Some(path) => Config::from_path(path)?,
            None => Config::default(),
        };
        if let Some(name) = self.search_engine_name {
            config.algorithm = name;
        }
        if let Some(step_limit) = self.step_limit {
            config.search.step_limit = step_limit;
        }
        if let Some(coin_reward) = self.coin_reward {
            config.search.coin_reward = coin_reward;
        }
        if let Some(trash_reward) = self.trash_reward {
            config.search.trash_reward = trash_reward;
        }
        if let Some(seed) = self.seed {
            config.search.seed = Some(seed);
        }
        if let Some(verbosity) = self.verbosity {
            config.verbosity = verbosity;
        }
        Ok(config)
    }

    fn grid(&self, config: &Config) -> Result<Grid, Box<dyn Error>> {
        match &self.grid {
            Some(path) => Ok(Grid::from_path(path)?),
            None => {
                let mut grid = Grid::new(config.grid.rows, config.grid.cols);
                grid.set_agent(Cell::new(0, 0));
                grid.set_goal(Cell::new(
                    config.grid.rows as i32 - 1,
                    config.grid.cols as i32 - 1,
                ));
                Ok(grid)
            }
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = match cli.config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let level: tracing::Level = config.verbosity.into();
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(cli.colour)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    match run(&cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, config: &Config) -> Result<(), Box<dyn Error>> {
    let grid = cli.grid(config)?;
    let start = grid.agent().ok_or("grid has no agent cell")?;
    let goal = grid.goal().ok_or("grid has no goal cell")?;
    info!(rows = grid.rows(), cols = grid.cols(), %start, %goal, "loaded grid");

    let engine_names: Vec<SearchEngineName> = if cli.all {
        SearchEngineName::all().collect()
    } else {
        vec![config.algorithm]
    };

    println!("{grid}");
    for name in engine_names {
        let mut agent = Agent::new(SearchPlanner::new(name.create(&config.search)));
        agent.set_position(start);
        agent.plan_path(&grid, goal)?;

        let planner = agent.planner();
        let path = planner.engine().final_path();
        let summary = RunSummary::replay(
            path,
            &grid,
            goal,
            config.search.step_limit,
            config.search.rewards(),
        );
        println!("{name}");
        println!("  path: {path}");
        println!("  {summary}");
        println!("  states explored: {}", planner.engine().states_explored());
        if let Some(compute_time) = planner.last_compute_time() {
            println!(
                "  compute time: {}",
                humantime::format_duration(compute_time)
            );
        }
        match validate(path, &grid, start, goal, config.search.step_limit) {
            Ok(()) => println!("  path is valid"),
            Err(e) => println!("  path is invalid: {e}"),
        }
    }
    Ok(())
}
