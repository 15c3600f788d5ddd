#![deny(clippy::all)]

//! Solve the eight-puzzle with a choice of search methods.

use std::io::{self, Write};

use board::{Board, ParseBoardError};
use clap::{value_t, App, Arg, ArgMatches};
use searcher::{SearchOptions, SearchReport};
use thiserror::Error;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

pub mod method;
pub mod report;

pub use method::{HeuristicKind, Method};

type Error = anyhow::Error;

#[derive(Debug, Error)]
pub enum SolverError {
    #[error("Unknown search method: {0:?}")]
    UnknownMethod(String),

    #[error(transparent)]
    InvalidBoard(#[from] ParseBoardError),
}

/// Search from `start` to the solved board.
pub fn solve(start: Board, method: Method, options: SearchOptions) -> SearchReport<Board> {
    info!(%start, %method, limit = ?options.limit, "solving puzzle");
    searcher::build(start, Board::goal(), method.strategy())
        .with_options(options)
        .run()
}

fn app() -> App<'static, 'static> {
    App::new("Eight Puzzle")
        .version("1.0")
        .author("Alex Rudy <opensource@alexrudy.net>")
        .about("Solve the eight-puzzle by graph search")
        .arg(
            Arg::with_name("start")
                .value_name("START")
                .help("Starting board as nine digits in reading order, 0 for the blank")
                .required(true)
                .takes_value(true),
        )
        .arg(
            Arg::with_name("method")
                .value_name("METHOD")
                .help("bfs, ucost, greedy-h1, greedy-h2, greedy-h3, astar-h1, astar-h2 or astar-h3")
                .required(true)
                .takes_value(true),
        )
        .arg(
            Arg::with_name("max-expansions")
                .short("m")
                .long("max-expansions")
                .value_name("N")
                .help("Give up after expanding this many states")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .help("Log more detail to stderr (repeat for more)"),
        )
}

fn options(matches: &ArgMatches) -> Result<SearchOptions, Error> {
    let limit = if matches.is_present("max-expansions") {
        Some(value_t!(matches, "max-expansions", usize)?)
    } else {
        None
    };
    Ok(SearchOptions { limit })
}

fn init_tracing(verbosity: u64) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// Command line entry point.
pub fn solver() -> Result<(), Error> {
    let matches = app().get_matches();
    init_tracing(matches.occurrences_of("verbose"));

    let start: Board = matches
        .value_of("start")
        .unwrap_or_default()
        .parse()
        .map_err(SolverError::from)?;
    let method: Method = matches.value_of("method").unwrap_or_default().parse()?;
    let options = options(&matches)?;

    if !start.is_solvable() {
        warn!(%start, "puzzle has no solution, the search will exhaust every reachable board");
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "solving puzzle {} -> {}", start, Board::goal())?;

    let report = solve(start, method, options);
    report::write_summary(&mut out, &report)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Reverse;
    use std::collections::{BinaryHeap, HashMap};

    use board::Direction;
    use searcher::{Cost, Label, Outcome, SearchState, TransitionCost};

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    /// Walk away from the goal, skipping moves that leave the board.
    fn scramble(moves: &[Direction]) -> Board {
        moves
            .iter()
            .fold(Board::goal(), |b, d| b.slide(*d).unwrap_or(b))
    }

    /// Cheapest cost to the goal, by a plain Dijkstra over boards.
    fn reference_cost(start: Board) -> Cost {
        let goal = Board::goal();
        let mut best: HashMap<Board, Cost> = HashMap::new();
        let mut heap = BinaryHeap::new();
        best.insert(start, 0);
        heap.push(Reverse((0, start.to_string())));

        while let Some(Reverse((cost, key))) = heap.pop() {
            let state = board(&key);
            if state == goal {
                return cost;
            }
            if best.get(&state).map_or(false, |&c| c < cost) {
                continue;
            }
            for (_, next) in state.successors() {
                let candidate = cost + state.cost(&next);
                if best.get(&next).map_or(true, |&c| candidate < c) {
                    best.insert(next, candidate);
                    heap.push(Reverse((candidate, next.to_string())));
                }
            }
        }
        panic!("{} cannot reach the goal", start);
    }

    /// Twelve moves out from the goal.
    fn medium() -> Board {
        use Direction::*;
        scramble(&[Left, Up, Left, Up, Right, Down, Right, Up, Left, Left, Down, Right])
    }

    fn run(start: &str, method: Method) -> SearchReport<Board> {
        solve(board(start), method, SearchOptions::default())
    }

    #[test]
    fn two_moves_breadth_first() {
        let report = run("142305678", Method::BreadthFirst);
        let path = report.path().unwrap();

        assert_eq!(path.destination().to_string(), "012345678");
        assert_eq!(path.len(), 3);
        assert_eq!(path.cost(), 17);
        assert!(report.expanded_count > 0);
        assert!(report.frontier_count > 0);

        let labels: Vec<_> = path.iter().map(|s| s.label.clone()).collect();
        assert_eq!(
            labels,
            vec![
                Label::Start,
                Label::Move(Direction::Down),
                Label::Move(Direction::Right)
            ]
        );
    }

    #[test]
    fn two_moves_every_method() {
        // Tiles 4 and 1 must each move at least once, so 17 is optimal.
        for method in Method::all() {
            let report = run("142305678", method);
            assert_eq!(report.path_cost(), Some(17), "{}", method);
            assert_eq!(report.path().unwrap().moves(), 2, "{}", method);
        }
    }

    #[test]
    fn already_solved() {
        for method in Method::all() {
            let report = run("012345678", method);
            let path = report.path().unwrap();

            assert_eq!(path.len(), 1, "{}", method);
            assert_eq!(path.cost(), 0, "{}", method);
            assert_eq!(path.origin(), &Board::goal());
            assert_eq!(report.expanded_count, 1, "{}", method);
        }
    }

    #[test]
    fn deterministic() {
        for method in Method::all() {
            let first = solve(medium(), method, SearchOptions::default());
            let second = solve(medium(), method, SearchOptions::default());
            assert_eq!(first, second, "{}", method);
        }
    }

    #[test]
    fn counters_are_consistent() {
        for method in Method::all() {
            let report = solve(medium(), method, SearchOptions::default());
            assert!(report.is_solved(), "{}", method);
            assert!(report.frontier_count >= report.expanded_count, "{}", method);
        }
    }

    #[test]
    fn paths_are_connected() {
        for method in Method::all() {
            let report = solve(medium(), method, SearchOptions::default());
            let path = report.path().unwrap();
            let steps: Vec<_> = path.iter().collect();

            assert_eq!(path.origin(), &medium());
            assert_eq!(path.destination(), &Board::goal());
            assert!(steps[0].label.is_start());

            let mut total = 0;
            for pair in steps.windows(2) {
                let (before, after) = (pair[0], pair[1]);
                let matching: Vec<_> = before
                    .state
                    .successors()
                    .into_iter()
                    .filter(|(_, s)| *s == after.state)
                    .collect();
                assert_eq!(matching.len(), 1);
                assert_eq!(Label::Move(matching[0].0), after.label);
                total += before.state.cost(&after.state);
            }
            assert_eq!(total, path.cost(), "{}", method);
        }
    }

    #[test]
    fn cost_aware_methods_are_optimal() {
        use Direction::*;
        let starts = vec![
            scramble(&[Left, Left, Up, Right, Up, Left, Down, Down]),
            scramble(&[Up, Up, Left, Down, Left, Up, Right, Right, Down, Left]),
            medium(),
            board("142305678"),
        ];

        for start in starts {
            let optimal = reference_cost(start);
            for method in Method::all().filter(|m| m.is_cost_optimal()) {
                let report = solve(start, method, SearchOptions::default());
                assert_eq!(
                    report.path_cost(),
                    Some(optimal),
                    "{} from {}",
                    method,
                    start
                );
            }
        }
    }

    #[test]
    fn breadth_first_uses_fewest_moves() {
        use Direction::*;
        let start = scramble(&[Left, Left, Up, Right, Up, Left, Down, Down, Right, Up]);
        let fewest = run(&start.to_string(), Method::BreadthFirst)
            .path()
            .unwrap()
            .moves();

        for method in Method::all() {
            let report = solve(start, method, SearchOptions::default());
            assert!(report.path().unwrap().moves() >= fewest, "{}", method);
        }
    }

    #[test]
    fn unsolvable_is_truncated() {
        let options = SearchOptions { limit: Some(500) };
        for method in Method::all() {
            let report = solve(board("021345678"), method, options.clone());
            assert_eq!(report.outcome, Outcome::Truncated(500), "{}", method);
            assert_eq!(report.expanded_count, 500);
            assert!(report.frontier_count >= 500);
        }
    }

    #[test]
    fn unknown_method() {
        assert!(matches!(
            "depth-first".parse::<Method>(),
            Err(SolverError::UnknownMethod(_))
        ));
    }

    #[test]
    fn invalid_board() {
        let err = "01234567".parse::<Board>().map_err(SolverError::from);
        assert!(matches!(err, Err(SolverError::InvalidBoard(_))));
    }

    #[test]
    fn cli_parses_options() {
        let matches = app()
            .get_matches_from_safe(vec!["eightpuzzle", "142305678", "ucost", "-m", "25", "-vv"])
            .unwrap();
        assert_eq!(matches.value_of("method"), Some("ucost"));
        assert_eq!(matches.occurrences_of("verbose"), 2);
        assert_eq!(options(&matches).unwrap(), SearchOptions { limit: Some(25) });

        let matches = app()
            .get_matches_from_safe(vec!["eightpuzzle", "142305678", "bfs"])
            .unwrap();
        assert_eq!(options(&matches).unwrap(), SearchOptions::default());

        let matches = app()
            .get_matches_from_safe(vec!["eightpuzzle", "142305678", "bfs", "-m", "lots"])
            .unwrap();
        assert!(options(&matches).is_err());
    }
}
