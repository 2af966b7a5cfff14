use indoc::indoc;
use proptest::prelude::*;

use super::*;

const TRAILS: &str = indoc! {"
    89010123
    78121874
    87430965
    96549874
    45678903
    32019012
    01329801
    10456732
"};

const PATROL: &str = indoc! {"
    ....#.....
    .........#
    ..........
    ..#.......
    .......#..
    ..........
    .#..^.....
    ........#.
    #.........
    ......#...
"};

fn digits(input: &str) -> Grid<u8> {
    Grid::parse(input, |c| c.to_digit(10).map(|d| d as u8)).unwrap()
}

fn trail_rules() -> ReachRules<u8> {
    ReachRules {
        directions: Directions::Orthogonal,
        can_step: |from, to| *to == from + 1,
        is_target: |value| *value == 9,
    }
}

fn is_wall(c: &char) -> bool {
    *c == '#'
}

fn trailhead_sum(grid: &Grid<u8>, mode: CountMode) -> u64 {
    let rules = trail_rules();
    grid.cells()
        .filter(|cell| *cell.value == 0)
        .map(|cell| grid.count_reachable(cell.position, &rules, mode))
        .sum()
}

#[test]
fn test_parse_dimensions() {
    let grid = Grid::parse_chars("abc\ndef\n\n").unwrap();
    assert_eq!((grid.width(), grid.height(), grid.len()), (3, 2, 6));
    assert_eq!(grid.get(Position::new(2, 1)), Some(&'f'));
    assert_eq!(grid.get(Position::new(3, 0)), None);
}

#[test]
fn test_parse_rejects_malformed() {
    assert_eq!(Grid::parse_chars(""), Err(GridError::Empty));
    assert_eq!(Grid::parse_chars("\n\n"), Err(GridError::Empty));
    assert_eq!(
        Grid::parse_chars("abc\nde\n"),
        Err(GridError::RaggedRow {
            row: 1,
            expected: 3,
            actual: 2
        })
    );
    assert_eq!(
        Grid::parse("12\n3x", |c| c.to_digit(10)),
        Err(GridError::InvalidCell {
            x: 1,
            y: 1,
            value: 'x'
        })
    );
}

#[test]
fn test_parse_and_from_rows_agree_on_shape() {
    let ragged = GridError::RaggedRow {
        row: 1,
        expected: 2,
        actual: 0,
    };
    assert_eq!(Grid::parse_chars("ab\n\ncd"), Err(ragged.clone()));
    assert_eq!(Grid::from_rows([vec!['a', 'b'], vec![], vec!['c', 'd']]), Err(ragged));
    assert_eq!(
        Grid::parse_chars("ab\ncd").unwrap(),
        Grid::from_rows([['a', 'b'], ['c', 'd']]).unwrap()
    );
}

#[test]
fn test_from_rows() {
    let grid = Grid::from_rows([[1, 2], [3, 4], [5, 6]]).unwrap();
    assert_eq!((grid.width(), grid.height()), (2, 3));
    assert_eq!(
        Grid::from_rows([vec![1, 2], vec![3]]),
        Err(GridError::RaggedRow {
            row: 1,
            expected: 2,
            actual: 1
        })
    );
    assert_eq!(Grid::<u8>::from_rows(Vec::<Vec<u8>>::new()), Err(GridError::Empty));
}

#[test]
fn test_id_position_round_trip() {
    let grid = Grid::parse_chars("abcd\nefgh\nijkl").unwrap();
    for cell in grid.cells() {
        assert_eq!(grid.id_of(cell.position), Some(cell.id));
        assert_eq!(grid.position_of(cell.id), Some(cell.position));
    }
    assert_eq!(grid.position_of(CellId(12)), None);
    assert_eq!(grid.find(|c| *c == 'g').map(|cell| cell.position), Some(Position::new(2, 1)));
}

#[test]
fn test_neighbors_at_corner_and_center() {
    let grid = Grid::parse_chars("abc\ndef\nghi").unwrap();

    let corner: Vec<char> = grid
        .neighbors(Position::new(0, 0), Directions::All)
        .map(|cell| *cell.value)
        .collect();
    assert_eq!(corner, vec!['b', 'e', 'd']);

    let center: Vec<char> = grid
        .neighbors(Position::new(1, 1), Directions::Orthogonal)
        .map(|cell| *cell.value)
        .collect();
    assert_eq!(center, vec!['b', 'f', 'h', 'd']);

    assert_eq!(grid.neighbors(Position::new(5, 5), Directions::All).count(), 0);
}

#[test]
fn test_ray() {
    let grid = Grid::parse_chars("XMAS\n....\n....\n....").unwrap();
    let word: String = grid
        .ray(Position::new(0, 0), Direction::Right)
        .map(|cell| *cell.value)
        .collect();
    assert_eq!(word, "XMAS");
    assert_eq!(grid.ray(Position::new(0, 0), Direction::UpLeft).count(), 1);
    assert_eq!(grid.ray(Position::new(0, 0), Direction::DownRight).count(), 4);
}

#[test]
fn test_turn_right_cycles_through_four() {
    for direction in Direction::ALL {
        let turned = (0..4).fold(direction, |d, _| d.turn_right());
        assert_eq!(turned, direction);
        assert_eq!(direction.turn_right().turn_right(), direction.opposite());
    }
    assert_eq!(Direction::Up.turn_right(), Direction::Right);
    assert_eq!(Direction::Left.turn_right(), Direction::Up);
}

#[test]
fn test_trail_fixture() {
    let grid = digits(TRAILS);
    assert_eq!(trailhead_sum(&grid, CountMode::DistinctEndpoints), 36);
    assert_eq!(trailhead_sum(&grid, CountMode::Paths), 81);
}

#[test]
fn test_path_counter_reused_across_starts() {
    let grid = digits(TRAILS);
    let counter = grid.path_counter(trail_rules());
    let total: u64 = grid
        .cells()
        .filter(|cell| *cell.value == 0)
        .map(|cell| counter.count_from(cell.position))
        .sum();
    assert_eq!(total, 81);
    assert_eq!(counter.count_from(Position::new(100, 0)), 0);
}

#[test]
fn test_long_chain_counts_without_recursion() {
    const LEN: u32 = 200_000;
    let grid = Grid::from_rows([(0..LEN).collect::<Vec<u32>>()]).unwrap();
    let rules = ReachRules {
        directions: Directions::Orthogonal,
        can_step: |from: &u32, to: &u32| *to == from + 1,
        is_target: |value: &u32| *value == LEN - 1,
    };

    let start = Position::new(0, 0);
    assert_eq!(grid.count_reachable(start, &rules, CountMode::DistinctEndpoints), 1);
    assert_eq!(grid.count_reachable(start, &rules, CountMode::Paths), 1);
}

#[test]
fn test_start_on_target_counts_once() {
    let grid = digits("90\n00");
    let rules = trail_rules();
    let start = Position::new(0, 0);
    assert_eq!(grid.count_reachable(start, &rules, CountMode::DistinctEndpoints), 1);
    assert_eq!(grid.count_reachable(start, &rules, CountMode::Paths), 1);
}

#[test]
fn test_missing_start_counts_zero() {
    let grid = digits(TRAILS);
    let rules = trail_rules();
    let outside = Position::new(8, 0);
    assert_eq!(grid.count_reachable(outside, &rules, CountMode::DistinctEndpoints), 0);
    assert_eq!(grid.count_reachable(outside, &rules, CountMode::Paths), 0);
}

#[test]
fn test_patrol_fixture() {
    let grid = Grid::parse_chars(PATROL).unwrap();
    let guard = grid.find(|c| *c == '^').unwrap();
    let direction = Direction::from_arrow(*guard.value).unwrap();

    let walk = grid.simulate_walk(guard.position, direction, is_wall, None);
    assert_eq!(walk.end(), WalkEnd::Exited);
    assert_eq!(walk.distinct_position_count(), 41);

    let mut loops: Vec<Position> = walk
        .distinct_positions()
        .into_iter()
        .filter(|&p| p != guard.position)
        .filter(|&p| {
            grid.simulate_walk(guard.position, direction, is_wall, Some(p))
                .is_cycle()
        })
        .collect();
    loops.sort_by_key(|p| (p.y, p.x));

    assert_eq!(
        loops,
        vec![
            Position::new(3, 6),
            Position::new(6, 7),
            Position::new(7, 7),
            Position::new(1, 8),
            Position::new(3, 8),
            Position::new(7, 9),
        ]
    );
}

#[test]
fn test_cycle_ends_on_repeated_state() {
    let grid = Grid::parse_chars(PATROL).unwrap();
    let guard = grid.find(|c| *c == '^').unwrap().position;

    let walk = grid.simulate_walk(guard, Direction::Up, is_wall, Some(Position::new(3, 6)));
    assert!(walk.is_cycle());

    let (last, visited) = walk.states().split_last().unwrap();
    assert!(visited.contains(last));
    let distinct: std::collections::HashSet<_> = visited.iter().collect();
    assert_eq!(distinct.len(), visited.len());
}

#[test]
fn test_boxed_in_walker_cycles_in_place() {
    let grid = Grid::parse_chars(".#.\n#.#\n.#.").unwrap();
    let walk = grid.simulate_walk(Position::new(1, 1), Direction::Up, is_wall, None);
    assert!(walk.is_cycle());
    assert_eq!(walk.len(), 5);
    assert_eq!(walk.distinct_position_count(), 1);
}

#[test]
fn test_empty_grid_identity() {
    let grid = Grid::<u8>::default();
    let rules = trail_rules();
    let origin = Position::default();

    assert!(grid.is_empty());
    assert_eq!(grid.cells().count(), 0);
    assert_eq!(grid.neighbors(origin, Directions::All).count(), 0);
    assert_eq!(grid.count_reachable(origin, &rules, CountMode::DistinctEndpoints), 0);
    assert_eq!(grid.count_reachable(origin, &rules, CountMode::Paths), 0);

    let walk = grid.simulate_walk(origin, Direction::Up, |_| false, None);
    assert!(walk.is_empty());
    assert!(!walk.is_cycle());
}

fn digit_grid() -> impl Strategy<Value = Grid<u8>> {
    (1usize..7, 1usize..7).prop_flat_map(|(width, height)| {
        prop::collection::vec(0u8..10, width * height)
            .prop_map(move |cells| Grid::from_rows(cells.chunks(width).map(<[u8]>::to_vec)).unwrap())
    })
}

fn wall_grid() -> impl Strategy<Value = (Grid<char>, Position)> {
    (1usize..8, 1usize..8).prop_flat_map(|(width, height)| {
        (
            prop::collection::vec(prop::bool::weighted(0.2), width * height),
            0..width,
            0..height,
        )
            .prop_map(move |(walls, x, y)| {
                let cells = walls.into_iter().map(|wall| if wall { '#' } else { '.' });
                let rows: Vec<Vec<char>> = cells
                    .collect::<Vec<_>>()
                    .chunks(width)
                    .map(<[char]>::to_vec)
                    .collect();
                (Grid::from_rows(rows).unwrap(), Position::new(x, y))
            })
    })
}

proptest! {
    #[test]
    fn neighbors_are_symmetric(grid in digit_grid()) {
        for cell in grid.cells() {
            for direction in Direction::ALL {
                if let Some(next) = grid.neighbor(cell.position, direction) {
                    let back = grid.neighbor(next.position, direction.opposite());
                    prop_assert_eq!(back.map(|c| c.id), Some(cell.id));
                }
            }
        }
    }

    #[test]
    fn endpoints_never_exceed_paths(grid in digit_grid()) {
        let rules = trail_rules();
        for cell in grid.cells() {
            let endpoints = grid.count_reachable(cell.position, &rules, CountMode::DistinctEndpoints);
            let paths = grid.count_reachable(cell.position, &rules, CountMode::Paths);
            prop_assert!(endpoints <= paths);
        }
    }

    #[test]
    fn walk_length_is_bounded(
        (grid, start) in wall_grid(),
        direction in prop::sample::select(Direction::ORTHOGONAL.to_vec()),
        obstruction in prop::option::of((0usize..9, 0usize..9).prop_map(|(x, y)| Position::new(x, y))),
    ) {
        let walk = grid.simulate_walk(start, direction, is_wall, obstruction);
        prop_assert!(!walk.is_empty());
        // Every state is distinct except a repeated last one
        prop_assert!(walk.len() <= grid.len() * Direction::ORTHOGONAL.len() + 1);
        if walk.is_cycle() {
            let (last, visited) = walk.states().split_last().unwrap();
            prop_assert!(visited.contains(last));
        }
        if let Some(blocked) = obstruction.filter(|&p| p != start) {
            prop_assert!(walk.states().iter().all(|state| state.position != blocked));
        }
    }
}
