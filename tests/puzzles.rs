use std::collections::HashSet;

use gridlink::generator::random_path::snake_path;
use gridlink::{
    Anchor, Cell, Difficulty, PathError, Puzzle, build_puzzle, difficulty_for_date, generate,
    validate, validator::check_path,
};

fn snake(size: usize) -> Vec<Cell> {
    snake_path(size).into_cells()
}

#[test]
fn same_seed_same_puzzle() {
    for seed in ["2024-01-01", "2024-07-20", "room-1234", "level-3", "", "ünïcödé"] {
        assert_eq!(build_puzzle(seed, None), build_puzzle(seed, None));
        assert_eq!(
            build_puzzle(seed, Some(Difficulty::Medium)),
            build_puzzle(seed, Some(Difficulty::Medium))
        );
    }
}

#[test]
fn different_seeds_differ() {
    let a: Puzzle = build_puzzle("room-1", Some(Difficulty::Hard));
    let b: Puzzle = build_puzzle("room-2", Some(Difficulty::Hard));
    assert_ne!(a.id, b.id);
    assert_ne!(a.anchors, b.anchors);
}

#[test]
fn daily_levels() {
    let monday = build_puzzle("2024-01-01", None);
    assert_eq!(monday.difficulty, Difficulty::Easy);
    assert_eq!(monday.size, 5);

    let saturday = build_puzzle("2024-01-06", None);
    assert_eq!(saturday.difficulty, Difficulty::Hard);
    assert_eq!(saturday.size, difficulty_for_date("2024-01-06").size);
}

#[test]
fn solution_covers_grid() {
    for seed in ["2024-01-01", "2024-01-03", "2024-01-06", "lobby-9"] {
        let generated = generate(seed, None);
        let size = generated.puzzle.size;
        let cells: HashSet<Cell> = generated.solution.get().iter().copied().collect();
        assert_eq!(cells.len(), size * size);
        assert!(cells.iter().all(|c| c.in_bounds(size)));
        assert!(generated.report.attempts >= 1);
    }
}

#[test]
fn anchors_well_formed() {
    for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
        let generated = generate("anchors", Some(difficulty));
        let puzzle = &generated.puzzle;
        let numbers: Vec<usize> = puzzle.anchors.iter().map(|a| a.number).collect();
        let expected: Vec<usize> = (1..=puzzle.anchors.len()).collect();
        assert_eq!(numbers, expected);
        assert!(puzzle.anchors.len() >= 2);

        let cells: HashSet<Cell> = puzzle.anchors.iter().map(|a| a.cell()).collect();
        assert_eq!(cells.len(), puzzle.anchors.len());
        assert!(cells.iter().all(|c| c.in_bounds(puzzle.size)));

        let path = generated.solution.get();
        assert_eq!(puzzle.anchors[0].cell(), path[0]);
        assert_eq!(puzzle.anchors.last().unwrap().cell(), path[path.len() - 1]);
    }
}

#[test]
fn generated_solution_is_valid() {
    let generated = generate("2024-02-29", None);
    let res = validate(
        generated.solution.get(),
        &generated.puzzle.anchors,
        generated.puzzle.size,
    );
    assert!(res.valid, "{:?}", res.error);
    assert_eq!(res.error, None);
}

#[test]
fn mutated_solutions_are_rejected() {
    let generated = generate("mutations", Some(Difficulty::Medium));
    let puzzle = &generated.puzzle;
    let path: Vec<Cell> = generated.solution.get().to_vec();

    // Missing cell
    let mut shorter = path.clone();
    shorter.remove(10);
    assert_eq!(
        check_path(&shorter, &puzzle.anchors, puzzle.size),
        Err(PathError::CoverageMismatch {
            expected: 36,
            actual: 35
        })
    );

    // Same cells and moves, but the numbers are reached backwards
    let reversed: Vec<Cell> = path.iter().rev().copied().collect();
    assert!(matches!(
        check_path(&reversed, &puzzle.anchors, puzzle.size),
        Err(PathError::AnchorsOutOfOrder { .. })
    ));

    // Duplicated cell
    let mut duplicated = path.clone();
    let n = duplicated.len();
    duplicated[n - 1] = duplicated[n - 2];
    assert_eq!(
        check_path(&duplicated, &puzzle.anchors, puzzle.size),
        Err(PathError::DuplicateVisit(path[n - 2]))
    );

    // Two cells swapped
    let mut swapped = path.clone();
    swapped.swap(3, 20);
    assert!(matches!(
        check_path(&swapped, &puzzle.anchors, puzzle.size),
        Err(PathError::NonAdjacentMove(_, _))
    ));
}

#[test]
fn diagonal_step_rejected() {
    let path = [
        Cell::new(0, 0),
        Cell::new(1, 1),
        Cell::new(0, 1),
        Cell::new(1, 0),
    ];
    let res = validate(&path, &[], 2);
    assert!(!res.valid);
    assert_eq!(
        res.error.as_deref(),
        Some("Cells (0, 0) and (1, 1) are not adjacent")
    );
}

#[test]
fn snake_scenario() {
    let path = snake(5);
    assert_eq!(
        &path[..10],
        &[
            Cell::new(0, 0),
            Cell::new(0, 1),
            Cell::new(0, 2),
            Cell::new(0, 3),
            Cell::new(0, 4),
            Cell::new(1, 4),
            Cell::new(1, 3),
            Cell::new(1, 2),
            Cell::new(1, 1),
            Cell::new(1, 0),
        ]
    );
    let anchors = vec![Anchor::new(Cell::new(0, 0), 1), Anchor::new(Cell::new(4, 4), 2)];
    assert!(validate(&path, &anchors, 5).valid);

    let mut short = path.clone();
    short.pop();
    let res = validate(&short, &anchors, 5);
    assert!(!res.valid);
    assert!(res.error.unwrap().contains("24"));
}

#[test]
fn concurrent_generation() {
    let expected: Puzzle = build_puzzle("2024-01-06", None);
    let results: Vec<Puzzle> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| s.spawn(|| build_puzzle("2024-01-06", None)))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert!(results.iter().all(|p| *p == expected));
}
