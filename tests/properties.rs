use gridlink::generator::anchors::select_anchors;
use gridlink::generator::puzzles::anchor_count;
use gridlink::generator::random_path::{find_hamiltonian_path, snake_path};
use gridlink::generator::seeder::SeededRandom;
use gridlink::{Cell, build_puzzle, generate, validate};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn build_is_deterministic(seed in ".{0,24}") {
        prop_assert_eq!(build_puzzle(&seed, None), build_puzzle(&seed, None));
    }

    #[test]
    fn solution_always_validates(seed in "[a-z0-9-]{1,16}") {
        let generated = generate(&seed, None);
        let puzzle = &generated.puzzle;
        prop_assert_eq!(generated.solution.len(), puzzle.size * puzzle.size);
        prop_assert_eq!(puzzle.anchors.len(), anchor_count(puzzle.size));
        let res = validate(generated.solution.get(), &puzzle.anchors, puzzle.size);
        prop_assert!(res.valid, "{:?}", res.error);
    }

    #[test]
    fn random_paths_are_hamiltonian(seed in any::<u32>(), size in 1usize..8) {
        let mut rng = SeededRandom::new(seed);
        if let Some(path) = find_hamiltonian_path(size, &mut rng, 20) {
            let cells: &[Cell] = path.get();
            prop_assert!(validate(cells, &[], size).valid);
        }
    }

    #[test]
    fn anchors_numbered_in_sequence(size in 1usize..10, count in 0usize..40) {
        let path = snake_path(size);
        let cells: &[Cell] = path.get();
        let anchors = select_anchors(cells, count);

        prop_assert!(anchors.len() >= 1);
        prop_assert!(anchors.len() <= count.max(2));
        for (i, a) in anchors.iter().enumerate() {
            prop_assert_eq!(a.number, i + 1);
        }
        prop_assert_eq!(anchors[0].cell(), cells[0]);
        prop_assert_eq!(anchors[anchors.len() - 1].cell(), cells[cells.len() - 1]);
        if count <= cells.len() {
            prop_assert_eq!(anchors.len(), count.max(2));
        }
    }
}
