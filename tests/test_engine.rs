#[cfg(test)]
mod tests {
    use gol_sparse::{patterns, CellSet, LifeEngine, Point};

    fn cell_set(cells: &[(i64, i64)]) -> CellSet {
        cells.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn test_live_cell_survival_table() {
        // A live cell survives iff it has exactly 2 or 3 live neighbors.
        let cell = Point::new(1, 1);
        for neighbor_count in 0..=8 {
            let mut seed: Vec<Point> = cell.adjacent()[..neighbor_count].to_vec();
            seed.push(cell);

            let next = LifeEngine::unbounded(seed).next();
            let expected = neighbor_count == 2 || neighbor_count == 3;
            assert_eq!(
                next.is_alive(cell),
                expected,
                "live cell with {neighbor_count} neighbors"
            );
        }
    }

    #[test]
    fn test_dead_cell_birth_table() {
        // A dead cell is born iff it has exactly 3 live neighbors.
        let cell = Point::new(1, 1);
        for neighbor_count in 0..=8 {
            let seed = cell.adjacent()[..neighbor_count].to_vec();

            let next = LifeEngine::unbounded(seed).next();
            assert_eq!(
                next.is_alive(cell),
                neighbor_count == 3,
                "dead cell with {neighbor_count} neighbors"
            );
        }
    }

    #[test]
    fn test_isolated_cell_dies() {
        let next = LifeEngine::unbounded([Point::new(7, -3)]).next();
        assert!(next.live_cells().is_empty());
    }

    #[test]
    fn test_empty_grid_stays_empty() {
        let engine = LifeEngine::unbounded([]);
        assert!(engine.step(10).live_cells().is_empty());
    }

    #[test]
    fn test_propellor_runs_without_boundary() {
        let seed = cell_set(&[(-1, 0), (0, 0), (1, 0)]);
        let engine = LifeEngine::unbounded(seed.iter().copied());

        let result = engine.next().next();

        assert_eq!(*result.live_cells(), seed);
    }

    #[test]
    fn test_propellor_suppressed_by_boundary() {
        // A propellor centered on (1,0) cannot oscillate when the rectangle
        // strips the neighbors it needs.
        let engine = LifeEngine::bounded(
            cell_set(&[(0, 0), (1, 0), (2, 0)]),
            Point::new(0, 0),
            Point::new(2, 1),
        );

        let first = engine.next();
        assert_eq!(*first.live_cells(), cell_set(&[(1, 0), (1, 1)]));

        let second = first.next();
        assert!(second.live_cells().is_empty());
    }

    #[test]
    fn test_out_of_bound_seed_is_starved_but_stored() {
        let engine = LifeEngine::bounded(
            [Point::new(5, 5)],
            Point::new(0, 0),
            Point::new(2, 2),
        );
        assert!(engine.is_alive(Point::new(5, 5)));
        assert!(engine.next().live_cells().is_empty());
    }

    #[test]
    fn test_out_of_bound_seed_sees_in_bound_neighbors_only() {
        // (3,1) sits outside the rectangle but touches the in-bound column
        // x=2, so it survives on those 3 neighbors; the in-bound cells never
        // see it back, and nothing is ever born out of bounds.
        let engine = LifeEngine::bounded(
            cell_set(&[(2, 0), (2, 1), (2, 2), (3, 1)]),
            Point::new(0, 0),
            Point::new(2, 2),
        );

        let next = engine.next();
        assert_eq!(*next.live_cells(), cell_set(&[(1, 1), (2, 1), (3, 1)]));
    }

    #[test]
    fn test_inverted_rectangle_starves_everything() {
        let engine = LifeEngine::bounded(
            patterns::points(patterns::BLOCK, 0, 0),
            Point::new(2, 2),
            Point::new(0, 0),
        );
        assert_eq!(engine.population(), 4);
        assert!(engine.next().live_cells().is_empty());
    }

    #[test]
    fn test_random_soup_is_deterministic_per_seed() {
        let (min, max) = (Point::new(-8, -8), Point::new(7, 7));
        let a = LifeEngine::random(min, max, 0.5, Some(42));
        let b = LifeEngine::random(min, max, 0.5, Some(42));
        assert_eq!(a.live_cells(), b.live_cells());

        for &p in a.live_cells() {
            assert!(!p.less_than(min) && !p.greater_than(max));
        }
    }

    #[test]
    fn test_random_soup_fill_rate_extremes() {
        let (min, max) = (Point::new(0, 0), Point::new(3, 3));
        assert_eq!(LifeEngine::random(min, max, 0.0, Some(1)).population(), 0);
        assert_eq!(LifeEngine::random(min, max, 1.0, Some(1)).population(), 16);
    }
}
