use super::*;

/// Samples the mined cells without replacement, so it runs in time linear in
/// the board size no matter how crowded the board is.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ShuffledPlacement;

impl MinePlacer for ShuffledPlacement {
    fn place<R: Rng + ?Sized>(&self, config: BoardConfig, rng: &mut R) -> Array2<bool> {
        let total_cells = config.total_cells() as usize;
        let wanted = config.mines as usize;

        // optimize for full boards
        if wanted >= total_cells {
            return Array2::from_elem(grid_shape(config), true);
        }

        let mut mines: Array2<bool> = Array2::default(grid_shape(config));
        let cols = usize::from(config.cols);
        for index in rand::seq::index::sample(rng, total_cells, wanted) {
            mines[(index / cols, index % cols)] = true;
        }

        log::debug!(
            "Sampled {} mines on a {}x{} board",
            wanted,
            config.rows,
            config.cols
        );
        check_mine_count(&mines, config);
        mines
    }
}

/// Draws random coordinates and throws away any that already hold a mine.
///
/// Gets slow as the board fills up. The mine count is validated beforehand so
/// the loop always ends, and a full board skips the loop entirely.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RejectionPlacement;

impl MinePlacer for RejectionPlacement {
    fn place<R: Rng + ?Sized>(&self, config: BoardConfig, rng: &mut R) -> Array2<bool> {
        if config.mines >= config.total_cells() {
            return Array2::from_elem(grid_shape(config), true);
        }

        let mut mines: Array2<bool> = Array2::default(grid_shape(config));
        let mut mines_placed: CellCount = 0;
        let mut rejected: u64 = 0;

        while mines_placed < config.mines {
            let x = rng.random_range(0..config.cols);
            let y = rng.random_range(0..config.rows);

            let slot = &mut mines[(x, y).to_nd_index()];
            if *slot {
                rejected += 1;
            } else {
                *slot = true;
                mines_placed += 1;
            }
        }

        log::debug!(
            "Placed {} mines on a {}x{} board, {} draws rejected",
            mines_placed,
            config.rows,
            config.cols,
            rejected
        );
        check_mine_count(&mines, config);
        mines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;

    fn placed(placer: impl MinePlacer, config: BoardConfig, seed: u64) -> Array2<bool> {
        let mut rng = SmallRng::seed_from_u64(seed);
        placer.place(config, &mut rng)
    }

    #[test]
    fn shuffled_places_exact_count() {
        for mines in [0, 1, 10, 50, 80, 81] {
            let config = BoardConfig::new(9, 9, mines).unwrap();
            for seed in 0..8 {
                let mask = placed(ShuffledPlacement, config, seed);
                assert_eq!(mask.dim(), (9, 9));
                assert_eq!(count_mines(&mask), mines);
            }
        }
    }

    #[test]
    fn rejection_places_exact_count() {
        for mines in [0, 1, 10, 50, 80, 81] {
            let config = BoardConfig::new(9, 9, mines).unwrap();
            for seed in 0..8 {
                assert_eq!(count_mines(&placed(RejectionPlacement, config, seed)), mines);
            }
        }
    }

    #[test]
    fn non_square_boards_use_rows_by_cols() {
        let config = BoardConfig::new(2, 7, 13).unwrap();

        let mask = placed(ShuffledPlacement, config, 3);
        assert_eq!(mask.dim(), (2, 7));
        assert_eq!(count_mines(&mask), 13);

        let mask = placed(RejectionPlacement, config, 3);
        assert_eq!(mask.dim(), (2, 7));
        assert_eq!(count_mines(&mask), 13);
    }

    #[test]
    fn same_seed_same_layout() {
        let config = BoardConfig::intermediate();
        assert_eq!(
            placed(ShuffledPlacement, config, 42),
            placed(ShuffledPlacement, config, 42)
        );
        assert_eq!(
            placed(RejectionPlacement, config, 42),
            placed(RejectionPlacement, config, 42)
        );
    }
}
