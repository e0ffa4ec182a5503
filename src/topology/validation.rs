//! Grid validation helpers.
//!
//! Construction already rejects dangling indices and malformed edges; the
//! checks here cover what a well-formed but sloppy complex can still get
//! wrong: a cell listing the same boundary cell twice, two cells of one level
//! with the same boundary, and link tables out of sync with the cells.

use crate::debug_invariants::DebugInvariants;
use crate::mesh_error::MeshError;
use crate::topology::grid::Grid;
use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// Optional validation toggles for grid checks.
#[derive(Debug, Clone, Copy)]
pub struct GridValidationOptions {
    /// Ensure no cell references the same boundary cell twice.
    pub check_duplicate_children: bool,
    /// Ensure no two cells of one level share the same boundary set.
    pub check_duplicate_cells: bool,
    /// Ensure every link table is the inverse of the level above it.
    pub check_links: bool,
    /// How to report duplicates found by the two checks above.
    pub duplicates: DuplicateHandling,
}

impl GridValidationOptions {
    /// Enable all grid validation checks.
    pub fn all() -> Self {
        Self {
            check_duplicate_children: true,
            check_duplicate_cells: true,
            check_links: true,
            duplicates: DuplicateHandling::Error,
        }
    }
}

impl Default for GridValidationOptions {
    fn default() -> Self {
        Self::all()
    }
}

/// Behavior for duplicate detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicateHandling {
    /// Skip duplicate detection.
    Ignore,
    /// Log a warning on duplicates.
    Warn,
    /// Return an error on the first duplicate.
    Error,
}

/// Validate `grid` with the given options.
pub fn validate_grid(grid: &Grid, options: GridValidationOptions) -> Result<(), MeshError> {
    if options.check_links {
        grid.validate_invariants()?;
    }
    if options.duplicates == DuplicateHandling::Ignore {
        return Ok(());
    }

    for (dim, cells) in grid.levels() {
        let mut seen: HashMap<Vec<usize>, usize> = HashMap::with_capacity(cells.len());
        for (cell, items) in cells.iter().enumerate() {
            let mut key = items.to_vec();
            key.sort_unstable();

            if options.check_duplicate_children {
                if let Some(pair) = key.windows(2).find(|w| w[0] == w[1]) {
                    report(
                        options.duplicates,
                        MeshError::DuplicateChild {
                            dim,
                            cell,
                            child: pair[0],
                        },
                    )?;
                }
            }

            if options.check_duplicate_cells {
                key.dedup();
                match seen.entry(key) {
                    Entry::Occupied(first) => report(
                        options.duplicates,
                        MeshError::DuplicateCell {
                            dim,
                            first: *first.get(),
                            second: cell,
                        },
                    )?,
                    Entry::Vacant(slot) => {
                        slot.insert(cell);
                    }
                }
            }
        }
    }
    Ok(())
}

fn report(handling: DuplicateHandling, err: MeshError) -> Result<(), MeshError> {
    match handling {
        DuplicateHandling::Error => Err(err),
        DuplicateHandling::Warn => {
            log::warn!("Duplicate detected: {err}");
            Ok(())
        }
        DuplicateHandling::Ignore => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::builder::GridBuilder;

    fn square() -> GridBuilder {
        GridBuilder::new(4).level([[0, 1], [1, 2], [2, 3], [3, 0]])
    }

    #[test]
    fn clean_grid_passes() {
        let grid = square().level([[0, 1, 2, 3]]).build().unwrap();
        assert!(validate_grid(&grid, GridValidationOptions::all()).is_ok());
    }

    #[test]
    fn repeated_child_is_reported() {
        let grid = square().level([[0, 1, 2, 0]]).build().unwrap();
        assert_eq!(
            validate_grid(&grid, GridValidationOptions::all()),
            Err(MeshError::DuplicateChild {
                dim: 2,
                cell: 0,
                child: 0
            })
        );
    }

    #[test]
    fn same_boundary_twice_is_reported() {
        let grid = GridBuilder::new(3)
            .level([[0, 1], [1, 2], [2, 1]])
            .build()
            .unwrap();
        assert_eq!(
            validate_grid(&grid, GridValidationOptions::all()),
            Err(MeshError::DuplicateCell {
                dim: 1,
                first: 1,
                second: 2
            })
        );
    }

    #[test]
    fn warn_mode_does_not_fail() {
        let grid = GridBuilder::new(2).level([[0, 1], [1, 0]]).build().unwrap();
        let options = GridValidationOptions {
            duplicates: DuplicateHandling::Warn,
            ..GridValidationOptions::all()
        };
        assert!(validate_grid(&grid, options).is_ok());
    }
}
