// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Row-by-row rendering of the grid.
//!
//! One line per level, top first. Each bottom-row node (sentinels included)
//! gets a column; a level shows the key where it holds that node's tower and
//! a run of dashes of the same width where it does not.
//!
//! ```text
//! ---inf-----------+inf--
//! ---inf-----d-----+inf--
//! ---inf-----d--f--+inf--
//! ---inf--b--d--f--+inf--
//! ```

use std::fmt;

use crate::grid::{Grid, NULL};

/// Display adapter returned by [`SkipList::diagram`](crate::SkipList::diagram).
pub struct Diagram<'a, K, V> {
    grid: &'a Grid<K, V>,
}

impl<'a, K, V> Diagram<'a, K, V> {
    pub(crate) fn new(grid: &'a Grid<K, V>) -> Self {
        Diagram { grid }
    }
}

impl<K: fmt::Display, V> fmt::Display for Diagram<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let grid = self.grid;

        let mut columns = Vec::new();
        let mut idx = grid.bottom().head;
        while idx != NULL {
            let label = grid.label(idx).to_string();
            columns.push((grid.node(idx).key, label));
            idx = grid.node(idx).next;
        }

        for level in (0..grid.height()).rev() {
            let mut current = grid.level(level).head;
            for (key, label) in &columns {
                // Towers share an entry, so equal keys mean the same tower.
                if current != NULL && grid.node(current).key == *key {
                    write!(f, "--{}", label)?;
                    current = grid.node(current).next;
                } else {
                    write!(f, "--{}", "-".repeat(label.chars().count()))?;
                }
            }
            writeln!(f, "--")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::coin::Scripted;
    use crate::skip_list::SkipList;

    #[test]
    fn empty_grid() {
        let list: SkipList<u8, ()> = SkipList::with_seed(3);
        assert_eq!(list.diagram().to_string(), "---inf--+inf--\n---inf--+inf--\n");
    }

    #[test]
    fn towers_line_up_with_bottom_row() {
        let mut list = SkipList::with_rng(Scripted::new(&[0, 2, 1]));
        list.insert("b", 2);
        list.insert("d", 4);
        list.insert("f", 6);

        let expected = [
            "---inf-----------+inf--",
            "---inf-----d-----+inf--",
            "---inf-----d--f--+inf--",
            "---inf--b--d--f--+inf--",
        ];
        let rendered = list.diagram().to_string();
        assert_eq!(rendered.lines().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn wide_keys_pad_placeholders() {
        let mut list = SkipList::with_rng(Scripted::new(&[0, 1]));
        list.insert(100, ());
        list.insert(7, ());

        let expected = [
            "---inf----------+inf--",
            "---inf--7-------+inf--",
            "---inf--7--100--+inf--",
        ];
        let rendered = list.diagram().to_string();
        assert_eq!(rendered.lines().collect::<Vec<_>>(), expected);
    }
}
