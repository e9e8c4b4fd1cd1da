use log::trace;
use petgraph::unionfind::UnionFind;

use crate::grid::GridView;
use crate::point::Point;
use crate::search::{FxIndexMap, FxIndexSet};

/// Connected regions of a grid: maximal sets of walkable points joined through
/// 4-neighbours that hold the same value.
#[derive(Clone, Debug)]
pub struct Regions {
    points: FxIndexSet<Point>,
    labels: Vec<usize>,
    count: usize,
}

impl Regions {
    /// Generates the regions with a [UnionFind] over the grid's
    /// [points](GridView::points). Region ids are assigned in row-major order of
    /// each region's first point.
    pub fn of<T, G>(grid: &G) -> Regions
    where
        T: PartialEq,
        G: GridView<T>,
    {
        let points: FxIndexSet<Point> = grid.points().collect();
        let mut components = UnionFind::new(points.len());
        for (ix, &point) in points.iter().enumerate() {
            let value = grid.at(point);
            for neighbour in grid.neighbours4(point) {
                if grid.at(neighbour) != value {
                    continue;
                }
                if let Some(neighbour_ix) = points.get_index_of(&neighbour) {
                    components.union(ix, neighbour_ix);
                }
            }
        }
        let mut ids: FxIndexMap<usize, usize> = FxIndexMap::default();
        let labels = components
            .into_labeling()
            .into_iter()
            .map(|root| {
                let next = ids.len();
                *ids.entry(root).or_insert(next)
            })
            .collect();
        trace!("Found {} regions over {} points", ids.len(), points.len());
        Regions {
            points,
            labels,
            count: ids.len(),
        }
    }

    /// The region id of a walkable point.
    pub fn region_of(&self, point: Point) -> Option<usize> {
        self.points.get_index_of(&point).map(|ix| self.labels[ix])
    }

    pub fn same_region(&self, a: Point, b: Point) -> bool {
        match (self.region_of(a), self.region_of(b)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    /// The points of every region, indexed by region id, each in row-major order.
    pub fn groups(&self) -> Vec<Vec<Point>> {
        let mut groups = vec![Vec::new(); self.count];
        for (point, &label) in self.points.iter().zip(&self.labels) {
            groups[label].push(*point);
        }
        groups
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}
