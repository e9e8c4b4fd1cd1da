use grid_traversal::{all_shortest_paths, BorderedGrid, Direction, Edge, FxIndexSet, Point};

// Moving forward costs 1, turning on the spot costs 1000. Counts the tiles that
// lie on any of the cheapest routes from S to E.
// #######
// #....E#
// #.#.#.#
// #S....#
// #######
const MAZE: &str = "#######\n#....E#\n#.#.#.#\n#S....#\n#######";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct State {
    at: Point,
    facing: Direction,
}

fn main() {
    let grid = match BorderedGrid::parse_bytes(MAZE, b'#') {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("Could not build the grid: {err}");
            return;
        }
    };
    let (Some(start), Some(end)) = (grid.find(&b'S'), grid.find(&b'E')) else {
        return;
    };
    let start = State {
        at: start,
        facing: Direction::RIGHT,
    };
    let result = all_shortest_paths(&start, |s: &State| {
        let mut edges = Vec::new();
        let ahead = s.at + s.facing;
        if !grid.is_border(ahead) {
            edges.push(Edge::new(State { at: ahead, ..*s }, 1_u64));
        }
        for facing in [s.facing.turn_left(), s.facing.turn_right()] {
            edges.push(Edge::new(State { facing, ..*s }, 1000));
        }
        edges
    });
    let ends: Vec<State> = Direction::CARDINAL
        .iter()
        .map(|&facing| State { at: end, facing })
        .collect();
    let Some((_, best)) = result.nearest(&ends) else {
        println!("E cannot be reached");
        return;
    };
    let best_ends: Vec<State> = ends
        .into_iter()
        .filter(|s| result.distance(s) == Some(best))
        .collect();
    let tiles: FxIndexSet<Point> = result
        .nodes_on_paths(&best_ends)
        .iter()
        .map(|s| s.at)
        .collect();
    println!("Lowest score: {best}");
    println!("Tiles on a best path: {}", tiles.len());
}
