use grid_traversal::*;

const TURN_COST: u64 = 1000;

/// A reindeer standing on a tile and facing a direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct Reindeer {
    at: Point,
    facing: Direction,
}

fn moves(grid: &BorderedGrid<u8>, r: &Reindeer) -> Vec<Edge<Reindeer, u64>> {
    let mut edges = Vec::new();
    let ahead = r.at + r.facing;
    if !grid.is_border(ahead) {
        edges.push(Edge::new(Reindeer { at: ahead, ..*r }, 1));
    }
    for facing in [r.facing.turn_left(), r.facing.turn_right()] {
        if !grid.is_border(r.at + facing) {
            edges.push(Edge::new(Reindeer { facing, ..*r }, TURN_COST));
        }
    }
    edges
}

fn unit_edges(grid: &BorderedGrid<u8>, p: &Point) -> Vec<Edge<Point, u32>> {
    grid.neighbours4(*p).map(|n| Edge::new(n, 1)).collect()
}

/// Lowest score from S to E, and the number of tiles on any best path.
fn solve_maze(input: &str) -> (u64, usize) {
    let grid = BorderedGrid::parse_bytes(input, b'#').unwrap();
    let start = Reindeer {
        at: grid.find(&b'S').unwrap(),
        facing: Direction::RIGHT,
    };
    let end = grid.find(&b'E').unwrap();

    let early = dijkstra_until(&start, |r| moves(&grid, r), |r| r.at == end);
    let (_, best) = early.target().unwrap();

    let all = all_shortest_paths(&start, |r| moves(&grid, r));
    let ends: Vec<Reindeer> = Direction::CARDINAL
        .iter()
        .map(|&facing| Reindeer { at: end, facing })
        .filter(|r| all.distance(r) == Some(best))
        .collect();
    assert_eq!(all.nearest(&ends).map(|(_, d)| d), Some(best));
    let tiles: FxIndexSet<Point> = all.nodes_on_paths(&ends).iter().map(|r| r.at).collect();
    (best, tiles.len())
}

#[test]
fn straight_corridor() {
    assert_eq!(solve_maze("#####\n#S.E#\n#####"), (2, 3));
}

#[test]
fn one_turn_beats_two() {
    assert_eq!(solve_maze("####\n#.E#\n#S.#\n####"), (1002, 3));
}

#[test]
fn reindeer_maze() {
    let input = "\
###############
#.......#....E#
#.#.###.#.###.#
#.....#.#...#.#
#.###.#####.#.#
#.#.#.......#.#
#.#.#####.###.#
#...........#.#
###.#.#####.#.#
#...#.....#.#.#
#.#.#.###.#.#.#
#.....#...#.#.#
#.###.#.#.#.#.#
#S..#.....#...#
###############
";
    assert_eq!(solve_maze(input), (7036, 45));
}

#[test]
fn dropping_walls_until_blocked() {
    let mut grid = BorderedGrid::parse_bytes("...\n...\n...", b'#').unwrap();
    let start = BorderedGrid::<u8>::bordered(Point::new(0, 0));
    let exit = BorderedGrid::<u8>::bordered(Point::new(2, 2));
    let falling = [
        Point::new(0, 1),
        Point::new(1, 1),
        Point::new(2, 1),
        Point::new(0, 2),
    ];

    let steps = |grid: &BorderedGrid<u8>| {
        dijkstra_until(&start, |p| unit_edges(grid, p), |p| *p == exit)
            .target()
            .map(|(_, d)| d)
    };
    assert_eq!(steps(&grid), Some(4));

    let mut blocking = None;
    for wall in falling {
        grid.set(BorderedGrid::<u8>::bordered(wall), b'#');
        if steps(&grid).is_none() {
            blocking = Some(wall);
            break;
        }
    }
    assert_eq!(blocking, Some(Point::new(2, 1)));
}

#[test]
fn uphill_trails_reach_one_summit() {
    let grid = Grid::parse_bytes("0123\n1234\n8765\n9876").unwrap();
    let trailhead = grid.find(&b'0').unwrap();
    let uphill = |p: &Point| {
        let height = *grid.at(*p);
        grid.neighbours4(*p)
            .filter(|n| *grid.at(*n) == height + 1)
            .collect::<Vec<_>>()
    };
    let summits: Vec<Point> = bfs(&trailhead, uphill)
        .filter(|p| *grid.at(*p) == b'9')
        .collect();
    assert_eq!(summits, vec![Point::new(3, 0)]);

    let trail = bfs_path(&trailhead, uphill, |p| *grid.at(*p) == b'9').unwrap();
    assert_eq!(trail.len(), 10);
    assert_eq!(trail.last(), Some(&Point::new(3, 0)));
}

#[test]
fn bfs_parents_trace_back_to_start() {
    let grid = BorderedGrid::parse_bytes("....\n.##.\n....", b'#').unwrap();
    let start = Point::new(1, 1);
    let visits: Vec<(Point, Option<Point>)> =
        bfs_with_parents(&start, |p: &Point| grid.neighbours4(*p)).collect();
    // Everything except the start is strictly after it and points at a state
    // seen earlier.
    assert_eq!(visits[0], (start, None));
    for (i, (_, parent)) in visits.iter().enumerate().skip(1) {
        let parent = parent.unwrap();
        assert!(visits[..i].iter().any(|(p, _)| *p == parent));
    }
    assert_eq!(visits.len(), 10);
}

#[test]
fn weighted_letters() {
    let result = dijkstra(&'A', |n: &char| match n {
        'A' => vec![Edge::new('B', 1_u64), Edge::new('C', 4)],
        'B' => vec![Edge::new('C', 1)],
        _ => vec![],
    });
    assert_eq!(result.distance(&'C'), Some(2));
    assert_eq!(result.predecessor(&'C'), Some(&'B'));
}
