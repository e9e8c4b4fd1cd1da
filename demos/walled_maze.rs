use grid_traversal::{BorderedGrid, GridView, Point};

// In this example a path is found on a grid with shape
// S..#
// .#.#
// ...E
// S marks the start
// E marks the end
fn main() {
    let grid = match BorderedGrid::parse_bytes("S..#\n.#.#\n...E", b'#') {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("Could not build the grid: {err}");
            return;
        }
    };
    println!("{}", grid);
    let (Some(start), Some(end)) = (grid.find(&b'S'), grid.find(&b'E')) else {
        return;
    };
    let distances = grid.step_distances(start);
    println!("{} tiles are reachable from {}", distances.len(), start);
    if let Some(path) = grid.step_path(start, end) {
        println!("A path has been found:");
        for p in path {
            println!("{}", BorderedGrid::<u8>::interior(p));
        }
    }
    let wall = Point::new(2, 2);
    println!("{} is a wall: {}", wall, grid.is_border(wall));
}
