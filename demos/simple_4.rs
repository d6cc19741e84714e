use grid_search::{PathingGrid, Strategy};
use grid_util::point::Point;

// In this example every strategy is run on a 3x3 grid with shape
//  ___
// |S  |
// | # |
// |  G|
//  ___
// where
// - # marks an obstacle
// - S marks the start
// - G marks the goal
//
// Nodes have a 4-neighborhood

fn main() {
    let mut pathing_grid = PathingGrid::new(3, 3, Point::new(0, 0), Point::new(2, 2)).unwrap();
    pathing_grid.toggle_wall(Point::new(1, 1)).unwrap();
    println!("{}", pathing_grid);
    for strategy in Strategy::ALL {
        let result = pathing_grid.run_search(strategy).unwrap();
        println!("{strategy}: visited {} cells", result.visited.len());
        println!("Path:");
        for p in result.path {
            println!("{:?}", p);
        }
    }
}
