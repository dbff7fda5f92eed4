//! Surface area of a lava droplet made of unit cubes.
//!
//! Part 1 counts every cube face not shared with another lava cube. Part 2
//! only counts faces the surrounding water can reach: air pockets sealed
//! inside the droplet do not count. Water is flooded breadth-first from a
//! corner of a box one cube larger than the droplet on every side.

use std::collections::HashSet;
use std::convert::Infallible;

use waypath_search::{Cost, Engine, Graph, SearchOptions};

use crate::{Answers, PuzzleError, timed};

/// Unit steps to the six face-adjacent cubes.
const FACES: [(i32, i32, i32); 6] = [
    (1, 0, 0),
    (-1, 0, 0),
    (0, 1, 0),
    (0, -1, 0),
    (0, 0, 1),
    (0, 0, -1),
];

/// A unit cube at integer coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cube {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Cube {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    fn faces(self) -> impl Iterator<Item = Cube> {
        FACES
            .into_iter()
            .map(move |(dx, dy, dz)| Cube::new(self.x + dx, self.y + dy, self.z + dz))
    }
}

/// The lava cubes and a bounding box with one cube of air around them.
#[derive(Debug, Clone)]
pub struct Droplet {
    lava: HashSet<Cube>,
    min: Cube,
    max: Cube,
}

impl Droplet {
    /// Parse one `x,y,z` cube per line.
    pub fn parse(input: &str) -> Result<Self, PuzzleError> {
        let mut lava = HashSet::new();
        for line in input.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let coords: Vec<i32> = line
                .split(',')
                .map(|c| c.trim().parse::<i32>())
                .collect::<Result<_, _>>()
                .map_err(|e| PuzzleError::Malformed(format!("cube {line:?}: {e}")))?;
            let &[x, y, z] = coords.as_slice() else {
                return Err(PuzzleError::Malformed(format!(
                    "cube {line:?} needs three coordinates"
                )));
            };
            lava.insert(Cube::new(x, y, z));
        }

        let mut cubes = lava.iter();
        let Some(&first) = cubes.next() else {
            return Err(PuzzleError::Malformed("no cubes".to_string()));
        };
        let (mut min, mut max) = (first, first);
        for c in cubes {
            min = Cube::new(min.x.min(c.x), min.y.min(c.y), min.z.min(c.z));
            max = Cube::new(max.x.max(c.x), max.y.max(c.y), max.z.max(c.z));
        }
        Ok(Self {
            lava,
            min: Cube::new(min.x - 1, min.y - 1, min.z - 1),
            max: Cube::new(max.x + 1, max.y + 1, max.z + 1),
        })
    }

    /// Whether `c` lies inside the padded bounding box.
    fn in_bounds(&self, c: Cube) -> bool {
        (self.min.x..=self.max.x).contains(&c.x)
            && (self.min.y..=self.max.y).contains(&c.y)
            && (self.min.z..=self.max.z).contains(&c.z)
    }

    /// Faces not shared by two lava cubes.
    pub fn surface_area(&self) -> usize {
        self.lava
            .iter()
            .flat_map(|c| c.faces())
            .filter(|f| !self.lava.contains(f))
            .count()
    }

    /// Faces reachable by water flowing in from outside.
    pub fn exterior_surface_area(&self) -> Result<usize, PuzzleError> {
        let mut engine =
            Engine::with_options(SearchOptions::default().with_track_paths(false));
        let water = engine.bfs_map(&Water { droplet: self }, &[self.min], Cost::MAX)?;
        log::debug!("water filled {} cubes", water.len());
        Ok(self
            .lava
            .iter()
            .flat_map(|c| c.faces())
            .filter(|f| water.contains(f))
            .count())
    }
}

/// Air cubes around the droplet, each connected to its open faces.
struct Water<'a> {
    droplet: &'a Droplet,
}

impl Graph for Water<'_> {
    type State = Cube;
    type Error = Infallible;

    fn neighbors(&self, &c: &Cube, buf: &mut Vec<(Cube, Cost)>) -> Result<(), Infallible> {
        buf.extend(
            c.faces()
                .filter(|&f| self.droplet.in_bounds(f) && !self.droplet.lava.contains(&f))
                .map(|f| (f, 1)),
        );
        Ok(())
    }
}

pub fn solve(input: &str) -> Result<Answers, PuzzleError> {
    let droplet = Droplet::parse(input)?;
    let part1 = timed("boiling boulders part 1", || droplet.surface_area());
    let part2 = timed("boiling boulders part 2", || droplet.exterior_surface_area())?;
    Ok(Answers {
        part1: part1 as Cost,
        part2: part2 as Cost,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
2,2,2
1,2,2
3,2,2
2,1,2
2,3,2
2,2,1
2,2,3
2,2,4
2,2,6
1,2,5
3,2,5
2,1,5
2,3,5
";

    #[test]
    fn two_touching_cubes() {
        let d = Droplet::parse("1,1,1\n2,1,1").unwrap();
        assert_eq!(d.surface_area(), 10);
        assert_eq!(d.exterior_surface_area().unwrap(), 10);
    }

    #[test]
    fn sample_part1() {
        assert_eq!(Droplet::parse(SAMPLE).unwrap().surface_area(), 64);
    }

    #[test]
    fn sample_part2() {
        assert_eq!(Droplet::parse(SAMPLE).unwrap().exterior_surface_area().unwrap(), 58);
    }

    #[test]
    fn sealed_pocket_is_not_exterior() {
        // A 3×3×3 block with its centre missing.
        let mut lines = Vec::new();
        for x in 0..3 {
            for y in 0..3 {
                for z in 0..3 {
                    if (x, y, z) != (1, 1, 1) {
                        lines.push(format!("{x},{y},{z}"));
                    }
                }
            }
        }
        let d = Droplet::parse(&lines.join("\n")).unwrap();
        assert_eq!(d.surface_area(), 54 + 6);
        assert_eq!(d.exterior_surface_area().unwrap(), 54);
    }

    #[test]
    fn malformed_cubes() {
        assert!(matches!(Droplet::parse(""), Err(PuzzleError::Malformed(_))));
        assert!(matches!(Droplet::parse("1,2"), Err(PuzzleError::Malformed(_))));
        assert!(matches!(Droplet::parse("1,x,3"), Err(PuzzleError::Malformed(_))));
    }
}
