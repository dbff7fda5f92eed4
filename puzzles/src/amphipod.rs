//! Least energy to sort amphipods into their rooms.
//!
//! ```text
//! #############
//! #...........#
//! ###B#C#B#D###
//!   #A#D#C#A#
//!   #########
//! ```
//!
//! Each state of the burrow is a node of the search graph. An amphipod
//! moves at most twice: out of its room into a hallway square that is not
//! directly outside a room, then from the hallway into its own room once
//! that room holds no strangers. Each step costs 1, 10, 100 or 1000 energy
//! for kinds A to D.

use std::convert::Infallible;
use std::fmt;

use waypath_search::{Cost, Engine, Goal, Graph, SearchOptions};

use crate::{Answers, PuzzleError, timed};

const HALLWAY: usize = 11;
const ROOMS: usize = 4;
const MAX_DEPTH: usize = 4;
/// Hallway squares directly outside each room.
const DOORS: [usize; ROOMS] = [2, 4, 6, 8];
const ENERGY: [Cost; ROOMS] = [1, 10, 100, 1000];
const EMPTY: u8 = 0;

/// Rows inserted below the first room row when the diagram is unfolded.
const FOLDED_ROWS: [[u8; ROOMS]; 2] = [[4, 3, 2, 1], [4, 2, 1, 3]];

/// Where every amphipod currently is. Kinds are stored as 1..=4 (A..D),
/// empty squares as 0; room slot 0 is the one next to the hallway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Burrow {
    hallway: [u8; HALLWAY],
    rooms: [[u8; MAX_DEPTH]; ROOMS],
    depth: usize,
}

impl Burrow {
    /// Parse the burrow diagram.
    pub fn parse(input: &str) -> Result<Self, PuzzleError> {
        let mut lines = input.lines().map(str::trim).filter(|l| !l.is_empty());
        let top = lines.next().unwrap_or_default();
        if top.is_empty() || top.chars().any(|c| c != '#') {
            return Err(PuzzleError::Malformed("missing burrow wall".to_string()));
        }
        let hall_line = lines
            .next()
            .ok_or_else(|| PuzzleError::Malformed("missing hallway".to_string()))?;
        let hall: Vec<u8> = hall_line
            .trim_matches('#')
            .chars()
            .map(square)
            .collect::<Result<_, _>>()?;
        if hall.len() != HALLWAY {
            return Err(PuzzleError::Malformed(format!(
                "hallway has {} squares, expected {HALLWAY}",
                hall.len()
            )));
        }
        let mut hallway = [EMPTY; HALLWAY];
        hallway.copy_from_slice(&hall);
        if DOORS.iter().any(|&d| hallway[d] != EMPTY) {
            return Err(PuzzleError::Malformed(
                "amphipod standing in a doorway".to_string(),
            ));
        }

        let mut rooms = [[EMPTY; MAX_DEPTH]; ROOMS];
        let mut depth = 0;
        for line in lines {
            let row: Vec<char> = line.chars().filter(|&c| c != '#').collect();
            if row.is_empty() {
                continue;
            }
            if row.len() != ROOMS {
                return Err(PuzzleError::Malformed(format!("bad room row {line:?}")));
            }
            if depth == MAX_DEPTH {
                return Err(PuzzleError::Malformed(format!(
                    "rooms deeper than {MAX_DEPTH}"
                )));
            }
            for (r, &c) in row.iter().enumerate() {
                rooms[r][depth] = square(c)?;
            }
            depth += 1;
        }
        if depth == 0 {
            return Err(PuzzleError::Malformed("no rooms".to_string()));
        }
        Ok(Self {
            hallway,
            rooms,
            depth,
        })
    }

    /// Insert the two rows hidden by the folded diagram.
    pub fn unfold(&self) -> Result<Self, PuzzleError> {
        if self.depth != 2 {
            return Err(PuzzleError::Malformed(format!(
                "can only unfold rooms of depth 2, not {}",
                self.depth
            )));
        }
        let mut rooms = [[EMPTY; MAX_DEPTH]; ROOMS];
        for (r, room) in rooms.iter_mut().enumerate() {
            *room = [
                self.rooms[r][0],
                FOLDED_ROWS[0][r],
                FOLDED_ROWS[1][r],
                self.rooms[r][1],
            ];
        }
        Ok(Self {
            hallway: self.hallway,
            rooms,
            depth: MAX_DEPTH,
        })
    }

    #[inline]
    fn room(&self, r: usize) -> &[u8] {
        &self.rooms[r][..self.depth]
    }

    /// Whether every amphipod is home.
    pub fn is_organized(&self) -> bool {
        (0..ROOMS).all(|r| self.room(r).iter().all(|&c| usize::from(c) == r + 1))
    }

    /// Whether the hallway squares between `from` (exclusive) and `to`
    /// (inclusive) are free.
    fn hallway_clear(&self, from: usize, to: usize) -> bool {
        let span = if from < to { from + 1..=to } else { to..=from - 1 };
        self.hallway[span].iter().all(|&c| c == EMPTY)
    }

    fn moves_out(&self, buf: &mut Vec<(Burrow, Cost)>) {
        for r in 0..ROOMS {
            let room = self.room(r);
            let Some(slot) = room.iter().position(|&c| c != EMPTY) else {
                continue;
            };
            let home = r as u8 + 1;
            if room[slot..].iter().all(|&c| c == home) {
                continue;
            }
            let kind = room[slot];
            let door = DOORS[r];
            for stop in (0..HALLWAY).filter(|h| !DOORS.contains(h)) {
                if !self.hallway_clear(door, stop) {
                    continue;
                }
                let steps = slot + 1 + door.abs_diff(stop);
                let mut next = *self;
                next.rooms[r][slot] = EMPTY;
                next.hallway[stop] = kind;
                buf.push((next, steps as Cost * ENERGY[usize::from(kind) - 1]));
            }
        }
    }

    fn moves_home(&self, buf: &mut Vec<(Burrow, Cost)>) {
        for (h, &kind) in self.hallway.iter().enumerate() {
            if kind == EMPTY {
                continue;
            }
            let r = usize::from(kind) - 1;
            let room = self.room(r);
            if room.iter().any(|&c| c != EMPTY && c != kind) {
                continue;
            }
            let Some(slot) = room.iter().rposition(|&c| c == EMPTY) else {
                continue;
            };
            let door = DOORS[r];
            if !self.hallway_clear(h, door) {
                continue;
            }
            let steps = h.abs_diff(door) + slot + 1;
            let mut next = *self;
            next.hallway[h] = EMPTY;
            next.rooms[r][slot] = kind;
            buf.push((next, steps as Cost * ENERGY[r]));
        }
    }
}

fn square(c: char) -> Result<u8, PuzzleError> {
    match c {
        '.' => Ok(EMPTY),
        'A'..='D' => Ok(c as u8 - b'A' + 1),
        other => Err(PuzzleError::Malformed(format!(
            "unexpected square {other:?}"
        ))),
    }
}

impl fmt::Display for Burrow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let glyph = |c: u8| if c == EMPTY { '.' } else { (b'A' + c - 1) as char };
        writeln!(f, "#############")?;
        write!(f, "#")?;
        for &c in &self.hallway {
            write!(f, "{}", glyph(c))?;
        }
        writeln!(f, "#")?;
        for slot in 0..self.depth {
            let edge = if slot == 0 { "###" } else { "  #" };
            write!(f, "{edge}")?;
            for r in 0..ROOMS {
                write!(f, "{}#", glyph(self.rooms[r][slot]))?;
            }
            if slot == 0 {
                write!(f, "##")?;
            }
            writeln!(f)?;
        }
        write!(f, "  #########")
    }
}

/// The graph of legal rearrangements.
struct Rearrange;

impl Graph for Rearrange {
    type State = Burrow;
    type Error = Infallible;

    fn neighbors(
        &self,
        burrow: &Burrow,
        buf: &mut Vec<(Burrow, Cost)>,
    ) -> Result<(), Infallible> {
        burrow.moves_home(buf);
        burrow.moves_out(buf);
        Ok(())
    }
}

/// Least energy needed to bring every amphipod home.
pub fn least_energy(start: Burrow) -> Result<Cost, PuzzleError> {
    let organized = |b: &Burrow| b.is_organized();
    let mut engine = Engine::with_options(SearchOptions::default().with_track_paths(false));
    let found = engine.find_shortest_paths(&Rearrange, &[start], Goal::Predicate(&organized))?;
    log::debug!("burrow search settled {} states", found.stats().settled);
    found
        .goal()
        .map(|(_, energy)| energy)
        .ok_or(PuzzleError::NoPath("that brings every amphipod home"))
}

pub fn solve(input: &str) -> Result<Answers, PuzzleError> {
    let burrow = Burrow::parse(input)?;
    let part1 = timed("amphipod part 1", || least_energy(burrow))?;
    let unfolded = burrow.unfold()?;
    let part2 = timed("amphipod part 2", || least_energy(unfolded))?;
    Ok(Answers { part1, part2 })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
#############
#...........#
###B#C#B#D###
  #A#D#C#A#
  #########
";

    const UNFOLDED: &str = "\
#############
#...........#
###B#C#B#D###
  #D#C#B#A#
  #D#B#A#C#
  #A#D#C#A#
  #########";

    #[test]
    fn parse_and_display() {
        let b = Burrow::parse(SAMPLE).unwrap();
        assert_eq!(b.depth, 2);
        assert_eq!(b.room(0), &[2, 1]);
        assert_eq!(b.room(3), &[4, 1]);
        assert_eq!(b.to_string(), SAMPLE.trim_end());
    }

    #[test]
    fn unfold_inserts_hidden_rows() {
        let b = Burrow::parse(SAMPLE).unwrap().unfold().unwrap();
        assert_eq!(b.to_string(), UNFOLDED);
        assert_eq!(b, Burrow::parse(UNFOLDED).unwrap());
        assert!(b.unfold().is_err());
    }

    #[test]
    fn organized_burrow_costs_nothing() {
        let done = Burrow::parse("#############\n#...........#\n###A#B#C#D###\n  #A#B#C#D#\n  #########")
            .unwrap();
        assert!(done.is_organized());
        assert_eq!(least_energy(done).unwrap(), 0);
    }

    #[test]
    fn single_move_home() {
        // One A waits in the hallway next to its room.
        let b = Burrow::parse("#############\n#.A.........#\n###.#B#C#D###\n  #A#B#C#D#\n  #########")
            .unwrap();
        assert_eq!(least_energy(b).unwrap(), 2);
    }

    #[test]
    fn blocked_moves_are_not_offered() {
        // D sits in the hallway between A's square and room A.
        let b = Burrow::parse("#############\n#AD.........#\n###.#B#C#.###\n  #A#B#C#D#\n  #########")
            .unwrap();
        let mut buf = Vec::new();
        b.moves_home(&mut buf);
        assert_eq!(buf.len(), 1);
        assert_eq!(buf[0].1, 8 * 1000);
        assert_eq!(least_energy(b).unwrap(), 8000 + 3);
    }

    #[test]
    fn sample_part1() {
        let b = Burrow::parse(SAMPLE).unwrap();
        assert_eq!(least_energy(b).unwrap(), 12521);
    }

    #[test]
    fn sample_part2() {
        let b = Burrow::parse(SAMPLE).unwrap().unfold().unwrap();
        assert_eq!(least_energy(b).unwrap(), 44169);
    }

    #[test]
    fn malformed_diagrams() {
        assert!(Burrow::parse("").is_err());
        assert!(Burrow::parse("#############\n#....\n").is_err());
        assert!(Burrow::parse("#############\n#...........#\n###B#C#B###\n").is_err());
        assert!(Burrow::parse("#############\n#...........#\n###B#X#B#D###\n").is_err());
    }
}
