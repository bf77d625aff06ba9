// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Palettes map an escape outcome to a color.  A palette is an ordered
//! table of colors indexed by iteration count, plus a distinguished
//! color for set members.  The table can be a fixed, curated one or be
//! generated at random; the renderer only cares that it is long enough
//! to cover every iteration count it can produce.

use crate::errors::{MandelError, Result};
use crate::escape::Escape;
use rand::Rng;

/// An opaque color.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Points classified as members of the set are painted black.
pub const MEMBER_COLOR: Rgb = Rgb(0, 0, 0);

// Rainbow order, one entry per iteration up to 80.
const RAINBOW: [Rgb; 80] = [
    Rgb(139, 0, 0),
    Rgb(166, 29, 0),
    Rgb(192, 57, 43),
    Rgb(217, 84, 45),
    Rgb(242, 121, 41),
    Rgb(245, 160, 0),
    Rgb(255, 185, 15),
    Rgb(255, 209, 26),
    Rgb(255, 223, 34),
    Rgb(255, 240, 0),
    Rgb(230, 230, 0),
    Rgb(200, 200, 0),
    Rgb(173, 255, 47),
    Rgb(154, 205, 50),
    Rgb(124, 252, 0),
    Rgb(50, 205, 50),
    Rgb(34, 139, 34),
    Rgb(0, 128, 0),
    Rgb(0, 100, 0),
    Rgb(0, 255, 255),
    Rgb(0, 206, 209),
    Rgb(64, 224, 208),
    Rgb(0, 255, 127),
    Rgb(0, 250, 154),
    Rgb(46, 139, 87),
    Rgb(0, 128, 128),
    Rgb(0, 255, 0),
    Rgb(34, 139, 34),
    Rgb(60, 179, 113),
    Rgb(152, 251, 152),
    Rgb(144, 238, 144),
    Rgb(152, 255, 152),
    Rgb(0, 255, 0),
    Rgb(127, 255, 0),
    Rgb(124, 252, 0),
    Rgb(50, 205, 50),
    Rgb(173, 255, 47),
    Rgb(154, 205, 50),
    Rgb(173, 216, 230),
    Rgb(0, 191, 255),
    Rgb(135, 206, 235),
    Rgb(30, 144, 255),
    Rgb(0, 0, 255),
    Rgb(65, 105, 225),
    Rgb(0, 0, 139),
    Rgb(0, 0, 128),
    Rgb(25, 25, 112),
    Rgb(0, 0, 205),
    Rgb(0, 0, 255),
    Rgb(30, 144, 255),
    Rgb(65, 105, 225),
    Rgb(0, 0, 139),
    Rgb(128, 0, 128),
    Rgb(75, 0, 130),
    Rgb(139, 0, 139),
    Rgb(148, 0, 211),
    Rgb(186, 85, 211),
    Rgb(139, 0, 139),
    Rgb(238, 130, 238),
    Rgb(255, 0, 255),
    Rgb(255, 20, 147),
    Rgb(255, 105, 180),
    Rgb(255, 182, 193),
    Rgb(255, 192, 203),
    Rgb(255, 240, 245),
    Rgb(255, 255, 255),
    Rgb(245, 245, 245),
    Rgb(220, 220, 220),
    Rgb(211, 211, 211),
    Rgb(192, 192, 192),
    Rgb(169, 169, 169),
    Rgb(128, 128, 128),
    Rgb(105, 105, 105),
    Rgb(255, 69, 0),
    Rgb(128, 0, 128),
    Rgb(75, 0, 130),
    Rgb(139, 0, 139),
    Rgb(148, 0, 211),
    Rgb(186, 85, 211),
    Rgb(139, 0, 139),
];

/// An immutable color table.  Iteration counts are 1-based: a point
/// that escaped after `n` iterations takes the color at index `n - 1`.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    colors: Vec<Rgb>,
    member: Rgb,
}

impl Palette {
    /// Builds a palette from an arbitrary table, painting members with
    /// [`MEMBER_COLOR`].
    pub fn from_colors(colors: Vec<Rgb>) -> Palette {
        Palette {
            colors,
            member: MEMBER_COLOR,
        }
    }

    /// The curated rainbow table, long enough for the default bound of
    /// 80 iterations.
    pub fn rainbow() -> Palette {
        Palette::from_colors(RAINBOW.to_vec())
    }

    /// A table of `len` colors drawn from `rng`.  Pass a seeded
    /// generator to get the same palette twice.
    pub fn random<R: Rng>(len: usize, rng: &mut R) -> Palette {
        let colors = (0..len).map(|_| Rgb(rng.gen(), rng.gen(), rng.gen())).collect();
        Palette::from_colors(colors)
    }

    /// The color used for set members.
    pub fn member_color(&self) -> Rgb {
        self.member
    }

    /// Checks that every iteration count in `1..=max_iteration` has a
    /// color.
    pub fn covers(&self, max_iteration: usize) -> Result<()> {
        if self.colors.len() < max_iteration {
            return Err(MandelError::Palette {
                len: self.colors.len(),
                required: max_iteration,
            });
        }
        Ok(())
    }

    /// Looks up the color for an escape outcome.  Members get the
    /// member color; everything else is indexed by iteration count.
    /// An iteration count the table does not cover is a programmer
    /// error and panics.
    pub fn color_for(&self, escape: Escape) -> Rgb {
        if escape.member {
            return self.member;
        }
        assert!(
            escape.iterations >= 1 && escape.iterations <= self.colors.len(),
            "iteration count {} is outside a palette of {} colors",
            escape.iterations,
            self.colors.len()
        );
        self.colors[escape.iterations - 1]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette::rainbow()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn escaped(iterations: usize) -> Escape {
        Escape {
            iterations,
            member: false,
        }
    }

    #[test]
    fn members_get_the_member_color() {
        let palette = Palette::rainbow();
        let member = Escape {
            iterations: 80,
            member: true,
        };
        assert_eq!(palette.color_for(member), MEMBER_COLOR);
        assert_eq!(palette.member_color(), MEMBER_COLOR);
    }

    #[test]
    fn iteration_counts_are_one_based() {
        let palette = Palette::from_colors(vec![Rgb(10, 0, 0), Rgb(20, 0, 0), Rgb(30, 0, 0)]);
        assert_eq!(palette.color_for(escaped(1)), Rgb(10, 0, 0));
        assert_eq!(palette.color_for(escaped(3)), Rgb(30, 0, 0));
    }

    #[test]
    #[should_panic(expected = "outside a palette")]
    fn uncovered_iteration_count_panics() {
        let palette = Palette::from_colors(vec![Rgb(10, 0, 0)]);
        palette.color_for(escaped(2));
    }

    #[test]
    fn rainbow_covers_the_default_bound() {
        let palette = Palette::rainbow();
        assert!(palette.covers(80).is_ok());
        match palette.covers(81) {
            Err(MandelError::Palette { len, required }) => {
                assert_eq!((len, required), (80, 81));
            }
            other => panic!("expected a palette error, got {:?}", other),
        }
    }

    #[test]
    fn seeded_random_palettes_repeat() {
        let first = Palette::random(80, &mut StdRng::seed_from_u64(7));
        let second = Palette::random(80, &mut StdRng::seed_from_u64(7));
        assert!(first.covers(80).is_ok());
        assert!(first.covers(81).is_err());
        assert_eq!(first, second);
        assert_eq!(first.member_color(), MEMBER_COLOR);
    }
}
