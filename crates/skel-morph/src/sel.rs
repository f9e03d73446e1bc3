//! Structuring Element (SEL) for morphological operations
//!
//! A structuring element defines the neighborhood pattern probed by the
//! hit-or-miss transform. The origin (cx, cy) is the reference point
//! aligned with the output pixel.

use crate::{MorphError, MorphResult};

/// Element type in a structuring element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
#[derive(Default)]
pub enum SelElement {
    /// Don't care - this position is ignored
    #[default]
    DontCare = 0,
    /// Hit - must match foreground (set pixels)
    Hit = 1,
    /// Miss - must match background (unset pixels)
    Miss = 2,
}

/// Structuring Element (SEL)
#[derive(Debug, Clone)]
pub struct Sel {
    width: u32,
    height: u32,
    cx: u32,
    cy: u32,
    data: Vec<SelElement>,
    name: Option<String>,
}

impl Sel {
    /// Create a new structuring element of all don't-care cells, with the
    /// origin at the center.
    pub fn new(width: u32, height: u32) -> MorphResult<Self> {
        if width == 0 || height == 0 {
            return Err(MorphError::InvalidSel(format!(
                "empty structuring element: {width}x{height}"
            )));
        }
        Ok(Sel {
            width,
            height,
            cx: width / 2,
            cy: height / 2,
            data: vec![SelElement::DontCare; (width as usize) * (height as usize)],
            name: None,
        })
    }

    /// Create a structuring element from a string pattern.
    ///
    /// Each line of the pattern is a row: 'x' for hit, 'o' for miss, any
    /// other character for don't care. Rows may have different lengths;
    /// short rows are padded with don't-care cells.
    ///
    /// # Arguments
    /// * `pattern` - The pattern string
    /// * `origin_x` - X coordinate of origin
    /// * `origin_y` - Y coordinate of origin
    pub fn from_string(pattern: &str, origin_x: u32, origin_y: u32) -> MorphResult<Self> {
        let lines: Vec<&str> = pattern.lines().collect();
        let height = lines.len() as u32;
        let width = lines.iter().map(|l| l.len()).max().unwrap_or(0) as u32;

        let mut sel = Sel::new(width, height)?;
        sel.set_origin(origin_x, origin_y)?;

        for (y, line) in lines.iter().enumerate() {
            for (x, ch) in line.chars().enumerate() {
                let elem = match ch {
                    'x' | 'X' => SelElement::Hit,
                    'o' | 'O' => SelElement::Miss,
                    _ => SelElement::DontCare,
                };
                sel.set_element(x as u32, y as u32, elem);
            }
        }
        Ok(sel)
    }

    /// Get the width
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the height
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the origin x coordinate
    #[inline]
    pub fn origin_x(&self) -> u32 {
        self.cx
    }

    /// Get the origin y coordinate
    #[inline]
    pub fn origin_y(&self) -> u32 {
        self.cy
    }

    /// Set the origin
    pub fn set_origin(&mut self, cx: u32, cy: u32) -> MorphResult<()> {
        if cx >= self.width || cy >= self.height {
            return Err(MorphError::InvalidSel(format!(
                "origin ({cx}, {cy}) outside {}x{} element",
                self.width, self.height
            )));
        }
        self.cx = cx;
        self.cy = cy;
        Ok(())
    }

    /// Get the name
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Set the name
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    /// Get an element at (x, y)
    #[inline]
    pub fn get_element(&self, x: u32, y: u32) -> Option<SelElement> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[(y * self.width + x) as usize])
    }

    /// Set an element at (x, y)
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the element.
    #[inline]
    pub fn set_element(&mut self, x: u32, y: u32, elem: SelElement) {
        assert!(x < self.width && y < self.height);
        self.data[(y * self.width + x) as usize] = elem;
    }

    /// Count the number of hit elements
    pub fn hit_count(&self) -> usize {
        self.data.iter().filter(|&&e| e == SelElement::Hit).count()
    }

    /// Count the number of miss elements
    pub fn miss_count(&self) -> usize {
        self.data.iter().filter(|&&e| e == SelElement::Miss).count()
    }

    /// Iterate over hit positions relative to origin
    pub fn hit_offsets(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.offsets(SelElement::Hit)
    }

    /// Iterate over miss positions relative to origin
    pub fn miss_offsets(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.offsets(SelElement::Miss)
    }

    fn offsets(&self, wanted: SelElement) -> impl Iterator<Item = (i32, i32)> + '_ {
        let cx = self.cx as i32;
        let cy = self.cy as i32;
        let width = self.width;

        self.data
            .iter()
            .enumerate()
            .filter_map(move |(idx, &elem)| {
                if elem == wanted {
                    let x = (idx as u32 % width) as i32;
                    let y = (idx as u32 / width) as i32;
                    Some((x - cx, y - cy))
                } else {
                    None
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_string() {
        let sel = Sel::from_string("x.o\nox.\n..x", 1, 1).unwrap();
        assert_eq!(sel.width(), 3);
        assert_eq!(sel.height(), 3);
        assert_eq!(sel.get_element(0, 0), Some(SelElement::Hit));
        assert_eq!(sel.get_element(1, 0), Some(SelElement::DontCare));
        assert_eq!(sel.get_element(2, 0), Some(SelElement::Miss));
        assert_eq!(sel.get_element(0, 1), Some(SelElement::Miss));
        assert_eq!(sel.hit_count(), 3);
        assert_eq!(sel.miss_count(), 2);
        assert_eq!(sel.get_element(3, 0), None);
    }

    #[test]
    fn test_offsets_relative_to_origin() {
        let sel = Sel::from_string("x..\n.x.\n..o", 1, 1).unwrap();
        let hits: Vec<_> = sel.hit_offsets().collect();
        assert_eq!(hits, vec![(-1, -1), (0, 0)]);
        let misses: Vec<_> = sel.miss_offsets().collect();
        assert_eq!(misses, vec![(1, 1)]);
    }

    #[test]
    fn test_invalid_sel() {
        assert!(Sel::new(0, 3).is_err());
        assert!(Sel::from_string("", 0, 0).is_err());
        let mut sel = Sel::new(3, 3).unwrap();
        assert!(sel.set_origin(3, 0).is_err());
    }
}
