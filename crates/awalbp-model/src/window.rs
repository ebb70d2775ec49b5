// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use num_traits::PrimInt;

/// A closed interval `[left, right]` bounding the positions a workstation can
/// reach on the workpiece.
///
/// Instance files store both endpoints inclusively, one per workstation, in
/// the `accessibility_window_L` and `accessibility_window_R` lines. The type
/// performs no ordering validation: the file format does not constrain the
/// endpoints relative to each other, so an inverted window is representable
/// and simply contains no points.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccessibilityWindow<T>
where
    T: PrimInt,
{
    left: T,
    right: T,
}

impl<T> AccessibilityWindow<T>
where
    T: PrimInt,
{
    /// Creates a new `AccessibilityWindow` from its inclusive endpoints.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use awalbp_model::window::AccessibilityWindow;
    ///
    /// let w = AccessibilityWindow::new(0i64, 5);
    /// assert_eq!(w.left(), 0);
    /// assert_eq!(w.right(), 5);
    /// ```
    #[inline]
    pub const fn new(left: T, right: T) -> Self {
        Self { left, right }
    }

    /// Returns the inclusive left endpoint.
    #[inline]
    pub const fn left(&self) -> T {
        self.left
    }

    /// Returns the inclusive right endpoint.
    #[inline]
    pub const fn right(&self) -> T {
        self.right
    }

    /// Checks whether the window contains the given position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use awalbp_model::window::AccessibilityWindow;
    ///
    /// let w = AccessibilityWindow::new(2i64, 7);
    /// assert!(w.contains_point(2));
    /// assert!(w.contains_point(7));
    /// assert!(!w.contains_point(8));
    /// ```
    #[inline]
    pub fn contains_point(&self, position: T) -> bool {
        self.left <= position && position <= self.right
    }

    /// Checks whether the window contains no points (`left > right`).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.left > self.right
    }

    /// Returns the number of positions covered by the window, or zero for an
    /// inverted window.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use awalbp_model::window::AccessibilityWindow;
    ///
    /// assert_eq!(AccessibilityWindow::new(2i64, 7).len(), 6);
    /// assert_eq!(AccessibilityWindow::new(7i64, 2).len(), 0);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        if self.is_empty() {
            return 0;
        }
        (self.right - self.left + T::one()).to_usize().unwrap_or(0)
    }
}

impl<T> std::fmt::Debug for AccessibilityWindow<T>
where
    T: PrimInt + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "AccessibilityWindow([{:?}, {:?}])",
            self.left, self.right
        )
    }
}

impl<T> std::fmt::Display for AccessibilityWindow<T>
where
    T: PrimInt + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.left, self.right)
    }
}
