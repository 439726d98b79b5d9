//! Layout primitives for placing decorated controls.
//!
//! Only what the decorators need: rectangles, sizes, insets and a single
//! horizontal stack that centers its items on the cross axis.

/// A rectangle in layout units.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    /// X position (left edge).
    pub x: f32,
    /// Y position (top edge).
    pub y: f32,
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
}

impl Rect {
    /// Creates a new rectangle.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Creates a rectangle from an origin and a size.
    #[must_use]
    pub const fn from_origin_size(origin: (f32, f32), size: Size) -> Self {
        Self::new(origin.0, origin.1, size.width, size.height)
    }

    /// Returns the size.
    #[must_use]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Returns the right edge.
    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Returns the bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Returns the center point.
    #[must_use]
    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Returns true if the point is inside the rectangle.
    #[must_use]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Returns the rectangle moved by `(dx, dy)`.
    #[must_use]
    pub fn translate(&self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// Shrinks the rectangle by the given insets.
    ///
    /// Width and height never go below zero.
    #[must_use]
    pub fn inset(&self, insets: Insets) -> Self {
        Self::new(
            self.x + insets.left,
            self.y + insets.top,
            (self.width - insets.horizontal()).max(0.0),
            (self.height - insets.vertical()).max(0.0),
        )
    }

    /// Centers a child of `size` inside this rectangle.
    #[must_use]
    pub fn center_child(&self, size: Size) -> Self {
        let (cx, cy) = self.center();
        Self::new(cx - size.width * 0.5, cy - size.height * 0.5, size.width, size.height)
    }

    /// Scales the rectangle by `factor` about the point `origin`.
    #[must_use]
    pub fn scale_about(&self, factor: f32, origin: (f32, f32)) -> Self {
        Self::new(
            origin.0 + (self.x - origin.0) * factor,
            origin.1 + (self.y - origin.1) * factor,
            self.width * factor,
            self.height * factor,
        )
    }
}

/// A width and height pair.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
}

impl Size {
    /// Creates a new size.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Grows the size by the given insets.
    #[must_use]
    pub fn outset(self, insets: Insets) -> Self {
        Self::new(self.width + insets.horizontal(), self.height + insets.vertical())
    }

    /// Raises the height to at least `min_height`.
    #[must_use]
    pub fn at_least_height(self, min_height: f32) -> Self {
        Self::new(self.width, self.height.max(min_height))
    }
}

/// Edge insets (padding).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Insets {
    /// Top inset.
    pub top: f32,
    /// Right inset.
    pub right: f32,
    /// Bottom inset.
    pub bottom: f32,
    /// Left inset.
    pub left: f32,
}

impl Insets {
    /// No insets.
    pub const ZERO: Self = Self::all(0.0);

    /// Same inset on every edge.
    #[must_use]
    pub const fn all(amount: f32) -> Self {
        Self {
            top: amount,
            right: amount,
            bottom: amount,
            left: amount,
        }
    }

    /// `vertical` on top and bottom, `horizontal` on left and right.
    #[must_use]
    pub const fn symmetric(vertical: f32, horizontal: f32) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    /// Left plus right.
    #[must_use]
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Top plus bottom.
    #[must_use]
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

/// One item in a [`Row`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Slot {
    /// Takes exactly this size.
    Fixed(Size),
    /// Takes the width left over after fixed slots and gaps, with this height.
    Flexible(f32),
}

impl Slot {
    fn height(self) -> f32 {
        match self {
            Self::Fixed(size) => size.height,
            Self::Flexible(height) => height,
        }
    }
}

/// Horizontal stack, items centered vertically.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Row {
    /// Gap between adjacent items.
    pub spacing: f32,
}

impl Row {
    /// Creates a row with the given spacing.
    #[must_use]
    pub const fn new(spacing: f32) -> Self {
        Self { spacing }
    }

    /// Natural size of a row of fixed slots (flexible slots count as zero width).
    #[must_use]
    pub fn measure(&self, slots: &[Slot]) -> Size {
        let width: f32 = slots
            .iter()
            .map(|slot| match slot {
                Slot::Fixed(size) => size.width,
                Slot::Flexible(_) => 0.0,
            })
            .sum();
        let height = slots.iter().map(|slot| slot.height()).fold(0.0, f32::max);
        Size::new(width + self.gaps(slots.len()), height)
    }

    /// Lays the slots out left to right inside `bounds`.
    ///
    /// Flexible slots share whatever width is left, never less than zero.
    #[must_use]
    pub fn arrange(&self, bounds: Rect, slots: &[Slot]) -> Vec<Rect> {
        if slots.is_empty() {
            return Vec::new();
        }

        let natural = self.measure(slots);
        let flexible = slots
            .iter()
            .filter(|slot| matches!(slot, Slot::Flexible(_)))
            .count();
        let flex_width = if flexible > 0 {
            ((bounds.width - natural.width) / flexible as f32).max(0.0)
        } else {
            0.0
        };

        let mut x = bounds.x;
        let mut rects = Vec::with_capacity(slots.len());
        for slot in slots {
            let (width, height) = match *slot {
                Slot::Fixed(size) => (size.width, size.height),
                Slot::Flexible(height) => (flex_width, height),
            };
            let y = bounds.y + (bounds.height - height) * 0.5;
            rects.push(Rect::new(x, y, width, height));
            x += width + self.spacing;
        }
        rects
    }

    fn gaps(&self, count: usize) -> f32 {
        self.spacing * count.saturating_sub(1) as f32
    }
}
