//! Search frames and the per-query frame arena.
//!
//! A frame is one step of a partial route: the vertex reached, the hops
//! walked since the last food, the extra food still available, and a link
//! to the frame it was extended from. Routes are rebuilt by following
//! parent links, the same way BFS shortest-path reconstruction walks its
//! parent map.

use crate::error::{GraphError, GraphResult};

/// One step of a partial route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Frame {
    /// Arena slot of the vertex reached.
    pub slot: usize,
    /// Hops since the last vertex with food (or since the start).
    pub gap: usize,
    /// Extra food still available.
    pub spare: usize,
    /// Extra food was placed on this vertex.
    pub placed: bool,
    /// Index of the frame this one extends.
    pub parent: Option<usize>,
}

impl Frame {
    /// The start frame. The start counts as position 0 whatever its food.
    pub fn root(slot: usize, spare: usize) -> Self {
        Self {
            slot,
            gap: 0,
            spare,
            placed: false,
            parent: None,
        }
    }

    /// Extend this frame (stored at `index`) to the neighbor at `slot`.
    ///
    /// Returns `None` when the move is pruned: the gap would reach
    /// `max_gap` and no extra food is left to place on the neighbor.
    pub fn advance(&self, index: usize, slot: usize, has_food: bool, max_gap: usize) -> Option<Frame> {
        let gap = if has_food { 0 } else { self.gap + 1 };
        if gap < max_gap {
            return Some(Frame {
                slot,
                gap,
                spare: self.spare,
                placed: false,
                parent: Some(index),
            });
        }

        if self.spare > 0 && max_gap > 0 {
            return Some(Frame {
                slot,
                gap: 0,
                spare: self.spare - 1,
                placed: true,
                parent: Some(index),
            });
        }

        None
    }

    /// The edge into `target` may close the route from this frame.
    #[inline]
    pub fn can_close(&self, max_gap: usize) -> bool {
        self.gap < max_gap
    }
}

/// Frame storage for one query, capped at `limit` frames in total.
///
/// [`clear`](Self::clear) drops the frames of a finished sweep but not the
/// count, so a query running several sweeps shares one limit.
#[derive(Debug)]
pub(crate) struct FrameArena {
    frames: Vec<Frame>,
    limit: usize,
    spent: usize,
}

impl FrameArena {
    pub fn new(limit: usize) -> Self {
        Self {
            frames: Vec::with_capacity(limit.min(1024)),
            limit,
            spent: 0,
        }
    }

    /// Store a frame and return its index.
    ///
    /// # Errors
    /// * `GraphError::SearchLimitExceeded` - the query used up its limit
    pub fn push(&mut self, frame: Frame) -> GraphResult<usize> {
        if self.spent >= self.limit {
            return Err(GraphError::SearchLimitExceeded(self.limit));
        }
        self.spent += 1;
        self.frames.push(frame);
        Ok(self.frames.len() - 1)
    }

    pub fn clear(&mut self) {
        self.frames.clear();
    }

    /// Frames created since the arena was built, across clears.
    pub fn spent(&self) -> usize {
        self.spent
    }

    #[inline]
    pub fn get(&self, index: usize) -> Frame {
        self.frames[index]
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether `slot` already appears on the route ending at `index`.
    pub fn on_trail(&self, index: usize, slot: usize) -> bool {
        let mut cursor = Some(index);
        while let Some(i) = cursor {
            let frame = &self.frames[i];
            if frame.slot == slot {
                return true;
            }
            cursor = frame.parent;
        }
        false
    }

    /// Route ending at `index`, start first: `(slots, slots with placed food)`.
    pub fn trail(&self, index: usize) -> (Vec<usize>, Vec<usize>) {
        let mut slots = Vec::new();
        let mut placed = Vec::new();
        let mut cursor = Some(index);
        while let Some(i) = cursor {
            let frame = &self.frames[i];
            slots.push(frame.slot);
            if frame.placed {
                placed.push(frame.slot);
            }
            cursor = frame.parent;
        }
        slots.reverse();
        placed.reverse();
        (slots, placed)
    }
}
