/*!
The ribbon trail itself: a bounded sliding window of vertex pairs and the
tri-strip index sequence that renders them.

Vertices are added and evicted strictly in pairs. Each pair, together with
the pair before it, forms one quadrilateral segment; once the configured
number of segments exists, adding a pair silently drops the oldest one, so
the trail slides forward through space while its size stays bounded.

The index sequence grows alongside the vertices and stops growing once it
covers the full window. Indices refer to positions in the window, not to
individual vertices, so eviction never invalidates them: after the window is
full, sliding it forward changes only the vertex data, and the same index
sequence keeps describing the strip.
*/
use std::collections::VecDeque;
use std::error::Error;
use std::fmt;

use smallvec::SmallVec;

mod strip;

/// A single trail vertex: a position in the caller's local space. The trail
/// stores positions untransformed.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Vertex {
    /// The x, y and z coordinates of the vertex.
    pub position: [f32; 3],
}

impl From<[f32; 3]> for Vertex {
    #[inline]
    fn from(position: [f32; 3]) -> Vertex {
        Vertex { position }
    }
}

/// Error that can happen while creating a ribbon trail.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CreationError {
    /// The segment count was zero. A trail with no segments has no valid
    /// geometry, and the vertex capacity formula is undefined for it.
    InvalidSegmentCount,
}

impl fmt::Display for CreationError {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            CreationError::InvalidSegmentCount => {
                write!(fmt, "the number of ribbon segments must be at least 1")
            }
        }
    }
}

impl Error for CreationError {}

/// A sequence of vertex pairs forming an arbitrarily oriented ribbon, plus
/// the element indices that draw it as a triangle strip.
///
/// The trail holds at most enough vertices for the segment count given at
/// construction. New pairs arrive at the head, the oldest pair falls off
/// the tail, creating the illusion of e.g. a rocket trail fading in the
/// wind.
///
/// Every mutation raises a dirty flag; the render loop checks it with
/// [`needs_upload`](RibbonTrail::needs_upload), regenerates its GPU-side
/// buffers from [`vertex_data`](RibbonTrail::vertex_data) and
/// [`indices`](RibbonTrail::indices), and acknowledges with
/// [`mark_uploaded`](RibbonTrail::mark_uploaded).
///
/// All operations are in-memory and constant-time. The trail is not
/// internally synchronized; if ticks and frames run on different threads,
/// keep the trail on one of them and pass vertex pairs over a channel (see
/// [`AnimationTimer`](crate::animation::AnimationTimer)).
#[derive(Debug, Clone)]
pub struct RibbonTrail {
    /// The vertices comprising the current ribbon structure, oldest first.
    vertices: VecDeque<Vertex>,
    /// Element indices into the vertex window, in strip traversal order.
    indices: SmallVec<[u32; 16]>,
    /// The number of quadrilateral segments to build up to and then hold.
    segments: usize,
    /// True whenever the data above has changed since the renderer last
    /// regenerated its buffers.
    invalid_buffers: bool,
}

impl RibbonTrail {
    /// Builds an empty trail that will grow to `segments` quadrilateral
    /// segments and then maintain that number.
    ///
    /// The index sequence starts empty and is built up as vertex pairs
    /// arrive, so it never refers to a vertex slot that holds no data yet.
    pub fn new(segments: usize) -> Result<RibbonTrail, CreationError> {
        if segments == 0 {
            return Err(CreationError::InvalidSegmentCount);
        }

        Ok(RibbonTrail {
            vertices: VecDeque::with_capacity(strip::max_vertex_count(segments)),
            indices: SmallVec::new(),
            segments,
            invalid_buffers: false,
        })
    }

    /// Appends a vertex pair at the head of the trail, dropping the oldest
    /// pair first if the trail is already at capacity.
    ///
    /// While the window is still filling, two indices covering the new pair
    /// are appended as well; once the index sequence covers the full window
    /// it stops growing.
    pub fn add_vertex_pair(&mut self, first: Vertex, second: Vertex) {
        let cap = self.max_vertex_count();
        if self.vertices.len() >= cap {
            self.vertices.pop_front();
            self.vertices.pop_front();
        }
        self.vertices.push_back(first);
        self.vertices.push_back(second);

        if self.indices.len() < cap {
            let (a, b) = strip::next_pair_indices(self.vertices.len());
            self.indices.push(a);
            self.indices.push(b);
        }

        self.invalid_buffers = true;
    }

    /// The number of vertices currently in the trail. Always even.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// The current length of the element index sequence.
    #[inline]
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// The number of vertices the trail needs to render the configured
    /// segment count, and therefore its vertex capacity.
    #[inline]
    pub fn max_vertex_count(&self) -> usize {
        strip::max_vertex_count(self.segments)
    }

    /// The segment count this trail was created with.
    #[inline]
    pub fn segments(&self) -> usize {
        self.segments
    }

    /// The vertices currently in the trail, oldest first.
    #[inline]
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.iter()
    }

    /// Flattens the current vertices into tightly packed `x, y, z` floats,
    /// oldest vertex first, ready to hand to a vertex buffer upload.
    pub fn vertex_data(&self) -> Vec<f32> {
        let mut data = Vec::with_capacity(self.vertices.len() * 3);
        for vertex in &self.vertices {
            data.extend_from_slice(&vertex.position);
        }
        data
    }

    /// The element indices to draw the trail in triangle-strip mode.
    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Empties the trail and its index sequence, returning it to the state
    /// it had just after construction. The dirty flag is raised so the
    /// renderer drops the stale geometry it still holds.
    pub fn reset(&mut self) {
        self.vertices.clear();
        self.indices.clear();
        self.invalid_buffers = true;
    }

    /// Raises the dirty flag without touching the trail contents, for
    /// callers that invalidated the GPU-side state some other way.
    #[inline]
    pub fn invalidate(&mut self) {
        self.invalid_buffers = true;
    }

    /// True if the renderer's buffers no longer match the trail and need to
    /// be regenerated. Reading the flag does not clear it.
    #[inline]
    pub fn needs_upload(&self) -> bool {
        self.invalid_buffers
    }

    /// Acknowledges that the renderer has regenerated its buffers from the
    /// current trail contents. Only the renderer should call this, and only
    /// after an actual re-upload.
    #[inline]
    pub fn mark_uploaded(&mut self) {
        self.invalid_buffers = false;
    }
}
