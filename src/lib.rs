/*!
Geometry bookkeeping for ribbon trail effects.

A ribbon trail is the strip of geometry left behind by a moving object, like
a rocket exhaust or a sword swipe. It is drawn in triangle-strip primitive
mode: every four vertices form a quadrilateral segment, each new segment
shares two vertices with its predecessor, and once a configured number of
segments exists the oldest one is discarded each time a new one arrives, so
the trail appears to fade away behind the object.

This crate handles the CPU side of the effect and nothing else. It knows
nothing about windows, shaders or buffer objects; those belong to the
renderer. The renderer keeps a [`RibbonTrail`], feeds it a pair of vertices
per animation tick, and regenerates its vertex and element buffers from the
trail's flattened contents whenever the trail says they are stale.

# Feeding the trail

```
use ribbon_trail::{RibbonTrail, Vertex};

let mut trail = RibbonTrail::new(3).unwrap();

// once per animation tick, with the newly computed trail-head positions
trail.add_vertex_pair(
    Vertex { position: [0.75, -0.5, 1.0] },
    Vertex { position: [0.65,  0.5, 1.0] },
);
```

# Uploading

Once per frame, the renderer asks whether its GPU-side buffers are still
valid. If not, it re-uploads and acknowledges:

```
# use ribbon_trail::{RibbonTrail, Vertex};
# let mut trail = RibbonTrail::new(3).unwrap();
# trail.add_vertex_pair(Vertex { position: [0.0, 0.0, 1.0] },
#                       Vertex { position: [0.0, 1.0, 1.0] });
if trail.needs_upload() {
    let positions = trail.vertex_data();   // tightly packed x, y, z floats
    let indices = trail.indices();         // tri-strip element indices
    // glBufferData(...) or equivalent goes here
    assert_eq!(positions.len(), trail.vertex_count() * 3);
    assert_eq!(indices.len(), trail.index_count());
    trail.mark_uploaded();
}
assert!(!trail.needs_upload());
```

The trail never clears the flag on its own; [`RibbonTrail::mark_uploaded`]
is the renderer's acknowledgement that the GPU copies are fresh again.

# Driving the animation

The trail expects exactly one mutator. When vertex pairs are produced on a
timer rather than per-frame, [`animation::AnimationTimer`] runs the timer on
its own thread and hands the pairs over a channel, so the frame loop remains
the only code touching the trail. [`animation::AnimationController`] tracks
how many elements of the index sequence to draw each frame, replacing the
ad-hoc global counters such code tends to accumulate.
*/
#![warn(missing_docs)]

pub use crate::animation::{AnimationController, AnimationTimer};
pub use crate::trail::{CreationError, RibbonTrail, Vertex};

pub mod animation;
pub mod trail;
