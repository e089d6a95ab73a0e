/*!
Driver-side helpers for animating a trail.

The trail itself is passive; something has to produce a vertex pair per
tick and decide how much of the index sequence to draw each frame. The two
types here cover those jobs without resorting to the free-standing mutable
counters and detached threads that render-loop code tends to grow.

[`AnimationController`] owns the draw-element progression: how many indices
to hand to the draw call this frame, stepping each tick and wrapping around
once the whole strip has been shown.

[`AnimationTimer`] runs a tick function on its own thread at a fixed
interval and delivers whatever it produces over a channel. The frame loop
drains the channel once per frame, so it stays the only code that ever
mutates the trail.
*/
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, TryIter};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Progression of the number of elements to draw from the trail's index
/// sequence, for a reveal-then-restart animation.
///
/// Starts at `initial`, advances by `step` per tick, and wraps back to
/// `initial` once `max` has been reached.
#[derive(Debug, Clone)]
pub struct AnimationController {
    initial: usize,
    step: usize,
    max: usize,
    current: usize,
}

impl AnimationController {
    /// Builds a controller starting at `initial` elements, advancing by
    /// `step` per tick and wrapping once `max` is reached.
    pub fn new(initial: usize, step: usize, max: usize) -> AnimationController {
        AnimationController {
            initial,
            step,
            max,
            current: initial,
        }
    }

    /// Advances the progression by one tick and returns the new count.
    pub fn advance(&mut self) -> usize {
        if self.current >= self.max {
            self.current = self.initial;
        } else {
            self.current += self.step;
        }
        self.current
    }

    /// The number of elements to draw this frame.
    #[inline]
    pub fn draw_count(&self) -> usize {
        self.current
    }

    /// Moves the wrap-around point, typically to follow
    /// [`index_count`](crate::RibbonTrail::index_count) while the trail is
    /// still filling up.
    #[inline]
    pub fn set_max(&mut self, max: usize) {
        self.max = max;
    }
}

/// A cancellable periodic task producing one value per tick on a dedicated
/// thread.
///
/// The values cross to the consumer over a channel rather than through
/// shared state, so the consumer can apply them to a
/// [`RibbonTrail`](crate::RibbonTrail) from its own thread without locks:
///
/// ```
/// use std::time::Duration;
/// use ribbon_trail::{AnimationTimer, RibbonTrail, Vertex};
///
/// let mut trail = RibbonTrail::new(3).unwrap();
/// let mut height = 0.0f32;
/// let timer = AnimationTimer::start(Duration::from_millis(5), move || {
///     height += 0.1;
///     (Vertex { position: [0.0, height, 1.0] },
///      Vertex { position: [1.0, height, 1.0] })
/// });
///
/// // once per frame
/// for (first, second) in timer.pending() {
///     trail.add_vertex_pair(first, second);
/// }
///
/// timer.stop();
/// ```
pub struct AnimationTimer<T> {
    events: Receiver<T>,
    running: Arc<AtomicBool>,
    thread: Option<thread::JoinHandle<()>>,
}

impl<T: Send + 'static> AnimationTimer<T> {
    /// Spawns the timer thread. Every `interval`, `tick` runs and its
    /// result is queued for the consumer.
    pub fn start<F>(interval: Duration, mut tick: F) -> AnimationTimer<T>
    where
        F: FnMut() -> T + Send + 'static,
    {
        let running = Arc::new(AtomicBool::new(true));
        let (sender, events) = mpsc::channel();
        let flag = Arc::clone(&running);
        let thread = thread::spawn(move || {
            while flag.load(Ordering::Acquire) {
                thread::sleep(interval);
                if !flag.load(Ordering::Acquire) {
                    break;
                }
                if sender.send(tick()).is_err() {
                    break;
                }
            }
        });

        AnimationTimer {
            events,
            running,
            thread: Some(thread),
        }
    }

    /// Drains the values produced since the last call, without blocking.
    #[inline]
    pub fn pending(&self) -> TryIter<'_, T> {
        self.events.try_iter()
    }

    /// Stops the timer and waits for its thread to exit. Blocks for at
    /// most one interval. Values already queued are discarded.
    pub fn stop(mut self) {
        self.running.store(false, Ordering::Release);
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

impl<T> Drop for AnimationTimer<T> {
    fn drop(&mut self) {
        // Signal without joining; the thread also exits on its own once the
        // receiver side of the channel is gone.
        self.running.store(false, Ordering::Release);
    }
}
