use rand::Rng;

use ribbon_trail::{CreationError, RibbonTrail, Vertex};

fn pair(tag: f32) -> (Vertex, Vertex) {
    (
        Vertex { position: [tag, 0.0, 1.0] },
        Vertex { position: [tag, 1.0, 1.0] },
    )
}

#[test]
fn zero_segments_is_rejected() {
    assert_eq!(
        RibbonTrail::new(0).unwrap_err(),
        CreationError::InvalidSegmentCount
    );
}

#[test]
fn capacity_follows_segment_count() {
    for segments in 1..=32 {
        let trail = RibbonTrail::new(segments).unwrap();
        assert_eq!(trail.max_vertex_count(), 4 + 2 * (segments - 1));
        assert_eq!(trail.segments(), segments);
    }
}

#[test]
fn starts_empty_and_clean() {
    let trail = RibbonTrail::new(4).unwrap();
    assert_eq!(trail.vertex_count(), 0);
    assert_eq!(trail.index_count(), 0);
    assert!(!trail.needs_upload());
}

#[test]
fn filling_reaches_capacity_exactly() {
    for segments in 1..=8 {
        let mut trail = RibbonTrail::new(segments).unwrap();
        for i in 0..segments {
            let (first, second) = pair(i as f32);
            trail.add_vertex_pair(first, second);
        }
        // one pair per segment leaves the trail one pair short of capacity
        let (first, second) = pair(segments as f32);
        trail.add_vertex_pair(first, second);

        assert_eq!(trail.vertex_count(), trail.max_vertex_count());
        assert_eq!(trail.index_count(), trail.max_vertex_count());
    }
}

#[test]
fn overfilling_evicts_the_oldest_pair() {
    let mut trail = RibbonTrail::new(3).unwrap();
    for i in 0..4 {
        let (first, second) = pair(i as f32);
        trail.add_vertex_pair(first, second);
    }
    assert_eq!(trail.vertex_count(), 8);
    let oldest: Vec<Vertex> = trail.vertices().take(2).copied().collect();

    let (first, second) = pair(99.0);
    trail.add_vertex_pair(first, second);

    assert_eq!(trail.vertex_count(), 8);
    assert!(trail.vertices().all(|v| !oldest.contains(v)));
    let newest: Vec<Vertex> = trail.vertices().skip(6).copied().collect();
    assert_eq!(newest, [first, second]);
}

#[test]
fn tri_strip_progression() {
    // the three-segment walkthrough: 8 vertex slots, indices 0,1,3,2,4,5,7,6
    let mut trail = RibbonTrail::new(3).unwrap();

    let (a, b) = pair(0.0);
    trail.add_vertex_pair(a, b);
    assert_eq!(trail.indices(), [0, 1]);

    let (c, d) = pair(1.0);
    trail.add_vertex_pair(c, d);
    assert_eq!(trail.indices(), [0, 1, 3, 2]);

    let (e, f) = pair(2.0);
    trail.add_vertex_pair(e, f);
    assert_eq!(trail.indices(), [0, 1, 3, 2, 4, 5]);

    let (g, h) = pair(3.0);
    trail.add_vertex_pair(g, h);
    assert_eq!(trail.indices(), [0, 1, 3, 2, 4, 5, 7, 6]);

    // a fifth pair slides the window but the index sequence is complete
    let (i, j) = pair(4.0);
    trail.add_vertex_pair(i, j);
    assert_eq!(trail.indices(), [0, 1, 3, 2, 4, 5, 7, 6]);
    assert_eq!(
        trail.vertices().copied().collect::<Vec<_>>(),
        [c, d, e, f, g, h, i, j]
    );
}

#[test]
fn indices_never_outrun_the_vertices() {
    let mut rng = rand::thread_rng();
    let mut trail = RibbonTrail::new(8).unwrap();
    for _ in 0..40 {
        trail.add_vertex_pair(
            Vertex { position: rng.gen() },
            Vertex { position: rng.gen() },
        );
        let count = trail.vertex_count() as u32;
        assert!(trail.indices().iter().all(|&index| index < count));
        assert_eq!(trail.vertex_count() % 2, 0);
        assert!(trail.vertex_count() <= trail.max_vertex_count());
    }
}

#[test]
fn reset_empties_everything() {
    let mut trail = RibbonTrail::new(3).unwrap();
    for i in 0..5 {
        let (first, second) = pair(i as f32);
        trail.add_vertex_pair(first, second);
    }
    trail.mark_uploaded();

    trail.reset();
    assert_eq!(trail.vertex_count(), 0);
    assert_eq!(trail.index_count(), 0);
    assert!(trail.needs_upload());

    // the trail refills from scratch after a reset
    let (first, second) = pair(0.0);
    trail.add_vertex_pair(first, second);
    assert_eq!(trail.indices(), [0, 1]);
}

#[test]
fn dirty_flag_lifecycle() {
    let mut trail = RibbonTrail::new(2).unwrap();
    let (first, second) = pair(0.0);

    trail.add_vertex_pair(first, second);
    assert!(trail.needs_upload());
    // reading the flag does not consume it
    assert!(trail.needs_upload());

    trail.mark_uploaded();
    assert!(!trail.needs_upload());
    assert!(!trail.needs_upload());

    trail.invalidate();
    assert!(trail.needs_upload());
    assert_eq!(trail.vertex_count(), 2);
    assert_eq!(trail.index_count(), 2);

    trail.mark_uploaded();
    trail.add_vertex_pair(first, second);
    assert!(trail.needs_upload());
}

#[test]
fn vertex_data_is_flattened_in_trail_order() {
    let mut trail = RibbonTrail::new(2).unwrap();
    trail.add_vertex_pair(
        Vertex { position: [1.0, 2.0, 3.0] },
        Vertex { position: [4.0, 5.0, 6.0] },
    );
    trail.add_vertex_pair(
        Vertex { position: [7.0, 8.0, 9.0] },
        Vertex::from([10.0, 11.0, 12.0]),
    );

    let data = trail.vertex_data();
    assert_eq!(
        data,
        [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0]
    );
    assert_eq!(data.len(), trail.vertex_count() * 3);
}
