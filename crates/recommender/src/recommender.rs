//! # Recently-watched Recommender
//!
//! Recommends one video based on what was watched recently:
//! 1. Record every watched video in a bounded history
//! 2. Pick a random entry of that history
//! 3. Return the catalog video it names as "most similar"
//!
//! If the picked entry has no similar video, or its similar video is gone
//! from the catalog, the rest of the history is tried, wrapping around from
//! the random start, so each entry is visited exactly once.

use std::marker::PhantomData;
use std::sync::Arc;

use tracing::{debug, instrument};

use catalog::{Video, VideoCatalog};

use crate::error::{RecommenderError, Result};
use crate::most_recently_used::MostRecentlyUsed;
use crate::random::RngSource;
use crate::traits::{RandomSource, ReadOnlyDao, RecencyTracker, SimilarItem};

/// Recommender over the video catalog with the default collaborators
pub type VideoRecommender<R = RngSource> =
    Recommender<Video, VideoCatalog, MostRecentlyUsed<Video>, R>;

/// Picks a recommendation from the most similar items of recent watches.
///
/// Generic over its collaborators:
/// - `V`: the item type
/// - `D`: catalog lookup, shared read-only
/// - `M`: recency tracker holding watched items
/// - `R`: random index source
pub struct Recommender<V, D, M, R> {
    most_recently_viewed: M,
    dao: Arc<D>,
    random: R,
    _item: PhantomData<fn() -> V>,
}

impl<V, D, M, R> Recommender<V, D, M, R>
where
    V: SimilarItem + Clone,
    D: ReadOnlyDao<V::Id, V>,
    M: RecencyTracker<V>,
    R: RandomSource,
{
    pub fn new(most_recently_viewed: M, dao: Arc<D>, random: R) -> Self {
        Self {
            most_recently_viewed,
            dao,
            random,
            _item: PhantomData,
        }
    }

    /// Record that the item `id` was watched.
    ///
    /// # Errors
    /// `RecommenderError::InvalidArgument` if the catalog has no item `id`.
    /// The history is left untouched in that case.
    #[instrument(skip(self))]
    pub fn watch(&mut self, id: V::Id) -> Result<()> {
        let item = self
            .dao
            .get(&id)
            .ok_or_else(|| RecommenderError::InvalidArgument { id: id.to_string() })?;

        self.most_recently_viewed.add(item.clone());
        debug!(
            history_size = self.most_recently_viewed.size(),
            "Recorded watch"
        );
        Ok(())
    }

    /// Recommend the most similar item of a randomly chosen recent watch.
    ///
    /// ## Algorithm
    /// 1. Empty history: `None`, the random source is not consulted
    /// 2. Draw a start index in `[0, size)`
    /// 3. Visit every history entry once, in [`scan_order`]
    /// 4. Return the first similar item that resolves in the catalog
    /// 5. Nothing resolved: `None`
    #[instrument(skip(self))]
    pub fn get_recommendation(&mut self) -> Option<&V> {
        let size = self.most_recently_viewed.size();
        if size == 0 {
            debug!("No watch history, nothing to recommend");
            return None;
        }

        let start = self.random.next_index(size);
        debug!(start, size, "Scanning watch history");

        for index in scan_order(start, size) {
            let Some(watched) = self.most_recently_viewed.get(index) else {
                continue;
            };
            let Some(similar_id) = watched.most_similar_id() else {
                continue;
            };

            match self.dao.get(&similar_id) {
                Some(similar) => {
                    debug!(
                        watched = %watched.id(),
                        recommended = %similar_id,
                        "Found recommendation"
                    );
                    return Some(similar);
                }
                None => debug!(
                    watched = %watched.id(),
                    missing = %similar_id,
                    "Most similar item not in catalog"
                ),
            }
        }

        debug!(size, "No entry in the history has a resolvable similar item");
        None
    }

    /// The watch history
    pub fn history(&self) -> &M {
        &self.most_recently_viewed
    }

    /// The catalog used to resolve ids
    pub fn catalog(&self) -> &Arc<D> {
        &self.dao
    }
}

/// Indices of a history of `size` entries, starting at `start` and wrapping
/// forward. Yields each index in `[0, size)` exactly once.
///
/// A `start` outside the range is reduced modulo `size`.
pub fn scan_order(start: usize, size: usize) -> impl Iterator<Item = usize> {
    let start = if size == 0 { 0 } else { start % size };
    (0..size).map(move |offset| (start + offset) % size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::VideoId;
    use std::cell::RefCell;
    use std::collections::HashSet;

    /// Always returns the same index
    struct FixedIndex(usize);

    impl RandomSource for FixedIndex {
        fn next_index(&mut self, _bound: usize) -> usize {
            self.0
        }
    }

    /// Fails the test if consulted
    struct NeverCalled;

    impl RandomSource for NeverCalled {
        fn next_index(&mut self, bound: usize) -> usize {
            panic!("random source consulted with bound {bound}");
        }
    }

    /// Tracker that records every index read through `get`
    struct RecordingTracker {
        inner: MostRecentlyUsed<Video>,
        reads: RefCell<Vec<usize>>,
    }

    impl RecordingTracker {
        fn new(capacity: usize) -> Self {
            Self {
                inner: MostRecentlyUsed::new(capacity).unwrap(),
                reads: RefCell::new(Vec::new()),
            }
        }
    }

    impl RecencyTracker<Video> for RecordingTracker {
        fn add(&mut self, item: Video) {
            self.inner.add(item);
        }

        fn get(&self, index: usize) -> Option<&Video> {
            self.reads.borrow_mut().push(index);
            self.inner.get(index)
        }

        fn size(&self) -> usize {
            self.inner.size()
        }
    }

    fn catalog(videos: Vec<Video>) -> Arc<VideoCatalog> {
        Arc::new(videos.into_iter().collect())
    }

    fn recommender<R: RandomSource>(
        videos: Vec<Video>,
        capacity: usize,
        random: R,
    ) -> Recommender<Video, VideoCatalog, MostRecentlyUsed<Video>, R> {
        Recommender::new(
            MostRecentlyUsed::new(capacity).unwrap(),
            catalog(videos),
            random,
        )
    }

    #[test]
    fn test_watch_unknown_id() {
        let mut rec = recommender(vec![Video::new(1, "A")], 3, FixedIndex(0));

        let err = rec.watch(99).unwrap_err();

        assert_eq!(err, RecommenderError::InvalidArgument { id: "99".to_string() });
        assert_eq!(rec.history().size(), 0);
    }

    #[test]
    fn test_watch_unknown_id_keeps_history() {
        let mut rec = recommender(vec![Video::new(1, "A")], 3, FixedIndex(0));
        rec.watch(1).unwrap();

        assert!(rec.watch(2).is_err());
        assert_eq!(rec.history().size(), 1);
        assert_eq!(rec.history().get(0).map(|v| v.id), Some(1));
    }

    #[test]
    fn test_watch_grows_history_up_to_capacity() {
        let videos = (1..=4).map(|id| Video::new(id, format!("Video {id}"))).collect();
        let mut rec = recommender(videos, 3, FixedIndex(0));

        for (expected, id) in [1, 2, 3, 3].into_iter().zip(1..=4) {
            rec.watch(id).unwrap();
            assert_eq!(rec.history().size(), expected);
        }

        let ids: Vec<VideoId> = rec.history().iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![2, 3, 4]);
    }

    #[test]
    fn test_empty_history_returns_none() {
        let mut rec = recommender(vec![Video::new(1, "A").with_most_similar(1)], 3, NeverCalled);
        assert!(rec.get_recommendation().is_none());
    }

    #[test]
    fn test_random_pick_has_similar() {
        let videos = vec![
            Video::new(1, "A").with_most_similar(3),
            Video::new(2, "B").with_most_similar(4),
            Video::new(3, "C"),
            Video::new(4, "D"),
        ];
        let mut rec = recommender(videos, 5, FixedIndex(1));
        rec.watch(1).unwrap();
        rec.watch(2).unwrap();

        assert_eq!(rec.get_recommendation().map(|v| v.id), Some(4));
    }

    #[test]
    fn test_falls_back_to_other_entries() {
        let videos = vec![
            Video::new(1, "A").with_most_similar(2),
            Video::new(2, "B"),
        ];
        let mut rec = recommender(videos, 5, FixedIndex(1));
        rec.watch(1).unwrap();
        rec.watch(2).unwrap();

        // Index 1 holds video 2, which has no similar video
        assert_eq!(rec.get_recommendation().map(|v| v.id), Some(2));
    }

    #[test]
    fn test_skips_dangling_reference() {
        let videos = vec![
            Video::new(1, "A").with_most_similar(404),
            Video::new(2, "B").with_most_similar(3),
            Video::new(3, "C"),
        ];
        let mut rec = recommender(videos, 5, FixedIndex(0));
        rec.watch(1).unwrap();
        rec.watch(2).unwrap();

        assert_eq!(rec.get_recommendation().map(|v| v.id), Some(3));
    }

    #[test]
    fn test_wraps_around_from_start() {
        let videos = vec![
            Video::new(1, "A").with_most_similar(10),
            Video::new(2, "B"),
            Video::new(3, "C").with_most_similar(30),
            Video::new(10, "J"),
            Video::new(30, "K"),
        ];
        let mut rec = recommender(videos, 5, FixedIndex(1));
        rec.watch(1).unwrap();
        rec.watch(2).unwrap();
        rec.watch(3).unwrap();

        // Start at index 1 (no similar), then index 2 resolves before wrapping
        assert_eq!(rec.get_recommendation().map(|v| v.id), Some(30));
    }

    #[test]
    fn test_no_resolvable_entries_visits_each_once() {
        let videos = vec![
            Video::new(1, "A"),
            Video::new(2, "B").with_most_similar(404),
            Video::new(3, "C"),
            Video::new(4, "D").with_most_similar(505),
        ];
        let mut rec: Recommender<Video, _, _, _> =
            Recommender::new(RecordingTracker::new(4), catalog(videos), FixedIndex(2));
        for id in 1..=4 {
            rec.watch(id).unwrap();
        }

        assert!(rec.get_recommendation().is_none());

        let reads = rec.history().reads.borrow().clone();
        assert_eq!(reads, vec![2, 3, 0, 1]);
    }

    #[test]
    fn test_stops_at_first_success() {
        let videos = vec![
            Video::new(1, "A").with_most_similar(2),
            Video::new(2, "B").with_most_similar(1),
        ];
        let mut rec: Recommender<Video, _, _, _> =
            Recommender::new(RecordingTracker::new(4), catalog(videos), FixedIndex(0));
        rec.watch(1).unwrap();
        rec.watch(2).unwrap();

        assert_eq!(rec.get_recommendation().map(|v| v.id), Some(2));
        assert_eq!(*rec.history().reads.borrow(), vec![0]);
    }

    #[test]
    fn test_recommendation_is_resolution_of_history_entry() {
        let videos = vec![
            Video::new(1, "A").with_most_similar(5),
            Video::new(2, "B").with_most_similar(6),
            Video::new(3, "C"),
            Video::new(5, "E"),
            Video::new(6, "F"),
        ];
        for start in 0..3 {
            let mut rec = recommender(videos.clone(), 3, FixedIndex(start));
            for id in 1..=3 {
                rec.watch(id).unwrap();
            }

            let watched_similar: HashSet<VideoId> = rec
                .history()
                .iter()
                .filter_map(|v| v.most_similar_id)
                .collect();
            let recommended = rec.get_recommendation().unwrap().id;
            assert!(watched_similar.contains(&recommended));
        }
    }

    #[test]
    fn test_scan_order_covers_all_once() {
        for size in 1..8 {
            for start in 0..size {
                let order: Vec<usize> = scan_order(start, size).collect();
                assert_eq!(order.len(), size);
                assert_eq!(order[0], start);

                let unique: HashSet<usize> = order.iter().copied().collect();
                assert_eq!(unique.len(), size);
                assert!(order.iter().all(|&i| i < size));
            }
        }
    }

    #[test]
    fn test_scan_order_edge_cases() {
        assert_eq!(scan_order(0, 0).count(), 0);
        assert_eq!(scan_order(7, 3).collect::<Vec<_>>(), vec![1, 2, 0]);
        assert_eq!(scan_order(usize::MAX, 2).collect::<Vec<_>>(), vec![1, 0]);
    }
}
