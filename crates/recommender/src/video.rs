//! Wires the catalog crate's types into the recommender traits.

use crate::traits::{ReadOnlyDao, SimilarItem};
use catalog::{Video, VideoCatalog, VideoId};

impl SimilarItem for Video {
    type Id = VideoId;

    fn id(&self) -> VideoId {
        self.id
    }

    fn most_similar_id(&self) -> Option<VideoId> {
        self.most_similar_id
    }
}

impl ReadOnlyDao<VideoId, Video> for VideoCatalog {
    fn get(&self, key: &VideoId) -> Option<&Video> {
        self.get_video(*key)
    }
}
