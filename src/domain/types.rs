/// Position of an item in the dataset; stable for the dataset's lifetime.
pub type ItemId = usize;

/// One ranked entry: (item id, similarity to the query item)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    pub id: ItemId,
    pub score: f32,
}
