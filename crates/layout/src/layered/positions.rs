use crate::{Point, Vec2};
use std::collections::HashMap;
use std::hash::Hash;

/// Assign coordinates from the layer structure: x grows with the layer
/// index in fixed-width columns, y spreads a layer's nodes evenly across
/// the vertical span, centered on its midpoint.
pub(crate) fn assign_coordinates<N>(
    layers: &[Vec<N>],
    column_width: f32,
    vertical_span: f32,
    origin: Vec2,
) -> HashMap<N, Point>
where
    N: Copy + Ord + Hash,
{
    let mut positions = HashMap::new();

    for (layer_index, layer) in layers.iter().enumerate() {
        let x = origin.x + layer_index as f32 * column_width;
        let slots = layer.len() as f32 + 1.0;
        for (slot, &node) in layer.iter().enumerate() {
            let y = origin.y + vertical_span * (slot as f32 + 1.0) / slots;
            positions.insert(node, Point::new(x, y));
        }
    }

    positions
}
